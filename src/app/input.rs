//! Input record framing.

use std::io::{self, BufRead};

/// Splits `reader` into records separated by `delimiter`.
///
/// The delimiter is removed, a trailing `\r` is dropped from newline-framed
/// records, and records that are empty or whitespace-only are skipped.
/// Records stay as bytes; decoding them is the parser's job.
pub fn read_records<R: BufRead>(
    reader: R,
    delimiter: u8,
) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader
        .split(delimiter)
        .map(move |record| {
            record.map(|mut bytes| {
                if delimiter == b'\n' && bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                bytes
            })
        })
        .filter(|record| match record {
            Ok(bytes) => !bytes.iter().all(u8::is_ascii_whitespace),
            Err(_) => true,
        })
}

/// Records given directly on the command line.
pub fn arg_records(iris: &[String]) -> impl Iterator<Item = io::Result<Vec<u8>>> + '_ {
    iris.iter().map(|iri| Ok(iri.as_bytes().to_vec()))
}
