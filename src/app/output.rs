//! Output record rendering.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{OutputFormat, Terminator};
use crate::iri::{IriRecord, IriSummary};

/// Writes one output record per accepted IRI.
pub struct RecordWriter<W: Write> {
    inner: W,
    format: OutputFormat,
    terminator: Terminator,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, format: OutputFormat, terminator: Terminator) -> Self {
        RecordWriter {
            inner,
            format,
            terminator,
        }
    }

    /// Writes `record` followed by the terminator.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error (with context) if the write fails,
    /// e.g. when the reading end of a pipe has closed.
    pub fn write_record(&mut self, record: &IriRecord) -> Result<()> {
        match self.format {
            OutputFormat::Plain => self
                .inner
                .write_all(record.as_str().as_bytes())
                .context("Failed to write output record")?,
            OutputFormat::Json => {
                let line = serde_json::to_vec(&IriSummary::from(record))
                    .context("Failed to serialize output record")?;
                self.inner
                    .write_all(&line)
                    .context("Failed to write output record")?;
            }
        }
        self.inner
            .write_all(&[self.terminator.as_byte()])
            .context("Failed to write record terminator")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().context("Failed to flush output")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::ParseOptions;

    fn record(raw: &str) -> IriRecord {
        IriRecord::parse(raw, ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_plain_newline() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Plain, Terminator::Newline);
        writer.write_record(&record("http://a.com/x#f")).unwrap();
        writer.write_record(&record("http://b.com/")).unwrap();
        assert_eq!(writer.into_inner(), b"http://a.com/x\nhttp://b.com/\n");
    }

    #[test]
    fn test_plain_nul() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Plain, Terminator::Nul);
        writer.write_record(&record("http://a.com/")).unwrap();
        assert_eq!(writer.into_inner(), b"http://a.com/\0");
    }

    #[test]
    fn test_json_record() {
        let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Json, Terminator::Newline);
        writer
            .write_record(&record("https://www.example.co.uk:8443/p?q=1#frag"))
            .unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        let line = output.strip_suffix('\n').unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["iri"], "https://www.example.co.uk:8443/p?q=1");
        assert_eq!(value["host"], "www.example.co.uk");
        assert_eq!(value["port"], 8443);
        assert_eq!(value["domain_tld"], "co.uk");
        assert_eq!(value["domain_sld"], "example");
        assert_eq!(value["domain_psl"], "example.co.uk");
        assert_eq!(value["fragment"], "frag");
    }
}
