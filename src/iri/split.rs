//! Generic URL grammar decomposition.
//!
//! Splits a string into scheme, authority, path, params, query and fragment
//! without validating or normalizing the pieces. Anything malformed degrades
//! to an empty or absent field; nothing in this module can fail.

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Top-level components of a URL string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub params: Option<String>,
    pub query: String,
    pub fragment: String,
}

/// Pieces of the authority (`user:pass@host:port`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority {
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Decomposes `input` into its components.
///
/// With `with_params` set, a `;params` tail of the last path segment is moved
/// out of `path` for the schemes that use them.
pub fn split_components(input: &str, with_params: bool) -> Components {
    let (scheme, rest) = split_scheme(input);

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let (path, params) = if with_params && PARAM_SCHEMES.contains(&scheme.as_str()) {
        split_params(path)
    } else {
        (path, None)
    };

    Components {
        scheme,
        authority: authority.to_string(),
        path: path.to_string(),
        params: params.map(str::to_string),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Returns the lowercased scheme and the remainder after its `:`.
///
/// A scheme starts with an ASCII letter followed by letters, digits, `+`, `-`
/// or `.`. Input without a valid scheme comes back untouched with an empty
/// scheme.
fn split_scheme(input: &str) -> (String, &str) {
    let Some((candidate, rest)) = input.split_once(':') else {
        return (String::new(), input);
    };
    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (candidate.to_ascii_lowercase(), rest)
    } else {
        (String::new(), input)
    }
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, Option<&str>) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(offset) => {
            let at = segment_start + offset;
            (&path[..at], Some(&path[at + 1..]))
        }
        None => (path, None),
    }
}

/// Splits an authority into credentials, host and port.
///
/// Credentials end at the last `@`. A bracketed IPv6 literal keeps only its
/// inner text as host. Ports that are not plain ASCII digits within `u16`
/// range are dropped.
pub fn split_authority(authority: &str) -> Authority {
    let (userinfo, hostport) = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, authority),
    };

    let (username, password) = match userinfo {
        Some(info) => match info.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass)),
            None => (Some(info), None),
        },
        None => (None, None),
    };

    let (host, port) = split_host_port(hostport);
    let host = Some(host.to_lowercase()).filter(|h| !h.is_empty());

    Authority {
        username: username.map(str::to_string),
        password: password.map(str::to_string),
        host,
        port: parse_port(port),
    }
}

fn split_host_port(hostport: &str) -> (&str, &str) {
    if let Some((_, bracketed)) = hostport.split_once('[') {
        let (host, after) = bracketed.split_once(']').unwrap_or((bracketed, ""));
        let port = after.split_once(':').map(|(_, p)| p).unwrap_or("");
        return (host, port);
    }
    hostport.split_once(':').unwrap_or((hostport, ""))
}

fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
