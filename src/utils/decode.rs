//! Percent-decoding that never fails.
//!
//! - [`decode_safe`]: best available decoding of a URL component
//! - [`decode_pathname`]: segment-wise decoding that keeps `/` boundaries intact
//!
//! Decoding runs as an ordered list of attempts. The strict pass accepts only
//! input where every `%` starts a well-formed escape and the decoded bytes are
//! valid UTF-8. The lenient pass decodes what it can and keeps everything else
//! as the literal text the client sent.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Percent-decode a URL component, falling back gracefully on malformed input.
///
/// # Examples
/// ```
/// use urlmount::decode_safe;
/// assert_eq!(decode_safe("hello%20world"), "hello world");
/// assert_eq!(decode_safe("100%"), "100%");
/// assert_eq!(decode_safe("%E4%B8%AD%FF"), "中%FF");
/// ```
pub fn decode_safe(component: &str) -> Cow<'_, str> {
    if !component.contains('%') {
        return Cow::Borrowed(component);
    }
    match decode_strict(component) {
        Some(decoded) => Cow::Owned(decoded),
        None => Cow::Owned(decode_lenient(component)),
    }
}

/// Decode a pathname segment by segment.
///
/// A `/` produced by decoding (`%2F`) is escaped again, so decoding never
/// introduces a new path boundary.
///
/// # Examples
/// ```
/// use urlmount::decode_pathname;
/// assert_eq!(decode_pathname("/a%2Fb/c"), "/a%2Fb/c");
/// assert_eq!(decode_pathname("/hello%20world/"), "/hello world/");
/// ```
pub fn decode_pathname(pathname: &str) -> String {
    pathname
        .split('/')
        .map(|segment| decode_safe(segment).replace('/', "%2F"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Full decoding, or `None` if any escape is malformed or the bytes are not UTF-8.
fn decode_strict(component: &str) -> Option<String> {
    let bytes = component.as_bytes();
    let well_formed = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .all(|(i, _)| is_escape_at(bytes, i));
    if !well_formed {
        return None;
    }
    percent_decode_str(component)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Decode every well-formed run of escapes that yields UTF-8; keep the rest literal.
fn decode_lenient(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = String::with_capacity(component.len());
    let mut i = 0;

    while i < bytes.len() {
        let run_end = escape_run_end(bytes, i);
        if run_end > i {
            let run = &component[i..run_end];
            let decoded: Vec<u8> = percent_decode_str(run).collect();
            push_decoded_run(&mut out, run, &decoded);
            i = run_end;
            continue;
        }
        match component[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    out
}

/// Append decoded bytes of an escape run; invalid UTF-8 keeps its `%XX` text.
///
/// Every decoded byte maps to exactly three bytes of `run`.
fn push_decoded_run(out: &mut String, run: &str, decoded: &[u8]) {
    let mut pos = 0;
    while pos < decoded.len() {
        match std::str::from_utf8(&decoded[pos..]) {
            Ok(valid) => {
                out.push_str(valid);
                return;
            }
            Err(err) => {
                let valid_end = pos + err.valid_up_to();
                if let Ok(valid) = std::str::from_utf8(&decoded[pos..valid_end]) {
                    out.push_str(valid);
                }
                let invalid_end = err
                    .error_len()
                    .map_or(decoded.len(), |len| valid_end + len);
                out.push_str(&run[valid_end * 3..invalid_end * 3]);
                pos = invalid_end;
            }
        }
    }
}

/// End of the run of consecutive well-formed escapes starting at `start`.
fn escape_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while is_escape_at(bytes, end) {
        end += 3;
    }
    end
}

#[inline]
fn is_escape_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i) == Some(&b'%')
        && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
        && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
}
