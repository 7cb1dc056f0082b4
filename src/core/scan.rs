//! Loose key/value scanning for gwrap's JSON-shaped files.
//!
//! gwrap only ever needs string values for one or two keys, so it does not
//! parse JSON. Instead it looks for the quoted key token and takes the next
//! quoted string that follows it:
//!
//! ```text
//! { "gpp_path": "C:/mingw64/bin/g++.exe" }
//!   ^^^^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^
//!   key token   first quoted string after it
//! ```
//!
//! The scan does not look at structure. A key nested anywhere counts, a
//! value that is not a string makes the scan pick up whatever quoted text
//! comes next, and an escaped quote ends the value. Malformed input yields
//! fewer values, never an error.

/// Join the lines of `contents` without their line terminators.
///
/// Values are therefore never split across lines.
pub fn join_lines(contents: &str) -> String {
    contents.lines().collect()
}

/// Find the first quoted string starting at or after byte offset `from`.
///
/// Returns the unquoted value and the offset just past its closing quote.
pub fn quoted_after(text: &str, from: usize) -> Option<(&str, usize)> {
    let rest = text.get(from..)?;
    let open = from + rest.find('"')? + 1;
    let close = open + text[open..].find('"')?;
    Some((&text[open..close], close + 1))
}

/// Value of the first occurrence of `key`.
///
/// Only the first key token is considered; if no quoted string follows it,
/// the result is `None` even when a later occurrence would have a value.
pub fn first_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let token = quote(key);
    let pos = text.find(&token)?;
    quoted_after(text, pos + token.len()).map(|(value, _)| value)
}

/// Values of every occurrence of `key`, in text order.
///
/// Each search resumes one byte after the previous key token, so a quoted
/// value that happens to spell the key is itself treated as a key.
pub fn all_values<'a>(text: &'a str, key: &str) -> Vec<&'a str> {
    let token = quote(key);
    let mut values = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text.get(pos..).and_then(|rest| rest.find(&token)) {
        let found = pos + offset;
        if let Some((value, _)) = quoted_after(text, found + token.len()) {
            values.push(value);
        }
        // The key token starts with an ASCII quote, so found + 1 is a char boundary.
        pos = found + 1;
    }

    values
}

fn quote(key: &str) -> String {
    format!("\"{}\"", key)
}
