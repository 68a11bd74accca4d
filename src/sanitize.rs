//! HTML Escaping
//!
//! Helper for interpolating untrusted record text into markup.

/// Escape `&`, `<`, `>` and `"` for safe HTML interpolation.
///
/// `None` maps to the empty string. Total: never fails on any input.
pub fn escape_html(input: Option<&str>) -> String {
    let Some(s) = input else {
        return String::new();
    };
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
