//! HTML escaping for user-supplied text.
//!
//! Maud escapes `&`, `<`, `>` and `"` on interpolation but leaves `'`
//! alone. Project names and descriptions come straight from a submission
//! form, so every free-text field goes through [`Text`], which escapes all
//! five characters.
//!
//! ```rust
//! use ezcto_site::escape::Text;
//! use maud::html;
//!
//! let markup = html! { h1 { (Text("Rock 'n' <Roll>")) } };
//! assert_eq!(markup.into_string(), "<h1>Rock &#39;n&#39; &lt;Roll&gt;</h1>");
//! ```

use maud::Render;

/// Free text rendered with full HTML escaping, in element content and
/// attribute values alike.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a str);

impl Render for Text<'_> {
    fn render_to(&self, buffer: &mut String) {
        escape_into(self.0, buffer);
    }
}

/// Append `input` to `buffer` with `& < > " '` replaced by entities.
pub fn escape_into(input: &str, buffer: &mut String) {
    buffer.reserve(input.len());
    for c in input.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#39;"),
            _ => buffer.push(c),
        }
    }
}

/// Escape `input` into a fresh string.
#[cfg(test)]
fn escape_html(input: &str) -> String {
    let mut out = String::new();
    escape_into(input, &mut out);
    out
}
