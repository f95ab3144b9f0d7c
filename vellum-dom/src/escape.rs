use std::fmt::{self, Write};

/// Write `input` into `out` with the HTML-special characters replaced:
/// `&` -> `&amp;`, `<` -> `&lt;`, `>` -> `&gt;`, `"` -> `&quot;`,
/// `'` -> `&#39;`.
///
/// The replacement set and the exact entity spellings are a fixed
/// contract. Every escaped code path in the crate (text content and
/// attribute values) routes through here.
pub fn escape_into<W: Write>(input: &str, out: &mut W) -> fmt::Result {
    let mut plain = 0;
    for (i, byte) in input.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        // Flush the clean run before the special byte. All five specials
        // are single-byte in UTF-8, so the slice bounds stay on char
        // boundaries.
        out.write_str(&input[plain..i])?;
        out.write_str(entity)?;
        plain = i + 1;
    }
    out.write_str(&input[plain..])
}

/// Escape `input` into a fresh `String`.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_into(input, &mut out).expect("String sink does not fail");
    out
}
