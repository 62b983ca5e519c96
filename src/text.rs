//! Task text sanitization.
//!
//! Task text ends up inside the terminal frame verbatim. A string carrying
//! ESC or other control bytes could smuggle escape sequences past the
//! renderer and corrupt the display, so everything below U+0020 (plus DEL
//! and the C1 range) is replaced before it reaches a widget. The visible
//! result is always the literal text the user typed.

/// Replace control characters so the text renders as literal glyphs.
///
/// Tabs become a single space; every other C0/C1 control and DEL becomes
/// U+FFFD. Printable text passes through untouched, including characters
/// like `<`, `>` and `&` that would need escaping in markup contexts.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' => ' ',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}
