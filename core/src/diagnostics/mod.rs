//! Plain-text diagnostics.

/// Build the caret diagram for `message` at byte `offset` of `source`.
///
/// The first line is the source itself; the second holds `offset` spaces
/// followed by `^ message`. No trailing newline.
pub fn caret(source: &str, offset: usize, message: &str) -> String {
    format!("{source}\n{:offset$}^ {message}", "")
}
