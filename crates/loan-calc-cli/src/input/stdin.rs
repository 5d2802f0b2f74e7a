use std::io::{self, Read};

/// Piped stdin as trimmed text. `None` when stdin is a terminal or the pipe
/// is empty, so the command falls back to its flags.
pub fn read_stdin() -> io::Result<Option<String>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    read_document(io::stdin().lock())
}

fn read_document<R: Read>(mut reader: R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    let text = buffer.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}
