pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Full input from `--input <file>` or piped stdin, if either was given.
/// `None` means the caller should build the input from flags.
pub fn from_file_or_stdin<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_input(path)?));
    }
    match stdin::read_stdin()? {
        Some(text) => Ok(Some(parse_piped(&text)?)),
        None => Ok(None),
    }
}

/// Piped documents are JSON when they open with `{`, YAML otherwise.
fn parse_piped<T: DeserializeOwned>(text: &str) -> Result<T, Box<dyn std::error::Error>> {
    if text.starts_with('{') {
        Ok(serde_json::from_str(text).map_err(|e| format!("Failed to parse stdin: {e}"))?)
    } else {
        Ok(serde_yaml::from_str(text).map_err(|e| format!("Failed to parse stdin: {e}"))?)
    }
}
