//! Stdin reading with a trait-based abstraction for testability.
//!
//! The `text` subcommand falls back to piped input when no argument is
//! given; command assembly goes through [`StdinReader`] so tests can
//! substitute a mock instead of a real terminal.
//!
//! EOF handling is cross-platform: Ctrl+D on Unix, Ctrl+Z then Enter on
//! Windows.

use std::io::{self, BufRead as _, Read};

/// Trait for reading text content from stdin or other sources.
pub trait StdinReader {
    /// Read content until EOF.
    ///
    /// Returns `Ok(Some(content))` if content was read, `Ok(None)` for
    /// empty input, or `Err` on I/O errors.
    fn read_text(&mut self) -> io::Result<Option<String>>;
}

/// Real reader backed by a buffered source, `std::io::stdin()` by default.
pub struct RealStdinReader<R: Read> {
    reader: io::BufReader<R>,
}

impl RealStdinReader<io::Stdin> {
    /// Create a reader over `std::io::stdin()`.
    pub fn new() -> Self {
        Self {
            reader: io::BufReader::new(io::stdin()),
        }
    }
}

impl Default for RealStdinReader<io::Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<R: Read> RealStdinReader<R> {
    /// Create a reader over a custom source, useful for tests with files
    /// or cursors.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: io::BufReader::new(reader),
        }
    }
}

impl<R: Read> StdinReader for RealStdinReader<R> {
    fn read_text(&mut self) -> io::Result<Option<String>> {
        let mut content = String::new();

        // read_line returns Ok(0) on EOF on every platform.
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => content.push_str(&line),
                Err(e) => return Err(e),
            }
        }

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content))
        }
    }
}

/// Mock reader serving predetermined content, for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockStdinReader {
    content: Option<String>,
}

#[cfg(test)]
impl MockStdinReader {
    /// Create a mock serving the given content once.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Create a mock that simulates empty stdin (immediate EOF).
    pub fn empty() -> Self {
        Self { content: None }
    }
}

#[cfg(test)]
impl StdinReader for MockStdinReader {
    fn read_text(&mut self) -> io::Result<Option<String>> {
        Ok(self.content.take())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_mock_reader_serves_content_once() {
        let mut reader = MockStdinReader::new("Hello, world!");
        assert_eq!(
            reader.read_text().expect("mock reads"),
            Some("Hello, world!".to_owned())
        );
        assert_eq!(reader.read_text().expect("mock reads again"), None);
    }

    #[test]
    fn test_mock_reader_empty() {
        let mut reader = MockStdinReader::empty();
        assert_eq!(reader.read_text().expect("mock reads"), None);
    }

    #[test]
    fn test_real_reader_preserves_newlines() {
        let input = "Line 1\nLine 2\n";
        let mut reader = RealStdinReader::with_reader(Cursor::new(input.as_bytes().to_vec()));
        assert_eq!(
            reader.read_text().expect("cursor reads"),
            Some(input.to_owned())
        );
    }

    #[test]
    fn test_real_reader_empty_source() {
        let mut reader = RealStdinReader::with_reader(Cursor::new(Vec::<u8>::new()));
        assert_eq!(reader.read_text().expect("cursor reads"), None);
    }
}
