//! Runs a commands file through the API, one line at a time.
//!
//! Blank lines and lines starting with `#` (after trimming) are skipped. Every
//! other line is executed and handed to the caller's callback together with
//! its 1-based physical line number. A line ends at `\n`, `\r\n` or a lone
//! `\r`. The run is a single sequential pass: a read error stops it, leaving
//! the store as the lines before it left it.

use crate::api::{CipherpadApi, CmdResult};
use crate::error::{CipherpadError, Result};
use crate::store::RecordStore;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_COMMANDS_FILE: &str = "commands.txt";

const COMMENT_PREFIX: char = '#';

/// A line that was executed.
#[derive(Debug)]
pub struct ProcessedLine {
    pub line_number: usize,
    pub content: String,
    pub result: CmdResult,
}

/// Open `path` and run every command in it.
///
/// Returns the number of executed lines. A missing file is
/// [`CipherpadError::FileNotFound`]; other failures are
/// [`CipherpadError::Io`].
pub fn process_file<S, F>(api: &mut CipherpadApi<S>, path: &Path, on_line: F) -> Result<usize>
where
    S: RecordStore,
    F: FnMut(ProcessedLine),
{
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CipherpadError::FileNotFound(path.to_path_buf()),
        _ => CipherpadError::Io(e),
    })?;
    info!(path = %path.display(), "processing commands file");

    let processed = process_reader(api, BufReader::new(file), on_line)?;
    info!(path = %path.display(), processed, "finished commands file");
    Ok(processed)
}

pub fn process_reader<S, R, F>(api: &mut CipherpadApi<S>, reader: R, mut on_line: F) -> Result<usize>
where
    S: RecordStore,
    R: BufRead,
    F: FnMut(ProcessedLine),
{
    let lines = Lines { reader };
    let mut processed = 0;
    for (idx, line) in lines.enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let line_number = idx + 1;
        debug!(line_number, content, "executing line");
        let result = api.execute(content);
        on_line(ProcessedLine {
            line_number,
            content: content.to_string(),
            result,
        });
        processed += 1;
    }
    Ok(processed)
}

/// Like [`BufRead::lines`], but a lone `\r` also ends a line.
struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        read_line(&mut self.reader).transpose()
    }
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            break;
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                buf.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return decode(buf).map(Some);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }

    if buf.is_empty() {
        Ok(None)
    } else {
        decode(buf).map(Some)
    }
}

fn decode(buf: Vec<u8>) -> io::Result<String> {
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn api() -> CipherpadApi<InMemoryStore> {
        CipherpadApi::new(InMemoryStore::new())
    }

    #[test]
    fn skips_blank_and_comment_lines_and_keeps_physical_numbers() {
        let input = "# header\n\n  ADD SHIFT \"a\" o d 1  \n   # indented comment\nPRINT\n";
        let mut api = api();
        let mut seen = Vec::new();

        let processed = process_reader(&mut api, Cursor::new(input), |line| {
            seen.push((line.line_number, line.content));
        })
        .unwrap();

        assert_eq!(processed, 2);
        assert_eq!(
            seen,
            [
                (3, "ADD SHIFT \"a\" o d 1".to_string()),
                (5, "PRINT".to_string())
            ]
        );
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn continues_after_bad_lines() {
        let input = "FOO bar\nADD SHIFT \"a\" o d 1\nREM date != x\nADD SHIFT \"b\" o d 2\n";
        let mut api = api();
        let mut errors = 0;

        process_reader(&mut api, Cursor::new(input), |line| {
            if line.result.has_errors() {
                errors += 1;
            }
        })
        .unwrap();

        assert_eq!(errors, 2);
        assert_eq!(api.store().len(), 2);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let input = "ADD SHIFT \"a\" o d 1\r\nPRINT\r\n";
        let mut api = api();
        let mut contents = Vec::new();
        process_reader(&mut api, Cursor::new(input), |line| contents.push(line.content)).unwrap();
        assert_eq!(contents, ["ADD SHIFT \"a\" o d 1", "PRINT"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let input = "ADD SHIFT \"a\" o d 1\rFOO\r";
        let mut api = api();
        let mut seen = Vec::new();

        process_reader(&mut api, Cursor::new(input), |line| {
            let messages: Vec<String> =
                line.result.messages.into_iter().map(|m| m.content).collect();
            seen.push((line.line_number, line.content, messages));
        })
        .unwrap();

        assert_eq!(
            seen,
            [
                (
                    1,
                    "ADD SHIFT \"a\" o d 1".to_string(),
                    vec!["Added SHIFT cipher for owner 'o'".to_string()]
                ),
                (
                    2,
                    "FOO".to_string(),
                    vec!["Unknown command: FOO".to_string()]
                ),
            ]
        );
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn mixed_line_endings_keep_physical_numbers() {
        let input = "PRINT\r\n\rPRINT\n\r\nPRINT";
        let mut api = api();
        let mut numbers = Vec::new();
        process_reader(&mut api, Cursor::new(input), |line| numbers.push(line.line_number))
            .unwrap();
        assert_eq!(numbers, [1, 3, 5]);
    }

    #[test]
    fn read_error_stops_and_keeps_earlier_effects() {
        let mut input = b"ADD SHIFT \"a\" o d 1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"ADD SHIFT \"b\" o d 1\n");
        let mut api = api();

        let err = process_reader(&mut api, Cursor::new(input), |_| {}).unwrap_err();
        assert!(matches!(err, CipherpadError::Io(_)));
        assert!(err.to_string().starts_with("Error reading file: "));
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.txt");
        let mut api = api();

        let err = process_file(&mut api, &path, |_| {}).unwrap_err();
        assert!(matches!(err, CipherpadError::FileNotFound(_)));
        assert_eq!(err.to_string(), format!("File '{}' not found", path.display()));
    }

    #[test]
    fn processes_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.txt");
        std::fs::write(
            &path,
            "ADD SUBSTITUTION \"abc\" carol 2024-02-02 \"abc\" \"xyz\"\nPRINT\n",
        )
        .unwrap();
        let mut api = api();

        let processed = process_file(&mut api, &path, |_| {}).unwrap();
        assert_eq!(processed, 2);
        assert_eq!(api.store().records()[0].encrypted_text(), "xyz");
    }
}
