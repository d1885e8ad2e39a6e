use std::fs::OpenOptions;
use std::io::Write;

use dare_eye_core::ShareFailure;
use dare_eye_core::capability::ShareSink;

use crate::config::{ShareConfig, ShareTarget};

/// Writes shared text to a stream, stdout by default.
pub struct StdoutShare<W: Write> {
    out: W,
}

impl StdoutShare<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> StdoutShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ShareSink for StdoutShare<W> {
    fn share(&mut self, payload: &str) -> Result<(), ShareFailure> {
        writeln!(self.out, "{payload}")
            .and_then(|_| self.out.flush())
            .map_err(|e| ShareFailure::Unavailable(e.to_string()))
    }
}

/// Appends each shared message to a file, separated by a blank line.
#[derive(Debug, Clone)]
pub struct FileShare {
    path: String,
}

impl FileShare {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl ShareSink for FileShare {
    fn share(&mut self, payload: &str) -> Result<(), ShareFailure> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ShareFailure::Unavailable(format!("{}: {e}", self.path)))?;
        writeln!(file, "{payload}\n").map_err(|e| ShareFailure::Unavailable(e.to_string()))
    }
}

/// Build the configured share target.
pub fn share_sink(config: &ShareConfig) -> Box<dyn ShareSink> {
    match &config.target {
        ShareTarget::Stdout => Box::new(StdoutShare::stdout()),
        ShareTarget::File(path) => Box::new(FileShare::new(path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_share_writes_payload_line() {
        let mut sink = StdoutShare::new(Vec::new());
        sink.share("1. Ann — 5\nWinner: Ann").unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "1. Ann — 5\nWinner: Ann\n");
    }

    #[test]
    fn file_share_appends() {
        let path = std::env::temp_dir().join(format!("dare-eye-share-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut sink = FileShare::new(path.to_string_lossy().into_owned());
        sink.share("first").unwrap();
        sink.share("second").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\n\nsecond\n\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_file_is_unavailable() {
        let dir = std::env::temp_dir();
        let mut sink = FileShare::new(dir.to_string_lossy().into_owned());
        assert!(matches!(sink.share("x"), Err(ShareFailure::Unavailable(_))));
    }
}
