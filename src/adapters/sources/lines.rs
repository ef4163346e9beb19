//! # Line Source
//!
//! Lines of a text file as an ordered sequence.
//!
//! The whole input is read up front, so iterating twice yields the same
//! lines and iteration itself cannot fail. Line terminators (`\n`, `\r\n`)
//! are stripped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{OrderedSequence, SourceError, SourceResult};

/// Ordered sequence over the lines of a text input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSource {
    lines: Vec<String>,

    /// Where the lines came from, if a file
    path: Option<PathBuf>,
}

impl LineSource {
    /// Read every line of the file at `path`
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = Self::read_lines(BufReader::new(file)).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), lines = lines.len(), "read line source");

        Ok(Self {
            lines,
            path: Some(path.to_path_buf()),
        })
    }

    /// Read every line from an already-open reader
    pub fn from_reader<R: BufRead>(reader: R) -> SourceResult<Self> {
        let lines = Self::read_lines(reader).map_err(|source| SourceError::Read { source })?;
        Ok(Self { lines, path: None })
    }

    /// File this source was read from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
        // `BufRead::lines` strips both `\n` and `\r\n`
        reader.lines().collect()
    }
}

impl OrderedSequence for LineSource {
    type Item = String;

    fn elements(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.lines.iter().cloned())
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn example_file() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/example_file.txt")
    }

    #[test]
    fn test_lines_from_example_file() {
        let source = LineSource::open(example_file()).unwrap();

        assert_eq!(source.len(), 4);
        assert_eq!(source.path(), Some(example_file().as_path()));

        let upcased = source.map(|line| line.trim().to_uppercase());
        assert_eq!(upcased, vec!["THIS", "IS", "A", "TEST"]);
    }

    #[test]
    fn test_lines_strip_terminators() {
        let source = LineSource::from_reader(Cursor::new("one\r\ntwo\nthree")).unwrap();

        assert_eq!(source.map(|line| line), vec!["one", "two", "three"]);
        assert_eq!(source.path(), None);
    }

    #[test]
    fn test_lines_empty_input() {
        let source = LineSource::from_reader(Cursor::new("")).unwrap();

        assert!(source.is_empty());
        assert_eq!(source.inject(0, |count, _| count + 1), 0);
    }

    #[test]
    fn test_lines_inject_total_length() {
        let source = LineSource::from_reader(Cursor::new("this\nis\na\ntest\n")).unwrap();

        assert_eq!(source.inject(0, |total, line| total + line.len()), 11);
        assert_eq!(source.find(|line| line.starts_with('t')), Some("this".to_string()));
    }

    #[test]
    fn test_lines_invalid_utf8_from_reader() {
        let result = LineSource::from_reader(Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe]));

        match result {
            Err(SourceError::Read { source }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("Expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_lines_missing_file() {
        let result = LineSource::open("does/not/exist.txt");

        match result {
            Err(SourceError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("does/not/exist.txt"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
