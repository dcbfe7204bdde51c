//! Line-oriented scale table parsing and lookup.
//!
//! Records look like `C: C-D-E-F-G-A-B-C`, one scale per line. The whole
//! table is read up front; lookups afterwards are in-memory only.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use cadenza_core::{MajorScale, Note};

/// Major scales for the common roots, from pianoscales.org
const BUILTIN_SCALES: &str = include_str!("../data/basic-scales.txt");

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// The scale reference table, keyed by root note
#[derive(Debug, Clone)]
pub struct ScaleLibrary {
    scales: HashMap<Note, MajorScale>,
}

impl ScaleLibrary {
    /// The embedded reference table. Its well-formedness is covered by tests.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_SCALES).expect("embedded scale table is well-formed")
    }

    /// Read and parse a scale table file. A missing or unreadable file is
    /// fatal for the invocation.
    pub fn from_path(path: &Path) -> Result<Self, LibraryError> {
        let text = fs::read_to_string(path)?;
        let library = Self::parse(&text)?;
        debug!(path = %path.display(), count = library.len(), "loaded scale table");
        Ok(library)
    }

    /// Parse a scale table from text. Blank lines are skipped; any malformed
    /// record fails the whole load, naming its line number.
    pub fn parse(text: &str) -> Result<Self, LibraryError> {
        let mut scales = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let record = raw.trim();
            if record.is_empty() {
                continue;
            }
            let Some((root, listing)) = record.split_once(": ") else {
                return Err(LibraryError::Malformed {
                    line,
                    reason: "missing `: ` between root and scale".into(),
                });
            };
            let root: Note = root
                .parse()
                .map_err(|e| LibraryError::Malformed { line, reason: format!("{e}") })?;
            let notes = listing
                .split('-')
                .map(str::parse)
                .collect::<Result<Vec<Note>, _>>()
                .map_err(|e| LibraryError::Malformed { line, reason: format!("{e}") })?;
            let scale = MajorScale::new(notes)
                .map_err(|e| LibraryError::Malformed { line, reason: format!("{e}") })?;
            scales.insert(root, scale);
        }
        Ok(Self { scales })
    }

    /// Lookup by root. An absent root is a normal miss, not an error; the
    /// caller reports it as "no progression found".
    pub fn scale(&self, root: Note) -> Option<&MajorScale> {
        self.scales.get(&root)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn note(token: &str) -> Note {
        token.parse().unwrap()
    }

    #[test]
    fn parses_records_and_skips_blank_lines() {
        let library = ScaleLibrary::parse("C: C-D-E-F-G-A-B-C\n\nG: G-A-B-C-D-E-F#-G\n").unwrap();
        assert_eq!(library.len(), 2);
        let scale = library.scale(note("G")).unwrap();
        assert_eq!(scale.root(), note("G"));
        assert_eq!(scale.notes()[6], note("F#"));
    }

    #[test]
    fn absent_root_is_a_miss_not_an_error() {
        let library = ScaleLibrary::parse("C: C-D-E-F-G-A-B-C\n").unwrap();
        assert!(library.scale(note("G")).is_none());
        assert!(library.scale(note("C")).is_some());
    }

    #[test]
    fn malformed_separator_names_the_line() {
        let err = ScaleLibrary::parse("C: C-D-E-F-G-A-B-C\nG; G-A-B-C-D-E-F#-G\n").unwrap_err();
        match err {
            LibraryError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_note_token_fails_the_load() {
        assert!(ScaleLibrary::parse("C: C-D-E-Fx-G-A-B-C\n").is_err());
    }

    #[test]
    fn wrong_note_count_fails_the_load() {
        assert!(ScaleLibrary::parse("C: C-D-E-F-G-A-B\n").is_err());
    }

    #[test]
    fn builtin_table_is_well_formed() {
        let library = ScaleLibrary::builtin();
        assert!(!library.is_empty());
        for root in ["C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab", "Db", "Gb"] {
            let scale = library.scale(note(root)).unwrap_or_else(|| panic!("missing {root}"));
            assert_eq!(scale.root(), note(root));
        }
    }

    #[test]
    fn from_path_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "C: C-D-E-F-G-A-B-C").unwrap();
        let library = ScaleLibrary::from_path(file.path()).unwrap();
        assert!(library.scale(note("C")).is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScaleLibrary::from_path(Path::new("/nonexistent/scales.txt")).unwrap_err();
        assert!(matches!(err, LibraryError::Io(_)));
    }
}
