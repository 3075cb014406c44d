//! Multi-record SDF handling.
//!
//! Docking tools concatenate one record per pose into a single SDF document,
//! each record terminated by a `$$$$` line. Records are split and summarized
//! only as far as scene composition and reporting need; molecular content is
//! never interpreted here.

use crate::io::error::Error;
use std::path::Path;

const RECORD_DELIMITER: &str = "$$$$";
const FORMAT: &str = "SDF";

/// Iterator over the records of a multi-record SDF document.
///
/// Each yielded record keeps its terminating `$$$$` line so it remains a
/// well-formed single-record document. A trailing record without a terminator
/// is still yielded.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.trim().is_empty() {
            return None;
        }

        let mut offset = 0;
        for line in self.rest.split_inclusive('\n') {
            offset += line.len();
            if line.trim_end() == RECORD_DELIMITER {
                let (record, rest) = self.rest.split_at(offset);
                self.rest = rest;
                return Some(record);
            }
        }

        let record = self.rest;
        self.rest = "";
        Some(record)
    }
}

/// Iterates over the records of a multi-record SDF document.
pub fn records(content: &str) -> Records<'_> {
    Records { rest: content }
}

/// Returns the first record of a multi-record SDF document.
///
/// An empty document yields an empty record; absence of poses is not an error
/// on this side.
pub fn first_record(content: &str) -> &str {
    records(content).next().unwrap_or("")
}

/// Counts the records in a multi-record SDF document.
pub fn record_count(content: &str) -> usize {
    records(content).count()
}

/// Header-level description of one SDF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// Molecule title from the first header line; may be empty.
    pub title: String,
    /// Atom count from the V2000 counts line.
    pub atoms: usize,
    /// Bond count from the V2000 counts line.
    pub bonds: usize,
}

/// Parses the title and V2000 counts line of every record.
///
/// This is the one place record structure is inspected, and it exists for
/// reporting only; scene composition never calls it.
///
/// # Arguments
///
/// * `content` - Whole SDF document.
/// * `path` - Source path used to tag parse errors, when known.
///
/// # Returns
///
/// One [`RecordSummary`] per record, or [`Error::Parse`] pointing at the
/// offending line.
pub fn summarize(content: &str, path: Option<&Path>) -> Result<Vec<RecordSummary>, Error> {
    let mut summaries = Vec::new();
    let mut line_base = 0usize;

    for record in records(content) {
        summaries.push(summarize_record(record, path, line_base)?);
        line_base += record.lines().count();
    }

    Ok(summaries)
}

fn summarize_record(
    record: &str,
    path: Option<&Path>,
    line_base: usize,
) -> Result<RecordSummary, Error> {
    let lines: Vec<&str> = record.lines().collect();
    if lines.len() < 4 {
        return Err(Error::parse(
            FORMAT,
            path.map(Path::to_path_buf),
            line_base + lines.len(),
            "record header is truncated",
        ));
    }

    let title = lines[0].trim().to_string();

    // V2000 counts line: columns 1-3 atoms, 4-6 bonds. Sliced with `get` so a
    // counts line with multibyte characters fails as a parse error, not a panic.
    let counts = lines[3];
    let counts_line_number = line_base + 4;
    let (atom_field, bond_field) = counts.get(0..3).zip(counts.get(3..6)).ok_or_else(|| {
        Error::parse(
            FORMAT,
            path.map(Path::to_path_buf),
            counts_line_number,
            "counts line too short or malformed",
        )
    })?;

    let atoms = atom_field.trim().parse::<usize>().map_err(|_| {
        Error::parse(
            FORMAT,
            path.map(Path::to_path_buf),
            counts_line_number,
            "invalid atom count",
        )
    })?;
    let bonds = bond_field.trim().parse::<usize>().map_err(|_| {
        Error::parse(
            FORMAT,
            path.map(Path::to_path_buf),
            counts_line_number,
            "invalid bond count",
        )
    })?;

    Ok(RecordSummary {
        title,
        atoms,
        bonds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_POSES: &str = "pose_1\n  program\ncomment\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0\n    1.5000    0.0000    0.0000 O   0  0\n  1  2  1  0\nM  END\n$$$$\npose_2\n  program\ncomment\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 N   0  0\nM  END\n$$$$\n";

    #[test]
    fn records_splits_on_delimiter() {
        let recs: Vec<&str> = records(TWO_POSES).collect();
        assert_eq!(recs.len(), 2);
        assert!(recs[0].starts_with("pose_1"));
        assert!(recs[0].trim_end().ends_with(RECORD_DELIMITER));
        assert!(recs[1].starts_with("pose_2"));
    }

    #[test]
    fn records_yields_trailing_record_without_terminator() {
        let content = "pose_1\n  program\ncomment\nM  END\n";
        let recs: Vec<&str> = records(content).collect();
        assert_eq!(recs, [content]);
    }

    #[test]
    fn records_of_empty_document_is_empty() {
        assert_eq!(records("").count(), 0);
        assert_eq!(records("\n  \n").count(), 0);
    }

    #[test]
    fn first_record_returns_leading_record() {
        let first = first_record(TWO_POSES);
        assert!(first.starts_with("pose_1"));
        assert!(!first.contains("pose_2"));
    }

    #[test]
    fn first_record_of_empty_document_is_empty() {
        assert_eq!(first_record(""), "");
    }

    #[test]
    fn record_count_counts_poses() {
        assert_eq!(record_count(TWO_POSES), 2);
    }

    #[test]
    fn delimiter_inside_data_line_is_not_a_split_point() {
        // Only a line consisting of the delimiter terminates a record.
        let content = "pose_1\n  program\n$$$$ in a comment\nM  END\n$$$$\n";
        assert_eq!(record_count(content), 1);
    }

    #[test]
    fn summarize_reads_titles_and_counts() {
        let summaries = summarize(TWO_POSES, None).unwrap();
        assert_eq!(
            summaries,
            [
                RecordSummary {
                    title: "pose_1".to_string(),
                    atoms: 2,
                    bonds: 1,
                },
                RecordSummary {
                    title: "pose_2".to_string(),
                    atoms: 1,
                    bonds: 0,
                },
            ]
        );
    }

    #[test]
    fn summarize_rejects_truncated_record() {
        let err = summarize("pose_1\n$$$$\n", None).unwrap_err();
        match err {
            Error::Parse { format, .. } => assert_eq!(format, FORMAT),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn summarize_rejects_multibyte_counts_line_without_panicking() {
        // Column boundaries fall inside the first '€', which must surface as
        // a parse error at the counts line.
        let content = "pose_1\n  program\ncomment\na€€\nM  END\n$$$$\n";
        let err = summarize(content, None).unwrap_err();
        match err {
            Error::Parse { line_number, .. } => assert_eq!(line_number, 4),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn summarize_reports_line_of_bad_counts_in_second_record() {
        let content = "pose_1\n  program\ncomment\n  1  0  0  0 V2000\nM  END\n$$$$\npose_2\n  program\ncomment\n  X  0  0  0 V2000\nM  END\n$$$$\n";
        let err = summarize(content, None).unwrap_err();
        match err {
            Error::Parse { line_number, .. } => assert_eq!(line_number, 10),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn summarize_empty_document_is_empty() {
        assert!(summarize("", None).unwrap().is_empty());
    }
}
