//! Course file loading.
//!
//! Each non-blank line is `id, title, prereq1, prereq2, ...`. Fields are
//! trimmed; empty prerequisite fields (e.g. trailing commas) are dropped. A
//! bad row is logged and skipped, it never aborts the load.

use crate::course::Course;
use crate::course_table::CourseTable;
use crate::error::LoadError;
use crate::hasher::SlotHasher;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of a load: rows inserted and rows rejected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub rejected: usize,
}

/// Parses one line. `Ok(None)` for blank lines; `line_no` is 1-based and only
/// used in errors.
pub fn parse_course_line(line: &str, line_no: usize) -> Result<Option<Course>, LoadError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let id = fields.next().unwrap_or_default();
    if id.is_empty() {
        return Err(LoadError::MalformedRow {
            line: line_no,
            reason: "missing course id",
        });
    }
    let title = match fields.next() {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(LoadError::MalformedRow {
                line: line_no,
                reason: "missing course title",
            })
        }
    };
    let prerequisites = fields.filter(|p| !p.is_empty());
    Ok(Some(Course::new(id, title, prerequisites)))
}

/// Reads courses from `reader` into `table`. Only I/O failures are errors;
/// rows that are malformed or not valid UTF-8 are counted and skipped.
pub fn read_courses<R, S>(mut reader: R, table: &mut CourseTable<S>) -> Result<LoadReport, std::io::Error>
where
    R: BufRead,
    S: SlotHasher,
{
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("skipping row: line {}: not valid UTF-8 ({})", line_no, e);
                report.rejected += 1;
                continue;
            }
        };
        match parse_course_line(line, line_no) {
            Ok(Some(course)) => {
                table.insert(course);
                report.loaded += 1;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("skipping row: {}", e);
                report.rejected += 1;
            }
        }
    }
    Ok(report)
}

/// Opens `path` and loads it into `table`.
pub fn load_courses<P, S>(path: P, table: &mut CourseTable<S>) -> Result<LoadReport, LoadError>
where
    P: AsRef<Path>,
    S: SlotHasher,
{
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let report = read_courses(BufReader::new(file), table).map_err(io_err)?;
    info!(
        "loaded {} courses from {} ({} rows rejected)",
        report.loaded,
        path.display(),
        report.rejected
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_title_and_prerequisites() {
        let c = parse_course_line("CSCI300, Introduction to Algorithms, CSCI200, MATH201", 1)
            .unwrap()
            .unwrap();
        assert_eq!(c.id(), "CSCI300");
        assert_eq!(c.title(), "Introduction to Algorithms");
        assert_eq!(c.prerequisites(), ["CSCI200", "MATH201"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_course_line("", 1).unwrap().is_none());
        assert!(parse_course_line("   \r", 2).unwrap().is_none());
    }

    #[test]
    fn trailing_commas_drop_empty_prerequisites() {
        let c = parse_course_line("MATH201,Discrete Mathematics,,", 3)
            .unwrap()
            .unwrap();
        assert!(c.prerequisites().is_empty());
    }

    #[test]
    fn missing_fields_are_malformed() {
        match parse_course_line(",Title", 4) {
            Err(LoadError::MalformedRow { line: 4, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match parse_course_line("CSCI100", 5) {
            Err(LoadError::MalformedRow { line: 5, reason }) => {
                assert_eq!(reason, "missing course title")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn read_counts_loaded_and_rejected_rows() {
        let input = "CSCI100,Introduction to Computer Science\n\
                     \n\
                     CSCI101\n\
                     CSCI200,Data Structures,CSCI101\n";
        let mut table = CourseTable::new();
        let report = read_courses(input.as_bytes(), &mut table).unwrap();
        assert_eq!(
            report,
            LoadReport {
                loaded: 2,
                rejected: 1
            }
        );
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.search("CSCI200").unwrap().prerequisites(),
            ["CSCI101"]
        );
    }

    #[test]
    fn final_row_without_newline_is_read() {
        let mut table = CourseTable::new();
        let report = read_courses(&b"CSCI100,Intro\nCSCI200,Data Structures"[..], &mut table).unwrap();
        assert_eq!(report.loaded, 2);
        assert!(table.contains("CSCI200"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut table = CourseTable::new();
        match load_courses("/nonexistent/courses.csv", &mut table) {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/courses.csv"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(table.is_empty());
    }
}
