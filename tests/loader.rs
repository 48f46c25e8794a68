use course_table::{load_courses, CourseTable, LoadReport};
use std::fs;
use std::path::PathBuf;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("course-table-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("write temp course file");
    path
}

#[test]
fn loads_catalog_file() {
    let path = write_temp(
        "catalog.csv",
        "MATH201,Discrete Mathematics\n\
         CSCI300,Introduction to Algorithms,CSCI200,MATH201\n\
         CSCI350,Operating Systems,CSCI300\n\
         CSCI101,Introduction to Programming in C++,CSCI100\n\
         CSCI100,Introduction to Computer Science\n\
         CSCI301,Advanced Programming in C++,CSCI101\n\
         CSCI400,Large Software Development,CSCI301,CSCI350\n\
         CSCI200,Data Structures,CSCI101\n",
    );
    let mut table = CourseTable::new();
    let report = load_courses(&path, &mut table).expect("load");
    fs::remove_file(&path).ok();

    assert_eq!(report, LoadReport { loaded: 8, rejected: 0 });
    let ordered: Vec<String> = table
        .entries_ordered()
        .into_iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        ordered,
        [
            "CSCI100, Introduction to Computer Science",
            "CSCI101, Introduction to Programming in C++",
            "CSCI200, Data Structures",
            "CSCI300, Introduction to Algorithms",
            "CSCI301, Advanced Programming in C++",
            "CSCI350, Operating Systems",
            "CSCI400, Large Software Development",
            "MATH201, Discrete Mathematics",
        ]
    );
    assert_eq!(
        table.search("CSCI400").unwrap().prerequisites(),
        ["CSCI301".to_string(), "CSCI350".to_string()]
    );
}

#[test]
fn malformed_rows_do_not_abort_the_load() {
    let path = write_temp("bad.csv", "CSCI100,Intro\nCSCI200\n,No id\r\nCSCI300,Algorithms\n");
    let mut table = CourseTable::new();
    let report = load_courses(&path, &mut table).expect("load");
    fs::remove_file(&path).ok();

    assert_eq!(report, LoadReport { loaded: 2, rejected: 2 });
    assert!(table.contains("CSCI100"));
    assert!(table.contains("CSCI300"));
    assert!(!table.contains("CSCI200"));
}

#[test]
fn invalid_utf8_row_is_skipped_and_load_continues() {
    let path = std::env::temp_dir().join(format!("course-table-{}-bytes.csv", std::process::id()));
    fs::write(&path, b"CSCI100,Intro\nCSCI2\xff0,Bad bytes\nCSCI300,Algorithms\n").unwrap();
    let mut table = CourseTable::new();
    let report = load_courses(&path, &mut table).expect("load");
    fs::remove_file(&path).ok();

    assert_eq!(report, LoadReport { loaded: 2, rejected: 1 });
    assert_eq!(table.len(), 2);
    assert!(table.contains("CSCI100"));
    assert!(table.contains("CSCI300"));
}
