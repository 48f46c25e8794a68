//! Interactive course planner loop.
//!
//! Generic over its input and output so a session can be scripted in tests.
//! End of input behaves like choosing exit.

use crate::course::Course;
use crate::course_table::CourseTable;
use crate::hasher::{SlotHasher, SquaringHasher};
use crate::loader::load_courses;
use log::debug;
use std::io::{self, BufRead, Write};

const LOAD: u32 = 1;
const LIST: u32 = 2;
const LOOKUP: u32 = 3;
const EXIT: u32 = 9;

/// Writes a course and its prerequisites as two lines.
pub fn write_course<W: Write>(out: &mut W, course: &Course) -> io::Result<()> {
    writeln!(out, " {}", course)?;
    writeln!(out, " Prerequisites: {}", course.prerequisites().join(", "))
}

pub struct Menu<R, W, S = SquaringHasher> {
    input: R,
    output: W,
    table: CourseTable<S>,
}

impl<R, W, S> Menu<R, W, S>
where
    R: BufRead,
    W: Write,
    S: SlotHasher,
{
    pub fn new(input: R, output: W, table: CourseTable<S>) -> Self {
        Self {
            input,
            output,
            table,
        }
    }

    pub fn table(&self) -> &CourseTable<S> {
        &self.table
    }

    pub fn into_parts(self) -> (R, W, CourseTable<S>) {
        (self.input, self.output, self.table)
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.run_with(None, None)
    }

    /// Like `run`, but after the banner loads `preload` and, if a file was
    /// loaded, looks up `lookup` before showing the menu.
    pub fn run_with(&mut self, preload: Option<&str>, lookup: Option<&str>) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;
        if let Some(path) = preload {
            self.load(path)?;
            if let Some(key) = lookup {
                self.print_course(key)?;
            }
        }
        loop {
            self.print_options()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.parse::<u32>() {
                Ok(LOAD) => {
                    self.prompt("Enter name of CSV file to load: ")?;
                    if let Some(path) = self.read_line()? {
                        self.load(&path)?;
                    }
                }
                Ok(LIST) => self.print_course_list()?,
                Ok(LOOKUP) => {
                    self.prompt("What course do you want to know about? ")?;
                    if let Some(key) = self.read_line()? {
                        self.print_course(&key)?;
                    }
                }
                Ok(EXIT) => break,
                _ => writeln!(self.output, "{} is not a valid option.", choice)?,
            }
        }
        writeln!(self.output, "Thank you for using the course planner!")?;
        self.output.flush()
    }

    /// Loads a course file. A load failure is reported, not returned.
    pub fn load(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.output, "Loading CSV file {}", path)?;
        match load_courses(path, &mut self.table) {
            Ok(report) => {
                if report.rejected > 0 {
                    writeln!(
                        self.output,
                        "Loaded {} courses, skipped {} malformed rows.",
                        report.loaded, report.rejected
                    )
                } else {
                    writeln!(self.output, "Loaded {} courses.", report.loaded)
                }
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    pub fn print_course_list(&mut self) -> io::Result<()> {
        writeln!(self.output, "Here is a sample schedule:")?;
        writeln!(self.output)?;
        for course in self.table.entries_ordered() {
            writeln!(self.output, " {}", course)?;
        }
        Ok(())
    }

    /// Looks up `key` after ASCII-uppercasing it.
    pub fn print_course(&mut self, key: &str) -> io::Result<()> {
        let key = key.to_ascii_uppercase();
        debug!("looking up course {}", key);
        match self.table.search(&key) {
            Some(course) => write_course(&mut self.output, course),
            None => writeln!(self.output, "Course ID {} not found.", key),
        }
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "  1. Load Data Structure.")?;
        writeln!(self.output, "  2. Print Course List.")?;
        writeln!(self.output, "  3. Print Course.")?;
        writeln!(self.output, "  9. Exit")?;
        writeln!(self.output)?;
        self.prompt("What would you like to do? ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
