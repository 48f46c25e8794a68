use std::io;

use clap::Parser;
use course_table::logger::initialize_logger;
use course_table::{CourseTable, Menu};

mod cli;
use cli::Cli;

fn main() {
    initialize_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("course-planner: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let table = CourseTable::with_capacity(cli.capacity)?;
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout().lock(), table);

    menu.run_with(cli.csv_path.as_deref(), cli.course_key.as_deref())?;
    Ok(())
}
