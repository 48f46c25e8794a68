use clap::Parser;

use course_table::DEFAULT_CAPACITY;

#[derive(Parser, Debug)]
#[command(
    name = "course-planner",
    about = "Load a course catalog into a hash table and browse it",
    version
)]
pub struct Cli {
    /// Course file to load before the menu starts (`id, title, prereq...` per line)
    pub csv_path: Option<String>,

    /// Course to look up right after loading; case-insensitive
    pub course_key: Option<String>,

    /// Initial number of hash buckets
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,
}
