//! The record stored by the table.

use core::fmt;

/// A course record. Immutable once built: fields are only readable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Course {
    id: String,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    pub fn new<I, T, P>(id: I, title: T, prerequisites: P) -> Self
    where
        I: Into<String>,
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-sensitive business key.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Identifiers of other courses, in file order. Not checked for existence.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }
}

/// Listing form: `<id>, <title>`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}
