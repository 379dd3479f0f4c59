#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::grade::Grade;

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A single recorded subject
pub struct Subject {
    /// * `name`: the subject name as entered; any string, including empty
    pub name:    String,
    /// * `grade`: the letter grade received
    pub grade:   Grade,
    /// * `credits`: credit hours; zero is accepted and simply carries no weight
    pub credits: u32,
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} credits, {})", self.name, self.credits, self.grade)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// The ordered, append-only collection of subjects for one session.
///
/// Insertion order is preserved for display only; it has no effect on the
/// computed CGPA. Entries are never deduplicated.
pub struct Ledger {
    /// The recorded subjects, oldest first.
    subjects: Vec<Subject>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subject to the end of the ledger. Never fails.
    pub fn append(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Returns all recorded subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Returns the number of recorded subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
