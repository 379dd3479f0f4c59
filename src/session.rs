#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::num::ParseIntError;

use tracing::{debug, info};

use crate::{
    engine::{CalcError, calculate},
    grade::{Grade, ParseGradeError},
    ledger::{Ledger, Subject},
};

/// Error returned when raw user input cannot become a [`Subject`].
///
/// Validation happens before the ledger is touched, so a failed add leaves
/// the session exactly as it was. Both variants are recoverable; the user
/// simply retries.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The grade text is not one of the ten scale symbols.
    #[error(transparent)]
    InvalidGrade(#[from] ParseGradeError),

    /// The credits text is not a non-negative integer.
    #[error("invalid credits value `{raw}`; please enter a valid integer")]
    InvalidCredits {
        /// The text that failed to parse.
        raw:    String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}

/// One user's session: the single ledger instance plus the entry points the
/// presentation layer calls. Created empty, discarded on exit, never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The subjects recorded so far.
    ledger: Ledger,
}

impl Session {
    /// Creates a session with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw grade and credits text and, on success, appends a
    /// subject to the ledger and returns a reference to it.
    ///
    /// The name is taken as-is; any string, including the empty string, is a
    /// valid name. On any validation failure the ledger is left unchanged.
    pub fn add_subject(
        &mut self,
        name: &str,
        grade: &str,
        credits: &str,
    ) -> Result<&Subject, InputError> {
        let grade: Grade = grade.parse()?;
        let credits: u32 = credits
            .trim()
            .parse()
            .map_err(|source| InputError::InvalidCredits {
                raw: credits.to_string(),
                source,
            })?;

        let subject = Subject::builder()
            .name(name)
            .grade(grade)
            .credits(credits)
            .build();
        debug!(%subject, total = self.ledger.len() + 1, "recorded subject");
        self.ledger.append(subject);

        Ok(self.ledger.subjects().last().expect("append just pushed"))
    }

    /// Returns the recorded subjects in insertion order, for rendering.
    pub fn subjects(&self) -> &[Subject] {
        self.ledger.subjects()
    }

    /// Computes the CGPA over everything recorded so far.
    pub fn cgpa(&self) -> Result<f64, CalcError> {
        let result = calculate(self.ledger.subjects());
        if let Ok(cgpa) = &result {
            info!(cgpa, subjects = self.ledger.len(), "calculated CGPA");
        }
        result
    }
}
