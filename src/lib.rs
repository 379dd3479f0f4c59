//! # cgpa
//!
//! An interactive CGPA calculator. Records subjects (name, letter grade,
//! credit hours) for the current session and computes the credit-weighted
//! grade-point average over them, using a fixed ten-symbol grade scale.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining constant values shared throughout, chiefly the grade scale
pub mod constants;
/// The pure CGPA computation and its error cases
pub mod engine;
/// The letter-grade symbols and their point values
pub mod grade;
/// Subject records and the session ledger that holds them
pub mod ledger;
/// Table and result-line rendering for console output
pub mod render;
/// The session boundary the presentation layer talks to
pub mod session;
/// The interactive line-oriented shell
pub mod shell;

pub use engine::{CalcError, calculate};
pub use grade::Grade;
pub use ledger::{Ledger, Subject};
pub use session::{InputError, Session};
