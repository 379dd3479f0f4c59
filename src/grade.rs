#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::GRADE_SCALE;

/// A letter grade on the fixed ten-symbol scale.
///
/// The scale is closed: parsing accepts exactly the symbols listed in
/// [`GRADE_SCALE`], so an unknown symbol is rejected before it can ever reach
/// a point lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding, 10 points
    O,
    /// 9 points
    #[serde(rename = "A+")]
    APlus,
    /// 8 points
    A,
    /// 7 points
    #[serde(rename = "B+")]
    BPlus,
    /// 6 points
    B,
    /// 5 points
    #[serde(rename = "C+")]
    CPlus,
    /// 4 points
    C,
    /// 3 points
    #[serde(rename = "D+")]
    DPlus,
    /// 2 points
    D,
    /// Fail, 0 points
    F,
}

impl Grade {
    /// Every grade symbol, in descending order of points.
    pub const ALL: [Grade; 10] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    /// Returns the point value this grade contributes per credit hour.
    pub fn points(self) -> u32 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::CPlus => 5,
            Grade::C => 4,
            Grade::DPlus => 3,
            Grade::D => 2,
            Grade::F => 0,
        }
    }

    /// Returns the symbol as it appears on the scale, eg. `A+`.
    pub fn symbol(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string is not one of the ten grade symbols.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{symbol}` is not a grade symbol; expected one of {}", GRADE_SCALE.iter().map(|(s, _)| *s).join(", "))]
pub struct ParseGradeError {
    /// The text that failed to parse.
    pub symbol: String,
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" => Ok(Grade::O),
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "B+" => Ok(Grade::BPlus),
            "B" => Ok(Grade::B),
            "C+" => Ok(Grade::CPlus),
            "C" => Ok(Grade::C),
            "D+" => Ok(Grade::DPlus),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(ParseGradeError {
                symbol: s.to_string(),
            }),
        }
    }
}
