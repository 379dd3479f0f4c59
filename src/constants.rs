#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The fixed grade scale, in descending order of points.
/// * `0`: the letter-grade symbol as entered by the user
/// * `1`: the point value the symbol contributes per credit hour
pub const GRADE_SCALE: [(&str, u32); 10] = [
    ("O", 10),
    ("A+", 9),
    ("A", 8),
    ("B+", 7),
    ("B", 6),
    ("C+", 5),
    ("C", 4),
    ("D+", 3),
    ("D", 2),
    ("F", 0),
];

/// Decimal places shown when reporting a computed CGPA.
pub const CGPA_PRECISION: usize = 2;
