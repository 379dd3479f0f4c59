use cgpa::{Grade, constants::GRADE_SCALE};

#[test]
fn scale_is_exact_and_total() {
    let expected = [
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
    assert_eq!(GRADE_SCALE, expected);
}

#[test]
fn every_scale_symbol_parses_to_its_points() {
    for &(symbol, points) in &GRADE_SCALE {
        let grade: Grade = symbol.parse().expect("scale symbol parses");
        assert_eq!(grade.points(), points, "points for {symbol}");
        assert_eq!(grade.to_string(), symbol);
    }
}

#[test]
fn all_grades_match_the_scale_in_order() {
    assert_eq!(Grade::ALL.len(), GRADE_SCALE.len());
    for (grade, &(symbol, points)) in Grade::ALL.iter().zip(GRADE_SCALE.iter()) {
        assert_eq!(grade.symbol(), symbol);
        assert_eq!(grade.points(), points);
    }
}

#[test]
fn symbols_outside_the_scale_are_rejected() {
    for bad in ["E", "a", "a+", "A-", "", " ", "AA", "o", "10"] {
        assert!(bad.parse::<Grade>().is_err(), "`{bad}` should not parse");
    }
}

#[test]
fn parse_error_names_the_offending_symbol() {
    let err = "Z+".parse::<Grade>().expect_err("reject");
    assert!(err.to_string().contains("Z+"));
}

#[test]
fn grades_serialize_as_their_symbols() {
    let json = serde_json::to_value(Grade::APlus).expect("serialize");
    assert_eq!(json, serde_json::json!("A+"));

    let back: Grade = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, Grade::APlus);
}
