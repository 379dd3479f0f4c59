use cgpa::{CalcError, Grade, Subject, calculate};

fn subject(name: &str, grade: Grade, credits: u32) -> Subject {
    Subject::builder()
        .name(name)
        .grade(grade)
        .credits(credits)
        .build()
}

#[test]
fn weighted_average_over_two_subjects() {
    let subjects = vec![
        subject("Math", Grade::A, 4),
        subject("Physics", Grade::BPlus, 3),
    ];

    // 8*4 + 7*3 = 53 points over 7 credits
    let cgpa = calculate(&subjects).expect("calculate");
    assert!((cgpa - 53.0 / 7.0).abs() < 1e-9);
}

#[test]
fn single_subject_is_its_grade_points() {
    let subjects = vec![subject("Art", Grade::O, 2)];
    let cgpa = calculate(&subjects).expect("calculate");
    assert_eq!(cgpa, 10.0);
}

#[test]
fn result_is_independent_of_order() {
    let forward = vec![
        subject("Math", Grade::A, 4),
        subject("Physics", Grade::BPlus, 3),
        subject("Chemistry", Grade::F, 5),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(
        calculate(&forward).expect("forward"),
        calculate(&reversed).expect("reversed")
    );
}

#[test]
fn zero_credit_entries_carry_no_weight() {
    let with_audit = vec![
        subject("Math", Grade::A, 4),
        subject("Seminar", Grade::F, 0),
    ];
    let without = vec![subject("Math", Grade::A, 4)];

    assert_eq!(
        calculate(&with_audit).expect("with audit"),
        calculate(&without).expect("without")
    );
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(calculate(&[]), Err(CalcError::EmptyLedger));
}

#[test]
fn all_zero_credits_is_an_error() {
    let subjects = vec![
        subject("Seminar", Grade::A, 0),
        subject("Colloquium", Grade::O, 0),
    ];
    assert_eq!(calculate(&subjects), Err(CalcError::ZeroTotalCredits));
}

#[test]
fn huge_credit_values_do_not_overflow() {
    let subjects = vec![subject("Thesis", Grade::O, u32::MAX)];
    let cgpa = calculate(&subjects).expect("calculate");
    assert_eq!(cgpa, 10.0);
}

#[test]
fn huge_credit_sums_do_not_overflow() {
    let subjects = vec![
        subject("Thesis", Grade::O, u32::MAX),
        subject("Defense", Grade::F, u32::MAX),
    ];
    let cgpa = calculate(&subjects).expect("calculate");
    assert_eq!(cgpa, 5.0);
}

#[test]
fn duplicate_subjects_both_count() {
    let subjects = vec![
        subject("Math", Grade::B, 3),
        subject("Math", Grade::B, 3),
    ];
    let cgpa = calculate(&subjects).expect("calculate");
    assert_eq!(cgpa, 6.0);
}
