mod common;
use common::*;
use squiggly::lang::ErrorCode;

#[test]
fn division_is_real_then_narrowed() {
    let r = run(
        ":VARS: {
    int half = 5 / 2
    double exact = 5 / 2
    float single = 1 / 4
}
:START: {}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "half"), 2);
    assert_eq!(double(&r, "exact"), 2.5);
    assert_eq!(float(&r, "single"), 0.25);
}

#[test]
fn word_operators_read_naturally() {
    let r = run(
        ":VARS: {
    bool any = true or false
    bool both = true and false
    bool diff = true xor true
    bool neg = not(false)
}
:START: {}
:UPDATE: {}",
        0,
    );
    assert!(boolean(&r, "any"));
    assert!(!boolean(&r, "both"));
    assert!(!boolean(&r, "diff"));
    assert!(boolean(&r, "neg"));
}

#[test]
fn math_words_map_to_functions() {
    let r = run(
        ":VARS: {
    float root = sqrt(16)
    float mag = abs(0 - 5)
    int up = ceil(1.2)
}
:START: {}
:UPDATE: {}",
        0,
    );
    assert_eq!(float(&r, "root"), 4.0);
    assert_eq!(float(&r, "mag"), 5.0);
    assert_eq!(int(&r, "up"), 2);
}

#[test]
fn comparisons_produce_booleans() {
    let r = run(
        ":VARS: {
    bool lt = 3 < 2
    int as_int = (3 > 2)
}
:START: {}
:UPDATE: {}",
        0,
    );
    assert!(!boolean(&r, "lt"));
    assert_eq!(int(&r, "as_int"), 1);
}

#[test]
fn variables_substitute_into_expressions() {
    let r = run(
        ":VARS: {
    int a = 4
    float b = 2.5
    float sum = a + b * 2
}
:START: {}
:UPDATE: {}",
        0,
    );
    assert_eq!(float(&r, "sum"), 9.0);
}

#[test]
fn nan_results_are_fatal() {
    let err = try_run(
        ":VARS: {
    float r = sqrt(0 - 16)
}
:START: {}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Util);
}

#[test]
fn malformed_expressions_are_fatal() {
    let err = try_run(
        ":VARS: {
    int x = 2 + *
}
:START: {}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Util);
}

#[test]
fn builtin_readings_are_numbers() {
    let r = run(
        ":VARS: {
    float jx = 0
}
:START: {}
:UPDATE: {
    jx = $JOY_X + 1
}",
        1,
    );
    assert_eq!(float(&r, "jx"), 1.0);
}
