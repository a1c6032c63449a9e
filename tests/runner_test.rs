mod common;
use common::*;
use squiggly::lang::ErrorCode;

#[test]
fn second_clause_of_a_chain_wins() {
    let r = run(
        ":VARS: {
    int x = 2
    int hit = 0
}
:START: {
    if(x == 1) {
        hit = 1
    }
    else if(x == 2) {
        hit = 2
    }
    else {
        hit = 3
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "hit"), 2);
}

#[test]
fn else_runs_when_no_condition_holds() {
    let r = run(
        ":VARS: {
    int hit = 0
}
:START: {
    if(false) {
        hit = 1
    }
    else {
        hit = 9
    }
    if(true) {
        hit += 1
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "hit"), 10);
}

#[test]
fn back_to_back_ifs_are_separate_chains() {
    let r = run(
        ":VARS: {
    int hits = 0
}
:START: {
    if(true) {
        hits += 1
    }
    if(true) {
        hits += 1
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "hits"), 2);
}

#[test]
fn repeat_evaluates_its_count_once() {
    let r = run(
        ":VARS: {
    int n = 3
    int total = 0
}
:START: {
    repeat(n) {
        n = 100
        total += 1
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "total"), 3);
    assert_eq!(int(&r, "n"), 100);
}

#[test]
fn while_reevaluates_each_iteration() {
    let r = run(
        ":VARS: {
    int x = 0
}
:START: {
    while(x < 5) {
        x += 1
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "x"), 5);
}

#[test]
fn loop_locals_are_discarded_every_iteration() {
    let r = run(
        ":VARS: {
    int total = 0
}
:START: {
    repeat(3) {
        int t = 2
        total += t
    }
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "total"), 6);
    assert!(r.fetch_variable("t", false).unwrap().is_none());
}

#[test]
fn redeclaring_a_variable_is_an_error() {
    let err = try_run(
        ":VARS: {
    int x
}
:START: {
    int x
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn assigning_an_undeclared_variable_is_an_error() {
    let err = try_run(":VARS: {}\n:START: {\nmissing = 1\n}\n:UPDATE: {}", 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn array_cells_read_and_write_by_index() {
    let r = run(
        ":VARS: {
    int xs[3]
    int first = 0
}
:START: {
    xs[0] = 7
    xs[1] = xs[0] + 1
    first = xs[0]
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "first"), 7);
    assert_eq!(int(&r, "xs[1]"), 8);
}

#[test]
fn array_index_out_of_range_is_an_error() {
    let err = try_run(
        ":VARS: {
    int xs[3]
}
:START: {
    xs[3] = 1
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn arrays_cannot_be_declared_with_an_initializer() {
    let err = try_run(
        ":VARS: {
    int xs[3] = 5
}
:START: {}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn zero_size_arrays_are_rejected() {
    let err = try_run(
        ":VARS: {
    int xs[0]
}
:START: {}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn member_access_on_a_scalar_is_an_error() {
    let err = try_run(
        ":VARS: {
    int x
    int y = 0
}
:START: {
    y = x.foo
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn len_reports_through_i_ret() {
    let r = run(
        ":VARS: {
    int xs[4]
    int n = 0
}
:START: {
    ^LEN(xs)
    n = $I_RET
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "n"), 4);
}

#[test]
fn functions_see_globals_and_their_own_parameters_only() {
    let r = run(
        ":VARS: {
    int total = 0
}
add(int amount) {
    total = total + amount
}
:START: {
    int hidden = 50
    add(3)
    add(4)
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "total"), 7);
}

#[test]
fn caller_locals_are_not_visible_in_the_callee() {
    let err = try_run(
        ":VARS: {}
peek() {
    x = 1
}
:START: {
    int x
    peek()
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn arrays_pass_by_reference() {
    let r = run(
        ":VARS: {
    int xs[3]
}
fill(int slots[]) {
    slots[0] = 42
}
:START: {
    fill(xs)
}
:UPDATE: {}",
        0,
    );
    assert_eq!(int(&r, "xs[0]"), 42);
}

#[test]
fn wrong_argument_count_is_an_error() {
    let err = try_run(
        ":VARS: {}
f(int a, int b) {
}
:START: {
    f(1)
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn bool_assignment_copies_the_value() {
    let r = run(
        ":VARS: {
    bool flag = false
    int hit = 0
}
:START: {
    flag = true
    if(flag) {
        hit = 1
    }
}
:UPDATE: {}",
        0,
    );
    assert!(boolean(&r, "flag"));
    assert_eq!(int(&r, "hit"), 1);
}

#[test]
fn bool_rejects_arithmetic_assignment() {
    let err = try_run(
        ":VARS: {
    bool flag
}
:START: {
    flag += true
}
:UPDATE: {}",
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Runner);
}

#[test]
fn update_runs_once_per_frame() {
    let r = run(
        ":VARS: {
    int score = 0
}
:START: {}
:UPDATE: {
    score += 1
}",
        5,
    );
    assert_eq!(int(&r, "score"), 5);
}

#[test]
fn screen_constants_are_seeded() {
    let r = run(":VARS: {}\n:START: {}\n:UPDATE: {}", 0);
    assert_eq!(int(&r, "$SCREEN_W"), 100);
    assert_eq!(int(&r, "$SCREEN_H"), 100);
}
