use squiggly::lang::{lint, preprocess, ErrorCode};

fn lines(src: &str) -> Vec<String> {
    src.lines().map(|s| s.to_string()).collect()
}

#[test]
fn balanced_program_lints_clean() {
    let src = lines(":VARS: {\n  int xs[3]\n}\n:START: {\n  s = \"ok {\"\n}\n:UPDATE: {}");
    assert!(lint(&src).is_ok());
}

#[test]
fn unmatched_close_brace_names_its_line() {
    let src = lines(":VARS: {}\n}");
    let err = lint(&src).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Lint);
    assert_eq!(err.line_number(), Some(2));
}

#[test]
fn unclosed_open_names_the_opening_line() {
    let src = lines(":VARS: {\nint x = 1\n:START: {}");
    let err = lint(&src).unwrap_err();
    assert_eq!(err.line_number(), Some(1));
}

#[test]
fn quote_must_close_on_its_own_line() {
    let src = lines("s = \"oops\nt = 1");
    let err = lint(&src).unwrap_err();
    assert_eq!(err.line_number(), Some(1));
}

#[test]
fn brackets_in_comments_and_strings_are_ignored() {
    let src = lines("x = 1 # } ]\ns = \"}}\"");
    assert!(lint(&src).is_ok());
}

#[test]
fn preprocess_strips_comments_and_spacing() {
    let mut src = lines("int score = 0   # points\n\t\ts = \"a b\"");
    preprocess(&mut src);
    assert_eq!(src, lines("int score=0\ns=\"a b\""));
}
