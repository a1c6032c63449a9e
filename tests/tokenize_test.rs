use squiggly::lang::{preprocess, tokenize, ErrorCode, Instr};

fn program(src: &str) -> squiggly::lang::Program {
    let mut lines: Vec<String> = src.lines().map(|s| s.to_string()).collect();
    preprocess(&mut lines);
    tokenize(&mut lines).unwrap()
}

fn tokenize_err(src: &str) -> squiggly::lang::Error {
    let mut lines: Vec<String> = src.lines().map(|s| s.to_string()).collect();
    preprocess(&mut lines);
    tokenize(&mut lines).unwrap_err()
}

#[test]
fn system_blocks_land_in_their_slots() {
    let p = program(
        ":VARS: {\nint x = 1\n}\n:START: {\nx = 2\n}\n:UPDATE: {\nx += 1\n}",
    );
    assert_eq!(p.vars_block.len(), 1);
    assert_eq!(p.start_block.len(), 1);
    assert_eq!(p.update_block.len(), 1);
    match &p.vars_block[0] {
        Instr::DeclareAssign { ty, dst, src, .. } => {
            assert_eq!(ty, "int");
            assert_eq!(dst, "x");
            assert_eq!(src, "1");
        }
        other => panic!("expected declare-assign, got {:?}", other),
    }
}

#[test]
fn loop_targets_cover_the_body() {
    let p = program(":VARS: {}\n:START: {\nrepeat(3) {\nx = 1\ny = 2\n}\n}\n:UPDATE: {}");
    match &p.start_block[0] {
        Instr::Loop {
            expr,
            is_while,
            start,
            end,
        } => {
            assert_eq!(expr, "3");
            assert!(!is_while);
            assert_eq!(*start, 1);
            assert_eq!(*end, 3);
        }
        other => panic!("expected loop, got {:?}", other),
    }
}

#[test]
fn methods_and_builtins_classify_as_calls() {
    let p = program(
        ":VARS: {}\n:START: {\nplayer.move(1, 2, false)\n^PRINT(\"hi\")\n}\n:UPDATE: {}",
    );
    match &p.start_block[0] {
        Instr::Call { name, args } => {
            assert_eq!(&**name, "player.move");
            assert_eq!(args.len(), 3);
        }
        other => panic!("expected call, got {:?}", other),
    }
    match &p.start_block[1] {
        Instr::BuiltinCall { name, args } => {
            assert_eq!(&**name, "PRINT");
            assert_eq!(args, &vec!["\"hi\"".to_string()]);
        }
        other => panic!("expected builtin call, got {:?}", other),
    }
}

#[test]
fn commas_inside_strings_do_not_split_arguments() {
    let p = program(":VARS: {}\n:START: {\n^PRINT(\"a, b\" + c)\n}\n:UPDATE: {}");
    match &p.start_block[0] {
        Instr::BuiltinCall { args, .. } => assert_eq!(args, &vec!["\"a, b\"+c".to_string()]),
        other => panic!("expected builtin call, got {:?}", other),
    }
}

#[test]
fn missing_update_block_is_fatal() {
    let err = tokenize_err(":VARS: {}\n:START: {}");
    assert_eq!(err.code(), ErrorCode::Tokenize);
}

#[test]
fn unknown_statement_is_fatal_with_its_line() {
    let err = tokenize_err(":VARS: {}\n:START: {\n???\n}\n:UPDATE: {}");
    assert_eq!(err.code(), ErrorCode::Tokenize);
    assert_eq!(err.line_number(), Some(3));
}

#[test]
fn empty_loop_condition_is_fatal() {
    let err = tokenize_err(":VARS: {}\n:START: {\nrepeat() {\n}\n}\n:UPDATE: {}");
    assert_eq!(err.code(), ErrorCode::Tokenize);
}

#[test]
fn call_to_unknown_name_is_fatal() {
    let err = tokenize_err(":VARS: {}\n:START: {\nnope(1)\n}\n:UPDATE: {}");
    assert_eq!(err.code(), ErrorCode::Tokenize);
}
