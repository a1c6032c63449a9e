use super::instr::{AssignOp, Instr, Param, Program};
use super::{
    Error, BUILT_IN_CALL_PREFIX, REPEAT_HEADER, START_HEAD, UPDATE_HEAD, VARS_HEAD, WHILE_HEADER,
};
use std::collections::HashSet;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Converts preprocessed source lines into the program IR, consuming and
/// clearing the line buffer.
///
/// Tokenizing is two-phase: statements are first parsed into a tree (body
/// ranges as child lists), then flattened depth-first while absolute branch
/// and loop targets are assigned in a single pass. A missing system block or
/// a line matching no known syntax pattern is fatal.
pub fn tokenize(lines: &mut Vec<String>) -> Result<Program> {
    let grid = Grid::new(lines.drain(..).collect());

    // pass 1: top-level layout, so function calls can be classified before
    // their declarations are reached
    let layout = discover(&grid)?;
    let names: HashSet<Rc<str>> = layout.functions.iter().map(|f| f.name.clone()).collect();

    let mut program = Program::new();
    let mut chains = 0;

    let vars = layout.require(VARS_HEAD)?;
    let start = layout.require(START_HEAD)?;
    let update = layout.require(UPDATE_HEAD)?;

    for (body, out) in [
        (vars, &mut program.vars_block),
        (start, &mut program.start_block),
        (update, &mut program.update_block),
    ]
    .iter_mut()
    {
        let tree = parse_block(&grid, body.open, body.close, &names)?;
        let mut instrs = vec![];
        flatten(tree, &mut instrs, &mut chains);
        **out = Rc::new(instrs);
    }

    for func in &layout.functions {
        let mut instrs = vec![Instr::FuncName {
            name: func.name.clone(),
            params: parse_params(&func.params, &func.name)?,
        }];
        let tree = parse_block(&grid, func.body.open, func.body.close, &names)?;
        flatten(tree, &mut instrs, &mut chains);
        program.functions.push(Rc::new(instrs));
    }

    Ok(program)
}

/// A character position in the preprocessed line buffer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Pos {
    line: usize,
    col: usize,
}

/// Body range: first character after the opening brace, position of the
/// matching close.
#[derive(Debug, Clone, Copy)]
struct Body {
    open: Pos,
    close: Pos,
}

struct FuncDecl {
    name: Rc<str>,
    params: String,
    body: Body,
}

#[derive(Default)]
struct Layout {
    vars: Option<Body>,
    start: Option<Body>,
    update: Option<Body>,
    functions: Vec<FuncDecl>,
}

impl Layout {
    fn require(&self, head: &str) -> Result<Body> {
        let body = match head {
            VARS_HEAD => self.vars,
            START_HEAD => self.start,
            _ => self.update,
        };
        body.ok_or_else(|| error!(Tokenize; format!("MISSING REQUIRED BLOCK {}", head)))
    }
}

struct Grid {
    lines: Vec<Vec<char>>,
}

impl Grid {
    fn new(lines: Vec<String>) -> Grid {
        Grid {
            lines: lines.iter().map(|l| l.chars().collect()).collect(),
        }
    }

    fn at(&self, pos: Pos) -> Option<char> {
        self.lines.get(pos.line)?.get(pos.col).copied()
    }

    /// One character forward, wrapping to the next line.
    fn step(&self, pos: Pos) -> Pos {
        if pos.col + 1 < self.lines.get(pos.line).map_or(0, |l| l.len()) {
            Pos {
                line: pos.line,
                col: pos.col + 1,
            }
        } else {
            Pos {
                line: pos.line + 1,
                col: 0,
            }
        }
    }

    fn at_end(&self, pos: Pos) -> bool {
        pos.line >= self.lines.len()
    }

    /// Skips to the next position holding a character (line ends are not
    /// characters; preprocessing already removed empty lines).
    fn seek(&self, mut pos: Pos) -> Pos {
        while !self.at_end(pos) && self.at(pos).is_none() {
            pos = Pos {
                line: pos.line + 1,
                col: 0,
            };
        }
        pos
    }

    fn rest_of_line(&self, pos: Pos) -> String {
        match self.lines.get(pos.line) {
            Some(line) => line[pos.col.min(line.len())..].iter().collect(),
            None => String::new(),
        }
    }

    /// Text between two positions on one line, exclusive of `end`.
    fn text(&self, start: Pos, end: Pos) -> String {
        debug_assert_eq!(start.line, end.line);
        match self.lines.get(start.line) {
            Some(line) => line[start.col..end.col].iter().collect(),
            None => String::new(),
        }
    }

    /// Char-stack matcher: `open` must sit on `{`, `[` or `(`; returns the
    /// position of the balancing close. Braces inside quoted substrings are
    /// ignored.
    fn match_pair(&self, open: Pos) -> Result<Pos> {
        let open_ch = self.at(open).unwrap_or(' ');
        let close_ch = match open_ch {
            '{' => '}',
            '[' => ']',
            '(' => ')',
            _ => {
                return Err(error!(Tokenize, open.line + 1; "EXPECTED AN OPENING BRACE"));
            }
        };
        let mut depth = 0usize;
        let mut quote: Option<char> = None;
        let mut pos = open;
        while !self.at_end(pos) {
            if let Some(ch) = self.at(pos) {
                match quote {
                    Some(q) => {
                        if ch == q {
                            quote = None;
                        }
                    }
                    None => {
                        if ch == '"' || ch == '\'' {
                            quote = Some(ch);
                        } else if ch == open_ch {
                            depth += 1;
                        } else if ch == close_ch {
                            depth -= 1;
                            if depth == 0 {
                                return Ok(pos);
                            }
                        }
                    }
                }
            }
            pos = self.step(pos);
        }
        Err(error!(Tokenize, open.line + 1; format!("UNMATCHED '{}'", open_ch)))
    }

    /// Statement text from `pos`: everything up to the first unquoted brace
    /// or the end of the line, whichever comes first.
    fn statement(&self, pos: Pos) -> (String, Option<char>) {
        let mut out = String::new();
        let mut quote: Option<char> = None;
        let mut p = pos;
        while p.line == pos.line {
            let ch = match self.at(p) {
                Some(ch) => ch,
                None => return (out, None),
            };
            match quote {
                Some(q) => {
                    if ch == q {
                        quote = None;
                    }
                }
                None => {
                    if ch == '"' || ch == '\'' {
                        quote = Some(ch);
                    } else if ch == '{' || ch == '}' {
                        return (out, Some(ch));
                    }
                }
            }
            out.push(ch);
            p = self.step(p);
        }
        (out, None)
    }
}

/// Scans the whole file once, recording the three system block bodies and
/// every user function declaration (name, raw parameter list, body range).
/// Bodies are skipped with the brace matcher, so a function may call another
/// function declared later in the file.
fn discover(grid: &Grid) -> Result<Layout> {
    let mut layout = Layout::default();
    let mut pos = grid.seek(Pos { line: 0, col: 0 });

    while !grid.at_end(pos) {
        let rest = grid.rest_of_line(pos);
        if rest.is_empty() {
            pos = grid.seek(Pos {
                line: pos.line + 1,
                col: 0,
            });
            continue;
        }

        if let Some(head) = [VARS_HEAD, START_HEAD, UPDATE_HEAD]
            .iter()
            .find(|h| rest.starts_with(**h))
        {
            let body = read_body(
                grid,
                Pos {
                    line: pos.line,
                    col: pos.col + head.len(),
                },
            )?;
            match *head {
                VARS_HEAD => layout.vars = Some(body),
                START_HEAD => layout.start = Some(body),
                _ => layout.update = Some(body),
            }
            pos = grid.seek(grid.step(body.close));
        } else if let Some(paren) = rest.find('(') {
            let name: String = rest[..paren].to_string();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
                return Err(
                    error!(Tokenize, pos.line + 1; format!("UNRECOGNIZED TOP-LEVEL LINE: {}", rest)),
                );
            }
            let open_paren = Pos {
                line: pos.line,
                col: pos.col + paren,
            };
            let close_paren = grid.match_pair(open_paren)?;
            let params = grid.text(grid.step(open_paren), close_paren);
            let body = read_body(grid, grid.step(close_paren))?;
            layout.functions.push(FuncDecl {
                name: name.into(),
                params,
                body,
            });
            pos = grid.seek(grid.step(body.close));
        } else {
            return Err(
                error!(Tokenize, pos.line + 1; format!("UNRECOGNIZED TOP-LEVEL LINE: {}", rest)),
            );
        }
    }

    Ok(layout)
}

/// Locates the `{` at or after `pos` and its match.
fn read_body(grid: &Grid, pos: Pos) -> Result<Body> {
    let mut p = grid.seek(pos);
    while !grid.at_end(p) {
        match grid.at(p) {
            Some('{') => {
                let close = grid.match_pair(p)?;
                return Ok(Body {
                    open: grid.seek(grid.step(p)),
                    close,
                });
            }
            Some(_) => {
                return Err(error!(Tokenize, p.line + 1; "EXPECTED '{' TO OPEN A BODY"));
            }
            None => p = grid.seek(grid.step(p)),
        }
    }
    Err(error!(Tokenize; "EXPECTED '{' TO OPEN A BODY"))
}

/// Statement tree. Compound bodies stay nested until `flatten` assigns
/// absolute indices.
enum Node {
    Simple(Instr),
    Loop {
        expr: String,
        is_while: bool,
        body: Vec<Node>,
    },
    Chain {
        clauses: Vec<Clause>,
    },
}

struct Clause {
    /// Empty for a bare `else`.
    cond: String,
    /// True for `else if`; false for the leading `if` and for bare `else`.
    if_else: bool,
    is_else: bool,
    body: Vec<Node>,
}

/// Parses the statements of one brace-delimited body range into a tree,
/// descending recursively into nested compound bodies.
fn parse_block(grid: &Grid, open: Pos, close: Pos, names: &HashSet<Rc<str>>) -> Result<Vec<Node>> {
    let mut nodes = vec![];
    let mut pos = grid.seek(open);

    while !grid.at_end(pos) && pos < close {
        let (stmt, delim) = grid.statement(pos);

        if stmt.is_empty() {
            match delim {
                // structural noise; bodies were already ranged by the matcher
                Some(_) => pos = grid.seek(grid.step(pos)),
                None => {
                    pos = grid.seek(Pos {
                        line: pos.line + 1,
                        col: 0,
                    })
                }
            }
            continue;
        }

        if let Some((instr, advance)) = classify_assign(&stmt, pos)? {
            nodes.push(Node::Simple(instr));
            pos = grid.seek(advance_cols(pos, advance));
        } else if stmt.starts_with("if(") {
            let (chain, after) = parse_chain(grid, pos, close, names)?;
            nodes.push(chain);
            pos = grid.seek(after);
        } else if stmt.starts_with(&format!("{}(", REPEAT_HEADER))
            || stmt.starts_with(&format!("{}(", WHILE_HEADER))
        {
            let is_while = stmt.starts_with(WHILE_HEADER);
            let keyword = if is_while { WHILE_HEADER } else { REPEAT_HEADER };
            let open_paren = Pos {
                line: pos.line,
                col: pos.col + keyword.len(),
            };
            let close_paren = grid.match_pair(open_paren)?;
            let expr = grid.text(grid.step(open_paren), close_paren);
            if expr.is_empty() {
                return Err(error!(Tokenize, pos.line + 1; "LOOP CONDITION IS EMPTY"));
            }
            let body = read_body(grid, grid.step(close_paren))?;
            let nested = parse_block(grid, body.open, body.close, names)?;
            nodes.push(Node::Loop {
                expr,
                is_while,
                body: nested,
            });
            pos = grid.seek(grid.step(body.close));
        } else if let Some(instr) = classify_call(&stmt, names, pos)? {
            nodes.push(Node::Simple(instr));
            pos = grid.seek(advance_cols(pos, stmt.chars().count()));
        } else if let Some(instr) = classify_declare(&stmt) {
            nodes.push(Node::Simple(instr));
            pos = grid.seek(advance_cols(pos, stmt.chars().count()));
        } else {
            return Err(error!(Tokenize, pos.line + 1; format!("UNKNOWN LINE: {}", stmt)));
        }
    }

    Ok(nodes)
}

fn advance_cols(pos: Pos, count: usize) -> Pos {
    Pos {
        line: pos.line,
        col: pos.col + count,
    }
}

/// Priority 1: a statement with exactly one unquoted `=` that is not an
/// `if(`/`else if(` header. Two-character operators are matched before the
/// bare `=`. Returns the instruction and the number of columns consumed.
fn classify_assign(stmt: &str, pos: Pos) -> Result<Option<(Instr, usize)>> {
    if stmt.starts_with("if(") || stmt.starts_with("else if(") {
        return Ok(None);
    }

    // one unquoted `=` that is not part of a comparison operator; the
    // two-character assign operators are recognized in the same scan
    let mut eq_count = 0;
    let mut bare_eq = None;
    let mut wide_op = None;
    let mut quote: Option<char> = None;
    let chars: Vec<char> = stmt.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        match quote {
            Some(q) => {
                if *ch == q {
                    quote = None;
                }
            }
            None => {
                if *ch == '"' || *ch == '\'' {
                    quote = Some(*ch);
                } else if *ch == '=' {
                    let prev = if i > 0 { chars[i - 1] } else { ' ' };
                    let next = chars.get(i + 1).copied().unwrap_or(' ');
                    if prev == '=' || prev == '<' || prev == '>' || prev == '!' || next == '=' {
                        continue;
                    }
                    eq_count += 1;
                    match prev {
                        '+' | '-' | '*' | '/' => {
                            if wide_op.is_none() {
                                wide_op = Some(i - 1);
                            }
                        }
                        _ => {
                            if bare_eq.is_none() {
                                bare_eq = Some(i);
                            }
                        }
                    }
                }
            }
        }
    }
    if eq_count != 1 {
        return Ok(None);
    }

    let (op, op_at, op_len) = match wide_op {
        Some(at) => {
            let op = AssignOp::from_str(&stmt[at..at + 2]).unwrap();
            (op, at, 2)
        }
        None => match bare_eq {
            Some(at) => (AssignOp::Set, at, 1),
            None => return Ok(None),
        },
    };

    let dst = stmt[..op_at].to_string();
    let src = stmt[op_at + op_len..].to_string();

    let instr = match dst.find(' ') {
        Some(space) => {
            if op != AssignOp::Set {
                return Err(
                    error!(Tokenize, pos.line + 1; format!("CANNOT DECLARE WITH '{}'", op)),
                );
            }
            Instr::DeclareAssign {
                ty: dst[..space].to_string(),
                dst: dst[space + 1..].to_string(),
                src,
                op,
            }
        }
        None => Instr::Assign { dst, src, op },
    };
    Ok(Some((instr, stmt.chars().count())))
}

/// Priority 4 and 5: user function / object method calls, and `^` built-in
/// calls.
fn classify_call(stmt: &str, names: &HashSet<Rc<str>>, pos: Pos) -> Result<Option<Instr>> {
    let paren = match find_unquoted(stmt, '(') {
        Some(p) => p,
        None => return Ok(None),
    };
    let head = &stmt[..paren];
    let inner = argument_text(stmt, paren, pos)?;

    if let Some(name) = head.strip_prefix(BUILT_IN_CALL_PREFIX) {
        return Ok(Some(Instr::BuiltinCall {
            name: name.into(),
            args: split_args(&inner),
        }));
    }
    let is_user = names.contains(head);
    let is_method = head.contains('.');
    if is_user || is_method {
        return Ok(Some(Instr::Call {
            name: head.into(),
            args: split_args(&inner),
        }));
    }
    Ok(None)
}

/// Text between a call's parentheses, verifying they balance within the
/// statement.
fn argument_text(stmt: &str, paren: usize, pos: Pos) -> Result<String> {
    let chars: Vec<char> = stmt.chars().collect();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, ch) in chars.iter().enumerate().skip(paren) {
        match quote {
            Some(q) => {
                if *ch == q {
                    quote = None;
                }
            }
            None => {
                if *ch == '"' || *ch == '\'' {
                    quote = Some(*ch);
                } else if *ch == '(' {
                    depth += 1;
                } else if *ch == ')' {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(chars[paren + 1..i].iter().collect());
                    }
                }
            }
        }
    }
    Err(error!(Tokenize, pos.line + 1; format!("UNMATCHED '(' IN: {}", stmt)))
}

/// Priority 6: `type name`, optionally `type name[size]`.
fn classify_declare(stmt: &str) -> Option<Instr> {
    let space = stmt.find(' ')?;
    let ty = &stmt[..space];
    let name = &stmt[space + 1..];
    if ty.is_empty() || name.is_empty() {
        return None;
    }
    if !ty.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    // brackets and underscores do not break a name segment
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '[' || c == ']')
    {
        return None;
    }
    Some(Instr::Declare {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

/// Tokenizes one whole if/else-if/else chain starting at the `if(` header.
/// Returns the chain node and the position following the last clause.
fn parse_chain(
    grid: &Grid,
    mut pos: Pos,
    end: Pos,
    names: &HashSet<Rc<str>>,
) -> Result<(Node, Pos)> {
    let mut clauses = vec![];
    let mut if_else = false;

    loop {
        // `pos` sits on `if(` for condition clauses
        let open_paren = Pos {
            line: pos.line,
            col: pos.col + 2,
        };
        let close_paren = grid.match_pair(open_paren)?;
        let cond = grid.text(grid.step(open_paren), close_paren);
        let body = read_body(grid, grid.step(close_paren))?;
        clauses.push(Clause {
            cond,
            if_else,
            is_else: false,
            body: parse_block(grid, body.open, body.close, names)?,
        });
        pos = grid.seek(grid.step(body.close));

        // the chain continues only if the statement immediately after the
        // clause's closing brace starts with `else` and is still inside the
        // enclosing body
        if grid.at_end(pos) || pos >= end {
            break;
        }
        let (stmt, _) = grid.statement(pos);
        if stmt.starts_with("else if(") {
            if_else = true;
            pos = advance_cols(pos, "else ".len());
            continue;
        }
        if stmt == "else" {
            // bare else always terminates the chain
            let body = read_body(grid, advance_cols(pos, "else".len()))?;
            clauses.push(Clause {
                cond: String::new(),
                if_else: false,
                is_else: true,
                body: parse_block(grid, body.open, body.close, names)?,
            });
            pos = grid.seek(grid.step(body.close));
            break;
        }
        break;
    }

    Ok((Node::Chain { clauses }, pos))
}

fn parse_params(raw: &str, func: &Rc<str>) -> Result<Vec<Param>> {
    let mut params = vec![];
    for part in split_args(raw) {
        let space = part.find(' ').ok_or_else(
            || error!(Tokenize; format!("IMPROPER PARAMETER DECLARATION OF FUNCTION {}", func)),
        )?;
        let ty = part[..space].to_string();
        let mut name = part[space + 1..].to_string();
        let is_array = name.ends_with("[]");
        if is_array {
            name.truncate(name.len() - 2);
        }
        if ty.is_empty() || name.is_empty() {
            return Err(
                error!(Tokenize; format!("IMPROPER PARAMETER DECLARATION OF FUNCTION {}", func)),
            );
        }
        params.push(Param { ty, name, is_array });
    }
    Ok(params)
}

/// Splits an argument list on commas, respecting quoted substrings and
/// nested brackets/parentheses.
fn split_args(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![];
    }
    let mut args = vec![];
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for ch in raw.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    current.push(ch);
                }
                '(' | '[' => {
                    depth += 1;
                    current.push(ch);
                }
                ')' | ']' => {
                    depth = depth.saturating_sub(1);
                    current.push(ch);
                }
                ',' if depth == 0 => {
                    args.push(std::mem::take(&mut current));
                }
                _ => current.push(ch),
            },
        }
    }
    args.push(current);
    args
}

fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in s.char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                } else if ch == target {
                    return Some(i);
                }
            }
        }
    }
    None
}

/// Depth-first flatten, assigning absolute indices. A clause's else target
/// is the index of the next clause of its chain, or one past the whole
/// chain for the last clause.
fn flatten(nodes: Vec<Node>, out: &mut Vec<Instr>, chains: &mut usize) {
    for node in nodes {
        match node {
            Node::Simple(instr) => out.push(instr),
            Node::Loop {
                expr,
                is_while,
                body,
            } => {
                let at = out.len();
                out.push(Instr::Loop {
                    expr,
                    is_while,
                    start: 0,
                    end: 0,
                });
                flatten(body, out, chains);
                let end = out.len();
                if let Instr::Loop {
                    start: s, end: e, ..
                } = &mut out[at]
                {
                    *s = at + 1;
                    *e = end;
                }
            }
            Node::Chain { clauses } => {
                let chain = *chains;
                *chains += 1;
                for clause in clauses {
                    let at = out.len();
                    if clause.is_else {
                        out.push(Instr::BranchElse {
                            true_target: 0,
                            else_target: 0,
                            chain,
                        });
                    } else {
                        out.push(Instr::Branch {
                            cond: clause.cond,
                            true_target: 0,
                            else_target: 0,
                            chain,
                            if_else: clause.if_else,
                        });
                    }
                    flatten(clause.body, out, chains);
                    let next = out.len();
                    match &mut out[at] {
                        Instr::Branch {
                            true_target,
                            else_target,
                            ..
                        }
                        | Instr::BranchElse {
                            true_target,
                            else_target,
                            ..
                        } => {
                            *true_target = at + 1;
                            *else_target = next;
                        }
                        _ => unreachable!(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::preprocess;

    fn program(src: &str) -> Program {
        let mut lines: Vec<String> = src.lines().map(|s| s.to_string()).collect();
        preprocess(&mut lines);
        tokenize(&mut lines).unwrap()
    }

    #[test]
    fn chain_targets_link_clauses() {
        let p = program(
            ":VARS:{}\n:START:{}\n:UPDATE:{\nif(0){x=1}\nelse if(1){x=2}\nelse{x=3}\n}",
        );
        let block = &p.update_block;
        match (&block[0], &block[2], &block[4]) {
            (
                Instr::Branch {
                    else_target: e0, ..
                },
                Instr::Branch {
                    else_target: e1,
                    if_else,
                    ..
                },
                Instr::BranchElse {
                    else_target: e2, ..
                },
            ) => {
                assert_eq!(*e0, 2);
                assert_eq!(*e1, 4);
                assert_eq!(*e2, 6);
                assert!(*if_else);
            }
            other => panic!("bad chain shape: {:?}", other),
        }
    }

    #[test]
    fn functions_discovered_before_use() {
        let p = program(
            ":VARS:{}\n:START:{\nlater(5)\n}\n:UPDATE:{}\nlater(int x){\nx+=1\n}",
        );
        assert_eq!(p.function_names(), vec![Rc::from("later")]);
        match &p.start_block[0] {
            Instr::Call { name, args } => {
                assert_eq!(&**name, "later");
                assert_eq!(args, &vec!["5".to_string()]);
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn missing_block_is_fatal() {
        let mut lines = vec![":VARS:{}".to_string(), ":START:{}".to_string()];
        assert!(tokenize(&mut lines).is_err());
    }

    #[test]
    fn declare_with_augmented_assign_is_fatal() {
        let mut lines = vec![
            ":VARS:{".to_string(),
            "int x+=1".to_string(),
            "}".to_string(),
            ":START:{}".to_string(),
            ":UPDATE:{}".to_string(),
        ];
        assert!(tokenize(&mut lines).is_err());
    }
}
