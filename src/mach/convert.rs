//! String parsing and expression conversion. Every argument, condition and
//! assignment source in the IR is raw text; this module turns that text
//! into a typed [`Variable`] by substituting variable references and
//! handing the rest to the expression evaluator.

use super::eval;
use super::runtime::Runtime;
use super::var::{Payload, VarType, Variable};
use crate::error;
use crate::lang::{Error, BUILT_IN_VAR_PREFIX, STRING_CONCAT_CHAR};

type Result<T> = std::result::Result<T, Error>;

/// True for characters that may continue a variable reference.
fn is_reference_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == BUILT_IN_VAR_PREFIX || c == '_' || c == '.' || c == '['
}

/// Collects one variable reference starting at `i`: an identifier run that
/// may continue through dots and complete `[...]` index groups. Returns the
/// reference text and the index of the first character after it.
fn collect_reference(chars: &[char], mut i: usize) -> (String, usize) {
    let mut name = String::new();
    while i < chars.len() {
        if chars[i] == '[' {
            let mut depth = 0;
            while i < chars.len() {
                let c = chars[i];
                if c == '[' {
                    depth += 1;
                } else if c == ']' {
                    depth -= 1;
                }
                name.push(c);
                i += 1;
                if depth == 0 {
                    break;
                }
            }
        } else {
            name.push(chars[i]);
            i += 1;
        }
        match chars.get(i) {
            Some(&c) if is_reference_char(c) => {}
            _ => break,
        }
    }
    (name, i)
}

/// Prints a variable's value. In eval context booleans print as
/// `true`/`false` and whole floats keep a `.0` so the evaluator sees them
/// as numbers; in string context booleans print as `1`/`0`.
fn stringify(var: &Variable, for_eval: bool) -> Result<String> {
    let out = match &*var.cell.borrow() {
        Payload::String(s) => s.clone(),
        Payload::Integer(v) => v.to_string(),
        Payload::Double(v) => number_text(format!("{}", v), for_eval),
        Payload::Float(v) => number_text(format!("{}", v), for_eval),
        Payload::Bool(b) => match (for_eval, b) {
            (true, true) => "true".to_string(),
            (true, false) => "false".to_string(),
            (false, true) => "1".to_string(),
            (false, false) => "0".to_string(),
        },
        // objects and whole arrays have no printable value
        _ => "1".to_string(),
    };
    Ok(out)
}

fn number_text(mut s: String, for_eval: bool) -> String {
    if for_eval && s.chars().all(|c| c.is_ascii_digit() || c == '-') {
        s.push_str(".0");
    }
    s
}

fn fetch_required(rt: &Runtime, name: &str) -> Result<Variable> {
    rt.fetch_variable(name, false)?
        .ok_or_else(|| error!(Util; format!("VARIABLE '{}' IS NOT IN SCOPE", name)))
}

/// ## ParseString
///
/// Builds a runtime string from a literal fragment. Quoted regions (either
/// delimiter) are copied verbatim; outside quotes, variable references are
/// resolved and stringified, and `+` concatenates pieces. Anything else is
/// a structuring error.
pub fn parse_string(rt: &Runtime, input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' || c == '\'' {
            let quote = c;
            i += 1;
            loop {
                match chars.get(i) {
                    None => {
                        return Err(error!(Util;
                            format!("UNCLOSED STRING LITERAL IN '{}'", input)));
                    }
                    Some(&ch) if ch == quote => break,
                    Some(&ch) => out.push(ch),
                }
                i += 1;
            }
            i += 1;
        } else if c == STRING_CONCAT_CHAR {
            i += 1;
        } else if is_reference_char(c) {
            let (name, next) = collect_reference(&chars, i);
            let var = fetch_required(rt, &name)?;
            out.push_str(&stringify(&var, false)?);
            i = next;
        } else {
            return Err(error!(Util; format!("INVALID STRUCTURING OF STRING '{}'", input)));
        }
    }
    Ok(out)
}

/// Replaces every variable reference in `input` with its printed value,
/// leaving operators and literals untouched.
fn substitute(rt: &Runtime, input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_alphabetic() || c == BUILT_IN_VAR_PREFIX || c == '_' {
            let (name, next) = collect_reference(&chars, i);
            let var = fetch_required(rt, &name)?;
            out.push_str(&stringify(&var, true)?);
            i = next;
        } else {
            out.push(c);
            i += 1;
        }
    }
    Ok(out)
}

/// ## convertToVariable
///
/// Turns raw statement text into a typed value.
///
/// * Object and Text expectations resolve `input` as a variable name and
///   alias its payload; no copy is made.
/// * A string expectation, or any input containing a quote, goes through
///   [`parse_string`].
/// * Everything else is treated as a numeric or boolean expression:
///   references are substituted, the result is evaluated, and the number
///   is narrowed to the expected type.
pub fn convert_to_variable(rt: &Runtime, input: &str, expected: VarType) -> Result<Variable> {
    let var = if expected == VarType::Object || expected == VarType::Text {
        fetch_required(rt, input)?
    } else if expected == VarType::String || input.contains('"') || input.contains('\'') {
        Variable::new("tmp", VarType::String, Payload::String(parse_string(rt, input)?))
    } else {
        let result = eval::evaluate(&substitute(rt, input)?)?;
        let payload = match expected {
            VarType::Double => Payload::Double(result),
            VarType::Float => Payload::Float(result as f32),
            VarType::Bool => Payload::Bool(result != 0.0),
            // untyped conversions default to int
            _ => Payload::Integer(result as i32),
        };
        Variable::new("tmp", expected, payload)
    };
    if expected != VarType::None && var.ty != expected {
        return Err(error!(Util;
            format!("CANNOT CONVERT '{}' TO EXPECTED TYPE '{}'", input, expected.name())));
    }
    Ok(var)
}
