//! Thin wrapper around `evalexpr`. Expressions reach this module with every
//! variable already substituted by its printed value, so the only inputs
//! are numbers, booleans and operators.

use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Evaluates a fully substituted expression to a number. Booleans come back
/// as 1.0/0.0 and NaN is rejected so a bad expression can never leak into
/// variable storage.
pub fn evaluate(expr: &str) -> Result<f64> {
    let floated = float_literals(expr);
    let value = evalexpr::eval(&floated)
        .map_err(|e| error!(Util; format!("UNABLE TO EVALUATE '{}': {}", expr, e)))?;
    let result = match value {
        evalexpr::Value::Float(v) => v,
        evalexpr::Value::Int(v) => v as f64,
        evalexpr::Value::Boolean(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        other => {
            return Err(
                error!(Util; format!("EXPRESSION '{}' IS NOT A NUMBER: {}", expr, other)),
            );
        }
    };
    if result.is_nan() {
        return Err(error!(Util; format!("EXPRESSION '{}' EVALUATED TO NAN", expr)));
    }
    Ok(result)
}

/// Rewrites bare integer literals as floats so `5/2` divides to 2.5 the way
/// scripts expect. A digit run is left alone when it is glued to an
/// identifier (`log2`), a decimal point, or a namespace path.
fn float_literals(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !c.is_ascii_digit() {
            out.push(c);
            i += 1;
            continue;
        }
        let glued = i > 0 && {
            let p = chars[i - 1];
            p.is_ascii_alphanumeric() || p == '_' || p == '.' || p == ':'
        };
        let mut j = i;
        while j < chars.len() && chars[j].is_ascii_digit() {
            out.push(chars[j]);
            j += 1;
        }
        let followed = chars
            .get(j)
            .map_or(false, |n| *n == '.' || n.is_ascii_alphabetic() || *n == '_');
        if !glued && !followed {
            out.push_str(".0");
        }
        i = j;
    }
    out
}
