//! `^NAME(args)` built-in function table. Results are returned through the
//! `$I_RET` and `$F_RET` buckets rather than a return value.

use super::convert::convert_to_variable;
use super::runtime::Runtime;
use super::var::VarType;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

fn expect_args(name: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(error!(Runner;
            format!("'{}' EXPECTED {} ARGUMENTS, GOT {}", name, count, args.len())));
    }
    Ok(())
}

fn int_arg(rt: &Runtime, arg: &str) -> Result<i32> {
    convert_to_variable(rt, arg, VarType::Integer)?.as_int()
}

pub fn run_function(rt: &mut Runtime, name: &str, args: &[String]) -> Result<()> {
    match name {
        "PRINT" => {
            expect_args(name, args, 1)?;
            let text = convert_to_variable(rt, &args[0], VarType::String)?.as_string()?;
            rt.print(text);
        }
        "LEN" => {
            expect_args(name, args, 1)?;
            let var = rt.fetch_variable(&args[0], true)?.ok_or_else(
                || error!(Runner; format!("VARIABLE '{}' IS NOT IN SCOPE", args[0])),
            )?;
            if !var.is_array {
                return Err(error!(Runner; format!("'{}' IS NOT AN ARRAY", args[0])));
            }
            rt.set_i_ret(var.arr_size as i32)?;
        }
        "I_RAND" => {
            expect_args(name, args, 2)?;
            let min = int_arg(rt, &args[0])?;
            let max = int_arg(rt, &args[1])?;
            if min >= max {
                return Err(error!(Runner;
                    format!("I_RAND RANGE [{}, {}) IS EMPTY", min, max)));
            }
            rt.set_i_ret(rand::thread_rng().gen_range(min..max))?;
        }
        "F_RAND" => {
            expect_args(name, args, 0)?;
            rt.set_f_ret(rand::thread_rng().gen::<f32>())?;
        }
        "DRAW_LINE" => {
            expect_args(name, args, 7)?;
            let x1 = int_arg(rt, &args[0])?;
            let y1 = int_arg(rt, &args[1])?;
            let x2 = int_arg(rt, &args[2])?;
            let y2 = int_arg(rt, &args[3])?;
            let r = int_arg(rt, &args[4])?;
            let g = int_arg(rt, &args[5])?;
            let b = int_arg(rt, &args[6])?;
            rt.screen_mut()
                .draw_line(x1, y1, x2, y2, [r as u8, g as u8, b as u8]);
        }
        _ => {
            return Err(error!(Runner;
                format!("'{}' IS NOT IN THE BUILT-IN FUNCTION LIST", name)));
        }
    }
    Ok(())
}
