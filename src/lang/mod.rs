/*!
# Squiggly Language Module

This Rust module provides linting, preprocessing, and tokenizing of the
Squiggly language. Tokenizing produces the line-addressed intermediate
representation executed by the `mach` module.

*/

#[macro_use]
mod error;
mod instr;
mod linter;
mod tokenize;

pub use error::Error;
pub use error::ErrorCode;
pub use instr::AssignOp;
pub use instr::Instr;
pub use instr::Param;
pub use instr::Program;
pub use linter::lint;
pub use linter::preprocess;
pub use tokenize::tokenize;

/// Header of the global variable block.
pub const VARS_HEAD: &str = ":VARS:";
/// Header of the run-once initialization block.
pub const START_HEAD: &str = ":START:";
/// Header of the per-frame block.
pub const UPDATE_HEAD: &str = ":UPDATE:";

pub const REPEAT_HEADER: &str = "repeat";
pub const WHILE_HEADER: &str = "while";

pub const COMMENT_PREFIX: char = '#';
pub const BUILT_IN_VAR_PREFIX: char = '$';
pub const BUILT_IN_CALL_PREFIX: char = '^';
pub const STRING_CONCAT_CHAR: char = '+';
