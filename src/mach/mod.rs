/*!
# Squiggly Machine Module

This Rust module executes the intermediate representation produced by the
`lang` module: variable storage, expression evaluation, the built-in
function table, the built-in object, and the frame loop that drives a
frontend.

*/

mod builtins;
mod convert;
mod eval;
mod frontend;
mod object;
mod runtime;
mod stack;
mod var;

pub use convert::convert_to_variable;
pub use convert::parse_string;
pub use eval::evaluate;
pub use frontend::Frontend;
pub use frontend::NullFrontend;
pub use object::Object;
pub use object::OBJ_COL_RESP_SEGMENTS;
pub use runtime::Region;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Payload;
pub use var::VarType;
pub use var::Variable;

pub use runtime::{
    A_BTN, B_BTN, COLLISION, DTIME, FPS, F_RET, I_RET, JOY_X, JOY_Y, SCREEN_H, SCREEN_W,
};
