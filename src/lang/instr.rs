use std::rc::Rc;

/// Index into a flat instruction vector. Branch and loop targets are
/// resolved to these at tokenize time; the runner never looks names up to
/// follow control flow.
pub type Address = usize;

/// ## Intermediate representation
///
/// One record per preprocessed source statement. Compound statements
/// (branches, loops) carry the absolute index range of their body inside
/// the flattened instruction vector they were emitted into.
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    /// User function or object method call.
    Call {
        name: Rc<str>,
        args: Vec<String>,
    },
    /// `^NAME(args)` call into the built-in function table.
    BuiltinCall {
        name: Rc<str>,
        args: Vec<String>,
    },
    /// One `if(..)` or `else if(..)` clause of a chain.
    Branch {
        /// Raw boolean expression, evaluated at run time.
        cond: String,
        /// Index of the first instruction of the clause body.
        true_target: Address,
        /// Index of the next clause of the chain, or one past the whole
        /// chain for the last clause.
        else_target: Address,
        /// Groups the records of one if/else-if/else statement.
        chain: usize,
        /// True for `else if`. A plain `if` seen while scanning a chain
        /// means an unrelated new chain has begun.
        if_else: bool,
    },
    /// Terminal bare `else` clause.
    BranchElse {
        true_target: Address,
        else_target: Address,
        chain: usize,
    },
    Loop {
        /// Raw count (`repeat`) or condition (`while`) expression.
        expr: String,
        is_while: bool,
        start: Address,
        end: Address,
    },
    Assign {
        dst: String,
        src: String,
        op: AssignOp,
    },
    Declare {
        /// Variable name, optionally with an array-size suffix `name[N]`.
        name: String,
        ty: String,
    },
    DeclareAssign {
        dst: String,
        src: String,
        op: AssignOp,
        ty: String,
    },
    /// Header record of a user function body; always element 0 of a
    /// function's instruction vector.
    FuncName {
        name: Rc<str>,
        params: Vec<Param>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignOp {
    Set,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOp {
    pub fn from_str(s: &str) -> Option<AssignOp> {
        match s {
            "=" => Some(AssignOp::Set),
            "+=" => Some(AssignOp::Add),
            "-=" => Some(AssignOp::Sub),
            "*=" => Some(AssignOp::Mul),
            "/=" => Some(AssignOp::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssignOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            AssignOp::Set => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
        };
        write!(f, "{}", s)
    }
}

/// Expected parameter of a user function: `type name` or `type name[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: String,
    pub name: String,
    pub is_array: bool,
}

/// ## Program IR
///
/// The three top-level blocks plus the user function table. Blocks are
/// reference counted so the runner can hold one while mutating its own
/// state; cloning a block handle never copies instructions.
#[derive(Debug, Default)]
pub struct Program {
    pub vars_block: Rc<Vec<Instr>>,
    pub start_block: Rc<Vec<Instr>>,
    pub update_block: Rc<Vec<Instr>>,
    pub functions: Vec<Rc<Vec<Instr>>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Function names in declaration order.
    pub fn function_names(&self) -> Vec<Rc<str>> {
        self.functions
            .iter()
            .filter_map(|f| match f.first() {
                Some(Instr::FuncName { name, .. }) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}
