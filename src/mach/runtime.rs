use super::builtins;
use super::convert::convert_to_variable;
use super::frontend::Frontend;
use super::object::{self, Object};
use super::stack::Stack;
use super::var::{Payload, VarType, Variable};
use crate::error;
use crate::gfx::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::lang::{self, AssignOp, Error, Instr, Param, Program, BUILT_IN_VAR_PREFIX};
use std::rc::Rc;
use std::time::Instant;

type Result<T> = std::result::Result<T, Error>;

pub const JOY_X: &str = "JOY_X";
pub const JOY_Y: &str = "JOY_Y";
pub const A_BTN: &str = "A_BTN";
pub const B_BTN: &str = "B_BTN";
pub const FPS: &str = "FPS";
pub const DTIME: &str = "DTIME";
pub const SCREEN_W: &str = "SCREEN_W";
pub const SCREEN_H: &str = "SCREEN_H";
pub const COLLISION: &str = "COLLISION";
pub const F_RET: &str = "F_RET";
pub const I_RET: &str = "I_RET";

/// Word operators and function names scripts may use in expressions,
/// seeded as global string variables whose value is the spelling the
/// expression evaluator understands.
const EVAL_SEEDS: &[(&str, &str)] = &[
    ("and", "&&"),
    ("or", "||"),
    ("xor", "!="),
    ("not", "!"),
    ("sqrt", "math::sqrt"),
    ("ceil", "ceil"),
    ("cos", "math::cos"),
    ("sin", "math::sin"),
    ("tan", "math::tan"),
    ("abs", "math::abs"),
];

/// Memory region a block's declarations land in. The vars-block populates
/// globals; everything else runs on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Global,
    Stack,
}

/// ## Runtime
///
/// Executes a tokenized [`Program`]: seeds constants and built-in
/// variables, runs the vars and start blocks once, then runs the update
/// block every frame until the frontend reports exit.
pub struct Runtime {
    program: Program,
    gvars: Stack<Variable>,
    svars: Stack<Variable>,
    bvars: Stack<Variable>,
    /// Base of the innermost function frame; name lookup on the stack
    /// never reads below it.
    curr_stack_frame: usize,
    next_object_id: u64,
    screen: Screen,
    output: Vec<String>,
    last_frame: Instant,
    running: bool,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Runtime {{ globals: {}, stack: {}, frame: {} }}",
            self.gvars.len(),
            self.svars.len(),
            self.curr_stack_frame
        )
    }
}

fn io_err(e: std::io::Error) -> Error {
    error!(Runner; format!("FRONTEND FAILURE: {}", e))
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            gvars: Stack::new("GLOBAL VARIABLE LIMIT REACHED"),
            svars: Stack::new("STACK OVERFLOW"),
            bvars: Stack::new("BUILT-IN VARIABLE LIMIT REACHED"),
            curr_stack_frame: 0,
            next_object_id: 0,
            screen: Screen::new(),
            output: Vec::new(),
            last_frame: Instant::now(),
            running: false,
        }
    }

    /// Full front half of the pipeline: lint, preprocess, tokenize.
    pub fn from_source(source: &str) -> Result<Runtime> {
        let mut lines: Vec<String> = source.lines().map(|l| l.to_string()).collect();
        lang::lint(&lines)?;
        lang::preprocess(&mut lines);
        let program = lang::tokenize(&mut lines)?;
        Ok(Runtime::new(program))
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Queues a line for the frontend; drained once per frame.
    pub fn print(&mut self, line: String) {
        self.output.push(line);
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::replace(&mut self.output, Vec::new())
    }

    /// Runs the whole program against a frontend until its exit control
    /// fires or an error unwinds.
    pub fn execute(&mut self, frontend: &mut dyn Frontend) -> Result<()> {
        self.prepare()?;
        frontend.init().map_err(io_err)?;
        self.last_frame = Instant::now();
        self.running = true;
        while self.running {
            if let Err(e) = self.run_frame(frontend) {
                let _ = frontend.clean_up();
                return Err(e);
            }
            if frontend.exit_btn() {
                self.running = false;
            }
        }
        self.flush_mem();
        frontend.clean_up().map_err(io_err)?;
        Ok(())
    }

    /// Resets memory, seeds variables and runs the vars and start blocks.
    pub fn prepare(&mut self) -> Result<()> {
        self.flush_mem();
        self.execute_vars()?;
        self.execute_start()
    }

    /// One frame: sample input, refresh built-ins, clear, run the update
    /// block, flush output, present.
    pub fn run_frame(&mut self, frontend: &mut dyn Frontend) -> Result<()> {
        frontend.update_readings();
        self.set_builtin_vars(frontend)?;
        self.screen.clear();
        self.execute_update()?;
        for line in self.output.drain(..) {
            frontend.print(&line);
        }
        frontend.present(&self.screen).map_err(io_err)?;
        Ok(())
    }

    fn flush_mem(&mut self) {
        self.gvars.clear();
        self.svars.clear();
        self.bvars.clear();
        self.curr_stack_frame = 0;
        self.next_object_id = 0;
        self.output.clear();
    }

    /// Seeds the constant words and built-in variables, then runs the
    /// vars-block into the global region.
    fn execute_vars(&mut self) -> Result<()> {
        self.gvars
            .push(Variable::new("true", VarType::Bool, Payload::Bool(true)))?;
        self.gvars
            .push(Variable::new("false", VarType::Bool, Payload::Bool(false)))?;
        for (word, spelling) in EVAL_SEEDS {
            self.gvars.push(Variable::new(
                word,
                VarType::String,
                Payload::String((*spelling).to_string()),
            ))?;
        }

        self.bvars
            .push(Variable::new(JOY_X, VarType::Float, Payload::Float(0.0)))?;
        self.bvars
            .push(Variable::new(JOY_Y, VarType::Float, Payload::Float(0.0)))?;
        self.bvars
            .push(Variable::new(A_BTN, VarType::Bool, Payload::Bool(false)))?;
        self.bvars
            .push(Variable::new(B_BTN, VarType::Bool, Payload::Bool(false)))?;
        self.bvars
            .push(Variable::new(FPS, VarType::Integer, Payload::Integer(0)))?;
        self.bvars
            .push(Variable::new(DTIME, VarType::Float, Payload::Float(0.0)))?;
        self.bvars.push(Variable::new(
            SCREEN_W,
            VarType::Integer,
            Payload::Integer(SCREEN_WIDTH as i32),
        ))?;
        self.bvars.push(Variable::new(
            SCREEN_H,
            VarType::Integer,
            Payload::Integer(SCREEN_HEIGHT as i32),
        ))?;
        self.bvars
            .push(Variable::new(COLLISION, VarType::Bool, Payload::Bool(false)))?;
        self.bvars
            .push(Variable::new(F_RET, VarType::Float, Payload::Float(0.0)))?;
        self.bvars
            .push(Variable::new(I_RET, VarType::Integer, Payload::Integer(0)))?;

        let block = self.program.vars_block.clone();
        let base = self.gvars.len();
        self.run_block(block, Region::Global, base, false, 0, 0)
    }

    fn execute_start(&mut self) -> Result<()> {
        let block = self.program.start_block.clone();
        self.run_block(block, Region::Stack, 0, true, 0, 0)
    }

    fn execute_update(&mut self) -> Result<()> {
        let block = self.program.update_block.clone();
        self.run_block(block, Region::Stack, 0, true, 0, 0)
    }

    fn set_builtin_vars(&mut self, frontend: &dyn Frontend) -> Result<()> {
        let dtime = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
        let fps = if dtime > 0.0 { (1.0 / dtime) as i32 } else { 0 };
        self.set_builtin(JOY_X, Payload::Float(frontend.hor_axis()))?;
        self.set_builtin(JOY_Y, Payload::Float(frontend.vert_axis()))?;
        self.set_builtin(A_BTN, Payload::Bool(frontend.a_btn()))?;
        self.set_builtin(B_BTN, Payload::Bool(frontend.b_btn()))?;
        self.set_builtin(FPS, Payload::Integer(fps))?;
        self.set_builtin(DTIME, Payload::Float(dtime))
    }

    fn builtin_var(&self, name: &str) -> Result<Variable> {
        for var in self.bvars.iter() {
            if &*var.name == name {
                return Ok(var.clone());
            }
        }
        Err(error!(Runner; format!("BUILT-IN VARIABLE '{}' IS MISSING", name)))
    }

    fn set_builtin(&self, name: &str, payload: Payload) -> Result<()> {
        *self.builtin_var(name)?.cell.borrow_mut() = payload;
        Ok(())
    }

    pub fn set_i_ret(&self, value: i32) -> Result<()> {
        self.set_builtin(I_RET, Payload::Integer(value))
    }

    pub fn set_f_ret(&self, value: f32) -> Result<()> {
        self.set_builtin(F_RET, Payload::Float(value))
    }

    /// ## Variable resolution
    ///
    /// Splits an optional `.member` suffix and an optional `[index]`
    /// suffix off `name`, then searches: built-ins when the name carries
    /// the `$` prefix, otherwise the stack top-down to the current frame
    /// base, then globals. Arrays are dereferenced to one element unless
    /// the caller asked for the whole array; a member suffix on an object
    /// resolves to the object's field.
    pub fn fetch_variable(&self, name: &str, allow_arrays: bool) -> Result<Option<Variable>> {
        if name.is_empty() {
            return Ok(None);
        }
        let (name, member) = match name.find('.') {
            Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
            None => (name, None),
        };
        let (base, index) = if name.contains('[') {
            let (base, index) = self.parse_array_decl(name)?;
            (base, Some(index))
        } else {
            (name.to_string(), None)
        };

        if let Some(stripped) = base.strip_prefix(BUILT_IN_VAR_PREFIX) {
            for var in self.bvars.iter() {
                if &*var.name == stripped {
                    return Ok(Some(var.clone()));
                }
            }
            return Ok(None);
        }

        let mut found: Option<Variable> = None;
        let mut i = self.svars.len();
        while i > self.curr_stack_frame {
            i -= 1;
            if let Some(var) = self.svars.get(i) {
                if &*var.name == base {
                    found = Some(var.clone());
                    break;
                }
            }
        }
        if found.is_none() {
            for var in self.gvars.iter() {
                if &*var.name == base {
                    found = Some(var.clone());
                    break;
                }
            }
        }
        let mut var = match found {
            Some(var) => var,
            None => return Ok(None),
        };

        if var.is_array {
            if !allow_arrays {
                let index = index.ok_or_else(
                    || error!(Runner; format!("ARRAY '{}' REQUIRES AN INDEX", base)),
                )?;
                if index < 0 || index as usize >= var.arr_size {
                    return Err(error!(Runner;
                        format!("ARRAY INDEX [{}] OUT OF RANGE FOR '{}'", index, base)));
                }
                let element = match &*var.cell.borrow() {
                    Payload::Array(elements) => elements[index as usize].clone(),
                    _ => {
                        return Err(error!(Runner; format!("'{}' IS NOT A VALID ARRAY", base)));
                    }
                };
                var = element;
            }
        } else if index.is_some() {
            return Err(error!(Runner; format!("VARIABLE '{}' IS NOT AN ARRAY", base)));
        }

        if let Some(member) = member {
            if !member.is_empty() {
                if var.ty != VarType::Object {
                    return Err(error!(Runner;
                        format!("VARIABLE '{}' HAS NO MEMBER '{}'", base, member)));
                }
                let field = match &*var.cell.borrow() {
                    Payload::Object(object) => object.fetch_field(member)?,
                    _ => {
                        return Err(error!(Runner; format!("'{}' IS NOT A VALID OBJECT", base)));
                    }
                };
                var = field;
            }
        }
        Ok(Some(var))
    }

    /// Object-typed lookup used by built-in object methods.
    pub fn fetch_object(&self, name: &str) -> Result<Variable> {
        let var = self
            .fetch_variable(name, false)?
            .ok_or_else(|| error!(Object; format!("VARIABLE '{}' IS NOT IN SCOPE", name)))?;
        if var.ty != VarType::Object {
            return Err(error!(Object; format!("VARIABLE '{}' IS NOT AN OBJECT", name)));
        }
        Ok(var)
    }

    /// Splits `name[expr]` into the base name and the evaluated index.
    fn parse_array_decl(&self, name: &str) -> Result<(String, i64)> {
        let (open, close) = match (name.find('['), name.rfind(']')) {
            (Some(open), Some(close)) if open < close => (open, close),
            _ => {
                return Err(error!(Runner; format!("UNABLE TO PARSE ARRAY SYNTAX IN '{}'", name)));
            }
        };
        let index = convert_to_variable(self, &name[open + 1..close], VarType::Integer)?.as_int()?;
        Ok((name[..open].to_string(), index as i64))
    }

    fn region_len(&self, region: Region) -> usize {
        match region {
            Region::Global => self.gvars.len(),
            Region::Stack => self.svars.len(),
        }
    }

    fn push_var(&mut self, region: Region, var: Variable) -> Result<()> {
        match region {
            Region::Global => self.gvars.push(var),
            Region::Stack => self.svars.push(var),
        }
    }

    /// Fresh zero-valued variable; objects get an identity and the shared
    /// collision flag cell.
    fn new_variable(&mut self, name: &str, ty: VarType) -> Result<Variable> {
        if ty == VarType::Object {
            let flag = self.builtin_var(COLLISION)?;
            let id = self.next_object_id;
            self.next_object_id += 1;
            return Ok(Variable::new(
                name,
                ty,
                Payload::Object(Object::new(id, flag.cell)),
            ));
        }
        match Payload::zero(ty) {
            Some(payload) => Ok(Variable::new(name, ty, payload)),
            None => {
                Err(error!(Runner; format!("CANNOT CREATE A VARIABLE OF TYPE '{}'", ty.name())))
            }
        }
    }

    fn check_undeclared(&self, name: &str) -> Result<()> {
        if self.fetch_variable(name, true)?.is_some() {
            return Err(error!(Runner; format!("VARIABLE '{}' IS ALREADY DECLARED", name)));
        }
        Ok(())
    }

    /// Runs `block[start..end]` (`end == 0` means to the end of the
    /// block). Declarations land in `region` and, when `clear_on_exit` is
    /// set, everything above `frame_base` is discarded on the way out.
    fn run_block(
        &mut self,
        block: Rc<Vec<Instr>>,
        region: Region,
        frame_base: usize,
        clear_on_exit: bool,
        start: usize,
        end: usize,
    ) -> Result<()> {
        let end = if end == 0 { block.len() } else { end };
        let mut pc = start;
        while pc < end {
            match &block[pc] {
                Instr::FuncName { .. } => {}
                Instr::Call { name, args } => {
                    if name.contains('.') {
                        self.run_object_function(name, args)?;
                    } else {
                        self.run_user_function(name, args)?;
                    }
                }
                Instr::BuiltinCall { name, args } => {
                    builtins::run_function(self, name, args)?;
                }
                Instr::Branch { .. } => {
                    self.execute_branch(&block, region, &mut pc)?;
                    continue;
                }
                Instr::BranchElse { else_target, .. } => {
                    // only reachable by a jump that skipped the chain scan
                    pc = *else_target;
                    continue;
                }
                Instr::Loop {
                    expr,
                    is_while,
                    start,
                    end,
                } => {
                    let (body_start, body_end) = (*start, *end);
                    if *is_while {
                        loop {
                            let go =
                                convert_to_variable(self, expr, VarType::Bool)?.as_bool()?;
                            if !go {
                                break;
                            }
                            let base = self.region_len(region);
                            self.run_block(block.clone(), region, base, true, body_start, body_end)?;
                        }
                    } else {
                        let count =
                            convert_to_variable(self, expr, VarType::Integer)?.as_int()?;
                        for _ in 0..count {
                            let base = self.region_len(region);
                            self.run_block(block.clone(), region, base, true, body_start, body_end)?;
                        }
                    }
                    pc = body_end;
                    continue;
                }
                Instr::Assign { dst, src, op } => {
                    let dst_var = self.fetch_variable(dst, false)?.ok_or_else(
                        || error!(Runner; format!("VARIABLE '{}' IS NOT IN SCOPE", dst)),
                    )?;
                    let src_var = convert_to_variable(self, src, dst_var.ty)?;
                    Runtime::set_payload(&dst_var, &src_var, *op)?;
                }
                Instr::Declare { name, ty } => {
                    let ty = VarType::from_name(ty);
                    let var = if name.contains('[') {
                        let (base, size) = self.parse_array_decl(name)?;
                        self.check_undeclared(&base)?;
                        if size < 1 {
                            return Err(error!(Runner;
                                format!("ARRAY '{}' MUST HAVE A SIZE OF AT LEAST 1", base)));
                        }
                        Variable::array(&base, ty, size as usize, |element_name| {
                            self.new_variable(&element_name, ty)
                        })?
                    } else {
                        self.check_undeclared(name)?;
                        self.new_variable(name, ty)?
                    };
                    self.push_var(region, var)?;
                }
                Instr::DeclareAssign { dst, src, op, ty } => {
                    if dst.contains('[') {
                        return Err(error!(Runner;
                            format!("ARRAY '{}' CANNOT BE DECLARED WITH AN INITIALIZER", dst)));
                    }
                    let ty = VarType::from_name(ty);
                    self.check_undeclared(dst)?;
                    let var = self.new_variable(dst, ty)?;
                    let src_var = convert_to_variable(self, src, ty)?;
                    Runtime::set_payload(&var, &src_var, *op)?;
                    self.push_var(region, var)?;
                }
            }
            pc += 1;
        }
        if clear_on_exit {
            match region {
                Region::Global => self.gvars.truncate(frame_base),
                Region::Stack => self.svars.truncate(frame_base),
            }
        }
        Ok(())
    }

    /// ## Branch chains
    ///
    /// Walks the clause records of one if/else-if/else statement. The
    /// first clause whose condition holds runs its body; every later
    /// clause of the same chain is skipped. A plain `if` encountered while
    /// expecting `else if` belongs to the next statement and ends the
    /// walk. On return `pc` addresses the first instruction after the
    /// chain.
    fn execute_branch(
        &mut self,
        block: &Rc<Vec<Instr>>,
        region: Region,
        pc: &mut usize,
    ) -> Result<()> {
        let mut executed = false;
        let mut expect_if_else = false;
        while *pc < block.len() {
            match &block[*pc] {
                Instr::Branch {
                    cond,
                    true_target,
                    else_target,
                    if_else,
                    ..
                } => {
                    if expect_if_else && !*if_else {
                        return Ok(());
                    }
                    expect_if_else = true;
                    let (body, next) = (*true_target, *else_target);
                    if !executed {
                        let taken =
                            convert_to_variable(self, cond, VarType::Integer)?.as_int()? != 0;
                        if taken {
                            executed = true;
                            let base = self.region_len(region);
                            self.run_block(block.clone(), region, base, true, body, next)?;
                        }
                    }
                    *pc = next;
                }
                Instr::BranchElse {
                    true_target,
                    else_target,
                    ..
                } => {
                    let (body, next) = (*true_target, *else_target);
                    if !executed {
                        let base = self.region_len(region);
                        self.run_block(block.clone(), region, base, true, body, next)?;
                    }
                    *pc = next;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
        Ok(())
    }

    /// ## User function calls
    ///
    /// Arguments are bound left to right in the caller's frame, then the
    /// frame base moves so the body sees only its own parameters and
    /// locals. Arrays are passed by reference; scalars are converted to
    /// the parameter type. Results come back through mutation: `$I_RET`,
    /// `$F_RET`, array elements or object members.
    fn run_user_function(&mut self, name: &str, args: &[String]) -> Result<()> {
        let mut found: Option<(Rc<Vec<Instr>>, Vec<Param>)> = None;
        for function in &self.program.functions {
            if let Some(Instr::FuncName {
                name: func_name,
                params,
            }) = function.first()
            {
                if &**func_name == name {
                    found = Some((function.clone(), params.clone()));
                    break;
                }
            }
        }
        let (block, params) = found
            .ok_or_else(|| error!(Runner; format!("FUNCTION '{}' IS NOT DEFINED", name)))?;
        if args.len() != params.len() {
            return Err(error!(Runner; format!(
                "FUNCTION '{}' EXPECTED {} ARGUMENTS, GOT {}",
                name,
                params.len(),
                args.len()
            )));
        }

        let frame_base = self.svars.len();
        for (arg, param) in args.iter().zip(params.iter()) {
            let var = if param.is_array {
                let var = self.fetch_variable(arg, true)?.ok_or_else(
                    || error!(Runner; format!("VARIABLE '{}' IS NOT IN SCOPE", arg)),
                )?;
                if !var.is_array {
                    return Err(error!(Runner; format!("EXPECTED '{}' TO BE AN ARRAY", arg)));
                }
                var
            } else {
                convert_to_variable(self, arg, VarType::from_name(&param.ty))?
            };
            self.svars.push(var.renamed(param.name.as_str().into()))?;
        }

        let saved_frame = self.curr_stack_frame;
        self.curr_stack_frame = frame_base;
        let result = self.run_block(block, Region::Stack, frame_base, true, 1, 0);
        self.curr_stack_frame = saved_frame;
        result
    }

    /// Dispatches `name.method(args)` to the built-in object.
    fn run_object_function(&mut self, name: &str, args: &[String]) -> Result<()> {
        let dot = name
            .find('.')
            .ok_or_else(|| error!(Runner; format!("UNABLE TO EXECUTE '{}'", name)))?;
        let (obj_name, method) = (&name[..dot], &name[dot + 1..]);
        let var = self.fetch_variable(obj_name, false)?.ok_or_else(
            || error!(Runner; format!("VARIABLE '{}' IS NOT IN SCOPE", obj_name)),
        )?;
        if var.ty != VarType::Object {
            return Err(
                error!(Runner; format!("CANNOT CALL '{}' ON A NON-OBJECT VARIABLE", name)),
            );
        }
        object::call_function(&var, method, args, self)
    }

    /// Applies `dst op= src` to the payload cells. `src` must already be
    /// converted to `dst`'s type. Strings support `=` and `+=`, numbers
    /// all five operators, booleans only `=`.
    fn set_payload(dst: &Variable, src: &Variable, op: AssignOp) -> Result<()> {
        fn bad_op(dst: &Variable, op: AssignOp) -> Error {
            error!(Runner; format!("OPERATOR '{}' IS NOT SUPPORTED FOR '{}'", op, dst.name))
        }

        match dst.ty {
            VarType::String
            | VarType::Integer
            | VarType::Double
            | VarType::Float
            | VarType::Bool => {}
            _ => {
                return Err(error!(Runner; format!(
                    "CANNOT ASSIGN TO VARIABLE '{}' OF TYPE '{}'",
                    dst.name,
                    dst.ty.name()
                )));
            }
        }

        let mut d = dst.cell.borrow_mut();
        let s = src.cell.borrow();
        match (&mut *d, &*s) {
            (Payload::String(a), Payload::String(b)) => match op {
                AssignOp::Set => *a = b.clone(),
                AssignOp::Add => a.push_str(b),
                _ => return Err(bad_op(dst, op)),
            },
            (Payload::Integer(a), Payload::Integer(b)) => match op {
                AssignOp::Set => *a = *b,
                AssignOp::Add => *a += *b,
                AssignOp::Sub => *a -= *b,
                AssignOp::Mul => *a *= *b,
                AssignOp::Div => {
                    if *b == 0 {
                        return Err(error!(Runner;
                            format!("DIVISION BY ZERO ASSIGNING '{}'", dst.name)));
                    }
                    *a /= *b;
                }
            },
            (Payload::Double(a), Payload::Double(b)) => match op {
                AssignOp::Set => *a = *b,
                AssignOp::Add => *a += *b,
                AssignOp::Sub => *a -= *b,
                AssignOp::Mul => *a *= *b,
                AssignOp::Div => *a /= *b,
            },
            (Payload::Float(a), Payload::Float(b)) => match op {
                AssignOp::Set => *a = *b,
                AssignOp::Add => *a += *b,
                AssignOp::Sub => *a -= *b,
                AssignOp::Mul => *a *= *b,
                AssignOp::Div => *a /= *b,
            },
            (Payload::Bool(a), Payload::Bool(b)) => match op {
                AssignOp::Set => *a = *b,
                _ => return Err(bad_op(dst, op)),
            },
            _ => {
                return Err(error!(Runner; format!("TYPE MISMATCH ASSIGNING '{}'", dst.name)));
            }
        }
        Ok(())
    }
}
