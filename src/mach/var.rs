use super::object::Object;
use crate::error;
use crate::lang::Error;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Declared type of a script variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarType {
    None,
    String,
    Integer,
    Double,
    Float,
    Bool,
    Object,
    Text,
}

impl VarType {
    /// Maps a declaration keyword to its type; anything else is `None`.
    pub fn from_name(name: &str) -> VarType {
        match name {
            "string" => VarType::String,
            "int" => VarType::Integer,
            "double" => VarType::Double,
            "float" => VarType::Float,
            "bool" => VarType::Bool,
            "OBJECT" => VarType::Object,
            "TEXT" => VarType::Text,
            _ => VarType::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VarType::None => "none",
            VarType::String => "string",
            VarType::Integer => "int",
            VarType::Double => "double",
            VarType::Float => "float",
            VarType::Bool => "bool",
            VarType::Object => "OBJECT",
            VarType::Text => "TEXT",
        }
    }
}

/// Tagged storage behind a variable handle.
#[derive(Debug)]
pub enum Payload {
    None,
    String(String),
    Integer(i32),
    Double(f64),
    Float(f32),
    Bool(bool),
    Object(Object),
    Array(Vec<Variable>),
}

impl Payload {
    /// Zero value for a scalar type. Objects carry identity and are built
    /// by the runtime instead.
    pub fn zero(ty: VarType) -> Option<Payload> {
        match ty {
            VarType::String => Some(Payload::String(String::new())),
            VarType::Integer => Some(Payload::Integer(0)),
            VarType::Double => Some(Payload::Double(0.0)),
            VarType::Float => Some(Payload::Float(0.0)),
            VarType::Bool => Some(Payload::Bool(false)),
            _ => None,
        }
    }
}

/// ## Variable
///
/// A named, typed handle onto shared storage. Cloning a `Variable` copies
/// the handle, not the payload: both clones point at the same cell, which
/// is what gives arrays, object members and array-parameter passing their
/// reference semantics.
#[derive(Clone)]
pub struct Variable {
    pub name: Rc<str>,
    pub ty: VarType,
    pub is_array: bool,
    pub arr_size: usize,
    pub cell: Rc<RefCell<Payload>>,
}

impl Variable {
    pub fn new(name: &str, ty: VarType, payload: Payload) -> Variable {
        Variable {
            name: name.into(),
            ty,
            is_array: false,
            arr_size: 0,
            cell: Rc::new(RefCell::new(payload)),
        }
    }

    /// Fresh handle with the same cell under a different name. Used when a
    /// caller's value is rebound to a function parameter.
    pub fn renamed(&self, name: Rc<str>) -> Variable {
        let mut var = self.clone();
        var.name = name;
        var
    }

    /// Array of `size` zero-valued elements. Element cells are independent
    /// so indexed writes stay local to one slot.
    pub fn array<F: FnMut(String) -> Result<Variable>>(
        name: &str,
        ty: VarType,
        size: usize,
        mut element: F,
    ) -> Result<Variable> {
        let mut elements = Vec::with_capacity(size);
        for i in 0..size {
            elements.push(element(format!("{}[{}]", name, i))?);
        }
        Ok(Variable {
            name: name.into(),
            ty,
            is_array: true,
            arr_size: size,
            cell: Rc::new(RefCell::new(Payload::Array(elements))),
        })
    }

    pub fn as_int(&self) -> Result<i32> {
        match &*self.cell.borrow() {
            Payload::Integer(i) => Ok(*i),
            _ => Err(error!(Util; format!("VARIABLE '{}' IS NOT AN INT", self.name))),
        }
    }

    pub fn as_double(&self) -> Result<f64> {
        match &*self.cell.borrow() {
            Payload::Double(d) => Ok(*d),
            _ => Err(error!(Util; format!("VARIABLE '{}' IS NOT A DOUBLE", self.name))),
        }
    }

    pub fn as_float(&self) -> Result<f32> {
        match &*self.cell.borrow() {
            Payload::Float(v) => Ok(*v),
            _ => Err(error!(Util; format!("VARIABLE '{}' IS NOT A FLOAT", self.name))),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match &*self.cell.borrow() {
            Payload::Bool(b) => Ok(*b),
            _ => Err(error!(Util; format!("VARIABLE '{}' IS NOT A BOOL", self.name))),
        }
    }

    pub fn as_string(&self) -> Result<String> {
        match &*self.cell.borrow() {
            Payload::String(s) => Ok(s.clone()),
            _ => Err(error!(Util; format!("VARIABLE '{}' IS NOT A STRING", self.name))),
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Variable {{ {} {}", self.ty.name(), self.name)?;
        if self.is_array {
            write!(f, "[{}]", self.arr_size)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_payload_cell() {
        let a = Variable::new("score", VarType::Integer, Payload::Integer(1));
        let b = a.clone();
        *a.cell.borrow_mut() = Payload::Integer(7);
        assert_eq!(b.as_int().unwrap(), 7);
    }

    #[test]
    fn array_elements_have_independent_cells() {
        let arr = Variable::array("xs", VarType::Integer, 3, |name| {
            Ok(Variable::new(&name, VarType::Integer, Payload::Integer(0)))
        })
        .unwrap();
        let payload = arr.cell.borrow();
        if let Payload::Array(elements) = &*payload {
            *elements[0].cell.borrow_mut() = Payload::Integer(9);
            assert_eq!(elements[0].as_int().unwrap(), 9);
            assert_eq!(elements[1].as_int().unwrap(), 0);
            assert_eq!(elements[1].name.as_ref(), "xs[1]");
        } else {
            panic!("array payload expected");
        }
    }
}
