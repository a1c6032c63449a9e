use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Growable memory table with an overflow guard. The runner keeps three of
/// these: globals, the call stack, and the built-in variables.
#[derive(Debug, Default)]
pub struct Stack<T> {
    vec: Vec<T>,
    overflow_message: &'static str,
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            vec: Vec::new(),
            overflow_message,
        }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.vec.len() == u16::max_value() as usize {
            return Err(error!(Runner; self.overflow_message));
        }
        self.vec.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.vec.get(index)
    }

    /// Drops every entry above `len`; the unwind primitive for scope and
    /// call-frame exit.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len);
    }

    pub fn clear(&mut self) {
        self.vec.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.vec.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_unwinds_to_frame_base() {
        let mut stack: Stack<u32> = Stack::new("OVERFLOW");
        for i in 0..5 {
            stack.push(i).unwrap();
        }
        stack.truncate(2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(1), Some(&1));
        assert_eq!(stack.get(2), None);
    }
}
