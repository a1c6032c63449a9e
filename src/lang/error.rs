pub struct Error {
    code: ErrorCode,
    line_number: Option<usize>,
    message: String,
}

/// Builds an `Error` from a category, an optional 1-based source line
/// number, and an optional message.
///
/// `error!(Runner)`, `error!(Lint, 12)`, `error!(Util; format!("..."))`,
/// `error!(Tokenize, line; "UNKNOWN LINE")`.
#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Lint,
    Tokenize,
    Runner,
    Util,
    Object,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn in_line_number(mut self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = Some(line);
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::Lint => "LINT ERROR",
            ErrorCode::Tokenize => "TOKENIZER ERROR",
            ErrorCode::Runner => "PROGRAM RUNNER FAILED",
            ErrorCode::Util => "UTIL ERROR",
            ErrorCode::Object => "BUILT-IN OBJECT ERROR",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN LINE {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}
