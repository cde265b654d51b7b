use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: String,
}

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

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Lexical errors stop a statement from ever being stored or executed.
    pub fn is_lexical(&self) -> bool {
        self.code < 20
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: Some(line),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 1,
    BadNumber = 2,
    InvalidIdentifier = 3,
    UnterminatedString = 4,
    UnknownKeyword = 5,
    MalformedIf = 6,
    MalformedInput = 7,
    LineOutOfRange = 8,
    UnsupportedOperator = 9,
    UnexpectedToken = 20,
    BadAssignment = 21,
    TypeMismatch = 22,
    DivisionByZero = 23,
    Overflow = 24,
    NotAComparison = 25,
    MissingOperand = 26,
    InputPastEnd = 27,
    Break = 28,
    IllegalOperation = 29,
    IoError = 30,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "SYNTAX ERROR",
            2 => "BAD NUMBER",
            3 => "INVALID IDENTIFIER",
            4 => "UNTERMINATED STRING",
            5 => "UNKNOWN KEYWORD",
            6 => "MALFORMED IF",
            7 => "MALFORMED INPUT",
            8 => "LINE OUT OF RANGE",
            9 => "UNSUPPORTED OPERATOR",
            20 => "UNEXPECTED TOKEN",
            21 => "BAD ASSIGNMENT",
            22 => "TYPE MISMATCH",
            23 => "DIVISION BY ZERO",
            24 => "OVERFLOW",
            25 => "NOT A COMPARISON",
            26 => "MISSING OPERAND",
            27 => "INPUT PAST END",
            28 => "BREAK",
            29 => "ILLEGAL OPERATION",
            30 => "DEVICE I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, message)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, message)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, message)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, message)
        }
    }
}

impl std::error::Error for Error {}
