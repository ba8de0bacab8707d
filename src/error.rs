use crate::session::Phase;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("invalid variable")]
    InvalidVariable,

    #[error("objective function must start with \"max\" or \"min\"")]
    MissingDirectionKeyword,

    #[error("inequality or equality sign expected")]
    MissingRelationalSign,

    #[error("numeric bound expected")]
    InvalidBound,

    #[error("\">= 0\" sign restriction expected")]
    InvalidSignRestriction,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}: `{line}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: String,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: &str, offset: usize) -> Self {
        Self {
            kind,
            line: line.to_string(),
            offset,
        }
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("line {line_number} ({phase}): {source}")]
    Statement {
        line_number: usize,
        phase: Phase,
        #[source]
        source: ParseError,
    },

    #[error("input ended before an objective function was read")]
    MissingObjective,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CompileError {
    //the parse error behind a failed statement, if there is one
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            CompileError::Statement { source, .. } => Some(source),
            _ => None,
        }
    }
}
