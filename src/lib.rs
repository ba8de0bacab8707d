mod error;
pub mod model;
pub mod parse;
pub mod problem;
pub mod session;

pub use crate::error::{CompileError, ParseError, ParseErrorKind};
pub use crate::model::Model;
pub use crate::problem::{Expression, RelationalSign, Restriction, SignRestriction, Term};
pub use crate::session::{compile, compile_str, compile_with, Phase, Session};
