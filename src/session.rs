//! Line-by-line compilation of a linear program.
//!
//! The input is read in a fixed order: one objective line, restriction lines
//! up to a blank line, then sign restriction lines up to a blank line.
//! [`Session`] walks through [`Phase`]s strictly forward and gives up on the
//! first statement that fails to parse.

use crate::error::{CompileError, ParseError, ParseErrorKind};
use crate::model::Model;
use crate::parse::{parse_objective, parse_restriction, parse_sign_restriction};
use crate::problem::{Expression, Restriction, SignRestriction};

use log::debug;

use std::io::BufRead;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    ParsingObjective,
    ParsingRestrictions,
    ParsingSignRestrictions,
    Assembled,
}

impl Phase {
    /// The prompt shown to a user typing the problem in.
    pub fn prompt(self) -> &'static str {
        match self {
            Phase::ParsingObjective => "objective function > ",
            Phase::ParsingRestrictions => "restriction > ",
            Phase::ParsingSignRestrictions => "sign restriction (VAR >= 0) > ",
            Phase::Assembled => "",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::ParsingObjective => write!(f, "objective"),
            Phase::ParsingRestrictions => write!(f, "restriction"),
            Phase::ParsingSignRestrictions => write!(f, "sign restriction"),
            Phase::Assembled => write!(f, "assembled"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    line_number: usize,
    objective: Option<Expression>,
    restrictions: Vec<Restriction>,
    sign_restrictions: Vec<SignRestriction>,
    model: Option<Model>,
}

impl std::default::Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::ParsingObjective,
            line_number: 0,
            objective: None,
            restrictions: Vec::new(),
            sign_restrictions: Vec::new(),
            model: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consumes one line of input.
    ///
    /// On error the session is dropped, so a failed compilation can never be
    /// finished into a model.
    pub fn feed(mut self, line: &str) -> Result<Self, CompileError> {
        self.line_number += 1;
        let blank = line.trim().is_empty();

        match self.phase {
            Phase::ParsingObjective => {
                let objective = if blank {
                    Err(ParseError::new(
                        ParseErrorKind::MissingDirectionKeyword,
                        line,
                        line.len(),
                    ))
                } else {
                    parse_objective(line)
                };

                let objective = self.statement(objective)?;
                debug!("objective (minimize): {}", objective);
                self.objective = Some(objective);
                self.advance(Phase::ParsingRestrictions);
            }

            Phase::ParsingRestrictions if blank => self.advance(Phase::ParsingSignRestrictions),

            Phase::ParsingRestrictions => {
                let restriction = self.statement(parse_restriction(line))?;
                debug!("restriction {}: {}", self.restrictions.len(), restriction);
                self.restrictions.push(restriction);
            }

            Phase::ParsingSignRestrictions if blank => self.assemble()?,

            Phase::ParsingSignRestrictions => {
                let sign_restriction = self.statement(parse_sign_restriction(line))?;
                debug!("sign restriction: {}", sign_restriction);
                self.sign_restrictions.push(sign_restriction);
            }

            Phase::Assembled => debug!("ignoring line {} after the model was assembled", self.line_number),
        }

        Ok(self)
    }

    /// Ends the input, closing any phase still waiting for its blank line.
    pub fn finish(mut self) -> Result<Model, CompileError> {
        if self.phase != Phase::Assembled {
            self.assemble()?;
        }

        self.model.ok_or(CompileError::MissingObjective)
    }

    fn statement<T>(&self, parsed: Result<T, ParseError>) -> Result<T, CompileError> {
        parsed.map_err(|source| CompileError::Statement {
            line_number: self.line_number,
            phase: self.phase,
            source,
        })
    }

    fn advance(&mut self, phase: Phase) {
        debug!("{} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn assemble(&mut self) -> Result<(), CompileError> {
        let objective = self.objective.as_ref().ok_or(CompileError::MissingObjective)?;

        self.model = Some(Model::assemble(
            objective,
            &self.restrictions,
            &self.sign_restrictions,
        ));

        self.advance(Phase::Assembled);
        Ok(())
    }
}

/// Compiles a whole problem read line by line from `reader`.
pub fn compile<R: BufRead>(reader: R) -> Result<Model, CompileError> {
    compile_with(reader, |_phase| Ok(()))
}

/// Like [`compile`], calling `before_line` with the current phase before each
/// line is read, for example to print a prompt.
pub fn compile_with<R, F>(reader: R, mut before_line: F) -> Result<Model, CompileError>
where
    R: BufRead,
    F: FnMut(Phase) -> std::io::Result<()>,
{
    let mut session = Session::new();
    let mut lines = reader.lines();

    while session.phase() != Phase::Assembled {
        before_line(session.phase())?;

        match lines.next() {
            Some(line) => session = session.feed(&line?)?,
            None => break,
        }
    }

    session.finish()
}

pub fn compile_str(text: &str) -> Result<Model, CompileError> {
    compile(text.as_bytes())
}
