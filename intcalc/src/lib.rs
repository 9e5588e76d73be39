extern crate lexers;

pub use lexers::{Operator, Token};

pub use config::{Config, DEFAULT_MAX_TOKENS};
pub use parser::{ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{evaluate, EvalErr};
pub use rpnprint::Infix;
pub use session::{CalcError, Outcome, Session};
pub use stack::{Stack, StackUnderflow};

mod config;
pub mod parser;
mod rpneval;
mod rpnprint;
#[cfg(test)]
mod roundtrip_test;
mod session;
pub mod stack;

/// Infix tokens to postfix, see `ShuntingParser`.
pub fn convert(tokens: &[Token]) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse(tokens.iter().copied())
}
