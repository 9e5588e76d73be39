use std::fmt;
use std::io::{BufRead, Write};

use lexers::{LexError, Token};
use log::{error, info};

use crate::config::Config;
use crate::parser::{ParseError, RPNExpr};
use crate::rpneval::{evaluate, EvalErr};
use crate::rpnprint::Infix;

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
    #[error("expression has {found} tokens, at most {max} are allowed")]
    TooManyTokens { found: usize, max: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Everything computed for one line of input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub infix: Vec<Token>,
    pub postfix: RPNExpr,
    pub value: i64,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Infix: {}", Infix(&self.infix))?;
        writeln!(f, "Postfix: {}", self.postfix)?;
        write!(f, "The value is {}", self.value)
    }
}

/// Runs lines of text through tokenizer, converter and evaluator.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Blank lines yield `Ok(None)`.
    pub fn eval_line(&self, line: &str) -> Result<Option<Outcome>, CalcError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let infix = lexers::tokenize(line)?;
        if infix.len() > self.config.max_tokens {
            return Err(CalcError::TooManyTokens {
                found: infix.len(),
                max: self.config.max_tokens,
            });
        }
        let postfix = crate::convert(&infix)?;
        let value = evaluate(&postfix)?;
        Ok(Some(Outcome { infix, postfix, value }))
    }

    /// Evaluates every line of `input` writing each outcome to `out`.
    /// Stops at the first line that fails and returns its error, otherwise
    /// the number of expressions evaluated.
    pub fn run_batch<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<usize, CalcError> {
        let mut evaluated = 0;
        for (lineno, line) in input.lines().enumerate() {
            let line = line?;
            match self.eval_line(&line) {
                Ok(None) => (),
                Ok(Some(outcome)) => {
                    writeln!(out, "{}", outcome)?;
                    evaluated += 1;
                }
                Err(e) => {
                    error!("line {}: {}", lineno + 1, e);
                    return Err(e);
                }
            }
        }
        out.flush()?;
        info!("evaluated {} expressions", evaluated);
        Ok(evaluated)
    }
}

///////////////////////////////////////////////////////////////////////////////
