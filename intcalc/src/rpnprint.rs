use std::fmt;

use lexers::{Operator, Token};

use crate::parser::RPNExpr;

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Prints an infix token sequence the way it would be typed:
/// `(1 + 2) * 3`.
pub struct Infix<'a>(pub &'a [Token]);

impl<'a> fmt::Display for Infix<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut prev: Option<&Token> = None;
        for token in self.0 {
            let glued = match prev {
                None => true,
                Some(Token::Operator(Operator::LParen)) => true,
                Some(_) => *token == Token::Operator(Operator::RParen),
            };
            if !glued {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            prev = Some(token);
        }
        Ok(())
    }
}
