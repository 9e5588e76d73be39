use std::ops::Deref;

use lexers::{LexError, Operator, Token};
use log::{debug, trace};

use crate::stack::Stack;

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing opening parenthesis")]
    MissingOParen,
    #[error("missing closing parenthesis")]
    MissingCParen,
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Whether `top`, sitting on the operator stack, has to be emitted before
/// `incoming` can be pushed. Every operator is left associative, including
/// '^', so `2^3^2` reads as `(2^3)^2`.
pub fn yields_to(top: Operator, incoming: Operator) -> bool {
    use Operator::*;
    if top.is_paren() {
        return false;
    }
    match incoming {
        Plus | Minus => true,
        Mul | Div => !matches!(top, Plus | Minus),
        Pow => top == Pow,
        LParen | RParen => false,
    }
}

/// An expression in postfix order, parentheses already resolved.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(lexers::tokenize(expr)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Stack::new();

        for token in tokens {
            trace!("token {:?}, operators {:?}", token, stack);
            match token {
                Token::Operand(_) => out.push(token),
                Token::Operator(Operator::LParen) => stack.push(Operator::LParen),
                Token::Operator(Operator::RParen) => loop {
                    match stack.pop() {
                        Ok(Operator::LParen) => break,
                        Ok(op) => out.push(Token::Operator(op)),
                        Err(_) => return Err(ParseError::MissingOParen),
                    }
                },
                Token::Operator(incoming) => {
                    while let Ok(top) = stack.pop() {
                        if !yields_to(top, incoming) {
                            stack.push(top);
                            break;
                        }
                        out.push(Token::Operator(top));
                    }
                    stack.push(incoming);
                }
            }
        }
        for top in stack.drain() {
            match top {
                Operator::LParen => return Err(ParseError::MissingCParen),
                op => out.push(Token::Operator(op)),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
