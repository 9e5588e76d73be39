use std::fmt;

use log::warn;

use crate::scanner::Scanner;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Plus, Minus, Mul, Div, Pow,
    LParen, RParen,
}

impl Operator {
    pub const SYMBOLS: &'static [char] = &['+', '-', '*', '/', '^', '(', ')'];

    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            '(' => Some(Operator::LParen),
            ')' => Some(Operator::RParen),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::LParen => '(',
            Operator::RParen => ')',
        }
    }

    pub fn is_paren(self) -> bool {
        matches!(self, Operator::LParen | Operator::RParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    Operand(i64),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum LexError {
    #[error("input is not a valid integer: {0}")]
    IntegerOverflow(String),
}

/// Splits a line into integer operands and single char operators.
/// Anything else in the input is skipped.
pub struct IntTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> IntTokenizer<I> {
    pub fn new(source: I) -> Self {
        IntTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            self.src.skip_whitespace();
            if let Some(digits) = self.src.scan_digits() {
                return Some(match digits.parse::<i64>() {
                    Ok(value) => Ok(Token::Operand(value)),
                    Err(_) => Err(LexError::IntegerOverflow(digits)),
                });
            }
            if let Some(c) = self.src.accept_any(Operator::SYMBOLS) {
                self.src.ignore();
                return Operator::from_char(c).map(|op| Ok(Token::Operator(op)));
            }
            let skipped = self.src.next()?;
            self.src.ignore();
            warn!("skipping unexpected character {:?}", skipped);
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for IntTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    IntTokenizer::new(line.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
