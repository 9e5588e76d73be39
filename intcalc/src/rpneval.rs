use lexers::{Operator, Token};
use log::{debug, trace};

use crate::parser::RPNExpr;
use crate::stack::{Stack, StackUnderflow};

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum EvalErr {
    #[error("cannot evaluate an empty expression")]
    EmptyExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed postfix expression")]
    MalformedPostfix,
    #[error("integer overflow")]
    Overflow,
}

// running out of operands means operators and operands didn't line up
impl From<StackUnderflow> for EvalErr {
    fn from(_: StackUnderflow) -> Self {
        EvalErr::MalformedPostfix
    }
}

pub fn evaluate(rpn: &RPNExpr) -> Result<i64, EvalErr> {
    if rpn.is_empty() {
        return Err(EvalErr::EmptyExpression);
    }
    let mut operands = Stack::new();

    for token in rpn.iter() {
        match *token {
            Token::Operand(value) => operands.push(value),
            Token::Operator(op) if op.is_paren() => return Err(EvalErr::MalformedPostfix),
            Token::Operator(op) => {
                let rhs = operands.pop()?;
                let lhs = operands.pop()?;
                let result = apply(op, lhs, rhs)?;
                trace!("{} {} {} = {}", lhs, op, rhs, result);
                operands.push(result);
            }
        }
    }
    let result = operands.pop()?;
    if !operands.is_empty() {
        return Err(EvalErr::MalformedPostfix);
    }
    debug!("{} = {}", rpn, result);
    Ok(result)
}

fn apply(op: Operator, lhs: i64, rhs: i64) -> Result<i64, EvalErr> {
    let result = match op {
        Operator::Plus => lhs.checked_add(rhs),
        Operator::Minus => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div if rhs == 0 => return Err(EvalErr::DivisionByZero),
        Operator::Div => lhs.checked_div(rhs),
        Operator::Pow => return pow(lhs, rhs),
        Operator::LParen | Operator::RParen => return Err(EvalErr::MalformedPostfix),
    };
    result.ok_or(EvalErr::Overflow)
}

// integer part of base^exp, negative exponents truncate toward zero
fn pow(base: i64, exp: i64) -> Result<i64, EvalErr> {
    match base {
        0 if exp < 0 => Err(EvalErr::DivisionByZero),
        0 => Ok(if exp == 0 { 1 } else { 0 }),
        1 => Ok(1),
        -1 => Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ if exp < 0 => Ok(0),
        _ => u32::try_from(exp)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .ok_or(EvalErr::Overflow),
    }
}
