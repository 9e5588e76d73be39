use lexers::{Operator, Token};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rpnprint::Infix;
use crate::{convert, evaluate, EvalErr};

const OPS: [Operator; 5] = [
    Operator::Plus, Operator::Minus, Operator::Mul, Operator::Div, Operator::Pow,
];

fn gen_expr(rng: &mut StdRng, depth: u32, out: &mut Vec<Token>) {
    gen_atom(rng, depth, out);
    for _ in 0..rng.gen_range(0..4) {
        out.push(Token::Operator(OPS[rng.gen_range(0..OPS.len())]));
        gen_atom(rng, depth, out);
    }
}

fn gen_atom(rng: &mut StdRng, depth: u32, out: &mut Vec<Token>) {
    if depth > 0 && rng.gen_bool(0.3) {
        out.push(Token::Operator(Operator::LParen));
        gen_expr(rng, depth - 1, out);
        out.push(Token::Operator(Operator::RParen));
    } else {
        out.push(Token::Operand(rng.gen_range(0..12)));
    }
}

// Recursive descent over the infix tokens with the same precedence
// levels, '^' binding tighter than '*' and '/' and grouping to the left.
struct Reference<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Reference<'a> {
    fn eval(tokens: &'a [Token]) -> Result<i64, EvalErr> {
        let mut r = Reference { tokens, pos: 0 };
        let value = r.sum()?;
        assert_eq!(r.pos, tokens.len());
        Ok(value)
    }

    fn peek_op(&self, ops: &[Operator]) -> Option<Operator> {
        match self.tokens.get(self.pos) {
            Some(Token::Operator(op)) if ops.contains(op) => Some(*op),
            _ => None,
        }
    }

    fn sum(&mut self) -> Result<i64, EvalErr> {
        let mut acc = self.product()?;
        while let Some(op) = self.peek_op(&[Operator::Plus, Operator::Minus]) {
            self.pos += 1;
            let rhs = self.product()?;
            acc = match op {
                Operator::Plus => acc.checked_add(rhs),
                _ => acc.checked_sub(rhs),
            }.ok_or(EvalErr::Overflow)?;
        }
        Ok(acc)
    }

    fn product(&mut self) -> Result<i64, EvalErr> {
        let mut acc = self.power()?;
        while let Some(op) = self.peek_op(&[Operator::Mul, Operator::Div]) {
            self.pos += 1;
            let rhs = self.power()?;
            acc = match op {
                Operator::Mul => acc.checked_mul(rhs).ok_or(EvalErr::Overflow)?,
                _ if rhs == 0 => return Err(EvalErr::DivisionByZero),
                _ => acc.checked_div(rhs).ok_or(EvalErr::Overflow)?,
            };
        }
        Ok(acc)
    }

    fn power(&mut self) -> Result<i64, EvalErr> {
        let mut acc = self.atom()?;
        while self.peek_op(&[Operator::Pow]).is_some() {
            self.pos += 1;
            let exp = self.atom()?;
            acc = slow_pow(acc, exp)?;
        }
        Ok(acc)
    }

    fn atom(&mut self) -> Result<i64, EvalErr> {
        let token = self.tokens[self.pos];
        self.pos += 1;
        match token {
            Token::Operand(n) => Ok(n),
            Token::Operator(Operator::LParen) => {
                let value = self.sum()?;
                assert_eq!(self.tokens[self.pos], Token::Operator(Operator::RParen));
                self.pos += 1;
                Ok(value)
            }
            other => panic!("generator produced {:?} in operand position", other),
        }
    }
}

fn slow_pow(base: i64, exp: i64) -> Result<i64, EvalErr> {
    match base {
        0 if exp < 0 => return Err(EvalErr::DivisionByZero),
        0 if exp > 0 => return Ok(0),
        1 => return Ok(1),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ if exp < 0 => return Ok(0),
        _ => (),
    }
    let mut acc: i64 = 1;
    for _ in 0..exp {
        acc = acc.checked_mul(base).ok_or(EvalErr::Overflow)?;
    }
    Ok(acc)
}

#[test]
fn matches_recursive_descent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut checked = 0;
    for _ in 0..2000 {
        let mut infix = Vec::new();
        gen_expr(&mut rng, 3, &mut infix);
        let rpn = convert(&infix).unwrap();
        assert_eq!(evaluate(&rpn), Reference::eval(&infix), "{}", Infix(&infix));
        checked += 1;
    }
    assert_eq!(checked, 2000);
}

#[test]
fn printed_infix_tokenizes_back() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut infix = Vec::new();
        gen_expr(&mut rng, 2, &mut infix);
        let text = Infix(&infix).to_string();
        assert_eq!(lexers::tokenize(&text), Ok(infix));
    }
}
