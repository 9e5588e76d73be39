mod scanner;
mod char_scanner;
mod int_tokenizer;

pub use scanner::Scanner;
pub use int_tokenizer::{tokenize, IntTokenizer, LexError, Operator, Token};
