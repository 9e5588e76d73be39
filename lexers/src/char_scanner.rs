#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Drops leading whitespace, returns if any was found.
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan unsigned integers like [0-9]+
    pub fn scan_digits(&mut self) -> Option<String> {
        if self.skip_all(DIGITS) {
            Some(self.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
