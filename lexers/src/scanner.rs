/// Buffered cursor over any iterator that can move back over what it read.
/// Items stay buffered until `extract` or `ignore` drops them, so a failed
/// match can rewind with `set_pos` and try something else.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    // items consumed from `buf` since the last extract/ignore
    pos: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.buf.len() {
            self.buf.push(self.src.next()?);
        }
        self.pos += 1;
        self.curr()
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0}
    }

    pub fn pos(&self) -> usize { self.pos }

    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Last consumed item, None right after a fresh start.
    pub fn curr(&self) -> Option<I::Item> {
        self.pos.checked_sub(1).map(|at| self.buf[at].clone())
    }

    pub fn prev(&mut self) -> Option<I::Item> {
        self.pos = self.pos.saturating_sub(1);
        self.curr()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.pos]
    }

    /// Forget everything consumed so far.
    pub fn ignore(&mut self) {
        self.buf.drain(..self.pos);
        self.pos = 0;
    }

    /// Hand out everything consumed so far and start fresh after it.
    pub fn extract(&mut self) -> Vec<I::Item> {
        let items: Vec<I::Item> = self.buf.drain(..self.pos).collect();
        self.pos = 0;
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos;
        match self.next() {
            Some(next) if any.contains(&next) => Some(next),
            _ => {
                self.pos = backtrack;
                None
            }
        }
    }

    // Skip over the 'over' set, returns if the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    // Advance until the next item is in the 'any' set or the input ends
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}
