use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("pop on an empty stack")]
pub struct StackUnderflow;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

/// Singly linked LIFO container. Every element lives in its own node owned
/// by the stack, push and pop are O(1).
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    pub fn push(&mut self, elem: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { elem, next }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        let node = self.top.take().ok_or(StackUnderflow)?;
        let Node { elem, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(elem)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.elem)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Top to bottom, without consuming.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.top.as_deref() }
    }

    /// Pops every element, top first.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { stack: self }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

// unlink nodes one at a time, the default recursive drop can blow up
// the call stack on long chains
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

pub struct Drain<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }
}

///////////////////////////////////////////////////////////////////////////////
