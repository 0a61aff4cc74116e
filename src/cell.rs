//! Cell-based FIFO queue and LIFO stack.
//!
//! Both containers chain the same singly-linked [`Cell`]; a cell is boxed
//! on push and dropped on pop, and neither container ever inspects the
//! held value. Popping an empty container returns `None` — callers use
//! that as the loop-termination signal, not as an error.

use std::ptr;

/// Shared link cell. Exists only for the container's bookkeeping lifetime.
struct Cell<T> {
    item: T,
    next: Option<Box<Cell<T>>>,
}

/// Singly-linked FIFO queue tracking head, tail and length.
///
/// Invariant: `len == 0` iff `head` is `None` iff `tail` is null.
pub struct Queue<T> {
    head: Option<Box<Cell<T>>>,
    // Raw pointer into the boxed chain; the pointee is owned by the chain
    // and stays pinned on the heap while it is linked.
    tail: *mut Cell<T>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let mut cell = Box::new(Cell { item, next: None });
        let raw: *mut Cell<T> = &mut *cell;
        if self.tail.is_null() {
            self.head = Some(cell);
        } else {
            // Tail is non-null, so the chain is non-empty and the pointee
            // has no next link yet.
            unsafe {
                (*self.tail).next = Some(cell);
            }
        }
        self.tail = raw;
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|cell| {
            let cell = *cell;
            self.head = cell.next;
            if self.head.is_none() {
                self.tail = ptr::null_mut();
            }
            self.len -= 1;
            cell.item
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Queue<T> {
    // Drop iteratively; the default recursive Box drop overflows the call
    // stack on long chains.
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

/// Singly-linked LIFO stack tracking head and length only.
pub struct Stack<T> {
    head: Option<Box<Cell<T>>>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push(&mut self, item: T) {
        let cell = Box::new(Cell {
            item,
            next: self.head.take(),
        });
        self.head = Some(cell);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|cell| {
            let cell = *cell;
            self.head = cell.next;
            self.len -= 1;
            cell.item
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}
