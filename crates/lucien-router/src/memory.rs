//! In-memory history for testing.

use std::cell::RefCell;
use std::rc::Rc;

use crate::History;

/// A recorded history write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOp {
    Push(String),
    Replace(String),
}

#[derive(Debug)]
struct Inner {
    stack: Vec<String>,
    log: Vec<HistoryOp>,
}

/// In-memory [`History`] for tests and headless embedding.
///
/// Clones share one stack, the way every handle to the browser's history
/// object refers to the same session. Tests keep a clone, hand another to
/// the router, and use [`back`](MemoryHistory::back) to play the visitor's
/// back button. A full write log is kept so tests can assert not only
/// where a session ended up but how it got there.
///
/// # Example
///
/// ```ignore
/// use lucien_router::{History, MemoryHistory};
///
/// let history = MemoryHistory::at("/modules/");
/// history.push("/signal/");
/// assert_eq!(history.depth(), 2);
/// assert_eq!(history.back(), Some("/modules/".to_owned()));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryHistory {
    /// Start a session at the site root.
    #[must_use]
    pub fn new() -> Self {
        Self::at("/")
    }

    /// Start a session at the given path.
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                stack: vec![path.to_owned()],
                log: Vec::new(),
            })),
        }
    }

    /// Entries on the back stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.borrow().stack.len()
    }

    /// Writes applied so far, oldest first.
    #[must_use]
    pub fn log(&self) -> Vec<HistoryOp> {
        self.inner.borrow().log.clone()
    }

    /// Drop the newest entry, like the browser's back button, and return
    /// the path that became current. `None` at the bottom of the stack.
    pub fn back(&self) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        if inner.stack.len() > 1 {
            inner.stack.pop();
            inner.stack.last().cloned()
        } else {
            None
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn path(&self) -> String {
        self.inner
            .borrow()
            .stack
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_owned())
    }

    fn push(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.stack.push(path.to_owned());
        inner.log.push(HistoryOp::Push(path.to_owned()));
    }

    fn replace(&self, path: &str) {
        let mut inner = self.inner.borrow_mut();
        if let Some(current) = inner.stack.last_mut() {
            *current = path.to_owned();
        } else {
            inner.stack.push(path.to_owned());
        }
        inner.log.push(HistoryOp::Replace(path.to_owned()));
    }
}
