//! Async Task Tickets
//!
//! A `Generation` hands out tickets; issuing a new one supersedes all
//! earlier tickets. Async continuations check their ticket before they
//! touch shared state, so a superseded fetch, an outdated camera settle or
//! a torn-down view never commits. `Debounce` keeps only the latest
//! delayed action.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default, Debug)]
pub struct Generation {
    current: Rc<Cell<u64>>,
}

#[derive(Clone, Debug)]
pub struct Ticket {
    issued: u64,
    current: Rc<Cell<u64>>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.current.get() + 1;
        self.current.set(next);
        Ticket {
            issued: next,
            current: Rc::clone(&self.current),
        }
    }

    /// Invalidate every outstanding ticket
    pub fn cancel(&self) {
        self.current.set(self.current.get() + 1);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.issued
    }

    /// Consume the ticket if it is still current; later calls return false
    pub fn redeem(&self) -> bool {
        if self.is_current() {
            self.current.set(self.issued + 1);
            true
        } else {
            false
        }
    }
}

/// Latest-only slot for a delayed action. Scheduling drops the previous
/// handle; for timer handles (`gloo_timers::callback::Timeout`) dropping
/// cancels the timer.
#[derive(Debug)]
pub struct Debounce<H> {
    pending: Option<H>,
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Debounce<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending action; true if an earlier one was superseded
    pub fn schedule(&mut self, handle: H) -> bool {
        self.pending.replace(handle).is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Delayed action that records its term when cancelled
    struct PendingSearch {
        term: &'static str,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for PendingSearch {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.term);
        }
    }

    #[test]
    fn test_debounce_keeps_latest() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut debounce = Debounce::new();
        let typed = ["r", "ri", "riv"];
        for (i, term) in typed.into_iter().enumerate() {
            let superseded = debounce.schedule(PendingSearch {
                term,
                cancelled: Rc::clone(&cancelled),
            });
            assert_eq!(superseded, i > 0);
        }
        // Only the last keystroke is still waiting
        assert_eq!(*cancelled.borrow(), vec!["r", "ri"]);

        debounce.cancel();
        assert_eq!(*cancelled.borrow(), vec!["r", "ri", "riv"]);
    }

    #[test]
    fn test_newer_ticket_supersedes() {
        let gen = Generation::new();
        let first = gen.issue();
        assert!(first.is_current());
        let second = gen.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cancel_invalidates_all() {
        let gen = Generation::new();
        let ticket = gen.issue();
        gen.cancel();
        assert!(!ticket.is_current());
        assert!(gen.issue().is_current());
    }

    #[test]
    fn test_redeem_once() {
        // Two completion paths racing for one ticket: only the first wins
        let gen = Generation::new();
        let ticket = gen.issue();
        let other_path = ticket.clone();
        assert!(ticket.redeem());
        assert!(!other_path.redeem());
        assert!(!ticket.is_current());
    }
}
