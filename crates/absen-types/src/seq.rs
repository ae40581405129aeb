//! Stale-response guard for views that refetch on every dependency change

use std::cell::Cell;
use std::rc::Rc;

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter shared between a view and its in-flight
/// requests. Only the response holding the latest ticket may be applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: Rc<Cell<u64>>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

impl PartialEq for RequestSeq {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_first_response_is_discarded() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        // second resolves first, then the slow first one arrives
        assert!(seq.is_current(second));
        assert!(!seq.is_current(first));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSeq::new();
        let in_flight = seq.clone();
        let ticket = in_flight.begin();
        assert!(seq.is_current(ticket));
        seq.begin();
        assert!(!in_flight.is_current(ticket));
        assert_eq!(seq, in_flight);
        assert_ne!(seq, RequestSeq::new());
    }
}
