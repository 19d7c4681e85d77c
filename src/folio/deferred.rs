//! # Deferred Search
//!
//! Search input arrives one keystroke at a time while recomputing a projection
//! walks every item. Keystrokes are therefore recorded here first and applied
//! later, at lower priority than echoing the input.
//!
//! There is no cancellation. Every submission bumps a generation counter and
//! hands back a [`SearchTicket`]; settling a ticket that is no longer the
//! latest yields nothing. The last write always wins.

/// Proof of one submission. Only the newest ticket settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct DeferredSearch {
    generation: u64,
    pending: Option<String>,
}

impl DeferredSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `term` as the latest input, superseding anything pending.
    pub fn submit(&mut self, term: impl Into<String>) -> SearchTicket {
        self.generation += 1;
        self.pending = Some(term.into());
        SearchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Returns the pending term if `ticket` is still the latest submission.
    /// Stale tickets return `None` and leave the pending term in place.
    pub fn settle(&mut self, ticket: SearchTicket) -> Option<String> {
        if self.is_current(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Takes whatever is pending regardless of tickets.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_settles() {
        let mut search = DeferredSearch::new();
        let t = search.submit("go");
        assert_eq!(search.settle(t), Some("go".to_string()));
        assert!(!search.has_pending());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut search = DeferredSearch::new();
        let first = search.submit("g");
        let second = search.submit("go");
        assert_eq!(search.settle(first), None);
        assert!(search.has_pending());
        assert_eq!(search.settle(second), Some("go".to_string()));
    }

    #[test]
    fn settle_is_one_shot() {
        let mut search = DeferredSearch::new();
        let t = search.submit("rust");
        assert!(search.settle(t).is_some());
        assert_eq!(search.settle(t), None);
    }

    #[test]
    fn flush_takes_latest() {
        let mut search = DeferredSearch::new();
        search.submit("r");
        search.submit("ru");
        assert_eq!(search.flush(), Some("ru".to_string()));
        assert_eq!(search.flush(), None);
    }
}
