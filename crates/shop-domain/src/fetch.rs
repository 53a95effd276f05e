//! Fetch Sequencing
//!
//! Catalog requests overlap when the user keeps typing. Each request takes a
//! ticket; only the response holding the latest ticket may be applied.

/// Sequence number handed to one catalog request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Supersedes every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = FetchSequence::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_default_ticket_is_never_current_after_begin() {
        let mut seq = FetchSequence::new();
        seq.begin();
        assert!(!seq.is_current(RequestTicket::default()));
    }
}
