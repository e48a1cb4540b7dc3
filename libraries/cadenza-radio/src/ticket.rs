//! Latest-request-wins bookkeeping
//!
//! Radio lookups are not cancellable. When a user regenerates a station
//! while an older lookup is still in flight, the host takes a ticket for
//! each request and only applies a result whose ticket is still current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one radio request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out monotonically increasing tickets
#[derive(Debug, Default)]
pub struct RadioRequests {
    latest: AtomicU64,
}

impl RadioRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` belongs to the most recent request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let requests = RadioRequests::new();
        let first = requests.begin();
        assert!(requests.is_current(first));

        let second = requests.begin();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn tickets_are_shared_across_threads() {
        let requests = std::sync::Arc::new(RadioRequests::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let requests = std::sync::Arc::clone(&requests);
                std::thread::spawn(move || requests.begin())
            })
            .collect();

        let mut tickets: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        tickets.sort();
        tickets.dedup();
        assert_eq!(tickets.len(), 4);
        assert!(requests.is_current(tickets[3]));
    }
}
