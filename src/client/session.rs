use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Supersession guard for user-initiated searches.
///
/// Each new search takes a fresh ticket; a response is applied only while
/// its ticket is still the latest. Out-of-order completions therefore
/// cannot let a stale response overwrite a newer one, without any explicit
/// cancellation of the older request.
#[derive(Debug, Default)]
pub struct FetchSession {
    generation: AtomicU64,
}

impl FetchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, superseding any prior in-flight ticket.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns whether `ticket` still belongs to the latest started fetch.
    #[must_use]
    pub fn accept(&self, ticket: FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
