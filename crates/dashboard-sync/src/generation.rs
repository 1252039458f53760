//! Generation Counter
//!
//! Each async operation takes a ticket when it is issued and may apply its
//! result only while that ticket is still the latest one. Superseded results
//! are dropped silently.

/// Tag captured by one request at issue time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Supersede all outstanding tickets without starting a request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[cfg(test)]
    fn latest(&self) -> Option<Ticket> {
        (self.latest > 0).then_some(Ticket(self.latest))
    }
}
