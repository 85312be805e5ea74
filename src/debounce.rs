/// Debounce bookkeeping, independent of any timer
///
/// Each keystroke schedules its value and starts a timer carrying the returned
/// [`Ticket`]. When a timer fires, only the ticket of the latest schedule
/// yields the value; every earlier timer finds itself superseded.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Debouncer {
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending value with `value`
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the latest schedule
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value; outstanding timers fire into nothing
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}
