//! Ownership tickets for in-flight loads
//!
//! Every load is started with a ticket. Only the most recent ticket may write
//! its result back, so a slow response for an old id (or for a page that has
//! gone away) is dropped instead of overwriting newer state.

use tracing::debug;

/// Issued when a load starts; presented again when it completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    car_id: String,
}

impl LoadTicket {
    pub fn car_id(&self) -> &str {
        &self.car_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Hands out tickets and remembers which one is current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadTracker {
    generation: u64,
    current: Option<String>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `car_id`; every earlier ticket becomes stale.
    pub fn begin(&mut self, car_id: &str) -> LoadTicket {
        self.generation += 1;
        self.current = Some(car_id.to_string());
        LoadTicket {
            generation: self.generation,
            car_id: car_id.to_string(),
        }
    }

    /// Whether `ticket` may still write its result
    pub fn accepts(&self, ticket: &LoadTicket) -> bool {
        let current = ticket.generation == self.generation
            && self.current.as_deref() == Some(ticket.car_id.as_str());
        if !current {
            debug!(
                "Dropping stale load for car {} (generation {}, current {})",
                ticket.car_id, ticket.generation, self.generation
            );
        }
        current
    }

    /// Retire the current ticket without starting a new load (page teardown).
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    /// The id of the load that may currently write, if any
    pub fn current_car_id(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_accepted() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin("car-1");
        assert!(tracker.accepts(&ticket));
        assert_eq!(tracker.current_car_id(), Some("car-1"));
    }

    #[test]
    fn test_new_id_supersedes_old_ticket() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin("car-1");
        let second = tracker.begin("car-2");
        assert!(!tracker.accepts(&first));
        assert!(tracker.accepts(&second));
    }

    #[test]
    fn test_reload_same_id_supersedes() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin("car-1");
        let second = tracker.begin("car-1");
        assert!(!tracker.accepts(&first));
        assert!(tracker.accepts(&second));
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_invalidate_rejects_everything() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin("car-1");
        tracker.invalidate();
        assert!(!tracker.accepts(&ticket));
        assert_eq!(tracker.current_car_id(), None);
    }
}
