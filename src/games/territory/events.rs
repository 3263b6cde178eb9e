use crate::game::traits::PlayerId;
use std::collections::BTreeMap;

/// Actions the tick loop executes at a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    Respawn(PlayerId),
}

/// Tick-keyed action queue, the engine's replacement for timer fields:
/// delayed effects are scheduled against an absolute tick and drained at the
/// start of each tick. BTreeMap keeps draining order deterministic.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: BTreeMap<u64, Vec<DeferredAction>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, tick: u64, action: DeferredAction) {
        self.pending.entry(tick).or_default().push(action);
    }

    /// Removes and returns every action due at or before `tick`, ordered by
    /// due tick, then insertion order.
    pub fn drain_due(&mut self, tick: u64) -> Vec<DeferredAction> {
        let later = self.pending.split_off(&(tick + 1));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().flatten().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_due_returns_only_due_actions() {
        let mut queue = DeferredQueue::new();
        queue.schedule(5, DeferredAction::Respawn(1));
        queue.schedule(10, DeferredAction::Respawn(2));

        assert!(queue.drain_due(4).is_empty());
        assert_eq!(queue.drain_due(5), vec![DeferredAction::Respawn(1)]);
        assert_eq!(queue.drain_due(20), vec![DeferredAction::Respawn(2)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_due_orders_by_tick_then_insertion() {
        let mut queue = DeferredQueue::new();
        queue.schedule(7, DeferredAction::Respawn(3));
        queue.schedule(3, DeferredAction::Respawn(1));
        queue.schedule(3, DeferredAction::Respawn(2));

        assert_eq!(
            queue.drain_due(7),
            vec![
                DeferredAction::Respawn(1),
                DeferredAction::Respawn(2),
                DeferredAction::Respawn(3),
            ]
        );
    }
}
