use crate::game::traits::PlayerId;
use std::collections::HashMap;

/// Running per-player tile counts, kept in lockstep with every ownership
/// change so score reads never need a full-grid scan.
#[derive(Debug, Default)]
pub struct ScoreLedger {
    counts: HashMap<PlayerId, usize>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tile ownership transition.
    pub fn apply(&mut self, prev: Option<PlayerId>, next: Option<PlayerId>) {
        if prev == next {
            return;
        }
        if let Some(id) = prev {
            if let Some(count) = self.counts.get_mut(&id) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.counts.remove(&id);
                }
            }
        }
        if let Some(id) = next {
            *self.counts.entry(id).or_insert(0) += 1;
        }
    }

    pub fn count(&self, id: PlayerId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Total owned tiles across all players; equals the number of non-zero
    /// cells on the tile layer.
    pub fn total_owned(&self) -> usize {
        self.counts.values().sum()
    }
}
