// mesa/src/history.rs
// Append-only ledger of resolved rounds. Read by the presentation layer
// and scanned by the repeat-play gate.

use crate::board::Spot;
use crate::claim::{ClaimLabel, Verdict};
use crate::defs::{HostId, SPOTS_ON_BOARD};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One resolved round. The board snapshot is an owned copy; mutating the
/// live board afterwards never changes recorded history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board_snapshot: [Spot; SPOTS_ON_BOARD],
    pub claim_label: ClaimLabel,
    pub verdict: Verdict,
    pub score_before: i32,
    pub delta: i32,
    pub score_after: i32,
    pub recorded_at: SystemTime,
}

impl HistoryEntry {
    /// Occupied hosts of the recorded board, in position order.
    pub fn filled_hosts(&self) -> Vec<HostId> {
        self.board_snapshot
            .iter()
            .filter_map(|spot| spot.occupant)
            .collect()
    }
}

/// Ordered log of rounds played this session. Length only grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        HistoryLedger {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Linear scan, first entry satisfying the predicate. Session sizes are
    /// tens of rounds, no index needed.
    pub fn find<P>(&self, predicate: P) -> Option<&HistoryEntry>
    where
        P: FnMut(&&HistoryEntry) -> bool,
    {
        self.entries.iter().find(predicate)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all recorded deltas. The session score must always equal this.
    pub fn delta_sum(&self) -> i32 {
        self.entries.iter().map(|entry| entry.delta).sum()
    }
}
