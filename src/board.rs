// mesa/src/board.rs
// This module handles the Spot Board: six fixed seating positions whose
// occupants the player rearranges before issuing a claim.

use crate::defs::{HostId, SPOTS_ON_BOARD};
use serde::{Deserialize, Serialize};

/// One of the six fixed seats. Only `occupant` ever changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spot {
    pub position: u8,
    pub occupant: Option<HostId>,
}

impl Spot {
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Result of a click on a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotToggle {
    /// The spot was empty; the UI should now offer a host to seat there.
    SelectionPending,
    /// The spot was occupied and has been cleared.
    Cleared,
}

/// The board is always exactly SPOTS_ON_BOARD spots, positions 1..=6 fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotBoard {
    spots: [Spot; SPOTS_ON_BOARD],
}

impl SpotBoard {
    pub fn new() -> Self {
        let mut position = 0u8;
        SpotBoard {
            spots: [(); SPOTS_ON_BOARD].map(|()| {
                position += 1;
                Spot {
                    position,
                    occupant: None,
                }
            }),
        }
    }

    fn index_of(position: u8) -> Option<usize> {
        if (1..=SPOTS_ON_BOARD as u8).contains(&position) {
            Some(position as usize - 1)
        } else {
            None
        }
    }

    /// Single logical toggle: an empty spot enters selection-pending (the
    /// caller follows up with `assign`), an occupied spot is cleared.
    /// Invalid positions leave the board untouched.
    pub fn toggle_or_select(&mut self, position: u8) -> Option<SpotToggle> {
        let index = Self::index_of(position)?;
        if self.spots[index].is_empty() {
            Some(SpotToggle::SelectionPending)
        } else {
            self.spots[index].occupant = None;
            Some(SpotToggle::Cleared)
        }
    }

    /// Seat a host at `position`. A host holds at most one seat: if already
    /// seated elsewhere, that other spot is cleared first. Invalid positions
    /// are a silent no-op.
    pub fn assign(&mut self, position: u8, host_id: HostId) {
        let Some(index) = Self::index_of(position) else {
            return;
        };
        for spot in &mut self.spots {
            if spot.occupant == Some(host_id) {
                spot.occupant = None;
            }
        }
        self.spots[index].occupant = Some(host_id);
    }

    /// Empty every spot. Idempotent.
    pub fn clear_all(&mut self) {
        for spot in &mut self.spots {
            spot.occupant = None;
        }
    }

    /// Replace the whole board, used by the randomizer reseed.
    pub fn replace(&mut self, spots: [Spot; SPOTS_ON_BOARD]) {
        self.spots = spots;
    }

    pub fn spots(&self) -> &[Spot; SPOTS_ON_BOARD] {
        &self.spots
    }

    /// Owned copy for history entries; later board mutations must never
    /// reach back into recorded rounds.
    pub fn snapshot(&self) -> [Spot; SPOTS_ON_BOARD] {
        self.spots
    }

    /// Occupants in ascending position order. This is the canonical order
    /// an order-sensitive claim is evaluated against.
    pub fn filled_hosts(&self) -> Vec<HostId> {
        self.spots.iter().filter_map(|spot| spot.occupant).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.spots.iter().filter(|spot| !spot.is_empty()).count()
    }
}

impl Default for SpotBoard {
    fn default() -> Self {
        Self::new()
    }
}
