// mesa/src/randomizer.rs
// Fresh partial board assignments for the start of each round.

use crate::board::{Spot, SpotBoard};
use crate::config::GameConfig;
use crate::defs::{HostId, SPOTS_ON_BOARD};
use crate::roster::Roster;
use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

/// Produce a fresh partial assignment: a uniform shuffle of the roster,
/// then the first `k` hosts seated on spots 1..=k with `k` drawn from the
/// configured reseed fill range. An empty roster yields an all-empty board
/// rather than an error. The caller replaces the live board.
pub fn reseed_with<R: Rng + ?Sized>(
    roster: &Roster,
    rng: &mut R,
    config: &GameConfig,
) -> [Spot; SPOTS_ON_BOARD] {
    let mut spots = SpotBoard::new().snapshot();
    if roster.is_empty() {
        return spots;
    }

    let mut shuffled: Vec<HostId> = roster.ids();
    shuffled.shuffle(rng);

    // Small rosters and oversized conf values cap the fill; the range must
    // stay non-empty.
    let upper = config.reseed_fill_max.min(shuffled.len()).min(SPOTS_ON_BOARD);
    let lower = config.reseed_fill_min.min(upper);
    let fill = rng.random_range(lower..=upper);
    for (spot, host_id) in spots.iter_mut().zip(shuffled.into_iter().take(fill)) {
        spot.occupant = Some(host_id);
    }
    spots
}

/// Reseed with the thread-local generator.
pub fn reseed(roster: &Roster, config: &GameConfig) -> [Spot; SPOTS_ON_BOARD] {
    reseed_with(roster, &mut rng(), config)
}
