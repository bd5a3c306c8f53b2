// mesa/src/evaluator.rs
// Core claim evaluation: turns the current board plus a claim into a
// verdict, a score delta and the episodes that back it. Pure reads only;
// committing the result is the session's job.

use crate::board::{Spot, SpotBoard};
use crate::catalog::{EpisodeCatalog, EpisodeRecord};
use crate::claim::{ClaimLabel, Verdict};
use crate::config::GameConfig;
use crate::defs::{HostId, SPOTS_ON_BOARD};
use crate::history::HistoryLedger;
use serde::Serialize;

/// Shown when a claim is issued with too few spots filled.
pub const INCOMPLETE_MESSAGE: &str = "NO TERMINASTE";

/// Shown when a round is rejected as a repeat play.
pub const DUPLICATE_MESSAGE: &str = "Ya has hecho una jugada similar. Intenta algo diferente.";

/// A fully scored round, ready to commit.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResolution {
    pub claim_label: ClaimLabel,
    pub verdict: Verdict,
    pub is_match: bool,
    pub score_before: i32,
    pub delta: i32,
    pub score_after: i32,
    pub matching_episodes: Vec<EpisodeRecord>,
    pub board_snapshot: [Spot; SPOTS_ON_BOARD],
}

/// Outcome of evaluating a claim. The non-scoring branches are expected
/// parts of normal play, not failures.
#[derive(Debug, Clone, Serialize)]
pub enum Evaluation {
    /// Fewer than the minimum filled spots; nothing scored, nothing logged.
    Incomplete,
    /// An equivalent play was already recorded under the same claim type.
    Duplicate { claim_label: ClaimLabel },
    Resolved(RoundResolution),
}

impl Evaluation {
    /// The message the presentation layer shows for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Evaluation::Incomplete => INCOMPLETE_MESSAGE,
            Evaluation::Duplicate { .. } => DUPLICATE_MESSAGE,
            Evaluation::Resolved(res) => res.verdict.message(),
        }
    }
}

/// Evaluate a claim against the catalog and play history.
///
/// The claim arrives as the resolved `(occurred, order_matters)` pair; an
/// order-sensitive claim is always a positive one, so callers pass
/// `occurred = true` alongside `order_matters = true` and correctness
/// reduces to whether a positional match exists.
pub fn evaluate(
    board: &SpotBoard,
    occurred: bool,
    order_matters: bool,
    catalog: &EpisodeCatalog,
    ledger: &HistoryLedger,
    score_before: i32,
    config: &GameConfig,
) -> Evaluation {
    let filled = board.filled_hosts();

    if filled.len() < config.min_filled_spots {
        return Evaluation::Incomplete;
    }

    let claim_label = ClaimLabel::from_flags(occurred, order_matters);

    if is_repeat_play(ledger, claim_label, &filled) {
        return Evaluation::Duplicate { claim_label };
    }

    let matching_episodes = catalog.matching_episodes(&filled, claim_label.order_matters());
    let is_match = !matching_episodes.is_empty();

    let base_points = config.points_for(claim_label);
    let correct = is_match == occurred;
    let delta = if correct { base_points } else { -base_points };

    Evaluation::Resolved(RoundResolution {
        claim_label,
        verdict: if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        },
        is_match,
        score_before,
        delta,
        score_after: score_before + delta,
        matching_episodes,
        board_snapshot: board.snapshot(),
    })
}

/// A prior round counts as a repeat when it used the same claim type and
/// its filled set has the same size as, and sits wholly inside, the
/// current one. Order is never compared here, even for ordered claims.
fn is_repeat_play(ledger: &HistoryLedger, claim_label: ClaimLabel, filled: &[HostId]) -> bool {
    ledger
        .find(|entry| {
            if entry.claim_label != claim_label {
                return false;
            }
            let prior = entry.filled_hosts();
            prior.len() == filled.len() && prior.iter().all(|host| filled.contains(host))
        })
        .is_some()
}
