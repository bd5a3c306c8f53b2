// mesa/src/session.rs
// This module provides a unified GameSession struct that encapsulates all
// session state (roster, catalog, board, score, history) and commits the
// evaluator's results. The core is single-threaded and event-driven, so no
// locking is involved; every state transition completes before the next.

use crate::board::{SpotBoard, SpotToggle};
use crate::catalog::EpisodeCatalog;
use crate::claim::ClaimLabel;
use crate::config::GameConfig;
use crate::defs::HostId;
use crate::evaluator::{self, Evaluation};
use crate::history::{HistoryEntry, HistoryLedger};
use crate::logging::{log_info, log_warning};
use crate::randomizer;
use crate::roster::Roster;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::SystemTime;

/// All mutable session state in one place. Built only from fully loaded
/// data, so evaluation can never run against a half-loaded catalog.
pub struct GameSession {
    id: String,
    created_at: SystemTime,
    config: GameConfig,
    roster: Roster,
    catalog: EpisodeCatalog,
    board: SpotBoard,
    score: i32,
    ledger: HistoryLedger,
}

impl GameSession {
    /// Create a session with default rules and a freshly seeded board.
    pub fn new(roster: Roster, catalog: EpisodeCatalog) -> Self {
        Self::with_config(roster, catalog, GameConfig::default())
    }

    pub fn with_config(roster: Roster, catalog: EpisodeCatalog, config: GameConfig) -> Self {
        let mut rng = rand::rng();
        let session_id = format!("session_{:08x}", rng.random::<u32>());

        let mut board = SpotBoard::new();
        board.replace(randomizer::reseed(&roster, &config));

        log_info(&format!(
            "Session {session_id} started: {} hosts, {} episodes",
            roster.len(),
            catalog.len()
        ));

        Self {
            id: session_id,
            created_at: SystemTime::now(),
            config,
            roster,
            catalog,
            board,
            score: 0,
            ledger: HistoryLedger::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Get a human-readable creation time string
    pub fn created_at_string(&self) -> String {
        match self.created_at.duration_since(std::time::UNIX_EPOCH) {
            Ok(duration) => {
                let datetime: DateTime<Utc> = DateTime::from_timestamp(duration.as_secs() as i64, 0)
                    .unwrap_or_else(Utc::now);
                datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
            }
            Err(_) => "Unknown time".to_string(),
        }
    }

    // --- board mutation, forwarded to the Spot Board ---

    pub fn toggle_or_select(&mut self, position: u8) -> Option<SpotToggle> {
        self.board.toggle_or_select(position)
    }

    /// Seat a roster host. Unknown ids are ignored; the board only ever
    /// holds ids the roster can resolve.
    pub fn assign_host(&mut self, position: u8, host_id: HostId) {
        if !self.roster.contains(host_id) {
            log_warning(&format!("Ignoring unknown host id {host_id}"));
            return;
        }
        self.board.assign(position, host_id);
    }

    pub fn clear_board(&mut self) {
        self.board.clear_all();
    }

    /// Reseed the board for the next round. Called by the presentation
    /// layer once a resolved round has been shown.
    pub fn next_round(&mut self) {
        self.board
            .replace(randomizer::reseed(&self.roster, &self.config));
    }

    // --- claim resolution ---

    /// Evaluate the player's claim and commit the result.
    ///
    /// Resolved rounds append exactly one history entry and move the score.
    /// Duplicate plays commit nothing and reseed the board. Incomplete
    /// boards commit nothing and leave the board for the player to finish.
    pub fn resolve_claim(&mut self, occurred: bool, order_matters: bool) -> Evaluation {
        let outcome = evaluator::evaluate(
            &self.board,
            occurred,
            order_matters,
            &self.catalog,
            &self.ledger,
            self.score,
            &self.config,
        );

        match &outcome {
            Evaluation::Incomplete => {
                log_info(&format!(
                    "Claim rejected ({}): only {} spots filled",
                    outcome.message(),
                    self.board.filled_count()
                ));
            }
            Evaluation::Duplicate { claim_label } => {
                log_info(&format!(
                    "Repeat play rejected ({claim_label}): {}",
                    outcome.message()
                ));
                self.next_round();
            }
            Evaluation::Resolved(res) => {
                self.ledger.append(HistoryEntry {
                    board_snapshot: res.board_snapshot,
                    claim_label: res.claim_label,
                    verdict: res.verdict,
                    score_before: res.score_before,
                    delta: res.delta,
                    score_after: res.score_after,
                    recorded_at: SystemTime::now(),
                });
                self.score = res.score_after;
                log_info(&format!(
                    "Round {} resolved: {} -> {} ({:+} points, score {})",
                    self.ledger.len(),
                    res.claim_label,
                    res.verdict,
                    res.delta,
                    self.score
                ));
            }
        }

        outcome
    }

    // --- snapshots for the presentation collaborator ---

    pub fn board(&self) -> &SpotBoard {
        &self.board
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &EpisodeCatalog {
        &self.catalog
    }

    pub fn rounds_played(&self) -> usize {
        self.ledger.len()
    }

    /// Whether any prior round used the given claim type.
    pub fn has_played(&self, claim_label: ClaimLabel) -> bool {
        self.ledger
            .find(|entry| entry.claim_label == claim_label)
            .is_some()
    }

    /// Get session information as a formatted string for debugging/logging
    pub fn session_info(&self) -> String {
        format!(
            "Session[id={}, created={}, rounds={}, score={}, filled={}]",
            self.id,
            self.created_at_string(),
            self.ledger.len(),
            self.score,
            self.board.filled_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EpisodeRecord;
    use crate::defs::{MAX_RESEED_FILL, MIN_RESEED_FILL};
    use crate::roster::Host;

    fn roster_of(n: u32) -> Roster {
        Roster::new(
            (1..=n)
                .map(|id| Host {
                    id,
                    code: format!("#{id:06x}"),
                    name: format!("Host {id}"),
                    avatar_ref: String::new(),
                })
                .collect(),
        )
    }

    fn catalog_with(lineups: &[&[HostId]]) -> EpisodeCatalog {
        EpisodeCatalog::new(
            lineups
                .iter()
                .enumerate()
                .map(|(i, lineup)| EpisodeRecord {
                    id: format!("e{i}"),
                    video_ref: format!("v{i}"),
                    title: format!("Programa {i}"),
                    cover_ref: String::new(),
                    lineup: lineup.to_vec(),
                })
                .collect(),
        )
    }

    fn session() -> GameSession {
        GameSession::new(roster_of(8), catalog_with(&[&[1, 2, 3, 4]]))
    }

    fn place(session: &mut GameSession, hosts: &[HostId]) {
        session.clear_board();
        for (i, &host_id) in hosts.iter().enumerate() {
            session.assign_host(i as u8 + 1, host_id);
        }
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert!(session.id().starts_with("session_"));
        assert_eq!(session.id().len(), 16); // "session_" + 8 hex chars
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_played(), 0);

        // Seeded board respects the reseed fill range
        let filled = session.board().filled_count();
        assert!((MIN_RESEED_FILL..=MAX_RESEED_FILL).contains(&filled));

        let time_string = session.created_at_string();
        assert!(time_string.contains("UTC"));
    }

    #[test]
    fn test_unique_session_ids() {
        let a = session();
        let b = session();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_resolved_round_commits_history_and_score() {
        let mut session = session();
        place(&mut session, &[1, 2, 3, 4]);

        let outcome = session.resolve_claim(true, false);
        assert!(matches!(outcome, Evaluation::Resolved(_)));
        assert_eq!(session.score(), 10);
        assert_eq!(session.rounds_played(), 1);
        assert!(session.has_played(ClaimLabel::Occurred));
        assert_eq!(session.score(), session.history().delta_sum());
    }

    #[test]
    fn test_incomplete_round_commits_nothing() {
        let mut session = session();
        place(&mut session, &[1, 2, 3]);

        let outcome = session.resolve_claim(true, false);
        assert!(matches!(outcome, Evaluation::Incomplete));
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_played(), 0);
        // Board untouched so the player can finish it
        assert_eq!(session.board().filled_hosts(), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_round_reseeds_without_scoring() {
        let mut session = session();
        place(&mut session, &[1, 2, 3, 4]);
        session.resolve_claim(true, false);

        place(&mut session, &[4, 3, 2, 1]);
        let outcome = session.resolve_claim(true, false);

        assert!(matches!(outcome, Evaluation::Duplicate { .. }));
        assert_eq!(session.score(), 10);
        assert_eq!(session.rounds_played(), 1);

        // The board was reseeded, not left on the rejected play
        let filled = session.board().filled_count();
        assert!((MIN_RESEED_FILL..=MAX_RESEED_FILL).contains(&filled));
    }

    #[test]
    fn test_score_always_equals_ledger_sum() {
        let mut session = session();

        place(&mut session, &[1, 2, 3, 4]);
        session.resolve_claim(true, false);
        place(&mut session, &[1, 2, 3, 5]);
        session.resolve_claim(true, false);
        place(&mut session, &[5, 6, 7, 8]);
        session.resolve_claim(false, false);

        assert_eq!(session.score(), session.history().delta_sum());
    }

    #[test]
    fn test_history_snapshot_survives_board_mutation() {
        let mut session = session();
        place(&mut session, &[1, 2, 3, 4]);
        session.resolve_claim(true, false);

        session.clear_board();
        session.assign_host(1, 8);

        let entry = &session.history().entries()[0];
        assert_eq!(entry.filled_hosts(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_host_is_not_seated() {
        let mut session = session();
        session.clear_board();
        session.assign_host(1, 999);
        assert_eq!(session.board().filled_count(), 0);
    }

    #[test]
    fn test_reseed_honors_configured_fill_range() {
        let config = GameConfig {
            reseed_fill_min: 6,
            reseed_fill_max: 6,
            ..GameConfig::default()
        };
        let mut session =
            GameSession::with_config(roster_of(8), catalog_with(&[&[1, 2, 3, 4]]), config);

        for _ in 0..20 {
            session.next_round();
            assert_eq!(session.board().filled_count(), 6);
        }
    }

    #[test]
    fn test_next_round_reseeds_board() {
        let mut session = session();
        session.clear_board();
        session.next_round();

        let filled = session.board().filled_count();
        assert!((MIN_RESEED_FILL..=MAX_RESEED_FILL).contains(&filled));
    }

    #[test]
    fn test_session_info() {
        let session = session();
        let info = session.session_info();
        assert!(info.contains("Session[id="));
        assert!(info.contains("rounds=0"));
        assert!(info.contains("score=0"));
        assert!(info.contains(session.id()));
    }
}
