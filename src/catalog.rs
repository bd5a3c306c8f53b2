// mesa/src/catalog.rs
// This module holds the episode catalog and the lineup matching predicates.

use crate::defs::HostId;
use serde::{Deserialize, Serialize};

/// One historical broadcast. `lineup` keeps the host ids exactly in the
/// order they were sourced; that order is the meaning of an ordered claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeRecord {
    pub id: String,
    pub video_ref: String,
    pub title: String,
    pub cover_ref: String,
    pub lineup: Vec<HostId>,
}

impl EpisodeRecord {
    /// Positional match: same length, same hosts, same order.
    pub fn matches_ordered(&self, filled: &[HostId]) -> bool {
        self.lineup.len() == filled.len()
            && self
                .lineup
                .iter()
                .zip(filled.iter())
                .all(|(lineup_host, board_host)| lineup_host == board_host)
    }

    /// Set match: same length and every lineup host is somewhere on the
    /// board. Lineups carry no duplicate hosts, so cardinality plus
    /// membership is set equality.
    pub fn matches_unordered(&self, filled: &[HostId]) -> bool {
        self.lineup.len() == filled.len()
            && self.lineup.iter().all(|host| filled.contains(host))
    }
}

/// The loaded catalog of broadcast records, read-only after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeCatalog {
    episodes: Vec<EpisodeRecord>,
}

impl EpisodeCatalog {
    pub fn new(episodes: Vec<EpisodeRecord>) -> Self {
        EpisodeCatalog { episodes }
    }

    pub fn episodes(&self) -> &[EpisodeRecord] {
        &self.episodes
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether any episode matches the filled board under the given mode.
    pub fn has_match(&self, filled: &[HostId], ordered: bool) -> bool {
        if ordered {
            self.episodes.iter().any(|e| e.matches_ordered(filled))
        } else {
            self.episodes.iter().any(|e| e.matches_unordered(filled))
        }
    }

    /// Every episode matching the filled board under the given mode, for
    /// the "programs that fit" display.
    pub fn matching_episodes(&self, filled: &[HostId], ordered: bool) -> Vec<EpisodeRecord> {
        self.episodes
            .iter()
            .filter(|e| {
                if ordered {
                    e.matches_ordered(filled)
                } else {
                    e.matches_unordered(filled)
                }
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, lineup: Vec<HostId>) -> EpisodeRecord {
        EpisodeRecord {
            id: id.to_string(),
            video_ref: format!("video-{id}"),
            title: format!("Programa {id}"),
            cover_ref: format!("cover-{id}.jpg"),
            lineup,
        }
    }

    #[test]
    fn test_ordered_match_requires_positions() {
        let e = episode("a", vec![1, 2, 3, 4]);

        assert!(e.matches_ordered(&[1, 2, 3, 4]));
        assert!(!e.matches_ordered(&[4, 3, 2, 1]));
        assert!(!e.matches_ordered(&[1, 2, 3]));
        assert!(!e.matches_ordered(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_unordered_match_ignores_positions() {
        let e = episode("a", vec![1, 2, 3, 4]);

        assert!(e.matches_unordered(&[4, 3, 2, 1]));
        assert!(e.matches_unordered(&[1, 2, 3, 4]));
        assert!(!e.matches_unordered(&[1, 2, 3, 5]));
        assert!(!e.matches_unordered(&[1, 2, 3]));
    }

    #[test]
    fn test_ordered_match_implies_unordered_match() {
        let e = episode("a", vec![6, 2, 9]);
        let filled = [6, 2, 9];
        assert!(e.matches_ordered(&filled));
        assert!(e.matches_unordered(&filled));
    }

    #[test]
    fn test_catalog_collects_all_matches() {
        let catalog = EpisodeCatalog::new(vec![
            episode("a", vec![1, 2, 3, 4]),
            episode("b", vec![4, 3, 2, 1]),
            episode("c", vec![1, 2, 3]),
        ]);

        let filled = [1, 2, 3, 4];
        assert!(catalog.has_match(&filled, true));
        assert!(catalog.has_match(&filled, false));

        let ordered = catalog.matching_episodes(&filled, true);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, "a");

        let unordered = catalog.matching_episodes(&filled, false);
        assert_eq!(unordered.len(), 2);
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let catalog = EpisodeCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.has_match(&[1, 2, 3, 4], false));
        assert!(catalog.matching_episodes(&[1, 2, 3, 4], true).is_empty());
    }
}
