// mesa/src/claim.rs
// Round claims: the player's assertion about whether a matching broadcast
// exists, with an order-sensitivity flag.

use crate::defs::{POINTS_NOT_OCCURRED, POINTS_OCCURRED, POINTS_ORDERED};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three reachable claim types. An order-sensitive claim is always a
/// positive claim: when the order flag is set it takes labeling precedence
/// over the occurred flag, and evaluation assumes `occurred = true`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClaimLabel {
    Occurred,
    DidNotOccur,
    OccurredInOrder,
}

impl ClaimLabel {
    /// Derive the label from the resolved claim flags.
    pub fn from_flags(occurred: bool, order_matters: bool) -> Self {
        if order_matters {
            ClaimLabel::OccurredInOrder
        } else if occurred {
            ClaimLabel::Occurred
        } else {
            ClaimLabel::DidNotOccur
        }
    }

    /// Base points wagered on this claim type.
    pub fn base_points(&self) -> i32 {
        match self {
            ClaimLabel::OccurredInOrder => POINTS_ORDERED,
            ClaimLabel::Occurred => POINTS_OCCURRED,
            ClaimLabel::DidNotOccur => POINTS_NOT_OCCURRED,
        }
    }

    pub fn order_matters(&self) -> bool {
        matches!(self, ClaimLabel::OccurredInOrder)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimLabel::Occurred => "OCURRIO",
            ClaimLabel::DidNotOccur => "NO OCURRIO",
            ClaimLabel::OccurredInOrder => "OCURRIO EN ORDEN",
        }
    }
}

impl fmt::Display for ClaimLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The computed correctness of a claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "Acierto",
            Verdict::Incorrect => "NoAcierto",
        }
    }

    /// The message the presentation layer shows the player.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Correct => "Siiii!",
            Verdict::Incorrect => "MENTIRA PORQUE MENTIS",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_flag_takes_precedence() {
        assert_eq!(ClaimLabel::from_flags(true, true), ClaimLabel::OccurredInOrder);
        assert_eq!(ClaimLabel::from_flags(false, true), ClaimLabel::OccurredInOrder);
        assert_eq!(ClaimLabel::from_flags(true, false), ClaimLabel::Occurred);
        assert_eq!(ClaimLabel::from_flags(false, false), ClaimLabel::DidNotOccur);
    }

    #[test]
    fn test_base_points_per_claim_type() {
        assert_eq!(ClaimLabel::OccurredInOrder.base_points(), 30);
        assert_eq!(ClaimLabel::Occurred.base_points(), 10);
        assert_eq!(ClaimLabel::DidNotOccur.base_points(), 20);
    }

    #[test]
    fn test_labels_and_verdicts_render_captions() {
        assert_eq!(ClaimLabel::Occurred.to_string(), "OCURRIO");
        assert_eq!(ClaimLabel::DidNotOccur.to_string(), "NO OCURRIO");
        assert_eq!(ClaimLabel::OccurredInOrder.to_string(), "OCURRIO EN ORDEN");
        assert_eq!(Verdict::Correct.to_string(), "Acierto");
        assert_eq!(Verdict::Incorrect.to_string(), "NoAcierto");
        assert_eq!(Verdict::Correct.message(), "Siiii!");
        assert_eq!(Verdict::Incorrect.message(), "MENTIRA PORQUE MENTIS");
    }
}
