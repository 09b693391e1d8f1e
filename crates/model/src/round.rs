//! Competition rounds and their time-gated availability.

use {
    chrono::{DateTime, TimeZone, Utc},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display, Formatter},
    thiserror::Error,
};

/// A discrete competition period. The declared order is fixed and is also
/// the order in which rounds are presented to users.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Round {
    #[serde(rename = "ROUND0")]
    Round0,
    #[serde(rename = "ROUND1")]
    Round1,
    #[serde(rename = "ROUND2")]
    Round2,
    #[serde(rename = "ROUND3")]
    Round3,
    #[serde(rename = "ROUND4")]
    Round4,
    #[serde(rename = "ROUND5")]
    Round5,
}

impl Round {
    pub const ALL: [Round; 6] = [
        Round::Round0,
        Round::Round1,
        Round::Round2,
        Round::Round3,
        Round::Round4,
        Round::Round5,
    ];

    /// The identifier the Prosperity API uses in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Round0 => "ROUND0",
            Round::Round1 => "ROUND1",
            Round::Round2 => "ROUND2",
            Round::Round3 => "ROUND3",
            Round::Round4 => "ROUND4",
            Round::Round5 => "ROUND5",
        }
    }

    /// Human readable label as shown on the Prosperity website.
    pub fn label(&self) -> &'static str {
        match self {
            Round::Round0 => "Tutorial",
            Round::Round1 => "Round 1",
            Round::Round2 => "Round 2",
            Round::Round3 => "Round 3",
            Round::Round4 => "Round 4",
            Round::Round5 => "Round 5",
        }
    }

    /// The instant from which submissions for this round can be listed.
    pub fn open_from(&self) -> DateTime<Utc> {
        let (year, month, day) = match self {
            Round::Round0 => (2024, 2, 12),
            Round::Round1 => (2024, 4, 8),
            Round::Round2 => (2024, 4, 11),
            Round::Round3 => (2024, 4, 14),
            Round::Round4 => (2024, 4, 17),
            Round::Round5 => (2024, 4, 20),
        };
        // All rounds open at 09:00 UTC, a valid timestamp by construction.
        Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error)]
#[error("unknown round {0:?}, expected one of ROUND0..ROUND5")]
pub struct UnknownRound(String);

impl std::str::FromStr for Round {
    type Err = UnknownRound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Round::ALL
            .into_iter()
            .find(|round| round.as_str() == s)
            .ok_or_else(|| UnknownRound(s.to_string()))
    }
}

/// Whether a round may be selected at some instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundAvailability {
    pub round: Round,
    pub selectable: bool,
}

/// Computes which rounds are selectable at `now`, in declared round order.
/// A round is selectable from its opening instant onwards, boundary
/// included. The order is never re-sorted by availability.
pub fn availability(now: DateTime<Utc>) -> Vec<RoundAvailability> {
    Round::ALL
        .into_iter()
        .map(|round| RoundAvailability {
            round,
            selectable: now >= round.open_from(),
        })
        .collect()
}
