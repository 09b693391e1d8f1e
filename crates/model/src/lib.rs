//! Domain data types for the Prosperity submissions loader.

pub mod round;
pub mod submission;
pub mod token;

pub use {
    round::{Round, RoundAvailability, availability},
    submission::AlgorithmSummary,
    token::AuthToken,
};
