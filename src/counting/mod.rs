//! Card counting and play decisions.
//!
//! This module provides:
//! - The Hi-Lo card value table
//! - Running/true count tracking across a shoe
//! - Hand evaluation with ace flexibility
//! - A true-count bet ramp
//! - Basic strategy with count-dependent index plays

pub mod betting;
pub mod card;
pub mod hand;
pub mod strategy;
pub mod tracker;

pub use betting::BetPolicy;
pub use card::CardSymbol;
pub use hand::{evaluate, HandValue};
pub use strategy::{decide_hand, Decision};
pub use tracker::CountTracker;
