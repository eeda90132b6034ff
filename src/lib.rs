//! Score tracking engine for card and tile games: a generic scorekeeper plus
//! the Okey and 101 Okey rule sets. Rounds are recorded per player, totals
//! come from pluggable scoring strategies, and games persist as JSON payloads
//! behind a key-value store boundary.

pub mod bounds;
pub mod model;
pub mod service;
pub mod store;
pub mod strategy;
