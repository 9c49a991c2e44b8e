//! Fuzzy VIKOR - Group decision support by compromise ranking
//!
//! Experts rate criteria importance and alternative performance with
//! linguistic terms. The crate turns those judgments into triangular fuzzy
//! numbers, aggregates them and ranks the alternatives with the fuzzy VIKOR
//! method, including the acceptance check for the compromise solution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
