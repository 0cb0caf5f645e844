// src/engine/mod.rs

//! Top-level orchestration of one search.
//!
//! [`Solver`] owns the configuration, creates a fresh
//! [`SearchContext`](crate::search::SearchContext) per call, runs the root
//! task and packages the outcome into a [`SearchReport`].

pub mod solver;

pub use solver::{SearchReport, Solver};
