// src/edit/mod.rs
//! Rewriting resolver signatures in place.

pub mod engine;

pub use engine::{apply_rewrite, plan_rewrite, RewriteOptions, RewriteOutcome, RewritePlan};
