//! The per-item checkers and the result aggregator.
//!
//! Unlike the rest of the workspace this crate performs filesystem IO: the
//! rules are assertions about files on disk. Evaluation is synchronous and
//! sequential, in declaration order, and every item is checked regardless of
//! earlier failures; the only short-circuit is inside a single glob walk.

#![forbid(unsafe_code)]

pub mod outcome;
pub mod report;
pub mod rules;

mod engine;
pub mod checks;

pub use engine::evaluate;
