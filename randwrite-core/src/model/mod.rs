//! Top-level module for the random-writing system.
//!
//! This module provides a fixed-width character-transition model and its
//! generator, including:
//! - The transition model keyed by sliding seed windows (`TransitionModel`)
//! - Per-seed follower multisets (`Followers`)
//! - A random-walk generation interface (`Generator`)

/// Random-walk text generation over a built transition model.
///
/// Exposes sink-streaming and buffered generation, with re-seeding whenever
/// the walk reaches a window the model has never observed.
pub mod generator;

/// Transition model keyed by fixed-width seed windows.
///
/// Handles stream folding (priming + sliding phases), model merging,
/// and read-only access for generation.
pub mod transition_model;

/// Representation of one seed's observed followers.
///
/// Tracks occurrence counts and supports weighted random sampling.
/// Mutation is crate-private; the type is re-exported for read access.
mod followers;

pub use followers::Followers;
