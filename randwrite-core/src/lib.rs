//! Character-level random-writing library.
//!
//! This crate builds a probabilistic character-transition model from one or
//! more input texts and generates pseudo-random output that statistically
//! mimics them:
//! - Fixed-width sliding-window transition model (`TransitionModel`)
//! - Weighted next-character sampling (`Followers`)
//! - Random-walk generation with re-seeding on dead ends (`Generator`)
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core transition model and generation logic.
///
/// This module exposes the model-building and generation interfaces while
/// keeping internal representations private.
pub mod model;

/// Error types shared across the crate.
pub mod error;

/// I/O utilities (incremental UTF-8 decoding of byte streams).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
pub use model::generator::Generator;
pub use model::transition_model::TransitionModel;
