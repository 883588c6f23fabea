use thiserror::Error;

/// Result type alias for random-writing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for model construction and generation.
#[derive(Error, Debug)]
pub enum Error {
	/// The seed window width must be at least one character.
	#[error("seed length must be at least 1")]
	InvalidSeedLength,

	/// The requested output length must be at least one character.
	#[error("output length must be at least 1")]
	InvalidOutputLength,

	/// Generation was requested on a model with no seeds.
	///
	/// Happens when every folded stream was shorter than one full seed
	/// window plus a follower.
	#[error("model has no seeds to draw from")]
	EmptyModel,

	/// Two models with different window widths cannot be merged.
	#[error("seed length mismatch: {left} vs {right}")]
	SeedLengthMismatch {
		/// Window width of the receiving model.
		left: usize,
		/// Window width of the model being merged in.
		right: usize,
	},

	/// A stream could not be read (or held malformed UTF-8).
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
