use std::collections::HashMap;
use std::io::{BufReader, Read};

use log::debug;
use rand::Rng;
use rand::prelude::IteratorRandom;

use super::followers::Followers;
use crate::error::{Error, Result};
use crate::io::Chars;

/// Character-transition model keyed by fixed-width seed windows.
///
/// The model maps every `seed_length`-character window observed in the input
/// to the multiset of characters that immediately followed it, across all
/// folded streams.
///
/// # Responsibilities
/// - Fold one or more character streams into a combined model
/// - Accumulate follower occurrences for each seed window
/// - Merge with another model of the same window width
/// - Provide read-only access for generation
///
/// # Invariants
/// - `seed_length` is always >= 1 and fixed at construction
/// - Every key is exactly `seed_length` characters long
/// - Every follower recorded for a seed was observed immediately after that
///   seed in some folded stream
/// - Stored follower multisets are never empty
#[derive(Clone, Debug)]
pub struct TransitionModel {
	/// Width of the sliding seed window, in characters.
	seed_length: usize,

	/// Mapping from a seed window to its observed followers.
	seeds: HashMap<String, Followers>,
}

impl TransitionModel {
	/// Creates a new, empty model with the given window width.
	///
	/// # Errors
	/// Returns `Error::InvalidSeedLength` if `seed_length < 1`.
	pub fn new(seed_length: usize) -> Result<Self> {
		if seed_length < 1 {
			return Err(Error::InvalidSeedLength);
		}
		Ok(Self { seed_length, seeds: HashMap::new() })
	}

	/// Returns the window width this model was built with.
	pub fn seed_length(&self) -> usize {
		self.seed_length
	}

	/// Returns true if no transitions have been recorded.
	pub fn is_empty(&self) -> bool {
		self.seeds.is_empty()
	}

	/// Returns the number of distinct seed windows.
	pub fn len(&self) -> usize {
		self.seeds.len()
	}

	/// Returns the follower multiset recorded for `seed`, if any.
	pub fn followers(&self, seed: &str) -> Option<&Followers> {
		self.seeds.get(seed)
	}

	/// Iterates over all seed windows in arbitrary order.
	pub fn seeds(&self) -> impl Iterator<Item = &str> {
		self.seeds.keys().map(String::as_str)
	}

	/// Returns a seed window drawn uniformly at random from the key set.
	///
	/// Useful for starting or re-seeding a generation walk.
	/// Returns `None` if the model is empty.
	pub fn random_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.seeds.keys().choose(rng).map(String::as_str)
	}

	/// Folds a byte stream into the model, consuming it to exhaustion.
	///
	/// The stream is decoded as UTF-8 incrementally. Callable repeatedly:
	/// each call merges further observations into the existing model.
	///
	/// # Errors
	/// Propagates the first read or decode failure immediately. Observations
	/// recorded before the failure point are kept; the model is not
	/// transactional.
	pub fn fold<R: Read>(&mut self, reader: R) -> Result<()> {
		self.fold_chars(Chars::new(BufReader::new(reader)))
	}

	/// Folds a character stream into the model.
	///
	/// # Behavior
	/// - Priming phase: buffers the first `seed_length` characters. A stream
	///   that ends first contributes nothing; this is not an error.
	/// - Sliding phase: for each further character, records it as a follower
	///   of the current window, then drops the window head and appends the
	///   character.
	///
	/// Whitespace, control characters, and NUL are ordinary data.
	///
	/// # Errors
	/// Propagates the first `Err` item yielded by the stream.
	pub fn fold_chars<I>(&mut self, chars: I) -> Result<()>
	where
		I: IntoIterator<Item = std::io::Result<char>>,
	{
		let mut chars = chars.into_iter();
		let mut window = String::with_capacity(self.seed_length * 4);

		// Priming: fill one full window, or give up on a too-short stream.
		for _ in 0..self.seed_length {
			match chars.next() {
				Some(c) => window.push(c?),
				None => return Ok(()),
			}
		}

		let seeds_before = self.seeds.len();
		let mut observed = 0usize;

		// Sliding: every further character is a follower of the current
		// window, then becomes the window's new tail.
		for c in chars {
			let c = c?;
			self.seeds
				.entry(window.clone())
				.or_insert_with(Followers::new)
				.record(c);
			observed += 1;
			window.remove(0);
			window.push(c);
		}

		debug!(
			"folded stream: {observed} transitions, {} new seeds",
			self.seeds.len() - seeds_before
		);
		Ok(())
	}

	/// Folds an in-memory text into the model.
	pub fn fold_str(&mut self, text: &str) {
		// Infallible: an in-memory iterator never yields an error.
		let _ = self.fold_chars(text.chars().map(Ok));
	}

	/// Merges another model into this one.
	///
	/// Follower occurrence counts are summed per seed, so the result holds
	/// the multiset union of both models' observations.
	///
	/// # Errors
	/// Returns `Error::SeedLengthMismatch` if the window widths differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.seed_length != other.seed_length {
			return Err(Error::SeedLengthMismatch {
				left: self.seed_length,
				right: other.seed_length,
			});
		}

		for (seed, followers) in &other.seeds {
			if let Some(existing) = self.seeds.get_mut(seed) {
				existing.absorb(followers);
			} else {
				self.seeds.insert(seed.clone(), followers.clone());
			}
		}

		Ok(())
	}
}
