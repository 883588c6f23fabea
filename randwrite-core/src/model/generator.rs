use std::io::Write;

use log::debug;
use rand::Rng;

use super::transition_model::TransitionModel;
use crate::error::{Error, Result};

/// Random-walk text generator over a built `TransitionModel`.
///
/// The generator borrows the model read-only and never mutates it.
///
/// # Responsibilities
/// - Start the walk from a uniformly random seed window
/// - Sample followers weighted by observation count and slide the window
/// - Re-seed from a fresh random key whenever the window is a dead end
/// - Emit exactly the requested number of characters
///
/// # Notes
/// - Re-seeding sacrifices Markov continuity at the boundary so the walk can
///   never get stuck; the requested length is always reached exactly.
/// - No character value is filtered: NUL and control characters are emitted
///   like any other observation.
#[derive(Debug)]
pub struct Generator<'m> {
	model: &'m TransitionModel,
}

/// Walk state: either the current window has a model entry, or it is a dead
/// end and a fresh seed must be drawn before anything more can be emitted.
enum Walk {
	Walking(String),
	Reseeding,
}

impl<'m> Generator<'m> {
	/// Creates a generator over `model`.
	///
	/// # Errors
	/// Returns `Error::EmptyModel` if the model has no seeds; a walk over an
	/// empty model could never emit anything.
	pub fn new(model: &'m TransitionModel) -> Result<Self> {
		if model.is_empty() {
			return Err(Error::EmptyModel);
		}
		Ok(Self { model })
	}

	/// Writes exactly `length` generated characters to `sink`.
	///
	/// Uses the thread-local random generator; see [`Self::write_with`] for
	/// an injectable one.
	pub fn write<W: Write>(&self, length: usize, sink: W) -> Result<()> {
		self.write_with(length, sink, &mut rand::rng())
	}

	/// Writes exactly `length` generated characters to `sink`, drawing all
	/// randomness from `rng`.
	///
	/// Characters are streamed out as they are produced.
	///
	/// # Errors
	/// - `Error::InvalidOutputLength` if `length < 1`
	/// - `Error::Io` if the sink rejects a write
	pub fn write_with<W, R>(&self, length: usize, mut sink: W, rng: &mut R) -> Result<()>
	where
		W: Write,
		R: Rng + ?Sized,
	{
		let mut buf = [0u8; 4];
		self.walk(length, rng, |c| {
			sink.write_all(c.encode_utf8(&mut buf).as_bytes())?;
			Ok(())
		})
	}

	/// Generates `length` characters into a `String`.
	pub fn generate(&self, length: usize) -> Result<String> {
		self.generate_with(length, &mut rand::rng())
	}

	/// Generates `length` characters into a `String`, drawing all randomness
	/// from `rng`.
	pub fn generate_with<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String> {
		let mut out = String::with_capacity(length);
		self.walk(length, rng, |c| {
			out.push(c);
			Ok(())
		})?;
		Ok(out)
	}

	/// Core random walk, emitting each produced character through `emit`.
	///
	/// Two-state loop: WALKING samples a follower of the current window,
	/// emits it and slides the window; RESEEDING draws a fresh uniformly
	/// random seed without emitting or counting anything. Termination is
	/// bounded by `length` successful emissions; re-seed attempts on a
	/// non-empty model always land on a key, so the walk cannot stall.
	fn walk<R, F>(&self, length: usize, rng: &mut R, mut emit: F) -> Result<()>
	where
		R: Rng + ?Sized,
		F: FnMut(char) -> Result<()>,
	{
		if length < 1 {
			return Err(Error::InvalidOutputLength);
		}

		let mut state = Walk::Reseeding;
		let mut emitted = 0usize;
		let mut reseeds = 0usize;

		while emitted < length {
			let window = match state {
				Walk::Walking(window) => window,
				Walk::Reseeding => {
					reseeds += 1;
					match self.model.random_seed(rng) {
						Some(seed) => seed.to_owned(),
						None => return Err(Error::EmptyModel),
					}
				}
			};

			state = match self.model.followers(&window).and_then(|f| f.sample(rng)) {
				Some(c) => {
					emit(c)?;
					emitted += 1;
					// Slide: drop the head, append the emitted character.
					let mut next = window;
					next.remove(0);
					next.push(c);
					Walk::Walking(next)
				}
				// Dead end: this window was only ever seen at the tail of a
				// stream. Discard it and draw a brand-new seed.
				None => Walk::Reseeding,
			};
		}

		debug!("emitted {emitted} characters after {reseeds} seed draws");
		Ok(())
	}
}
