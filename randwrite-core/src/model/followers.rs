use std::collections::HashMap;

use rand::Rng;

/// The multiset of characters observed immediately after one seed window.
///
/// Conceptually this is a node in a Markov chain where outgoing edges are
/// weighted by their number of observations. Rather than keeping every raw
/// observation in a growable list, occurrences are counted per character;
/// sampling stays uniform over raw observations because each character is
/// weighted by its count.
///
/// ## Responsibilities
/// - Accumulate follower occurrences during the build phase
/// - Sample the next character using weighted random selection
/// - Absorb another follower multiset when models are merged
///
/// ## Invariants
/// - Every recorded count is strictly positive
/// - `total` equals the sum of all counts
#[derive(Clone, Debug, Default)]
pub struct Followers {
	/// Sum of all occurrence counts (the number of raw observations).
	total: usize,
	/// Occurrence count per observed follower character.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, usize>,
}

impl Followers {
	/// Creates an empty follower multiset.
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Records one observation of `next_char` following the seed.
	pub(crate) fn record(&mut self, next_char: char) {
		*self.counts.entry(next_char).or_insert(0) += 1;
		self.total += 1;
	}

	/// Returns the number of raw observations recorded so far.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Returns how many times `next_char` was observed.
	pub fn count(&self, next_char: char) -> usize {
		self.counts.get(&next_char).copied().unwrap_or(0)
	}

	/// Returns true if nothing has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// Iterates over `(character, occurrence count)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
		self.counts.iter().map(|(c, n)| (*c, *n))
	}

	/// Samples the next character, weighted by occurrence count.
	///
	/// Selection is uniform over raw observations: a character observed `k`
	/// times out of `n` is drawn with probability `k/n`.
	///
	/// This performs an O(distinct characters) scan with a cumulative
	/// subtraction to select a bucket.
	///
	/// Returns `None` if nothing has been recorded.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		if self.total == 0 {
			return None;
		}

		let mut remaining = rng.random_range(0..self.total);

		let mut fallback = None;
		for (next_char, occurrences) in &self.counts {
			if remaining < *occurrences {
				return Some(*next_char);
			}
			remaining -= occurrences;
			fallback = Some(*next_char);
		}

		// Unreachable while the total invariant holds, but kept for safety.
		fallback
	}

	/// Absorbs another follower multiset into this one.
	///
	/// Occurrence counts are summed, so the result is the multiset union of
	/// both sides' raw observations.
	pub(crate) fn absorb(&mut self, other: &Self) {
		for (next_char, occurrences) in &other.counts {
			*self.counts.entry(*next_char).or_insert(0) += *occurrences;
		}
		self.total += other.total;
	}
}

#[cfg(test)]
mod tests {
	use super::Followers;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn record_accumulates_counts() {
		let mut followers = Followers::new();
		followers.record('b');
		followers.record('b');
		followers.record('c');

		assert_eq!(followers.total(), 3);
		assert_eq!(followers.count('b'), 2);
		assert_eq!(followers.count('c'), 1);
		assert_eq!(followers.count('z'), 0);
	}

	#[test]
	fn sample_on_empty_returns_none() {
		let followers = Followers::new();
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(followers.sample(&mut rng), None);
	}

	#[test]
	fn sample_with_single_follower_is_deterministic() {
		let mut followers = Followers::new();
		followers.record('x');

		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			assert_eq!(followers.sample(&mut rng), Some('x'));
		}
	}

	#[test]
	fn sample_frequency_tracks_observation_counts() {
		// 'b' observed 3 times out of 4: empirical frequency must converge
		// to 3/4 over many independent draws.
		let mut followers = Followers::new();
		followers.record('b');
		followers.record('b');
		followers.record('b');
		followers.record('c');

		let mut rng = StdRng::seed_from_u64(42);
		let draws = 40_000;
		let mut hits = 0usize;
		for _ in 0..draws {
			if followers.sample(&mut rng) == Some('b') {
				hits += 1;
			}
		}

		let frequency = hits as f64 / draws as f64;
		assert!(
			(frequency - 0.75).abs() < 0.02,
			"expected ~0.75, got {frequency}"
		);
	}

	#[test]
	fn absorb_sums_counts() {
		let mut left = Followers::new();
		left.record('a');
		left.record('b');

		let mut right = Followers::new();
		right.record('b');
		right.record('c');

		left.absorb(&right);
		assert_eq!(left.total(), 4);
		assert_eq!(left.count('a'), 1);
		assert_eq!(left.count('b'), 2);
		assert_eq!(left.count('c'), 1);
	}
}
