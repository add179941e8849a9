//! Seedable pseudo-random source for particle sampling.
//!
//! Xorshift64 with shifts (13, 7, 17). The browser seeds it from
//! `Math.random()`; tests seed it with a constant so every sampled field is
//! reproducible.

/// Xorshift64 generator. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct Xorshift64 {
	state: u64,
}

impl Xorshift64 {
	/// Replaces a zero seed, which is a fixed point of xorshift.
	const FALLBACK_SEED: u64 = 0x5EED_B105_50F7_CAFE;

	pub fn new(seed: u64) -> Self {
		Self {
			state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
		}
	}

	/// Seed from the host's `Math.random()`.
	pub fn from_entropy() -> Self {
		let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
		let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
		Self::new((hi << 32) | lo)
	}

	pub fn next_u64(&mut self) -> u64 {
		self.state ^= self.state << 13;
		self.state ^= self.state >> 7;
		self.state ^= self.state << 17;
		self.state
	}

	/// Uniform f64 in [0, 1), using the upper 53 bits.
	pub fn next_f64(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform f64 in [min, max). Returns `min` when the range is empty.
	pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// Uniform index in [0, len). `len` must be non-zero.
	pub fn next_index(&mut self, len: usize) -> usize {
		debug_assert!(len > 0, "next_index on empty range");
		((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
	}
}
