/// SplitMix64 generator used for reproducible tile jitter.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform sample in `[-amp, amp]`.
    pub fn next_symmetric(&mut self, amp: f64) -> f64 {
        (self.next_f64_01() * 2.0 - 1.0) * amp
    }
}

/// Mix a run counter into a base seed so consecutive runs differ but stay reproducible.
pub(crate) fn derive_seed(base: u64, salt: u64) -> u64 {
    base ^ salt.wrapping_mul(0xD6E8_FEB8_6659_FD93)
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
