//! Filler configuration.

use crate::util::size::mb;

/// How a declared capacity that disagrees with a known true size is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Warn on a mismatch and let the destination's true size govern.
    Lenient,
    /// Treat any mismatch as a hard violation; nothing is written.
    Strict,
}

impl CapacityPolicy {
    /// The build-time default: `Lenient`, or `Strict` with the
    /// `strict-capacity` feature (safeclib's `--enable-error-dmax`).
    pub const fn default_policy() -> Self {
        if cfg!(feature = "strict-capacity") {
            CapacityPolicy::Strict
        } else {
            CapacityPolicy::Lenient
        }
    }
}

/// Configuration for the bounded filler.
#[derive(Debug, Clone)]
pub struct FillConfig {
    /// Absolute upper bound on any declared capacity, in bytes
    /// (default: 256 MB, safeclib's `RSIZE_MAX_MEM`). The per-width word
    /// count limit is this divided by the word width.
    pub max_region_bytes: usize,

    /// Policy for declared-vs-true capacity mismatches on the slice entry
    /// points (default: [`CapacityPolicy::default_policy`]).
    pub capacity_policy: CapacityPolicy,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            max_region_bytes: mb(256),
            capacity_policy: CapacityPolicy::default_policy(),
        }
    }
}

impl FillConfig {
    /// Builder pattern: set the absolute region limit in bytes.
    pub fn with_max_region_bytes(mut self, bytes: usize) -> Self {
        self.max_region_bytes = bytes;
        self
    }

    /// Builder pattern: set the capacity policy.
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    /// Builder pattern: require declared capacities to exactly match known
    /// true sizes.
    pub fn strict(self) -> Self {
        self.with_capacity_policy(CapacityPolicy::Strict)
    }

    /// The word count limit for a given width, in words.
    pub fn max_words(&self, width: usize) -> usize {
        self.max_region_bytes / width
    }
}
