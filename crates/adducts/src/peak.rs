// Standard Library Imports
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

// Local Crate Imports
use crate::Peak;

// Public API ==========================================================================================================

impl Peak {
    #[must_use]
    pub const fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }

    #[must_use]
    pub const fn mz(&self) -> f64 {
        self.mz
    }

    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Whether two peaks represent the same signal; currently this only compares m/z, so peaks of differing
    /// intensity at an identical m/z are considered the same
    #[must_use]
    pub fn same_signal(&self, other: &Self) -> bool {
        self.mz.total_cmp(&other.mz).is_eq()
    }
}

impl Display for Peak {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { mz, intensity } = self;
        write!(f, "Peak(mz={mz:.4}, intensity={intensity:.2})")
    }
}

// Comparison Traits ===================================================================================================

// NOTE: All of these must agree with `Peak::same_signal()`, otherwise a `BTreeSet<Peak>` or `HashSet<Peak>` would
// deduplicate differently depending on which one you picked
impl PartialEq for Peak {
    fn eq(&self, other: &Self) -> bool {
        self.same_signal(other)
    }
}

impl Eq for Peak {}

impl Ord for Peak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mz.total_cmp(&other.mz)
    }
}

impl PartialOrd for Peak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Peak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // NOTE: `.total_cmp()` considers two floats equal exactly when their bits are equal
        self.mz.to_bits().hash(state);
    }
}

// Module Tests ========================================================================================================
