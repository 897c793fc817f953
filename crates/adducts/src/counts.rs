// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
};

// Local Crate Imports
use crate::{Charge, Multimer};

// Public API ==========================================================================================================

macro_rules! nonzero_count_impls {
    ($($count_type:ident),+ $(,)?) => {
        $(
            impl $count_type {
                #[must_use]
                pub const fn new(n: u32) -> Option<Self> {
                    match NonZeroU32::new(n) {
                        Some(n) => Some(Self(n)),
                        None => None,
                    }
                }

                #[must_use]
                pub const fn get(self) -> u32 {
                    self.0.get()
                }
            }

            impl Default for $count_type {
                fn default() -> Self {
                    Self(NonZeroU32::MIN)
                }
            }

            impl From<NonZeroU32> for $count_type {
                fn from(n: NonZeroU32) -> Self {
                    Self(n)
                }
            }

            impl From<$count_type> for f64 {
                fn from(count: $count_type) -> Self {
                    Self::from(count.get())
                }
            }

            impl Display for $count_type {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

nonzero_count_impls!(Charge, Multimer);

// Module Tests ========================================================================================================
