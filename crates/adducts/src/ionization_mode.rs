// Standard Library Imports
use std::str::FromStr;

// Local Crate Imports
use crate::{IonizationMode, errors::AdductError};

// Public API ==========================================================================================================

impl IonizationMode {
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }
}

impl FromStr for IonizationMode {
    type Err = AdductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "pos" | "positive" => Ok(Self::Positive),
            "-" | "neg" | "negative" => Ok(Self::Negative),
            _ => Err(AdductError::UnknownIonizationMode(s.to_owned())),
        }
    }
}

// Module Tests ========================================================================================================
