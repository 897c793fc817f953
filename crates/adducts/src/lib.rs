//! Adduct mass arithmetic and adduct-pair detection for electrospray mass spectrometry

mod adduct;
pub mod adduct_table;
mod counts;
mod detector;
pub mod errors;
mod ionization_mode;
mod mass;
pub mod notation;
mod peak;
mod ppm;
#[cfg(test)]
mod testing_tools;

// Standard Library Imports
use std::num::NonZeroU32;

// External Crate Imports
use derive_more::Display;

// Public API ==========================================================================================================

pub use adduct_table::AdductTable;
pub use errors::{AdductError, Result};
pub use mass::{mass_from_mz, mz_from_mass};
pub use ppm::{ppm_delta, ppm_error};

// NOTE: `charge` and `multimer` are always derived from `label` (see `notation::parse()`)
#[derive(Clone, PartialEq, Debug)]
pub struct Adduct {
    label: String,
    shift: f64,
    charge: Charge,
    multimer: Multimer,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Charge(NonZeroU32);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Multimer(NonZeroU32);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum IonizationMode {
    #[display("positive")]
    Positive,
    #[display("negative")]
    Negative,
}

// NOTE: Peaks are compared, ordered, and hashed by m/z alone, see `Peak::same_signal()`
#[derive(Copy, Clone, Debug)]
pub struct Peak {
    mz: f64,
    intensity: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct AdductDetector<'t> {
    table: &'t AdductTable,
    ppm_tolerance: u32,
    reference_tolerance: f64,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AdductPair<'t> {
    adduct: &'t Adduct,
    partner: &'t Adduct,
    partner_peak: Peak,
    predicted_mz: f64,
    ppm_error: u32,
}
