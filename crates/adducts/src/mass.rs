// Local Crate Imports
use crate::{Charge, Multimer};

// Public API ==========================================================================================================

// NOTE: `shift` is always the mass shift of the singly-charged, single-monomer equivalent of an adduct, with the sign
// chosen such that `M = mz + shift`. For `[M+H]+`, that's minus the mass of a proton. When `charge > 1`, the shift
// is spread evenly over each charge.

/// Calculates the monoisotopic mass of a molecule observed at `mz` as the given adduct
#[must_use]
pub fn mass_from_mz(mz: f64, shift: f64, charge: Charge, multimer: Multimer) -> f64 {
    let z = f64::from(charge);
    let n = f64::from(multimer);
    let shift = shift / z;
    match (charge.get(), multimer.get()) {
        (1, 1) => mz + shift,
        (_, 1) => (mz + shift) * z,
        (1, _) => (mz + shift) / n,
        _ => (mz + shift) * z / n,
    }
}

/// Calculates the m/z at which a molecule of the given monoisotopic `mass` appears as the given adduct
#[must_use]
pub fn mz_from_mass(mass: f64, shift: f64, charge: Charge, multimer: Multimer) -> f64 {
    let z = f64::from(charge);
    let n = f64::from(multimer);
    let shift = shift / z;
    match (charge.get(), multimer.get()) {
        (1, 1) => mass - shift,
        (_, 1) => mass / z - shift,
        (1, _) => mass * n - shift,
        _ => mass * n / z - shift,
    }
}

// Module Tests ========================================================================================================
