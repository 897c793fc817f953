// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// Local Crate Imports
use crate::{Adduct, Charge, Multimer, mass_from_mz, mz_from_mass, notation};

// Public API ==========================================================================================================

impl Adduct {
    /// Parses the charge and multimer of `label` once, up front, so they never need re-parsing
    pub fn new(label: impl Into<String>, shift: f64) -> Self {
        let label = label.into();
        let (charge, multimer) = notation::parse(&label);
        Self {
            label,
            shift,
            charge,
            multimer,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn shift(&self) -> f64 {
        self.shift
    }

    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    #[must_use]
    pub const fn multimer(&self) -> Multimer {
        self.multimer
    }

    /// The monoisotopic mass of a molecule observed at `mz` as this adduct
    #[must_use]
    pub fn monoisotopic_mass(&self, mz: f64) -> f64 {
        mass_from_mz(mz, self.shift, self.charge, self.multimer)
    }

    /// The m/z at which a molecule with the given monoisotopic mass would appear as this adduct
    #[must_use]
    pub fn mz(&self, monoisotopic_mass: f64) -> f64 {
        mz_from_mass(monoisotopic_mass, self.shift, self.charge, self.multimer)
    }
}

impl Display for Adduct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;

    #[test]
    fn new_adduct() {
        let adduct = Adduct::new("[M+2H]2+", -2.014_552);
        assert_eq!(adduct.label(), "[M+2H]2+");
        assert_eq!(adduct.shift(), -2.014_552);
        assert_eq!(adduct.charge().get(), 2);
        assert_eq!(adduct.multimer().get(), 1);
        assert_eq!(adduct.to_string(), "[M+2H]2+");

        let dimer = Adduct::new(String::from("[2M+Na]+"), -22.989_218);
        assert_eq!(dimer.charge().get(), 1);
        assert_eq!(dimer.multimer().get(), 2);
    }

    #[test]
    fn malformed_adducts_are_singly_charged_monomers() {
        let adduct = Adduct::new("mystery", -1.0);
        assert_eq!(adduct.charge(), Charge::default());
        assert_eq!(adduct.multimer(), Multimer::default());
        assert_eq!(adduct.monoisotopic_mass(100.0), 99.0);
    }

    #[test]
    fn adduct_conversions() {
        let protonated = Adduct::new("[M+H]+", -1.007_276);
        let sodiated = Adduct::new("[M+Na]+", -22.989_218);

        let mass = protonated.monoisotopic_mass(700.5);
        assert_float_absolute_eq!(mass, 699.492_724, 1e-9);
        assert_float_absolute_eq!(sodiated.mz(mass), 722.481_942, 1e-9);
        assert_float_absolute_eq!(protonated.mz(mass), 700.5, 1e-9);
    }
}
