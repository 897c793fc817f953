//! Candidate lipid annotations, whose adducts are inferred from co-eluting peaks

mod annotation;
mod lipid;

// Standard Library Imports
use std::{collections::BTreeSet, sync::OnceLock};

// External Crate Imports
use adducts::{Adduct, AdductDetector, IonizationMode, Peak};
use derive_more::Display;

// Public API ==========================================================================================================

// NOTE: Identity is decided by `compound_id` alone
#[derive(Clone, Debug)]
pub struct Lipid {
    compound_id: u32,
    name: String,
    formula: String,
    lipid_type: LipidType,
    carbon_count: u32,
    double_bond_count: u32,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum LipidType {
    /// Phosphatidylglycerol
    PG,
    /// Phosphatidylethanolamine
    PE,
    /// Phosphatidylinositol
    PI,
    /// Phosphatidic acid
    PA,
    /// Phosphatidylserine
    PS,
    /// Phosphatidylcholine
    PC,
    /// Triacylglycerol
    TG,
}

// NOTE: Identity is decided by `(lipid, mz, rt_min)` alone; the intensity, adduct, and score are all ignored
#[derive(Clone, Debug)]
pub struct Annotation<'t> {
    lipid: Lipid,
    mz: f64,
    intensity: f64,
    rt_min: f64,
    ionization_mode: IonizationMode,
    grouped_signals: BTreeSet<Peak>,
    detector: AdductDetector<'t>,
    adduct_override: Option<String>,
    detected_adduct: OnceLock<Option<&'t Adduct>>,
    score: Score,
}

// Private Types =======================================================================================================

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
struct Score {
    total: i64,
    applications: u32,
}
