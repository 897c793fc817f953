// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

// Local Crate Imports
use crate::{Lipid, LipidType};

// Public API ==========================================================================================================

impl Lipid {
    pub fn new(
        compound_id: u32,
        name: impl Into<String>,
        formula: impl Into<String>,
        lipid_type: LipidType,
        carbon_count: u32,
        double_bond_count: u32,
    ) -> Self {
        Self {
            compound_id,
            name: name.into(),
            formula: formula.into(),
            lipid_type,
            carbon_count,
            double_bond_count,
        }
    }

    #[must_use]
    pub const fn compound_id(&self) -> u32 {
        self.compound_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[must_use]
    pub const fn lipid_type(&self) -> LipidType {
        self.lipid_type
    }

    #[must_use]
    pub const fn carbon_count(&self) -> u32 {
        self.carbon_count
    }

    #[must_use]
    pub const fn double_bond_count(&self) -> u32 {
        self.double_bond_count
    }
}

impl LipidType {
    /// Relative reversed-phase elution rank of the lipid class, where lower ranks elute earlier
    #[must_use]
    pub const fn elution_rank(self) -> u32 {
        match self {
            Self::PG => 1,
            Self::PE => 2,
            Self::PI => 3,
            Self::PA => 4,
            Self::PS => 5,
            Self::TG => 10,
            Self::PC => 100,
        }
    }
}

impl Display for Lipid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { name, formula, .. } = self;
        write!(f, "{name} ({formula})")
    }
}

impl PartialEq for Lipid {
    fn eq(&self, other: &Self) -> bool {
        self.compound_id == other.compound_id
    }
}

impl Eq for Lipid {}

impl Hash for Lipid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compound_id.hash(state);
    }
}

// Module Tests ========================================================================================================
