use miette::Diagnostic;
use thiserror::Error;

use crate::IonizationMode;

pub type Result<T, E = Box<AdductError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AdductError {
    #[diagnostic(help("double-check for typos, or add a new entry to the adduct table"))]
    #[error("the {mode} mode adduct {label:?} could not be found in the supplied adduct table")]
    AdductLookup { label: String, mode: IonizationMode },

    #[diagnostic(help("adduct labels must be unique within an ionization mode"))]
    #[error("the {mode} mode adduct {label:?} has already been defined")]
    DuplicateAdduct { label: String, mode: IonizationMode },

    #[diagnostic(help("expected one of +, -, pos, neg, positive, or negative"))]
    #[error("{0:?} is not a recognised ionization mode")]
    UnknownIonizationMode(String),
}

impl AdductError {
    pub(crate) fn adduct_lookup(label: &str, mode: IonizationMode) -> Self {
        let label = label.to_owned();

        Self::AdductLookup { label, mode }
    }

    pub(crate) fn duplicate_adduct(label: &str, mode: IonizationMode) -> Self {
        let label = label.to_owned();

        Self::DuplicateAdduct { label, mode }
    }
}
