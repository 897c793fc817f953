// Standard Library Imports
use std::collections::hash_map::Entry;

// External Crate Imports
use ahash::{HashMap, HashMapExt};
use knuffel::{Decode, span::Span};
use log::warn;
use miette::{Diagnostic, LabeledSpan, NamedSource, Result};
use thiserror::Error;

// Local Crate Imports
use crate::{Adduct, IonizationMode, errors::AdductError, notation};

// Public API ==========================================================================================================

pub const DEFAULT_KDL: &str = include_str!("../adducts.kdl");

/// Known adducts for each ionization mode, kept in the order they were declared
#[derive(Clone, PartialEq, Debug)]
pub struct AdductTable {
    positive: Vec<Adduct>,
    negative: Vec<Adduct>,
}

impl AdductTable {
    /// Builds a table from already-parsed adducts, rejecting labels repeated within a mode
    pub fn new(positive: Vec<Adduct>, negative: Vec<Adduct>) -> crate::Result<Self> {
        for (mode, adducts) in [
            (IonizationMode::Positive, &positive),
            (IonizationMode::Negative, &negative),
        ] {
            if let Some((_, repeat)) = first_duplicate(adducts.iter().map(Adduct::label)) {
                return Err(Box::new(AdductError::duplicate_adduct(adducts[repeat].label(), mode)));
            }
        }

        Ok(Self { positive, negative })
    }

    pub fn from_kdl(file_name: impl AsRef<str>, kdl_text: impl AsRef<str>) -> Result<Self> {
        let parsed_table: AdductTableKdl = knuffel::parse(file_name.as_ref(), kdl_text.as_ref())?;
        parsed_table
            .validate()
            .map_err(|e| e.finalize(file_name, kdl_text).into())
    }

    #[must_use]
    pub fn adducts(&self, mode: IonizationMode) -> &[Adduct] {
        match mode {
            IonizationMode::Positive => &self.positive,
            IonizationMode::Negative => &self.negative,
        }
    }

    #[must_use]
    pub fn get(&self, mode: IonizationMode, label: &str) -> Option<&Adduct> {
        self.adducts(mode).iter().find(|a| a.label() == label)
    }

    pub fn lookup(&self, mode: IonizationMode, label: &str) -> crate::Result<&Adduct> {
        self.get(mode, label)
            .ok_or_else(|| Box::new(AdductError::adduct_lookup(label, mode)))
    }
}

impl Default for AdductTable {
    fn default() -> Self {
        // SAFETY: The embedded table is checked by the `build_default_adduct_table` test, so this can't fail
        Self::from_kdl("adducts.kdl", DEFAULT_KDL).unwrap()
    }
}

// KDL File Schema =====================================================================================================

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct AdductTableKdl {
    #[knuffel(child, unwrap(children))]
    positive: Vec<AdductKdl>,
    #[knuffel(child, unwrap(children))]
    negative: Vec<AdductKdl>,
}

#[derive(Debug, Decode)]
#[knuffel(span_type=Span)]
struct AdductKdl {
    #[knuffel(span)]
    span: Span,
    #[knuffel(argument)]
    label: String,
    #[knuffel(argument)]
    shift: f64,
}

// Conversion From Parsed KDL to Internal Representation ===============================================================

type ValidationResult<T> = std::result::Result<T, AdductTableErrorKind>;

impl AdductTableKdl {
    fn validate(self) -> ValidationResult<AdductTable> {
        let positive = validate_adducts(self.positive, IonizationMode::Positive)?;
        let negative = validate_adducts(self.negative, IonizationMode::Negative)?;

        Ok(AdductTable { positive, negative })
    }
}

fn validate_adducts(adducts: Vec<AdductKdl>, mode: IonizationMode) -> ValidationResult<Vec<Adduct>> {
    if let Some((first, repeat)) = first_duplicate(adducts.iter().map(|adduct| adduct.label.as_str())) {
        return Err(AdductTableErrorKind::DuplicateAdduct(
            adducts[first].span,
            adducts[repeat].span,
            adducts[repeat].label.clone(),
            mode,
        ));
    }

    Ok(adducts
        .into_iter()
        .map(|AdductKdl { label, shift, .. }| {
            if !notation::recognizes(&label) {
                warn!("the {mode} mode adduct {label:?} has no recognisable charge or multimer, so assuming 1 of each");
            }

            Adduct::new(label, shift)
        })
        .collect())
}

// NOTE: Returns the indices of the first definition and of its first repeat, stopping at the earliest repeat
fn first_duplicate<'a>(labels: impl IntoIterator<Item = &'a str>) -> Option<(usize, usize)> {
    let mut seen_labels = HashMap::new();
    labels
        .into_iter()
        .enumerate()
        .find_map(|(index, label)| match seen_labels.entry(label) {
            Entry::Occupied(e) => Some((*e.get(), index)),
            Entry::Vacant(e) => {
                e.insert(index);
                None
            }
        })
}

// Validation Error Types and Trait Implementations  ===================================================================

#[derive(Debug, Error)]
#[error("failed to validate adduct table file")]
struct AdductTableError {
    kdl: NamedSource<String>,
    #[source]
    kind: AdductTableErrorKind,
}

// NOTE: This is manually implemented because the list of labels is dynamic and needs to be extracted from `self.kind`
impl Diagnostic for AdductTableError {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.kdl)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(self.kind.labels().into_iter().map(|(s, l)| {
            LabeledSpan::new_with_span(Some(l.to_owned()), *s)
        })))
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Some(&self.kind)
    }
}

#[derive(Clone, Debug, Diagnostic, Error)]
enum AdductTableErrorKind {
    #[error("the {3} mode adduct {2:?} has already been defined")]
    #[diagnostic(help("adduct labels must be unique within an ionization mode, so remove or rename the duplicate"))]
    DuplicateAdduct(Span, Span, String, IonizationMode),
}

impl AdductTableErrorKind {
    fn labels(&self) -> Vec<(&Span, &'static str)> {
        match self {
            Self::DuplicateAdduct(s1, s2, _, _) => {
                vec![(s1, "first defined here"), (s2, "then again here")]
            }
        }
    }

    fn finalize(self, file_name: impl AsRef<str>, kdl: impl AsRef<str>) -> AdductTableError {
        let kdl = NamedSource::new(file_name, kdl.as_ref().to_owned());
        AdductTableError { kdl, kind: self }
    }
}

// Module Tests ========================================================================================================
