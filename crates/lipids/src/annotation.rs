// Standard Library Imports
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    iter,
    sync::OnceLock,
};

// External Crate Imports
use adducts::{Adduct, AdductDetector, IonizationMode, Peak};
use log::debug;

// Local Crate Imports
use crate::{Annotation, Lipid, Score};

// Public API ==========================================================================================================

impl<'t> Annotation<'t> {
    pub fn new(
        lipid: Lipid,
        mz: f64,
        intensity: f64,
        rt_min: f64,
        ionization_mode: IonizationMode,
        detector: AdductDetector<'t>,
    ) -> Self {
        let grouped_signals = iter::empty::<Peak>();
        Self::with_signals(lipid, mz, intensity, rt_min, ionization_mode, detector, grouped_signals)
    }

    pub fn with_signals(
        lipid: Lipid,
        mz: f64,
        intensity: f64,
        rt_min: f64,
        ionization_mode: IonizationMode,
        detector: AdductDetector<'t>,
        grouped_signals: impl IntoIterator<Item = Peak>,
    ) -> Self {
        Self {
            lipid,
            mz,
            intensity,
            rt_min,
            ionization_mode,
            grouped_signals: grouped_signals.into_iter().collect(),
            detector,
            adduct_override: None,
            detected_adduct: OnceLock::new(),
            score: Score::default(),
        }
    }

    #[must_use]
    pub const fn lipid(&self) -> &Lipid {
        &self.lipid
    }

    #[must_use]
    pub const fn mz(&self) -> f64 {
        self.mz
    }

    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    #[must_use]
    pub const fn rt_min(&self) -> f64 {
        self.rt_min
    }

    #[must_use]
    pub const fn ionization_mode(&self) -> IonizationMode {
        self.ionization_mode
    }

    #[must_use]
    pub const fn grouped_signals(&self) -> &BTreeSet<Peak> {
        &self.grouped_signals
    }

    /// The adduct set by [`Annotation::set_adduct()`] or, failing that, the one detected from the grouped signals
    #[must_use]
    pub fn adduct(&self) -> Option<&str> {
        self.adduct_override
            .as_deref()
            .or_else(|| self.detected_adduct().map(Adduct::label))
    }

    /// Runs adduct detection over the grouped signals, ignoring any explicitly set adduct
    ///
    /// Detection only runs once for a given set of signals; the result is reused until the signals change.
    #[must_use]
    pub fn detected_adduct(&self) -> Option<&'t Adduct> {
        *self.detected_adduct.get_or_init(|| {
            debug!("detecting the adduct of {} at m/z {:.4}", self.lipid, self.mz);
            self.detector
                .detect_adduct(self.mz, &self.grouped_signals, self.ionization_mode)
        })
    }

    pub fn set_adduct(&mut self, adduct: impl Into<String>) {
        self.adduct_override = Some(adduct.into());
    }

    pub fn clear_adduct(&mut self) {
        self.adduct_override = None;
    }

    pub fn add_signal(&mut self, peak: Peak) {
        if self.grouped_signals.insert(peak) {
            self.detected_adduct.take();
        }
    }

    pub fn set_grouped_signals(&mut self, grouped_signals: impl IntoIterator<Item = Peak>) {
        self.grouped_signals = grouped_signals.into_iter().collect();
        self.detected_adduct.take();
    }

    /// Records one application of a scoring rule that contributed `delta` to this annotation's score
    pub fn add_score(&mut self, delta: i32) {
        // NOTE: Both counters saturate, so a long-lived annotation never panics or wraps
        self.score.total = self.score.total.saturating_add(i64::from(delta));
        self.score.applications = self.score.applications.saturating_add(1);
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score.total
    }

    #[must_use]
    pub const fn score_applications(&self) -> u32 {
        self.score.applications
    }

    /// The mean score per rule application, truncated toward zero, or 0 if no rules have been applied yet
    #[must_use]
    pub fn normalized_score(&self) -> i64 {
        self.score
            .total
            .checked_div(i64::from(self.score.applications))
            .unwrap_or(0)
    }
}

impl Display for Annotation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            lipid,
            mz,
            intensity,
            rt_min,
            ..
        } = self;
        let adduct = self.adduct().unwrap_or("?");
        let score = self.score();
        write!(
            f,
            "{lipid} at m/z {mz:.4} ({intensity:.2e}, {rt_min:.2} min) as {adduct}, score {score}"
        )
    }
}

// Comparison Traits ===================================================================================================

impl PartialEq for Annotation<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.lipid == other.lipid
            && self.mz.total_cmp(&other.mz).is_eq()
            && self.rt_min.total_cmp(&other.rt_min).is_eq()
    }
}

impl Eq for Annotation<'_> {}

impl Hash for Annotation<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lipid.hash(state);
        self.mz.to_bits().hash(state);
        self.rt_min.to_bits().hash(state);
    }
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::LazyLock};

    use adducts::AdductTable;
    use assert_float_eq::assert_float_absolute_eq;

    use crate::LipidType;

    use super::*;

    static TABLE: LazyLock<AdductTable> = LazyLock::new(AdductTable::default);

    fn detector() -> AdductDetector<'static> {
        AdductDetector::new(&TABLE)
    }

    fn pc_34_1() -> Lipid {
        Lipid::new(1, "PC 34:1", "C42H82NO8P", LipidType::PC, 34, 1)
    }

    fn pc_annotation(mz: f64, signals: &[(f64, f64)]) -> Annotation<'static> {
        let signals = signals
            .iter()
            .map(|&(mz, intensity)| Peak::new(mz, intensity));
        Annotation::with_signals(
            pc_34_1(),
            mz,
            8e4,
            6.5,
            IonizationMode::Positive,
            detector(),
            signals,
        )
    }

    #[test]
    fn annotation_getters() {
        let annotation = pc_annotation(700.499_99, &[(722.482, 8e4), (700.5, 1e5)]);
        assert_eq!(annotation.lipid(), &pc_34_1());
        assert_float_absolute_eq!(annotation.mz(), 700.499_99);
        assert_float_absolute_eq!(annotation.intensity(), 8e4);
        assert_eq!(annotation.rt_min(), 6.5);
        assert_eq!(annotation.ionization_mode(), IonizationMode::Positive);
        let mzs: Vec<_> = annotation.grouped_signals().iter().map(Peak::mz).collect();
        assert_eq!(mzs, vec![700.5, 722.482]);
    }

    #[test]
    fn detect_sodium_pair() {
        let annotation = pc_annotation(700.499_99, &[(700.5, 1e5), (722.482, 8e4)]);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
        // Asking twice returns the same adduct
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn detect_water_loss() {
        let annotation = pc_annotation(700.5, &[(700.5, 9e4), (682.489_4, 7e4)]);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn detect_doubly_charged() {
        let annotation = pc_annotation(700.5, &[(700.5, 1e5), (350.754, 8.5e4)]);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn no_adduct_without_signals() {
        let annotation = Annotation::new(
            Lipid::new(3, "TG 54:3", "C57H104O6", LipidType::TG, 54, 3),
            885.790_56,
            10e6,
            10.0,
            IonizationMode::Positive,
            detector(),
        );
        assert!(annotation.grouped_signals().is_empty());
        assert_eq!(annotation.adduct(), None);

        let annotation = pc_annotation(700.5, &[(700.5, 1e5)]);
        assert_eq!(annotation.adduct(), None);
    }

    #[test]
    fn explicit_adduct_overrides_detection() {
        let mut annotation = pc_annotation(700.5, &[(700.5, 1e5), (722.482, 8e4)]);
        annotation.set_adduct("[M+NH4]+");
        assert_eq!(annotation.adduct(), Some("[M+NH4]+"));
        assert_eq!(annotation.detected_adduct().map(Adduct::label), Some("[M+H]+"));

        annotation.clear_adduct();
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn changing_signals_redetects_adduct() {
        let mut annotation = pc_annotation(700.5, &[(700.5, 1e5)]);
        assert_eq!(annotation.adduct(), None);

        annotation.add_signal(Peak::new(722.482, 8e4));
        assert_eq!(annotation.adduct(), Some("[M+H]+"));

        annotation.set_grouped_signals([Peak::new(700.5, 1e5), Peak::new(713.123, 8e4)]);
        assert_eq!(annotation.adduct(), None);

        annotation.set_grouped_signals([Peak::new(700.5, 1e5), Peak::new(350.754, 8.5e4)]);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn duplicate_signals_keep_cached_adduct() {
        let mut annotation = pc_annotation(700.5, &[(700.5, 1e5), (722.482, 8e4)]);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
        // Same m/z, so this is already part of the cluster
        annotation.add_signal(Peak::new(722.482, 1.0));
        assert_eq!(annotation.grouped_signals().len(), 2);
        assert_eq!(annotation.adduct(), Some("[M+H]+"));
    }

    #[test]
    fn scores_saturate() {
        let mut annotation = pc_annotation(700.5, &[]);
        annotation.score.total = i64::MAX - 1;
        annotation.score.applications = u32::MAX - 1;

        annotation.add_score(5);
        assert_eq!(annotation.score(), i64::MAX);
        assert_eq!(annotation.score_applications(), u32::MAX);

        annotation.add_score(5);
        assert_eq!(annotation.score(), i64::MAX);
        assert_eq!(annotation.score_applications(), u32::MAX);
        assert_eq!(annotation.normalized_score(), i64::MAX / i64::from(u32::MAX));
    }

    #[test]
    fn scores_accumulate() {
        let mut annotation = pc_annotation(700.5, &[]);
        assert_eq!(annotation.score(), 0);
        assert_eq!(annotation.score_applications(), 0);
        assert_eq!(annotation.normalized_score(), 0);

        annotation.add_score(1);
        annotation.add_score(1);
        annotation.add_score(0);
        assert_eq!(annotation.score(), 2);
        assert_eq!(annotation.score_applications(), 3);
        assert_eq!(annotation.normalized_score(), 0);

        annotation.add_score(5);
        assert_eq!(annotation.score(), 7);
        assert_eq!(annotation.normalized_score(), 1);

        annotation.add_score(-15);
        assert_eq!(annotation.score(), -8);
        assert_eq!(annotation.score_applications(), 5);
        assert_eq!(annotation.normalized_score(), -1);
    }

    #[test]
    fn annotation_identity() {
        let a = pc_annotation(700.5, &[(700.5, 1e5), (722.482, 8e4)]);
        let mut b = pc_annotation(700.5, &[]);
        b.add_score(3);
        b.set_adduct("[M+K]+");
        let c = pc_annotation(700.6, &[]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(HashSet::from([a, b, c]).len(), 2);
    }

    #[test]
    fn annotation_display() {
        let mut annotation = pc_annotation(700.5, &[(700.5, 1e5), (722.482, 8e4)]);
        annotation.add_score(2);
        assert_eq!(
            annotation.to_string(),
            "PC 34:1 (C42H82NO8P) at m/z 700.5000 (8.00e4, 6.50 min) as [M+H]+, score 2"
        );

        let undetected = pc_annotation(700.5, &[]);
        assert_eq!(
            undetected.to_string(),
            "PC 34:1 (C42H82NO8P) at m/z 700.5000 (8.00e4, 6.50 min) as ?, score 0"
        );
    }

    #[test]
    fn annotations_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Annotation<'static>>();
    }
}
