// Standard Library Imports
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

// External Crate Imports
use itertools::iproduct;
use log::{debug, trace};

// Local Crate Imports
use crate::{Adduct, AdductDetector, AdductPair, AdductTable, IonizationMode, Peak, ppm_error};

// Public API ==========================================================================================================

impl<'t> AdductDetector<'t> {
    pub const DEFAULT_PPM_TOLERANCE: u32 = 10;
    pub const DEFAULT_REFERENCE_TOLERANCE: f64 = 0.01;

    #[must_use]
    pub const fn new(table: &'t AdductTable) -> Self {
        Self {
            table,
            ppm_tolerance: Self::DEFAULT_PPM_TOLERANCE,
            reference_tolerance: Self::DEFAULT_REFERENCE_TOLERANCE,
        }
    }

    /// Sets the largest ppm error (inclusive) at which a predicted m/z still explains an observed peak
    #[must_use]
    pub const fn with_ppm_tolerance(mut self, ppm: u32) -> Self {
        self.ppm_tolerance = ppm;
        self
    }

    /// Sets how close (in Da, exclusive) a peak must be to the reference m/z to be used as the base peak
    #[must_use]
    pub const fn with_reference_tolerance(mut self, da: f64) -> Self {
        self.reference_tolerance = da;
        self
    }

    #[must_use]
    pub const fn table(&self) -> &'t AdductTable {
        self.table
    }

    #[must_use]
    pub const fn ppm_tolerance(&self) -> u32 {
        self.ppm_tolerance
    }

    #[must_use]
    pub const fn reference_tolerance(&self) -> f64 {
        self.reference_tolerance
    }

    /// Finds the first pair of adducts that explains the m/z difference between the peak matching `reference_mz` and
    /// another peak in the cluster
    ///
    /// Peaks are tried in ascending m/z order, and for each peak, adduct pairs are tried in the order the adducts are
    /// declared in the table: every partner for the first adduct, then every partner for the second, and so on. The
    /// first pair within tolerance wins, even if a later pair would have a smaller ppm error.
    #[must_use]
    pub fn detect(
        &self,
        reference_mz: f64,
        peaks: &BTreeSet<Peak>,
        mode: IonizationMode,
    ) -> Option<AdductPair<'t>> {
        let Some(base) = self.base_peak(reference_mz, peaks) else {
            debug!(
                "no peak within {} Da of the reference m/z {reference_mz:.4}",
                self.reference_tolerance
            );
            return None;
        };

        let adducts = self.table.adducts(mode);
        let pair = peaks
            .iter()
            .filter(|&other| other != base)
            .find_map(|&other| self.pair_adducts(base, other, adducts));

        match &pair {
            Some(pair) => debug!("detected {pair} for the reference m/z {reference_mz:.4}"),
            None => debug!(
                "no {mode} mode adduct pair explains the {} peak(s) grouped with m/z {reference_mz:.4}",
                peaks.len()
            ),
        }
        pair
    }

    /// Like [`AdductDetector::detect()`], but only returns the adduct assigned to the reference peak
    #[must_use]
    pub fn detect_adduct(
        &self,
        reference_mz: f64,
        peaks: &BTreeSet<Peak>,
        mode: IonizationMode,
    ) -> Option<&'t Adduct> {
        self.detect(reference_mz, peaks, mode)
            .map(|pair| pair.adduct())
    }
}

impl<'t> AdductPair<'t> {
    /// The adduct assigned to the reference peak
    #[must_use]
    pub const fn adduct(&self) -> &'t Adduct {
        self.adduct
    }

    /// The adduct assigned to the partner peak
    #[must_use]
    pub const fn partner(&self) -> &'t Adduct {
        self.partner
    }

    #[must_use]
    pub const fn partner_peak(&self) -> Peak {
        self.partner_peak
    }

    #[must_use]
    pub const fn predicted_mz(&self) -> f64 {
        self.predicted_mz
    }

    #[must_use]
    pub const fn ppm_error(&self) -> u32 {
        self.ppm_error
    }
}

impl Display for AdductPair<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            adduct,
            partner,
            partner_peak,
            predicted_mz,
            ppm_error,
        } = self;
        let observed_mz = partner_peak.mz();
        write!(
            f,
            "{adduct} paired with {partner} (predicted m/z {predicted_mz:.4}, observed {observed_mz:.4}, \
            {ppm_error} ppm)"
        )
    }
}

// Private Helper Code =================================================================================================

impl<'t> AdductDetector<'t> {
    fn base_peak<'p>(&self, reference_mz: f64, peaks: &'p BTreeSet<Peak>) -> Option<&'p Peak> {
        peaks
            .iter()
            .find(|peak| (peak.mz() - reference_mz).abs() < self.reference_tolerance)
    }

    fn pair_adducts(
        &self,
        base: &Peak,
        other: Peak,
        adducts: &'t [Adduct],
    ) -> Option<AdductPair<'t>> {
        iproduct!(adducts, adducts)
            .filter(|(adduct, partner)| adduct.label() != partner.label())
            .find_map(|(adduct, partner)| {
                let mass = adduct.monoisotopic_mass(base.mz());
                let predicted_mz = partner.mz(mass);
                let ppm_error = ppm_error(other.mz(), predicted_mz)?;
                trace!(
                    "trying {adduct} -> {partner}: M = {mass:.4}, predicted m/z {predicted_mz:.4}, observed {:.4} \
                    ({ppm_error} ppm)",
                    other.mz()
                );

                (ppm_error <= self.ppm_tolerance).then_some(AdductPair {
                    adduct,
                    partner,
                    partner_peak: other,
                    predicted_mz,
                    ppm_error,
                })
            })
    }
}

// Module Tests ========================================================================================================
