// External Crate Imports
use mzpeaks::Tolerance;

// Public API ==========================================================================================================

/// The deviation of `experimental` from `theoretical`, in parts-per-million, rounded to the nearest whole ppm
///
/// Returns `None` when `theoretical` is zero, or when either value isn't finite, since no meaningful relative error
/// exists in those cases.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn ppm_error(experimental: f64, theoretical: f64) -> Option<u32> {
    if theoretical == 0.0 {
        return None;
    }

    let ppm = ((experimental - theoretical) * 1_000_000.0 / theoretical)
        .abs()
        .round();
    // NOTE: Float to integer `as` casts saturate, so values beyond `u32::MAX` clamp rather than wrap
    ppm.is_finite().then(|| ppm as u32)
}

/// The absolute half-width, in Da, of a `ppm` window centred on `mz`
#[must_use]
pub fn ppm_delta(mz: f64, ppm: f64) -> f64 {
    let (min_mz, max_mz) = Tolerance::PPM(ppm).bounds(mz);
    (max_mz - min_mz).abs() / 2.0
}

// Module Tests ========================================================================================================
