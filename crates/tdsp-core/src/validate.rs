use crate::error::{Result, TdspError};
use crate::range::RangeSpec;
use crate::signal::fade::Fade;

use num_traits::{Float, Zero};

pub fn validate_fade(f: &Fade) -> Result<()> {
    if !f.begin.is_finite() {
        return Err(TdspError::Validation(format!(
            "fade begin must be finite, got {}",
            f.begin
        )));
    }
    if !f.end.is_finite() {
        return Err(TdspError::Validation(format!(
            "fade end must be finite, got {}",
            f.end
        )));
    }
    Ok(())
}

/// A range descriptor is usable only with a finite, non-zero extent.
pub fn validate_range<R: RangeSpec>() -> Result<()> {
    let extent = R::extent();
    if extent == R::Number::zero() {
        return Err(TdspError::Validation("range extent must be non-zero".into()));
    }
    if !extent.is_finite() || !R::begin().is_finite() {
        return Err(TdspError::Validation(
            "range begin and extent must be finite".into(),
        ));
    }
    Ok(())
}

/// Fader positions outside `[0, 1]` are legal (they extrapolate), NaN is not.
pub fn validate_fader(fader: f32) -> Result<()> {
    if fader.is_nan() {
        return Err(TdspError::Validation("fader must not be NaN".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{EightBit, Normal};
    use crate::signal::fade::FadeCurve;

    #[test]
    fn canonical_ranges_are_valid() {
        assert!(validate_range::<Normal>().is_ok());
        assert!(validate_range::<EightBit<f64>>().is_ok());
    }

    #[test]
    fn fade_rejects_non_finite_bounds() {
        let f = Fade {
            begin: f32::NAN,
            end: 1.0,
            curve: FadeCurve::Linear,
        };
        assert!(validate_fade(&f).is_err());
        assert!(validate_fade(&Fade::default()).is_ok());
    }

    #[test]
    fn nan_fader_is_rejected() {
        assert!(validate_fader(f32::NAN).is_err());
        assert!(validate_fader(1.5).is_ok());
    }
}
