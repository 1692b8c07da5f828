use crate::error::{ChartError, ChartResult};

/// Affine map from a data domain onto a pixel extent.
///
/// With `inverted` the domain start lands on the far end of the extent, which
/// is how chart-space y (up) is turned into screen-space y (down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_extent: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, pixel_extent: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_extent.is_finite() || pixel_extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_extent,
            inverted: false,
        })
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let offset = (value - self.domain_start) / span * self.pixel_extent;
        if self.inverted {
            self.pixel_extent - offset
        } else {
            offset
        }
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let offset = if self.inverted {
            self.pixel_extent - pixel
        } else {
            pixel
        };
        self.domain_start + offset / self.pixel_extent * span
    }
}
