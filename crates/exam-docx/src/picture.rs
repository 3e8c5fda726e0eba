//! Inline pictures.

/// English Metric Units per centimetre.
pub const EMU_PER_CM: u32 = 360_000;

/// English Metric Units per pixel at 96 dpi.
pub const EMU_PER_PIXEL: u32 = 9_525;

/// A PNG picture with its display size.
#[derive(Clone, PartialEq, Eq)]
pub struct Picture {
    pub(crate) png: Vec<u8>,
    pub(crate) pixel_width: u32,
    pub(crate) pixel_height: u32,
    pub(crate) width_emu: u32,
    pub(crate) height_emu: u32,
}

impl Picture {
    /// Creates a picture from PNG bytes, displayed at its natural size (96 dpi).
    ///
    /// Zero dimensions are clamped to one pixel.
    pub fn png(png: Vec<u8>, pixel_width: u32, pixel_height: u32) -> Self {
        let pixel_width = pixel_width.max(1);
        let pixel_height = pixel_height.max(1);
        Self {
            png,
            pixel_width,
            pixel_height,
            width_emu: pixel_width.saturating_mul(EMU_PER_PIXEL),
            height_emu: pixel_height.saturating_mul(EMU_PER_PIXEL),
        }
    }

    /// Scales the picture to `width_cm`, keeping its aspect ratio.
    #[must_use]
    pub fn fit_width_cm(mut self, width_cm: f64) -> Self {
        let target = to_emu(width_cm.max(0.01) * f64::from(EMU_PER_CM));
        let ratio = f64::from(self.pixel_height) / f64::from(self.pixel_width);
        self.width_emu = target;
        self.height_emu = to_emu(f64::from(target) * ratio);
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.png
    }

    /// Decoded size in pixels as (width, height).
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    /// Display size in EMU as (width, height).
    pub fn extent_emu(&self) -> (u32, u32) {
        (self.width_emu, self.height_emu)
    }
}

fn to_emu(value: f64) -> u32 {
    value.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

impl std::fmt::Debug for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picture")
            .field("bytes", &self.png.len())
            .field("pixels", &(self.pixel_width, self.pixel_height))
            .field("extent_emu", &(self.width_emu, self.height_emu))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_keeps_aspect_ratio() {
        let picture = Picture::png(vec![], 400, 200).fit_width_cm(10.0);
        assert_eq!(picture.extent_emu(), (3_600_000, 1_800_000));
        assert_eq!(picture.pixel_size(), (400, 200));
    }

    #[test]
    fn natural_size_uses_96_dpi() {
        let picture = Picture::png(vec![], 96, 0);
        assert_eq!(picture.extent_emu(), (914_400, 9_525));
    }
}
