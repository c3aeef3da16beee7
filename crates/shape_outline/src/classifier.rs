//! Pixel solidity classification

use crate::color::{PixelSample, Rgb};
use crate::settings::OutlineSettings;

/// Decide whether a pixel counts as solid for collision purposes.
///
/// A pixel is solid when its alpha is strictly above `alpha_threshold` and
/// no ignored color lies within `color_tolerance * sqrt(3)` of its RGB.
/// Both boundaries exclude the pixel.
#[inline]
pub fn is_solid(
    pixel: PixelSample,
    alpha_threshold: f32,
    ignored_colors: &[Rgb],
    color_tolerance: f32,
) -> bool {
    if pixel.a <= alpha_threshold {
        return false;
    }

    let rgb = pixel.rgb();
    !ignored_colors
        .iter()
        .any(|ignored| ignored.matches(&rgb, color_tolerance))
}

/// [`is_solid`] bound to a set of [`OutlineSettings`]
#[derive(Debug, Clone, Copy)]
pub struct SolidityClassifier<'a> {
    alpha_threshold: f32,
    ignored_colors: &'a [Rgb],
    color_tolerance: f32,
}

impl<'a> SolidityClassifier<'a> {
    pub fn new(settings: &'a OutlineSettings) -> Self {
        Self {
            alpha_threshold: settings.alpha_threshold,
            ignored_colors: &settings.ignored_colors,
            color_tolerance: settings.color_tolerance,
        }
    }

    #[inline]
    pub fn is_solid(&self, pixel: PixelSample) -> bool {
        is_solid(
            pixel,
            self.alpha_threshold,
            self.ignored_colors,
            self.color_tolerance,
        )
    }

    #[inline]
    pub fn is_solid_rgba8(&self, rgba: [u8; 4]) -> bool {
        self.is_solid(PixelSample::from_rgba8(rgba))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_threshold_is_exclusive() {
        let pixel = PixelSample::new(1.0, 0.0, 0.0, 0.5);
        assert!(!is_solid(pixel, 0.5, &[], 0.0));
        assert!(is_solid(pixel, 0.49, &[], 0.0));
        assert!(!is_solid(PixelSample::from_rgba8([0, 0, 0, 0]), 0.0, &[], 0.0));
        assert!(is_solid(PixelSample::from_rgba8([0, 0, 0, 1]), 0.0, &[], 0.0));
    }

    #[test]
    fn test_alpha_monotonic() {
        let ignored = [Rgb::new(0.0, 1.0, 0.0)];
        for threshold in [0.0, 0.1, 0.25, 0.5, 0.75, 0.99, 1.0] {
            for rgb in [[255, 0, 0], [0, 255, 0], [12, 34, 56]] {
                let mut was_solid = false;
                for alpha in 0..=255u8 {
                    let pixel = PixelSample::from_rgba8([rgb[0], rgb[1], rgb[2], alpha]);
                    let solid = is_solid(pixel, threshold, &ignored, 0.1);
                    assert!(
                        solid || !was_solid,
                        "alpha {} turned solid pixel non-solid at threshold {}",
                        alpha,
                        threshold
                    );
                    was_solid = solid;
                }
            }
        }
    }

    #[test]
    fn test_ignored_color_excludes() {
        let magenta = Rgb::from_rgb8(255, 0, 255);
        let pixel = PixelSample::from_rgba8([250, 5, 250, 255]);

        assert!(is_solid(pixel, 0.5, &[], 0.05));
        assert!(!is_solid(pixel, 0.5, &[magenta], 0.05));
        assert!(is_solid(pixel, 0.5, &[magenta], 0.001));
    }

    #[test]
    fn test_ignored_color_boundary_excludes() {
        // distance 0 with tolerance 0: equality is inside the ignore radius
        let red = Rgb::new(1.0, 0.0, 0.0);
        let pixel = PixelSample::new(1.0, 0.0, 0.0, 1.0);
        assert!(!is_solid(pixel, 0.5, &[red], 0.0));
    }

    #[test]
    fn test_empty_ignore_list_is_alpha_only() {
        let pixel = PixelSample::new(0.3, 0.3, 0.3, 0.9);
        assert!(is_solid(pixel, 0.5, &[], 1.0));
    }

    #[test]
    fn test_classifier_uses_settings() {
        let settings = OutlineSettings::default().with_ignored_color(Rgb::WHITE);
        let classifier = SolidityClassifier::new(&settings);
        assert!(!classifier.is_solid_rgba8([255, 255, 255, 255]));
        assert!(classifier.is_solid_rgba8([0, 0, 0, 255]));
        assert!(!classifier.is_solid_rgba8([0, 0, 0, 127]));
    }
}
