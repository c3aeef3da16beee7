//! Outline generation settings

use crate::color::Rgb;
use crate::error::{OutlineError, Result};
use serde::{Deserialize, Serialize};

/// Two ignored colors closer than this are considered the same entry
pub const DUPLICATE_COLOR_DISTANCE: f32 = 0.01;

/// Upper bound accepted for the simplification tolerance, in pixels
pub const MAX_SIMPLIFY_TOLERANCE: f32 = 5.0;

/// Parameters controlling mask classification and simplification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineSettings {
    /// Pixels with alpha strictly above this value are solid
    pub alpha_threshold: f32,

    /// Douglas-Peucker tolerance in pixels; higher gives fewer vertices
    pub simplify_tolerance: f32,

    /// Colors treated as transparent regardless of alpha
    pub ignored_colors: Vec<Rgb>,

    /// How closely a pixel must match an ignored color
    /// (0 = exact match, 1 = match anything)
    pub color_tolerance: f32,

    /// Trace every boundary loop instead of only the first one
    pub all_regions: bool,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            alpha_threshold: 0.5,
            simplify_tolerance: 0.8,
            ignored_colors: Vec::new(),
            color_tolerance: 0.05,
            all_regions: false,
        }
    }
}

impl OutlineSettings {
    /// Set the alpha threshold
    pub fn with_alpha_threshold(mut self, alpha_threshold: f32) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    /// Set the simplification tolerance
    pub fn with_simplify_tolerance(mut self, tolerance: f32) -> Self {
        self.simplify_tolerance = tolerance;
        self
    }

    /// Set the ignored color tolerance
    pub fn with_color_tolerance(mut self, tolerance: f32) -> Self {
        self.color_tolerance = tolerance;
        self
    }

    /// Add an ignored color (no duplicate check)
    pub fn with_ignored_color(mut self, color: Rgb) -> Self {
        self.ignored_colors.push(color);
        self
    }

    /// Enable or disable multi-region tracing
    pub fn with_all_regions(mut self, all_regions: bool) -> Self {
        self.all_regions = all_regions;
        self
    }

    /// Add a picked color to the ignore list.
    ///
    /// Returns `false` without changing anything when an entry within
    /// [`DUPLICATE_COLOR_DISTANCE`] already exists.
    pub fn ignore_color(&mut self, color: Rgb) -> bool {
        let exists = self
            .ignored_colors
            .iter()
            .any(|existing| existing.distance(&color) < DUPLICATE_COLOR_DISTANCE);

        if exists {
            log::debug!("Color already in ignored list: {}", color);
            return false;
        }

        log::debug!("Ignoring color {}", color);
        self.ignored_colors.push(color);
        true
    }

    /// Check every value against its accepted range
    pub fn validate(&self) -> Result<()> {
        check_range("alpha_threshold", self.alpha_threshold, 0.0, 1.0)?;
        check_range(
            "simplify_tolerance",
            self.simplify_tolerance,
            0.0,
            MAX_SIMPLIFY_TOLERANCE,
        )?;
        check_range("color_tolerance", self.color_tolerance, 0.0, 1.0)?;

        for color in &self.ignored_colors {
            for (channel, value) in [("r", color.r), ("g", color.g), ("b", color.b)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(OutlineError::InvalidSettings(format!(
                        "ignored color channel {} = {} is outside [0, 1]",
                        channel, value
                    )));
                }
            }
        }

        Ok(())
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    // NaN fails the contains check as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(OutlineError::InvalidSettings(format!(
            "{} = {} is outside [{}, {}]",
            name, value, min, max
        )))
    }
}
