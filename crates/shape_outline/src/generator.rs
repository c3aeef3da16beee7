//! Full outline pipeline: pixels, mask, trace, simplify

use crate::error::{OutlineError, Result};
use crate::mask::{PixelBuffer, Region, SolidMask};
use crate::polygon::Polygon;
use crate::settings::OutlineSettings;
use crate::tracer::{trace, trace_all};

/// Generates physics outlines from pixel regions with fixed settings
#[derive(Debug, Clone, Default)]
pub struct OutlineGenerator {
    settings: OutlineSettings,
}

impl OutlineGenerator {
    /// Create a generator, rejecting out-of-range settings
    pub fn new(settings: OutlineSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &OutlineSettings {
        &self.settings
    }

    /// Classify `region` of `pixels` into a solid mask
    pub fn classify(&self, pixels: &PixelBuffer<'_>, region: Region) -> Result<SolidMask> {
        SolidMask::classify(pixels, region, &self.settings)
    }

    /// Trace and simplify the first boundary loop of `mask`
    pub fn outline_from_mask(&self, mask: &SolidMask) -> Result<Polygon> {
        if mask.is_transparent() {
            return Err(OutlineError::EmptyOutline);
        }

        let raw = trace(mask);
        self.simplify_loop(&raw)
    }

    /// Trace and simplify the outer boundary of every solid region in `mask`.
    ///
    /// Hole boundaries (wound opposite to outer boundaries) are skipped, as
    /// are loops that simplify below a triangle. Fails with `EmptyOutline`
    /// if no outer loop was traced at all, and with `OverSimplified` if
    /// loops were traced but none survived.
    pub fn outlines_from_mask(&self, mask: &SolidMask) -> Result<Vec<Polygon>> {
        if mask.is_transparent() {
            return Err(OutlineError::EmptyOutline);
        }

        let loops: Vec<Polygon> = trace_all(mask)
            .into_iter()
            .filter(|raw| raw.signed_area() > 0.0)
            .collect();
        let mut outlines = Vec::with_capacity(loops.len());
        let mut last_error = OutlineError::EmptyOutline;

        for raw in &loops {
            match self.simplify_loop(raw) {
                Ok(outline) => outlines.push(outline),
                Err(e) => last_error = e,
            }
        }

        if outlines.is_empty() {
            return Err(last_error);
        }

        log::debug!(
            "Kept {} of {} outer loops ({}x{} mask, {} solid cells)",
            outlines.len(),
            loops.len(),
            mask.width(),
            mask.height(),
            mask.solid_count()
        );
        Ok(outlines)
    }

    /// Single simplified outline for a pixel region
    pub fn generate(&self, pixels: &PixelBuffer<'_>, region: Region) -> Result<Polygon> {
        let mask = self.classify(pixels, region)?;
        self.outline_from_mask(&mask)
    }

    /// Outlines for a pixel region; one polygon unless `all_regions` is set
    pub fn generate_outlines(
        &self,
        pixels: &PixelBuffer<'_>,
        region: Region,
    ) -> Result<Vec<Polygon>> {
        let mask = self.classify(pixels, region)?;
        if self.settings.all_regions {
            self.outlines_from_mask(&mask)
        } else {
            self.outline_from_mask(&mask).map(|outline| vec![outline])
        }
    }

    fn simplify_loop(&self, raw: &Polygon) -> Result<Polygon> {
        if !raw.is_usable() {
            return Err(OutlineError::EmptyOutline);
        }

        let simplified = raw.simplified(self.settings.simplify_tolerance);
        if !simplified.is_usable() {
            return Err(OutlineError::OverSimplified {
                vertices: simplified.len(),
            });
        }

        log::trace!(
            "Simplified outline from {} to {} vertices",
            raw.len(),
            simplified.len()
        );
        Ok(simplified)
    }
}
