//! Per-sprite outline generation, storage and removal over a sprite sheet

use crate::error::Result;
use crate::report::OutlineReport;
use crate::sheet::SpriteSheet;
use crate::store::OutlineStore;
use shape_outline::OutlineGenerator;

/// Generate outlines for every sprite of `sheet` (or only the one named
/// `only`) and store them relative to each sprite's centre.
///
/// All selected sprite rectangles are checked against the texture before
/// anything is generated; an out-of-bounds rectangle fails the whole call.
/// Sprites whose outline is empty or collapses under simplification are
/// skipped and keep whatever the store already held. Returns the number of
/// sprites that received outlines. The store is flushed afterwards.
pub fn apply_outlines<S: OutlineStore + ?Sized>(
    sheet: &SpriteSheet,
    generator: &OutlineGenerator,
    store: &mut S,
    only: Option<&str>,
) -> Result<usize> {
    let sprites = sheet.select(only)?;
    let pixels = sheet.pixels();

    for sprite in &sprites {
        pixels.check_region(sprite.region())?;
    }

    let mut processed = 0;
    for sprite in &sprites {
        match generator.generate_outlines(&pixels, sprite.region()) {
            Ok(outlines) => {
                let centered = outlines
                    .iter()
                    .map(|outline| outline.centered(sprite.width, sprite.height))
                    .collect();
                log::debug!(
                    "Sprite '{}': {} outline(s)",
                    sprite.name,
                    outlines.len()
                );
                store.set_outlines(&sprite.name, centered);
                processed += 1;
            }
            Err(e) => {
                log::warn!("Skipping sprite '{}': {}", sprite.name, e);
            }
        }
    }

    store.flush()?;

    if processed > 0 {
        log::info!(
            "Applied physics shapes to {}/{} sprites in '{}'",
            processed,
            sprites.len(),
            sheet.name()
        );
    } else {
        log::warn!("No sprites were processed in '{}'", sheet.name());
    }

    Ok(processed)
}

/// Clear stored outlines for every sprite of `sheet` (or only `only`).
///
/// Returns how many sprites actually had an outline to remove.
pub fn remove_outlines<S: OutlineStore + ?Sized>(
    sheet: &SpriteSheet,
    store: &mut S,
    only: Option<&str>,
) -> Result<usize> {
    let sprites = sheet.select(only)?;

    let removed = sprites
        .iter()
        .filter(|sprite| store.clear(&sprite.name))
        .count();

    store.flush()?;

    log::info!(
        "Removed physics shapes from {} sprite(s) in '{}'",
        removed,
        sheet.name()
    );
    Ok(removed)
}

/// Generate one sprite's outlines without storing them
pub fn preview<S: OutlineStore + ?Sized>(
    sheet: &SpriteSheet,
    generator: &OutlineGenerator,
    store: &S,
    sprite: &str,
) -> Result<OutlineReport> {
    let rect = sheet.sprite(sprite)?;
    let outlines = generator.generate_outlines(&sheet.pixels(), rect.region())?;

    let existing = store
        .outlines(&rect.name)
        .iter()
        .map(|outline| outline.uncentered(rect.width, rect.height))
        .collect();

    Ok(OutlineReport {
        sprite: rect.name.clone(),
        width: rect.width,
        height: rect.height,
        outlines,
        ignored_colors: generator.settings().ignored_colors.len(),
        existing,
    })
}
