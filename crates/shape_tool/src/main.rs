//! Sprite Shapes
//!
//! Generates physics outlines for the sprites of a sprite sheet and stores
//! them in a JSON file next to the texture.
//!
//! Run with: cargo run -p shape_tool -- apply hero.png hero.atlas.json
//!       or: sprite-shapes preview hero.png --sprite idle_0

mod config;
mod error;

use config::{CliArgs, Command, ToolConfig, USAGE};
use error::ToolError;
use shape_asset::{
    apply_outlines, preview, remove_outlines, AssetError, JsonOutlineStore, SpriteSheet,
};
use shape_outline::{OutlineGenerator, OutlineSettings};

fn main() {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    if args.help || args.command.is_none() {
        println!("{}", USAGE);
        return;
    }

    let config = match ToolConfig::load(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let default_filter = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    config.print_summary();

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &ToolConfig) -> Result<(), ToolError> {
    let sheet = SpriteSheet::load(&config.texture, config.atlas.as_deref())?;

    let mut settings = config.outline.clone();
    if let Some(sprite) = config.sprite.as_deref() {
        pick_ignored_colors(&sheet, sprite, &config.ignore_at, &mut settings)?;
    }
    let generator = OutlineGenerator::new(settings)?;
    let mut store = JsonOutlineStore::open(&config.store)?;
    let only = config.sprite.as_deref();

    match config.command {
        Command::Preview => {
            for sprite in sheet.select(only)? {
                match preview(&sheet, &generator, &store, &sprite.name) {
                    Ok(report) => println!("{}", report),
                    Err(AssetError::Outline(e)) => println!("Sprite: {}  |  {}", sprite.name, e),
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Command::Apply => {
            let count = apply_outlines(&sheet, &generator, &mut store, only)?;
            if count > 0 {
                println!(
                    "Applied physics shapes to {}/{} sprite(s), saved to {}",
                    count,
                    sheet.select(only)?.len(),
                    config.store.display()
                );
            } else {
                println!("No sprites were processed. Check that sprites have visible pixels.");
            }
        }
        Command::Remove => {
            let count = remove_outlines(&sheet, &mut store, only)?;
            println!("Removed physics shapes from {} sprite(s)", count);
        }
    }

    Ok(())
}

/// Add the colors under `points` of `sprite` to the ignore list.
///
/// Returns how many new colors were added.
fn pick_ignored_colors(
    sheet: &SpriteSheet,
    sprite: &str,
    points: &[(u32, u32)],
    settings: &mut OutlineSettings,
) -> Result<usize, ToolError> {
    let rect = sheet.sprite(sprite)?;

    let mut added = 0;
    for &(x, y) in points {
        let color = sheet
            .pick_color(rect, x, y)
            .ok_or_else(|| ToolError::PickOutside {
                sprite: rect.name.clone(),
                x,
                y,
            })?;

        if settings.ignore_color(color) {
            log::info!("Ignoring color {} picked at ({}, {}) in '{}'", color, x, y, rect.name);
            added += 1;
        }
    }

    Ok(added)
}
