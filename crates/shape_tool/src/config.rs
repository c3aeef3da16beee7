//! Tool Configuration
//!
//! # Configuration Sources (later sources win)
//!
//! 1. Built-in defaults
//! 2. Config file: `--config <path>`, or `sprite_shapes.toml` in the working
//!    directory when present
//! 3. Environment variables: `SPRITE_SHAPES_ALPHA`, `SPRITE_SHAPES_TOLERANCE`,
//!    `SPRITE_SHAPES_COLOR_TOLERANCE`, `SPRITE_SHAPES_IGNORE` (comma separated),
//!    `SPRITE_SHAPES_ALL_REGIONS`, `SPRITE_SHAPES_STORE`, `SPRITE_SHAPES_VERBOSE`
//! 4. Command line flags
//!
//! Ignored colors accumulate across sources instead of replacing each other.
//!
//! # Example Config File
//!
//! ```toml
//! store = "assets/outlines.json"
//! verbose = false
//!
//! [outline]
//! alpha_threshold = 0.5
//! simplify_tolerance = 0.8
//! color_tolerance = 0.05
//! ignored_colors = ["FF00FF"]
//! all_regions = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use shape_outline::{OutlineSettings, Rgb};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sprite_shapes.toml";

/// Prefix of every environment variable the tool reads
pub const ENV_PREFIX: &str = "SPRITE_SHAPES_";

pub const USAGE: &str = "\
Usage: sprite-shapes <preview|apply|remove> <texture> [atlas.json] [options]

Options:
  --sprite NAME            Only process this sprite
  --store PATH             Outline store (default: <texture stem>.outlines.json)
  --alpha F                Alpha threshold, 0..1
  --tolerance F            Simplification tolerance in pixels, 0..5
  --color-tolerance F      Ignored color match tolerance, 0..1
  --ignore RRGGBB          Treat this color as empty (repeatable)
  --ignore-at X,Y          Ignore the color at this sprite pixel (repeatable,
                           needs --sprite)
  --all-regions            Keep every traced loop, not just the first
  --config PATH            Config file (default: sprite_shapes.toml)
  --verbose                Debug logging
  -h, --help               Show this help";

/// What to do with the selected sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print outline summaries without storing anything
    Preview,
    /// Generate and store outlines
    Apply,
    /// Clear stored outlines
    Remove,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preview => write!(f, "preview"),
            Self::Apply => write!(f, "apply"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preview" | "show" => Ok(Self::Preview),
            "apply" | "generate" => Ok(Self::Apply),
            "remove" | "clear" => Ok(Self::Remove),
            _ => Err(format!("Unknown command: {}", s)),
        }
    }
}

/// Contents of a config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub store: Option<PathBuf>,
    pub verbose: bool,
    pub outline: OutlineSettings,
}

impl FileConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }
}

/// Parsed command line, before layering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub command: Option<Command>,
    pub texture: Option<PathBuf>,
    pub atlas: Option<PathBuf>,
    pub sprite: Option<String>,
    pub store: Option<PathBuf>,
    pub alpha: Option<f32>,
    pub tolerance: Option<f32>,
    pub color_tolerance: Option<f32>,
    pub ignore: Vec<Rgb>,
    /// Sprite-local pixels whose colors are added to the ignore list
    pub ignore_at: Vec<(u32, u32)>,
    pub all_regions: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => parsed.help = true,
                "--all-regions" => parsed.all_regions = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "--sprite" => parsed.sprite = Some(flag_value(&arg, args.next())?),
                "--store" => parsed.store = Some(flag_value(&arg, args.next())?.into()),
                "--config" => parsed.config = Some(flag_value(&arg, args.next())?.into()),
                "--alpha" => {
                    parsed.alpha = Some(parse_value(&arg, &flag_value(&arg, args.next())?)?)
                }
                "--tolerance" => {
                    parsed.tolerance = Some(parse_value(&arg, &flag_value(&arg, args.next())?)?)
                }
                "--color-tolerance" => {
                    parsed.color_tolerance =
                        Some(parse_value(&arg, &flag_value(&arg, args.next())?)?)
                }
                "--ignore" => {
                    let value = flag_value(&arg, args.next())?;
                    parsed.ignore.push(parse_value(&arg, &value)?);
                }
                "--ignore-at" => {
                    let value = flag_value(&arg, args.next())?;
                    parsed.ignore_at.push(parse_point(&arg, &value)?);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::Usage(format!("Unknown option: {}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(command) = positional.next() {
            parsed.command = Some(command.parse().map_err(ConfigError::Usage)?);
        }
        parsed.texture = positional.next().map(PathBuf::from);
        parsed.atlas = positional.next().map(PathBuf::from);

        if let Some(extra) = positional.next() {
            return Err(ConfigError::Usage(format!("Unexpected argument: {}", extra)));
        }

        Ok(parsed)
    }
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::Usage(format!("{} expects a value", flag)))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// `X,Y` in sprite-local pixels
fn parse_point(key: &str, value: &str) -> Result<(u32, u32), ConfigError> {
    let (x, y) = value.split_once(',').ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    Ok((parse_value(key, x)?, parse_value(key, y)?))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Fully layered tool configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    pub command: Command,
    pub texture: PathBuf,
    pub atlas: Option<PathBuf>,
    pub sprite: Option<String>,
    /// Pixels of `sprite` to pick ignored colors from once the sheet is loaded
    pub ignore_at: Vec<(u32, u32)>,
    pub store: PathBuf,
    pub outline: OutlineSettings,
    pub verbose: bool,
    /// Config file that was applied, if any
    pub config_path: Option<PathBuf>,
}

impl ToolConfig {
    /// Layer defaults, config file, process environment and `args`
    pub fn load(args: CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => Some((path.clone(), FileConfig::load(path)?)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Some((path.clone(), FileConfig::load(&path)?))
                } else {
                    None
                }
            }
        };

        Self::from_layers(file, |key| std::env::var(key).ok(), args)
    }

    /// Layer an already-loaded config file, an environment lookup and `args`
    pub fn from_layers(
        file: Option<(PathBuf, FileConfig)>,
        env: impl Fn(&str) -> Option<String>,
        args: CliArgs,
    ) -> Result<Self, ConfigError> {
        let command = args
            .command
            .ok_or_else(|| ConfigError::Usage("Missing command".to_string()))?;
        let texture = args
            .texture
            .clone()
            .ok_or_else(|| ConfigError::Usage("Missing texture path".to_string()))?;
        if !args.ignore_at.is_empty() && args.sprite.is_none() {
            return Err(ConfigError::Usage("--ignore-at requires --sprite".to_string()));
        }

        // 1. Config file
        let (config_path, file) = match file {
            Some((path, file)) => (Some(path), file),
            None => (None, FileConfig::default()),
        };
        let mut outline = file.outline;
        let mut store = file.store;
        let mut verbose = file.verbose;

        // 2. Environment
        let var = |name: &str| {
            let key = format!("{}{}", ENV_PREFIX, name);
            env(&key).map(|value| (key, value))
        };

        if let Some((key, value)) = var("ALPHA") {
            outline.alpha_threshold = parse_value(&key, &value)?;
        }
        if let Some((key, value)) = var("TOLERANCE") {
            outline.simplify_tolerance = parse_value(&key, &value)?;
        }
        if let Some((key, value)) = var("COLOR_TOLERANCE") {
            outline.color_tolerance = parse_value(&key, &value)?;
        }
        if let Some((key, value)) = var("IGNORE") {
            for hex in value.split(',').filter(|s| !s.trim().is_empty()) {
                outline.ignore_color(parse_value(&key, hex)?);
            }
        }
        if let Some((key, value)) = var("ALL_REGIONS") {
            outline.all_regions = parse_bool(&key, &value)?;
        }
        if let Some((_, value)) = var("STORE") {
            if !value.is_empty() {
                store = Some(PathBuf::from(value));
            }
        }
        if let Some((key, value)) = var("VERBOSE") {
            verbose = parse_bool(&key, &value)?;
        }

        // 3. Command line
        if let Some(alpha) = args.alpha {
            outline.alpha_threshold = alpha;
        }
        if let Some(tolerance) = args.tolerance {
            outline.simplify_tolerance = tolerance;
        }
        if let Some(tolerance) = args.color_tolerance {
            outline.color_tolerance = tolerance;
        }
        for color in args.ignore {
            outline.ignore_color(color);
        }
        if args.all_regions {
            outline.all_regions = true;
        }
        if args.store.is_some() {
            store = args.store;
        }
        verbose |= args.verbose;

        let store = store.unwrap_or_else(|| default_store_path(&texture));

        Ok(Self {
            command,
            texture,
            atlas: args.atlas,
            sprite: args.sprite,
            ignore_at: args.ignore_at,
            store,
            outline,
            verbose,
            config_path,
        })
    }

    /// Log a configuration summary
    pub fn print_summary(&self) {
        log::debug!("Tool Configuration:");
        log::debug!("  Command: {}", self.command);
        log::debug!("  Texture: {:?}, atlas: {:?}", self.texture, self.atlas);
        log::debug!("  Store: {:?}", self.store);
        log::debug!(
            "  Alpha: {}, tolerance: {}, color tolerance: {}, ignored colors: {}",
            self.outline.alpha_threshold,
            self.outline.simplify_tolerance,
            self.outline.color_tolerance,
            self.outline.ignored_colors.len()
        );
        if let Some(path) = &self.config_path {
            log::debug!("  Config: {:?}", path);
        }
    }
}

/// `<dir>/<stem>.outlines.json` next to the texture
pub fn default_store_path(texture: &Path) -> PathBuf {
    texture.with_extension("outlines.json")
}
