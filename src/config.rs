
use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::build::{
    filter::FilterOptions,
    pipeline::{Replacement, Shortening},
    shorten::AbbreviationError,
    styles::StyleOptions,
};

pub const CONFIG_FILE: &str = "highlight-build.toml";
const DEFAULT_LANGUAGES_DIR: fn() -> PathBuf = || "src/languages".into();
const DEFAULT_ENTRY_POINT_DIR: fn() -> PathBuf = || "src".into();
const DEFAULT_OUTPUT_DIR: fn() -> PathBuf = || "build".into();
const DEFAULT_STYLES_DIR: fn() -> PathBuf = || "src/styles".into();
const DEFAULT_DESCRIPTOR_SUFFIX: fn() -> String = || ".js".into();
const DEFAULT_ENTRY_POINT: fn() -> String = || "highlight.js".into();
const DEFAULT_STYLE_EXTENSION: fn() -> String = || "css".into();
const DEFAULT_STYLE: fn() -> String = || "default".into();
const DEFAULT_STYLE_PREFIX: fn() -> String = || "styles".into();
const DEFAULT_SORT_STYLES: fn() -> bool = || true;
const DEFAULT_STRIP_HEADERS: fn() -> bool = || true;

#[derive(Deserialize, Debug)]
struct ReplacementDesc {
    from: String,
    to: String,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ConfigDesc {
    #[serde(default = "DEFAULT_LANGUAGES_DIR")]
    languages_dir: PathBuf,
    #[serde(default = "DEFAULT_ENTRY_POINT_DIR")]
    entry_point_dir: PathBuf,
    #[serde(default = "DEFAULT_OUTPUT_DIR")]
    output_dir: PathBuf,
    #[serde(default = "DEFAULT_STYLES_DIR")]
    styles_dir: PathBuf,
    #[serde(default = "DEFAULT_DESCRIPTOR_SUFFIX")]
    descriptor_suffix: String,
    #[serde(default = "DEFAULT_ENTRY_POINT")]
    entry_point: String,
    #[serde(default = "DEFAULT_STYLE_EXTENSION")]
    style_extension: String,
    #[serde(default = "DEFAULT_STYLE")]
    default_style: String,
    #[serde(default = "DEFAULT_STYLE_PREFIX")]
    style_prefix: String,
    #[serde(default = "DEFAULT_SORT_STYLES")]
    sort_styles: bool,
    #[serde(default = "DEFAULT_STRIP_HEADERS")]
    strip_headers: bool,
    #[serde(default)]
    shortening: Shortening,
    #[serde(default)]
    replacements: Vec<ReplacementDesc>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to open \"{path}\": {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("unable to load \"{path}\": {source}")]
    Parse {
        path: PathBuf,
        source: basic_toml::Error,
    },
    #[error("invalid replacement pattern \"{pattern}\": {source}")]
    Replacement {
        pattern: String,
        source: regex::Error,
    },
    #[error("invalid abbreviation table: {0}")]
    Abbreviations(#[from] AbbreviationError),
}

pub struct Config {
    pub languages_dir: PathBuf,
    pub entry_point_dir: PathBuf,
    pub output_dir: PathBuf,
    pub styles_dir: PathBuf,
    pub descriptor_suffix: String,
    pub entry_point: String,
    pub style_extension: String,
    pub default_style: String,
    pub style_prefix: String,
    pub sort_styles: bool,
    pub strip_headers: bool,
    pub shortening: Shortening,
    pub replacements: Vec<Replacement>,
}

impl Config {
    /// Loads `path` if given. Otherwise the config file in the working
    /// directory is used when there is one, and the defaults when there isn't.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(Path::new(CONFIG_FILE)),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let config_string = read_to_string(path).map_err(|source| ConfigError::Open {
            path: path.into(),
            source,
        })?;

        Self::parse(path, &config_string)
    }

    /// Parses config text. Relative directories are resolved against the
    /// directory containing `path`.
    pub fn parse(path: &Path, string: &str) -> Result<Config, ConfigError> {
        let config_desc =
            basic_toml::from_str::<ConfigDesc>(string).map_err(|source| ConfigError::Parse {
                path: path.into(),
                source,
            })?;

        let root = path.parent().unwrap_or(Path::new(""));

        let mut replacements = Vec::with_capacity(config_desc.replacements.len());

        for replacement in &config_desc.replacements {
            replacements.push(
                Replacement::new(&replacement.from, &replacement.to).map_err(|source| {
                    ConfigError::Replacement {
                        pattern: replacement.from.clone(),
                        source,
                    }
                })?,
            );
        }

        Ok(Config {
            languages_dir: root.join(config_desc.languages_dir),
            entry_point_dir: root.join(config_desc.entry_point_dir),
            output_dir: root.join(config_desc.output_dir),
            styles_dir: root.join(config_desc.styles_dir),
            descriptor_suffix: config_desc.descriptor_suffix,
            entry_point: config_desc.entry_point,
            style_extension: config_desc.style_extension,
            default_style: config_desc.default_style,
            style_prefix: config_desc.style_prefix,
            sort_styles: config_desc.sort_styles,
            strip_headers: config_desc.strip_headers,
            shortening: config_desc.shortening,
            replacements,
        })
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            descriptor_suffix: self.descriptor_suffix.clone(),
            entry_point: self.entry_point.clone(),
        }
    }

    pub fn style_options(&self) -> StyleOptions {
        StyleOptions {
            extension: self.style_extension.clone(),
            default_style: self.default_style.clone(),
            prefix: self.style_prefix.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages_dir: DEFAULT_LANGUAGES_DIR(),
            entry_point_dir: DEFAULT_ENTRY_POINT_DIR(),
            output_dir: DEFAULT_OUTPUT_DIR(),
            styles_dir: DEFAULT_STYLES_DIR(),
            descriptor_suffix: DEFAULT_DESCRIPTOR_SUFFIX(),
            entry_point: DEFAULT_ENTRY_POINT(),
            style_extension: DEFAULT_STYLE_EXTENSION(),
            default_style: DEFAULT_STYLE(),
            style_prefix: DEFAULT_STYLE_PREFIX(),
            sort_styles: DEFAULT_SORT_STYLES(),
            strip_headers: DEFAULT_STRIP_HEADERS(),
            shortening: Shortening::default(),
            replacements: Vec::new(),
        }
    }
}
