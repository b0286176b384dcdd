//! Runtime configuration for the binary.
//!
//! Reads an optional TOML file, `match3.toml` in the working directory unless
//! `MATCH3_CONFIG` names another path. A missing file or missing keys fall back to
//! defaults; `MATCH3_SEED` overrides the seed.
//!
//! ```toml
//! [game]
//! mode = "moves"
//! theme = "Pirates"
//! seed = 42
//!
//! [board]
//! grid_size = 8
//! piece_kinds = 3
//! ```
//!
//! `piece_kinds` defaults to the theme's piece count and may not exceed it.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::EngineConfig;
use crate::session::GameMode;
use crate::types::{Theme, DEFAULT_GRID_SIZE};

pub const CONFIG_PATH_ENV: &str = "MATCH3_CONFIG";
pub const SEED_ENV: &str = "MATCH3_SEED";
pub const DEFAULT_CONFIG_FILE: &str = "match3.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: GameMode,
    pub theme: &'static Theme,
    pub engine: EngineConfig,
    /// `None` draws a seed from entropy
    pub seed: Option<u64>,
}

// ── TOML schema ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
    #[serde(default)]
    board: TomlBoard,
}

#[derive(Deserialize, Debug)]
struct TomlGame {
    #[serde(default = "default_mode")]
    mode: String,
    #[serde(default = "default_theme")]
    theme: String,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct TomlBoard {
    #[serde(default = "default_grid_size")]
    grid_size: usize,
    /// Overrides the theme's piece count
    #[serde(default)]
    piece_kinds: Option<u8>,
}

fn default_mode() -> String { GameMode::default().as_str().into() }
fn default_theme() -> String { Theme::default_theme().name.into() }
fn default_grid_size() -> usize { DEFAULT_GRID_SIZE }

impl Default for TomlGame {
    fn default() -> Self {
        TomlGame {
            mode: default_mode(),
            theme: default_theme(),
            seed: None,
        }
    }
}

impl Default for TomlBoard {
    fn default() -> Self {
        TomlBoard {
            grid_size: default_grid_size(),
            piece_kinds: None,
        }
    }
}

// ── Loading ──

impl AppConfig {
    /// Load from the environment-selected file, then apply `MATCH3_SEED`
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load_from(&path)?;
        if let Ok(seed) = std::env::var(SEED_ENV) {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("{SEED_ENV} is not a u64: {seed:?}"))?;
            config.seed = Some(seed);
        }
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::from_toml_str("");
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let toml_cfg: TomlConfig = toml::from_str(text)?;

        let mode = GameMode::from_str(&toml_cfg.game.mode).unwrap_or_else(|| {
            log::warn!(
                "unknown mode {:?}, using {}",
                toml_cfg.game.mode,
                GameMode::default().as_str()
            );
            GameMode::default()
        });
        let theme = Theme::by_name(&toml_cfg.game.theme).unwrap_or_else(|| {
            log::warn!(
                "unknown theme {:?}, using {}",
                toml_cfg.game.theme,
                Theme::default_theme().name
            );
            Theme::default_theme()
        });

        let themed = EngineConfig::for_theme(theme);
        let piece_kinds = toml_cfg.board.piece_kinds.unwrap_or(themed.piece_kinds);
        if piece_kinds > themed.piece_kinds {
            bail!(
                "piece_kinds = {} but the {} theme has {} pieces",
                piece_kinds,
                theme.name,
                themed.piece_kinds
            );
        }
        let engine = EngineConfig {
            grid_size: toml_cfg.board.grid_size,
            piece_kinds,
            ..themed
        };
        engine.validate()?;

        Ok(AppConfig {
            mode,
            theme,
            engine,
            seed: toml_cfg.game.seed,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let theme = Theme::default_theme();
        AppConfig {
            mode: GameMode::default(),
            theme,
            engine: EngineConfig::for_theme(theme),
            seed: None,
        }
    }
}
