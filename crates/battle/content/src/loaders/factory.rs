//! Content factory for building rosters from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Roster};

use crate::factory::UnitFactory;
use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};
use crate::templates::UnitTemplate;

/// Content factory that loads a whole battle from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml   (optional)
/// ├── allies.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "battle.toml";
    pub const ALLIES_FILE: &'static str = "allies.ron";
    pub const ENEMIES_FILE: &'static str = "enemies.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `battle.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no battle config, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the allied templates from `allies.ron`.
    pub fn load_allies(&self) -> LoadResult<Vec<UnitTemplate>> {
        RosterLoader::load(&self.data_dir.join(Self::ALLIES_FILE))
    }

    /// Load the enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<UnitTemplate>> {
        RosterLoader::load(&self.data_dir.join(Self::ENEMIES_FILE))
    }

    /// Loads every file and builds a validated roster.
    ///
    /// Returns the configuration alongside so the runtime uses the same one.
    pub fn build_roster(&self) -> LoadResult<(BattleConfig, Roster)> {
        let config = self.load_config()?;
        let allies = self.load_allies()?;
        let enemies = self.load_enemies()?;

        let roster = UnitFactory::new(config.clone())
            .build_roster(&allies, &enemies)
            .map_err(|e| anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e))?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            allies = roster.allies().len(),
            enemies = roster.enemies().len(),
            "roster loaded"
        );
        Ok((config, roster))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
