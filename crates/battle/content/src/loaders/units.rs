//! Unit list loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::UnitTemplate;

/// Loader for one side of a roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a unit list from a RON file.
    ///
    /// RON format: `Vec<UnitTemplate>`. Duplicate ids inside one file are
    /// rejected here so the error names the offending file.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        let units = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(path = %path.display(), count = units.len(), "loaded unit templates");
        Ok(units)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitTemplate>> {
        let units: Vec<UnitTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit list RON: {}", e))?;

        for (i, unit) in units.iter().enumerate() {
            if units[..i].iter().any(|other| other.id == unit.id) {
                anyhow::bail!("Duplicate unit id '{}' in unit list", unit.id);
            }
        }

        Ok(units)
    }
}
