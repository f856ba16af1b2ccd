use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    catalog::Catalog,
    core::Cutover,
    matcher::{CandidatePolicy, PlanMatcher},
    prelude::*,
};

/// Engine settings, read from a TOML file.
///
/// ```toml
/// cutover = "2024-10-24T00:00:00"
/// candidates = "same-period"
/// catalog = "tariffs/kepco-2024.toml"
/// ```
///
/// Every key is optional. Without `catalog`, the bundled KEPCO table is used.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[must_use]
pub struct Settings {
    pub cutover: Cutover,
    pub candidates: CandidatePolicy,
    pub catalog: Option<PathBuf>,
}

impl Settings {
    /// Read the settings file. A relative catalog path is resolved against the file's directory.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from `{}`", path.display()))?;
        let mut settings = Self::from_toml_str(&source)
            .with_context(|| format!("invalid settings in `{}`", path.display()))?;
        if let Some(catalog) = &settings.catalog
            && catalog.is_relative()
            && let Some(parent) = path.parent()
        {
            settings.catalog = Some(parent.join(catalog));
        }
        debug!(?settings, "loaded");
        Ok(settings)
    }

    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load and validate the configured catalog.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::kepco_2024()?);
        };
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read the catalog from `{}`", path.display()))?;
        Catalog::from_toml_str(&source)
            .with_context(|| format!("invalid catalog in `{}`", path.display()))
    }

    pub fn matcher<'a>(&self, catalog: &'a Catalog) -> PlanMatcher<'a> {
        PlanMatcher::builder()
            .catalog(catalog)
            .cutover(self.cutover)
            .candidates(self.candidates)
            .build()
    }
}
