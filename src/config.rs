use log::debug;
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };

use crate::errors::HarnessResult;
use crate::models::rule::{ ContentRule, PayloadRule };

/// Filenames of the build outputs, relative to the build-output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactFiles {
    pub installer: String,
    pub bookmarklet: String,
    pub standalone: String,
}

impl Default for ArtifactFiles {
    fn default() -> Self {
        Self {
            installer: "install.html".to_string(),
            bookmarklet: "bookmarklet.txt".to_string(),
            standalone: "kantine-standalone.html".to_string(),
        }
    }
}

/// Configuration for a verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Build-output directory holding the artifacts
    pub dist_dir: PathBuf,

    pub files: ArtifactFiles,

    /// Content rules for the bookmarklet link text
    pub bookmarklet: ContentRule,

    /// Content rules for the installer page
    pub installer: ContentRule,

    pub payload: PayloadRule,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            files: ArtifactFiles::default(),
            bookmarklet: ContentRule::new(
                ["document.createElement('style')", "M1", "M2"],
                ["{{VERSION}}", "{{CSS_ESCAPED}}"]
            ),
            installer: ContentRule::new(
                ["Kantine Wrapper", "So funktioniert's", "changelog-container"],
                ["CHANGELOG_HTML_PLACEHOLDER"]
            ),
            payload: PayloadRule::default(),
        }
    }
}

impl HarnessConfig {
    /// Default rules pointed at another build-output directory
    pub fn with_dist_dir(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfig = serde_yaml::from_str(&contents)?;
        debug!("Loaded harness config from {}", path.display());
        Ok(config)
    }
}

/// `dist/` next to the harness manifest
pub fn default_dist_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("dist")
}
