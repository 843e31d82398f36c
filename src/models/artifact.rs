use serde::Serialize;
use std::fmt;
use std::path::{ Path, PathBuf };

/// The three build outputs the harness knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Installer,
    Bookmarklet,
    Standalone,
}

impl ArtifactKind {
    /// Logical name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::Installer => "installer",
            ArtifactKind::Bookmarklet => "bookmarklet",
            ArtifactKind::Standalone => "standalone",
        }
    }

    /// Human readable description used in console lines
    pub fn description(&self) -> &'static str {
        match self {
            ArtifactKind::Installer => "Installer HTML",
            ArtifactKind::Bookmarklet => "Bookmarklet Text",
            ArtifactKind::Standalone => "Standalone HTML",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named handle to an expected build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    kind: ArtifactKind,
    path: PathBuf,
}

impl ArtifactRef {
    pub fn new(kind: ArtifactKind, path: PathBuf) -> Self {
        Self { kind, path }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare filename, as shown in content check messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// All artifacts of one build, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub installer: ArtifactRef,
    pub bookmarklet: ArtifactRef,
    pub standalone: ArtifactRef,
}

impl ArtifactSet {
    pub fn iter(&self) -> impl Iterator<Item = &ArtifactRef> {
        [&self.installer, &self.bookmarklet, &self.standalone].into_iter()
    }

    pub fn get(&self, kind: ArtifactKind) -> &ArtifactRef {
        match kind {
            ArtifactKind::Installer => &self.installer,
            ArtifactKind::Bookmarklet => &self.bookmarklet,
            ArtifactKind::Standalone => &self.standalone,
        }
    }
}
