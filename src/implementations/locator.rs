use std::path::{ Path, PathBuf };

use crate::config::ArtifactFiles;
use crate::models::artifact::{ ArtifactKind, ArtifactRef, ArtifactSet };

/// Resolves the expected artifact paths under a build-output directory.
///
/// No filesystem access happens here; whether the files exist is the
/// verifier's concern.
#[derive(Debug, Clone)]
pub struct ArtifactLocator {
    dist_dir: PathBuf,
    files: ArtifactFiles,
}

impl ArtifactLocator {
    pub fn new(dist_dir: impl Into<PathBuf>, files: ArtifactFiles) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            files,
        }
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    pub fn locate(&self) -> ArtifactSet {
        ArtifactSet {
            installer: self.artifact(ArtifactKind::Installer, &self.files.installer),
            bookmarklet: self.artifact(ArtifactKind::Bookmarklet, &self.files.bookmarklet),
            standalone: self.artifact(ArtifactKind::Standalone, &self.files.standalone),
        }
    }

    fn artifact(&self, kind: ArtifactKind, file: &str) -> ArtifactRef {
        ArtifactRef::new(kind, self.dist_dir.join(file))
    }
}
