#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::ArtifactFiles;
    use crate::implementations::locator::ArtifactLocator;
    use crate::models::artifact::ArtifactKind;

    #[test]
    fn locates_fixed_filenames_under_dist_dir() {
        let locator = ArtifactLocator::new("/tmp/build/dist", ArtifactFiles::default());
        let artifacts = locator.locate();

        assert_eq!(artifacts.installer.path(), Path::new("/tmp/build/dist/install.html"));
        assert_eq!(artifacts.bookmarklet.path(), Path::new("/tmp/build/dist/bookmarklet.txt"));
        assert_eq!(artifacts.standalone.path(), Path::new("/tmp/build/dist/kantine-standalone.html"));
    }

    #[test]
    fn artifacts_iterate_in_evaluation_order() {
        let artifacts = ArtifactLocator::new("dist", ArtifactFiles::default()).locate();
        let names: Vec<_> = artifacts.iter().map(|artifact| artifact.name()).collect();

        assert_eq!(names, vec!["installer", "bookmarklet", "standalone"]);
        assert_eq!(artifacts.get(ArtifactKind::Bookmarklet).file_name(), "bookmarklet.txt");
    }

    #[test]
    fn locating_does_not_touch_the_filesystem() {
        let locator = ArtifactLocator::new("/definitely/not/here", ArtifactFiles::default());
        let artifacts = locator.locate();

        assert_eq!(locator.dist_dir(), Path::new("/definitely/not/here"));
        assert!(!artifacts.installer.path().exists());
    }
}
