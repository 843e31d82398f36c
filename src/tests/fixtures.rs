use std::fs;
use std::path::Path;

use log::info;
use tempfile::TempDir;

pub const INSTALLER_HTML: &str = r#"<!DOCTYPE html>
<html lang="de">
<head><title>Kantine Wrapper</title></head>
<body>
  <h1>Kantine Wrapper</h1>
  <h2>So funktioniert's</h2>
  <div class="changelog-container"><ul><li>v1.4.0</li></ul></div>
</body>
</html>
"#;

pub const BOOKMARKLET_TXT: &str =
    "javascript:(function(){var%20s=document.createElement('style');s.textContent='.m{}';document.head.appendChild(s);var%20v='M1';var%20w='M2';})();\n";

pub const STANDALONE_HTML: &str = "<!DOCTYPE html><html><body><script>/* app */</script></body></html>\n";

// Initialize logging for tests, ignoring repeated initialization
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build-output directory holding the given artifacts; `None` leaves a file out
pub fn dist_dir(installer: Option<&str>, bookmarklet: Option<&str>, standalone: Option<&str>) -> TempDir {
    setup();
    let dir = tempfile::tempdir().expect("tempdir");
    write_optional(dir.path(), "install.html", installer);
    write_optional(dir.path(), "bookmarklet.txt", bookmarklet);
    write_optional(dir.path(), "kantine-standalone.html", standalone);
    info!("Fixture build output at {}", dir.path().display());
    dir
}

/// Build-output directory with a complete, valid build
pub fn valid_dist_dir() -> TempDir {
    dist_dir(Some(INSTALLER_HTML), Some(BOOKMARKLET_TXT), Some(STANDALONE_HTML))
}

fn write_optional(dir: &Path, name: &str, contents: Option<&str>) {
    if let Some(contents) = contents {
        fs::write(dir.join(name), contents).expect("write fixture");
    }
}
