//! Static export - writes the rendered page to disk
//!
//! The output directory can be served by any static file host.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::components::{RenderContext, RootShell};
use crate::config::SiteContent;

/// File name of the exported page
pub const INDEX_FILE: &str = "index.html";

/// Render the page and write it to `out_dir/index.html`
///
/// Creates `out_dir` (and parents) when missing and overwrites an existing
/// index.html. Returns the path written.
pub fn export_site(out_dir: &Path, site: &SiteContent, clock: &dyn Clock) -> Result<PathBuf> {
    let shell = RootShell::new();
    let html = shell.render_document(&RenderContext::new(site, clock));

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let path = out_dir.join(INDEX_FILE);
    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap())
    }

    #[test]
    fn test_export_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("public").join("www");

        let path = export_site(&out, &SiteContent::default(), &clock()).unwrap();

        assert_eq!(path, out.join("index.html"));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("&copy; 2025 Tallerlei"));
    }

    #[test]
    fn test_export_overwrites_existing_index() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), "stale").unwrap();

        export_site(tmp.path(), &SiteContent::default(), &clock()).unwrap();

        let html = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert_ne!(html, "stale");
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = export_site(&blocker, &SiteContent::default(), &clock()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create output directory"));
    }
}
