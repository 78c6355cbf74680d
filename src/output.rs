use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use crate::model::Section;

pub fn to_json(sections: &[Section], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(sections)
    } else {
        serde_json::to_string(sections)
    }
}

/// Render the whole document, write it to a temp file beside `path`, then
/// rename over `path`. A failure at any step leaves the old file as it was.
pub fn write_json(path: &Path, sections: &[Section], pretty: bool) -> Result<()> {
    let json = to_json(sections, pretty).context("Failed to serialize sections")?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), sections = sections.len(), "Wrote JSON");
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Team;
    use std::fs;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn sections() -> Vec<Section> {
        vec![Section {
            title: "Unaffiliated".into(),
            image_url: None,
            teams: vec![Team {
                league: "NHL".into(),
                team_link: "/team/nyr".into(),
            }],
        }]
    }

    #[test]
    fn compact_shape() {
        let json = to_json(&sections(), false).unwrap();
        assert_eq!(
            json,
            r#"[{"title":"Unaffiliated","image_url":null,"teams":[{"league":"NHL","team_link":"/team/nyr"}]}]"#
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        fs::write(&path, "stale contents that are longer than nothing at all").unwrap();

        write_json(&path, &[], false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        write_json(&path, &sections(), true).unwrap();
        let back: Vec<Section> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sections());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/teams.json");
        assert!(write_json(&path, &sections(), false).is_err());
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        write_json(&path, &sections(), false).unwrap();
        assert_eq!(entries(dir.path()), ["teams.json"]);
    }

    #[test]
    fn failed_replace_keeps_target_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        // a directory can't be replaced by a file rename
        let path = dir.path().join("teams.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "old").unwrap();

        assert!(write_json(&path, &sections(), false).is_err());
        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "old");
        assert_eq!(entries(dir.path()), ["teams.json"]);
    }
}
