use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::election::model::{Polls, Regions};
use crate::error::{MapError, MapResult};

pub const REGIONS_FILE: &str = "regions.json";
pub const POLLS_FILE: &str = "polls_2026.json";

/// Load the region list and poll timeline from `data_dir`
pub fn load(data_dir: &Path) -> MapResult<(Regions, Polls)> {
    let regions: Regions = read_json(&data_dir.join(REGIONS_FILE))?;
    let polls: Polls = read_json(&data_dir.join(POLLS_FILE))?;
    info!(
        provinces = regions.provinces.len(),
        entries = polls.timeline.len(),
        "loaded poll data"
    );
    Ok((regions, polls))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> MapResult<T> {
    let mut bytes = fs::read(path).map_err(|source| MapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    simd_json::serde::from_slice(&mut bytes).map_err(|e| MapError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONS: &str = r#"{"provinces":[
        {"code":"11","name":"서울","lat":37.5665,"lng":126.978},
        {"code":"26","name":"부산","lat":35.1796,"lng":129.0756}
    ]}"#;

    const POLLS: &str = r#"{
        "meta":{"lastUpdate":"2026-03-01"},
        "timeline":[{"date":"2026-02-01","surveys":[
            {"regionCode":"11","candidates":[{"name":"김","party":"민주당","rate":41.5}]}
        ]}]
    }"#;

    #[test]
    fn test_load_ok() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGIONS_FILE), REGIONS).unwrap();
        fs::write(dir.path().join(POLLS_FILE), POLLS).unwrap();

        let (regions, polls) = load(dir.path()).unwrap();
        assert_eq!(regions.provinces.len(), 2);
        assert_eq!(regions.name_of("26"), Some("부산"));
        assert_eq!(regions.code_of("서울"), Some("11"));
        assert_eq!(polls.meta.last_update, "2026-03-01");
        assert_eq!(polls.timeline[0].surveys[0].candidates[0].rate, 41.5);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGIONS_FILE), REGIONS).unwrap();
        let err = load(dir.path()).unwrap_err();
        match err {
            MapError::Read { path, .. } => assert!(path.ends_with(POLLS_FILE)),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGIONS_FILE), "{\"provinces\": [").unwrap();
        fs::write(dir.path().join(POLLS_FILE), POLLS).unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, MapError::Parse { .. }));
    }
}
