//! Bulk track import: the on-disk data file format and the sync summary.
//!
//! The data file lives at `<DATA_DIR>/usa-tracks.json` and looks like
//!
//! ```json
//! { "tracks": [ { "name": "...", "location": "...", "state": "CA",
//!                 "types": ["ROADCOURSE"], "latitude": 36.5,
//!                 "longitude": -121.7, "description": "..." } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::track::{parse_event_types, EventType};

/// File name of the import data inside the data directory.
pub const IMPORT_FILE_NAME: &str = "usa-tracks.json";

/// One track entry in the import file.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportedTrack {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
}

impl ImportedTrack {
    /// Event types for this entry, uppercased and de-duplicated.
    pub fn event_types(&self) -> Result<Vec<EventType>, CoreError> {
        let upper: Vec<String> = self.types.iter().map(|t| t.trim().to_uppercase()).collect();
        parse_event_types(&upper)
    }
}

#[derive(Debug, Deserialize)]
struct ImportFile {
    tracks: Vec<ImportedTrack>,
}

/// Parse the import file contents.
pub fn parse_import_file(contents: &str) -> Result<Vec<ImportedTrack>, CoreError> {
    serde_json::from_str::<ImportFile>(contents)
        .map(|f| f.tracks)
        .map_err(|e| CoreError::Validation(format!("Malformed import file: {e}")))
}

/// Tally of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_file() {
        let raw = r#"{"tracks":[{"name":"Buttonwillow","location":"Buttonwillow, CA",
            "state":"CA","types":["roadcourse","Drift"],"latitude":35.49,
            "longitude":-119.54,"description":"Raceway park"}]}"#;
        let tracks = parse_import_file(raw).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(
            tracks[0].event_types().unwrap(),
            vec![EventType::Roadcourse, EventType::Drift]
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let tracks = parse_import_file(r#"{"tracks":[{"name":"X1","location":"Y1"}]}"#).unwrap();
        assert_eq!(tracks[0].state, "");
        assert!(tracks[0].types.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_import_file("{not json").is_err());
        assert!(parse_import_file(r#"{"items":[]}"#).is_err());
    }

    #[test]
    fn unknown_type_fails_the_row() {
        let t = ImportedTrack {
            name: "A".into(),
            location: "B".into(),
            state: String::new(),
            types: vec!["OVAL".into()],
            latitude: 0.0,
            longitude: 0.0,
            description: String::new(),
        };
        assert!(t.event_types().is_err());
    }
}
