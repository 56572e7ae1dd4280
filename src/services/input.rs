use serde::de::DeserializeOwned;
use std::path::Path;
use validator::Validate;

use crate::error::{BloodMatchError, Result};

/// Parse and validate a JSON request body
///
/// Dates, blood types and required fields are checked here so the core only
/// ever sees well-formed records.
pub fn parse_request<T>(json: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_str(json)?;
    request.validate()?;
    Ok(request)
}

/// Read a JSON request from disk, then parse and validate it
pub fn load_request<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Validate,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| BloodMatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = raw.len(), "Loaded request file");
    parse_request(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastDemandRequest, RankDonorsRequest};
    use std::io::Write;

    #[test]
    fn test_parse_valid_forecast_request() {
        let req: ForecastDemandRequest = parse_request(
            r#"{"history": [{"date": "2026-10-01", "type": "O+", "units": 4}]}"#,
        )
        .unwrap();
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.window, None);
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        let err = parse_request::<ForecastDemandRequest>(
            r#"{"history": [{"date": "yesterday", "type": "O+", "units": 4}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BloodMatchError::Json(_)));
    }

    #[test]
    fn test_unknown_blood_type_is_an_error() {
        let err = parse_request::<ForecastDemandRequest>(
            r#"{"history": [{"date": "2026-10-01", "type": "Z+", "units": 4}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BloodMatchError::Json(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_request::<RankDonorsRequest>(
            r#"{"donors": [], "request": {"id": "r1", "hospital": "", "bloodType": "O+", "unitsNeeded": 1}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BloodMatchError::Validation(_)));
    }

    #[test]
    fn test_load_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"donors": [], "request": {{"id": "r1", "hospital": "LUTH", "bloodType": "O+", "unitsNeeded": 1}}}}"#
        )
        .unwrap();

        let req: RankDonorsRequest = load_request(file.path()).unwrap();
        assert_eq!(req.request.hospital, "LUTH");
    }

    #[test]
    fn test_missing_file() {
        let err = load_request::<RankDonorsRequest, _>("/nonexistent/request.json").unwrap_err();
        assert!(matches!(err, BloodMatchError::Io { .. }));
    }
}
