use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::StoreRequest;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load store requests from a JSON document. `-` reads standard input.
///
/// Accepted shapes:
/// * a single request object
/// * an array of request objects, processed in order
pub fn load_requests(path: &Path) -> Result<Vec<StoreRequest>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading requests from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?
    };
    parse_requests(&text)
}

/// Parse one request object or an array of them.
pub fn parse_requests(text: &str) -> Result<Vec<StoreRequest>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    match root {
        JsonValue::Array(records) => records
            .into_iter()
            .enumerate()
            .map(|(i, rec)| {
                serde_json::from_value(rec).with_context(|| format!("Request {i} is not valid"))
            })
            .collect(),
        obj @ JsonValue::Object(_) => {
            let request = serde_json::from_value(obj).context("Request is not valid")?;
            Ok(vec![request])
        }
        other => bail!("Expected a request object or array, found {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r##"{
        "survey_dir": "field_a",
        "x_coord": 1.5, "y_coord": 2.25, "z_coord": 0,
        "antennae_height": 0.3,
        "timestamp": "2024-05-01T10:00:00",
        "survey_id": "S1", "sample_id": "S1-0001",
        "vna_freq": "#01.0E9,2.0E9,",
        "vna_trace": "#00.1,0.2,0.3,0.4,"
    }"##;

    #[test]
    fn parses_single_object() {
        let requests = parse_requests(REQUEST).unwrap();
        assert_eq!(requests.len(), 1);
        let r = &requests[0];
        assert_eq!(r.survey_dir, "field_a");
        assert_eq!(r.metadata.z_coord, 0.0);
        assert_eq!(r.metadata.sample_id, "S1-0001");
        assert_eq!(r.vna_trace, "#00.1,0.2,0.3,0.4,");
    }

    #[test]
    fn parses_array_in_order() {
        let text = format!("[{REQUEST}, {}]", REQUEST.replace("S1-0001", "S1-0002"));
        let requests = parse_requests(&text).unwrap();
        let ids: Vec<_> = requests.iter().map(|r| r.metadata.sample_id.as_str()).collect();
        assert_eq!(ids, ["S1-0001", "S1-0002"]);
    }

    #[test]
    fn missing_field_names_the_request() {
        let text = format!("[{REQUEST}, {{\"survey_dir\": \"x\"}}]");
        let err = parse_requests(&text).unwrap_err();
        assert!(format!("{err:#}").contains("Request 1"));
    }

    #[test]
    fn rejects_scalars() {
        assert!(parse_requests("42").is_err());
    }
}
