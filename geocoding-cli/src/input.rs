use anyhow::{Context, Result, anyhow};
use geocoding_core::{Location, parse_results};
use log::debug;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Read a saved provider response from `path`, or from stdin when the path is
/// missing or `-`.
pub fn read_response(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read response from stdin")?;
            Ok(buf)
        }
    }
}

/// Decode the response and pick the result at `index`.
pub fn select_result(json: &str, index: usize) -> Result<Location> {
    let results = parse_results(json).context("Input is not a geocoding response")?;
    debug!("response holds {} result(s)", results.len());

    let count = results.len();
    results.into_iter().nth(index).ok_or_else(|| {
        anyhow!(
            "Result index {index} is out of range: the response holds {count} result(s).\n\
             Hint: pass `--index` with a value below {count}."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SEARCH: &str = r#"[
        { "place_id": 1, "address": { "city": "Springfield", "state": "Illinois" } },
        { "place_id": 2, "address": { "city": "Springfield", "state": "Missouri" } }
    ]"#;

    #[test]
    fn selects_result_by_index() {
        let loc = select_result(SEARCH, 1).unwrap();

        assert_eq!(loc.place_id(), Some(2));
        assert_eq!(loc.state(), Some("Missouri"));
    }

    #[test]
    fn single_object_is_index_zero() {
        let loc = select_result(r#"{ "display_name": "Here" }"#, 0).unwrap();

        assert_eq!(loc.display_name(), Some("Here"));
    }

    #[test]
    fn out_of_range_index_errors() {
        let err = select_result(SEARCH, 5).unwrap_err();

        assert!(err.to_string().contains("holds 2 result(s)"));
    }

    #[test]
    fn non_object_input_errors() {
        let err = select_result("42", 0).unwrap_err();

        assert!(format!("{err:#}").contains("found a number"));
    }

    #[test]
    fn reads_response_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("response.json");
        fs::write(&path, SEARCH).unwrap();

        assert_eq!(read_response(Some(path.as_path())).unwrap(), SEARCH);
    }

    #[test]
    fn missing_file_error_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_response(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
