//! Records file reading
//!
//! Records containers are read from JSON or YAML files; the format is chosen
//! by file extension (`.yaml`/`.yml` for YAML, anything else is JSON).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ReportError;
use crate::models::RecordsContainer;

/// Supported records file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a records container, returning an error if the file doesn't exist
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<RecordsContainer, ReportError> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Json => read_json_required(path),
        FileFormat::Yaml => read_yaml_required(path),
    }
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, ReportError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| ReportError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read YAML from a file, returning an error if file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, ReportError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_yaml::from_reader(reader)
        .map_err(|e| ReportError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

fn open_required(path: &Path) -> Result<BufReader<File>, ReportError> {
    if !path.exists() {
        return Err(ReportError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ReportError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.YML")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("records")), FileFormat::Json);
    }

    #[test]
    fn test_read_json_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("period.json");
        std::fs::write(
            &path,
            r#"{"standard": {"1": {"name": "beer", "value": -3.5, "category": "drinks"}},
                "recurrent": {"2": [{"name": "rent", "value": -500, "date": "2019-01-01"}]}}"#,
        )
        .unwrap();

        let container = read_records(&path).unwrap();
        assert_eq!(container.standard["1"].category.as_deref(), Some("drinks"));
        assert_eq!(container.recurrent["2"][0].value, Some(-500.0));
    }

    #[test]
    fn test_read_yaml_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("period.yaml");
        std::fs::write(
            &path,
            "standard:\n  \"1\":\n    name: salary\n    value: 1200.5\n",
        )
        .unwrap();

        let container = read_records(&path).unwrap();
        assert_eq!(container.standard["1"].value, Some(1200.5));
        assert!(container.recurrent.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_records(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ReportError::Storage(_)));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            read_records(&path).unwrap_err(),
            ReportError::Storage(_)
        ));
    }
}
