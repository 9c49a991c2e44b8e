//! File-based Assessment Source Adapter
//!
//! Reads an assessment document from a JSON or YAML file. The format is
//! chosen by file extension (`.json`, `.yaml`, `.yml`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::AssessmentSource;

/// Serialization format of an assessment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Loads an assessment from a file on disk
#[derive(Debug, Clone)]
pub struct FileAssessmentSource {
    path: PathBuf,
}

impl FileAssessmentSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileAssessmentSource::new("./data/assessment.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<DocumentFormat, DomainError> {
        DocumentFormat::from_path(&self.path).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidDocument,
                "Unsupported file extension, expected .json, .yaml or .yml",
            )
            .with_detail("path", self.path.display().to_string())
        })
    }

    fn invalid(&self, message: impl std::fmt::Display) -> DomainError {
        DomainError::new(
            ErrorCode::InvalidDocument,
            format!("Failed to parse assessment: {}", message),
        )
        .with_detail("path", self.path.display().to_string())
    }
}

impl AssessmentSource for FileAssessmentSource {
    fn load(&self) -> Result<Assessment, DomainError> {
        let format = self.format()?;

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::new(
                ErrorCode::SourceUnavailable,
                format!("Failed to read assessment file: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let assessment: Assessment = match format {
            DocumentFormat::Json => serde_json::from_str(&content).map_err(|e| self.invalid(e))?,
            DocumentFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| self.invalid(e))?,
        };

        debug!(
            path = %self.path.display(),
            alternatives = assessment.alternative_count(),
            criteria = assessment.criterion_count(),
            experts = assessment.expert_count(),
            "assessment file parsed"
        );

        Ok(assessment)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("assessment")), None);
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "assessment.json",
            r#"{
                "alternatives": 2,
                "criteria": 1,
                "experts": 1,
                "criteria_directions": ["cost"],
                "criteria_weights": [["H"]],
                "performance": [[["G"], ["P"]]]
            }"#,
        );

        let assessment = FileAssessmentSource::new(&path).load().unwrap();
        assert_eq!(assessment.alternative_count(), 2);
        assert!(!assessment.direction(0).is_benefit());
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = FileAssessmentSource::new(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
        assert!(err.details.contains_key("path"));
    }

    #[test]
    fn test_unknown_label_is_invalid_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bad.yaml",
            "alternatives: 1\ncriteria: 1\nexperts: 1\ncriteria_weights: [[\"XL\"]]\n",
        );
        let err = FileAssessmentSource::new(&path).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDocument);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let err = FileAssessmentSource::new(file.path()).load().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDocument);
    }
}
