//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the apolice pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApoliceConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process per document (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { max_pages: 0 }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Title line printed on the PDF report.
    pub report_title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            report_title: "Leitor de Apólices — Extração de Dados em PDF".to_string(),
        }
    }
}

impl ApoliceConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_json() {
        let config = ApoliceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ApoliceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pdf.max_pages, 0);
        assert_eq!(back.export.report_title, config.export.report_title);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ApoliceConfig = serde_json::from_str(r#"{"pdf":{"max_pages":3}}"#).unwrap();
        assert_eq!(config.pdf.max_pages, 3);
        assert!(!config.export.report_title.is_empty());
    }
}
