//! Config schema and deserialization

use serde::{Deserialize, Serialize};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal summary
    #[default]
    Console,
    /// Standalone results page
    Html,
    Json,
    /// Plain-text performance report
    Text,
    Markdown,
    /// Printable report; requires an output file
    Pdf,
}

/// Root config structure for .interviewrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum overall score (exit 1 if below). Default: none
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Title of the HTML results page
    #[serde(default)]
    pub title: Option<String>,

    /// Output format used when no format flag is given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Render HTML question blocks expanded instead of collapsed
    #[serde(default)]
    pub expand_questions: Option<bool>,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty_json: Option<bool>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<f64>,
        cli_format: Option<OutputFormat>,
        cli_expand: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_format.is_some() {
            self.format = cli_format;
        }
        if cli_expand {
            self.expand_questions = Some(true);
        }
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn page_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Interview Results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let config: Config = serde_json::from_str(
            r#"{"threshold": 6.5, "format": "html", "expandQuestions": true, "prettyJson": false}"#,
        )
        .unwrap();
        assert_eq!(config.threshold, Some(6.5));
        assert_eq!(config.output_format(), OutputFormat::Html);
        assert_eq!(config.expand_questions, Some(true));
        assert_eq!(config.pretty_json, Some(false));
        assert_eq!(config.page_title(), "Interview Results");
    }

    #[test]
    fn test_cli_overrides_config() {
        let config: Config =
            serde_json::from_str(r#"{"threshold": 6, "format": "text"}"#).unwrap();
        let merged = config.merge_with_cli(Some(8.0), Some(OutputFormat::Json), true);
        assert_eq!(merged.threshold, Some(8.0));
        assert_eq!(merged.output_format(), OutputFormat::Json);
        assert_eq!(merged.expand_questions, Some(true));
    }

    #[test]
    fn test_cli_absent_keeps_config() {
        let config: Config = serde_json::from_str(r#"{"threshold": 6}"#).unwrap();
        let merged = config.merge_with_cli(None, None, false);
        assert_eq!(merged.threshold, Some(6.0));
        assert_eq!(merged.output_format(), OutputFormat::Console);
        assert_eq!(merged.expand_questions, None);
    }

    #[test]
    fn test_pdf_format() {
        let config: Config = serde_json::from_str(r#"{"format": "pdf"}"#).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Pdf);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = serde_json::from_str::<Config>(r#"{"format": "xml"}"#);
        assert!(result.is_err());
    }
}
