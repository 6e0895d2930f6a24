//! Renderer module
//!
//! Renders the RunReport to the supported output formats: text, json

use crate::core::model::RunReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a run report to a string
    pub fn render(&self, report: &RunReport) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    fn render_text(&self, report: &RunReport) -> String {
        let summary = &report.summary;
        format!(
            "📊 Summary:\n   \
             ✅ Added:   {}\n   \
             ⏭️ Skipped: {}\n   \
             ❌ Errors:  {}\n   \
             📁 Total:   {}",
            summary.added,
            summary.skipped,
            summary.errored,
            summary.total()
        )
    }

    fn render_json(&self, report: &RunReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{FileReport, RunReport};

    fn sample_report() -> RunReport {
        let mut report = RunReport::new();
        report.push(FileReport::added("src/app.tsx"));
        report.push(FileReport::skipped("index.html"));
        report.push(FileReport::errored("broken.css", "read failed"));
        report
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_render_text_counts() {
        let renderer = Renderer::new(OutputFormat::Text);
        let output = renderer.render(&sample_report());

        assert!(output.contains("Added:   1"));
        assert!(output.contains("Skipped: 1"));
        assert!(output.contains("Errors:  1"));
        assert!(output.contains("Total:   3"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&sample_report());

        let parsed: RunReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.files.len(), 3);
        assert_eq!(parsed.summary.total(), 3);
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let renderer = Renderer::with_config(config);
        let output = renderer.render(&sample_report());

        // Pretty JSON has indentation
        assert!(output.contains("  "));
        let parsed: RunReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.summary.added, 1);
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.pretty);
    }
}
