//! Command-line configuration.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Options for the `selector` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "selector", about = "Render JSON selector documents as command selectors")]
pub struct CliConfig {
    /// JSON file holding one selector document or an array of them (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write each selector fragment by fragment as it is produced
    #[arg(short, long)]
    pub stream: bool,
}

impl CliConfig {
    /// Reads the whole input document.
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    /// Where input is read from, for logging.
    #[must_use]
    pub fn source_name(&self) -> String {
        self.input
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_read_stdin() {
        let config = CliConfig::parse_from(["selector"]);
        assert!(config.input.is_none());
        assert!(!config.stream);
        assert_eq!(config.source_name(), "stdin");
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["selector", "--input", "docs.json", "--stream"]);
        assert_eq!(config.input, Some(PathBuf::from("docs.json")));
        assert!(config.stream);
        assert_eq!(config.source_name(), "docs.json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = CliConfig::parse_from(["selector", "-i", "/nonexistent/selectors.json"]);
        assert!(config.read_input().is_err());
    }
}
