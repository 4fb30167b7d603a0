//! Document loading
//!
//! Parses YAML or JSON labeler documents and compiles them into a
//! [`LabelerConfig`] handle.

use pr_labeler_core::LabelerDocument;
use std::path::Path;

use crate::{ConfigError, LabelerConfig, RuleCompiler};

pub struct ConfigLoader {
    compiler: RuleCompiler,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            compiler: RuleCompiler::new(),
        }
    }

    pub fn with_compiler(compiler: RuleCompiler) -> Self {
        Self { compiler }
    }

    pub fn parse_yaml(&self, source: &str) -> Result<LabelerConfig, ConfigError> {
        let document: LabelerDocument = serde_yaml::from_str(source)?;
        self.compile(document)
    }

    pub fn parse_json(&self, source: &str) -> Result<LabelerConfig, ConfigError> {
        let document: LabelerDocument = serde_json::from_str(source)?;
        self.compile(document)
    }

    /// Load a document from disk. `.json` files are parsed as JSON,
    /// anything else as YAML.
    pub async fn load(&self, path: &Path) -> Result<LabelerConfig, ConfigError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            self.parse_json(&source)?
        } else {
            self.parse_yaml(&source)?
        };

        tracing::info!(
            path = %path.display(),
            rules = config.rules.len(),
            events = config.events.len(),
            "Loaded labeler configuration"
        );

        Ok(config)
    }

    /// Validate a YAML document without keeping the result
    pub fn validate(&self, source: &str) -> Result<(), ConfigError> {
        self.parse_yaml(source).map(|_| ())
    }

    pub fn compile(&self, document: LabelerDocument) -> Result<LabelerConfig, ConfigError> {
        let rules = self.compiler.compile_rules(&document.labeler.labels)?;
        let events = self.compiler.compile_events(&document.events)?;
        Ok(LabelerConfig::new(rules, events, document.labeler.settings))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
