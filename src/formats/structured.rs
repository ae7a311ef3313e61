//! Structured formats
//!
//! Serialize the whole analysis through serde: spans, the hanging count and
//! every annotation with its range, level, kind, connector column and hover.

use super::registry::{FormatError, Formatter};
use crate::pipeline::Analysis;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        serde_json::to_string_pretty(analysis)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Full analysis as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        serde_yaml::to_string(analysis).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Full analysis as YAML"
    }
}
