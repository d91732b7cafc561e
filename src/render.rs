//! Document serialization: one template in, one JSON or YAML document out.

use crate::Result;
use crate::template::Template;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

/// Serialize `template` as a single document in `format`.
///
/// The returned string has no trailing newline; the caller owns line
/// termination (serde_yaml appends one, serde_json does not).
pub fn to_document(template: &Template, format: Format) -> Result<String> {
    let doc = match format {
        Format::Json => serde_json::to_string_pretty(template)?,
        Format::Yaml => serde_yaml::to_string(template)?.trim_end().to_string(),
    };
    Ok(doc)
}
