//! The conversion pipeline: configuration, orchestration, and assembly of
//! the output document.

mod bundle;
mod element;
mod prefix;
mod relation;
mod value;

pub use prefix::PrefixTable;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConvertError, ConvertResult, Warning};
use crate::prov::Document;

/// The canonical PROV-JSONLD context document, referenced by URL and never
/// fetched.
pub const DEFAULT_CONTEXT_URL: &str = "https://openprovenance.org/prov-jsonld/context.json";

/// Immutable conversion settings.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// URL appended as the last `@context` entry.
    pub context_url: String,
    /// Escalate recoverable warnings into fatal errors.
    pub strict: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            context_url: DEFAULT_CONTEXT_URL.to_string(),
            strict: false,
        }
    }
}

/// A successful conversion: the PROV-JSONLD document plus any recoverable
/// warnings recorded along the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: Value,
    pub warnings: Vec<Warning>,
}

/// Output document shape: `@context` then `@graph`.
#[derive(Serialize)]
struct JsonLdDocument {
    #[serde(rename = "@context")]
    context: Value,
    #[serde(rename = "@graph")]
    graph: Vec<Value>,
}

/// The conversion engine.
///
/// A pure, synchronous, single-pass transformation; nothing persists across
/// calls, so one converter can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with an explicit configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a PROV-JSON document given as text.
    pub fn convert_str(&self, input: &str) -> ConvertResult<Conversion> {
        let value: Value = serde_json::from_str(input)?;
        self.convert_value(&value)
    }

    /// Convert a parsed PROV-JSON document.
    pub fn convert_value(&self, input: &Value) -> ConvertResult<Conversion> {
        debug!(strict = self.config.strict, "converting PROV-JSON document");
        let mut warnings = Vec::new();

        let document = Document::from_json(input, &mut warnings)?;
        let table = match &document.prefixes {
            Some(declared) => PrefixTable::from_declarations(declared),
            None => PrefixTable::default(),
        };

        let graph = assemble_graph(&document, &table, &self.config, &mut warnings)?;

        for warning in &warnings {
            warn!(%warning, "recoverable conversion warning");
        }
        if self.config.strict {
            if let Some(warning) = warnings.first() {
                return Err(ConvertError::Strict(warning.clone()));
            }
        }

        let output = JsonLdDocument {
            context: table.context_value(&self.config.context_url),
            graph,
        };
        Ok(Conversion {
            document: serde_json::to_value(output)?,
            warnings,
        })
    }
}

/// Assemble one scope's `@graph`: elements in the fixed kind order, then
/// relations in the canonical 14-kind order, then bundles in declaration
/// order.
fn assemble_graph(
    document: &Document,
    table: &PrefixTable,
    config: &ConverterConfig,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Vec<Value>> {
    let mut graph = Vec::new();
    for set in &document.elements {
        graph.extend(element::map_elements(set, table, warnings)?);
    }
    for set in &document.relations {
        graph.extend(relation::map_relations(set, table, warnings)?);
    }
    for bundle in &document.bundles {
        graph.push(bundle::map_bundle(bundle, table, config, warnings)?);
    }
    Ok(graph)
}
