//! Nested bundle conversion: each bundle becomes a named-graph object
//! appended to the parent's `@graph`, with its own identifier scope.

use serde_json::{Map, Value};

use super::prefix::PrefixTable;
use super::{assemble_graph, ConverterConfig};
use crate::error::{ConvertResult, RecordPath, Warning};
use crate::prov::Bundle;

pub(super) fn map_bundle(
    bundle: &Bundle,
    parent: &PrefixTable,
    config: &ConverterConfig,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Value> {
    let path = RecordPath::record("bundle", &bundle.id);
    // The bundle identifier is declared in the parent's scope.
    parent.resolve(&bundle.id, &path)?;

    // A bundle with its own prefix mapping opens a fresh scope; one without
    // inherits the parent's resolved table and needs no nested @context.
    let table = match &bundle.document.prefixes {
        Some(declared) => PrefixTable::from_declarations(declared),
        None => parent.clone(),
    };

    let graph = assemble_graph(&bundle.document, &table, config, warnings)?;

    let mut out = Map::new();
    out.insert("@id".to_string(), Value::String(bundle.id.clone()));
    if bundle.document.prefixes.is_some() {
        out.insert("@context".to_string(), table.context_value(&config.context_url));
    }
    out.insert("@graph".to_string(), Value::Array(graph));
    Ok(Value::Object(out))
}
