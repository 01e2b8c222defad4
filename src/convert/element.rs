//! Element record mapping: `entity` / `activity` / `agent` records become
//! JSON-LD node objects.

use serde_json::{Map, Value};

use super::prefix::PrefixTable;
use super::value;
use crate::error::{ConvertResult, RecordPath, Warning};
use crate::prov::{ElementKind, ElementSet, Record};

pub(super) fn map_elements(
    set: &ElementSet,
    table: &PrefixTable,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Vec<Value>> {
    set.records
        .iter()
        .map(|record| map_element(set.kind, record, table, warnings))
        .collect()
}

fn map_element(
    kind: ElementKind,
    record: &Record,
    table: &PrefixTable,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Value> {
    let path = RecordPath::record(kind.key(), &record.id);
    table.resolve(&record.id, &path)?;

    let mut out = Map::new();
    out.insert("@type".to_string(), Value::String(kind.type_iri().to_string()));
    out.insert("@id".to_string(), Value::String(record.id.clone()));

    for (key, raw) in &record.attrs {
        table.resolve(key, &path.with_field(key))?;
        let out_key = match (kind, key.as_str()) {
            // Activity lifespan attributes use the JSON-LD short keys; the
            // values stay lexical ISO-8601 scalars unless the input carried
            // an explicit datatype.
            (ElementKind::Activity, "prov:startTime") => "startTime",
            (ElementKind::Activity, "prov:endTime") => "endTime",
            _ => key.as_str(),
        };
        let normalized = value::normalize(raw, key, table, &path, warnings)?;
        out.insert(out_key.to_string(), normalized);
    }

    Ok(Value::Object(out))
}
