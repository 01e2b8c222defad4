//! Attribute value normalization.
//!
//! PROV-JSON attribute values are plain scalars, typed-literal objects
//! (`{"$": lexical, "type": datatype}`), language-tagged objects
//! (`{"$": string, "lang": tag}`), or arrays of any of these. The JSON-LD
//! forms use `@value` / `@type` / `@language`.

use serde_json::{json, Map, Value};

use super::prefix::PrefixTable;
use crate::error::{ConvertResult, RecordPath, Warning};

const LITERAL_KEY: &str = "$";
const DATATYPE_KEY: &str = "type";
const LANGUAGE_KEY: &str = "lang";

/// Normalize one raw attribute value. Arrays keep their shape with each
/// member normalized independently.
pub(super) fn normalize(
    raw: &Value,
    key: &str,
    table: &PrefixTable,
    path: &RecordPath,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Value> {
    match raw {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(normalize_single(item, key, table, path, warnings)?);
            }
            Ok(Value::Array(out))
        }
        _ => normalize_single(raw, key, table, path, warnings),
    }
}

fn normalize_single(
    raw: &Value,
    key: &str,
    table: &PrefixTable,
    path: &RecordPath,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Value> {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        // Plain scalars pass through untouched; numbers and booleans are
        // never stringified or re-typed.
        None => return Ok(raw.clone()),
    };

    let marked = obj.contains_key(LITERAL_KEY)
        || obj.contains_key(DATATYPE_KEY)
        || obj.contains_key(LANGUAGE_KEY);
    if !marked {
        // Not a literal form at all; carried over verbatim.
        return Ok(raw.clone());
    }

    let lexical = match obj.get(LITERAL_KEY) {
        Some(value) => value.clone(),
        None => {
            warnings.push(malformed(path, key, "literal form '$' is missing"));
            Value::String(String::new())
        }
    };

    let datatype = marker_string(obj, DATATYPE_KEY, key, path, warnings);
    let language = marker_string(obj, LANGUAGE_KEY, key, path, warnings);

    match (datatype, language) {
        (Some(datatype), language) => {
            if language.is_some() {
                warnings.push(malformed(
                    path,
                    key,
                    "both 'type' and 'lang' present; keeping the datatype",
                ));
            }
            table.resolve(&datatype, &path.with_field(key))?;
            Ok(json!({ "@value": lexical, "@type": datatype }))
        }
        (None, Some(language)) => Ok(json!({ "@value": lexical, "@language": language })),
        (None, None) => Ok(lexical),
    }
}

fn marker_string(
    obj: &Map<String, Value>,
    marker: &str,
    key: &str,
    path: &RecordPath,
    warnings: &mut Vec<Warning>,
) -> Option<String> {
    match obj.get(marker) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            warnings.push(malformed(
                path,
                key,
                &format!("'{}' marker must be a string", marker),
            ));
            None
        }
    }
}

fn malformed(path: &RecordPath, key: &str, reason: &str) -> Warning {
    Warning::MalformedAttribute {
        path: path.clone(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
