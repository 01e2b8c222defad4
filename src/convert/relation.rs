//! Relation record mapping: the 14 relation kinds become typed JSON-LD
//! link objects with role keys renamed to their short forms.

use serde_json::{Map, Value};

use super::prefix::PrefixTable;
use super::value;
use crate::error::{ConvertError, ConvertResult, RecordPath, Warning};
use crate::prov::{Record, RelationKind, RelationSet};

pub(super) fn map_relations(
    set: &RelationSet,
    table: &PrefixTable,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Vec<Value>> {
    set.records
        .iter()
        .enumerate()
        .map(|(index, record)| map_relation(set.kind, index + 1, record, table, warnings))
        .collect()
}

fn map_relation(
    kind: RelationKind,
    ordinal: usize,
    record: &Record,
    table: &PrefixTable,
    warnings: &mut Vec<Warning>,
) -> ConvertResult<Value> {
    // A record without an identifier gets a deterministic blank id derived
    // from its kind and 1-based position, e.g. `_:wasGeneratedBy1`.
    let id = if record.id.is_empty() {
        format!("_:{}{}", kind.key(), ordinal)
    } else {
        record.id.clone()
    };
    let path = RecordPath::record(kind.key(), &id);
    table.resolve(&id, &path)?;

    let mut out = Map::new();
    out.insert("@type".to_string(), Value::String(kind.type_iri().to_string()));
    out.insert("@id".to_string(), Value::String(id));

    let roles = kind.roles();
    for (qualified, short) in roles {
        if let Some(role_value) = record.attrs.get(*qualified) {
            // `time` carries a lexical timestamp, not a node reference.
            if *short != "time" {
                resolve_reference(role_value, table, &path.with_field(*qualified))?;
            }
            out.insert(short.to_string(), role_value.clone());
        }
    }

    for (key, raw) in &record.attrs {
        if roles.iter().any(|(qualified, _)| qualified == key) {
            continue;
        }
        if roles.iter().any(|(_, short)| short == key) {
            warnings.push(Warning::RoleCollision {
                path: path.clone(),
                key: key.clone(),
            });
            continue;
        }
        table.resolve(key, &path.with_field(key))?;
        let normalized = value::normalize(raw, key, table, &path, warnings)?;
        out.insert(key.clone(), normalized);
    }

    Ok(Value::Object(out))
}

/// Role values reference other nodes: a single qualified name or an array
/// of them (e.g. `hadMember` with several members).
fn resolve_reference(
    value: &Value,
    table: &PrefixTable,
    path: &RecordPath,
) -> ConvertResult<()> {
    match value {
        Value::String(name) => table.resolve(name, path),
        Value::Array(items) => {
            for item in items {
                resolve_reference(item, table, path)?;
            }
            Ok(())
        }
        _ => Err(ConvertError::Parse {
            path: path.clone(),
            message: "role value must be a qualified name string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> PrefixTable {
        PrefixTable::from_declarations(&[("ex".to_string(), "http://example.org/".to_string())])
    }

    fn record(id: &str, attrs: Value) -> Record {
        Record {
            id: id.to_string(),
            attrs: attrs.as_object().unwrap().clone(),
        }
    }

    #[test]
    fn test_roles_renamed_in_table_order() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Generation,
            1,
            &record(
                "_:gen1",
                json!({"prov:activity": "ex:a1", "prov:entity": "ex:e1"}),
            ),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(
            out,
            json!({
                "@type": "prov:Generation",
                "@id": "_:gen1",
                "entity": "ex:e1",
                "activity": "ex:a1"
            })
        );
        // Table order, not input order.
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["@type", "@id", "entity", "activity"]);
    }

    #[test]
    fn test_time_role_is_not_a_reference() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Usage,
            1,
            &record(
                "_:u1",
                json!({
                    "prov:entity": "ex:e1",
                    "prov:activity": "ex:a1",
                    "prov:time": "2011-11-16T16:05:00"
                }),
            ),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(out["time"], json!("2011-11-16T16:05:00"));
    }

    #[test]
    fn test_blank_id_synthesis() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Generation,
            3,
            &record("", json!({"prov:entity": "ex:e1"})),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(out["@id"], json!("_:wasGeneratedBy3"));
    }

    #[test]
    fn test_membership_accepts_member_array() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Membership,
            1,
            &record(
                "_:m1",
                json!({"prov:collection": "ex:c", "prov:entity": ["ex:e1", "ex:e2"]}),
            ),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(out["collection"], json!("ex:c"));
        assert_eq!(out["entity"], json!(["ex:e1", "ex:e2"]));
    }

    #[test]
    fn test_qualifier_attributes_pass_through() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Association,
            1,
            &record(
                "_:assoc1",
                json!({
                    "prov:activity": "ex:a1",
                    "prov:agent": "ex:ag",
                    "prov:role": {"$": "operator", "type": "xsd:string"}
                }),
            ),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(
            out["prov:role"],
            json!({"@value": "operator", "@type": "xsd:string"})
        );
    }

    #[test]
    fn test_bare_role_key_collision_drops_attribute() {
        let mut warnings = Vec::new();
        let out = map_relation(
            RelationKind::Generation,
            1,
            &record(
                "_:gen1",
                json!({"prov:entity": "ex:e1", "entity": "ex:sneaky"}),
            ),
            &table(),
            &mut warnings,
        )
        .unwrap();
        assert_eq!(out["entity"], json!("ex:e1"));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::RoleCollision { .. }));
    }

    #[test]
    fn test_unresolved_role_reference_is_fatal() {
        let mut warnings = Vec::new();
        let err = map_relation(
            RelationKind::Attribution,
            1,
            &record("_:at1", json!({"prov:agent": "mystery:ag"})),
            &table(),
            &mut warnings,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::UnresolvedPrefix { .. }));
    }

    #[test]
    fn test_non_string_role_value_is_fatal() {
        let mut warnings = Vec::new();
        let err = map_relation(
            RelationKind::Attribution,
            1,
            &record("_:at1", json!({"prov:agent": 7})),
            &table(),
            &mut warnings,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }
}
