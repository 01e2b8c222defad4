//! PROV-JSON document model and shape parsing.

use serde_json::{Map, Value};

use super::kind::{ElementKind, RelationKind};
use crate::error::{ConvertError, ConvertResult, RecordPath, Warning};

/// One parsed record: an identifier plus its raw attribute map.
///
/// Attribute values stay as raw JSON until normalization; the map preserves
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Qualified-name identifier. Empty for relation records that omitted
    /// one (a blank id is synthesized at mapping time).
    pub id: String,
    /// Raw attributes in declaration order.
    pub attrs: Map<String, Value>,
}

/// All records of one element kind, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSet {
    pub kind: ElementKind,
    pub records: Vec<Record>,
}

/// All records of one relation kind, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationSet {
    pub kind: RelationKind,
    pub records: Vec<Record>,
}

/// A named nested sub-document.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub id: String,
    pub document: Document,
}

/// A PROV-JSON document (the root or a bundle's content).
///
/// Element sets are held in the fixed kind order (entity, activity, agent)
/// and relation sets in the canonical 14-kind order, so emission is
/// deterministic regardless of input key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Local prefix declarations in declaration order. `None` means the
    /// document omitted `prefix` and (for bundles) inherits the parent's
    /// resolved table.
    pub prefixes: Option<Vec<(String, String)>>,
    pub elements: Vec<ElementSet>,
    pub relations: Vec<RelationSet>,
    pub bundles: Vec<Bundle>,
}

impl Document {
    /// Parse a raw JSON value into the document model.
    ///
    /// Shape violations are fatal; unrecognized record kinds are skipped
    /// with a warning for forward compatibility.
    pub fn from_json(value: &Value, warnings: &mut Vec<Warning>) -> ConvertResult<Self> {
        let root = value.as_object().ok_or_else(|| ConvertError::Parse {
            path: RecordPath::root(),
            message: "document must be a JSON object".to_string(),
        })?;

        let mut document = Document::default();

        for (key, entry) in root {
            if key == "prefix" {
                document.prefixes = Some(parse_prefixes(entry)?);
            } else if key == "bundle" {
                document.bundles = parse_bundles(entry, warnings)?;
            } else if let Some(kind) = ElementKind::from_key(key) {
                document.elements.push(ElementSet {
                    kind,
                    records: parse_records(key, entry, true)?,
                });
            } else if let Some(kind) = RelationKind::from_key(key) {
                document.relations.push(RelationSet {
                    kind,
                    records: parse_records(key, entry, false)?,
                });
            } else if key.chars().any(|c| c.is_ascii_uppercase()) {
                // Relation kinds are camelCase verb phrases; element kinds
                // are lowercase nouns.
                warnings.push(Warning::UnknownRelationKind { kind: key.clone() });
            } else {
                warnings.push(Warning::UnknownElementKind { kind: key.clone() });
            }
        }

        document.elements.sort_by_key(|set| set.kind as usize);
        document.relations.sort_by_key(|set| set.kind as usize);

        Ok(document)
    }
}

fn parse_prefixes(value: &Value) -> ConvertResult<Vec<(String, String)>> {
    let map = value.as_object().ok_or_else(|| ConvertError::Parse {
        path: RecordPath::collection("prefix"),
        message: "prefix mapping must be a JSON object".to_string(),
    })?;
    map.iter()
        .map(|(prefix, namespace)| match namespace.as_str() {
            Some(iri) => Ok((prefix.clone(), iri.to_string())),
            None => Err(ConvertError::Parse {
                path: RecordPath::record("prefix", prefix),
                message: "namespace IRI must be a string".to_string(),
            }),
        })
        .collect()
}

fn parse_records(kind_key: &str, value: &Value, require_id: bool) -> ConvertResult<Vec<Record>> {
    let map = value.as_object().ok_or_else(|| ConvertError::Parse {
        path: RecordPath::collection(kind_key),
        message: "record collection must be a JSON object".to_string(),
    })?;
    let mut records = Vec::with_capacity(map.len());
    for (id, attrs) in map {
        if require_id && id.is_empty() {
            return Err(ConvertError::Parse {
                path: RecordPath::collection(kind_key),
                message: "record identifier must not be empty".to_string(),
            });
        }
        let attrs = attrs.as_object().ok_or_else(|| ConvertError::Parse {
            path: RecordPath::record(kind_key, id),
            message: "record must be a JSON object of attributes".to_string(),
        })?;
        records.push(Record {
            id: id.clone(),
            attrs: attrs.clone(),
        });
    }
    Ok(records)
}

fn parse_bundles(value: &Value, warnings: &mut Vec<Warning>) -> ConvertResult<Vec<Bundle>> {
    let map = value.as_object().ok_or_else(|| ConvertError::Parse {
        path: RecordPath::collection("bundle"),
        message: "bundle mapping must be a JSON object".to_string(),
    })?;
    let mut bundles = Vec::with_capacity(map.len());
    for (id, content) in map {
        if id.is_empty() {
            return Err(ConvertError::Parse {
                path: RecordPath::collection("bundle"),
                message: "bundle identifier must not be empty".to_string(),
            });
        }
        bundles.push(Bundle {
            id: id.clone(),
            document: Document::from_json(content, warnings)?,
        });
    }
    Ok(bundles)
}
