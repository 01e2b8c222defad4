//! End-to-end conversion tests over whole PROV-JSON documents.

use provld::{ConvertError, Converter, ConverterConfig, Warning, DEFAULT_CONTEXT_URL};
use serde_json::{json, Value};

fn convert(input: Value) -> provld::Conversion {
    Converter::new().convert_value(&input).unwrap()
}

#[test]
fn generation_between_entity_and_activity() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {"ex:e1": {}},
        "activity": {"ex:a1": {}},
        "wasGeneratedBy": {
            "_:gen1": {"prov:entity": "ex:e1", "prov:activity": "ex:a1"}
        }
    }));
    assert_eq!(
        conversion.document["@graph"],
        json!([
            {"@type": "prov:Entity", "@id": "ex:e1"},
            {"@type": "prov:Activity", "@id": "ex:a1"},
            {
                "@type": "prov:Generation",
                "@id": "_:gen1",
                "entity": "ex:e1",
                "activity": "ex:a1"
            }
        ])
    );
    assert!(conversion.warnings.is_empty());
}

#[test]
fn typed_literal_attribute_survives_with_datatype() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {
            "ex:e1": {"ex:weight": {"$": "12.5", "type": "xsd:float"}}
        }
    }));
    assert_eq!(
        conversion.document["@graph"][0]["ex:weight"],
        json!({"@value": "12.5", "@type": "xsd:float"})
    );
}

#[test]
fn bundle_becomes_named_graph() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "bundle": {
            "ex:b1": {"entity": {"ex:e2": {}}}
        }
    }));
    assert_eq!(
        conversion.document["@graph"],
        json!([
            {
                "@id": "ex:b1",
                "@graph": [{"@type": "prov:Entity", "@id": "ex:e2"}]
            }
        ])
    );
}

#[test]
fn unknown_relation_kind_is_skipped_with_warning() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {"ex:e1": {}},
        "wasSomethingElse": {
            "_:x1": {"prov:entity": "ex:e1"}
        }
    }));
    assert_eq!(
        conversion.warnings,
        vec![Warning::UnknownRelationKind {
            kind: "wasSomethingElse".to_string()
        }]
    );
    assert_eq!(
        conversion.document["@graph"],
        json!([{"@type": "prov:Entity", "@id": "ex:e1"}])
    );
}

#[test]
fn context_ends_with_canonical_url() {
    let with_prefixes = convert(json!({
        "prefix": {"ex": "http://example.org/", "other": "http://other.org/ns#"},
        "entity": {"ex:e1": {}}
    }));
    assert_eq!(
        with_prefixes.document["@context"],
        json!([
            {"ex": "http://example.org/", "other": "http://other.org/ns#"},
            DEFAULT_CONTEXT_URL
        ])
    );

    let without_prefixes = convert(json!({"activity": {"prov:a": {}}}));
    assert_eq!(
        without_prefixes.document["@context"],
        json!([DEFAULT_CONTEXT_URL])
    );
}

#[test]
fn graph_orders_elements_then_relations_then_bundles() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "bundle": {"ex:b1": {"agent": {"ex:ag2": {}}}},
        "used": {"_:u1": {"prov:entity": "ex:e1", "prov:activity": "ex:a1"}},
        "agent": {"ex:ag": {}},
        "wasGeneratedBy": {"_:g1": {"prov:entity": "ex:e1", "prov:activity": "ex:a1"}},
        "entity": {"ex:e1": {}},
        "activity": {"ex:a1": {}}
    }));
    let types: Vec<_> = conversion.document["@graph"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| {
            node.get("@type")
                .and_then(Value::as_str)
                .unwrap_or("bundle")
                .to_string()
        })
        .collect();
    assert_eq!(
        types,
        vec![
            "prov:Entity",
            "prov:Activity",
            "prov:Agent",
            "prov:Generation",
            "prov:Usage",
            "bundle"
        ]
    );
}

#[test]
fn derivation_roles_keep_long_names() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "wasDerivedFrom": {
            "_:d1": {
                "prov:generatedEntity": "ex:e2",
                "prov:usedEntity": "ex:e1"
            }
        }
    }));
    assert_eq!(
        conversion.document["@graph"][0],
        json!({
            "@type": "prov:Derivation",
            "@id": "_:d1",
            "generatedEntity": "ex:e2",
            "usedEntity": "ex:e1"
        })
    );
}

#[test]
fn omitted_relation_id_is_synthesized_deterministically() {
    let input = json!({
        "prefix": {"ex": "http://example.org/"},
        "used": {
            "_:u1": {"prov:entity": "ex:e1"},
            "": {"prov:entity": "ex:e2"}
        }
    });
    let first = convert(input.clone());
    let second = convert(input);
    assert_eq!(first.document["@graph"][1]["@id"], json!("_:used2"));
    assert_eq!(first.document, second.document);
}

#[test]
fn numbers_and_booleans_are_not_stringified() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {
            "ex:e1": {"ex:count": 3, "ex:checked": true}
        }
    }));
    let node = &conversion.document["@graph"][0];
    assert_eq!(node["ex:count"], json!(3));
    assert_eq!(node["ex:checked"], json!(true));
}

#[test]
fn language_tagged_label_round_trips() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {
            "ex:e1": {"prov:label": {"$": "une entité", "lang": "fr"}}
        }
    }));
    assert_eq!(
        conversion.document["@graph"][0]["prov:label"],
        json!({"@value": "une entité", "@language": "fr"})
    );
}

#[test]
fn malformed_attribute_degrades_with_warning() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {
            "ex:e1": {"ex:weight": {"type": "xsd:float"}}
        }
    }));
    assert_eq!(conversion.warnings.len(), 1);
    assert!(matches!(
        conversion.warnings[0],
        Warning::MalformedAttribute { .. }
    ));
    // The rest of the document still converted.
    assert_eq!(conversion.document["@graph"][0]["@id"], json!("ex:e1"));
}

#[test]
fn strict_mode_turns_warnings_into_errors() {
    let input = json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {"ex:e1": {"ex:weight": {"type": "xsd:float"}}}
    });
    let strict = Converter::with_config(ConverterConfig {
        strict: true,
        ..ConverterConfig::default()
    });
    assert!(matches!(
        strict.convert_value(&input),
        Err(ConvertError::Strict(_))
    ));
}

#[test]
fn unresolved_prefix_aborts_with_record_path() {
    let err = Converter::new()
        .convert_value(&json!({"entity": {"mystery:e1": {}}}))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("mystery"));
    assert!(message.contains("entity"));
}

#[test]
fn bundle_with_own_prefixes_is_an_isolated_scope() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "entity": {"ex:e1": {}},
        "bundle": {
            "ex:b1": {
                "prefix": {"sub": "http://example.com/sub/"},
                "entity": {"sub:e": {}}
            }
        }
    }));
    let bundle = &conversion.document["@graph"][1];
    assert_eq!(bundle["@id"], json!("ex:b1"));
    assert_eq!(
        bundle["@context"],
        json!([{"sub": "http://example.com/sub/"}, DEFAULT_CONTEXT_URL])
    );
    assert_eq!(
        bundle["@graph"],
        json!([{"@type": "prov:Entity", "@id": "sub:e"}])
    );
}

#[test]
fn activity_with_times_and_association() {
    let conversion = convert(json!({
        "prefix": {"ex": "http://example.org/"},
        "activity": {
            "ex:a1": {
                "prov:startTime": "2011-11-16T16:05:00",
                "prov:endTime": "2011-11-16T16:06:00"
            }
        },
        "agent": {"ex:alice": {}},
        "wasAssociatedWith": {
            "_:assoc1": {"prov:activity": "ex:a1", "prov:agent": "ex:alice"}
        }
    }));
    assert_eq!(
        conversion.document["@graph"],
        json!([
            {
                "@type": "prov:Activity",
                "@id": "ex:a1",
                "startTime": "2011-11-16T16:05:00",
                "endTime": "2011-11-16T16:06:00"
            },
            {"@type": "prov:Agent", "@id": "ex:alice"},
            {
                "@type": "prov:Association",
                "@id": "_:assoc1",
                "activity": "ex:a1",
                "agent": "ex:alice"
            }
        ])
    );
}
