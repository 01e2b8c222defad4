//! Prefix resolution and `@context` assembly.

use serde_json::{Map, Value};

use crate::error::{ConvertError, ConvertResult, RecordPath};
use crate::prov::name::{self, Name};

/// Prefixes defined by the canonical remote context; usable without a local
/// declaration and never emitted into the local `@context` object.
const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("prov", "http://www.w3.org/ns/prov#"),
    ("provext", "https://openprovenance.org/ns/provext#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
];

/// Reserved prefix naming the default namespace for bare local names.
const DEFAULT_PREFIX: &str = "default";

/// The active prefix table for one document scope.
///
/// A bundle that declares its own `prefix` mapping gets a fresh table; a
/// bundle that omits it shares the parent's table. Built-in prefixes are
/// always in scope.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    declared: Vec<(String, String)>,
}

impl PrefixTable {
    /// Build a table from local declarations, insertion order preserved.
    pub fn from_declarations(declared: &[(String, String)]) -> Self {
        Self {
            declared: declared.to_vec(),
        }
    }

    /// Look up a prefix, local declarations shadowing built-ins.
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        self.declared
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
            .or_else(|| {
                BUILTIN_PREFIXES
                    .iter()
                    .find(|(p, _)| *p == prefix)
                    .map(|(_, ns)| *ns)
            })
    }

    /// Validate that a qualified name resolves in this scope.
    ///
    /// Blank identifiers and absolute IRIs always pass; bare local names
    /// require the reserved `default` prefix to be declared.
    pub fn resolve(&self, raw: &str, path: &RecordPath) -> ConvertResult<()> {
        let prefix = match name::parse(raw) {
            Name::Blank(_) | Name::Absolute(_) => return Ok(()),
            Name::Compact { prefix, .. } => prefix,
            Name::Plain(_) => DEFAULT_PREFIX,
        };
        if self.lookup(prefix).is_some() {
            Ok(())
        } else {
            Err(ConvertError::UnresolvedPrefix {
                prefix: prefix.to_string(),
                name: raw.to_string(),
                path: path.clone(),
            })
        }
    }

    /// The `@context` array for this scope: the local prefix object (when
    /// any declarations exist), with the canonical context URL always last.
    pub fn context_value(&self, context_url: &str) -> Value {
        let mut entries = Vec::with_capacity(2);
        if !self.declared.is_empty() {
            let mut local = Map::new();
            for (prefix, namespace) in &self.declared {
                local.insert(prefix.clone(), Value::String(namespace.clone()));
            }
            entries.push(Value::Object(local));
        }
        entries.push(Value::String(context_url.to_string()));
        Value::Array(entries)
    }
}
