//! provld: PROV-JSON to PROV-JSONLD conversion
//!
//! Converts provenance documents serialized as W3C PROV-JSON into the
//! PROV-JSONLD serialization, so provenance authored by PROV-aware tools
//! becomes consumable by JSON-LD and linked-data tooling.
//!
//! # Core Concepts
//!
//! - **Elements**: `entity` / `activity` / `agent` records become typed
//!   JSON-LD node objects.
//! - **Relations**: the 14 PROV relation kinds become typed link objects
//!   with role keys renamed to their JSON-LD short forms.
//! - **Bundles**: nested documents become named-graph objects with their
//!   own identifier scope.
//!
//! # Example
//!
//! ```
//! use provld::Converter;
//! use serde_json::json;
//!
//! let input = json!({
//!     "prefix": {"ex": "http://example.org/"},
//!     "entity": {"ex:e1": {}}
//! });
//! let conversion = Converter::new().convert_value(&input).unwrap();
//! assert_eq!(conversion.document["@graph"][0]["@id"], "ex:e1");
//! ```

mod convert;
mod error;
mod prov;

pub use convert::{Conversion, Converter, ConverterConfig, PrefixTable, DEFAULT_CONTEXT_URL};
pub use error::{ConvertError, ConvertResult, RecordPath, Warning};
pub use prov::{Bundle, Document, ElementKind, ElementSet, Record, RelationKind, RelationSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
