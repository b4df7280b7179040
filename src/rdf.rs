//! RDF/JSON descriptions as returned by the SPARQL endpoint and property lookup on them.
use crate::namespace::Namespaces;
use multimap::MultiMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of an RDF/JSON object value. Unknown or missing kinds are kept as [ValueType::Other] so that one odd value never rejects a description.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Literal,
    Uri,
    Bnode,
    #[default]
    #[serde(other)]
    Other,
}

impl ValueType {
    fn is_other(&self) -> bool { matches!(self, ValueType::Other) }
}

/// A single object value, for example `{"type": "literal", "value": "Jazz Gillum", "lang": "en"}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RdfValue {
    #[serde(rename = "type", default, skip_serializing_if = "ValueType::is_other")]
    pub kind: ValueType,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl RdfValue {
    pub fn literal(value: &str, lang: Option<&str>) -> Self { RdfValue { kind: ValueType::Literal, value: value.to_owned(), lang: lang.map(str::to_owned), datatype: None } }

    pub fn uri(value: &str) -> Self { RdfValue { kind: ValueType::Uri, value: value.to_owned(), lang: None, datatype: None } }

    /// Untagged values and values tagged "en" qualify, an empty tag counts as untagged.
    pub fn is_english_or_untagged(&self) -> bool { matches!(self.lang.as_deref(), None | Some("") | Some("en")) }
}

/// Full property IRI -> values in the order the endpoint returned them.
pub type Properties = MultiMap<String, RdfValue>;

/// Subject IRI -> properties of that subject.
pub type Description = HashMap<String, Properties>;

/// Value of the first English or untagged value of the property, for example "rdfs:label" or a full IRI.
/// Values in other languages are never returned, even when nothing else is there.
pub fn lookup<'a>(properties: &'a Properties, namespaces: &Namespaces, property: &str) -> Option<&'a str> {
    let iri = namespaces.expand(property);
    properties.get_vec(iri.as_ref())?.iter().find(|v| v.is_english_or_untagged()).map(|v| v.value.as_str())
}
