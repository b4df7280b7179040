//! Ordered namespace table for expanding prefixed property names such as "dbo:abstract".
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Standard RDF namespaces used by DBpedia descriptions, in lookup order.
const STANDARD: [(&str, &str); 11] = [
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("dc", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("dbp", "http://dbpedia.org/property/"),
    ("dbo", "http://dbpedia.org/ontology/"),
    ("geo", "http://www.geonames.org/ontology#"),
    ("wgs", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
];

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: String,
    pub iri: String,
}

/// (prefix, iri) pairs. The first prefix that matches a property name is expanded, later ones are never tried.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Namespaces(Vec<Namespace>);

impl Default for Namespaces {
    fn default() -> Self { Self(STANDARD.iter().map(|(prefix, iri)| Namespace { prefix: (*prefix).to_owned(), iri: (*iri).to_owned() }).collect()) }
}

impl From<Vec<Namespace>> for Namespaces {
    fn from(namespaces: Vec<Namespace>) -> Self { Self(namespaces) }
}

impl Namespaces {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Namespace> { self.0.iter() }

    /// Expands "prefix:local" to the full IRI, for example "rdfs:label" -> `http://www.w3.org/2000/01/rdf-schema#label`.
    /// Exactly one substitution is applied. Names without a known prefix are returned unchanged.
    pub fn expand<'a>(&self, name: &'a str) -> Cow<'a, str> {
        for ns in &self.0 {
            if let Some(local) = name.strip_prefix(ns.prefix.as_str()).and_then(|rest| rest.strip_prefix(':')) {
                return Cow::Owned(format!("{}{local}", ns.iri));
            }
        }
        Cow::Borrowed(name)
    }
}
