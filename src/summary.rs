//! Flat summary of a DBpedia resource: title, description, dates, places, images and coordinates.
use crate::namespace::Namespaces;
use crate::rdf::{lookup, Description, Properties};
use serde::Serialize;

/// Candidate image properties, all found values are collected in this order.
const IMAGE_PROPERTIES: [&str; 3] = ["dbo:thumbnail", "foaf:depiction", "foaf:img"];

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<String>,
    /// place, else birth place, else death place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub images: Vec<String>,
    pub location: Location,
    /// birth date, else date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// first of `images`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

struct Lookup<'a> {
    properties: &'a Properties,
    namespaces: &'a Namespaces,
}

impl Lookup<'_> {
    fn one(&self, property: &str) -> Option<String> { lookup(self.properties, self.namespaces, property).map(str::to_owned) }

    /// Skips candidates without a value, duplicates are kept.
    fn all(&self, properties: &[&str]) -> Vec<String> { properties.iter().filter_map(|p| self.one(p)).filter(|v| !v.is_empty()).collect() }
}

/// Empty values count as absent when choosing a fallback.
fn non_empty(value: &Option<String>) -> Option<String> { value.clone().filter(|v| !v.is_empty()) }

/// Extracts the summary of `subject` from an RDF/JSON description, for example
/// `extract_summary("http://dbpedia.org/resource/Rufus_Pollock", &description, &namespaces)`.
/// Missing subjects and properties result in absent fields, this never fails.
pub fn extract_summary(subject: &str, description: &Description, namespaces: &Namespaces) -> Summary {
    let empty = Properties::new();
    let l = Lookup { properties: description.get(subject).unwrap_or(&empty), namespaces };

    let birth_date = l.one("dbp:birthDate");
    let death_date = l.one("dbp:deathDate");
    // both dbp:date and dbo:date are usually present but dbp:date is often just a year
    let date = l.one("dbo:date");
    let place = l.one("dbp:place");
    let birth_place = l.one("dbp:birthPlace");
    let death_place = l.one("dbp:deathPlace");
    let images = l.all(&IMAGE_PROPERTIES);

    Summary {
        title: l.one("rdfs:label"),
        description: l.one("dbo:abstract"),
        summary: l.one("rdfs:comment"),
        source: l.one("foaf:page"),
        location: Location { lat: l.one("wgs:lat"), lon: l.one("wgs:lon"), title: non_empty(&place).or_else(|| non_empty(&birth_place)).or_else(|| death_place.clone()) },
        start: non_empty(&birth_date).or_else(|| date.clone()),
        end: death_date.clone(),
        image: images.first().cloned(),
        birth_date,
        death_date,
        date,
        place,
        birth_place,
        death_place,
        images,
    }
}
