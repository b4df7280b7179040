use crate::{
    config::Config,
    error::Result,
    namespace::Namespaces,
    rdf::Description,
    resolve::dbpedia_url,
    sparql::{Describe, SparqlClient},
    summary::{extract_summary, Summary},
};
use log::debug;
use serde::Serialize;

/// Everything known about one resolved URL.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// RDF/JSON as returned by the endpoint
    pub raw: Description,
    pub dbpedia_url: String,
    pub summary: Summary,
}

/// Resolves Wikipedia or DBpedia URLs to [Resource]s.
pub struct Summarizer<D = SparqlClient> {
    describer: D,
    namespaces: Namespaces,
    resource_base: String,
}

impl Summarizer {
    pub fn new(config: &Config) -> Self { Self::with_describer(config, SparqlClient::new(config)) }
}

impl<D: Describe> Summarizer<D> {
    pub fn with_describer(config: &Config, describer: D) -> Self {
        Summarizer { describer, namespaces: config.namespaces.clone(), resource_base: config.resource_base.clone() }
    }

    /// Issues exactly one request. Endpoint failures are returned unchanged.
    pub fn get_summary(&self, url: &str) -> Result<Resource> {
        let dbpedia_url = dbpedia_url(url, &self.resource_base);
        debug!("{url} -> {dbpedia_url}");
        let raw = self.describer.describe(&dbpedia_url)?;
        let summary = extract_summary(&dbpedia_url, &raw, &self.namespaces);
        Ok(Resource { raw, dbpedia_url, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, rdf::RdfValue};
    use std::cell::RefCell;

    /// Answers with a fixed description and remembers the requested URLs.
    struct Fake {
        description: Option<Description>,
        requested: RefCell<Vec<String>>,
    }

    impl Describe for Fake {
        fn describe(&self, resource_url: &str) -> Result<Description> {
            self.requested.borrow_mut().push(resource_url.to_owned());
            self.description.clone().ok_or_else(|| Error::Status { code: 503, text: "Service Unavailable".to_owned() })
        }
    }

    fn summarizer(description: Option<Description>) -> Summarizer<Fake> { Summarizer::with_describer(&Config::default(), Fake { description, requested: RefCell::new(Vec::new()) }) }

    #[test]
    fn jazz_gillum() {
        let mut properties = crate::rdf::Properties::new();
        properties.insert("http://www.w3.org/2000/01/rdf-schema#label".to_owned(), RdfValue::literal("Jazz Gillum", Some("en")));
        let description = Description::from([("http://dbpedia.org/resource/Jazz_Gillum".to_owned(), properties)]);
        let s = summarizer(Some(description.clone()));

        let resource = s.get_summary("http://en.wikipedia.org/wiki/Jazz_Gillum").unwrap();
        assert_eq!(*s.describer.requested.borrow(), ["http://dbpedia.org/resource/Jazz_Gillum"]);
        assert_eq!(resource.dbpedia_url, "http://dbpedia.org/resource/Jazz_Gillum");
        assert_eq!(resource.raw, description);
        assert_eq!(resource.summary.title.as_deref(), Some("Jazz Gillum"));
        assert_eq!(resource.summary.start, None);

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["dbpediaUrl"], "http://dbpedia.org/resource/Jazz_Gillum");
        assert_eq!(json["summary"]["location"], serde_json::json!({}));
        assert_eq!(json["raw"]["http://dbpedia.org/resource/Jazz_Gillum"]["http://www.w3.org/2000/01/rdf-schema#label"][0]["lang"], "en");
    }

    #[test]
    fn dbpedia_url_passed_through() {
        let s = summarizer(Some(Description::new()));
        let resource = s.get_summary("http://dbpedia.org/resource/Rufus_Pollock").unwrap();
        assert_eq!(resource.dbpedia_url, "http://dbpedia.org/resource/Rufus_Pollock");
        assert_eq!(resource.summary, Summary::default());
    }

    #[test]
    fn failure_surfaced() {
        let s = summarizer(None);
        let err = s.get_summary("http://en.wikipedia.org/wiki/Jazz_Gillum").unwrap_err();
        assert!(matches!(err, Error::Status { code: 503, .. }));
        assert_eq!(s.describer.requested.borrow().len(), 1);
    }
}
