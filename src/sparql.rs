//! Fetch the RDF/JSON description of a resource from a SPARQL endpoint.
use crate::{
    config::Config,
    error::{Error, Result},
    rdf::Description,
};
use log::{debug, warn};
use std::time::Duration;

const DESCRIBE_TEMPLATE: &str = "DESCRIBE <{{url}}>";

/// SPARQL query for all triples about the resource, for example "DESCRIBE <http://dbpedia.org/resource/Jazz_Gillum>".
pub fn describe_query(resource_url: &str) -> String { DESCRIBE_TEMPLATE.replace("{{url}}", resource_url) }

/// Source of RDF descriptions. Implemented by [SparqlClient], replaceable in tests.
pub trait Describe {
    fn describe(&self, resource_url: &str) -> Result<Description>;
}

/// Blocking client for a single SPARQL endpoint. One request per call, no retries.
pub struct SparqlClient {
    agent: ureq::Agent,
    endpoint: String,
    format: String,
}

impl SparqlClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(Duration::from_secs(config.timeout)).build();
        SparqlClient { agent, endpoint: config.endpoint.clone(), format: config.format.clone() }
    }
}

impl Describe for SparqlClient {
    fn describe(&self, resource_url: &str) -> Result<Description> {
        let query = describe_query(resource_url);
        debug!("{} {query}", self.endpoint);
        let response = self.agent.get(&self.endpoint).query("query", &query).query("format", &self.format).call().map_err(|e| {
            warn!("Error describing {resource_url}: {e}");
            e
        })?;
        // ureq only fails on 4xx and 5xx, redirects it did not follow arrive here
        if !(200..300).contains(&response.status()) {
            warn!("Error describing {resource_url}: {} {}", response.status(), response.status_text());
            return Err(Error::Status { code: response.status(), text: response.status_text().to_owned() });
        }
        Ok(serde_json::from_reader(response.into_reader())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const RESOURCE: &str = "http://dbpedia.org/resource/Jazz_Gillum";

    fn client(server: &Server) -> SparqlClient { SparqlClient::new(&Config { endpoint: format!("{}/sparql/", server.url()), timeout: 5, ..Config::default() }) }

    fn query_matcher() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "DESCRIBE <http://dbpedia.org/resource/Jazz_Gillum>".into()),
            Matcher::UrlEncoded("format".into(), "application/rdf+json".into()),
        ])
    }

    #[test]
    fn query_template() {
        assert_eq!(describe_query(RESOURCE), "DESCRIBE <http://dbpedia.org/resource/Jazz_Gillum>");
    }

    #[test]
    fn describe() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/sparql/")
            .match_query(query_matcher())
            .with_status(200)
            .with_header("content-type", "application/rdf+json")
            .with_body(r#"{"http://dbpedia.org/resource/Jazz_Gillum": {"http://www.w3.org/2000/01/rdf-schema#label": [{"type": "literal", "value": "Jazz Gillum", "lang": "en"}]}}"#)
            .create();
        let description = client(&server).describe(RESOURCE).unwrap();
        mock.assert();
        let labels = description[RESOURCE].get_vec("http://www.w3.org/2000/01/rdf-schema#label").unwrap();
        assert_eq!(labels[0].value, "Jazz Gillum");
    }

    #[test]
    fn error_status() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/sparql/").match_query(query_matcher()).with_status(500).with_body("Virtuoso 37000 Error").create();
        let err = client(&server).describe(RESOURCE).unwrap_err();
        mock.assert();
        assert!(matches!(err, Error::Status { code: 500, .. }), "{err:?}");
    }

    #[test]
    fn unfollowed_redirect_status() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/sparql/").match_query(query_matcher()).with_status(304).create();
        let err = client(&server).describe(RESOURCE).unwrap_err();
        mock.assert();
        assert!(matches!(err, Error::Status { code: 304, .. }), "{err:?}");
    }

    #[test]
    fn invalid_body() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/sparql/").match_query(Matcher::Any).with_status(200).with_body("<html>not json</html>").create();
        let err = client(&server).describe(RESOURCE).unwrap_err();
        mock.assert();
        assert!(matches!(err, Error::Body(_)), "{err:?}");
    }

    #[test]
    fn unreachable() {
        let config = Config { endpoint: "http://127.0.0.1:1/sparql/".to_owned(), timeout: 5, ..Config::default() };
        let err = SparqlClient::new(&config).describe(RESOURCE).unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "{err:?}");
    }
}
