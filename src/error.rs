//! Failures of the single request to the SPARQL endpoint. Missing data is never an error.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint answered with a non-2xx status.
    #[error("SPARQL endpoint returned {code} {text}")]
    Status { code: u16, text: String },
    /// Network or IO failure before a status was received.
    #[error("cannot reach SPARQL endpoint: {0}")]
    Transport(String),
    /// The body is not an RDF/JSON document.
    #[error("invalid RDF/JSON response: {0}")]
    Body(#[from] serde_json::Error),
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, response) => Error::Status { code, text: response.status_text().to_owned() },
            ureq::Error::Transport(t) => Error::Transport(t.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
