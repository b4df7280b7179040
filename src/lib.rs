//! Resolve a Wikipedia article URL to a flat summary of its DBpedia resource.
//!
//! ```no_run
//! use dbpsum::{config::Config, resource::Summarizer};
//!
//! let summarizer = Summarizer::new(&Config::default());
//! let resource = summarizer.get_summary("http://en.wikipedia.org/wiki/Jazz_Gillum").unwrap();
//! println!("{:?} {:?}", resource.summary.title, resource.summary.start);
//! ```
pub mod about;
pub mod config;
pub mod error;
pub mod namespace;
pub mod rdf;
pub mod resolve;
pub mod resource;
pub mod sparql;
pub mod summary;

pub use error::{Error, Result};
pub use resource::{Resource, Summarizer};
pub use summary::{Location, Summary};
