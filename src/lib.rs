//! Assistant core - keyword-driven FAQ matching for an in-app help assistant
//!
//! Ranks free-text input against a fixed knowledge base of question/answer
//! records and picks how to reply: a direct answer, an answer with "did you
//! mean" prompts, a category fallback, or a generic help menu.

pub mod types;
pub mod error;
pub mod config;
pub mod lexicon;
pub mod corpus;
pub mod scoring;
pub mod matcher;
pub mod responder;
pub mod topics;
pub mod session;
pub mod assistant;

pub use types::*;
pub use error::{Error, Result};
pub use config::*;
pub use corpus::{Corpus, KnowledgeBase};
pub use matcher::{rank, Matcher};
pub use responder::{respond, Responder, GENERIC_HELP_CATEGORY};
pub use topics::TopicCatalog;
pub use session::Conversation;
pub use assistant::Assistant;

// Python bindings
#[cfg(feature = "python")]
pub mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn assistant_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyAssistant>()?;
    m.add_function(wrap_pyfunction!(py_rank_builtin, m)?)?;
    Ok(())
}
