//! Python bindings for the assistant using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::assistant::Assistant;
use crate::config::AssistantConfig;
use crate::corpus::Corpus;
use crate::error::Error;
use crate::matcher::rank;
use crate::types::{FaqRecord, MatchResult, Reply};

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn record_dict<'py>(py: Python<'py>, record: &FaqRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", &record.id)?;
    dict.set_item("question", &record.question)?;
    dict.set_item("answer", &record.answer)?;
    dict.set_item("category", &record.category)?;
    Ok(dict)
}

fn result_dict<'py>(py: Python<'py>, result: &MatchResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("query", &result.query)?;
    dict.set_item("score", result.score)?;
    match &result.best {
        Some(best) => dict.set_item("best", record_dict(py, best)?)?,
        None => dict.set_item("best", py.None())?,
    }

    let suggestions = result
        .suggestions
        .iter()
        .map(|s| -> PyResult<Bound<'py, PyDict>> {
            let d = record_dict(py, &s.record)?;
            d.set_item("score", s.score)?;
            Ok(d)
        })
        .collect::<PyResult<Vec<_>>>()?;
    dict.set_item("suggestions", suggestions)?;
    Ok(dict)
}

fn reply_dict<'py>(py: Python<'py>, reply: &Reply) -> PyResult<Bound<'py, PyDict>> {
    let mode = serde_json::to_value(reply.mode)
        .map_err(|e| PyValueError::new_err(format!("Failed to serialize mode: {}", e)))?;
    let dict = PyDict::new_bound(py);
    dict.set_item("text", &reply.text)?;
    dict.set_item("category", &reply.category)?;
    dict.set_item("mode", mode.as_str().unwrap_or_default())?;
    dict.set_item("exchange_count", reply.exchange_count)?;
    dict.set_item("show_topics", reply.shows_topic_browser())?;
    Ok(dict)
}

/// Rank a query against the embedded corpus
#[pyfunction]
#[pyo3(name = "rank_builtin")]
pub fn py_rank_builtin<'py>(py: Python<'py>, query: &str) -> PyResult<Bound<'py, PyDict>> {
    let corpus = Corpus::builtin().map_err(to_py_err)?;
    result_dict(py, &rank(query, &corpus))
}

/// Python wrapper for the assistant
#[pyclass(name = "Assistant")]
pub struct PyAssistant {
    inner: Assistant,
}

#[pymethods]
impl PyAssistant {
    /// Build from optional corpus and config JSON; defaults to the embedded data.
    #[new]
    #[pyo3(signature = (corpus_json=None, config_json=None))]
    fn new(corpus_json: Option<&str>, config_json: Option<&str>) -> PyResult<Self> {
        let corpus = match corpus_json {
            Some(json) => Corpus::from_json(json),
            None => Corpus::builtin(),
        }
        .map_err(to_py_err)?;
        let config = match config_json {
            Some(json) => AssistantConfig::from_json(json).map_err(to_py_err)?,
            None => AssistantConfig::default(),
        };
        Ok(Self {
            inner: Assistant::new(corpus, &config),
        })
    }

    fn rank<'py>(&self, py: Python<'py>, query: &str) -> PyResult<Bound<'py, PyDict>> {
        result_dict(py, &self.inner.rank(query))
    }

    /// Rank and build the reply in one call
    fn answer<'py>(
        &self,
        py: Python<'py>,
        query: &str,
        exchange_count: usize,
    ) -> PyResult<Bound<'py, PyDict>> {
        let (result, reply) = self.inner.answer(query, exchange_count);
        let dict = reply_dict(py, &reply)?;
        dict.set_item("match", result_dict(py, &result)?)?;
        Ok(dict)
    }

    /// Replace the corpus; the old one stays if parsing fails
    fn reload(&self, corpus_json: &str) -> PyResult<()> {
        self.inner.knowledge().reload_json(corpus_json).map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.inner.corpus().len()
    }
}
