//! Knowledge base storage
//!
//! A `Corpus` is validated once and then read-only. Lowercase forms of every
//! searchable field are computed up front so ranking never re-normalizes them.
//! `KnowledgeBase` lets a host replace the whole corpus while calls are in
//! flight: readers keep the snapshot they started with.

use std::sync::Arc;

use ahash::AHashSet;
use arc_swap::ArcSwap;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::FaqRecord;

const BUILTIN_CORPUS: &str = include_str!("../data/faq.json");

/// A record with its searchable fields pre-lowercased
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    pub record: FaqRecord,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub keywords: Vec<String>,
}

impl IndexedRecord {
    fn new(record: FaqRecord) -> Self {
        Self {
            question: record.question.to_lowercase(),
            answer: record.answer.to_lowercase(),
            category: record.category.to_lowercase(),
            // a blank keyword would be contained in every token
            keywords: record
                .keywords
                .iter()
                .filter(|k| !k.trim().is_empty())
                .map(|k| k.to_lowercase())
                .collect(),
            record,
        }
    }

    /// First word of the lowercase category, used for fallback overlap.
    pub fn category_head(&self) -> Option<&str> {
        self.category.split_whitespace().next()
    }
}

/// Immutable, validated collection of FAQ records in load order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<IndexedRecord>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate ids and empty required fields.
    pub fn new(records: Vec<FaqRecord>) -> Result<Self> {
        let mut seen: AHashSet<String> = AHashSet::with_capacity(records.len());

        for record in &records {
            let required = [
                ("id", &record.id),
                ("question", &record.question),
                ("answer", &record.answer),
                ("category", &record.category),
            ];
            for (field, value) in required {
                if value.trim().is_empty() {
                    return Err(Error::EmptyField {
                        id: record.id.clone(),
                        field,
                    });
                }
            }
            if !seen.insert(record.id.clone()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            entries: records.into_iter().map(IndexedRecord::new).collect(),
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FaqRecord> = serde_json::from_str(json)?;
        let corpus = Self::new(records)?;
        info!(records = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// The sample corpus compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CORPUS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedRecord] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &FaqRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn get(&self, id: &str) -> Option<&FaqRecord> {
        self.records().find(|r| r.id == id)
    }

    /// Records of a category, in corpus order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a FaqRecord> {
        self.records().filter(move |r| r.category == category)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: AHashSet<&str> = AHashSet::new();
        self.records()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

/// Shared handle to the current corpus, replaceable as a whole
#[derive(Debug)]
pub struct KnowledgeBase {
    current: ArcSwap<Corpus>,
}

impl KnowledgeBase {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            current: ArcSwap::from_pointee(corpus),
        }
    }

    /// Corpus to use for the duration of one call.
    pub fn snapshot(&self) -> Arc<Corpus> {
        self.current.load_full()
    }

    pub fn replace(&self, corpus: Corpus) {
        info!(records = corpus.len(), "replacing corpus");
        self.current.store(Arc::new(corpus));
    }

    /// Parse and swap in a new corpus. On error the current one stays.
    pub fn reload_json(&self, json: &str) -> Result<()> {
        match Corpus::from_json(json) {
            Ok(corpus) => {
                self.replace(corpus);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected replacement corpus");
                Err(err)
            }
        }
    }
}
