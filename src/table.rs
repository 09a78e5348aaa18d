//! A small ordered table of typed rows with lookup by name.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{ReportError, Result};

/// Rows that carry a unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Rows kept in insertion order, indexed by [`Keyed::key`].
///
/// Serializes as a plain sequence of rows.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl<R: Keyed> Table<R> {
    /// Builds a table, rejecting rows whose key was already seen.
    pub fn new(rows: Vec<R>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.key().to_string(), i).is_some() {
                return Err(ReportError::DuplicateKey(row.key().to_string()));
            }
        }
        Ok(Self { rows, index })
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
