//! Local copy of the last known record collection.
//!
//! Read once at startup, rewritten after every successful write and polling
//! refresh. There is no locking: two sessions sharing a file overwrite each
//! other.
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use engine::Expense;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    expenses: Vec<Expense>,
}

#[derive(Debug, Clone)]
pub struct ExpenseCache {
    path: PathBuf,
}

impl ExpenseCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty cache.
    pub fn load(&self) -> Result<Vec<Expense>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let file: CacheFile = serde_json::from_str(&content)?;
        Ok(file.expenses)
    }

    pub fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = CacheFile {
            saved_at: Some(Utc::now()),
            expenses: expenses.to_vec(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}
