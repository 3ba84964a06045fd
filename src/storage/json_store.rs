use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::entity::Record;
use crate::error::Result;

/// One resource collection persisted as a single JSON array file. Every write
/// rewrites the whole array; there are no partial updates or transactions.
pub struct Collection<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> Collection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Write an empty array unless the file already exists.
    pub fn seed_if_absent(&self) -> Result<()> {
        if !self.path.exists() {
            self.save_all(&[])?;
        }
        Ok(())
    }

    /// Read the whole collection in on-disk insertion order. A missing or
    /// unparsable file reads as an empty collection, never as an error.
    pub fn load_all(&self) -> Result<Vec<T>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&data) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable collection file, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Read the whole collection sorted by creation timestamp descending,
    /// the order every list endpoint returns.
    pub fn load_sorted(&self) -> Result<Vec<T>> {
        let mut items = self.load_all()?;
        items.sort_by_key(|item| std::cmp::Reverse(item.created_at()));
        Ok(items)
    }

    /// Serialize the whole array and overwrite the file.
    pub fn save_all(&self, items: &[T]) -> Result<()> {
        let data = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn append(&self, item: T) -> Result<()> {
        let mut items = self.load_all()?;
        items.push(item);
        self.save_all(&items)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        Ok(self.load_all()?.into_iter().find(|item| item.id() == id))
    }

    /// Remove the matching item, reporting whether a match was found. The
    /// file is only rewritten when something was removed.
    pub fn remove_by_id(&self, id: &str) -> Result<bool> {
        let mut items = self.load_all()?;
        let before = items.len();
        items.retain(|item| item.id() != id);

        if items.len() == before {
            return Ok(false);
        }
        self.save_all(&items)?;
        Ok(true)
    }
}
