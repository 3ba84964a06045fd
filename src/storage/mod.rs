mod json_store;

pub use json_store::Collection;

use std::fs;
use std::path::Path;

use crate::entity::{Interview, NewsArticle};
use crate::error::Result;

const NEWS_FILE: &str = "news.json";
const INTERVIEWS_FILE: &str = "interviews.json";

/// The two on-disk collections. Exclusive owner of the data directory; the
/// HTTP layer never touches the files directly.
pub struct Store {
    pub news: Collection<NewsArticle>,
    pub interviews: Collection<Interview>,
}

impl Store {
    /// Open the store, creating the data directory and seeding empty
    /// collection files when absent.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let news = Collection::new(data_dir.join(NEWS_FILE));
        let interviews = Collection::new(data_dir.join(INTERVIEWS_FILE));
        news.seed_if_absent()?;
        interviews.seed_if_absent()?;

        Ok(Self { news, interviews })
    }
}
