use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Display name attributed to content when no journal is given, and to login
/// sessions whose selector is not in the journal table.
pub const DEFAULT_JOURNAL: &str = "ONU Legends";

/// Defensive cap on request bodies. Covers the 50 MB video limit enforced in
/// the admin UI plus multipart framing overhead.
pub const MAX_BODY_BYTES: usize = 55 * 1024 * 1024;

const DEFAULT_PORT: u16 = 3000;

/// Immutable process configuration, built once at startup and shared with the
/// handlers that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub public_dir: PathBuf,
    pub max_body_bytes: usize,
    journals: HashMap<String, String>,
}

impl Config {
    /// Build the configuration from CLI overrides. The port falls back to the
    /// `PORT` environment variable, then to 3000.
    pub fn load(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        uploads_dir: Option<PathBuf>,
        public_dir: Option<PathBuf>,
    ) -> Self {
        let port = port
            .or_else(|| env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            data_dir: data_dir.unwrap_or_else(|| PathBuf::from("data")),
            uploads_dir: uploads_dir.unwrap_or_else(|| PathBuf::from("uploads")),
            public_dir: public_dir.unwrap_or_else(|| PathBuf::from("public")),
            max_body_bytes: MAX_BODY_BYTES,
            journals: default_journals(),
        }
    }

    /// Resolve a journal selector to its display name, falling back to the
    /// site brand for unrecognized selectors.
    pub fn journal_display_name(&self, selector: &str) -> &str {
        self.journals
            .get(selector)
            .map(String::as_str)
            .unwrap_or(DEFAULT_JOURNAL)
    }
}

fn default_journals() -> HashMap<String, String> {
    [
        ("newyork", "The New York Times"),
        ("estadao", "Estadão"),
        ("diario", "Diário do Povo"),
        ("monde", "Le Monde"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
