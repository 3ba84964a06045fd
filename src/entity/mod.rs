mod interview;
mod news;
mod video;

pub use interview::Interview;
pub use news::NewsArticle;
pub use video::VideoSource;

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Accessors the storage layer needs from any persisted entity.
pub trait Record {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Time-based identifier token: `<prefix>-<unix millis>-<random>`. The random
/// tail keeps two creates within the same millisecond distinct.
pub fn generate_id(prefix: &str, at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, at.timestamp_millis(), &suffix[..6])
}

/// Short pt-BR display form, e.g. `30 de ago. de 2026`.
pub fn display_date(at: DateTime<Utc>) -> String {
    let month = MONTHS_PT_BR[at.month0() as usize];
    format!("{:02} de {}. de {}", at.day(), month, at.year())
}
