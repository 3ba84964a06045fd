use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;

/// Public URL prefix under which stored uploads are served.
pub const URL_PREFIX: &str = "/uploads";

/// A file persisted from a multipart create request.
#[derive(Debug, Clone)]
pub struct SavedUpload {
    pub filename: String,
    /// Relative URL recorded on the entity, e.g. `/uploads/1693400000000-a1b2c3d4.jpg`.
    pub url: String,
}

/// Writes uploaded files into the uploads directory under generated,
/// collision-resistant names. Declared content types are trusted as-is.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store one file, keeping the original extension but replacing the name
    /// with `<unix millis>-<random>`.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<SavedUpload> {
        let filename = unique_filename(original_name);
        fs::write(self.dir.join(&filename), bytes)?;
        Ok(SavedUpload {
            url: format!("{}/{}", URL_PREFIX, filename),
            filename,
        })
    }
}

fn unique_filename(original_name: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        &suffix[..8],
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_keeps_extension_and_writes_bytes() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::open(tmp.path()).unwrap();

        let saved = store.save("capa.jpg", b"fake image").unwrap();

        assert!(saved.filename.ends_with(".jpg"));
        assert_eq!(saved.url, format!("/uploads/{}", saved.filename));
        assert_eq!(
            fs::read(tmp.path().join(&saved.filename)).unwrap(),
            b"fake image"
        );
    }

    #[test]
    fn test_save_without_extension() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::open(tmp.path()).unwrap();

        let saved = store.save("video", b"data").unwrap();
        assert!(!saved.filename.contains('.'));
    }

    #[test]
    fn test_generated_names_do_not_collide() {
        let a = unique_filename("a.png");
        let b = unique_filename("a.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("uploads");
        let store = UploadStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }
}
