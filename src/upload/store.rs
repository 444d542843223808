use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// Public path segment under which stored files are served and referenced.
pub const PUBLIC_PREFIX: &str = "uploads";

/// Writes uploaded files under a root directory and hands back the
/// `uploads/<file>` references that get persisted on the submission.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write one uploaded file. The stored name is a UUIDv7 joined with the
    /// sanitized client file name, so names never collide and stay readable.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> std::io::Result<String> {
        let file_name = format!(
            "{}-{}",
            Uuid::now_v7().simple(),
            sanitize_file_name(original_name)
        );
        fs::create_dir_all(&self.root).await?;
        fs::write(self.root.join(&file_name), data).await?;
        Ok(format!("{PUBLIC_PREFIX}/{file_name}"))
    }

    /// Remove a stored file by its `uploads/<file>` reference. Only the final
    /// path component is honored, so references cannot escape the root.
    pub async fn remove(&self, stored_ref: &str) -> std::io::Result<()> {
        let file_name = Path::new(stored_ref).file_name().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty file reference")
        })?;
        fs::remove_file(self.root.join(file_name)).await
    }
}

/// Keep ASCII alphanumerics, dots, dashes and underscores from the final
/// path component of the client-supplied name; everything else becomes `_`.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
