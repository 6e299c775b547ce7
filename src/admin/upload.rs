//! Product images on local disk under `<root>/pimg/<pid>/`, served at `/uploads/...`.

use std::io;
use std::path::{Component, Path, PathBuf};

pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Clone, Debug)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        UploadStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the image and returns its public path, `/uploads/pimg/<pid>/<stamp>-<name>`.
    pub async fn save_product_image(&self, pid: &str, filename: &str, bytes: &[u8]) -> io::Result<String> {
        let pid = checked_segment(pid)?;
        let name = format!("{}-{}", chrono::Utc::now().timestamp_millis(), sanitize_filename(filename));
        let dir = self.root.join("pimg").join(pid);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&name), bytes).await?;
        tracing::debug!(pid = %pid, file = %name, size = bytes.len(), "product image saved");
        Ok(format!("{PUBLIC_PREFIX}/pimg/{pid}/{name}"))
    }

    /// Deletes a file by its public path. Paths outside the upload tree are ignored,
    /// and a file that is already gone is not an error.
    pub async fn remove_public_file(&self, public_path: &str) -> io::Result<()> {
        let Some(path) = self.resolve_public(public_path) else {
            tracing::warn!(path = %public_path, "refusing to delete outside upload dir");
            return Ok(());
        };
        match tokio::fs::remove_file(&path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    pub async fn remove_product_dir(&self, pid: &str) -> io::Result<()> {
        let dir = self.root.join("pimg").join(checked_segment(pid)?);
        match tokio::fs::remove_dir_all(&dir).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    fn resolve_public(&self, public_path: &str) -> Option<PathBuf> {
        let rel = public_path.strip_prefix(PUBLIC_PREFIX)?.trim_start_matches('/');
        let rel = Path::new(rel);
        if rel.as_os_str().is_empty() || !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

/// IDs become directory names, so only `[A-Za-z0-9_-]` is accepted.
fn checked_segment(s: &str) -> io::Result<&str> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(s)
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid id: {s:?}")))
    }
}

fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_flattened() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("món ăn.png"), "m_n__n.png");
        assert_eq!(sanitize_filename("..."), "image");
    }

    #[test]
    fn public_paths_stay_inside_root() {
        let store = UploadStore::new("/srv/uploads");
        assert_eq!(
            store.resolve_public("/uploads/pimg/P1/a.png"),
            Some(PathBuf::from("/srv/uploads/pimg/P1/a.png"))
        );
        assert_eq!(store.resolve_public("/uploads/../secret"), None);
        assert_eq!(store.resolve_public("/etc/passwd"), None);
    }

    #[tokio::test]
    async fn save_then_remove_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());
        let public = store.save_product_image("P1", "dish.png", b"png").await.unwrap();
        assert!(public.starts_with("/uploads/pimg/P1/"));
        assert!(tmp.path().join("pimg/P1").is_dir());
        store.remove_product_dir("P1").await.unwrap();
        assert!(!tmp.path().join("pimg/P1").exists());
        assert!(store.remove_product_dir("../x").await.is_err());
    }
}
