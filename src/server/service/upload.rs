//! On-disk storage for uploaded record attachments.
//!
//! `FileStore` owns the upload directory and everything that touches it:
//! whitelist validation, unique name generation, writes, reads, and removal.
//! Database rows for files are handled by the record file repository; the two
//! are kept in sync by the record service.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::server::error::AppError;

/// Maximum number of file parts accepted per upload request.
pub const MAX_FILES_PER_UPLOAD: usize = 5;

/// Upper bound for a multipart request body (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Content type returned for extensions outside the attachment whitelist.
const FALLBACK_TYPE: &str = "application/octet-stream";

/// Handle on the upload directory.
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Checks an uploaded part against the attachment whitelist.
    ///
    /// Both the file extension and the declared content type must appear in
    /// the whitelist, and they must agree with each other.
    ///
    /// # Returns
    /// - `Ok(())` - Part is acceptable
    /// - `Err(AppError::Validation)` - Extension or content type not allowed
    pub fn validate_part(original_name: &str, content_type: &str) -> Result<(), AppError> {
        let ext = extension_of(original_name).ok_or_else(|| {
            AppError::Validation(format!("File '{original_name}' has no extension"))
        })?;

        let expected = content_type_for(original_name);
        if expected == FALLBACK_TYPE {
            return Err(AppError::Validation(format!(
                "File type '.{ext}' is not allowed. Allowed types: jpg, jpeg, png, pdf, doc, docx"
            )));
        }
        if expected != content_type {
            return Err(AppError::Validation(format!(
                "Content type '{content_type}' does not match file extension '.{ext}'"
            )));
        }

        Ok(())
    }

    /// Generates a unique on-disk name preserving the original extension.
    ///
    /// Layout is `files-{millis}-{random}.{ext}`; uniqueness is additionally
    /// guaranteed by the unique column on the record_file table.
    pub fn generate_name(original_name: &str) -> String {
        let ext = extension_of(original_name).unwrap_or_default();
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

        format!("files-{}-{}.{}", Utc::now().timestamp_millis(), suffix, ext)
    }

    /// Absolute path of a stored file.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Writes uploaded bytes under the given stored name.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), AppError> {
        tokio::fs::write(self.path_of(file_name), bytes).await?;
        Ok(())
    }

    /// Reads a stored file back for download.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - File contents
    /// - `Err(AppError::NotFound)` - No such file on disk
    pub async fn read(&self, file_name: &str) -> Result<Vec<u8>, AppError> {
        match tokio::fs::read(self.path_of(file_name)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound("File".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a stored file, ignoring files already gone from disk.
    pub async fn remove(&self, file_name: &str) -> Result<(), AppError> {
        match tokio::fs::remove_file(self.path_of(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Lowercased extension of a filename, without the dot.
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Content type paired with a file name's extension.
///
/// Doubles as the attachment whitelist: `validate_part` rejects any extension
/// that maps to the fallback `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => FALLBACK_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that whitelisted extension/mime pairs pass validation.
    #[test]
    fn accepts_whitelisted_types() {
        assert!(FileStore::validate_part("scan.pdf", "application/pdf").is_ok());
        assert!(FileStore::validate_part("photo.JPG", "image/jpeg").is_ok());
        assert!(FileStore::validate_part("xray.png", "image/png").is_ok());
    }

    /// Tests that unknown extensions are rejected.
    #[test]
    fn rejects_unlisted_extension() {
        assert!(FileStore::validate_part("script.exe", "application/pdf").is_err());
        assert!(FileStore::validate_part("noextension", "image/png").is_err());
    }

    /// Tests that a declared content type must match the extension.
    #[test]
    fn rejects_mismatched_content_type() {
        assert!(FileStore::validate_part("scan.pdf", "image/png").is_err());
    }

    /// Tests that generated names keep the extension and do not collide.
    #[test]
    fn generated_names_keep_extension() {
        let a = FileStore::generate_name("report.PDF");
        let b = FileStore::generate_name("report.PDF");

        assert!(a.ends_with(".pdf"));
        assert!(a.starts_with("files-"));
        assert_ne!(a, b);
    }

    /// Tests the content type mapping and its fallback.
    #[test]
    fn content_type_mapping() {
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.pdf"), "application/pdf");
        assert_eq!(content_type_for("a.bin"), "application/octet-stream");
    }

    /// Tests save, read, and idempotent removal against a real directory.
    #[tokio::test]
    async fn save_read_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save("files-1-2.pdf", b"pdf bytes").await.unwrap();
        assert_eq!(store.read("files-1-2.pdf").await.unwrap(), b"pdf bytes");

        store.remove("files-1-2.pdf").await.unwrap();
        assert!(matches!(
            store.read("files-1-2.pdf").await,
            Err(AppError::NotFound(_))
        ));

        // Removing again is not an error
        store.remove("files-1-2.pdf").await.unwrap();
    }
}
