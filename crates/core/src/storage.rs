//! Public URL resolution for files kept in object storage buckets.
//!
//! Deliverables reference their files either by a bucket-relative
//! `file_path` or by a `file_url` that may already be absolute. The
//! [`StorageLocator`] turns either form into a URL a client can display.

/// Bucket holding order deliverables.
pub const DEFAULT_DELIVERABLES_BUCKET: &str = "order-files";

/// Path segment under which the storage service serves public objects.
const PUBLIC_OBJECT_PREFIX: &str = "storage/v1/object/public";

/// A record that points at a stored file.
pub trait StoredFile {
    /// Bucket-relative path of the file, if known.
    fn file_path(&self) -> Option<&str>;

    /// Absolute or bucket-relative URL of the file, if known.
    fn file_url(&self) -> Option<&str>;
}

/// Resolves bucket objects into public URLs for one storage deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocator {
    base_url: String,
}

impl StorageLocator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Public URL of `path` inside `bucket`.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/{PUBLIC_OBJECT_PREFIX}/{bucket}/{}",
            self.base_url,
            path.trim_start_matches('/')
        )
    }

    /// URL to display for a stored file, or an empty string if it has none.
    ///
    /// Preference order: `file_path` resolved against `bucket`, then an
    /// absolute `file_url` as-is, then a relative `file_url` resolved
    /// against `bucket`. Empty strings count as absent.
    pub fn resolve_display_url<F: StoredFile + ?Sized>(&self, file: &F, bucket: &str) -> String {
        if let Some(path) = non_empty(file.file_path()) {
            return self.public_url(bucket, path);
        }

        match non_empty(file.file_url()) {
            Some(url) if has_url_scheme(url) => url.to_string(),
            Some(url) => self.public_url(bucket, url),
            None => String::new(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Whether `url` is already absolute.
pub fn has_url_scheme(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
