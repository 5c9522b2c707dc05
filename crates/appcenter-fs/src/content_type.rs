//! Content-type detection for uploadable artifacts
//!
//! The upload service only distinguishes the package formats listed in
//! [`CONTENT_TYPES`]; everything else goes up as an opaque byte stream.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::NormalizedPath;

/// Content type used when the extension is unknown or missing.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Lower-cased extension to content type.
///
/// The `*sym` symbol packages share the content type of their `*upload`
/// counterparts.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("apk", "application/vnd.android.package-archive"),
    ("aab", "application/vnd.android.package-archive"),
    ("msi", "application/x-msi"),
    ("plist", "application/xml"),
    ("aetx", "application/c-x509-ca-cert"),
    ("cer", "application/pkix-cert"),
    ("xap", "application/x-silverlight-app"),
    ("appx", "application/x-appx"),
    ("appxbundle", "application/x-appxbundle"),
    ("appxupload", "application/x-appxupload"),
    ("appxsym", "application/x-appxupload"),
    ("msix", "application/x-msix"),
    ("msixbundle", "application/x-msixbundle"),
    ("msixupload", "application/x-msixupload"),
    ("msixsym", "application/x-msixupload"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CONTENT_TYPES.iter().copied().collect());

/// Look up the content type for a bare extension (no leading dot).
///
/// Matching is case-insensitive.
pub fn from_extension(extension: &str) -> &'static str {
    TABLE
        .get(extension.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Content type for a path, chosen by the extension of its final segment.
///
/// Never touches the file system.
pub fn for_path(path: &str) -> &'static str {
    let normalized = NormalizedPath::new(path);
    let content_type = normalized
        .extension()
        .map(from_extension)
        .unwrap_or(DEFAULT_CONTENT_TYPE);
    tracing::trace!(path, content_type, "Resolved content type");
    content_type
}
