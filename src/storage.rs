// Signed-URL handling for the external object store serving listing images.

use regex::Regex;
use std::sync::LazyLock;

/// External object-storage host.
const STORAGE_BASE_URL: &str = "https://rggmcwzkljndvytgedhy.supabase.co";

/// Path layout of a time-limited signed URL: the segment after the bucket is
/// the object path, the query string carries the expiring token.
static RE_SIGNED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/storage/v1/object/sign/[^/]+/([^?]+)").unwrap());

/// Rewrites signed object-storage URLs to their stable public form so images
/// stay displayable after the signature expires.
#[derive(Clone, Debug)]
pub struct PublicUrlRewriter {
    base_url: String,
    bucket: String,
}

impl PublicUrlRewriter {
    pub fn new(bucket: &str) -> Self {
        Self::with_base_url(STORAGE_BASE_URL, bucket)
    }

    pub fn with_base_url(base_url: impl Into<String>, bucket: &str) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: urlencoding::encode(bucket).into_owned(),
        }
    }

    /// Signed URLs come back in public form with the query string stripped;
    /// anything else (public URLs, external hosts, `None`) passes through
    /// unchanged.
    pub fn rewrite(&self, url: Option<String>) -> Option<String> {
        let url = url?;
        if let Some(captures) = RE_SIGNED_URL.captures(&url) {
            return Some(format!(
                "{}/storage/v1/object/public/{}/{}",
                self.base_url, self.bucket, &captures[1]
            ));
        }
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> PublicUrlRewriter {
        PublicUrlRewriter::new("Cafe Images")
    }

    #[test]
    fn test_signed_url_becomes_public_and_query_is_stripped() {
        let signed = format!(
            "{}/storage/v1/object/sign/Cafe%20Images/chai-dhaba.jpg?token=abc123&expires=999",
            STORAGE_BASE_URL
        );
        let public = rewriter().rewrite(Some(signed)).unwrap();
        assert_eq!(
            public,
            format!(
                "{}/storage/v1/object/public/Cafe%20Images/chai-dhaba.jpg",
                STORAGE_BASE_URL
            )
        );
    }

    #[test]
    fn test_nested_object_path_is_preserved() {
        let signed = format!(
            "{}/storage/v1/object/sign/Cafe%20Images/2024/front.png?token=t",
            STORAGE_BASE_URL
        );
        let public = rewriter().rewrite(Some(signed)).unwrap();
        assert!(public.ends_with("/storage/v1/object/public/Cafe%20Images/2024/front.png"));
    }

    #[test]
    fn test_public_url_passes_through() {
        let url = format!(
            "{}/storage/v1/object/public/Cafe%20Images/chai-dhaba.jpg",
            STORAGE_BASE_URL
        );
        assert_eq!(rewriter().rewrite(Some(url.clone())), Some(url));
    }

    #[test]
    fn test_external_url_passes_through() {
        let url = "https://example.com/images/logo.png".to_string();
        assert_eq!(rewriter().rewrite(Some(url.clone())), Some(url));
    }

    #[test]
    fn test_none_passes_through() {
        assert_eq!(rewriter().rewrite(None), None);
    }

    #[test]
    fn test_bucket_name_is_percent_encoded() {
        let signed = format!(
            "{}/storage/v1/object/sign/whatever/photo.jpg?token=t",
            STORAGE_BASE_URL
        );
        let public = PublicUrlRewriter::new("Society Images")
            .rewrite(Some(signed))
            .unwrap();
        assert!(public.contains("/public/Society%20Images/photo.jpg"));
    }
}
