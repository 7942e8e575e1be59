use thiserror::Error;
use url::Url;

/// Path segment whose inner slash must be escaped before the origin routes
/// the request.
const TRACES_SEGMENT: &str = "/o/traces/";
const TRACES_SEGMENT_ESCAPED: &str = "/o/traces%2F";

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("invalid locator url: {0}")]
    Invalid(#[from] url::ParseError),
}

/// Escape the literal slash inside a `/o/traces/<name>` path segment.
///
/// Only the first occurrence is rewritten. The escaped form no longer
/// matches, so applying the rule twice equals applying it once.
pub fn escape_traces_path(raw: &str) -> String {
    raw.replacen(TRACES_SEGMENT, TRACES_SEGMENT_ESCAPED, 1)
}

/// Map known provider hostnames to their CORS-permitting equivalents.
///
/// `*.github.com` serves raw files from `*.githubusercontent.com`, and
/// Dropbox share links download directly from `dl.dropboxusercontent.com`.
/// Unknown hostnames pass through unchanged.
pub fn rewrite_host(url: &mut Url) {
    let Some(host) = url.host_str() else { return };

    let replacement = if host == "www.dropbox.com" {
        Some("dl.dropboxusercontent.com".to_owned())
    } else if host == "github.com" || host.ends_with(".github.com") {
        let stem = host.strip_suffix("github.com").unwrap_or_default();
        Some(format!("{stem}githubusercontent.com"))
    } else {
        None
    };

    if let Some(new_host) = replacement {
        // Replacement hosts are fixed strings; set_host cannot fail on them.
        let _ = url.set_host(Some(&new_host));
    }
}

/// Full rewrite applied to a network locator before a request is issued.
pub fn rewrite(raw: &str) -> Result<Url, RewriteError> {
    let mut url = Url::parse(&escape_traces_path(raw))?;
    rewrite_host(&mut url);
    Ok(url)
}
