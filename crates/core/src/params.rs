use url::Url;
use url::form_urlencoded;

use crate::locator::SourceLocator;

/// Query-string key carrying trace source locators. Repeatable; each value
/// names one asset, and more than one value selects the split layout.
pub const TIMELINE_URL_KEY: &str = "loadTimelineFromURL";

/// Navigation parameters for one session, parsed from the page query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionParams {
    locators: Vec<SourceLocator>,
}

impl SessionParams {
    /// Parse a raw query string, with or without a leading `?`.
    ///
    /// Collects every value of [`TIMELINE_URL_KEY`] in order. A missing or
    /// empty key yields no locators; the session then stays on the welcome
    /// screen and no fetch is triggered. Locator well-formedness is not
    /// checked here.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let locators = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, value)| key == TIMELINE_URL_KEY && !value.is_empty())
            .map(|(_, value)| SourceLocator::new(value.into_owned()))
            .collect();
        Self { locators }
    }

    pub fn from_locators(locators: Vec<SourceLocator>) -> Self {
        Self { locators }
    }

    /// All locators, in submission order.
    pub fn locators(&self) -> &[SourceLocator] {
        &self.locators
    }

    /// The first locator, when one was supplied.
    pub fn primary(&self) -> Option<&SourceLocator> {
        self.locators.first()
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

/// Build the navigation URL for a form submission.
///
/// The `url` field is required; an empty submission is ignored. Any existing
/// locator values on `base` are dropped, then `url` and the optional `url2`
/// are appended as repeated [`TIMELINE_URL_KEY`] values. The values are
/// appended without percent-encoding; the address bar keeps the submitted
/// URLs readable and the parser decodes nothing that was never encoded.
pub fn navigation_url(base: &Url, url: &str, url2: Option<&str>) -> Option<Url> {
    if url.is_empty() {
        return None;
    }

    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != TIMELINE_URL_KEY)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut query: String = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&kept)
        .finish();

    let submitted = std::iter::once(url).chain(url2.into_iter().filter(|u| !u.is_empty()));
    for value in submitted {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(TIMELINE_URL_KEY);
        query.push('=');
        query.push_str(value);
    }

    let mut out = base.clone();
    out.set_query(Some(&query));
    Some(out)
}
