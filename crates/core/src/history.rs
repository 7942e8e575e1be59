use serde::Serialize;

use crate::locator::SourceLocator;
use crate::params::TIMELINE_URL_KEY;

/// Title used when replacing the history entry in place.
pub const HISTORY_TITLE: &str = "Timeline Viewer";

/// What the host should do with its navigation history after an asset is
/// selected by id. Core only decides; the host executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HistoryDirective {
    /// Full navigation (reload) to the given path.
    Navigate { href: String },
    /// Replace the current entry without a reload.
    ReplaceState {
        url: String,
        file_id: String,
        title: &'static str,
    },
}

/// Directive for selecting a drive-backed asset by id.
///
/// With `refresh_page` set the host performs a full navigation; otherwise the
/// current history entry is replaced so the viewer keeps running.
pub fn change_url(id: &str, refresh_page: bool) -> HistoryDirective {
    let query = format!("?{TIMELINE_URL_KEY}={}", SourceLocator::for_drive_id(id));
    if refresh_page {
        HistoryDirective::Navigate {
            href: format!("/{query}"),
        }
    } else {
        HistoryDirective::ReplaceState {
            url: query,
            file_id: id.to_owned(),
            title: HISTORY_TITLE,
        }
    }
}
