use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::locator::SourceLocator;
use crate::params::TIMELINE_URL_KEY;

/// One region of a split plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub locator: SourceLocator,
    /// Vertical share of the page, in percent.
    pub share_percent: f64,
}

impl Region {
    /// Relative URL a host uses to instantiate this region as an independent
    /// sub-session carrying only its own locator.
    pub fn sub_session_url(&self) -> String {
        let encoded: String =
            form_urlencoded::byte_serialize(self.locator.as_str().trim().as_bytes()).collect();
        format!("./?{TIMELINE_URL_KEY}={encoded}")
    }
}

/// Layout decision for a session. Selected once at session start and never
/// changed for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LayoutPlan {
    /// One viewer, with at most one locator.
    Single { locator: Option<SourceLocator> },
    /// One independent sub-session per locator, equal vertical shares,
    /// submission order preserved. Regions share no fetch state.
    Split { regions: Vec<Region> },
}

impl LayoutPlan {
    pub fn is_split(&self) -> bool {
        matches!(self, LayoutPlan::Split { .. })
    }
}

/// Decide the layout for the given locators: split iff more than one.
pub fn select(locators: &[SourceLocator]) -> LayoutPlan {
    if locators.len() <= 1 {
        LayoutPlan::Single {
            locator: locators.first().cloned(),
        }
    } else {
        let share = 100.0 / locators.len() as f64;
        LayoutPlan::Split {
            regions: locators
                .iter()
                .cloned()
                .map(|locator| Region {
                    locator,
                    share_percent: share,
                })
                .collect(),
        }
    }
}
