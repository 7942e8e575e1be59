use std::time::{Duration, Instant};

use tracing::{debug, warn};
use traceview_api::{DEFAULT_TOTAL_BYTES, FetchProgress, PanelError, ViewerPanel};

use crate::layout::{self, LayoutPlan};
use crate::locator::SourceLocator;
use crate::params::SessionParams;

/// How long a transient status message stays visible.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_millis(3000);

/// Lifecycle phase of a viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Placeholder screen; the viewer UI is hidden.
    Welcome,
    /// A fetch attempt for the active locator is underway.
    Loading,
    /// The active locator's asset arrived and the viewer is shown.
    Ready,
}

/// Fetch status of the active locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    InProgress,
    Done,
    Failed,
}

/// Ticket identifying one fetch attempt.
///
/// Every attempt gets a fresh generation; progress and completion callbacks
/// carrying a superseded ticket are ignored, so callbacks from an abandoned
/// in-flight fetch can never overwrite the current attempt's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Terminal result of one fetch attempt, as seen by the session.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success { payload: Vec<u8> },
    Failure { message: String },
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    clear_at: Instant,
}

/// Orchestrator for one viewer session.
///
/// Owns the parsed parameters, the layout decision, and all per-fetch state,
/// and drives the external viewer panel through the adapter trait. The
/// session itself performs no I/O; a frontend runs the fetch and feeds
/// progress and completion back through [`on_progress`] and [`on_complete`].
///
/// [`on_progress`]: ViewerSession::on_progress
/// [`on_complete`]: ViewerSession::on_complete
pub struct ViewerSession<P> {
    params: SessionParams,
    layout: LayoutPlan,
    phase: Phase,
    status: FetchStatus,
    bytes_loaded: u64,
    total_bytes: u64,
    visible: bool,
    online: bool,
    loading_started: bool,
    generation: u64,
    message: Option<StatusMessage>,
    panel: P,
}

impl<P: ViewerPanel> ViewerSession<P> {
    /// Create a session from parsed parameters. Starts on the welcome screen
    /// with the viewer hidden; the layout is fixed here for the session's
    /// lifetime.
    pub fn new(params: SessionParams, online: bool, panel: P) -> Self {
        let layout = layout::select(params.locators());
        Self {
            params,
            layout,
            phase: Phase::Welcome,
            status: FetchStatus::Idle,
            bytes_loaded: 0,
            total_bytes: DEFAULT_TOTAL_BYTES,
            visible: false,
            online,
            loading_started: false,
            generation: 0,
            message: None,
            panel,
        }
    }

    /// Start a fetch attempt for the active locator.
    ///
    /// Returns `None` when there is no locator, or when an attempt for it is
    /// already in progress; a second concurrent load for the same locator is
    /// never started. Otherwise resets the per-attempt state and returns the
    /// ticket the frontend must pass back with every callback.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        self.params.primary()?;
        if self.status == FetchStatus::InProgress {
            debug!("fetch already in progress for the active locator");
            return None;
        }
        self.generation += 1;
        self.loading_started = false;
        self.bytes_loaded = 0;
        self.total_bytes = DEFAULT_TOTAL_BYTES;
        self.status = FetchStatus::InProgress;
        self.phase = Phase::Loading;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Progress callback from the fetcher.
    ///
    /// The first event of an attempt drives the panel's `loading_started`
    /// exactly once; every event drives `loading_progress`. Events carrying
    /// a superseded ticket are dropped.
    pub fn on_progress(&mut self, ticket: FetchTicket, event: FetchProgress) {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "dropping progress from a superseded fetch"
            );
            return;
        }
        self.bytes_loaded = event.loaded;
        if let Some(total) = event.total
            && total > 0
        {
            self.total_bytes = total;
        }
        if !self.loading_started {
            self.loading_started = true;
            self.panel_call("loading_started", |panel| panel.loading_started());
        }
        let fraction = event.fraction();
        self.panel_call("loading_progress", |panel| panel.loading_progress(fraction));
    }

    /// Completion callback from the fetcher.
    ///
    /// Success shows the viewer and hands the payload to the panel; failure
    /// reverts to the welcome screen and schedules a transient status
    /// message. Outcomes carrying a superseded ticket are dropped.
    pub fn on_complete(&mut self, ticket: FetchTicket, outcome: FetchOutcome, now: Instant) {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "dropping completion from a superseded fetch"
            );
            return;
        }
        match outcome {
            FetchOutcome::Success { payload } => {
                self.status = FetchStatus::Done;
                self.visible = true;
                self.phase = Phase::Ready;
                self.panel_call("load_complete", |panel| panel.load_complete(&payload));
            }
            FetchOutcome::Failure { message } => {
                warn!(%message, "download of asset failed");
                self.status = FetchStatus::Failed;
                self.visible = false;
                self.phase = Phase::Welcome;
                self.show_status(format!("Download of asset failed: {message}"), now);
            }
        }
    }

    /// Replace the session's locator with a newly submitted one (drag-and-drop
    /// or form resubmission) and return to the loading phase.
    ///
    /// Any in-flight attempt is fenced out immediately: its callbacks carry a
    /// ticket that no longer matches. The transport request itself is not
    /// cancelled.
    pub fn submit_locator(&mut self, locator: SourceLocator) {
        self.params = SessionParams::from_locators(vec![locator]);
        self.layout = layout::select(self.params.locators());
        self.generation += 1;
        self.status = FetchStatus::Idle;
        self.loading_started = false;
        self.bytes_loaded = 0;
        self.total_bytes = DEFAULT_TOTAL_BYTES;
        self.phase = Phase::Loading;
    }

    /// Show a transient message; [`poll_status`](Self::poll_status) clears it
    /// once [`STATUS_MESSAGE_TTL`] has elapsed.
    pub fn show_status(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(StatusMessage {
            text: text.into(),
            clear_at: now + STATUS_MESSAGE_TTL,
        });
    }

    /// Clear the status message once its TTL has elapsed.
    pub fn poll_status(&mut self, now: Instant) {
        if let Some(message) = &self.message
            && now >= message.clear_at
        {
            self.message = None;
        }
    }

    /// Online/offline indicator. Orthogonal to the fetch lifecycle: flipping
    /// it never blocks or cancels an in-flight fetch.
    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    fn panel_call(&mut self, op: &str, call: impl FnOnce(&mut P) -> Result<(), PanelError>) {
        if let Err(error) = call(&mut self.panel) {
            warn!(%error, op, "viewer panel update skipped");
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.status
    }

    /// Whether the viewer UI is shown (vs. the welcome placeholder).
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn online(&self) -> bool {
        self.online
    }

    pub fn layout(&self) -> &LayoutPlan {
        &self.layout
    }

    /// Locator the next or current fetch attempt targets.
    pub fn active_locator(&self) -> Option<&SourceLocator> {
        self.params.primary()
    }

    pub fn bytes_loaded(&self) -> u64 {
        self.bytes_loaded
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Current status message text, if one is showing.
    pub fn status_message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }
}
