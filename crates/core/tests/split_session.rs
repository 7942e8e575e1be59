//! End-to-end flow over the public API: parameters → layout → one
//! independent session per split region.

use std::time::Instant;

use traceview_api::{FetchProgress, PanelError, ViewerPanel};
use traceview_core::layout::LayoutPlan;
use traceview_core::params::SessionParams;
use traceview_core::session::{FetchOutcome, Phase, ViewerSession};

#[derive(Debug, Default)]
struct CountingPanel {
    started: usize,
}

impl ViewerPanel for CountingPanel {
    fn loading_started(&mut self) -> Result<(), PanelError> {
        self.started += 1;
        Ok(())
    }

    fn loading_progress(&mut self, _fraction: f64) -> Result<(), PanelError> {
        Ok(())
    }

    fn load_complete(&mut self, _payload: &[u8]) -> Result<(), PanelError> {
        Ok(())
    }
}

#[test]
fn two_urls_make_two_independent_sub_sessions() {
    let params = SessionParams::from_query(
        "?loadTimelineFromURL=https://a.com/1.json&loadTimelineFromURL=https://a.com/2.json",
    );
    let plan = traceview_core::layout::select(params.locators());
    let LayoutPlan::Split { regions } = plan else {
        panic!("two locators must select the split layout");
    };
    assert_eq!(regions.len(), 2);
    for region in &regions {
        assert!((region.share_percent - 50.0).abs() < f64::EPSILON);
    }

    // Each region re-enters the whole flow with only its own locator.
    let mut sessions: Vec<ViewerSession<CountingPanel>> = regions
        .iter()
        .map(|region| {
            let sub = SessionParams::from_query(
                region
                    .sub_session_url()
                    .trim_start_matches("./?"),
            );
            assert_eq!(sub.len(), 1);
            ViewerSession::new(sub, true, CountingPanel::default())
        })
        .collect();

    let now = Instant::now();

    // First region succeeds, second fails; neither observes the other.
    let first = sessions[0].begin_fetch().unwrap();
    sessions[0].on_progress(
        first,
        FetchProgress {
            loaded: 42,
            total: Some(42),
        },
    );
    sessions[0].on_complete(first, FetchOutcome::Success { payload: vec![1] }, now);

    let second = sessions[1].begin_fetch().unwrap();
    sessions[1].on_complete(
        second,
        FetchOutcome::Failure {
            message: "http status 500".to_owned(),
        },
        now,
    );

    assert_eq!(sessions[0].phase(), Phase::Ready);
    assert!(sessions[0].visible());
    assert_eq!(sessions[0].panel().started, 1);

    assert_eq!(sessions[1].phase(), Phase::Welcome);
    assert!(!sessions[1].visible());
    assert!(sessions[1].status_message().is_some());
    assert_eq!(sessions[0].status_message(), None);
}

#[test]
fn single_url_keeps_the_single_layout() {
    let params = SessionParams::from_query("?loadTimelineFromURL=https://a.com/t.json");
    let plan = traceview_core::layout::select(params.locators());
    assert!(!plan.is_split());

    let mut session = ViewerSession::new(params, true, CountingPanel::default());
    let ticket = session.begin_fetch().unwrap();
    session.on_complete(
        ticket,
        FetchOutcome::Success { payload: vec![1] },
        Instant::now(),
    );
    assert_eq!(session.phase(), Phase::Ready);
}
