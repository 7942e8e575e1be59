mod panel;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use traceview_core::layout::LayoutPlan;
use traceview_core::params::SessionParams;
use traceview_core::prefs::{self, MemoryStore};
use traceview_core::session::{FetchOutcome, Phase, ViewerSession};
use traceview_fetch::AssetFetcher;

use crate::panel::ConsolePanel;

struct Args {
    params: SessionParams,
    output: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut locators = Vec::new();
    let mut query: Option<String> = None;
    let mut output: Option<PathBuf> = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--query" => query = Some(iter.next()?),
            "-o" => output = Some(PathBuf::from(iter.next()?)),
            _ => locators.push(arg.as_str().into()),
        }
    }

    let params = match query {
        Some(q) => SessionParams::from_query(&q),
        None if locators.is_empty() => return None,
        None => SessionParams::from_locators(locators),
    };
    Some(Args { params, output })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(args) = parse_args() else {
        eprintln!("Usage: traceview [-o <file>] <url> [url2 ...]");
        eprintln!("       traceview [-o <file>] --query '<query-string>'");
        std::process::exit(1);
    };

    let mut session_store = MemoryStore::default();
    let mut page_store = MemoryStore::default();
    prefs::apply_startup_prefs(&mut session_store, &mut page_store)?;

    match traceview_core::layout::select(args.params.locators()) {
        LayoutPlan::Split { regions } => {
            if args.output.is_some() {
                warn!("-o applies to single sessions only; ignoring it for split view");
            }
            info!(regions = regions.len(), "split view");
            let mut handles = Vec::new();
            for region in regions {
                info!(
                    share = region.share_percent,
                    sub_session = %region.sub_session_url(),
                    "starting region"
                );
                let params = SessionParams::from_locators(vec![region.locator]);
                handles.push(tokio::spawn(run_single(params, None)));
            }
            for handle in handles {
                handle.await??;
            }
        }
        LayoutPlan::Single { .. } => run_single(args.params, args.output).await?,
    }
    Ok(())
}

/// One full session flow: Welcome → Loading → Ready (or back to Welcome).
async fn run_single(params: SessionParams, output: Option<PathBuf>) -> Result<()> {
    let fetcher = AssetFetcher::new();
    let mut session = ViewerSession::new(params, true, ConsolePanel::default());

    let Some(locator) = session.active_locator().cloned() else {
        info!("no trace locator supplied; staying on the welcome screen");
        return Ok(());
    };
    let Some(ticket) = session.begin_fetch() else {
        return Ok(());
    };

    let outcome = fetcher
        .fetch(&locator, |event| session.on_progress(ticket, event))
        .await;

    let now = Instant::now();
    match outcome {
        Ok(asset) => {
            info!(
                locator = %locator,
                status = asset.status(),
                bytes = asset.body().len(),
                "asset downloaded"
            );
            if let Some(path) = &output {
                std::fs::write(path, asset.body())?;
                info!(path = %path.display(), "asset written");
            }
            session.on_complete(
                ticket,
                FetchOutcome::Success {
                    payload: asset.body().to_vec(),
                },
                now,
            );
        }
        Err(error) => {
            session.on_complete(
                ticket,
                FetchOutcome::Failure {
                    message: error.to_string(),
                },
                now,
            );
        }
    }

    match session.phase() {
        Phase::Ready => info!(locator = %locator, "viewer ready"),
        _ => info!(
            status = session.status_message().unwrap_or_default(),
            "returned to welcome screen"
        ),
    }
    Ok(())
}
