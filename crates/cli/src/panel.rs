use traceview_api::{PanelError, ViewerPanel};

/// Panel adapter that reports loading state on the terminal log.
#[derive(Debug, Default)]
pub struct ConsolePanel {
    last_percent: Option<u32>,
}

impl ViewerPanel for ConsolePanel {
    fn loading_started(&mut self) -> Result<(), PanelError> {
        tracing::info!("loading started");
        Ok(())
    }

    fn loading_progress(&mut self, fraction: f64) -> Result<(), PanelError> {
        // One log line per whole percent, not per chunk.
        let percent = (fraction * 100.0) as u32;
        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            tracing::info!(percent, "loading");
        }
        Ok(())
    }

    fn load_complete(&mut self, payload: &[u8]) -> Result<(), PanelError> {
        tracing::info!(bytes = payload.len(), "load complete");
        Ok(())
    }
}
