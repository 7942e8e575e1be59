use std::collections::HashMap;

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tracing::{debug, warn};
use traceview_api::FetchProgress;
use traceview_core::locator::{Provider, SourceLocator};
use traceview_core::rewrite;

use crate::error::FetchError;

/// Raw response for one fetched asset.
#[derive(Debug, Clone)]
pub struct Asset {
    status: u16,
    body: Bytes,
}

impl Asset {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Retrieves trace assets, applying provider rewrites and reporting
/// per-chunk progress.
///
/// Network locators are rewritten (see [`traceview_core::rewrite`]) and
/// streamed over HTTP. Drive-backed locators resolve from payloads
/// registered ahead of time with [`insert_payload`](Self::insert_payload),
/// without a network call.
pub struct AssetFetcher {
    client: reqwest::Client,
    drive_payloads: HashMap<String, Bytes>,
}

impl AssetFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            drive_payloads: HashMap::new(),
        }
    }

    /// Register an in-memory payload for a drive-backed locator.
    pub fn insert_payload(&mut self, id: impl Into<String>, payload: impl Into<Bytes>) {
        self.drive_payloads.insert(id.into(), payload.into());
    }

    /// Fetch one asset.
    ///
    /// `on_progress` is called at the transport's chunk granularity, with the
    /// response content length as `total` when the server sent one. All
    /// failure paths, including a malformed locator, resolve to a
    /// [`FetchError`] value.
    pub async fn fetch(
        &self,
        locator: &SourceLocator,
        mut on_progress: impl FnMut(FetchProgress),
    ) -> Result<Asset, FetchError> {
        match locator.provider() {
            Provider::Drive { id } => {
                let Some(payload) = self.drive_payloads.get(id) else {
                    return Err(FetchError::MissingPayload { id: id.to_owned() });
                };
                let len = payload.len() as u64;
                on_progress(FetchProgress {
                    loaded: len,
                    total: Some(len),
                });
                Ok(Asset {
                    status: 200,
                    body: payload.clone(),
                })
            }
            Provider::Url(raw) => self.fetch_url(raw, &mut on_progress).await,
        }
    }

    async fn fetch_url(
        &self,
        raw: &str,
        on_progress: &mut impl FnMut(FetchProgress),
    ) -> Result<Asset, FetchError> {
        let url = rewrite::rewrite(raw)?;
        debug!(%url, "fetching trace asset");

        let response = self.client.get(url).send().await.map_err(|source| {
            let status = source.status().map(|s| s.as_u16());
            FetchError::Transport { source, status }
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            warn!(status, "asset request rejected");
            return Err(FetchError::Status { status });
        }

        let total = response.content_length();
        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| FetchError::Transport {
                source,
                status: Some(status),
            })?;
            body.extend_from_slice(&chunk);
            on_progress(FetchProgress {
                loaded: body.len() as u64,
                total,
            });
        }

        Ok(Asset {
            status,
            body: body.freeze(),
        })
    }
}

impl Default for AssetFetcher {
    fn default() -> Self {
        Self::new()
    }
}
