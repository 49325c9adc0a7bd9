//! Sequenced audio delivery.
//!
//! Track requests from callback buttons are pushed onto an unbounded
//! channel and drained by a single worker task, so at most one delivery is
//! in flight at a time and requests complete in arrival order. Enqueuing
//! never blocks; the worker owns the acknowledgment, the fixed throttle
//! delay, the file read, and the terminal outcome for every request.

use crate::audio::store::{TrackStore, TrackStoreError};
use crate::config::AUDIO_SEND_DELAY_SECS;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// A single audio-fetch request taken from a callback button.
#[derive(Debug)]
pub struct AudioRequest<R> {
    /// Opaque handle identifying the originating interaction.
    pub requester: R,
    /// Track number. The routing layer only emits numbers in
    /// `1..=TRACK_COUNT`; the sequencer does not re-validate.
    pub track: u8,
}

/// Transport adapter used by the delivery worker.
#[async_trait]
pub trait AudioTransport: Send + Sync + 'static {
    /// Handle identifying the requester of a track.
    type Requester: Send + 'static;

    /// Send the transient "please wait" notice for a freshly dequeued request.
    async fn acknowledge(&self, requester: &Self::Requester) -> Result<()>;

    /// Deliver track bytes as an audio attachment captioned with the track number.
    async fn send_track(
        &self,
        requester: &Self::Requester,
        track: u8,
        content: Vec<u8>,
    ) -> Result<()>;

    /// Tell the requester the track has no backing file.
    async fn send_missing(&self, requester: &Self::Requester, track: u8) -> Result<()>;

    /// Tell the requester the delivery failed for an unexpected reason.
    async fn send_failed(&self, requester: &Self::Requester, track: u8) -> Result<()>;
}

/// Runtime configuration for the delivery worker.
#[derive(Debug, Clone, Copy)]
pub struct SequencerConfig {
    /// Fixed pause between the acknowledgment and the file read.
    pub send_delay: Duration,
}

impl SequencerConfig {
    /// Create a config with the default send delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            send_delay: Duration::from_secs(AUDIO_SEND_DELAY_SECS),
        }
    }

    #[cfg(test)]
    /// Override the send delay for tests.
    pub fn with_delay(mut self, send_delay: Duration) -> Self {
        self.send_delay = send_delay;
        self
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap enqueue handle for the delivery worker.
#[derive(Debug)]
pub struct AudioSequencer<R> {
    tx: UnboundedSender<AudioRequest<R>>,
}

impl<R: Send + 'static> AudioSequencer<R> {
    /// Append a request to the tail of the queue without blocking.
    ///
    /// The request is dropped (with an error log) if the delivery worker
    /// has stopped; delivery is best effort.
    pub fn enqueue(&self, request: AudioRequest<R>) {
        if let Err(e) = self.tx.send(request) {
            error!(
                track = e.0.track,
                "Delivery worker stopped; dropping audio request"
            );
        }
    }
}

/// Spawn the delivery worker on the Tokio runtime.
///
/// Returns the enqueue handle and the worker's join handle. The worker
/// runs until every enqueue handle has been dropped.
pub fn spawn_delivery_worker<T: AudioTransport>(
    transport: T,
    store: TrackStore,
    config: SequencerConfig,
) -> (AudioSequencer<T::Requester>, JoinHandle<()>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(run_delivery_loop(transport, store, rx, config));
    (AudioSequencer { tx }, worker)
}

/// Drain requests one at a time until the channel is closed.
///
/// Per request: acknowledge, wait the configured delay, read the track,
/// then deliver it or report the miss. No outcome terminates the loop;
/// failure containment between requests is the core guarantee here.
pub async fn run_delivery_loop<T: AudioTransport>(
    transport: T,
    store: TrackStore,
    mut rx: UnboundedReceiver<AudioRequest<T::Requester>>,
    config: SequencerConfig,
) {
    while let Some(request) = rx.recv().await {
        let track = request.track;

        if let Err(e) = transport.acknowledge(&request.requester).await {
            warn!(track, error = %e, "Failed to acknowledge audio request");
        }

        // Throttle between the notice and the upload.
        tokio::time::sleep(config.send_delay).await;

        match store.read_track(track).await {
            Ok(content) => {
                if let Err(e) = transport.send_track(&request.requester, track, content).await {
                    warn!(track, error = %e, "Audio delivery failed");
                }
            }
            Err(TrackStoreError::NotFound { .. }) => {
                info!(track, "Requested track has no backing file");
                if let Err(e) = transport.send_missing(&request.requester, track).await {
                    warn!(track, error = %e, "Failed to send missing-track notice");
                }
            }
            Err(e) => {
                error!(track, error = %e, "Track read failed");
                if let Err(e) = transport.send_failed(&request.requester, track).await {
                    warn!(track, error = %e, "Failed to send delivery-failure notice");
                }
            }
        }
    }
}
