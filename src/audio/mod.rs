//! Audio track storage and sequenced delivery.

/// Single-consumer delivery queue for audio requests
pub mod sequencer;
/// Filesystem-backed track store
pub mod store;

pub use sequencer::{
    run_delivery_loop, spawn_delivery_worker, AudioRequest, AudioSequencer, AudioTransport,
    SequencerConfig,
};
pub use store::{TrackStore, TrackStoreError};
