//! Filesystem-backed audio track store.
//!
//! Tracks are flat files named `Track <n>.mp3` under a configured
//! directory, read fully into memory on demand.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced when reading a track from the store.
#[derive(Debug, Error)]
pub enum TrackStoreError {
    /// The backing file for the track does not exist.
    #[error("Audio track {track} not found")]
    NotFound {
        /// Requested track number.
        track: u8,
    },
    /// Any other I/O failure while reading the track file.
    #[error("Failed to read audio track {track}: {source}")]
    Io {
        /// Requested track number.
        track: u8,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Read-only store of numbered audio tracks.
#[derive(Debug, Clone)]
pub struct TrackStore {
    dir: PathBuf,
}

impl TrackStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File name a track is stored (and delivered) under.
    #[must_use]
    pub fn file_name(track: u8) -> String {
        format!("Track {track}.mp3")
    }

    /// Read the full contents of a track file.
    ///
    /// # Errors
    ///
    /// Returns [`TrackStoreError::NotFound`] if the backing file is absent,
    /// or [`TrackStoreError::Io`] for any other read failure.
    pub async fn read_track(&self, track: u8) -> Result<Vec<u8>, TrackStoreError> {
        let path = self.dir.join(Self::file_name(track));
        tokio::fs::read(&path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TrackStoreError::NotFound { track }
            } else {
                TrackStoreError::Io { track, source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_existing_track() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Track 7.mp3"), b"mp3-bytes").expect("write track");

        let store = TrackStore::new(dir.path());
        let content = store.read_track(7).await.expect("track should be read");
        assert_eq!(content, b"mp3-bytes");
    }

    #[tokio::test]
    async fn unreadable_track_maps_to_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory under the track's name fails to read, but not with
        // NotFound.
        std::fs::create_dir(dir.path().join("Track 3.mp3")).expect("create dir");

        let store = TrackStore::new(dir.path());
        let err = store.read_track(3).await.expect_err("directory is unreadable");
        assert!(matches!(err, TrackStoreError::Io { track: 3, .. }));
    }

    #[tokio::test]
    async fn missing_track_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TrackStore::new(dir.path());

        let err = store.read_track(12).await.expect_err("track is absent");
        assert!(matches!(err, TrackStoreError::NotFound { track: 12 }));
    }
}
