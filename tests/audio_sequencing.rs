use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use vocabot::audio::{
    spawn_delivery_worker, AudioRequest, AudioTransport, SequencerConfig, TrackStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Acknowledged(u8),
    Delivered(u8),
    Missing(u8),
}

#[derive(Clone, Default)]
struct RecordingTransport {
    events: Arc<Mutex<Vec<Event>>>,
}

#[async_trait]
impl AudioTransport for RecordingTransport {
    type Requester = u8;

    async fn acknowledge(&self, requester: &u8) -> Result<()> {
        self.events.lock().await.push(Event::Acknowledged(*requester));
        Ok(())
    }

    async fn send_track(&self, _requester: &u8, track: u8, _content: Vec<u8>) -> Result<()> {
        self.events.lock().await.push(Event::Delivered(track));
        Ok(())
    }

    async fn send_missing(&self, _requester: &u8, track: u8) -> Result<()> {
        self.events.lock().await.push(Event::Missing(track));
        Ok(())
    }

    async fn send_failed(&self, _requester: &u8, _track: u8) -> Result<()> {
        Ok(())
    }
}

fn store_with_tracks(dir: &tempfile::TempDir, tracks: &[u8]) -> TrackStore {
    for track in tracks {
        std::fs::write(dir.path().join(TrackStore::file_name(*track)), b"bytes")
            .expect("write track");
    }
    TrackStore::new(dir.path())
}

fn fast_config() -> SequencerConfig {
    SequencerConfig {
        send_delay: Duration::from_millis(5),
    }
}

#[tokio::test]
async fn sequential_enqueues_complete_in_fifo_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_with_tracks(&dir, &[1, 2, 3, 4]);
    let transport = RecordingTransport::default();
    let events = transport.events.clone();

    let (sequencer, worker) = spawn_delivery_worker(transport, store, fast_config());
    for track in [4, 2, 3, 1] {
        sequencer.enqueue(AudioRequest {
            requester: track,
            track,
        });
    }
    drop(sequencer);
    worker.await.expect("worker");

    let events = events.lock().await;
    assert_eq!(
        *events,
        vec![
            Event::Acknowledged(4),
            Event::Delivered(4),
            Event::Acknowledged(2),
            Event::Delivered(2),
            Event::Acknowledged(3),
            Event::Delivered(3),
            Event::Acknowledged(1),
            Event::Delivered(1),
        ]
    );
}

#[tokio::test]
async fn concurrent_enqueues_are_processed_exactly_once_without_overlap() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Track 2 has no backing file, so one of the three requests must end
    // with a not-found outcome instead of a delivery.
    let store = store_with_tracks(&dir, &[1, 3]);
    let transport = RecordingTransport::default();
    let events = transport.events.clone();

    let (sequencer, worker) = spawn_delivery_worker(transport, store, fast_config());
    let sequencer = Arc::new(sequencer);

    let mut enqueues = Vec::new();
    for track in [1, 2, 3] {
        let sequencer = Arc::clone(&sequencer);
        enqueues.push(tokio::spawn(async move {
            sequencer.enqueue(AudioRequest {
                requester: track,
                track,
            });
        }));
    }
    for enqueue in enqueues {
        enqueue.await.expect("enqueue task");
    }
    drop(sequencer);
    worker.await.expect("worker");

    let events = events.lock().await;

    // Exactly N acknowledgments and N terminal outcomes.
    assert_eq!(events.len(), 6);

    // No overlap: each acknowledgment is immediately followed by its own
    // terminal outcome before the next request is acknowledged.
    for pair in events.chunks(2) {
        let Event::Acknowledged(acked) = pair[0] else {
            panic!("expected acknowledgment, got {:?}", pair[0]);
        };
        match pair[1] {
            Event::Delivered(track) | Event::Missing(track) => assert_eq!(acked, track),
            Event::Acknowledged(_) => panic!("overlapping acknowledgments: {events:?}"),
        }
    }

    // Every request was processed exactly once, with the right outcome.
    let mut acked: Vec<u8> = events
        .iter()
        .filter_map(|event| match event {
            Event::Acknowledged(track) => Some(*track),
            _ => None,
        })
        .collect();
    acked.sort_unstable();
    assert_eq!(acked, vec![1, 2, 3]);
    assert!(events.contains(&Event::Delivered(1)));
    assert!(events.contains(&Event::Missing(2)));
    assert!(events.contains(&Event::Delivered(3)));
}
