//! Synthetic streaming text for the demo.
//!
//! Produces short random chunks at random intervals on a background thread
//! and hands each one to the owning context over a channel.

use crate::model::TimerError;
use crate::source::worker::Worker;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::Sender;
use std::time::Duration;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Probability a chunk ends with a space.
const SPACE_PROBABILITY: f64 = 0.68;
/// Probability a chunk ends with a line break.
const NEWLINE_PROBABILITY: f64 = 0.15;
/// Probability a line break is doubled into a paragraph break.
const PARAGRAPH_PROBABILITY: f64 = 0.3;

/// Produce one chunk: 1-10 distinct alphanumerics, maybe followed by
/// whitespace.
pub fn next_chunk<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(1..=10);
    let mut chunk: String = ALPHABET
        .choose_multiple(rng, count)
        .map(|&b| char::from(b))
        .collect();

    if rng.gen_bool(SPACE_PROBABILITY) {
        chunk.push(' ');
    }
    if rng.gen_bool(NEWLINE_PROBABILITY) {
        chunk.push('\n');
        if rng.gen_bool(PARAGRAPH_PROBABILITY) {
            chunk.push('\n');
        }
    }
    chunk
}

/// Delay before the next chunk: 1-650 ms.
pub fn next_delay<R: Rng>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(1..=650))
}

/// Delay before an automatic follow-up message: 1.5-10 s.
pub fn auto_next_delay<R: Rng>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(1_500..=10_000))
}

/// Running generator. Stops when dropped or when the receiver goes away.
#[derive(Debug)]
pub struct ContentGenerator {
    worker: Worker,
}

impl ContentGenerator {
    /// Start streaming chunks, each wrapped by `to_event`, into `tx`.
    ///
    /// # Errors
    ///
    /// [`TimerError::Spawn`] if the thread cannot be created.
    pub fn start<E, F>(tx: Sender<E>, to_event: F) -> Result<Self, TimerError>
    where
        E: Send + 'static,
        F: Fn(String) -> E + Send + 'static,
    {
        Self::start_with_rng(StdRng::from_entropy(), tx, to_event)
    }

    /// Like [`ContentGenerator::start`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// [`TimerError::Spawn`] if the thread cannot be created.
    pub fn start_with_rng<E, F>(mut rng: StdRng, tx: Sender<E>, to_event: F) -> Result<Self, TimerError>
    where
        E: Send + 'static,
        F: Fn(String) -> E + Send + 'static,
    {
        let worker = Worker::spawn("content-generator", move |stop| {
            while stop.sleep(next_delay(&mut rng)) {
                if tx.send(to_event(next_chunk(&mut rng))).is_err() {
                    break;
                }
            }
        })?;
        Ok(Self { worker })
    }

    /// Whether chunks are still being produced.
    pub fn is_generating(&self) -> bool {
        self.worker.is_running()
    }
}
