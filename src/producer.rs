//! Background sample producer
//!
//! A [`Producer`] pairs one distribution clone with one privately seeded
//! engine and one worker thread. The worker fills the producer's owned
//! chunk whenever it is empty; the consumer trades its drained chunk for
//! the full one through [`Producer::swap_chunk`].
//!
//! # Synchronization
//!
//! The owned chunk's full/empty state is the only handshake signal between
//! the worker and the swap call. Both sides wait and notify on a single
//! condition variable guarded by the producer's mutex, so exactly one side
//! touches the chunk at a time:
//!
//! - worker: wait until chunk empty (or shutdown), fill, notify
//! - swap: wait until chunk full (or shutdown), exchange, notify
//!
//! Dropping a producer flips the shutdown flag, wakes the worker, and
//! joins it. A swap racing a shutdown resolves to
//! [`Error::ProducerShutdown`] instead of hanging.

use crate::chunk::Chunk;
use crate::error::Error;
use crate::Result;
use rand::distributions::Distribution;
use rand::{RngCore, SeedableRng};
use std::mem;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use tracing::trace;

/// Chunk slot plus shutdown flag, guarded by the producer's mutex
struct Slot<T> {
    chunk: Chunk<T>,
    shutdown: bool,
}

/// State shared between the worker thread and the consumer-facing API
struct Shared<T> {
    slot: Mutex<Slot<T>>,
    cond: Condvar,
}

/// Background producer owning one chunk and one worker thread
///
/// Engine and distribution state live inside the worker thread and are
/// never shared; the derived child seed fully determines the producer's
/// sample stream.
pub struct Producer<T> {
    shared: Arc<Shared<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Producer<T> {
    /// Start a producer whose worker immediately begins filling its chunk
    ///
    /// The engine is constructed inside the worker thread from `seed`, so
    /// no random state ever crosses threads.
    pub fn new<D, R>(distribution: D, seed: u64, capacity: usize) -> Self
    where
        D: Distribution<T> + Send + 'static,
        R: RngCore + SeedableRng + 'static,
    {
        let shared = Arc::new(Shared {
            slot: Mutex::new(Slot {
                chunk: Chunk::new(capacity),
                shutdown: false,
            }),
            cond: Condvar::new(),
        });

        let worker = Arc::clone(&shared);
        let handle = thread::spawn(move || {
            let engine = R::seed_from_u64(seed);
            run(worker, distribution, engine);
        });

        Self {
            shared,
            handle: Some(handle),
        }
    }

    /// Spawn `count` producers with child seeds derived from a root engine
    ///
    /// The root engine is seeded with `seed` and drawn once per producer,
    /// in storage order. This ordered derivation is what makes the whole
    /// cache reproducible for a given (seed, producer count) pair.
    pub fn spawn_group<D, R>(
        distribution: &D,
        seed: u64,
        count: usize,
        capacity: usize,
    ) -> Vec<Self>
    where
        D: Distribution<T> + Clone + Send + 'static,
        R: RngCore + SeedableRng + 'static,
    {
        trace!(count, capacity, "spawning producer group");

        let mut root = R::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let child_seed = root.next_u64();
                Self::new::<D, R>(distribution.clone(), child_seed, capacity)
            })
            .collect()
    }
}

impl<T> Producer<T> {
    /// Trade the caller's drained chunk for this producer's full one
    ///
    /// Blocks until the worker has finished filling. On success the caller
    /// holds a full chunk and the worker begins refilling the chunk it
    /// received in exchange.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProducerShutdown`] if the producer was shut down
    /// before or while waiting; no exchange happens in that case.
    pub fn swap_chunk(&self, active: &mut Chunk<T>) -> Result<()> {
        {
            let mut slot = self.shared.slot.lock().unwrap();
            while !(slot.shutdown || slot.chunk.is_full()) {
                slot = self.shared.cond.wait(slot).unwrap();
            }
            if slot.shutdown {
                return Err(Error::ProducerShutdown);
            }
            mem::swap(&mut slot.chunk, active);
        }
        self.shared.cond.notify_one();

        Ok(())
    }

    /// Signal shutdown, wake the worker, and join it
    fn stop(&mut self) {
        {
            // A worker that panicked mid-fill leaves the mutex poisoned;
            // shutdown must still complete so the thread can be joined.
            let mut slot = match self.shared.slot.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            slot.shutdown = true;
        }
        self.shared.cond.notify_all();

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl<T> Drop for Producer<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop: wait for an empty chunk, refill it, signal, repeat
fn run<T, D, R>(shared: Arc<Shared<T>>, distribution: D, mut engine: R)
where
    D: Distribution<T>,
    R: RngCore,
{
    trace!("producer worker started");

    loop {
        {
            let mut slot = shared.slot.lock().unwrap();
            while !(slot.shutdown || slot.chunk.is_empty()) {
                slot = shared.cond.wait(slot).unwrap();
            }
            if slot.shutdown {
                trace!("producer worker shutting down");
                return;
            }
            slot.chunk.fill(|| distribution.sample(&mut engine));
        }
        shared.cond.notify_one();
    }
}
