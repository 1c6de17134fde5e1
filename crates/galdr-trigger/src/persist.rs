use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::store::{lock_shared, SharedTriggerStore};

enum Job {
    Save,
    Flush(SyncSender<()>),
    Shutdown,
}

/// Dedicated worker that flushes the trigger store to disk off the
/// command-processing context. Callers get no synchronous success
/// signal — only log entries, plus corrective eviction inside
/// `save_all`. Queued save requests coalesce.
pub struct PersistenceWorker {
    tx: Sender<Job>,
    handle: Option<JoinHandle<()>>,
}

impl PersistenceWorker {
    pub fn spawn(store: SharedTriggerStore) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name("galdr-persist".to_string())
            .spawn(move || run(store, rx))?;
        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    /// Queue a full persistence pass. Never blocks on disk I/O.
    pub fn schedule_save(&self) {
        if self.tx.send(Job::Save).is_err() {
            warn!("persistence worker is gone; save request dropped");
        }
    }

    /// Block until every previously queued save has run.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::sync_channel(1);
        if self.tx.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for PersistenceWorker {
    fn drop(&mut self) {
        // Drain pending saves, then stop.
        let _ = self.tx.send(Job::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(store: SharedTriggerStore, rx: Receiver<Job>) {
    while let Ok(job) = rx.recv() {
        let mut save = false;
        let mut shutdown = false;
        let mut acks: Vec<SyncSender<()>> = Vec::new();

        for job in std::iter::once(job).chain(rx.try_iter()) {
            match job {
                Job::Save => save = true,
                Job::Flush(ack) => acks.push(ack),
                Job::Shutdown => shutdown = true,
            }
        }

        if save {
            let mut store = lock_shared(&store);
            let evicted = store.save_all();
            if evicted.is_empty() {
                debug!("persisted {} command trigger(s)", store.len());
            } else {
                warn!(
                    "evicted {} command trigger(s) whose writes failed: {:?}",
                    evicted.len(),
                    evicted
                );
            }
        }
        for ack in acks {
            let _ = ack.send(());
        }
        if shutdown {
            return;
        }
    }
}
