//! Background requests.
//!
//! A job runs on its own thread and reports back over a channel that the
//! UI polls once per frame. Dropping the [`PendingRequest`] cancels it: the
//! worker still finishes, but its result has nowhere to go.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use log::{debug, warn};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
pub enum Poll<T> {
    Pending,
    Done(T),
    /// The worker went away without answering.
    Lost,
}

#[derive(Debug)]
pub struct PendingRequest<T> {
    id: u64,
    rx: Receiver<T>,
}

impl<T: Send + 'static> PendingRequest<T> {
    /// Runs `job` on a worker thread, repainting `repaint` when it finishes.
    pub fn spawn<F>(label: &str, repaint: Option<egui::Context>, job: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let pending = Self::new(rx);
        let id = pending.id;
        let label = label.to_string();

        std::thread::spawn(move || {
            let result = job();
            if tx.send(result).is_err() {
                debug!("request #{id} ({label}) finished after being cancelled");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        debug!("request #{id} started");
        pending
    }
}

impl<T> PendingRequest<T> {
    pub fn new(rx: Receiver<T>) -> Self {
        Self {
            id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            rx,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn poll(&self) -> Poll<T> {
        match self.rx.try_recv() {
            Ok(value) => Poll::Done(value),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => {
                warn!("request #{} lost its worker", self.id);
                Poll::Lost
            }
        }
    }
}

/// Polls the request held in `slot`, clearing the slot once it settles.
/// `Some(None)` means the worker was lost.
pub fn take_finished<T>(slot: &mut Option<PendingRequest<T>>) -> Option<Option<T>> {
    let outcome = match slot.as_ref()?.poll() {
        Poll::Pending => return None,
        Poll::Done(value) => Some(value),
        Poll::Lost => None,
    };
    *slot = None;
    Some(outcome)
}
