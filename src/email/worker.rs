//! Background sending so the UI thread never blocks on HTTP.
//!
//! Each submission runs on its own thread and reports back over a channel
//! that the event loop drains on every tick.

use super::EmailDispatcher;
use crate::model::{ContactPayload, SendError};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Runs dispatches off the UI thread and queues their results.
pub struct SendWorker {
    dispatcher: Arc<dyn EmailDispatcher>,
    tx: Sender<Result<(), SendError>>,
    rx: Receiver<Result<(), SendError>>,
    in_flight: usize,
}

impl SendWorker {
    /// Worker sending through `dispatcher`.
    pub fn new(dispatcher: Arc<dyn EmailDispatcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            dispatcher,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// True while any dispatch has not reported back.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Dispatch `payload` on a new thread.
    pub fn submit(&mut self, payload: ContactPayload) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.tx.clone();
        self.in_flight += 1;
        debug!(in_flight = self.in_flight, "dispatching contact message");
        let spawned = thread::Builder::new()
            .name("folio-email".to_string())
            .spawn(move || {
                let result = dispatcher.send(&payload);
                // Receiver gone means the app is shutting down.
                let _ = tx.send(result);
            });
        if spawned.is_err() {
            let _ = self.tx.send(Err(SendError::WorkerGone));
        }
    }

    /// Next finished send, if any. Never blocks.
    pub fn try_recv(&mut self) -> Option<Result<(), SendError>> {
        // The worker holds its own sender, so the channel never disconnects.
        let result = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Unconfigured;
    use std::time::{Duration, Instant};

    struct Accepting;

    impl EmailDispatcher for Accepting {
        fn send(&self, _payload: &ContactPayload) -> Result<(), SendError> {
            Ok(())
        }
    }

    fn wait_for(worker: &mut SendWorker) -> Result<(), SendError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = worker.try_recv() {
                return result;
            }
            assert!(Instant::now() < deadline, "worker did not report back");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn idle_worker_has_nothing_to_report() {
        let mut worker = SendWorker::new(Arc::new(Accepting));
        assert!(!worker.is_busy());
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn reports_success() {
        let mut worker = SendWorker::new(Arc::new(Accepting));
        worker.submit(ContactPayload::default());
        assert!(worker.is_busy());
        assert!(wait_for(&mut worker).is_ok());
        assert!(!worker.is_busy());
    }

    #[test]
    fn reports_failure() {
        let mut worker = SendWorker::new(Arc::new(Unconfigured("service_id")));
        worker.submit(ContactPayload::default());
        let err = wait_for(&mut worker).unwrap_err();
        assert!(matches!(err, SendError::NotConfigured("service_id")));
    }
}
