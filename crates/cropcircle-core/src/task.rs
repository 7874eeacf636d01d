use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::error::{AvatarError, Result};

/// A one-shot computation running on a named worker thread.
///
/// The result is delivered exactly once, either through [`Pending::wait`] or
/// the first successful [`Pending::try_take`]. Dropping a `Pending` discards
/// the result; the worker itself runs to completion.
pub struct Pending<T> {
    generation: u64,
    rx: mpsc::Receiver<Result<T>>,
    _guard: Option<InFlight>,
}

/// Keeps a shared busy flag raised until dropped.
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    /// Raise `flag`, or return `None` if it is already raised.
    pub fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T: Send + 'static> Pending<T> {
    /// Spawn `job` on a new thread named `name`, tagged with `generation`.
    pub fn spawn<F>(name: &str, generation: u64, job: F) -> Result<Self>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        std::thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                let _ = tx.send(job());
            })?;

        Ok(Self {
            generation,
            rx,
            _guard: None,
        })
    }
}

impl<T> Pending<T> {
    /// Generation stamp given at spawn time.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Keep `guard` alive until this `Pending` is waited on or dropped.
    pub fn hold(mut self, guard: InFlight) -> Self {
        self._guard = Some(guard);
        self
    }

    /// Block until the worker finishes.
    pub fn wait(self) -> Result<T> {
        self.rx.recv().map_err(|_| disconnected())?
    }

    /// Return the result if the worker has finished, without blocking.
    pub fn try_take(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(disconnected())),
        }
    }
}

fn disconnected() -> AvatarError {
    AvatarError::Worker("worker thread exited without a result".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_returns_job_result() {
        let pending = Pending::spawn("test-worker", 7, || Ok(41 + 1)).unwrap();
        assert_eq!(pending.generation(), 7);
        assert_eq!(pending.wait().unwrap(), 42);
    }

    #[test]
    fn test_job_error_is_forwarded() {
        let pending: Pending<()> =
            Pending::spawn("test-worker", 0, || Err(AvatarError::Decode("bad".into()))).unwrap();
        assert!(matches!(pending.wait(), Err(AvatarError::Decode(_))));
    }

    #[test]
    fn test_panicking_job_reports_worker_error() {
        let pending: Pending<()> = Pending::spawn("test-worker", 0, || panic!("boom")).unwrap();
        assert!(matches!(pending.wait(), Err(AvatarError::Worker(_))));
    }

    #[test]
    fn test_try_take_eventually_yields() {
        let pending = Pending::spawn("test-worker", 0, || Ok("done")).unwrap();
        let result = loop {
            if let Some(r) = pending.try_take() {
                break r;
            }
            std::thread::yield_now();
        };
        assert_eq!(result.unwrap(), "done");
    }

    #[test]
    fn test_in_flight_flag_follows_pending_lifetime() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = InFlight::acquire(&flag).unwrap();
        assert!(InFlight::acquire(&flag).is_none());

        let pending = Pending::spawn("test-worker", 0, || Ok(1)).unwrap().hold(guard);
        assert!(flag.load(Ordering::Acquire));
        drop(pending);
        assert!(!flag.load(Ordering::Acquire));

        let guard = InFlight::acquire(&flag).unwrap();
        let pending = Pending::spawn("test-worker", 0, || Ok(2)).unwrap().hold(guard);
        assert_eq!(pending.wait().unwrap(), 2);
        assert!(!flag.load(Ordering::Acquire));
    }
}
