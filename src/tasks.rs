//! Fire-and-forget worker threads that must finish before the process exits

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Default)]
struct Inner {
    count: Mutex<usize>,
    cv: Condvar,
    panicked: AtomicUsize,
}

/// Tracks detached tasks so `main` can wait for them before tearing down.
///
/// Clones share the same counter.
#[derive(Clone, Default)]
pub struct DetachedTasks {
    inner: Arc<Inner>,
}

/// Decrements the counter when the task ends, including by panic.
struct TaskGuard {
    inner: Arc<Inner>,
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if thread::panicking() {
            self.inner.panicked.fetch_add(1, Ordering::SeqCst);
        }
        let mut count = self.inner.count.lock();
        *count -= 1;
        if *count == 0 {
            self.inner.cv.notify_all();
        }
    }
}

impl DetachedTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task<F>(&self, name: &str, task: F) -> std::io::Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        *self.inner.count.lock() += 1;
        let guard = TaskGuard {
            inner: Arc::clone(&self.inner),
        };

        let spawned = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let _guard = guard;
                task();
            });

        // On spawn failure the closure (and guard) is dropped, which undoes the count.
        spawned.map(|_| ())
    }

    pub fn pending(&self) -> usize {
        *self.inner.count.lock()
    }

    /// Number of tasks that ended by panicking.
    pub fn panicked(&self) -> usize {
        self.inner.panicked.load(Ordering::SeqCst)
    }

    pub fn wait_for_all(&self) {
        let mut count = self.inner.count.lock();
        while *count > 0 {
            self.inner.cv.wait(&mut count);
        }
    }

    /// Returns `true` if every task finished within `timeout`.
    pub fn wait_for_all_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut count = self.inner.count.lock();
        while *count > 0 {
            if self.inner.cv.wait_until(&mut count, deadline).timed_out() {
                return *count == 0;
            }
        }
        true
    }
}
