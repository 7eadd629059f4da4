//! # Cart Notifier
//!
//! Timer-driven wrapper around the core [`Toast`] state machine. Showing a
//! toast arms a single-shot 3000 ms auto-dismiss; dismissal or a newer toast
//! cancels the pending timer.
//!
//! ## Timer Generations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Auto-Dismiss Timing                                  │
//! │                                                                         │
//! │  show(A)  gen=1  ── spawn sleep(3000) for gen 1                         │
//! │     │                                                                   │
//! │  show(B)  gen=2  ── gen-1 timer aborted, spawn sleep(3000) for gen 2    │
//! │     │                                                                   │
//! │  t+3000 from B ──► timer fires, gen matches ──► Hidden                  │
//! │                                                                         │
//! │  An expired timer whose generation no longer matches does nothing,      │
//! │  so a superseded toast can never hide its successor.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dropping the notifier (unmount) aborts any pending timer.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use shopfront_core::{Product, Toast, ToastContent, TOAST_DISMISS_MS};

/// Add-to-cart confirmation toast with auto-dismiss.
///
/// Requires a tokio runtime: `show` spawns the dismiss timer.
#[derive(Debug, Default)]
pub struct NotifierState {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    toast: Toast,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl NotifierState {
    /// Creates a hidden notifier.
    pub fn new() -> Self {
        NotifierState::default()
    }

    /// Shows the confirmation for an added product and arms the auto-dismiss.
    pub fn show(&self, product: &Product) {
        let mut inner = self.lock();
        inner.generation += 1;
        let generation = inner.generation;
        inner.toast.show(product);
        debug!(product = %product.name, "cart toast shown");

        if let Some(previous) = inner.timer.take() {
            previous.abort();
        }

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_DISMISS_MS)).await;
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().expect("Notifier mutex poisoned");
                if inner.generation == generation {
                    inner.toast.dismiss();
                    inner.timer = None;
                    debug!("cart toast auto-dismissed");
                }
            }
        }));
    }

    /// Explicitly dismisses the toast and cancels the pending timer.
    pub fn dismiss(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.toast.dismiss();
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }

    /// Whether the toast is currently visible.
    pub fn is_shown(&self) -> bool {
        self.lock().toast.is_shown()
    }

    /// The displayed content, if visible.
    pub fn content(&self) -> Option<ToastContent> {
        self.lock().toast.content().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("Notifier mutex poisoned")
    }
}

impl Drop for NotifierState {
    fn drop(&mut self) {
        // Cancel-on-unmount: a timer must not outlive its notifier.
        if let Some(timer) = self.lock().timer.take() {
            timer.abort();
        }
    }
}
