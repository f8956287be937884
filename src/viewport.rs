use crate::config::model::{PerViewport, ViewportConfig};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn classify(width: u32, narrow_breakpoint: u32) -> Self {
        if width < narrow_breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn pick<T: Copy>(self, values: PerViewport<T>) -> T {
        match self {
            ViewportClass::Narrow => values.narrow,
            ViewportClass::Wide => values.wide,
        }
    }
}

/// A task that runs once after a delay, unless cancelled or dropped first
#[derive(Debug)]
pub struct DelayedAction {
    handle: JoinHandle<()>,
}

impl DelayedAction {
    /// Must be called from within a tokio runtime
    pub fn schedule<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Coalesces bursts of resize notifications into a single classification,
/// sent once no resize happened for the configured quiet period.
pub struct ResizeDebouncer {
    config: ViewportConfig,
    sender: UnboundedSender<ViewportClass>,
    pending: Option<DelayedAction>,
}

impl ResizeDebouncer {
    pub fn new(config: ViewportConfig) -> (Self, UnboundedReceiver<ViewportClass>) {
        let (sender, receiver) = unbounded_channel();

        (
            Self {
                config,
                sender,
                pending: None,
            },
            receiver,
        )
    }

    pub fn notify_resize(&mut self, width: u32) {
        let class = ViewportClass::classify(width, self.config.narrow_breakpoint);
        let sender = self.sender.clone();

        trace!(width, %class, "Resize noticed");

        // Replacing the pending action drops, and so aborts, the previous one
        self.pending = Some(DelayedAction::schedule(
            self.config.resize_debounce,
            async move {
                debug!(%class, "Viewport settled");
                // The view may already be gone
                let _ = sender.send(class);
            },
        ));
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}
