use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown inline to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Default)]
struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Transient status message owned by one view.
///
/// Each `show` replaces the visible message and restarts its expiry timer.
/// The previous timer is aborted, and so is any pending timer when the
/// notice is dropped.
pub struct StatusNotice {
    ttl: Duration,
    slot: Arc<Mutex<NoticeSlot>>,
}

impl StatusNotice {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(Mutex::new(NoticeSlot::default())),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Display `text` until `ttl` elapses or another message replaces it.
    ///
    /// Outside a tokio runtime the message stays until replaced or cleared.
    pub fn show(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut slot = self.slot.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = Some(Notice {
            kind,
            text: text.into(),
        });

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let generation = slot.generation;
                let weak = Arc::downgrade(&self.slot);
                let ttl = self.ttl;
                slot.timer = Some(handle.spawn(expire_after(weak, generation, ttl)));
            }
            Err(_) => warn!("no tokio runtime; status notice will not expire on its own"),
        }
    }

    pub fn clear(&self) {
        let mut slot = self.slot.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = None;
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.lock().current.clone()
    }
}

impl Drop for StatusNotice {
    fn drop(&mut self) {
        if let Some(timer) = self.slot.lock().timer.take() {
            timer.abort();
        }
    }
}

async fn expire_after(slot: Weak<Mutex<NoticeSlot>>, generation: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    if let Some(slot) = slot.upgrade() {
        let mut slot = slot.lock();
        // A newer message owns the slot now.
        if slot.generation == generation {
            slot.current = None;
            slot.timer = None;
        }
    }
}
