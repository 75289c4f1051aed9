//! Mapping from DOM input events to controller inputs.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;
use phoenix_core::{CloseRequest, LightboxKey};

/// Keys the lightbox understands.
pub fn lightbox_key(key: &Key) -> LightboxKey {
    match key {
        Key::Escape => LightboxKey::Escape,
        Key::ArrowLeft => LightboxKey::ArrowLeft,
        Key::ArrowRight => LightboxKey::ArrowRight,
        _ => LightboxKey::Other,
    }
}

/// Run `finish` after a deferred close's grace period.
pub fn schedule_close<F>(request: CloseRequest, finish: F)
where
    F: FnOnce(phoenix_core::CloseToken) + 'static,
{
    if let CloseRequest::Deferred { delay, token } = request {
        spawn(async move {
            tokio::time::sleep(delay).await;
            finish(token);
        });
    }
}

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Unique DOM id for elements scripts need to find.
pub fn element_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Orders async DOM reads fired by a stream of events.
///
/// Each read takes a ticket before its first await. Only the newest ticket
/// may apply its result, so a slow read never overwrites a newer one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSeq {
    latest: u64,
}

impl MeasureSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
