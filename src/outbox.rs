//! Where a finished contact draft goes. The form component only sees the
//! `ContactOutbox` trait, so the simulated sender can be swapped for a real
//! network client (or a test double) without touching the form.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config;
use crate::state::form::ContactDraft;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutboxError {
    #[error("pengiriman pesan gagal: {0}")]
    Delivery(String),
}

pub type DeliveryFuture = Pin<Box<dyn Future<Output = Result<(), OutboxError>>>>;

pub trait ContactOutbox {
    fn deliver(&self, draft: ContactDraft) -> DeliveryFuture;
}

/// Stand-in for a real submission endpoint: waits the configured latency,
/// then logs the payload and reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedOutbox {
    pub latency_ms: u32,
}

impl Default for SimulatedOutbox {
    fn default() -> Self {
        Self {
            latency_ms: config::DELIVERY_LATENCY_MS,
        }
    }
}

impl ContactOutbox for SimulatedOutbox {
    fn deliver(&self, draft: ContactDraft) -> DeliveryFuture {
        let latency_ms = self.latency_ms;
        Box::pin(async move {
            TimeoutFuture::new(latency_ms).await;
            match serde_json::to_string(&draft) {
                Ok(payload) => log::info!("contact form submitted: {payload}"),
                Err(err) => return Err(OutboxError::Delivery(err.to_string())),
            }
            Ok(())
        })
    }
}

/// Cloneable prop wrapper around a shared outbox. Equality is identity, so
/// a memoized outbox never forces a form re-render.
#[derive(Clone)]
pub struct OutboxHandle(Rc<dyn ContactOutbox>);

impl OutboxHandle {
    pub fn new(outbox: impl ContactOutbox + 'static) -> Self {
        Self(Rc::new(outbox))
    }

    pub fn deliver(&self, draft: ContactDraft) -> DeliveryFuture {
        self.0.deliver(draft)
    }
}

impl Default for OutboxHandle {
    fn default() -> Self {
        Self::new(SimulatedOutbox::default())
    }
}

impl PartialEq for OutboxHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OutboxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OutboxHandle")
    }
}

#[cfg(test)]
mod tests {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    use super::*;

    struct FailingOutbox;

    impl ContactOutbox for FailingOutbox {
        fn deliver(&self, _draft: ContactDraft) -> DeliveryFuture {
            Box::pin(async { Err(OutboxError::Delivery("saluran terputus".into())) })
        }
    }

    struct ReadyOutbox;

    impl ContactOutbox for ReadyOutbox {
        fn deliver(&self, _draft: ContactDraft) -> DeliveryFuture {
            Box::pin(async { Ok(()) })
        }
    }

    fn noop_waker() -> Waker {
        const VTABLE: RawWakerVTable = RawWakerVTable::new(clone_raw, noop, noop, noop);
        unsafe fn clone_raw(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        unsafe fn noop(_: *const ()) {}
        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }

    fn poll_ready(mut future: DeliveryFuture) -> Result<(), OutboxError> {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(result) => result,
            Poll::Pending => panic!("delivery future should be immediately ready"),
        }
    }

    #[test]
    fn failed_delivery_surfaces_the_error() {
        let outbox = OutboxHandle::new(FailingOutbox);
        let result = poll_ready(outbox.deliver(ContactDraft::default()));
        match result {
            Err(OutboxError::Delivery(reason)) => assert_eq!(reason, "saluran terputus"),
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[test]
    fn swapped_outbox_drives_the_same_seam() {
        let outbox = OutboxHandle::new(ReadyOutbox);
        assert_eq!(poll_ready(outbox.deliver(ContactDraft::default())), Ok(()));
    }

    #[test]
    fn handle_equality_is_identity() {
        let a = OutboxHandle::new(FailingOutbox);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, OutboxHandle::new(FailingOutbox));
    }
}
