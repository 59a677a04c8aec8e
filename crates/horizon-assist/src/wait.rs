//! Bounded blocking for the short initialization round-trips.
//!
//! Session setup makes a small number of request/reply exchanges with the
//! bus broker; those may block briefly, then must give up. This is
//! pollster's park-based executor with a deadline bolted on: the future
//! is polled on the calling thread, socket readiness wakes us through the
//! reactor, and expiry drops (cancels) the future.

use std::future::Future;
use std::pin::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

struct ThreadWaker(Thread);

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.0.unpark();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.0.unpark();
    }
}

/// Drive `future` on the current thread until it completes or `deadline`
/// elapses. Returns `None` on expiry.
pub(crate) fn block_on_deadline<F: Future>(future: F, deadline: Duration) -> Option<F::Output> {
    let expiry = Instant::now() + deadline;
    let waker = Waker::from(Arc::new(ThreadWaker(thread::current())));
    let mut cx = Context::from_waker(&waker);
    let mut future = pin!(future);

    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return Some(output);
        }
        let now = Instant::now();
        if now >= expiry {
            return None;
        }
        // Spurious unparks just loop back into poll.
        thread::park_timeout(expiry - now);
    }
}
