use std::time::Duration;

/// Blocking wait used for the post-reset settle time and ready backoff.
pub trait Delay {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<F: FnMut(Duration)> Delay for F {
    fn sleep(&mut self, duration: Duration) {
        self(duration)
    }
}
