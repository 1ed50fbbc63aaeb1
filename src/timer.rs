use crate::clock;
use crate::ticker::TickSource;
use std::time::Duration;

/// Nominal spacing of ticks while the timer runs.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

const TICK_MILLIS: u64 = TICK_PERIOD.as_millis() as u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Stopped,
    Running,
}

/// A copy of the timer state handed to observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub elapsed_ms: u64,
    pub state: State,
}

impl Snapshot {
    pub fn new(elapsed_ms: u64, state: State) -> Self {
        Self { elapsed_ms, state }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn display(&self) -> String {
        clock::format(self.elapsed_ms)
    }
}

/// Stopwatch state machine.
///
/// A tick registration is held exactly while the timer is running: it is
/// acquired on the stopped to running edge and released on the way back,
/// including when the timer is dropped mid-run.
pub struct Timer<S: TickSource> {
    elapsed_ms: u64,
    source: S,
    handle: Option<S::Handle>,
}

impl<S: TickSource> Timer<S> {
    pub fn new(source: S) -> Self {
        Self {
            elapsed_ms: 0,
            source,
            handle: None,
        }
    }

    pub fn start(&mut self) {
        if self.handle.is_none() {
            self.handle = Some(self.source.acquire(TICK_PERIOD));
            tracing::debug!(elapsed_ms = self.elapsed_ms, "timer started");
        }
    }

    pub fn pause(&mut self) {
        if self.release() {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "timer paused");
        }
    }

    pub fn resume(&mut self) {
        self.start();
    }

    pub fn reset(&mut self) {
        self.release();
        self.elapsed_ms = 0;
        tracing::debug!("timer reset");
    }

    /// Advances the elapsed time by one period. Ticks that arrive after the
    /// registration was released are ignored.
    pub fn tick(&mut self) {
        if self.handle.is_none() {
            tracing::trace!("ignoring a tick while stopped");
            return;
        }

        self.elapsed_ms += TICK_MILLIS;
        tracing::trace!(elapsed_ms = self.elapsed_ms, "tick");
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn state(&self) -> State {
        if self.handle.is_some() {
            State::Running
        } else {
            State::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.elapsed_ms, self.state())
    }

    pub fn display(&self) -> String {
        clock::format(self.elapsed_ms)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The live tick registration, if running.
    pub fn handle_mut(&mut self) -> Option<&mut S::Handle> {
        self.handle.as_mut()
    }

    fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.source.release(handle);
                true
            }
            None => false,
        }
    }
}

impl<S: TickSource> Drop for Timer<S> {
    fn drop(&mut self) {
        if self.release() {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "released the tick source on teardown");
        }
    }
}
