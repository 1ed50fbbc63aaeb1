use crate::controls::Command;
use crate::ticker::IntervalSource;
use crate::timer::{Snapshot, Timer};
use tokio::sync::{mpsc, watch};
use tokio::time::Interval;

/// Receives every change of the timer state.
pub trait Observer {
    fn on_change(&self, snapshot: Snapshot);
}

impl Observer for watch::Sender<Snapshot> {
    fn on_change(&self, snapshot: Snapshot) {
        self.send_replace(snapshot);
    }
}

/// Drives a timer from a stream of commands until every command sender is dropped.
///
/// Commands and ticks are handled one at a time on the calling task. A ready
/// command always wins over a ready tick, and no tick can be observed once the
/// registration has been released.
pub async fn run<O: Observer>(mut commands: mpsc::Receiver<Command>, observer: O) -> Snapshot {
    let mut timer = Timer::new(IntervalSource::default());
    observer.on_change(timer.snapshot());

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(command) => {
                    tracing::debug!(?command, "received a command");
                    if !command.apply(&mut timer) {
                        continue;
                    }
                }
                None => break,
            },
            _ = next_tick(timer.handle_mut()) => timer.tick(),
        }

        observer.on_change(timer.snapshot());
    }

    tracing::debug!(elapsed_ms = timer.elapsed_ms(), "command channel closed, stopping the timer");

    timer.snapshot()
}

async fn next_tick(interval: Option<&mut Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
