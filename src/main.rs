mod cli;

use crate::cli::Arguments;
use clap::Parser;
use std::io;
use stopwatch::clock::Clock;
use stopwatch::console::{self, Screen};
use stopwatch::timer::Snapshot;
use tokio::sync::mpsc;
use tracing_log::LogTracer;

fn main() {
    let arguments = cli::Arguments::parse();
    if let Err(e) = set_log_level(&arguments) {
        eprintln!("Failed to configure logging: {e}");
        std::process::exit(1);
    }

    tracing::debug!(?arguments, "starting the stopwatch");

    match run(arguments) {
        Ok(snapshot) => {
            tracing::info!(elapsed = %Clock(snapshot.elapsed_ms), "stopwatch closed");
        }
        Err(e) => {
            tracing::error!(%e, "Unable to run the stopwatch");
            std::process::exit(1);
        }
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    LogTracer::init()?;

    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Standard output belongs to the console display.
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run(arguments: Arguments) -> anyhow::Result<Snapshot> {
    if arguments.console || !cfg!(feature = "ui") {
        return run_console();
    }

    run_window()
}

fn build_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}

fn run_console() -> anyhow::Result<Snapshot> {
    let runtime = build_runtime()?;
    let (sender, receiver) = mpsc::channel(16);

    let snapshot = runtime.block_on(async {
        let reader = tokio::task::spawn_blocking(move || console::read_loop(sender));
        let snapshot = stopwatch::runtime::run(receiver, Screen).await;

        reader.await??;
        anyhow::Ok(snapshot)
    })?;

    println!();

    Ok(snapshot)
}

#[cfg(feature = "ui")]
fn run_window() -> anyhow::Result<Snapshot> {
    let (sender, receiver) = mpsc::channel(16);
    let window = stopwatch::app::Window::new(sender)?;
    let observer = window.observer();
    let runtime = build_runtime()?;

    // The window owns the main thread; the timer runs on its own event loop.
    let driver = std::thread::Builder::new()
        .name(String::from("timer"))
        .spawn(move || runtime.block_on(stopwatch::runtime::run(receiver, observer)))?;

    window.run()?;

    // Dropping the window drops the last command sender and stops the timer.
    drop(window);

    driver
        .join()
        .map_err(|_| anyhow::anyhow!("The timer thread panicked"))
}

#[cfg(not(feature = "ui"))]
fn run_window() -> anyhow::Result<Snapshot> {
    anyhow::bail!("built without the window frontend")
}
