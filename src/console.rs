use crate::controls::{Command, Controls};
use crate::runtime::Observer;
use crate::timer::Snapshot;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc::Sender;

const CLEAR_LINE: &str = "\x1b[2K";

/// Redraws a single status line on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Screen;

impl Screen {
    pub fn render(snapshot: Snapshot) -> String {
        format!("{}  {}", snapshot.display(), Controls::from(snapshot))
    }

    /// Returns to column 0 and erases the line first, since consecutive
    /// renders differ in length.
    fn draw(out: &mut impl Write, snapshot: Snapshot) -> io::Result<()> {
        write!(out, "\r{CLEAR_LINE}{}", Self::render(snapshot))?;
        out.flush()
    }
}

impl Observer for Screen {
    fn on_change(&self, snapshot: Snapshot) {
        if let Err(e) = Self::draw(&mut io::stdout().lock(), snapshot) {
            tracing::warn!(%e, "Failed to draw the timer");
        }
    }
}

/// Forwards commands typed on standard input until it closes or `quit` is entered.
pub fn read_loop(sender: Sender<Command>) -> anyhow::Result<()> {
    read_commands(io::stdin().lock(), sender)
}

fn read_commands(input: impl BufRead, sender: Sender<Command>) -> anyhow::Result<()> {
    tracing::debug!("Waiting for commands on standard input");

    for line in input.lines() {
        let line = line?;
        let word = line.trim().to_lowercase();

        match word.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        match word.parse::<Command>() {
            Ok(command) => sender.blocking_send(command)?,
            Err(e) => tracing::warn!(%e, "Ignoring input"),
        }
    }

    Ok(())
}
