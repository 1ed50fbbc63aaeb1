use crate::ticker::TickSource;
use crate::timer::{Snapshot, Timer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// What the combined pause/resume control does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Pause,
    Resume,
}

impl Toggle {
    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Pause => "Pause",
            Toggle::Resume => "Resume",
        }
    }
}

impl Display for Toggle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Enabled state of the three controls for a given snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub toggle: Toggle,
    pub toggle_enabled: bool,
    pub reset: bool,
}

impl From<Snapshot> for Controls {
    fn from(snapshot: Snapshot) -> Self {
        let toggle = if snapshot.is_running() {
            Toggle::Pause
        } else {
            Toggle::Resume
        };

        Self {
            start: !snapshot.is_running(),
            toggle,
            // Nothing to pause or resume before any time has accumulated.
            toggle_enabled: snapshot.elapsed_ms != 0,
            reset: true,
        }
    }
}

impl Display for Controls {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn mark(enabled: bool) -> &'static str {
            if enabled {
                ""
            } else {
                "-"
            }
        }

        write!(
            f,
            "[{}start] [{}{}] [reset]",
            mark(self.start),
            mark(self.toggle_enabled),
            self.toggle.to_string().to_lowercase(),
        )
    }
}

/// A press of one of the controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Toggle,
    Pause,
    Resume,
    Reset,
}

impl Command {
    /// Applies the command if its control is enabled. Returns whether it was accepted.
    pub fn apply<S: TickSource>(self, timer: &mut Timer<S>) -> bool {
        let controls = Controls::from(timer.snapshot());

        match (self, controls.toggle) {
            (Command::Start, _) if controls.start => timer.start(),
            (Command::Toggle | Command::Pause, Toggle::Pause) if controls.toggle_enabled => {
                timer.pause()
            }
            (Command::Toggle | Command::Resume, Toggle::Resume) if controls.toggle_enabled => {
                timer.resume()
            }
            (Command::Reset, _) => timer.reset(),
            _ => {
                tracing::debug!(command = ?self, ?controls, "ignoring a disabled control");
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParseError(String);

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command {:?}", self.0)
    }
}

impl Error for CommandParseError {}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "s" => Ok(Command::Start),
            "toggle" | "t" | "p" => Ok(Command::Toggle),
            "pause" => Ok(Command::Pause),
            "resume" => Ok(Command::Resume),
            "reset" | "r" => Ok(Command::Reset),
            _ => Err(CommandParseError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::IntervalSource;
    use crate::timer::State;

    #[test]
    fn controls_at_rest() {
        let controls = Controls::from(Snapshot::new(0, State::Stopped));

        assert!(controls.start);
        assert!(!controls.toggle_enabled);
        assert!(controls.reset);
    }

    #[test]
    fn controls_while_running() {
        let controls = Controls::from(Snapshot::new(500, State::Running));

        assert!(!controls.start);
        assert!(controls.toggle_enabled);
        assert_eq!(controls.toggle.label(), "Pause");
        assert!(controls.reset);
    }

    #[test]
    fn controls_while_paused() {
        let controls = Controls::from(Snapshot::new(500, State::Stopped));

        assert!(controls.start);
        assert!(controls.toggle_enabled);
        assert_eq!(controls.toggle.label(), "Resume");
        assert!(controls.reset);
    }

    #[test]
    fn running_from_zero_keeps_the_toggle_disabled() {
        let controls = Controls::from(Snapshot::new(0, State::Running));

        assert!(!controls.start);
        assert!(!controls.toggle_enabled);
        assert_eq!(controls.to_string(), "[-start] [-pause] [reset]");
    }

    #[test]
    fn parses_commands() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!(" S\n".parse::<Command>(), Ok(Command::Start));
        assert_eq!("p".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("Toggle".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("pause".parse::<Command>(), Ok(Command::Pause));
        assert_eq!("resume".parse::<Command>(), Ok(Command::Resume));
        assert_eq!("RESET".parse::<Command>(), Ok(Command::Reset));
        assert_eq!(
            "lap".parse::<Command>(),
            Err(CommandParseError("lap".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_controls_are_ignored() {
        let mut timer = Timer::new(IntervalSource::default());

        assert!(!Command::Toggle.apply(&mut timer));
        assert!(!Command::Resume.apply(&mut timer));
        assert!(Command::Start.apply(&mut timer));
        assert!(!Command::Start.apply(&mut timer));

        // Still at zero, so the toggle stays disabled while running.
        assert!(!Command::Pause.apply(&mut timer));
        assert!(timer.is_running());

        timer.tick();
        assert!(!Command::Resume.apply(&mut timer));
        assert!(Command::Toggle.apply(&mut timer));
        assert!(!timer.is_running());
        assert!(!Command::Pause.apply(&mut timer));
        assert!(Command::Resume.apply(&mut timer));
        assert!(timer.is_running());

        assert!(Command::Reset.apply(&mut timer));
        assert!(Command::Reset.apply(&mut timer));
        assert_eq!(timer.snapshot(), Snapshot::default());
        assert_eq!(timer.source().active(), 0);
    }
}
