use crate::controls::{Command, Controls};
use crate::runtime::Observer;
use crate::timer::Snapshot;
use slint::{SharedString, Weak};
use tokio::sync::mpsc::Sender;

slint::slint! {
import { Button } from "std-widgets.slint";

export component MainWindow inherits Window {
        in property <string> time: "00:00:00";
        in property <bool> start-enabled: true;
        in property <bool> toggle-enabled: false;
        in property <string> toggle-label: "Resume";

        callback start();
        callback toggle();
        callback reset();

        preferred-width: 480px;
        preferred-height: 320px;

        title: "Stopwatch";

        VerticalLayout {
            padding: 24px;
            spacing: 16px;

            Text {
                text: "Stopwatch / Timer";
                font-size: 24px;
                horizontal-alignment: center;
            }

            Text {
                text: time;
                font-size: 56px;
                horizontal-alignment: center;
                color: green;
            }

            Text {
                text: "MM : SS : MS";
                horizontal-alignment: center;
                color: gray;
            }

            HorizontalLayout {
                spacing: 8px;

                Button {
                    text: "Start";
                    enabled: start-enabled;
                    clicked => { root.start(); }
                }

                Button {
                    text: toggle-label;
                    enabled: toggle-enabled;
                    clicked => { root.toggle(); }
                }

                Button {
                    text: "Reset";
                    clicked => { root.reset(); }
                }
            }
        }
}
}

pub struct Window {
    main_window: MainWindow,
}

impl Window {
    pub fn new(commands: Sender<Command>) -> anyhow::Result<Self> {
        let main_window = MainWindow::new()?;

        main_window.on_start(forward(commands.clone(), Command::Start));
        main_window.on_toggle(forward(commands.clone(), Command::Toggle));
        main_window.on_reset(forward(commands, Command::Reset));

        Ok(Self { main_window })
    }

    pub fn observer(&self) -> Weak<MainWindow> {
        self.main_window.as_weak()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.main_window.run()?;
        Ok(())
    }
}

// The timer drains presses far faster than anyone can click, so a full
// channel means the timer thread is gone or wedged; the press is logged and dropped.
fn forward(sender: Sender<Command>, command: Command) -> impl Fn() + 'static {
    move || {
        if let Err(e) = sender.try_send(command) {
            tracing::error!(%e, ?command, "Failed to send a command to the timer");
        }
    }
}

impl Observer for Weak<MainWindow> {
    fn on_change(&self, snapshot: Snapshot) {
        let controls = Controls::from(snapshot);
        let time = SharedString::from(snapshot.display());

        if let Err(e) = self.upgrade_in_event_loop(move |app| {
            app.set_time(time);
            app.set_start_enabled(controls.start);
            app.set_toggle_enabled(controls.toggle_enabled);
            app.set_toggle_label(SharedString::from(controls.toggle.label()));
        }) {
            tracing::error!(%e, "Failed to update the UI");
        }
    }
}
