use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "STOPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Use the console even when the window frontend is compiled in.
    #[arg(short, long, env = "STOPWATCH_CONSOLE")]
    pub console: bool,
}
