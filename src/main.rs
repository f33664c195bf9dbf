use argh::FromArgs;
use course_record::App;
use course_record::io_adapters::{EditorSource, LineSource, PlainSource};
use log::debug;
use std::io::IsTerminal;

#[derive(FromArgs)]
/// Record course grades and credits and print summary statistics.
struct Args {
    #[argh(option, default = "String::from(\"warn\")")]
    /// log filter used when RUST_LOG is not set (error, warn, info, debug, trace).
    log_level: String,

    #[argh(switch)]
    /// read plain lines from stdin even when it is a terminal.
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let stdin = std::io::stdin();
    let input: Box<dyn LineSource> = if !args.plain && stdin.is_terminal() {
        debug!("reading from terminal with line editing");
        Box::new(EditorSource::new()?)
    } else {
        debug!("reading plain lines from stdin");
        Box::new(PlainSource::new(stdin.lock()))
    };

    App::new(input, Box::new(std::io::stdout())).run()
}
