use argh::FromArgs;
use readline_shell::Interpreter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(FromArgs)]
/// Simple shell using readline with multiple levels of tab completion.
/// Type `help` at the prompt for the list of commands.
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args: Args = argh::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "readline_shell=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Interpreter::default().repl()
}
