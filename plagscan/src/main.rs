mod ansi;
mod args;
mod config;
mod detect;
mod error;
mod pairs;
mod rank;
mod record;
mod store;
mod ui;

use args::Args;
use clap::Parser;
use config::Settings;
use error::{BrokenPipeSnafu, Result};
use snafu::prelude::*;
use std::sync::mpsc;
use std::thread::spawn;
use std::time::Instant;
use ui::{AnsiReporter, JsonReporter, Message, Summary, Ui};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args).await {
        eprintln!("plagscan: {err}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = config::from_path(args.config_path()).await?;
    let settings = Settings::resolve(args, &config);

    let (tx, rx) = mpsc::channel();
    let reporter: Box<dyn ui::Reporter + Send> = match args.reporter {
        args::Reporter::Ansi => Box::new(AnsiReporter::new()),
        args::Reporter::Json => Box::new(JsonReporter::new()),
    };
    let ui_thread = spawn(move || Ui::new(rx, reporter).run());

    let start_time = Instant::now();
    let on_message = |message: Message| tx.send(message).context(BrokenPipeSnafu);
    let outcome = detect::detect(args.corpus.as_path(), &settings, on_message).await;

    let result = match outcome {
        Ok(detection) => {
            let mut summary = Summary::new(start_time);
            summary.record(detection);
            summary.mark_ended();
            tx.send(Message::Finished(summary)).context(BrokenPipeSnafu)
        }
        Err(err) => Err(err),
    };

    drop(tx);
    ui_thread.join().unwrap()?;

    result
}
