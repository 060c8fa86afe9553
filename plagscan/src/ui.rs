use crate::ansi::{clear_line, move_to_line_start, print_status};
use crate::detect::Detection;
use crate::error::{IoSnafu, Result};
use crate::record::PairMatch;
use nu_ansi_term::Color::{Blue, Green, Red};
use serde::Serialize;
use snafu::prelude::*;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Serialize)]
pub struct Summary {
    files: usize,
    compared: usize,
    skipped: usize,
    matches: Vec<PairMatch>,
    #[serde(skip_serializing)]
    start_time: Instant,
    #[serde(skip_serializing)]
    end_time: Option<Instant>,
}

impl Summary {
    pub fn new(start_time: Instant) -> Self {
        Self {
            files: 0,
            compared: 0,
            skipped: 0,
            matches: Vec::new(),
            start_time,
            end_time: None,
        }
    }

    pub fn record(&mut self, detection: Detection) {
        self.files = detection.files;
        self.compared = detection.compared;
        self.skipped = detection.skipped;
        self.matches = detection.matches;
    }

    pub fn mark_ended(&mut self) {
        self.end_time = Some(Instant::now());
    }
}

pub enum Message {
    Finished(Summary),
    SetStatus(String),
    Match(PairMatch),
}

pub trait Reporter {
    fn on_tick(&mut self) -> Result<()>;
    fn on_message(&mut self, message: Message) -> Result<()>;
}

pub struct AnsiReporter {
    icons: std::iter::Cycle<std::array::IntoIter<char, 8>>,
    status: String,
}

impl AnsiReporter {
    pub fn new() -> Self {
        let icons = ['⣷', '⣯', '⣟', '⡿', '⢿', '⣻', '⣽', '⣾'].into_iter().cycle();
        let status = "Initializing...".to_string();

        Self { icons, status }
    }
}

impl Reporter for AnsiReporter {
    fn on_tick(&mut self) -> Result<()> {
        let message = format!(
            "{} >> {}",
            self.icons.next().unwrap(),
            Blue.paint(&self.status)
        );

        print_status(message).context(IoSnafu { path: "stdout" })
    }

    fn on_message(&mut self, message: Message) -> Result<()> {
        clear_line().context(IoSnafu { path: "stdout" })?;
        match message {
            Message::Finished(summary) => {
                println!();
                print_summary(&summary);
            }
            Message::SetStatus(s) => self.status = s,
            Message::Match(record) => {
                move_to_line_start().context(IoSnafu { path: "stdout" })?;
                println!(
                    "{}",
                    Red.paint(format!(
                        "≈ {} ({} shared phrases)",
                        record.pair, record.count
                    ))
                );
            }
        }

        Ok(())
    }
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn on_tick(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_message(&mut self, message: Message) -> Result<()> {
        if let Message::Finished(summary) = message {
            let serialized = serde_json::to_string(&summary).unwrap();
            println!("{serialized}");
        }

        Ok(())
    }
}

pub struct Ui {
    channel: Receiver<Message>,
    reporter: Box<dyn Reporter + Send>,
}

impl Ui {
    pub fn new(channel: Receiver<Message>, reporter: Box<dyn Reporter + Send>) -> Self {
        Self { channel, reporter }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            match self.channel.try_recv() {
                Ok(message) => {
                    let done = matches!(message, Message::Finished(_));
                    self.reporter.on_message(message)?;

                    if done {
                        break;
                    }
                }
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {
                    self.reporter.on_tick()?;
                    thread::sleep(Duration::from_millis(100));
                }
            }
        }

        Ok(())
    }
}

fn print_summary(summary: &Summary) {
    if summary.matches.is_empty() {
        println!("{}", Green.paint("No suspicious pairs found"));
    } else {
        println!("{:40}   Shared", "Pair");
        for record in &summary.matches {
            println!(
                "{:40} {}",
                record.pair,
                Red.paint(format!("{:8}", record.count))
            );
        }
    }

    println!("------------------------------------------------");

    let duration = summary.end_time.unwrap().duration_since(summary.start_time);
    let duration = format_duration(&duration);
    println!(
        "Compared {} of {} pairs across {} files in {}",
        summary.compared,
        summary.compared + summary.skipped,
        summary.files,
        Blue.paint(duration)
    );
}

fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        let millis = duration.as_millis();
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    }
}
