use log::{debug, info, warn};

pub use prize_draw::animation::{Frame, Shuffle, ShuffleConfig};
pub use prize_draw::builder::Builder;
pub use prize_draw::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde_json::json;
use serde_json::Value as JSValue;

use crate::args::Args;
use crate::draw::config_reader::*;
use crate::draw::images::*;
use crate::draw::io_common::InputType;
use crate::draw::session::*;

mod config_reader;
mod console;
mod images;
mod io_common;
mod io_csv;
mod io_excel;
mod session;

#[derive(Debug, Snafu)]
pub enum RaffleError {
    #[snafu(display("Error opening spreadsheet {path}"))]
    OpeningExcel {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Spreadsheet {path} does not contain any worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name:?} not found in {path}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Cannot tell the type of {path}: use xlsx or csv"))]
    UnknownInputType { path: String },
    #[snafu(display("No participants loaded from {path}"))]
    NoParticipantsLoaded { source: LoadErrors, path: String },

    #[snafu(display("Cannot draw"))]
    Draw { source: DrawErrors },

    #[snafu(display("Cannot load the prize image {path}"))]
    ImageLoad {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The prize image {path} is not a PNG, JPEG or GIF file"))]
    ImageFormat { path: String },
    #[snafu(display("The prize image {path} is corrupt"))]
    ImageDecode {
        source: image::ImageError,
        path: String,
    },

    #[snafu(display("Error opening configuration {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Console error"))]
    Console { source: std::io::Error },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type RaffleResult<T> = Result<T, RaffleError>;

/// Reads a participant list, choosing the reader from the declared or guessed input type.
pub fn read_participants(input: &InputSource) -> RaffleResult<Registry> {
    let path = input.path.as_str();
    let input_type = match &input.input_type {
        Some(t) => InputType::from_name(t),
        None => InputType::from_path(path),
    };
    let registry = match input_type {
        Some(InputType::Spreadsheet) => {
            io_excel::read_excel_participants(path, input.worksheet.as_deref())?
        }
        Some(InputType::Csv) => io_csv::read_csv_participants(path)?,
        None => return UnknownInputTypeSnafu { path }.fail(),
    };
    debug!("read_participants: {:?}", registry);
    Ok(registry)
}

/// The message of the error followed by its causes.
pub fn describe_error(e: &RaffleError) -> String {
    let mut msg = e.to_string();
    let mut cur: Option<&dyn std::error::Error> = std::error::Error::source(e);
    while let Some(c) = cur {
        msg.push_str(": ");
        msg.push_str(&c.to_string());
        cur = c.source();
    }
    msg
}

fn build_summary_js(title: &str, session: &Session) -> JSValue {
    let winners: Vec<JSValue> = session
        .engine()
        .awarded()
        .iter()
        .map(|(prize, e)| {
            json!({
                "place": prize.key(),
                "name": e.participant.name,
                "handle": e.participant.handle,
                "row": e.id.0,
            })
        })
        .collect();
    json!({
        "title": title,
        "participants": session.registry().len(),
        "winners": winners,
    })
}

fn write_summary(out: &str, js: &JSValue) -> RaffleResult<()> {
    let pretty_js = serde_json::to_string_pretty(js)
        .whatever_context("Could not serialize the summary")?;
    if out == "stdout" {
        println!("{}", pretty_js);
    } else {
        info!("Writing summary to {:?}", out);
        fs::write(out, pretty_js).context(WritingOutputSnafu { path: out })?;
    }
    Ok(())
}

pub fn run_raffle(args: &Args) -> RaffleResult<()> {
    let settings = DrawSettings::from_args(args)?;
    debug!("run_raffle: settings: {:?}", settings);
    let mut session = Session::from_settings(&settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "== {} ==", settings.title).context(ConsoleSnafu {})?;

    if let Some(input) = &settings.input {
        session.load(input)?;
        console::print_participants(&session, &mut out)?;
    }

    if settings.auto {
        console::run_auto(&mut session, &mut out)?;
    } else {
        let stdin = std::io::stdin();
        console::run_commands(&mut session, stdin.lock(), &mut out)?;
    }
    console::print_winners(&session, &mut out)?;

    if let Some(o) = &settings.out {
        write_summary(o, &build_summary_js(&settings.title, &session))?;
    } else if session.engine().winners().is_empty() {
        warn!("No prize was drawn");
    }
    Ok(())
}
