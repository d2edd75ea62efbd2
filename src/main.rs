use std::env;
use std::process;

use clap::ArgMatches;
use regex::Regex;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use yansi::Color::{Blue, Green};
use yansi::Paint;

#[macro_use]
extern crate log;

use boxstats::read::{RecordReader, RecordReaderBuilder};
use boxstats::record::Record;
use boxstats::render::TextRenderer;
use boxstats::stats;
use boxstats::Error;

mod app;

fn disable_color_if_needed(option: &str) {
    match option {
        "no" => Paint::disable(),
        "auto" => match env::var("TERM") {
            Ok(value) if value == "dumb" => Paint::disable(),
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
        _ => (),
    }
}

fn configure_logging(verbose: bool, color: &str) {
    let color_choice = match color {
        "no" => ColorChoice::Never,
        "yes" => ColorChoice::Always,
        _ if atty::is(atty::Stream::Stderr) => ColorChoice::Auto,
        _ => ColorChoice::Never,
    };
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Only fails if a logger is already in place
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, color_choice);
}

fn fail(error: Error) -> ! {
    error!("{}", error);
    process::exit(1);
}

fn get_reader(matches: &ArgMatches) -> RecordReader {
    let mut builder = RecordReaderBuilder::default();
    if let Some(string) = matches.value_of("regex") {
        match Regex::new(string) {
            Ok(re) => {
                builder.regex(re);
            }
            _ => {
                error!("Failed to parse regex {}", string);
                process::exit(1);
            }
        };
    }
    match builder.build() {
        Ok(reader) => reader,
        Err(error) => {
            error!("{}", error);
            process::exit(1);
        }
    }
}

fn read_records(matches: &ArgMatches) -> Vec<Record> {
    let reader = get_reader(matches);
    let input = matches.value_of("input").unwrap_or("-");
    reader.read(input).unwrap_or_else(|error| fail(error))
}

/// Pairs every record with its group name, dropping records that lack one.
fn keyed<'a>(records: &'a [Record], key_field: &str) -> Vec<(&'a str, &'a Record)> {
    records
        .iter()
        .filter_map(|r| match r.text(key_field) {
            Some(key) => Some((key, r)),
            None => {
                debug!("Record without field '{}': {:?}", key_field, r);
                None
            }
        })
        .collect()
}

fn summary(matches: &ArgMatches) {
    let records = read_records(matches);
    let key_field = matches.value_of("key").unwrap_or("key");
    let value_field = matches.value_of("value").unwrap_or("value");
    let precision = if matches.is_present("precision") {
        Some(
            matches
                .value_of_t::<usize>("precision")
                .unwrap_or_else(|e| e.exit()),
        )
    } else {
        None
    };
    let keyed = keyed(&records, key_field);
    let summaries = match stats::summarize(
        &keyed,
        |(key, _)| key.to_string(),
        |(_, record)| record.number(value_field),
    ) {
        Ok(summaries) => summaries,
        Err(error) => {
            if let Error::InvalidValue { index, .. } = &error {
                if let Some((key, record)) = keyed.get(*index) {
                    error!(
                        "Invalid {} '{}' in group '{}'",
                        value_field,
                        record.text(value_field).unwrap_or(""),
                        key
                    );
                }
            }
            fail(error)
        }
    };
    if summaries.is_empty() {
        if matches.is_present("require-groups") {
            fail(Error::EmptyInput);
        }
        warn!("No data to process");
        process::exit(0);
    }
    let mut renderer = TextRenderer::new(String::new(), precision);
    if let Err(error) = summaries.render_with(&mut renderer) {
        fail(error);
    }
    print!("{}", renderer.into_inner());
}

fn keys(matches: &ArgMatches) {
    let records = read_records(matches);
    let key_field = matches.value_of("key").unwrap_or("key");
    let groups = stats::group_by(keyed(&records, key_field), |(key, _)| key.to_string());
    if groups.is_empty() {
        warn!("No data to process");
        process::exit(0);
    }
    let width = groups
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    for (key, bucket) in groups.iter() {
        println!(
            "[{label}] {count}",
            label = Blue.paint(format!("{:width$}", key, width = width)),
            count = Green.paint(bucket.len().to_string()),
        );
    }
}

fn main() {
    let matches = app::get_app().get_matches();
    let color = matches.value_of("color").unwrap_or("auto");
    configure_logging(matches.is_present("verbose"), color);
    disable_color_if_needed(color);
    match matches.subcommand() {
        Some(("summary", subcommand_matches)) => {
            summary(subcommand_matches);
        }
        Some(("keys", subcommand_matches)) => {
            keys(subcommand_matches);
        }
        _ => unreachable!("Invalid subcommand"),
    };
}
