// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate clap;
#[macro_use]
extern crate log;
extern crate log4rs;
#[macro_use]
extern crate error_chain;

// For testing in submodules
#[cfg(test)]
extern crate rand;

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

mod action;
mod context;
mod error;
mod mapping;
mod reorganizer;

#[cfg(test)]
mod testutils;

use context::ReorganizeContext;
use error::*;
use mapping::project_mapping;
use reorganizer::reorganize;

use std::path::PathBuf;

const DEFAULT_BASE_DIR: &str = "c:/Users/elabi/OneDrive/Desktop/sitewebfullsection_predectionformation-main1";

fn main() {
    let argument_matches = create_app().get_matches();

    if let Err(ref error) = configure_logging(argument_matches.occurrences_of("v")) {
        eprintln!("Error: {}", error);
        ::std::process::exit(1);
    }

    // If there was an error, nicely print it and the related causes
    if let Err(ref error) = run(&argument_matches) {
        error!("Error: {}", error);
        for cause in error.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}

fn create_app<'a, 'b>() -> App<'a, 'b> {
    App::new("organize")
        .version("0.1")
        .author("Mitch S. <mitch+map@applicative.us>")
        .about("Moves a project's loose files into its models, data, static, templates and notebooks folders")
        .arg(
            Arg::with_name("base-dir")
                .short("b")
                .long("base-dir")
                .value_name("DIRECTORY")
                .help("Sets the project directory holding the loose files and the folders to move them into")
                .takes_value(true)
                .default_value(DEFAULT_BASE_DIR),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("dry-run")
                .short("n")
                .long("dry-run")
                .help("Sets whether or not to actually write to the filesystem"),
        )
}

fn level_for_verbosity(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn configure_logging(verbosity: u64) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({m})}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level_for_verbosity(verbosity)))
        .map_err(|errors| Error::from(format!("Invalid logging configuration: {:?}", errors)))?;
    log4rs::init_config(config)
        .map_err(|error| Error::from(format!("Unable to install logger: {:?}", error)))?;
    Ok(())
}

fn context_from_matches(matches: &ArgMatches) -> ReorganizeContext {
    let base_dir = PathBuf::from(matches.value_of("base-dir").unwrap_or(DEFAULT_BASE_DIR));
    ReorganizeContext {
        base_dir: base_dir,
        dry_run: matches.is_present("dry-run"),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let file_context = context_from_matches(matches);
    let mapping = project_mapping();
    debug!("Organizing {} file(s) under {} (dry run: {})", mapping.file_count(),
           file_context.base_dir.to_string_lossy(), file_context.dry_run);

    let summary = reorganize(&mapping, &file_context)?;
    info!("{}", summary);

    if file_context.dry_run {
        println!("Dry run finished: {} file(s) would be moved.", summary.files_moved);
    } else {
        println!("Project structure organized successfully.");
    }

    Ok(())
}
