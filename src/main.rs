// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cistern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cistern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cistern CLI entrypoint.
//!
//! By default this runs the interactive TUI. `--print` and `--json` evaluate the given heights
//! once and write the result to stdout instead.

use std::error::Error;
use std::fs::File;
use std::sync::Mutex;

use cistern::model::Height;
use cistern::render::render_blocks_unicode;
use cistern::ui::{UiState, DEFAULT_MAX_BLOCK_HEIGHT};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CISTERN_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<heights>] [--floor <n>] [--log-file <path>]\n  {program} <heights> --print [--floor <n>] [--log-file <path>]\n  {program} <heights> --json [--floor <n>] [--log-file <path>]\n  {program} --help\n\n<heights> is a comma-separated list of non-negative integers, e.g. 3,0,2,0,4.\n--print writes the water total and the block drawing to stdout; --json writes a JSON report.\n--floor sets the smallest drawn height (default {DEFAULT_MAX_BLOCK_HEIGHT}).\n\nLogs are filtered by {LOG_ENV} (default `{DEFAULT_LOG_FILTER}`) and go to --log-file, or to stderr\nin --print/--json mode. {palette} overrides the TUI colors: fg,bg,wall,water,error,accent.",
        palette = "CISTERN_PALETTE"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    heights: Option<String>,
    print: bool,
    json: bool,
    floor: Option<Height>,
    log_file: Option<String>,
    help: bool,
}

impl CliOptions {
    fn one_shot(&self) -> bool {
        self.print || self.json
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--floor" => {
                if options.floor.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let floor: Height = raw.parse().map_err(|_| ())?;
                options.floor = Some(floor);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            "--help" | "-h" => {
                if options.help {
                    return Err(());
                }
                options.help = true;
            }
            // Heights never start with '-'; anything dash-prefixed is an unknown flag.
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.heights.is_some() {
                    return Err(());
                }
                options.heights = Some(arg);
            }
        }
    }

    if options.print && options.json {
        return Err(());
    }

    if options.one_shot() && options.heights.is_none() {
        return Err(());
    }

    Ok(options)
}

fn init_logging(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Some(path) = &options.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|err| err.to_string())?;
    } else if options.one_shot() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| err.to_string())?;
    }

    Ok(())
}

/// Writes the one-shot result; `Ok(false)` means the heights were rejected.
fn run_one_shot(state: &UiState, json: bool) -> Result<bool, Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&state.report())?);
        return Ok(state.error().is_none());
    }

    if let Some(err) = state.error() {
        eprintln!("cistern: {err}");
        return Ok(false);
    }

    println!("{}", state.total_label());
    let drawing = render_blocks_unicode(state.layout())?;
    if !drawing.is_empty() {
        println!("{drawing}");
    }
    Ok(true)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "cistern".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.help {
            print_usage(&program);
            return Ok(());
        }

        init_logging(&options)?;

        let mut state = UiState::with_floor(options.floor.unwrap_or(DEFAULT_MAX_BLOCK_HEIGHT));
        if let Some(heights) = options.heights.as_deref() {
            state.apply_input(heights);
        }

        if options.one_shot() {
            if !run_one_shot(&state, options.json)? {
                std::process::exit(1);
            }
            return Ok(());
        }

        cistern::tui::run_with_state(state)
    })();

    if let Err(err) = result {
        eprintln!("cistern: {err}");
        std::process::exit(1);
    }
}
