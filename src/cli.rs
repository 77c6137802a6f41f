// SPDX-FileCopyrightText: 2021-2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::{command, crate_name, value_parser, Arg, ArgAction, Command, ValueHint};
use cli_utils::logging;
use const_format::formatcp;
use hocon_render::options::RenderOptions;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_COMPACT_KEYS: &str = "compact-keys";
pub const A_S_COMPACT_KEYS: char = 'k';
pub const A_L_CONCISE: &str = "concise";
pub const A_S_CONCISE: char = 'c';
pub const A_L_HOCON: &str = "hocon";
pub const A_S_HOCON: char = 'H';
pub const A_L_NO_COMMENTS: &str = "no-comments";
pub const A_L_NO_FORMATTING: &str = "no-formatting";
pub const A_L_NO_ORIGIN_COMMENTS: &str = "no-origin-comments";
pub const A_L_STRICT_JSON: &str = "strict-json";
pub const A_S_STRICT_JSON: char = 's';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

/// What the binary was asked to do.
#[derive(Debug)]
pub struct Settings {
    pub options: RenderOptions,
    /// Refuse to render if the output would not be valid JSON.
    pub strict_json: bool,
    pub src: Vec<PathBuf>,
}

fn arg_compact_keys() -> Arg {
    Arg::new(A_L_COMPACT_KEYS)
        .help("Render chains of single-member objects with dotted keys")
        .long_help(
            "Render chains of single-member objects with dotted keys, \
i.e. `a.b.c=1` instead of `a { b { c=1 } }`. \
Has no effect on JSON output.",
        )
        .action(ArgAction::SetTrue)
        .short(A_S_COMPACT_KEYS)
        .long(A_L_COMPACT_KEYS)
}

fn arg_concise() -> Arg {
    Arg::new(A_L_CONCISE)
        .help("Start from the concise preset (no whitespace, no comments)")
        .long_help(
            "Start from the concise preset (no whitespace, no comments) \
instead of the verbose default one. \
The other flags are applied on top of the chosen preset.",
        )
        .action(ArgAction::SetTrue)
        .short(A_S_CONCISE)
        .long(A_L_CONCISE)
}

fn arg_hocon() -> Arg {
    Arg::new(A_L_HOCON)
        .help("Use HOCON syntax shortcuts instead of strict JSON syntax")
        .action(ArgAction::SetTrue)
        .short(A_S_HOCON)
        .long(A_L_HOCON)
}

fn arg_no_comments() -> Arg {
    Arg::new(A_L_NO_COMMENTS)
        .help("Do not render human-written comments")
        .action(ArgAction::SetTrue)
        .long(A_L_NO_COMMENTS)
}

fn arg_no_formatting() -> Arg {
    Arg::new(A_L_NO_FORMATTING)
        .help("Do not render indentation and line breaks")
        .action(ArgAction::SetTrue)
        .long(A_L_NO_FORMATTING)
}

fn arg_no_origin_comments() -> Arg {
    Arg::new(A_L_NO_ORIGIN_COMMENTS)
        .help("Do not render comments telling where each setting comes from")
        .action(ArgAction::SetTrue)
        .long(A_L_NO_ORIGIN_COMMENTS)
}

fn arg_strict_json() -> Arg {
    Arg::new(A_L_STRICT_JSON)
        .help("Fail instead of rendering, if the output would not be valid JSON")
        .long_help(formatcp!(
            "Fail instead of rendering, if the output would not be valid JSON. \
The options are never adjusted automatically; \
combine with --{A_L_CONCISE} or with \
--{A_L_NO_COMMENTS} and --{A_L_NO_ORIGIN_COMMENTS}."
        ))
        .action(ArgAction::SetTrue)
        .short(A_S_STRICT_JSON)
        .long(A_L_STRICT_JSON)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help("JSON file(s) to render")
        .num_args(1..)
        .required_unless_present(A_L_VERSION)
        .value_name("FILE")
        .value_hint(ValueHint::FilePath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn args_matcher() -> Command {
    command!()
        .about("Renders JSON documents as HOCON or JSON")
        .long_about(
            "Takes JSON documents as input, \
and renders them as HOCON or JSON text to stdout, \
optionally with comments telling where each setting comes from. \
 \
NOTE That comments are never valid JSON, \
even when rendering with JSON syntax.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_compact_keys())
        .arg(arg_concise())
        .arg(arg_hocon())
        .arg(arg_no_comments())
        .arg(arg_no_formatting())
        .arg(arg_no_origin_comments())
        .arg(arg_strict_json())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", hocon_render::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

pub fn init() -> Result<Settings, InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let preset = if args.get_flag(A_L_CONCISE) {
        RenderOptions::concise()
    } else {
        RenderOptions::defaults()
    };
    let mut options = preset;
    if args.get_flag(A_L_NO_COMMENTS) {
        options = options.set_comments(false);
    }
    if args.get_flag(A_L_NO_ORIGIN_COMMENTS) {
        options = options.set_origin_comments(false);
    }
    if args.get_flag(A_L_NO_FORMATTING) {
        options = options.set_formatted(false);
    }
    if args.get_flag(A_L_HOCON) {
        options = options.set_json(false);
    }
    if args.get_flag(A_L_COMPACT_KEYS) {
        options = options.set_compact_keys(true);
    }
    tracing::debug!("Render options: {options}");

    let strict_json = args.get_flag(A_L_STRICT_JSON);
    let src: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();
    Ok(Settings {
        options,
        strict_json,
        src,
    })
}
