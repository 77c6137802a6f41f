// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use hocon_render::{contract, error::Error, formatter, input};
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to render: {0}")]
    Render(#[from] Error),
}

#[allow(clippy::print_stdout)]
fn main() -> Result<(), CliError> {
    let settings = cli::init()?;
    if settings.strict_json {
        contract::require_json(&settings.options)?;
    }

    for source in &settings.src {
        let document = input::load_json_file(source)?;
        let rendered = formatter::render(&document, &settings.options)?;
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }
    Ok(())
}
