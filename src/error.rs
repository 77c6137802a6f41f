// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Valid JSON was requested, but comment emission is enabled \
(comments: {comments}, origin comments: {origin_comments}); \
comments are never valid JSON"
    )]
    CommentsBreakJson {
        comments: bool,
        origin_comments: bool,
    },

    #[error("Valid JSON was requested, but the JSON render option is disabled")]
    NotJson,

    #[error("Can not render the non-finite number {0}; neither JSON nor HOCON support it")]
    NonFiniteDouble(f64),

    #[error("The JSON number {0} can be represented neither as integer nor as double")]
    UnsupportedNumber(String),

    /// Represents all cases of `std::fmt::Error`.
    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error("The input file {0} does not seem to exist")]
    InputFileDoesNotExist(PathBuf),

    #[error("Error while reading {0}: {1}")]
    FailedToReadInputFile(PathBuf, std::io::Error),

    #[error("Failed to parse {0} as JSON: {1}")]
    InvalidJson(PathBuf, serde_json::Error),
}

pub type RenderResult<T> = std::result::Result<T, Error>;
