// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use git_version::git_version;

pub mod constants;
pub mod context;
pub mod contract;
pub mod error;
pub mod formatter;
pub mod input;
pub mod options;
pub mod value;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");
