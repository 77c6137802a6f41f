// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// One level of indentation in formatted output.
pub const INDENTATION: &str = "    ";

/// Origin description of values that were not loaded from any source.
pub const HARDCODED_ORIGIN: &str = "hardcoded value";

/// Separator between the segments of a compacted key.
pub const KEY_PATH_SEPARATOR: char = '.';
