// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! What a renderer has to do for a given set of [`RenderOptions`].
//!
//! The flags are not orthogonal in their effect on the output:
//!
//! | flags                                   | effect                                   |
//! |-----------------------------------------|------------------------------------------|
//! | `comments` or `origin_comments`         | `#` lines are emitted; never valid JSON  |
//! | `json` and no comment flag              | output is valid JSON (resolved input)    |
//! | `compact_keys` and not `json`           | single-member object chains use `a.b.c`  |
//! | `compact_keys` and `json`               | no effect; JSON has no path expressions  |
//!
//! The renderer never overrides the flags it was given.
//! Callers that need guaranteed JSON use [`require_json`]
//! to turn the misuse into an error.

use crate::error::{Error, RenderResult};
use crate::options::RenderOptions;

/// Whether any kind of comment line will be emitted.
#[must_use]
pub const fn emits_comments(options: &RenderOptions) -> bool {
    options.comments() || options.origin_comments()
}

/// Whether the output for a fully resolved document is valid JSON.
#[must_use]
pub const fn guarantees_json(options: &RenderOptions) -> bool {
    options.json() && !emits_comments(options)
}

/// Whether chains of single-member objects are collapsed into dotted keys.
#[must_use]
pub const fn compacts_keys(options: &RenderOptions) -> bool {
    options.compact_keys() && !options.json()
}

/// Whether the root object is wrapped in braces.
#[must_use]
pub const fn root_braces(options: &RenderOptions) -> bool {
    options.json()
}

/// What goes between a key and its value.
#[must_use]
pub const fn key_separator(options: &RenderOptions, value_is_object: bool) -> &'static str {
    match (options.json(), options.formatted(), value_is_object) {
        (true, true, _) => " : ",
        (true, false, _) => ":",
        (false, true, true) => " ",
        (false, false, true) => "",
        (false, _, false) => "=",
    }
}

/// Fails if output rendered with `options` is not guaranteed to be valid JSON.
///
/// This only reports the problem;
/// fixing the options is left to the caller.
///
/// # Errors
///
/// - [`Error::NotJson`] if `json` is disabled
/// - [`Error::CommentsBreakJson`] if any comment flag is enabled
pub fn require_json(options: &RenderOptions) -> RenderResult<()> {
    if !options.json() {
        return Err(Error::NotJson);
    }
    if emits_comments(options) {
        return Err(Error::CommentsBreakJson {
            comments: options.comments(),
            origin_comments: options.origin_comments(),
        });
    }
    Ok(())
}
