// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// A set of options related to rendering a [`ConfigValue`](crate::value::ConfigValue).
///
/// Values are immutable;
/// every `set_*` method returns a new value
/// with exactly one field replaced,
/// so a preset can be shared and used as the base
/// for any number of derived configurations.
///
/// ```
/// use hocon_render::options::RenderOptions;
///
/// let options = RenderOptions::defaults().set_comments(false);
/// assert!(!options.comments());
/// assert!(options.origin_comments());
/// ```
///
/// NOTE That `json = true` alone does **not** guarantee valid JSON output.
/// Comments are controlled separately
/// (see [`Self::set_comments`] and [`Self::set_origin_comments`]),
/// and any emitted comment makes the output invalid JSON.
/// The [`Self::defaults`] preset relies on this combination being legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    origin_comments: bool,
    comments: bool,
    formatted: bool,
    json: bool,
    compact_keys: bool,
}

impl RenderOptions {
    const fn new(
        origin_comments: bool,
        comments: bool,
        formatted: bool,
        json: bool,
        compact_keys: bool,
    ) -> Self {
        Self {
            origin_comments,
            comments,
            formatted,
            json,
            compact_keys,
        }
    }

    /// The default render options, which are verbose
    /// (commented and formatted).
    /// See [`Self::concise`] for stripped-down options.
    ///
    /// This rendering will not be valid JSON, since it has comments.
    #[must_use]
    pub const fn defaults() -> Self {
        Self::new(true, true, true, true, false)
    }

    /// Concise render options (no whitespace or comments).
    ///
    /// For a fully resolved document,
    /// the concise rendering is valid JSON.
    #[must_use]
    pub const fn concise() -> Self {
        Self::new(false, false, false, true, false)
    }

    /// Returns options with human-written comments toggled.
    ///
    /// The autogenerated "origin of this setting" comments
    /// are controlled by [`Self::set_origin_comments`].
    #[must_use]
    pub const fn set_comments(self, value: bool) -> Self {
        Self {
            comments: value,
            ..self
        }
    }

    /// Whether human-written comments should be rendered.
    #[must_use]
    pub const fn comments(&self) -> bool {
        self.comments
    }

    /// Returns options with origin comments toggled.
    ///
    /// If enabled, a comment is generated for each setting,
    /// based on the [`Origin`](crate::value::Origin) of its value,
    /// telling for example which file the setting comes from.
    #[must_use]
    pub const fn set_origin_comments(self, value: bool) -> Self {
        Self {
            origin_comments: value,
            ..self
        }
    }

    /// Whether autogenerated origin comments should be rendered.
    #[must_use]
    pub const fn origin_comments(&self) -> bool {
        self.origin_comments
    }

    /// Returns options with formatting toggled.
    /// Formatting means indentation and whitespace;
    /// it makes things prettier but larger.
    #[must_use]
    pub const fn set_formatted(self, value: bool) -> Self {
        Self {
            formatted: value,
            ..self
        }
    }

    #[must_use]
    pub const fn formatted(&self) -> bool {
        self.formatted
    }

    /// Returns options with JSON toggled.
    ///
    /// JSON means that HOCON extensions
    /// (omitting commas or quotes, dotted keys)
    /// won't be used.
    /// Whether comments are emitted is controlled separately,
    /// so with comments enabled the output is invalid JSON
    /// despite this being `true`.
    #[must_use]
    pub const fn set_json(self, value: bool) -> Self {
        Self {
            json: value,
            ..self
        }
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Returns options with compact keys toggled.
    ///
    /// With compact keys, an object that only has one member
    /// is rendered using the dot notation,
    /// i.e. rather than `key { key2=value }` you get `key.key2=value`.
    ///
    /// This has no effect while [`Self::json`] is enabled,
    /// because JSON has no dotted key paths
    /// (see [`contract::compacts_keys`](crate::contract::compacts_keys)).
    #[must_use]
    pub const fn set_compact_keys(self, value: bool) -> Self {
        Self {
            compact_keys: value,
            ..self
        }
    }

    #[must_use]
    pub const fn compact_keys(&self) -> bool {
        self.compact_keys
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Diagnostic representation only; it is not meant to be parsed back.
impl fmt::Display for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.origin_comments, "originComments"),
            (self.comments, "comments"),
            (self.formatted, "formatted"),
            (self.json, "json"),
            (self.compact_keys, "compactKeys"),
        ];
        write!(f, "RenderOptions(")?;
        let mut first = true;
        for (_, name) in flags.iter().filter(|(set, _)| *set) {
            if first {
                first = false;
            } else {
                write!(f, ",")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, ")")
    }
}
