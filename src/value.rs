// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::HARDCODED_ORIGIN;

/// Where a value comes from,
/// plus the human-written comments attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    description: String,
    line: Option<usize>,
    comments: Vec<String>,
}

impl Origin {
    #[must_use]
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
            line: None,
            comments: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The text used for origin comments,
    /// e.g. `app.conf: 12` or `hardcoded value`.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::new(HARDCODED_ORIGIN)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {line}", self.description),
            None => write!(f, "{}", self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    Object(BTreeMap<String, ConfigValue>),
    List(Vec<ConfigValue>),
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Null,
}

/// A node of a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    pub kind: ValueKind,
    pub origin: Origin,
}

impl ConfigValue {
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            origin: Origin::default(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Replaces the human-written comments of this values origin.
    #[must_use]
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin = self.origin.with_comments(comments);
        self
    }

    #[must_use]
    pub fn object<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::new(ValueKind::Object(
            members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    #[must_use]
    pub fn list<I: IntoIterator<Item = Self>>(elements: I) -> Self {
        Self::new(ValueKind::List(elements.into_iter().collect()))
    }

    #[must_use]
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::new(ValueKind::String(value.into()))
    }

    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::new(ValueKind::Int(value))
    }

    #[must_use]
    pub fn double(value: f64) -> Self {
        Self::new(ValueKind::Double(value))
    }

    #[must_use]
    pub fn bool(value: bool) -> Self {
        Self::new(ValueKind::Bool(value))
    }

    #[must_use]
    pub fn null() -> Self {
        Self::new(ValueKind::Null)
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self.kind, ValueKind::Object(_))
    }

    /// If this is an object with exactly one member,
    /// returns that member.
    #[must_use]
    pub fn single_member(&self) -> Option<(&str, &Self)> {
        match &self.kind {
            ValueKind::Object(members) if members.len() == 1 => members
                .iter()
                .next()
                .map(|(key, value)| (key.as_str(), value)),
            _ => None,
        }
    }
}
