// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{INDENTATION, KEY_PATH_SEPARATOR};
use crate::context::Context;
use crate::contract;
use crate::error::{Error, RenderResult};
use crate::options::RenderOptions;
use crate::value::{ConfigValue, ValueKind};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

/// The characters a string may consist of to be rendered without quotes.
static RE_UNQUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{Nd}-]+$").unwrap());

/// Unquoted strings starting with these would be read back as something else.
const RESERVED_PREFIXES: [&str; 4] = ["include", "true", "false", "null"];

/// Renders `value` as the root of a document.
///
/// The options are followed as given,
/// even if they contradict each other;
/// see [`contract`] for what each combination produces.
///
/// # Errors
///
/// - [`Error::NonFiniteDouble`] if the document contains `NaN` or an infinity,
///   which neither JSON nor HOCON can represent
/// - [`Error::Format`] if writing to the in-memory buffer fails
pub fn render(value: &ConfigValue, options: &RenderOptions) -> RenderResult<String> {
    let mut output = String::new();
    let mut context = Context::new(&mut output);
    let formatter = HoconFormatter::new(*options);
    formatter.fmt_value(&mut context, value, true)?;
    if options.formatted() {
        writeln!(context.output)?;
    }
    Ok(output)
}

/// Renders `value` as if it were the only member of a document,
/// stored under `key`.
///
/// # Errors
///
/// - [`Error::NonFiniteDouble`] if the document contains `NaN` or an infinity,
///   which neither JSON nor HOCON can represent
/// - [`Error::Format`] if writing to the in-memory buffer fails
pub fn render_at_key(
    key: &str,
    value: &ConfigValue,
    options: &RenderOptions,
) -> RenderResult<String> {
    let mut output = String::new();
    let mut context = Context::new(&mut output);
    let formatter = HoconFormatter::new(*options);
    formatter.fmt_member(&mut context, key, value)?;
    if options.formatted() {
        writeln!(context.output)?;
    }
    Ok(output)
}

/// Orders keys the way they are rendered:
/// all-digit keys first, in numerical order,
/// then all other keys lexicographically.
#[must_use]
pub fn render_order(a: &str, b: &str) -> Ordering {
    match (is_all_digits(a), is_all_digits(b)) {
        (true, true) => {
            let a_trimmed = a.trim_start_matches('0');
            let b_trimmed = b.trim_start_matches('0');
            a_trimmed
                .len()
                .cmp(&b_trimmed.len())
                .then_with(|| a_trimmed.cmp(b_trimmed))
                .then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_all_digits(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit())
}

/// Renders `value` as a quoted JSON string.
#[must_use]
pub fn render_json_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => output.push(c),
        }
    }
    output.push('"');
    output
}

/// Renders `value` without quotes if it would be read back as the same string,
/// and as a JSON string otherwise.
#[must_use]
pub fn render_string_unquoted_if_possible(value: &str) -> String {
    let Some(first) = value.chars().next() else {
        return render_json_string(value);
    };
    if first.is_numeric()
        || first == '-'
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
        || !RE_UNQUOTED.is_match(value)
    {
        tracing::trace!("Quoting '{value}'");
        return render_json_string(value);
    }
    value.to_owned()
}

struct HoconFormatter {
    options: RenderOptions,
}

impl HoconFormatter {
    fn new(options: RenderOptions) -> Self {
        tracing::debug!("Rendering with {options}");
        if options.json() && contract::emits_comments(&options) {
            tracing::debug!(
                "JSON was requested together with comments; the output will not be valid JSON"
            );
        }
        Self { options }
    }

    fn write_indent<W: Write>(&self, context: &mut Context<W>) -> RenderResult<()> {
        if self.options.formatted() {
            for _ in 0..context.indent_level {
                write!(context.output, "{INDENTATION}")?;
            }
        }
        Ok(())
    }

    fn write_newline<W: Write>(&self, context: &mut Context<W>) -> RenderResult<()> {
        if self.options.formatted() {
            writeln!(context.output)?;
        }
        Ok(())
    }

    fn render_string(&self, value: &str) -> String {
        if self.options.json() {
            render_json_string(value)
        } else {
            render_string_unquoted_if_possible(value)
        }
    }

    /// A `#` comment always runs to the end of the line,
    /// so it is terminated by a line break even when not formatted.
    fn fmt_comment_line<W: Write>(
        &self,
        context: &mut Context<W>,
        text: &str,
    ) -> RenderResult<()> {
        self.write_indent(context)?;
        write!(context.output, "#")?;
        if !text.is_empty() && !text.starts_with(' ') {
            write!(context.output, " ")?;
        }
        writeln!(context.output, "{text}")?;
        Ok(())
    }

    /// Writes the comments of all the given values,
    /// which are the levels of one (possibly compacted) member.
    fn fmt_comments<W: Write>(
        &self,
        context: &mut Context<W>,
        levels: &[&ConfigValue],
    ) -> RenderResult<()> {
        if self.options.origin_comments() {
            let mut descriptions: Vec<String> = Vec::with_capacity(levels.len());
            for level in levels {
                let description = level.origin.description();
                if !descriptions.contains(&description) {
                    descriptions.push(description);
                }
            }
            for description in &descriptions {
                for line in description.split('\n') {
                    self.fmt_comment_line(context, line)?;
                }
            }
        }
        if self.options.comments() {
            for level in levels {
                for comment in level.origin.comments() {
                    for line in comment.split('\n') {
                        self.fmt_comment_line(context, line)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn fmt_member<W: Write>(
        &self,
        context: &mut Context<W>,
        key: &str,
        value: &ConfigValue,
    ) -> RenderResult<()> {
        let mut path = vec![key];
        let mut levels = vec![value];
        let mut current = value;
        if contract::compacts_keys(&self.options) {
            while let Some((child_key, child)) = current.single_member() {
                path.push(child_key);
                levels.push(child);
                current = child;
            }
            if path.len() > 1 {
                tracing::trace!("Compacting key path {path:?}");
            }
        }

        self.fmt_comments(context, &levels)?;
        self.write_indent(context)?;
        let mut first = true;
        for segment in path {
            if first {
                first = false;
            } else {
                write!(context.output, "{KEY_PATH_SEPARATOR}")?;
            }
            write!(context.output, "{}", self.render_string(segment))?;
        }
        write!(
            context.output,
            "{}",
            contract::key_separator(&self.options, current.is_object())
        )?;
        self.fmt_value(context, current, false)
    }

    fn fmt_object<W: Write>(
        &self,
        context: &mut Context<W>,
        members: &BTreeMap<String, ConfigValue>,
        at_root: bool,
    ) -> RenderResult<()> {
        if members.is_empty() {
            write!(context.output, "{{}}")?;
            return Ok(());
        }

        let braces = !at_root || contract::root_braces(&self.options);
        if braces {
            write!(context.output, "{{")?;
            self.write_newline(context)?;
            context.indent_level += 1;
        }

        let mut sorted: Vec<(&String, &ConfigValue)> = members.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| render_order(a, b));
        let mut first_entry = true;
        for (key, value) in sorted {
            if first_entry {
                first_entry = false;
            } else {
                self.fmt_member_separator(context)?;
            }
            self.fmt_member(context, key, value)?;
        }

        if braces {
            context.indent_level -= 1;
            self.write_newline(context)?;
            self.write_indent(context)?;
            write!(context.output, "}}")?;
        }
        Ok(())
    }

    fn fmt_member_separator<W: Write>(&self, context: &mut Context<W>) -> RenderResult<()> {
        if !self.options.formatted() || self.options.json() {
            write!(context.output, ",")?;
        }
        self.write_newline(context)
    }

    fn fmt_list<W: Write>(
        &self,
        context: &mut Context<W>,
        elements: &[ConfigValue],
    ) -> RenderResult<()> {
        if elements.is_empty() {
            write!(context.output, "[]")?;
            return Ok(());
        }

        write!(context.output, "[")?;
        self.write_newline(context)?;
        context.indent_level += 1;
        let mut first_entry = true;
        for element in elements {
            if first_entry {
                first_entry = false;
            } else {
                write!(context.output, ",")?;
                self.write_newline(context)?;
            }
            self.fmt_comments(context, &[element])?;
            self.write_indent(context)?;
            self.fmt_value(context, element, false)?;
        }
        context.indent_level -= 1;
        self.write_newline(context)?;
        self.write_indent(context)?;
        write!(context.output, "]")?;
        Ok(())
    }

    fn fmt_value<W: Write>(
        &self,
        context: &mut Context<W>,
        value: &ConfigValue,
        at_root: bool,
    ) -> RenderResult<()> {
        match &value.kind {
            ValueKind::Object(members) => self.fmt_object(context, members, at_root)?,
            ValueKind::List(elements) => self.fmt_list(context, elements)?,
            ValueKind::String(string) => write!(context.output, "{}", self.render_string(string))?,
            ValueKind::Int(int) => write!(context.output, "{int}")?,
            ValueKind::Double(double) if !double.is_finite() => {
                return Err(Error::NonFiniteDouble(*double));
            }
            ValueKind::Double(double) => write!(context.output, "{double:?}")?,
            ValueKind::Bool(boolean) => write!(context.output, "{boolean}")?,
            ValueKind::Null => write!(context.output, "null")?,
        }
        Ok(())
    }
}
