//! Structured, round-trippable view of a registry file.
//!
//! A document is an ordered list of segments: opaque lines (kept verbatim)
//! and entry groups (a begin marker, body lines, an end marker). Every raw
//! line keeps its original line ending, so serialising an untouched document
//! reproduces the input byte for byte.

use std::collections::HashSet;
use std::fmt;

use super::error::RegistryIssue;
use super::syntax::{Marker, RegistrySyntax};

/// A named unit inside an entry group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Unique within its group.
    pub key: String,
    /// Line content without indentation or line ending.
    pub value: String,
}

impl RegistryEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyLine {
    Entry { key: String, raw: String },
    /// Blank lines and comments between the markers.
    Opaque(String),
}

impl BodyLine {
    fn raw(&self) -> &str {
        match self {
            Self::Entry { raw, .. } | Self::Opaque(raw) => raw,
        }
    }
}

/// An ordered, named collection of entries delimited by markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup {
    name: String,
    begin: String,
    body: Vec<BodyLine>,
    end: String,
}

impl EntryGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(|line| match line {
            BodyLine::Entry { key, .. } => Some(key.as_str()),
            BodyLine::Opaque(_) => None,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indentation of the begin marker; new entries line up with it.
    fn indent(&self) -> &str {
        let trimmed = self.begin.trim_start();
        &self.begin[..self.begin.len() - trimmed.len()]
    }

    fn line_ending(&self) -> &'static str {
        if self.begin.ends_with("\r\n") { "\r\n" } else { "\n" }
    }

    fn push(&mut self, entry: RegistryEntry) {
        let raw = format!("{}{}{}", self.indent(), entry.value, self.line_ending());
        self.body.push(BodyLine::Entry {
            key: entry.key,
            raw,
        });
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&self.begin);
        for line in &self.body {
            out.push_str(line.raw());
        }
        out.push_str(&self.end);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Line(String),
    Group(EntryGroup),
}

/// Where a missing group is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAnchor {
    /// Append after the last line of the file.
    End,
    /// After the line that ends the last unindented `import` statement.
    /// Files without one get the group at the end.
    AfterImports,
    /// Just before the closing line of the object literal opened by the
    /// first line whose trimmed text starts with the prefix and ends in `{`.
    /// The closing line is the next `}` line at the opener's indentation.
    /// Without both lines the group cannot be placed.
    BeforeObjectClose(&'static str),
}

/// Resolved insertion point for a new group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    At(usize),
    End,
}

/// Anchor plus the indentation of the group's markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPlacement {
    pub anchor: GroupAnchor,
    pub indent: &'static str,
}

impl GroupPlacement {
    pub const END: Self = Self {
        anchor: GroupAnchor::End,
        indent: "",
    };
}

/// Result of [`RegistryDocument::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The entry was appended; `created_group` when its group was missing.
    Inserted { created_group: bool },
    /// An entry with the same key already lives in the group.
    AlreadyPresent,
    /// The group is missing and its anchor was not found; nothing changed.
    Unplaced,
}

/// Parsed registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDocument {
    segments: Vec<Segment>,
    issues: Vec<RegistryIssue>,
}

impl RegistryDocument {
    /// Parse registry text. Never fails: malformed regions are kept as
    /// opaque text and reported through [`issues`](Self::issues).
    pub fn parse(text: &str, syntax: &dyn RegistrySyntax) -> Self {
        let mut parser = Parser::default();
        for (index, raw) in text.split_inclusive('\n').enumerate() {
            parser.line(index + 1, raw, syntax);
        }
        parser.finish()
    }

    /// Reconstitute the full file text.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Line(raw) => out.push_str(raw),
                Segment::Group(group) => group.write_to(&mut out),
            }
        }
        out
    }

    /// Recoverable problems found while parsing.
    pub fn issues(&self) -> &[RegistryIssue] {
        &self.issues
    }

    pub fn groups(&self) -> impl Iterator<Item = &EntryGroup> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Group(group) => Some(group),
            Segment::Line(_) => None,
        })
    }

    /// Look a group up by name.
    ///
    /// A missing group is a recoverable condition: callers create it.
    pub fn group(&self, name: &str) -> Result<&EntryGroup, RegistryIssue> {
        self.groups()
            .find(|group| group.name == name)
            .ok_or_else(|| RegistryIssue::MissingGroup {
                group: name.to_string(),
            })
    }

    /// Whether `group` exists and already holds `key`.
    pub fn contains(&self, group: &str, key: &str) -> bool {
        self.group(group).is_ok_and(|g| g.contains(key))
    }

    /// Insert `entry` into `group`, creating the group at `placement` first
    /// when it does not exist. Inserting a key the group already holds is a
    /// no-op, and so is a missing group whose anchor cannot be found.
    pub fn insert(
        &mut self,
        group: &str,
        entry: RegistryEntry,
        placement: GroupPlacement,
        syntax: &dyn RegistrySyntax,
    ) -> InsertOutcome {
        if let Some(target) = self.group_mut(group) {
            if target.contains(&entry.key) {
                return InsertOutcome::AlreadyPresent;
            }
            target.push(entry);
            return InsertOutcome::Inserted {
                created_group: false,
            };
        }

        let Some(slot) = self.anchor_slot(placement.anchor) else {
            return InsertOutcome::Unplaced;
        };

        let eol = self.line_ending();
        let mut created = EntryGroup {
            name: group.to_string(),
            begin: format!("{}{}{eol}", placement.indent, syntax.begin_marker(group)),
            body: Vec::new(),
            end: format!("{}{}{eol}", placement.indent, syntax.end_marker(group)),
        };
        created.push(entry);

        match slot {
            Slot::At(index) => self.segments.insert(index, Segment::Group(created)),
            Slot::End => {
                self.terminate_last_line(eol);
                self.segments.push(Segment::Group(created));
            }
        }
        InsertOutcome::Inserted {
            created_group: true,
        }
    }

    fn group_mut(&mut self, name: &str) -> Option<&mut EntryGroup> {
        self.segments.iter_mut().find_map(|segment| match segment {
            Segment::Group(group) if group.name == name => Some(group),
            _ => None,
        })
    }

    fn anchor_slot(&self, anchor: GroupAnchor) -> Option<Slot> {
        match anchor {
            GroupAnchor::End => Some(Slot::End),
            GroupAnchor::AfterImports => Some(
                self.end_of_last_import()
                    .map(|index| index + 1)
                    .filter(|&index| index < self.segments.len())
                    .map_or(Slot::End, Slot::At),
            ),
            GroupAnchor::BeforeObjectClose(opener) => self.object_close(opener).map(Slot::At),
        }
    }

    /// Index of the line that terminates the last unindented `import`.
    ///
    /// `None` when there is no import, or when its statement runs into a
    /// group or off the end of the file.
    fn end_of_last_import(&self) -> Option<usize> {
        let opener = self.segments.iter().rposition(|segment| {
            matches!(segment, Segment::Line(raw) if raw.starts_with("import ") || raw.starts_with("import{"))
        })?;
        for (index, segment) in self.segments.iter().enumerate().skip(opener) {
            match segment {
                Segment::Line(raw) if ends_import(raw) => return Some(index),
                Segment::Line(_) => {}
                Segment::Group(_) => return None,
            }
        }
        None
    }

    fn object_close(&self, opener: &str) -> Option<usize> {
        let (start, indent) = self.segments.iter().enumerate().find_map(|(index, segment)| {
            let Segment::Line(raw) = segment else {
                return None;
            };
            let content = raw.trim_end();
            let trimmed = content.trim_start();
            (trimmed.starts_with(opener) && trimmed.ends_with('{'))
                .then(|| (index, &content[..content.len() - trimmed.len()]))
        })?;

        self.segments
            .iter()
            .enumerate()
            .skip(start + 1)
            .find_map(|(index, segment)| match segment {
                Segment::Line(raw)
                    if raw.strip_prefix(indent).is_some_and(|rest| rest.starts_with('}')) =>
                {
                    Some(index)
                }
                _ => None,
            })
    }

    /// Make sure appended text starts on a fresh line.
    fn terminate_last_line(&mut self, eol: &str) {
        let last = match self.segments.last_mut() {
            Some(Segment::Line(raw)) => raw,
            Some(Segment::Group(group)) => &mut group.end,
            None => return,
        };
        if !last.ends_with('\n') {
            last.push_str(eol);
        }
    }

    /// Line ending used by the document, `\n` unless the first terminated
    /// line says otherwise.
    fn line_ending(&self) -> &'static str {
        let text = self.serialize();
        match text.find('\n') {
            Some(index) if text[..index].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }
}

/// Whether an import line finishes its statement: it names the module or
/// carries the terminating semicolon.
fn ends_import(raw: &str) -> bool {
    let content = raw.trim_end();
    content.ends_with(';') || content.ends_with('"') || content.ends_with('\'')
}

impl fmt::Display for RegistryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

// ── Parser ────────────────────────────────────────────────────────────────────

struct OpenGroup {
    name: String,
    begin: String,
    line: usize,
    body: Vec<BodyLine>,
}

#[derive(Default)]
struct Parser {
    segments: Vec<Segment>,
    issues: Vec<RegistryIssue>,
    seen: HashSet<String>,
    open: Option<OpenGroup>,
}

impl Parser {
    fn line(&mut self, number: usize, raw: &str, syntax: &dyn RegistrySyntax) {
        let content = raw.trim_end_matches('\n').trim_end_matches('\r');

        match syntax.marker(content) {
            Some(Marker::Begin(name)) => {
                self.abandon_open();
                self.open = Some(OpenGroup {
                    name,
                    begin: raw.to_string(),
                    line: number,
                    body: Vec::new(),
                });
            }
            Some(Marker::End(name)) => match self.open.take() {
                Some(open) if open.name == name => self.close(open, raw),
                Some(open) => {
                    self.open = Some(open);
                    self.abandon_open();
                    self.segments.push(Segment::Line(raw.to_string()));
                }
                None => self.segments.push(Segment::Line(raw.to_string())),
            },
            None => match self.open.as_mut() {
                Some(open) => {
                    let line = match syntax.entry_key(content) {
                        Some(key) => BodyLine::Entry {
                            key,
                            raw: raw.to_string(),
                        },
                        None => BodyLine::Opaque(raw.to_string()),
                    };
                    open.body.push(line);
                }
                None => self.segments.push(Segment::Line(raw.to_string())),
            },
        }
    }

    fn close(&mut self, open: OpenGroup, end: &str) {
        if !self.seen.insert(open.name.clone()) {
            self.issues.push(RegistryIssue::DuplicateGroup {
                group: open.name.clone(),
                line: open.line,
            });
            self.flush_opaque(open);
            self.segments.push(Segment::Line(end.to_string()));
            return;
        }

        self.segments.push(Segment::Group(EntryGroup {
            name: open.name,
            begin: open.begin,
            body: open.body,
            end: end.to_string(),
        }));
    }

    /// Give up on the open region: report it and keep its text verbatim.
    fn abandon_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.issues.push(RegistryIssue::UnterminatedGroup {
                group: open.name.clone(),
                line: open.line,
            });
            self.flush_opaque(open);
        }
    }

    fn flush_opaque(&mut self, open: OpenGroup) {
        self.segments.push(Segment::Line(open.begin));
        self.segments.extend(
            open.body
                .into_iter()
                .map(|line| Segment::Line(line.raw().to_string())),
        );
    }

    fn finish(mut self) -> RegistryDocument {
        self.abandon_open();
        RegistryDocument {
            segments: self.segments,
            issues: self.issues,
        }
    }
}
