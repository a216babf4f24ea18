//! Stanza scanning: raw lines to [`StanzaRecord`]s.
//!
//! The scanner is a lazy, single-pass iterator. A `[Term]` marker opens a
//! record; the next marker of any kind (or end of input) closes it. Non-term
//! blocks such as `[Typedef]` produce nothing and their bodies are skipped.
//! Lines before the first marker form the ontology header.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::error::ParserError;
use crate::line::{self, Line};
use crate::tag::{MultiTag, ScalarTag, Tag};

// ---------------------------------------------------------------------------
// StanzaRecord
// ---------------------------------------------------------------------------

/// The recognized tags of one `[Term]` stanza.
///
/// Single-valued slots keep the last value written; multi-valued slots keep
/// every value in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StanzaRecord {
    scalars: [Option<String>; ScalarTag::COUNT],
    multi: [Vec<String>; MultiTag::COUNT],
}

impl StanzaRecord {
    pub(crate) fn insert(&mut self, tag: Tag, value: &str) {
        match tag {
            Tag::Scalar(tag) => self.scalars[tag.index()] = Some(value.to_string()),
            Tag::Multi(tag) => self.multi[tag.index()].push(value.to_string()),
        }
    }

    #[must_use]
    pub fn scalar(&self, tag: ScalarTag) -> Option<&str> {
        self.scalars[tag.index()].as_deref()
    }

    #[must_use]
    pub fn values(&self, tag: MultiTag) -> &[String] {
        &self.multi[tag.index()]
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.scalar(ScalarTag::Id)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.scalar(ScalarTag::Name)
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.scalar(ScalarTag::Namespace)
    }

    #[must_use]
    pub fn def(&self) -> Option<&str> {
        self.scalar(ScalarTag::Def)
    }

    /// Only the exact value `true` marks a term obsolete.
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.scalar(ScalarTag::IsObsolete) == Some("true")
    }

    #[must_use]
    pub fn is_a(&self) -> &[String] {
        self.values(MultiTag::IsA)
    }

    #[must_use]
    pub fn relationships(&self) -> &[String] {
        self.values(MultiTag::Relationship)
    }

    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        self.values(MultiTag::Synonym)
    }

    #[must_use]
    pub fn alt_ids(&self) -> &[String] {
        self.values(MultiTag::AltId)
    }
}

// ---------------------------------------------------------------------------
// OboHeader
// ---------------------------------------------------------------------------

/// `tag: value` pairs found before the first stanza marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OboHeader {
    tags: BTreeMap<String, String>,
}

impl OboHeader {
    fn insert(&mut self, tag: &str, value: &str) {
        self.tags.insert(tag.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    #[must_use]
    pub fn format_version(&self) -> Option<&str> {
        self.get("format-version")
    }

    #[must_use]
    pub fn data_version(&self) -> Option<&str> {
        self.get("data-version")
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    #[must_use]
    pub fn ontology(&self) -> Option<&str> {
        self.get("ontology")
    }

    /// All header tags in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Stanzas
// ---------------------------------------------------------------------------

/// Where the scanner is relative to the stanza markers.
#[derive(Debug)]
enum State {
    Header,
    InTerm(StanzaRecord),
    Skipping,
    Done,
}

/// Lazy iterator of term stanzas over a line source.
///
/// Yields `Err` only when the underlying reader fails; iteration stops after
/// the first error.
pub struct Stanzas<I> {
    lines: I,
    line_no: usize,
    state: State,
    header: OboHeader,
}

impl<I> Stanzas<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_no: 0,
            state: State::Header,
            header: OboHeader::default(),
        }
    }

    /// Header captured so far. Complete once the first stanza has been
    /// yielded or the input is exhausted.
    #[must_use]
    pub const fn header(&self) -> &OboHeader {
        &self.header
    }

    #[must_use]
    pub fn into_header(self) -> OboHeader {
        self.header
    }

    /// Number of raw lines consumed.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Enter `next` and hand back the record that was open, if any.
    fn transition(&mut self, next: State) -> Option<StanzaRecord> {
        match std::mem::replace(&mut self.state, next) {
            State::InTerm(record) => Some(record),
            _ => None,
        }
    }
}

impl<I> Iterator for Stanzas<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<StanzaRecord, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Done) {
            return None;
        }

        loop {
            let raw = match self.lines.next() {
                Some(Ok(raw)) => raw,
                Some(Err(source)) => {
                    self.state = State::Done;
                    return Some(Err(ParserError::Read {
                        line: self.line_no + 1,
                        source,
                    }));
                }
                None => return self.transition(State::Done).map(Ok),
            };
            self.line_no += 1;

            match line::classify(&raw) {
                Line::TermMarker => {
                    if let Some(done) = self.transition(State::InTerm(StanzaRecord::default())) {
                        return Some(Ok(done));
                    }
                }
                Line::OtherMarker => {
                    if let Some(done) = self.transition(State::Skipping) {
                        return Some(Ok(done));
                    }
                }
                Line::TagValue { tag, value } => match &mut self.state {
                    State::InTerm(record) => match Tag::parse(tag) {
                        Some(known) => record.insert(known, value),
                        None => trace!(line = self.line_no, tag, "ignoring unrecognized tag"),
                    },
                    State::Header => self.header.insert(tag, value),
                    State::Skipping | State::Done => {}
                },
                Line::Other => {}
            }
        }
    }
}

/// Scan stanzas from any buffered reader.
pub fn read_stanzas<R: BufRead>(reader: R) -> Stanzas<io::Lines<R>> {
    Stanzas::new(reader.lines())
}

/// Scan stanzas from an in-memory string.
#[must_use]
pub fn parse_str(text: &str) -> Stanzas<io::Lines<&[u8]>> {
    read_stanzas(text.as_bytes())
}

/// Open an ontology file and scan its stanzas.
///
/// # Errors
///
/// Returns `ParserError::Open` if the file cannot be opened.
pub fn open(path: &Path) -> Result<Stanzas<io::Lines<BufReader<File>>>, ParserError> {
    let file = File::open(path).map_err(|source| ParserError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_stanzas(BufReader::new(file)))
}
