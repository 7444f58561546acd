//! Message body - rich-text delta or plain/HTML text
//!
//! The format is decided once, when a message is ingested, and persisted next
//! to the raw body so readers never have to guess it again.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern is valid"));

/// Persisted discriminant of a [`MessageBody`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFormat {
    RichText,
    Plain,
}

impl BodyFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RichText => "rich_text",
            Self::Plain => "plain",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rich_text" => Some(Self::RichText),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single delta operation
///
/// `insert` is a string for text runs and an object for embeds (images,
/// formulas). Retain/delete ops carry no insert at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaOp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

impl DeltaOp {
    /// Text carried by this op, if its insert is a string
    pub fn text(&self) -> Option<&str> {
        self.insert.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Deserialize)]
struct DeltaDocument {
    ops: Vec<DeltaOp>,
}

/// Parsed rich-text delta together with the exact source it came from
#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    source: String,
    ops: Vec<DeltaOp>,
}

impl RichText {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let document: DeltaDocument = serde_json::from_str(raw)?;
        Ok(Self {
            source: raw.to_string(),
            ops: document.ops,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ops(&self) -> &[DeltaOp] {
        &self.ops
    }

    /// String inserts in document order
    pub fn text_fragments(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DeltaOp::text)
    }
}

/// Message body as a tagged union
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    RichText(RichText),
    Plain(String),
}

impl MessageBody {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Legacy classification for bodies that arrive without a format: a JSON
    /// object with an `ops` array is rich text, anything else is plain.
    ///
    /// Every op must be an object. A delta holding a non-object op such as
    /// `null` is classified as plain text as a whole, so its raw JSON is
    /// what gets scanned for `@name` matches.
    pub fn classify(raw: &str) -> Self {
        match RichText::parse(raw) {
            Ok(rich) => Self::RichText(rich),
            Err(_) => Self::Plain(raw.to_string()),
        }
    }

    /// Build a body in an explicit format
    pub fn parse(raw: &str, format: BodyFormat) -> Result<Self, DomainError> {
        match format {
            BodyFormat::Plain => Ok(Self::Plain(raw.to_string())),
            BodyFormat::RichText => RichText::parse(raw)
                .map(Self::RichText)
                .map_err(|e| DomainError::InvalidBody(e.to_string())),
        }
    }

    /// Explicit format wins, otherwise fall back to [`MessageBody::classify`]
    pub fn from_input(raw: &str, format: Option<BodyFormat>) -> Result<Self, DomainError> {
        match format {
            Some(format) => Self::parse(raw, format),
            None => Ok(Self::classify(raw)),
        }
    }

    pub fn format(&self) -> BodyFormat {
        match self {
            Self::RichText(_) => BodyFormat::RichText,
            Self::Plain(_) => BodyFormat::Plain,
        }
    }

    /// Body exactly as stored
    pub fn raw(&self) -> &str {
        match self {
            Self::RichText(rich) => rich.source(),
            Self::Plain(text) => text,
        }
    }

    /// Human-readable text for notification previews
    ///
    /// Rich text concatenates its string inserts; plain bodies have HTML tags
    /// stripped. Both are trimmed.
    pub fn text_preview(&self) -> String {
        match self {
            Self::RichText(rich) => rich.text_fragments().collect::<String>().trim().to_string(),
            Self::Plain(text) => HTML_TAG.replace_all(text, "").trim().to_string(),
        }
    }
}
