//! Frontmatter extraction.
//!
//! A content file opens with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! preview: /assets/img/hello.png
//! ---
//! Body text...
//! ```
//!
//! [`extract`] isolates and parses that block into a key-ordered
//! [`Mapping`]. A key repeated within one mapping keeps its last value, as
//! Jekyll does. [`raw_preview`] separately pulls the unparsed text of the
//! `preview:` line, which is only used to show authors what they wrote.

use crate::error::FrontmatterError;
use regex::Regex;
use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};
use std::fmt;
use std::sync::LazyLock;

/// Opening `---` line, lazily captured block, closing `---` line (which may
/// end the file).
static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap());

static RE_RAW_PREVIEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^preview:[ \t]*(.*?)[ \t]*\r?$").unwrap());

/// A parsed frontmatter block.
#[derive(Debug, Clone)]
pub struct Frontmatter {
    /// Parsed key/value pairs, in document order.
    pub fields: Mapping,
}

/// The `preview:` line as written, before YAML interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPreview {
    pub text: String,
    /// 1-based line number within the whole file.
    pub line: usize,
}

/// Returns the text between the opening and closing `---` lines, or `None`
/// if the file does not start with a delimited block.
pub fn block(content: &str) -> Option<&str> {
    RE_BLOCK
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts and parses the frontmatter block of `content`.
///
/// # Errors
///
/// - [`FrontmatterError::Missing`] when there is no delimited block.
/// - [`FrontmatterError::Yaml`] when the block is not valid YAML.
/// - [`FrontmatterError::NotAMapping`] when the block is empty or is a
///   scalar/sequence rather than `key: value` pairs.
pub fn extract(content: &str) -> Result<Frontmatter, FrontmatterError> {
    let raw = block(content).ok_or(FrontmatterError::Missing)?;
    match serde_yaml::from_str::<LastWins>(raw)?.0 {
        Value::Mapping(fields) => Ok(Frontmatter { fields }),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

/// A YAML value whose mappings tolerate repeated keys.
///
/// `serde_yaml`'s own [`Mapping`] rejects duplicates outright; here a later
/// entry overwrites the earlier one in place.
struct LastWins(Value);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LastWinsVisitor).map(LastWins)
    }
}

struct LastWinsVisitor;

impl<'de> de::Visitor<'de> for LastWinsVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(n)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        LastWins::deserialize(deserializer).map(|v| v.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(LastWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut fields = Mapping::new();
        while let Some((LastWins(key), LastWins(value))) = map.next_entry()? {
            fields.insert(key, value);
        }
        Ok(Value::Mapping(fields))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, variant) = data.variant::<String>()?;
        let LastWins(value) = variant.newtype_variant()?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

/// Finds the `preview:` line inside the frontmatter block of `content`.
///
/// Works even when the block fails to parse as YAML, so a parse-error
/// report can still show what the author typed. With a repeated key the
/// last line is the one reported, matching the parsed value.
pub fn raw_preview(content: &str) -> Option<RawPreview> {
    let raw = block(content)?;
    let caps = RE_RAW_PREVIEW.captures_iter(raw).last()?;
    let whole = caps.get(0)?;
    // +1 for the opening delimiter line, +1 for 1-based numbering.
    let line = raw[..whole.start()].matches('\n').count() + 2;
    Some(RawPreview {
        text: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        line,
    })
}

impl Frontmatter {
    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `title` field as display text, or `(no title)`.
    pub fn title(&self) -> String {
        match self.get("title") {
            None | Some(Value::Null) => "(no title)".to_string(),
            Some(value) => scalar_to_string(value),
        }
    }
}

/// Renders a YAML value as the text an author would expect to see.
///
/// Strings are returned verbatim, numbers and booleans in YAML form, and
/// collections as serialized YAML.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
