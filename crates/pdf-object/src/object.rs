//! PDF object variants.

use std::fmt;

use indexmap::IndexMap;

/// Identifier of an indirect object: object number plus generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    pub number: u32,
    pub generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl From<(u32, u16)> for ObjectId {
    fn from((number, generation): (u32, u16)) -> Self {
        Self::new(number, generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// Field-less tag of an [`Object`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Null,
    Boolean,
    Integer,
    Float,
    Name,
    StringLiteral,
    HexLiteral,
    Array,
    Dictionary,
    Stream,
    Reference,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Null => "null",
            ObjectKind::Boolean => "boolean",
            ObjectKind::Integer => "integer",
            ObjectKind::Float => "float",
            ObjectKind::Name => "name",
            ObjectKind::StringLiteral => "string literal",
            ObjectKind::HexLiteral => "hex literal",
            ObjectKind::Array => "array",
            ObjectKind::Dictionary => "dictionary",
            ObjectKind::Stream => "stream",
            ObjectKind::Reference => "reference",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A PDF object, possibly an indirect reference to another one.
///
/// Literal and hex strings are distinct variants, as are integers and
/// floats: they carry the same kind of content but are never equal to each
/// other under structural comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// Name token without the leading `/`.
    Name(String),
    StringLiteral(Vec<u8>),
    /// Hex string digits without the enclosing `<` `>`.
    HexLiteral(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Stream),
    Reference(ObjectId),
}

impl Object {
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Object::StringLiteral(bytes.into())
    }

    pub fn hex(digits: impl Into<String>) -> Self {
        Object::HexLiteral(digits.into())
    }

    pub fn reference(number: u32, generation: u16) -> Self {
        Object::Reference(ObjectId::new(number, generation))
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Null => ObjectKind::Null,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Integer(_) => ObjectKind::Integer,
            Object::Float(_) => ObjectKind::Float,
            Object::Name(_) => ObjectKind::Name,
            Object::StringLiteral(_) => ObjectKind::StringLiteral,
            Object::HexLiteral(_) => ObjectKind::HexLiteral,
            Object::Array(_) => ObjectKind::Array,
            Object::Dictionary(_) => ObjectKind::Dictionary,
            Object::Stream(_) => ObjectKind::Stream,
            Object::Reference(_) => ObjectKind::Reference,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Object::Reference(_))
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Integer(i64::from(value))
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Float(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<Dictionary> for Object {
    fn from(dict: Dictionary) -> Self {
        Object::Dictionary(dict)
    }
}

impl From<Stream> for Object {
    fn from(stream: Stream) -> Self {
        Object::Stream(stream)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

/// Mapping from name keys to objects. Keeps insertion order for display;
/// lookups are by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: IndexMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Object>) -> Option<Object> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Object> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Object> {
        self.entries.keys()
    }
}

impl<K: Into<String>, V: Into<Object>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Object);
    type IntoIter = indexmap::map::Iter<'a, String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A stream: its dictionary plus the raw (still encoded) payload.
///
/// `raw` is `None` until the payload has been loaded by the document layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    pub dict: Dictionary,
    pub raw: Option<Vec<u8>>,
}

impl Stream {
    pub fn new(dict: Dictionary, raw: Vec<u8>) -> Self {
        Self {
            dict,
            raw: Some(raw),
        }
    }

    /// Stream whose payload has not been loaded yet.
    pub fn unloaded(dict: Dictionary) -> Self {
        Self { dict, raw: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.raw.is_some()
    }
}
