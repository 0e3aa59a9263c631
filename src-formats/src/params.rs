//! Ordered, string-keyed parameter storage.
//!
//! Keys keep their insertion order so that serializers walking the map emit a
//! deterministic byte stream. The numeric `index` is a separate slot id used
//! by hosts for positional lookup and has nothing to do with map order.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Kind of value carried by a [`Parameter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    Number,
    String,
    Bytes,
}

/// Value carried by a [`Parameter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl ParameterValue {
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterValue::Number(_) => ParameterKind::Number,
            ParameterValue::String(_) => ParameterKind::String,
            ParameterValue::Bytes(_) => ParameterKind::Bytes,
        }
    }
}

/// A named preset parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub key: String,
    pub index: i32,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn new(key: impl Into<String>, index: i32, value: ParameterValue) -> Self {
        Self {
            key: key.into(),
            index,
            value,
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.value.kind()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            ParameterValue::Number(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, index) = (&self.key, self.index);
        match &self.value {
            ParameterValue::Number(v) => write!(f, "{key:<32}{index:>6}  {v}"),
            ParameterValue::String(s) => write!(f, "{key:<32}{index:>6}  {s:?}"),
            ParameterValue::Bytes(b) => write!(f, "{key:<32}{index:>6}  <{} bytes>", b.len()),
        }
    }
}

/// Insertion-ordered parameter map with an index lookup on the side
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    entries: Vec<Parameter>,
    by_key: HashMap<String, usize>,
    by_index: BTreeMap<i32, usize>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_key.clear();
        self.by_index.clear();
    }

    /// Insert or replace a parameter. A replaced key keeps its original position.
    pub fn insert(&mut self, param: Parameter) {
        match self.by_key.get(&param.key) {
            Some(&pos) => {
                let new_index = param.index;
                let old_index = std::mem::replace(&mut self.entries[pos], param).index;
                if old_index != new_index {
                    self.reindex(old_index);
                    self.reindex(new_index);
                }
            }
            None => {
                let pos = self.entries.len();
                self.by_key.insert(param.key.clone(), pos);
                self.by_index.entry(param.index).or_insert(pos);
                self.entries.push(param);
            }
        }
    }

    /// Point `index` back at the first entry carrying it, if any.
    fn reindex(&mut self, index: i32) {
        match self.entries.iter().position(|p| p.index == index) {
            Some(pos) => {
                self.by_index.insert(index, pos);
            }
            None => {
                self.by_index.remove(&index);
            }
        }
    }

    pub fn set_number_with_index(&mut self, key: &str, index: i32, value: f64) {
        self.insert(Parameter::new(key, index, ParameterValue::Number(value)));
    }

    /// Update a number, keeping the index of an existing entry (or -1 for new keys).
    pub fn set_number(&mut self, key: &str, value: f64) {
        let index = self.get(key).map_or(-1, |p| p.index);
        self.set_number_with_index(key, index, value);
    }

    pub fn set_string_with_index(&mut self, key: &str, index: i32, value: impl Into<String>) {
        self.insert(Parameter::new(key, index, ParameterValue::String(value.into())));
    }

    pub fn set_bytes_with_index(&mut self, key: &str, index: i32, value: Vec<u8>) {
        self.insert(Parameter::new(key, index, ParameterValue::Bytes(value)));
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.by_key.get(key).map(|&pos| &self.entries[pos])
    }

    /// First parameter registered under a numeric slot id
    pub fn get_by_index(&self, index: i32) -> Option<&Parameter> {
        self.by_index.get(&index).map(|&pos| &self.entries[pos])
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Parameter::as_number)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        match self.get(key).map(|p| &p.value) {
            Some(ParameterValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn bytes(&self, key: &str) -> Option<&[u8]> {
        match self.get(key).map(|p| &p.value) {
            Some(ParameterValue::Bytes(b)) => Some(b),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Parameters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}
