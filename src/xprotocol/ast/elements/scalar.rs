//! Scalar values and homogeneous scalar lists

use serde::Serialize;
use std::fmt;

/// A single literal value. Integers and floats are distinct kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
}

impl Scalar {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Long(_) => "long",
            Scalar::Double(_) => "double",
            Scalar::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Long(value) => write!(f, "{}", value),
            Scalar::Double(value) => write!(f, "{:?}", value),
            Scalar::String(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// A brace-delimited list whose elements all share one scalar kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarList {
    Bool(Vec<bool>),
    Long(Vec<i64>),
    Double(Vec<f64>),
    String(Vec<String>),
}

impl ScalarList {
    pub fn len(&self) -> usize {
        match self {
            ScalarList::Bool(items) => items.len(),
            ScalarList::Long(items) => items.len(),
            ScalarList::Double(items) => items.len(),
            ScalarList::String(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ScalarList::Bool(_) => "bool",
            ScalarList::Long(_) => "long",
            ScalarList::Double(_) => "double",
            ScalarList::String(_) => "string",
        }
    }

    /// Element at `index` as a standalone scalar
    pub fn get(&self, index: usize) -> Option<Scalar> {
        match self {
            ScalarList::Bool(items) => items.get(index).copied().map(Scalar::Bool),
            ScalarList::Long(items) => items.get(index).copied().map(Scalar::Long),
            ScalarList::Double(items) => items.get(index).copied().map(Scalar::Double),
            ScalarList::String(items) => items.get(index).cloned().map(Scalar::String),
        }
    }
}

impl fmt::Display for ScalarList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for index in 0..self.len() {
            if let Some(item) = self.get(index) {
                write!(f, " {}", item)?;
            }
        }
        write!(f, " }}")
    }
}
