//! Block attributes
//!
//! Attributes are `<Key> value` pairs at the start of a parameter block body.
//! They are kept as an ordered list: repeated keys stay where they appeared.

use serde::Serialize;

use super::block::ParamBlock;
use super::scalar::{Scalar, ScalarList};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Scalar(Scalar),
    List(ScalarList),
    Block(Box<ParamBlock>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: AttrValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AttrList(Vec<Attribute>);

impl AttrList {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self(attributes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }

    /// First value recorded under `name`
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }

    /// Every value recorded under `name`, in source order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttrValue> + 'a {
        self.0
            .iter()
            .filter(move |attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
