//! Value-carrying parameter blocks and maps

use serde::Serialize;

use super::attribute::AttrList;
use super::block::ParamBlock;
use super::scalar::ScalarList;

/// A single-valued parameter. `value` is `None` when the block body holds no
/// value, which is not the same as a zero, `false` or empty-string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param<T> {
    pub name: String,
    pub attrs: AttrList,
    pub value: Option<T>,
}

pub type ParamBool = Param<bool>;
pub type ParamLong = Param<i64>;
pub type ParamDouble = Param<f64>;
pub type ParamString = Param<String>;

impl<T> Param<T> {
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

/// Array parameter: attributes followed by one or more value sections, each
/// either empty (`{ }`) or a homogeneous list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamArray {
    pub name: String,
    pub attrs: AttrList,
    pub sections: Vec<Option<ScalarList>>,
}

impl ParamArray {
    /// The first value section
    pub fn value(&self) -> Option<&ScalarList> {
        self.sections.first().and_then(Option::as_ref)
    }
}

/// Choice parameter: its options live in the attributes (`<Limit>`), the
/// selected entry is the optional trailing string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamChoice {
    pub name: String,
    pub attrs: AttrList,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParamMap {
    pub name: String,
    pub attrs: AttrList,
    pub blocks: Vec<ParamBlock>,
}
