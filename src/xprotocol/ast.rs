//! Tree definitions for the XProtocol format
//!
//! ## Modules
//!
//! - `elements` - protocol, parameter block, card layout and dependency types
//! - `position` - line/column positions and byte offset conversion
//! - `traits` - uniform access to node labels and children

pub mod elements;
pub mod position;
pub mod traits;

pub use elements::{
    AttrList, AttrValue, Attribute, CardLayout, CardStyle, Control, Dependency, EvaString,
    EvaStringTable, Functor, Header, Line, Param, ParamArray, ParamBlock, ParamBool, ParamChoice,
    ParamDouble, ParamLong, ParamMap, ParamString, PipeService, Pos, Protocol, Scalar, ScalarList,
    Wiring, WiringKind,
};
pub use position::{Position, SourceLocation};
pub use traits::{AstNode, Container};
