//! Element definitions for the XProtocol tree

pub mod attribute;
pub mod block;
pub mod card;
pub mod dependency;
pub mod functor;
pub mod param;
pub mod protocol;
pub mod scalar;

pub use attribute::{AttrList, AttrValue, Attribute};
pub use block::ParamBlock;
pub use card::{CardLayout, CardStyle, Control, Line, Pos};
pub use dependency::Dependency;
pub use functor::{Functor, PipeService, Wiring, WiringKind};
pub use param::{
    Param, ParamArray, ParamBool, ParamChoice, ParamDouble, ParamLong, ParamMap, ParamString,
};
pub use protocol::{EvaString, EvaStringTable, Header, Protocol};
pub use scalar::{Scalar, ScalarList};
