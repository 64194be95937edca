//! Functors and pipe services
//!
//! Both describe a processing stage implemented by a named class. A functor
//! additionally carries its event/method/connection wiring, whose strings are
//! opaque type signatures kept verbatim.

use serde::Serialize;

use super::attribute::AttrList;
use super::block::ParamBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WiringKind {
    Event,
    Method,
    Connection,
}

impl WiringKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WiringKind::Event => "Event",
            WiringKind::Method => "Method",
            WiringKind::Connection => "Connection",
        }
    }
}

/// One `<Event."...">`, `<Method."...">` or `<Connection."...">` block
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Wiring {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Functor {
    pub name: String,
    pub attrs: AttrList,
    pub class: String,
    pub blocks: Vec<ParamBlock>,
    pub event: Wiring,
    pub method: Wiring,
    pub connection: Wiring,
}

impl Functor {
    pub fn wiring(&self, kind: WiringKind) -> &Wiring {
        match kind {
            WiringKind::Event => &self.event,
            WiringKind::Method => &self.method,
            WiringKind::Connection => &self.connection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeService {
    pub name: String,
    pub attrs: AttrList,
    pub class: String,
    pub blocks: Vec<ParamBlock>,
}
