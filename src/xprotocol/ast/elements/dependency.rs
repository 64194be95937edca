//! Protocol-level dependency declarations

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    pub name: String,
    /// Raw target strings, usually parameter paths
    pub targets: Vec<String>,
    pub dll: Option<String>,
    pub context: Option<String>,
}
