use serde::{Deserialize, Deserializer};

/// Declarations collected from every Swift file in one source directory.
///
/// Names are kept in discovery order (directory walk order, then in-file
/// order). Duplicates are preserved: regeneration always replaces the whole
/// header, so a repeated stub is harmless.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub protocol_names: Vec<String>,
    pub class_names: Vec<String>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.protocol_names.is_empty() && self.class_names.is_empty()
    }
}

/// The declaration kinds the collector distinguishes.
///
/// Deserialized from the `key.kind` string of a structural dump.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DeclarationKind {
    Protocol,
    Class,
    Other(String),
}

impl DeclarationKind {
    pub const PROTOCOL_TAG: &'static str = "source.lang.swift.decl.protocol";
    pub const CLASS_TAG: &'static str = "source.lang.swift.decl.class";
}

impl From<String> for DeclarationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::PROTOCOL_TAG => Self::Protocol,
            Self::CLASS_TAG => Self::Class,
            _ => Self::Other(tag),
        }
    }
}

/// One node of a structural dump.
///
/// Only the keys the collector needs are modelled; offsets, lengths and the
/// rest of the parser's output are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct StructureNode {
    #[serde(rename = "key.kind", default)]
    pub kind: Option<DeclarationKind>,
    #[serde(rename = "key.name", default)]
    pub name: Option<String>,
    #[serde(rename = "key.runtime_name", default)]
    pub runtime_name: Option<String>,
    /// Direct children. An explicit `null` reads as no children.
    #[serde(rename = "key.substructure", default, deserialize_with = "null_as_empty")]
    pub substructure: Vec<StructureNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<StructureNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<StructureNode>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl StructureNode {
    /// The name this declaration is visible under from Objective-C.
    ///
    /// Prefers the runtime name unless it is empty or underscore-prefixed, then
    /// falls back to the source name. Returns `None` when neither yields a
    /// non-empty name. The result may still start with `_`; callers decide
    /// whether to skip it.
    pub fn exported_name(&self) -> Option<&str> {
        match self.runtime_name.as_deref() {
            Some(runtime) if !runtime.is_empty() && !runtime.starts_with('_') => Some(runtime),
            _ => self.name.as_deref().filter(|name| !name.is_empty()),
        }
    }
}
