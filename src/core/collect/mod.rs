//! Declaration collection from structural dumps.
//!
//! The collector parses one file's dump and appends the protocols and classes
//! declared at its top level to a [`Namespace`]. It performs no I/O.

pub mod types;

pub use types::*;

use anyhow::{Context, Result, bail};

/// Parse a structural dump into its root node.
///
/// An empty dump (the parser printed nothing, typically after a failure that
/// was already reported) is an empty tree rather than an error.
pub fn parse_structure(dump: &str) -> Result<StructureNode> {
    if dump.trim().is_empty() {
        return Ok(StructureNode::default());
    }
    serde_json::from_str(dump).context("Failed to parse structural dump")
}

/// Collect the bridgeable declarations of one file into `namespace`.
///
/// Only the root's direct children are scanned. Underscore-prefixed names are
/// skipped; a protocol or class with no usable name is an error.
pub fn collect_declarations(dump: &str, namespace: &mut Namespace) -> Result<()> {
    let root = parse_structure(dump)?;

    for node in &root.substructure {
        let (names, label) = match &node.kind {
            Some(DeclarationKind::Protocol) => (&mut namespace.protocol_names, "protocol"),
            Some(DeclarationKind::Class) => (&mut namespace.class_names, "class"),
            Some(DeclarationKind::Other(_)) | None => continue,
        };

        let Some(name) = node.exported_name() else {
            bail!("{label} is missing name");
        };
        if name.starts_with('_') {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(())
}
