//! Bridging header generation.
//!
//! Renders a [`Namespace`] into an Objective-C header that declares every
//! collected protocol and class as an empty stub.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::collect::Namespace;

static TRAILING_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());
static BLANK_LINES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Fixed text surrounding the generated stubs.
#[derive(Debug, Clone)]
pub struct HeaderOptions<'a> {
    /// Superclass of every class stub.
    pub base_class: &'a str,
    /// Copyright line of the preamble.
    pub copyright: &'a str,
    /// Name of the tool, quoted in the "generated by" notice.
    pub generator: &'a str,
    /// Command users should run instead of editing the header.
    pub regenerate_command: &'a str,
}

/// Render the stub blocks: protocols first, then classes, in discovery order.
pub fn render_body(namespace: &Namespace, base_class: &str) -> String {
    let protocols = namespace
        .protocol_names
        .iter()
        .map(|name| format!("@protocol {name}\n@end"));
    let classes = namespace
        .class_names
        .iter()
        .map(|name| format!("@interface {name} : {base_class}\n@end"));

    protocols
        .chain(classes)
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

fn render_preamble(options: &HeaderOptions<'_>) -> String {
    format!(
        "//
//  {copyright}
//

#import <Foundation/Foundation.h>

// NOTE: This file is generated by {generator}.
// Do not manually edit it, instead run `{command}`.
",
        copyright = options.copyright,
        generator = options.generator,
        command = options.regenerate_command,
    )
}

/// Render the complete header, or `None` when there is nothing to declare.
pub fn render_header(namespace: &Namespace, options: &HeaderOptions<'_>) -> Option<String> {
    let body = render_body(namespace, options.base_class);
    if body.is_empty() {
        return None;
    }

    let header = format!("{}\n{}", render_preamble(options), body);
    Some(normalize(&header))
}

/// Canonicalize generated text.
///
/// Line endings become `\n`, trailing whitespace is stripped, runs of blank
/// lines collapse to one, and the text ends with exactly one newline.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = TRAILING_WHITESPACE_REGEX.replace_all(&text, "");
    let text = BLANK_LINES_REGEX.replace_all(&text, "\n\n");
    let text = text.trim_matches('\n');
    if text.is_empty() {
        String::new()
    } else {
        format!("{text}\n")
    }
}

/// Write the header for `namespace` to `path`.
///
/// Nothing is written, and no directory is created, when the namespace holds
/// no declarations. Otherwise missing parent directories are created and any
/// existing file is overwritten. Returns whether a file was written.
pub fn write_header(namespace: &Namespace, path: &Path, options: &HeaderOptions<'_>) -> Result<bool> {
    let Some(content) = render_header(namespace, options) else {
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write header: {}", path.display()))?;

    Ok(true)
}
