//! Notice text, comment wrapping, and marker detection
//!
//! The notice is a fixed constant. It is wrapped into one of two comment
//! syntaxes depending on the file's extension family, and the first line of
//! the notice doubles as the marker that makes repeat runs idempotent.

use once_cell::sync::Lazy;

/// The copyright notice, unwrapped.
pub const NOTICE: &str = "\
Copyright (C) 2025 Adheesh Trivedi <adheeshtrivedi@gmail.com>

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as
published by the Free Software Foundation, either version 3 of the
License, or (at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU Affero General Public License for more details.";

/// The substring whose presence means "notice already inserted".
///
/// Detection is deliberately a plain substring search, not a full-text match:
/// a hand-edited or truncated header still counts as present and is skipped,
/// never repaired.
pub const MARKER: &str = "Copyright (C) 2025 Adheesh Trivedi";

/// Extensions eligible for processing (lower-cased, without the dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "css", "html", "htm"];

/// Comment syntax family for a supported extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// C-style block comment: `/* ... */`
    Block,
    /// Angle-bracket comment: `<!-- ... -->`
    Markup,
}

impl CommentStyle {
    /// Map a lower-cased extension to its comment family, or None if the
    /// extension is unsupported and must not be mutated.
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "tsx" | "ts" | "jsx" | "js" | "css" => Some(CommentStyle::Block),
            "html" | "htm" => Some(CommentStyle::Markup),
            _ => None,
        }
    }
}

static BLOCK_HEADER: Lazy<String> = Lazy::new(|| wrap_block(NOTICE));
static MARKUP_HEADER: Lazy<String> = Lazy::new(|| wrap_markup(NOTICE));

fn wrap_block(notice: &str) -> String {
    let mut out = String::from("/*\n");
    for line in notice.lines() {
        if line.trim().is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */\n\n");
    out
}

fn wrap_markup(notice: &str) -> String {
    let mut out = String::from("<!--\n");
    for line in notice.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("-->\n\n");
    out
}

/// The comment-wrapped header for a lower-cased extension, or None if the
/// extension is unsupported. Headers are rendered once and shared.
pub fn header_for_extension(ext: &str) -> Option<&'static str> {
    match CommentStyle::for_extension(ext)? {
        CommentStyle::Block => Some(BLOCK_HEADER.as_str()),
        CommentStyle::Markup => Some(MARKUP_HEADER.as_str()),
    }
}

/// Does the content already contain the notice marker?
pub fn has_notice(content: &str) -> bool {
    content.contains(MARKER)
}
