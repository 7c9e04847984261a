//! Non-destructive PR body composition
//!
//! Generated content is kept inside a delimited block so regeneration can
//! replace it without touching anything a human wrote around it. All
//! operations are pure functions over their string inputs.

use crate::error::TemplateError;
use crate::{BLOCK_BEGIN, BLOCK_END};

/// Wrap content in block markers.
///
/// Every insertion path funnels through this so the marker layout stays
/// consistent across documents.
pub fn wrap_block(content: &str) -> String {
    format!("{BLOCK_BEGIN}\n{content}\n{BLOCK_END}")
}

/// Compose a PR body from a template and generated content.
///
/// The template's structure is preserved in full; the generated content is
/// inserted as a delimited block after any YAML frontmatter, otherwise at
/// the top. An empty template yields just the block; empty generated
/// content leaves the template unchanged.
pub fn compose(template: &str, generated: &str) -> String {
    let template = template.replace("\r\n", "\n");
    let template = template.trim();
    let generated = generated.replace("\r\n", "\n");
    let generated = generated.trim();

    if template.is_empty() {
        return wrap_block(generated);
    }
    if generated.is_empty() {
        return template.to_string();
    }

    insert_block(template, &wrap_block(generated))
}

/// Replace the generated block in an existing body, or insert one if absent.
///
/// Text outside the block, including manual edits made after composition,
/// is left byte-identical. Repeating the call with the same content yields
/// the same document.
pub fn update_block(existing: &str, new_content: &str) -> Result<String, TemplateError> {
    let existing = existing.replace("\r\n", "\n");
    let new_content = new_content.replace("\r\n", "\n");
    let new_content = new_content.trim();

    match block_span(&existing)? {
        Some((start, end)) => {
            let block = wrap_block(new_content);
            let mut out = String::with_capacity(existing.len() - (end - start) + block.len());
            out.push_str(&existing[..start]);
            out.push_str(&block);
            out.push_str(&existing[end..]);
            Ok(out)
        }
        None => Ok(insert_block(&existing, &wrap_block(new_content))),
    }
}

/// Content of the generated block, trimmed, if one is present
pub fn extract_block(document: &str) -> Option<String> {
    let begin = document.find(BLOCK_BEGIN)?;
    let after = begin + BLOCK_BEGIN.len();
    let rel = document[after..].find(BLOCK_END)?;
    Some(document[after..after + rel].trim().to_string())
}

/// Whether a document carries generated-block markers
pub fn has_block(document: &str) -> bool {
    document.contains(BLOCK_BEGIN) && document.contains(BLOCK_END)
}

/// Insert a wrapped block into a document, after frontmatter when present
fn insert_block(document: &str, block: &str) -> String {
    match split_frontmatter(document) {
        Some((frontmatter, rest)) => {
            format!("{frontmatter}\n{block}\n\n{}", rest.trim_start())
                .trim()
                .to_string()
        }
        None => format!("{block}\n\n{document}").trim().to_string(),
    }
}

/// Split off a YAML frontmatter prefix.
///
/// The opening `---` must sit at byte 0; the prefix is closed by the first
/// following `---` line, whose trailing newline belongs to the frontmatter.
/// Frontmatter after leading whitespace is not recognized.
fn split_frontmatter(document: &str) -> Option<(&str, &str)> {
    let body = document.strip_prefix("---\n")?;
    let close = body.find("\n---")?;
    let mut end = 4 + close + 4;
    if document[end..].starts_with('\n') {
        end += 1;
    }
    Some((&document[..end], &document[end..]))
}

/// Find the span of the generated block: first begin marker paired with the
/// first end marker after it, markers inclusive.
///
/// A begin marker without a closing end, an end marker with no begin before
/// it, or a second begin after the block are structural errors; replacing
/// anything in such a document would corrupt it.
fn block_span(document: &str) -> Result<Option<(usize, usize)>, TemplateError> {
    let Some(begin) = document.find(BLOCK_BEGIN) else {
        return match document.find(BLOCK_END) {
            Some(_) => Err(TemplateError::Structural(
                "end marker without begin marker".to_string(),
            )),
            None => Ok(None),
        };
    };

    if document[..begin].contains(BLOCK_END) {
        return Err(TemplateError::Structural(
            "end marker before begin marker".to_string(),
        ));
    }

    let after_begin = begin + BLOCK_BEGIN.len();
    let Some(rel) = document[after_begin..].find(BLOCK_END) else {
        return Err(TemplateError::Structural(
            "begin marker without end marker".to_string(),
        ));
    };
    let end = after_begin + rel + BLOCK_END.len();

    if document[end..].contains(BLOCK_BEGIN) {
        return Err(TemplateError::Structural(
            "multiple begin markers".to_string(),
        ));
    }

    Ok(Some((begin, end)))
}
