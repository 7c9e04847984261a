//! PRTemplate - PR template discovery and non-destructive composition
//!
//! Locates pull-request description templates in a repository checkout and
//! merges generated content into them without damaging human-authored
//! structure. Generated text lives inside a delimited block; everything
//! outside it (headings, checklists, frontmatter, manual edits) is preserved.
//!
//! # Search order
//!
//! ```text
//! .github/pull_request_template.md      # single, highest priority
//! .github/PULL_REQUEST_TEMPLATE.md
//! pull_request_template.md              # repository root
//! PULL_REQUEST_TEMPLATE.md
//! docs/pull_request_template.md
//! docs/PULL_REQUEST_TEMPLATE.md
//! .github/PULL_REQUEST_TEMPLATE/*.md    # multi-template directory
//! ```
//!
//! # Example
//!
//! ```ignore
//! use prtemplate::{TemplateLocator, compose, update_block};
//!
//! let locator = TemplateLocator::new("/path/to/checkout");
//! let template = locator.default_template()?;
//! let body = compose(&template.unwrap().content, "Added JWT auth.");
//! let body = update_block(&body, "Added JWT auth and refresh tokens.")?;
//! ```

pub mod cli;
pub mod config;
mod compose;
mod error;
mod locator;

pub use compose::{compose, extract_block, has_block, update_block, wrap_block};
pub use error::TemplateError;
pub use locator::{Template, TemplateLocator, TemplateSource};

/// Opening delimiter of the generated-content block
pub const BLOCK_BEGIN: &str = "<!-- dursor:begin -->";

/// Closing delimiter of the generated-content block
pub const BLOCK_END: &str = "<!-- dursor:end -->";

/// Default number of content characters shown in listings
pub const DEFAULT_PREVIEW_CHARS: usize = 200;
