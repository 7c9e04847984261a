//! Template discovery across standard repository locations

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::TemplateError;

/// Single-template locations in priority order, relative to the checkout
/// root. Matching within each directory is case-insensitive.
const SINGLE_TEMPLATE_PATHS: &[(&str, &str)] = &[
    (".github", "pull_request_template.md"),
    (".github", "PULL_REQUEST_TEMPLATE.md"),
    ("", "pull_request_template.md"),
    ("", "PULL_REQUEST_TEMPLATE.md"),
    ("docs", "pull_request_template.md"),
    ("docs", "PULL_REQUEST_TEMPLATE.md"),
];

/// Casings checked for the multi-template directory under `.github/`
const MULTI_TEMPLATE_DIRS: &[&str] = &["PULL_REQUEST_TEMPLATE", "pull_request_template"];

/// Source location category of a discovered template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    /// `.github/pull_request_template.md`
    GithubSingle,
    /// `.github/PULL_REQUEST_TEMPLATE/*.md`
    GithubMulti,
    /// `docs/pull_request_template.md`
    Docs,
    /// `pull_request_template.md` at the checkout root
    Root,
}

impl TemplateSource {
    /// Get the wire name for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GithubSingle => "github_single",
            Self::GithubMulti => "github_multi",
            Self::Docs => "docs",
            Self::Root => "root",
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A PR template file discovered in a repository checkout.
///
/// Built fresh on every scan and never mutated; the template set for a
/// checkout is a pure function of the filesystem state at scan time.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    /// Filesystem path of the template file
    pub path: PathBuf,
    /// Base name, used for default-name matching and alphabetic ordering
    pub filename: String,
    /// Full UTF-8 contents
    pub content: String,
    /// Where the template was found
    pub source: TemplateSource,
    /// True for every single-location template and for a multi-directory
    /// file named `default.md` (case-insensitive)
    pub is_default_candidate: bool,
}

impl Template {
    /// First `n` characters of the content, for listings
    pub fn preview(&self, n: usize) -> &str {
        match self.content.char_indices().nth(n) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Scans a repository checkout for PR templates
pub struct TemplateLocator {
    workspace_root: PathBuf,
}

impl TemplateLocator {
    /// Create a locator for the given checkout root.
    ///
    /// The root is assumed to exist; a missing root behaves like an empty
    /// checkout.
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            workspace_root: workspace_root.as_ref().to_path_buf(),
        }
    }

    /// Enumerate every PR template in the checkout.
    ///
    /// Single locations are scanned in priority order, then the
    /// `.github/PULL_REQUEST_TEMPLATE/` directory for `*.md` files. A path
    /// is recorded at most once; missing directories are skipped.
    pub fn enumerate(&self) -> Result<Vec<Template>, TemplateError> {
        let mut templates = Vec::new();
        let mut found: HashSet<PathBuf> = HashSet::new();

        for &(dir, filename) in SINGLE_TEMPLATE_PATHS {
            if let Some(template) = self.find_in_dir(dir, filename)?
                && !found.contains(&template.path)
            {
                found.insert(template.path.clone());
                templates.push(template);
            }
        }

        for dir_name in MULTI_TEMPLATE_DIRS {
            let dir = self.workspace_root.join(".github").join(dir_name);
            if !dir.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&dir).map_err(|e| TemplateError::scan(&dir, e))? {
                let entry = entry.map_err(|e| TemplateError::scan(&dir, e))?;
                let path = entry.path();
                if !path.is_file() || !path.extension().map(|e| e == "md").unwrap_or(false) {
                    continue;
                }
                if found.contains(&path) {
                    continue;
                }
                let filename = entry.file_name().to_string_lossy().into_owned();
                let content =
                    fs::read_to_string(&path).map_err(|e| TemplateError::scan(&path, e))?;
                let is_default_candidate = filename.to_lowercase() == "default.md";
                found.insert(path.clone());
                templates.push(Template {
                    path,
                    filename,
                    content,
                    source: TemplateSource::GithubMulti,
                    is_default_candidate,
                });
            }
        }

        debug!(root = ?self.workspace_root, count = templates.len(), "enumerated templates");
        Ok(templates)
    }

    /// Select the default template.
    ///
    /// Precedence: any single-location template in priority order, then a
    /// multi-directory `default.md`, then the sole template if there is
    /// exactly one, then the alphabetically-first filename
    /// (case-insensitive).
    pub fn default_template(&self) -> Result<Option<Template>, TemplateError> {
        let templates = self.enumerate()?;
        if templates.is_empty() {
            return Ok(None);
        }

        if let Some(t) = templates
            .iter()
            .find(|t| t.source != TemplateSource::GithubMulti)
        {
            return Ok(Some(t.clone()));
        }

        if let Some(t) = templates.iter().find(|t| t.is_default_candidate) {
            return Ok(Some(t.clone()));
        }

        if templates.len() == 1 {
            return Ok(templates.into_iter().next());
        }

        Ok(templates
            .into_iter()
            .min_by_key(|t| t.filename.to_lowercase()))
    }

    /// Look up a template by exact path or by path suffix, so callers may
    /// pass either absolute or checkout-relative paths.
    pub fn find_by_path(&self, path: impl AsRef<Path>) -> Result<Option<Template>, TemplateError> {
        let needle = path.as_ref();
        let templates = self.enumerate()?;
        Ok(templates
            .into_iter()
            .find(|t| t.path == needle || t.path.ends_with(needle)))
    }

    /// Find one file in a directory, exact casing first, then an explicit
    /// case-insensitive scan of the directory's immediate entries. The scan
    /// is done by hand so behavior is identical on case-sensitive and
    /// case-insensitive filesystems.
    fn find_in_dir(&self, dir: &str, filename: &str) -> Result<Option<Template>, TemplateError> {
        let search_dir = if dir.is_empty() {
            self.workspace_root.clone()
        } else {
            self.workspace_root.join(dir)
        };
        if !search_dir.exists() {
            return Ok(None);
        }

        let source = source_for_dir(dir);

        let exact = search_dir.join(filename);
        if exact.is_file() {
            return Ok(Some(self.read_single(exact, source)?));
        }

        let lower = filename.to_lowercase();
        for entry in fs::read_dir(&search_dir).map_err(|e| TemplateError::scan(&search_dir, e))? {
            let entry = entry.map_err(|e| TemplateError::scan(&search_dir, e))?;
            let path = entry.path();
            if path.is_file() && entry.file_name().to_string_lossy().to_lowercase() == lower {
                return Ok(Some(self.read_single(path, source)?));
            }
        }

        Ok(None)
    }

    fn read_single(
        &self,
        path: PathBuf,
        source: TemplateSource,
    ) -> Result<Template, TemplateError> {
        let content = fs::read_to_string(&path).map_err(|e| TemplateError::scan(&path, e))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(path = ?path, source = %source, "found template");
        Ok(Template {
            path,
            filename,
            content,
            source,
            is_default_candidate: true,
        })
    }
}

fn source_for_dir(dir: &str) -> TemplateSource {
    match dir {
        ".github" => TemplateSource::GithubSingle,
        "docs" => TemplateSource::Docs,
        "" => TemplateSource::Root,
        _ => TemplateSource::GithubSingle,
    }
}
