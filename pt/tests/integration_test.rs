//! Integration tests for prtemplate
//!
//! These tests verify template discovery and composition end to end against
//! real directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use prtemplate::{
    BLOCK_BEGIN, BLOCK_END, TemplateLocator, TemplateSource, compose, extract_block, has_block,
    update_block,
};
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Discovery + selection
// =============================================================================

#[test]
fn test_full_repo_discovery_order() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".github/pull_request_template.md", "github\n");
    write_file(temp.path(), "PULL_REQUEST_TEMPLATE.md", "root\n");
    write_file(temp.path(), "docs/pull_request_template.md", "docs\n");
    write_file(temp.path(), ".github/PULL_REQUEST_TEMPLATE/feature.md", "feat\n");
    write_file(temp.path(), ".github/PULL_REQUEST_TEMPLATE/bugfix.md", "bug\n");

    let locator = TemplateLocator::new(temp.path());
    let templates = locator.enumerate().unwrap();

    assert_eq!(templates.len(), 5);
    // singles in priority order, multi-directory entries at the end
    assert_eq!(templates[0].source, TemplateSource::GithubSingle);
    assert_eq!(templates[1].source, TemplateSource::Root);
    assert_eq!(templates[2].source, TemplateSource::Docs);
    assert_eq!(templates[3].source, TemplateSource::GithubMulti);
    assert_eq!(templates[4].source, TemplateSource::GithubMulti);

    // a single-location template always wins the default selection
    let default = locator.default_template().unwrap().unwrap();
    assert_eq!(default.source, TemplateSource::GithubSingle);
    assert_eq!(default.content, "github\n");
}

#[test]
fn test_multi_only_repo_selection() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".github/PULL_REQUEST_TEMPLATE/release.md", "r\n");
    write_file(temp.path(), ".github/PULL_REQUEST_TEMPLATE/bugfix.md", "b\n");

    let locator = TemplateLocator::new(temp.path());
    // no default.md, more than one file: alphabetically first wins
    let default = locator.default_template().unwrap().unwrap();
    assert_eq!(default.filename, "bugfix.md");

    // adding default.md changes the selection
    write_file(temp.path(), ".github/PULL_REQUEST_TEMPLATE/default.md", "d\n");
    let default = locator.default_template().unwrap().unwrap();
    assert_eq!(default.filename, "default.md");
}

#[test]
fn test_templates_are_rescanned_not_cached() {
    let temp = TempDir::new().unwrap();
    let locator = TemplateLocator::new(temp.path());
    assert!(locator.enumerate().unwrap().is_empty());

    write_file(temp.path(), ".github/pull_request_template.md", "new\n");
    assert_eq!(locator.enumerate().unwrap().len(), 1);
}

#[test]
fn test_listing_serialization_shape() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".github/pull_request_template.md", "## Summary\n");

    let locator = TemplateLocator::new(temp.path());
    let templates = locator.enumerate().unwrap();
    let value = serde_json::to_value(&templates[0]).unwrap();

    assert_eq!(value["source"], "github_single");
    assert_eq!(value["filename"], "pull_request_template.md");
    assert_eq!(value["is_default_candidate"], true);
}

// =============================================================================
// Compose -> manual edit -> regenerate
// =============================================================================

#[test]
fn test_compose_and_regenerate_lifecycle() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        ".github/pull_request_template.md",
        "---\nname: Feature\n---\n\n## Summary\n<!-- Describe changes -->\n\n## Checklist\n- [ ] Tests",
    );

    let locator = TemplateLocator::new(temp.path());
    let template = locator.default_template().unwrap().unwrap();

    // initial composition: block lands after the frontmatter
    let body = compose(&template.content, "Added JWT auth.");
    assert!(body.starts_with("---\nname: Feature\n---\n"));
    assert!(has_block(&body));
    assert_eq!(extract_block(&body).unwrap(), "Added JWT auth.");
    assert!(body.contains("- [ ] Tests"));

    // the user edits the checklist outside the block
    let edited = body.replace("- [ ] Tests", "- [x] Tests pass (manually checked by user)");

    // regeneration replaces only the block
    let updated = update_block(&edited, "Added JWT auth and refresh tokens.").unwrap();
    assert_eq!(
        extract_block(&updated).unwrap(),
        "Added JWT auth and refresh tokens."
    );
    assert!(!updated.contains("Added JWT auth.\n"));
    assert!(updated.contains("- [x] Tests pass (manually checked by user)"));
    assert!(updated.starts_with("---\nname: Feature\n---\n"));

    // repeating the regeneration is a no-op
    let again = update_block(&updated, "Added JWT auth and refresh tokens.").unwrap();
    assert_eq!(again, updated);
    assert_eq!(again.matches(BLOCK_BEGIN).count(), 1);
    assert_eq!(again.matches(BLOCK_END).count(), 1);
}

#[test]
fn test_compose_with_unicode_template_from_disk() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        ".github/pull_request_template.md",
        "## 📝 概要\n\n## ✅ チェックリスト\n- [ ] テスト済み",
    );

    let locator = TemplateLocator::new(temp.path());
    let template = locator.default_template().unwrap().unwrap();
    let body = compose(&template.content, "認証機能を追加しました。");

    assert!(body.contains("## 📝 概要"));
    assert!(body.contains("- [ ] テスト済み"));
    assert_eq!(extract_block(&body).unwrap(), "認証機能を追加しました。");
}

#[test]
fn test_update_surfaces_structural_damage() {
    // A document where the end marker was deleted by hand must not be
    // silently rewritten.
    let broken = format!("{BLOCK_BEGIN}\nold content\n\n## Checklist");
    assert!(update_block(&broken, "new").is_err());
}
