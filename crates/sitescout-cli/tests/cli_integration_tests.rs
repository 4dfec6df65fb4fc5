//! CLI integration tests for sitescout
//!
//! Runs the sitescout binary end-to-end against the bundled demo catalog.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config and any blog API
#[allow(deprecated)]
fn sitescout_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sitescout").unwrap();
    cmd.env("SITESCOUT_CONFIG_DIR", config_dir.path());
    cmd.env_remove("SITESCOUT_BLOG_API_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("suggest"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_suggest_text() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["suggest", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Service] Web Design (/services/web-design)"));
}

#[test]
fn test_suggest_json_is_capped() {
    let dir = TempDir::new().unwrap();
    let output = sitescout_cmd(&dir)
        .args(["suggest", "e", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let suggestions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let suggestions = suggestions.as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 6);
    assert!(suggestions.iter().all(|s| s["type"] != "Blog Post"));
}

#[test]
fn test_suggest_no_match() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["suggest", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions for \"zzzz\""));
}

#[test]
fn test_search_without_query_shows_popular_categories() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse a popular category"))
        .stdout(predicate::str::contains("Digital Marketing"));
}

#[test]
fn test_search_text_shows_tabs() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["search", "harbor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("results for \"harbor\""))
        .stdout(predicate::str::contains("Harbor Coffee Roasters"))
        .stdout(predicate::str::contains("Portfolio (1)"));
}

#[test]
fn test_search_json_from_url() {
    let dir = TempDir::new().unwrap();
    let output = sitescout_cmd(&dir)
        .args(["search", "--url", "?q=seo&tab=blog&sort=recent", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["kind"], "results");
    assert_eq!(outcome["active_tab"], "blog");
    assert_eq!(outcome["results"]["services"].as_array().unwrap().len(), 0);
    assert!(!outcome["results"]["blog"].as_array().unwrap().is_empty());
}

#[test]
fn test_search_empty_tab_message() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["search", "harbor", "--tab", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Blog Posts results for \"harbor\""));
}

#[test]
fn test_search_unknown_tab_fails() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["search", "web", "--tab", "videos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tab"));
}

#[test]
fn test_blog_second_page() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["blog", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2 (9 posts)"))
        .stdout(predicate::str::contains("Web Design Trends for 2024"))
        .stdout(predicate::str::contains("Landing Pages for Paid Campaigns").not());
}

#[test]
fn test_blog_category_filter_json() {
    let dir = TempDir::new().unwrap();
    let output = sitescout_cmd(&dir)
        .args(["blog", "--url", "?category=SEO", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let posts = page["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["category"] == "SEO"));
    assert_eq!(page["categories"][0], "All");
    assert_eq!(page["page_info"]["total_pages"], 1);
}

#[test]
fn test_blog_empty_state() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["blog", "--q", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"))
        .stdout(predicate::str::contains("Page 1 of 1 (0 posts)"));
}

#[test]
fn test_pages_output() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["pages", "--page", "1", "--total", "20"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1 2 3 4 5 … 20\n"));
}

#[test]
fn test_pages_zero_total_fails() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["pages", "--total", "0"])
        .assert()
        .failure();
}

#[test]
fn test_config_path_uses_env_dir() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_get_reset() {
    let dir = TempDir::new().unwrap();

    sitescout_cmd(&dir)
        .args(["config", "set", "listing.page_size", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set listing.page_size = 4"));

    sitescout_cmd(&dir)
        .args(["config", "get", "listing.page_size"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4\n"));

    // page size applies to the listing
    sitescout_cmd(&dir)
        .args(["blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3 (9 posts)"));

    sitescout_cmd(&dir)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration reset to defaults."));

    sitescout_cmd(&dir)
        .args(["config", "get", "listing.page_size"])
        .assert()
        .success()
        .stdout(predicate::str::diff("6\n"));
}

#[test]
fn test_config_set_invalid_value_fails() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["config", "set", "listing.page_size", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for listing.page_size"));
}

#[test]
fn test_config_list() {
    let dir = TempDir::new().unwrap();
    sitescout_cmd(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search.max_suggestions = 6"))
        .stdout(predicate::str::contains("listing.max_visible_pages = 5"));
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    sitescout_cmd(&dir)
        .args(["search", "web", "--catalog"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
