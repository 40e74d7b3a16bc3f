//! Integration tests for SiteStore against a temporary data directory.

use std::path::Path;

use saspo_common::{CmsError, LinkEntry, ReferenceMode};
use saspo_store::{load_content, load_links, save, AddLinkOutcome, SiteStore, UsageKind};
use serde_json::json;
use tempfile::TempDir;

fn test_store(mode: ReferenceMode) -> (TempDir, SiteStore) {
    let tmp = tempfile::tempdir().unwrap();
    let store = SiteStore::new(
        tmp.path().join("data.json"),
        tmp.path().join("links.json"),
        tmp.path().join("static/img"),
        mode,
    );
    store.assets().ensure_exists().unwrap();
    (tmp, store)
}

fn write(path: &Path, text: &str) {
    std::fs::write(path, text).unwrap();
}

// =========================================================================
// JSON store
// =========================================================================

#[test]
fn missing_files_load_as_empty_shapes() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(load_content(&tmp.path().join("data.json")), json!({}));
    assert!(load_links(&tmp.path().join("links.json")).is_empty());
}

#[test]
fn corrupt_files_load_as_empty_shapes() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data.json");
    let links = tmp.path().join("links.json");
    write(&data, "{\"games\": ");
    write(&links, "not json at all");

    assert_eq!(load_content(&data), json!({}));
    assert!(load_links(&links).is_empty());
}

#[test]
fn links_file_with_wrong_shape_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let links = tmp.path().join("links.json");
    write(&links, r#"{"title": "x", "url": "y"}"#);
    assert!(load_links(&links).is_empty());
}

#[test]
fn malformed_link_entries_are_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let links = tmp.path().join("links.json");
    write(
        &links,
        r#"[{"title": "Reel", "url": "https://youtu.be/a"}, {"title": "no url"}, 7]"#,
    );
    assert_eq!(
        load_links(&links),
        vec![LinkEntry::new("Reel", "https://youtu.be/a")]
    );
}

#[test]
fn save_then_load_roundtrips() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data.json");
    let doc = json!({
        "games": {"drone-3d": {"title": "Drone Delivery", "features": ["3D", "Offline"]}},
        "contact": {"whatsapp_url": "https://wa.me/91000", "privacy": {"updated": "Jan 2026"}},
        "team": [{"name": "Ánjali", "role": "CEO"}]
    });

    save(&data, &doc).unwrap();
    assert_eq!(load_content(&data), doc);

    let links = tmp.path().join("links.json");
    let list = vec![LinkEntry::new("Showreel", "https://youtu.be/abc")];
    save(&links, &list).unwrap();
    assert_eq!(load_links(&links), list);
}

#[test]
fn saved_file_is_indented_and_not_ascii_escaped() {
    let tmp = tempfile::tempdir().unwrap();
    let data = tmp.path().join("data.json");
    save(&data, &json!({"city": "കൊച്ചി"})).unwrap();
    let raw = std::fs::read_to_string(&data).unwrap();
    assert_eq!(raw, "{\n    \"city\": \"കൊച്ചി\"\n}");
}

#[test]
fn save_into_missing_directory_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let result = save(&tmp.path().join("nope/data.json"), &json!({}));
    assert!(matches!(result, Err(CmsError::Io(_))));
}

// =========================================================================
// Content updates
// =========================================================================

#[test]
fn invalid_json_leaves_document_unchanged() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.update_content(r#"{"games": {}}"#).unwrap();

    let err = store.update_content("{\"games\": [1, 2,").unwrap_err();
    assert!(matches!(err, CmsError::Json(_)));
    assert_eq!(store.content(), json!({"games": {}}));
}

#[test]
fn any_json_shape_is_accepted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.update_content("[1, \"two\", null]").unwrap();
    assert_eq!(store.content(), json!([1, "two", null]));
}

// =========================================================================
// Assets
// =========================================================================

#[test]
fn upload_sanitizes_and_overwrites() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    let name = store.upload_asset("../team photo.JPG", b"first").unwrap();
    assert_eq!(name, "team_photo.JPG");

    store.upload_asset("team photo.JPG", b"second").unwrap();
    let bytes = std::fs::read(store.assets().dir().join("team_photo.JPG")).unwrap();
    assert_eq!(bytes, b"second");
    assert_eq!(store.assets().list(), vec!["team_photo.JPG"]);
}

#[test]
fn upload_with_disallowed_extension_is_rejected() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    let err = store.upload_asset("payload.exe", b"MZ").unwrap_err();
    assert!(matches!(err, CmsError::Validation(_)));
    assert!(store.assets().list().is_empty());
}

#[test]
fn protected_assets_are_never_deleted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("logo.png", b"logo").unwrap();
    store.assets().write("loader.GIF", b"gif").unwrap();

    assert!(matches!(store.delete_asset("logo.png"), Err(CmsError::Protected(_))));
    assert!(matches!(store.delete_asset("loader.GIF"), Err(CmsError::Protected(_))));
    assert_eq!(store.assets().list(), vec!["loader.GIF", "logo.png"]);
}

#[test]
fn protected_raw_names_survive_sanitizing_to_something_else() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("ロゴ.gif", b"gif").unwrap();
    store.assets().write("gif", b"not protected").unwrap();

    match store.delete_asset("ロゴ.gif") {
        Err(CmsError::Protected(name)) => assert_eq!(name, "ロゴ.gif"),
        other => panic!("expected Protected, got {other:?}"),
    }
    assert!(store.assets().exists("ロゴ.gif"));
}

#[test]
fn accented_gif_is_protected() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("é.gif", b"gif").unwrap();
    assert!(matches!(store.delete_asset("é.gif"), Err(CmsError::Protected(_))));
    assert!(store.assets().exists("é.gif"));
}

#[test]
fn referenced_asset_is_not_deleted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("g1.png", b"img").unwrap();
    store
        .update_content(r#"{"games": {"g1": {"title": "Foo", "img": "g1.png"}}}"#)
        .unwrap();

    assert!(matches!(store.delete_asset("g1.png"), Err(CmsError::InUse(_))));
    assert!(store.assets().exists("g1.png"));
}

#[test]
fn unreferenced_asset_is_deleted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("old.webp", b"img").unwrap();
    assert_eq!(store.delete_asset("old.webp").unwrap(), "old.webp");
    assert!(!store.assets().exists("old.webp"));
}

#[test]
fn raw_name_fallback_deletes_files_with_spaces() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("hero banner.png", b"img").unwrap();
    assert_eq!(store.delete_asset("hero banner.png").unwrap(), "hero banner.png");
    assert!(store.assets().list().is_empty());
}

#[test]
fn raw_name_fallback_respects_usage() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.assets().write("hero banner.png", b"img").unwrap();
    store.update_content(r#"{"hero": "hero banner.png"}"#).unwrap();
    assert!(matches!(
        store.delete_asset("hero banner.png"),
        Err(CmsError::InUse(_))
    ));
    assert!(store.assets().exists("hero banner.png"));
}

#[test]
fn missing_asset_reports_not_found() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    match store.delete_asset("ghost.png") {
        Err(CmsError::NotFound(name)) => assert_eq!(name, "ghost.png"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn traversal_never_escapes_the_asset_folder() {
    let (tmp, store) = test_store(ReferenceMode::Substring);
    write(&tmp.path().join("secret.png"), "keep");
    assert!(store.delete_asset("../../secret.png").is_err());
    assert!(tmp.path().join("secret.png").exists());
}

// =========================================================================
// Links
// =========================================================================

#[test]
fn duplicate_link_is_a_noop() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    assert_eq!(
        store.add_link("Showreel", "https://youtu.be/abc").unwrap(),
        AddLinkOutcome::Added
    );
    assert_eq!(
        store.add_link("Showreel again", "https://youtu.be/abc").unwrap(),
        AddLinkOutcome::Duplicate
    );
    assert_eq!(store.links().len(), 1);
}

#[test]
fn referenced_link_is_not_deleted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.add_link("Reel", "https://youtu.be/abc").unwrap();
    store
        .update_content(r#"{"ai_tools": [{"title": "Gen", "link": "https://youtu.be/abc"}]}"#)
        .unwrap();

    assert!(matches!(
        store.delete_link("https://youtu.be/abc"),
        Err(CmsError::InUse(_))
    ));
    assert_eq!(store.links(), vec![LinkEntry::new("Reel", "https://youtu.be/abc")]);
}

#[test]
fn unreferenced_link_is_deleted() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.add_link("Reel", "https://youtu.be/abc").unwrap();
    store.add_link("Trailer", "https://youtu.be/xyz").unwrap();
    assert_eq!(store.delete_link("https://youtu.be/abc").unwrap(), 1);
    assert_eq!(store.links(), vec![LinkEntry::new("Trailer", "https://youtu.be/xyz")]);
}

#[test]
fn blank_url_delete_leaves_links_file_alone() {
    let (tmp, store) = test_store(ReferenceMode::Substring);
    store.add_link("Reel", "https://youtu.be/abc").unwrap();
    let before = std::fs::read_to_string(tmp.path().join("links.json")).unwrap();

    assert_eq!(store.delete_link("").unwrap(), 0);
    assert_eq!(store.delete_link("   ").unwrap(), 0);

    let after = std::fs::read_to_string(tmp.path().join("links.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_url_delete_does_not_create_links_file() {
    let (tmp, store) = test_store(ReferenceMode::Substring);
    assert_eq!(store.delete_link("https://youtu.be/none").unwrap(), 0);
    assert!(!tmp.path().join("links.json").exists());
}

// =========================================================================
// Dashboard usage map
// =========================================================================

#[test]
fn dashboard_marks_unreferenced_asset_unused() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store.update_content(r#"{"games": {"g1": {"title": "Foo"}}}"#).unwrap();
    store.assets().write("g1.png", b"img").unwrap();

    let snapshot = store.dashboard().unwrap();
    assert_eq!(snapshot.assets, vec!["g1.png"]);
    assert_eq!(snapshot.usage.len(), 1);
    assert_eq!(snapshot.usage[0].target, "g1.png");
    assert_eq!(snapshot.usage[0].line, None);
}

#[test]
fn dashboard_reports_first_reference_line() {
    let (_tmp, store) = test_store(ReferenceMode::Substring);
    store
        .update_content(
            r#"{"games": {"g1": {"title": "Foo", "img": "g1.png"}, "g2": {"img": "g1.png"}}}"#,
        )
        .unwrap();
    store.assets().write("g1.png", b"img").unwrap();
    store.add_link("Reel", "https://youtu.be/unused").unwrap();

    let snapshot = store.dashboard().unwrap();
    assert!(snapshot.json_text.starts_with("{\n    \"games\""));
    let asset = snapshot
        .usage
        .iter()
        .find(|u| u.kind == UsageKind::Asset)
        .unwrap();
    assert_eq!(asset.line, Some(5));
    let link = snapshot
        .usage
        .iter()
        .find(|u| u.kind == UsageKind::Link)
        .unwrap();
    assert_eq!(link.line, None);
}

#[test]
fn structural_mode_allows_deleting_substring_lookalikes() {
    let (_tmp, store) = test_store(ReferenceMode::Structural);
    store.assets().write("bg.png", b"img").unwrap();
    store.update_content(r#"{"hero": "bg.png.old"}"#).unwrap();
    assert_eq!(store.delete_asset("bg.png").unwrap(), "bg.png");
}
