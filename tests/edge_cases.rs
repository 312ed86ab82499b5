//! Edge case and error handling tests for relstage


use harness::{TestTree, run_relstage};

// ============================================================================
// Directory Mirroring Edge Cases
// ============================================================================

#[test]
fn test_empty_surviving_directory_is_created() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_dir("Sounds");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    // The directory is mirrored before its files are examined, so an
    // empty source directory still appears at the destination
    assert!(out.join("Sounds").is_dir());
}

#[test]
fn test_directory_emptied_by_filters_is_still_created() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Scripts/build.py", "print()");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("Scripts").is_dir());
    assert!(!out.join("Scripts/build.py").exists());
}

#[test]
fn test_destination_root_created_when_missing() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("readme.md", "x");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("deeply/nested/Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("readme.md").is_file());
}

#[test]
fn test_rerun_against_populated_destination_overwrites() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Models/scene.xml", "first");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let out_str = out.to_string_lossy().to_string();

    let (_stdout, _stderr, success) = run_relstage(tree.path(), &["-o", &out_str]);
    assert!(success, "first run should succeed");

    tree.add_file("Models/scene.xml", "second");
    let (_stdout, _stderr, success) = run_relstage(tree.path(), &["-o", &out_str]);
    assert!(success, "re-run against existing destination should succeed");

    let copied = std::fs::read_to_string(out.join("Models/scene.xml")).unwrap();
    assert_eq!(copied, "second");
}

// ============================================================================
// Rule Scoping Edge Cases
// ============================================================================

#[test]
fn test_geometry_only_pruned_at_root() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Models/Geometry/mesh.xml", "<m/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(
        out.join("Models/Geometry/mesh.xml").is_file(),
        "the root exclusion must not apply below the root"
    );
}

#[test]
fn test_props_rule_only_at_exact_path() {
    let tree = TestTree::new();
    tree.add_allow_list(&["Crate"]);
    tree.add_file("Extra/Models/Props/Rock/rock.xml", "<p/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(
        out.join("Extra/Models/Props/Rock/rock.xml").is_file(),
        "Models/Props nested under another directory is unrestricted"
    );
}

#[test]
fn test_empty_allow_list_prunes_every_prop() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Models/Props/Crate/crate.xml", "<p/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("Models/Props").is_dir());
    assert!(!out.join("Models/Props/Crate").exists());
}

#[test]
fn test_actor_files_directly_under_actors_still_filtered_normally() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    // Files directly in Models/Actors are not subject to the directory
    // allow-list, only to the file filters
    tree.add_file("Models/Actors/index.xml", "<i/>");
    tree.add_file("Models/Actors/index.py", "x");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("Models/Actors/index.xml").is_file());
    assert!(!out.join("Models/Actors/index.py").exists());
}

// ============================================================================
// Allow-List File Edge Cases
// ============================================================================

#[test]
fn test_allow_list_with_crlf_line_endings() {
    let tree = TestTree::new();
    tree.add_file("AllowedProps.txt", "Crate\r\nBarrel\r\n");
    tree.add_file("Models/Props/Crate/crate.xml", "<p/>");
    tree.add_file("Models/Props/Barrel/barrel.xml", "<p/>");
    tree.add_file("Models/Props/Rock/rock.xml", "<p/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("Models/Props/Crate").is_dir());
    assert!(out.join("Models/Props/Barrel").is_dir());
    assert!(!out.join("Models/Props/Rock").exists());
}

#[test]
fn test_allow_file_at_custom_location() {
    let tree = TestTree::new();
    tree.add_file("lists/props.txt", "Crate\n");
    tree.add_file("Models/Props/Crate/crate.xml", "<p/>");
    tree.add_file("Models/Props/Rock/rock.xml", "<p/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) = run_relstage(
        tree.path(),
        &["-o", &out.to_string_lossy(), "--allow-file", "lists/props.txt"],
    );

    assert!(success);
    assert!(out.join("Models/Props/Crate").is_dir());
    assert!(!out.join("Models/Props/Rock").exists());
}

// ============================================================================
// Ignore Pattern Edge Cases
// ============================================================================

#[test]
fn test_ignore_pattern_prunes_directories_too() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Models/_backup/scene.xml", "<s/>");
    tree.add_file("Models/scene.xml", "<s/>");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) = run_relstage(
        tree.path(),
        &["-o", &out.to_string_lossy(), "-I", "_backup"],
    );

    assert!(success);
    assert!(!out.join("Models/_backup").exists());
    assert!(out.join("Models/scene.xml").is_file());
}

#[test]
fn test_multiple_ignore_patterns() {
    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("a.bak", "x");
    tree.add_file("Thumbs.db", "x");
    tree.add_file("keep.txt", "x");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) = run_relstage(
        tree.path(),
        &["-o", &out.to_string_lossy(), "-I", "*.bak", "-I", "Thumbs.db"],
    );

    assert!(success);
    assert!(!out.join("a.bak").exists());
    assert!(!out.join("Thumbs.db").exists());
    assert!(out.join("keep.txt").is_file());
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[cfg(unix)]
#[test]
fn test_symlinked_directory_skipped() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("RealDir/scene.xml", "<s/>");
    symlink(tree.path().join("RealDir"), tree.path().join("LinkDir"))
        .expect("Failed to create dir symlink");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success);
    assert!(out.join("RealDir/scene.xml").is_file());
    assert!(!out.join("LinkDir").exists(), "symlinks are never mirrored");
}

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_allow_list(&[]);
    tree.add_file("Models/scene.xml", "<s/>");
    symlink("..", tree.path().join("Models/parent")).expect("Failed to create parent symlink");

    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("Data");
    let (_stdout, _stderr, success) =
        run_relstage(tree.path(), &["-o", &out.to_string_lossy()]);

    assert!(success, "relstage should not hang on a parent symlink");
    assert!(out.join("Models/scene.xml").is_file());
    assert!(!out.join("Models/parent").exists());
}
