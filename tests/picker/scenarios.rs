//! End-to-end scenarios across the tracker, the folder registry and labels.

use recent_picker::label::{DEFAULT_SEPARATOR, format_label, resolve_label};
use recent_picker::settings::Settings;
use recent_picker::{FolderIndex, RecencyTracker, RecentPicker, WorkspaceFolder};

#[test]
/// What: capacity 2 keeps the two newest pushes.
fn capacity_two_keeps_newest() {
    let mut t = RecencyTracker::new(2).expect("capacity");
    t.push("a");
    t.push("b");
    t.push("c");
    assert_eq!(t.snapshot(), vec!["b", "c"]);
}

#[test]
/// What: Re-pushing moves to the newest slot without duplicating.
fn repush_moves_to_front() {
    let mut t = RecencyTracker::new(3).expect("capacity");
    t.push("a");
    t.push("b");
    t.push("a");
    assert_eq!(t.snapshot(), vec!["b", "a"]);
}

#[test]
/// What: Colliding folder names label files with their absolute path.
///
/// Inputs:
/// - Roots "/x/proj" and "/y/proj", both named "proj".
///
/// Output:
/// - `count_by_name("proj") == 2`; "/x/proj/f.ts" labels as itself.
fn colliding_roots_use_absolute_label() {
    let mut idx = FolderIndex::new();
    idx.add_folders(&[
        WorkspaceFolder::new(0, "proj", "/x/proj"),
        WorkspaceFolder::new(1, "proj", "/y/proj"),
    ]);
    assert_eq!(idx.count_by_name("proj"), 2);
    let label = format_label(&idx, "/x/proj/f.ts", DEFAULT_SEPARATOR);
    assert_eq!(label, "/x/proj/f.ts");
    assert_ne!(label, "proj • f.ts");
}

#[test]
/// What: A single root gives relative labels that resolve back.
fn single_root_relative_label() {
    let mut idx = FolderIndex::new();
    idx.add_folders(&[WorkspaceFolder::new(0, "proj", "/x/proj")]);
    assert_eq!(format_label(&idx, "/x/proj/f.ts", DEFAULT_SEPARATOR), "f.ts");
    assert_eq!(
        resolve_label(&idx, "f.ts", DEFAULT_SEPARATOR),
        "/x/proj/f.ts"
    );
}

#[test]
/// What: Adding a second root switches labels from relative to name-prefixed.
fn second_root_switches_to_prefixed_labels() {
    let mut picker = RecentPicker::new(&Settings::default()).expect("settings");
    picker.folders_changed(&[WorkspaceFolder::new(0, "web", "/src/web")], &[]);
    picker.file_activated("/src/web/index.ts");
    picker.file_activated("/src/api/main.rs");
    assert_eq!(
        picker.items(Some("/src/api/main.rs")),
        vec!["index.ts"]
    );

    picker.folders_changed(&[WorkspaceFolder::new(1, "api", "/src/api")], &[]);
    assert_eq!(
        picker.items(None),
        vec!["api • main.rs", "web • index.ts"]
    );
    assert_eq!(picker.resolve("api • main.rs"), "/src/api/main.rs");
}

#[test]
/// What: Removing a root removes every recent file it owned.
///
/// Inputs:
/// - Roots "/x/proj" and "/y/lib"; recent files in both; "/x/proj" removed.
///
/// Output:
/// - No remaining recent file is under "/x/proj".
fn removing_root_cleans_recent_files() {
    let proj = WorkspaceFolder::new(0, "proj", "/x/proj");
    let lib = WorkspaceFolder::new(1, "lib", "/y/lib");
    let mut picker = RecentPicker::new(&Settings {
        recent_length: 9,
        ..Settings::default()
    })
    .expect("settings");
    picker.folders_changed(&[proj.clone(), lib], &[]);
    for f in [
        "/x/proj/a.ts",
        "/y/lib/b.rs",
        "/x/proj/sub/c.ts",
        "/y/lib/d.rs",
        "/x/proj/e.ts",
    ] {
        picker.file_activated(f);
    }
    picker.folders_changed(&[], &[proj]);
    let remaining = picker.recent_files();
    assert_eq!(remaining, vec!["/y/lib/b.rs", "/y/lib/d.rs"]);
    assert!(remaining.iter().all(|p| !p.starts_with("/x/proj")));
}

#[test]
/// What: Root removal follows raw string-prefix ownership.
///
/// Inputs:
/// - Roots "/a/b" and "/z"; recent files "/a/b/x", "/a/bc/x", "/z/y"; "/a/b" removed.
///
/// Output:
/// - "/a/bc/x" is owned by "/a/b" under prefix matching, so it goes too.
fn removing_root_drops_prefix_owned_sibling() {
    let ab = WorkspaceFolder::new(0, "b", "/a/b");
    let z = WorkspaceFolder::new(1, "z", "/z");
    let mut picker = RecentPicker::new(&Settings::default()).expect("settings");
    picker.folders_changed(&[ab.clone(), z], &[]);
    for f in ["/a/b/x", "/a/bc/x", "/z/y"] {
        picker.file_activated(f);
    }
    picker.folders_changed(&[], &[ab]);
    assert_eq!(picker.recent_files(), vec!["/z/y"]);
}

#[test]
/// What: A file owned by an earlier root survives removal of a later, deeper root.
///
/// Inputs:
/// - Roots "/a" then "/a/b"; recent files "/a/b/x" and "/a/c"; "/a/b" removed.
///
/// Output:
/// - "/a/b/x" stays: its owner is the first matching root "/a".
fn removing_later_root_keeps_files_owned_by_earlier_root() {
    let a = WorkspaceFolder::new(0, "a", "/a");
    let ab = WorkspaceFolder::new(1, "b", "/a/b");
    let mut picker = RecentPicker::new(&Settings::default()).expect("settings");
    picker.folders_changed(&[a, ab.clone()], &[]);
    picker.file_activated("/a/b/x");
    picker.file_activated("/a/c");
    picker.folders_changed(&[], &[ab]);
    assert_eq!(picker.recent_files(), vec!["/a/b/x", "/a/c"]);
    assert_eq!(picker.folders().total_count(), 1);
}
