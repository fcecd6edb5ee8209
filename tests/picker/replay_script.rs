//! Replay scripts through the picker as the binary does.

use std::fs;
use std::io::BufReader;

use recent_picker::replay::{ScriptHost, run_script};
use recent_picker::settings::{Settings, load_settings};
use recent_picker::{ReplayError, WorkspaceFolder};

#[test]
/// What: A multi-root session with renames, deletes and a root removal.
///
/// Inputs:
/// - Settings file with `recent_length = 2` and a custom separator.
/// - Script focusing files across two roots, renaming and deleting some.
///
/// Output:
/// - Picker listings reflect each step; the final pick opens the resolved path.
fn multi_root_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let conf = dir.path().join("settings.conf");
    fs::write(&conf, "recent_length = 2\nlabel_separator = \" :: \"\n").expect("write conf");
    let settings = load_settings(Some(&conf));

    let script = r#"
{"event":"active_editor_changed","path":"/w/web/a.ts"}
{"event":"active_editor_changed","path":"/w/api/b.rs"}
{"event":"active_editor_changed","path":"/w/web/c.ts"}
{"command":"list"}
{"event":"files_renamed","files":[{"old":{"path":"/w/api/b.rs"},"new":{"path":"/w/api/bb.rs"}}]}
{"event":"files_deleted","files":[{"scheme":"untitled","path":"/w/api/bb.rs"}]}
{"command":"list"}
{"event":"workspace_folders_changed","removed":[{"name":"api","path":"/w/api"}]}
{"command":"open","choose":0}
"#;
    let mut host = ScriptHost::new(false).with_folders(vec![
        WorkspaceFolder::new(0, "web", "/w/web"),
        WorkspaceFolder::new(1, "api", "/w/api"),
    ]);
    let mut out = Vec::new();
    let summary =
        run_script(&settings, &mut host, BufReader::new(script.as_bytes()), &mut out)
            .expect("replay");
    let out = String::from_utf8(out).expect("utf8");
    assert_eq!(
        out,
        "0 api :: b.rs\n1 web :: a.ts\n\
0 api :: bb.rs\n1 web :: a.ts\n\
0 a.ts\nopened /w/web/a.ts\n"
    );
    assert_eq!(summary.events, 6);
    assert_eq!(summary.opened, vec!["/w/web/a.ts"]);
    assert_eq!(summary.failures, 0);
}

#[test]
/// What: Zero recent length is rejected before any line is read.
fn zero_length_is_config_error() {
    let settings = Settings {
        recent_length: 0,
        ..Settings::default()
    };
    let mut host = ScriptHost::new(false);
    let mut out = Vec::new();
    let res = run_script(&settings, &mut host, "{nope}".as_bytes(), &mut out);
    assert!(matches!(res, Err(ReplayError::Config(_))));
}

#[test]
/// What: Opening an existing file succeeds with file checking enabled.
fn check_files_opens_existing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().to_str().expect("utf8 tempdir").to_string();
    let a = format!("{root}/a.txt");
    let b = format!("{root}/b.txt");
    fs::write(&a, "a").expect("write a");
    fs::write(&b, "b").expect("write b");

    let script = format!(
        "{{\"event\":\"active_editor_changed\",\"path\":\"{a}\"}}\n\
{{\"event\":\"active_editor_changed\",\"path\":\"{b}\"}}\n\
{{\"command\":\"open\",\"choose\":0}}\n"
    );
    let mut host =
        ScriptHost::new(true).with_folders(vec![WorkspaceFolder::new(0, "tmp", root.clone())]);
    let mut out = Vec::new();
    let summary = run_script(&Settings::default(), &mut host, script.as_bytes(), &mut out)
        .expect("replay");
    assert_eq!(summary.opened, vec![a]);
    assert!(host.errors().is_empty());
}

#[test]
/// What: A very large configured length replays without allocating up front.
fn huge_recent_length_replays() {
    let settings = Settings {
        recent_length: 1 << 40,
        ..Settings::default()
    };
    let mut host = ScriptHost::new(false);
    let mut out = Vec::new();
    let script = "{\"event\":\"active_editor_changed\",\"path\":\"/a\"}\n\
{\"event\":\"active_editor_changed\",\"path\":\"/b\"}\n\
{\"command\":\"list\"}\n";
    run_script(&settings, &mut host, script.as_bytes(), &mut out).expect("replay");
    assert_eq!(String::from_utf8(out).expect("utf8"), "0 /a\n");
}

#[test]
/// What: A malformed event reports the underlying decode cause and its line.
fn malformed_event_keeps_decode_cause() {
    let mut host = ScriptHost::new(false);
    let mut out = Vec::new();
    let res = run_script(
        &Settings::default(),
        &mut host,
        "{\"event\":\"files_deleted\"}\n".as_bytes(),
        &mut out,
    );
    match res {
        Err(ReplayError::Decode { line, source }) => {
            assert_eq!(line, 1);
            assert!(source.to_string().contains("files"), "{source}");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}
