//! Short, reversible labels for tracked paths.
//!
//! A label is what the picker shows instead of the absolute path:
//! - single-root workspace: the path relative to that root;
//! - the owning root's name is unique: `<name><separator><relative path>`;
//! - otherwise (no owner, or the name collides): the absolute path.

use crate::workspace::FolderIndex;

/// Separator placed between a folder name and the relative path.
pub const DEFAULT_SEPARATOR: &str = " • ";

/// What: Build the display label for `file_path`.
///
/// Inputs:
/// - `folders`: Current workspace roots.
/// - `file_path`: Absolute path being displayed.
/// - `separator`: Token joining folder name and relative path.
///
/// Output:
/// - Label string; falls back to `file_path` itself when no shorter form is unambiguous.
#[must_use]
pub fn format_label(folders: &FolderIndex, file_path: &str, separator: &str) -> String {
    if folders.total_count() == 1
        && let Some(root) = folders.list_all().next()
    {
        return relative_path(&root.path, file_path);
    }
    if let Some(owner) = folders.find_owning_folder(file_path)
        && folders.count_by_name(&owner.name) == 1
    {
        return format!(
            "{}{separator}{}",
            owner.name,
            relative_path(&owner.path, file_path)
        );
    }
    file_path.to_string()
}

/// What: Map a label produced by [`format_label`] back to an absolute path.
///
/// Inputs:
/// - `folders`: Current workspace roots.
/// - `label`: Label chosen by the user.
/// - `separator`: Token used when the label was formatted.
///
/// Output:
/// - Absolute path.
///
/// Details:
/// - `<name><separator><rest>` resolves `rest` against the first folder named `name`.
/// - Any other relative label resolves against the first registered folder.
/// - Absolute labels (and labels with no folder to resolve against) are returned as-is.
#[must_use]
pub fn resolve_label(folders: &FolderIndex, label: &str, separator: &str) -> String {
    if !separator.is_empty()
        && let Some((name, rest)) = label.split_once(separator)
        && let Some(folder) = folders.find_folder_by_name(name)
    {
        return resolve_path(&folder.path, rest);
    }
    if !label.starts_with('/')
        && let Some(first) = folders.list_all().next()
    {
        return resolve_path(&first.path, label);
    }
    label.to_string()
}

/// What: Relative path from directory `from` to `to`, using `/` separators.
///
/// Details:
/// - Purely lexical: `.` and `..` are normalised, nothing touches the filesystem.
/// - Returns an empty string when both resolve to the same location and climbs
///   with `..` when `to` is outside `from`.
#[must_use]
pub fn relative_path(from: &str, to: &str) -> String {
    let from = normalize_segments(from);
    let to = normalize_segments(to);
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend(to[common..].iter().copied());
    parts.join("/")
}

/// What: Resolve `path` against `base`, returning a normalised absolute path.
///
/// Details:
/// - An absolute `path` ignores `base`.
/// - `..` never climbs above the root.
#[must_use]
pub fn resolve_path(base: &str, path: &str) -> String {
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{base}/{path}")
    };
    format!("/{}", normalize_segments(&joined).join("/"))
}

/// Split a `/` path into segments with empty, `.` and `..` segments folded away.
fn normalize_segments(path: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
