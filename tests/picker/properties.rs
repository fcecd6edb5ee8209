//! Randomised invariants for the tracker and the folder registry.
//!
//! Uses a fixed-seed xorshift generator so failures are reproducible.

use std::collections::{HashMap, HashSet};

use recent_picker::{FolderIndex, RecencyTracker, WorkspaceFolder};

/// Deterministic xorshift64 generator.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        let n = u64::try_from(n).unwrap_or(u64::MAX);
        usize::try_from(self.next() % n).unwrap_or(0)
    }
}

#[test]
/// What: Snapshots are bounded, duplicate-free, and end with the last push.
///
/// Inputs:
/// - 2000 random pushes over a 12-item alphabet, capacities 1..=6.
///
/// Output:
/// - Every snapshot has at most `capacity` unique items with the pushed item last.
fn push_snapshot_bounded_unique_last() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    for capacity in 1..=6 {
        let mut t = RecencyTracker::new(capacity).expect("capacity");
        for _ in 0..2000 {
            let item = format!("/f{}", rng.below(12));
            t.push(item.as_str());
            if rng.below(3) == 0 {
                continue;
            }
            let snap = t.snapshot();
            assert!(snap.len() <= capacity);
            let unique: HashSet<&String> = snap.iter().collect();
            assert_eq!(unique.len(), snap.len());
            assert_eq!(snap.last(), Some(&item));
        }
    }
}

#[test]
/// What: The tracker matches a naive model under mixed push/delete/replace.
///
/// Details:
/// - The model is a plain `Vec` trimmed on every read; replace follows the
///   first-occurrence-wins rule.
fn tracker_matches_model() {
    let mut rng = Rng(0xDEAD_BEEF_CAFE_F00D);
    let capacity = 4;
    let mut t = RecencyTracker::new(capacity).expect("capacity");
    let mut model: Vec<String> = Vec::new();
    let trim = |m: &mut Vec<String>| {
        let excess = m.len().saturating_sub(capacity);
        m.drain(..excess);
    };
    for _ in 0..5000 {
        let a = format!("/f{}", rng.below(8));
        match rng.below(4) {
            0 | 1 => {
                t.push(a.as_str());
                model.retain(|x| *x != a);
                model.push(a);
            }
            2 => {
                t.delete(&a);
                model.retain(|x| *x != a);
            }
            _ => {
                let b = format!("/f{}", rng.below(8));
                t.replace(&a, b.as_str());
                trim(&mut model);
                if let Some(i) = model.iter().position(|x| *x == a) {
                    model[i].clone_from(&b);
                    let mut seen = HashSet::new();
                    model.retain(|x| seen.insert(x.clone()));
                }
            }
        }
        if rng.below(2) == 0 {
            trim(&mut model);
            assert_eq!(t.snapshot(), model);
        }
    }
}

#[test]
/// What: Deleting an item removes it regardless of how often it was pushed.
fn delete_after_repeated_pushes() {
    let mut t = RecencyTracker::new(5).expect("capacity");
    for _ in 0..4 {
        t.push("x");
        t.push("y");
    }
    t.delete("x");
    assert!(!t.snapshot().contains(&"x".to_string()));
}

#[test]
/// What: Name counts equal the number of registered folders per name.
///
/// Inputs:
/// - 500 random add/remove batches over 10 paths and 3 names.
///
/// Output:
/// - For every name, `count_by_name` equals a recount of `list_all`.
fn folder_counts_match_registered() {
    let mut rng = Rng(0x1234_5678_9ABC_DEF1);
    let names = ["app", "lib", "docs"];
    let mut idx = FolderIndex::new();
    for _ in 0..500 {
        let batch: Vec<WorkspaceFolder> = (0..rng.below(4))
            .map(|i| {
                let p = rng.below(10);
                WorkspaceFolder::new(i, names[rng.below(3)], format!("/root{p}/x"))
            })
            .collect();
        if rng.below(2) == 0 {
            idx.add_folders(&batch);
        } else {
            idx.remove_folders(&batch);
        }
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for f in idx.list_all() {
            *expected.entry(f.name.as_str()).or_insert(0) += 1;
        }
        for name in names {
            assert_eq!(
                idx.count_by_name(name),
                expected.get(name).copied().unwrap_or(0)
            );
        }
        assert_eq!(idx.total_count(), idx.list_all().count());
    }
}
