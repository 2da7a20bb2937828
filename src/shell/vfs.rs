//! Virtual filesystem for the simulated shell
//!
//! A flat mapping from canonical absolute paths to ordered child-entry names.
//! Directories only: no files, no metadata, no content. The tree is immutable
//! for the lifetime of a session; `cd`/`ls` navigate it, nothing mutates it.

use std::collections::BTreeMap;

/// The root path. The only path with a trailing slash.
pub const ROOT: &str = "/";

/// Immutable directory tree keyed by canonical absolute path.
///
/// Canonical means: starts with `/`, no trailing slash except the root itself,
/// no empty or `.`/`..` segments. Child lists keep their declared order, which
/// is exactly the order `ls` prints them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    tree: BTreeMap<String, Vec<String>>,
}

impl VirtualFs {
    /// Build a filesystem from a path -> children mapping.
    ///
    /// Keys are canonicalized on the way in, so a profile written with a
    /// trailing slash still resolves.
    pub fn new(tree: &BTreeMap<String, Vec<String>>) -> Self {
        let tree = tree
            .iter()
            .map(|(path, children)| (normalize(path), children.clone()))
            .collect();
        Self { tree }
    }

    /// Whether `path` names a known directory.
    pub fn contains(&self, path: &str) -> bool {
        self.tree.contains_key(path)
    }

    /// Ordered child entries of `path`, if it exists.
    pub fn children(&self, path: &str) -> Option<&[String]> {
        self.tree.get(path).map(|c| c.as_slice())
    }

    /// All known directory paths, in key order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.tree.keys().map(|k| k.as_str())
    }

    /// Resolve a `cd` target against `current` into a canonical candidate path.
    ///
    /// Absolute targets stand alone; relative targets are joined to `current`.
    /// The result is normalized segment-by-segment, so `..` chains and stray
    /// separators collapse correctly (`..` at the root stays at the root).
    /// Existence is not checked here.
    pub fn resolve(&self, current: &str, target: &str) -> String {
        if target.starts_with('/') {
            normalize(target)
        } else {
            normalize(&format!("{}/{}", current, target))
        }
    }
}

/// Canonicalize a path by walking its segments.
///
/// Empty and `.` segments are dropped, `..` pops the previous segment and is
/// a no-op at the root. Always returns an absolute path.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
