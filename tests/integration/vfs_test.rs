//! Virtual filesystem navigation properties

use qterm::shell::{normalize, Profile};

#[test]
fn every_directory_lists_its_configured_children_in_order() {
    let profile = Profile::cyber2070();
    let fs = profile.vfs();
    for (path, children) in &profile.tree {
        assert_eq!(
            fs.children(path).unwrap(),
            children.as_slice(),
            "children mismatch at {}",
            path
        );
    }
}

#[test]
fn resolve_round_trips_through_children() {
    let fs = Profile::cyber2070().vfs();
    for path in ["/home", "/sys", "/quantum", "/neural", "/projects"] {
        let child = path.trim_start_matches('/');
        assert_eq!(fs.resolve("/", child), path);
        assert_eq!(fs.resolve(path, ".."), "/");
    }
}

#[test]
fn normalize_is_idempotent_over_known_paths() {
    let fs = Profile::cyber2070().vfs();
    for path in fs.paths() {
        assert_eq!(normalize(path), path);
    }
}

#[test]
fn parent_of_root_is_root() {
    let fs = Profile::cyber2070().vfs();
    assert_eq!(fs.resolve("/", ".."), "/");
    assert_eq!(fs.resolve("/", "../.."), "/");
}

#[test]
fn deep_relative_chains_collapse() {
    let fs = Profile::cyber2070().vfs();
    assert_eq!(fs.resolve("/quantum", "../neural/./cortex/.."), "/neural");
}
