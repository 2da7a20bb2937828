//! Command grammar resolution properties

use chrono::Local;
use qterm::shell::{resolve, Profile, Resolution};

fn resolve_at(input: &str, path: &str) -> Option<Resolution> {
    let profile = Profile::cyber2070();
    let vfs = profile.vfs();
    resolve(input, path, &profile, &vfs, Local::now())
}

fn output_of(input: &str, path: &str) -> Vec<String> {
    match resolve_at(input, path) {
        Some(Resolution::Output(lines)) => lines,
        other => panic!("expected output for {:?}, got {:?}", input, other),
    }
}

#[test]
fn ls_returns_exact_child_list_for_every_directory() {
    let profile = Profile::cyber2070();
    for (path, children) in &profile.tree {
        let lines = output_of("ls", path);
        assert_eq!(&lines, children, "ls mismatch at {}", path);
    }
}

#[test]
fn ls_all_prepends_dot_entries_everywhere() {
    let profile = Profile::cyber2070();
    for (path, children) in &profile.tree {
        let lines = output_of("ls -a", path);
        assert_eq!(lines[0], ".");
        assert_eq!(lines[1], "..");
        assert_eq!(&lines[2..], children.as_slice());
    }
}

#[test]
fn pwd_prints_current_path() {
    assert_eq!(output_of("pwd", "/neural"), vec!["/neural"]);
}

#[test]
fn cd_then_parent_round_trips() {
    let Some(Resolution::ChangeDir(path)) = resolve_at("cd projects", "/") else {
        panic!("cd projects should succeed");
    };
    assert_eq!(path, "/projects");
    let Some(Resolution::ChangeDir(back)) = resolve_at("cd ..", &path) else {
        panic!("cd .. should succeed");
    };
    assert_eq!(back, "/");
}

#[test]
fn projects_listing_matches_original_data() {
    assert_eq!(
        output_of("ls", "/projects"),
        vec![
            "neural-os",
            "hologram-commerce",
            "cyber-defense",
            "time-sync",
            "bio-enhance",
            "quantum-web"
        ]
    );
}

#[test]
fn cd_failure_emits_exactly_one_line_naming_the_target() {
    let lines = output_of("cd darknet", "/");
    assert_eq!(lines, vec!["cd: darknet: No such file or directory"]);
}

#[test]
fn unknown_command_output_starts_with_not_found_and_hint() {
    let lines = output_of("foobar", "/");
    assert_eq!(lines[0], "Command not found: foobar");
    assert_eq!(lines[1], "Type \"help\" for available commands");
}

#[test]
fn systeminfo_reproduces_profile_constants() {
    let lines = output_of("systeminfo", "/");
    assert_eq!(lines[0], "CYBER2070 System Information");
    assert!(lines.contains(&"Operating System: CYBER_OS v2070.3.1".to_string()));
    assert!(lines.contains(&"Kernel: QuantumKernel 7.4.2-neural".to_string()));
}

#[test]
fn ps_and_netstat_are_verbatim_tables() {
    let profile = Profile::cyber2070();
    assert_eq!(output_of("ps", "/"), profile.processes);
    assert_eq!(output_of("netstat", "/"), profile.connections);
}

#[test]
fn matrix_and_quantum_blocks_resolve() {
    let profile = Profile::cyber2070();
    assert_eq!(output_of("matrix", "/"), profile.matrix);
    assert_eq!(output_of("quantum", "/"), profile.quantum);
}

#[test]
fn grammar_is_case_insensitive() {
    assert_eq!(output_of("PWD", "/sys"), vec!["/sys"]);
    assert_eq!(
        resolve_at("CD NEURAL", "/"),
        Some(Resolution::ChangeDir("/neural".to_string()))
    );
}
