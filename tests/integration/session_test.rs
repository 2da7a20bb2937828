//! Session state-machine properties
//!
//! All sessions here use the zero-delay provider, so one `poll` after a
//! scheduled submit resolves deterministically.

use std::time::Duration;

use qterm::session::delay::Immediate;
use qterm::session::{Session, SubmitOutcome};
use qterm::shell::Profile;

fn open_session() -> Session {
    let mut session = Session::new(Profile::cyber2070(), Box::new(Immediate), Duration::ZERO);
    session.open();
    assert!(session.poll());
    session
}

fn run(session: &mut Session, line: &str) {
    assert_eq!(session.submit(line), SubmitOutcome::Scheduled);
    assert!(session.poll());
}

#[test]
fn fresh_session_starts_with_banner_at_root() {
    let session = open_session();
    assert_eq!(session.current_path(), "/");
    assert_eq!(session.scrollback().len(), 1);
    assert_eq!(session.scrollback()[0].command, "");
    assert_eq!(session.scrollback()[0].output, Profile::cyber2070().banner);
}

#[test]
fn end_to_end_navigation_example() {
    // The walkthrough from the original: cd projects, ls, cd .. round trip.
    let mut session = open_session();

    run(&mut session, "cd projects");
    assert_eq!(session.current_path(), "/projects");

    run(&mut session, "ls");
    assert_eq!(
        session.scrollback().last().unwrap().output,
        vec![
            "neural-os",
            "hologram-commerce",
            "cyber-defense",
            "time-sync",
            "bio-enhance",
            "quantum-web"
        ]
    );

    run(&mut session, "cd ..");
    assert_eq!(session.current_path(), "/");
}

#[test]
fn unknown_command_appends_single_entry_with_hint() {
    let mut session = open_session();
    run(&mut session, "foobar");
    assert_eq!(session.scrollback().len(), 2);
    let entry = session.scrollback().last().unwrap();
    assert_eq!(entry.command, "foobar");
    assert_eq!(entry.output[0], "Command not found: foobar");
    assert_eq!(entry.output[1], "Type \"help\" for available commands");
}

#[test]
fn whitespace_submission_never_enters_processing() {
    let mut session = open_session();
    for line in ["", " ", "\t", "   \t  "] {
        assert_eq!(session.submit(line), SubmitOutcome::Ignored);
        assert!(!session.is_processing());
    }
    assert_eq!(session.scrollback().len(), 1);
}

#[test]
fn in_flight_command_blocks_further_submissions() {
    let mut session = open_session();
    assert_eq!(session.submit("systeminfo"), SubmitOutcome::Scheduled);
    // Dropped, not queued; this includes the synchronous commands.
    assert_eq!(session.submit("ls"), SubmitOutcome::Ignored);
    assert_eq!(session.submit("clear"), SubmitOutcome::Ignored);
    assert_eq!(session.submit("exit"), SubmitOutcome::Ignored);

    assert!(session.poll());
    assert_eq!(session.scrollback().len(), 2);
    assert_eq!(session.scrollback()[1].command, "systeminfo");
}

#[test]
fn clear_is_synchronous_and_leaves_no_trace() {
    let mut session = open_session();
    run(&mut session, "ls");
    assert_eq!(session.submit("clear"), SubmitOutcome::Cleared);
    assert!(session.scrollback().is_empty());
    assert!(!session.is_processing());
}

#[test]
fn close_commands_fire_once_and_append_nothing() {
    for cmd in ["exit", "esc"] {
        let mut session = open_session();
        let before = session.scrollback().len();
        assert_eq!(session.submit(cmd), SubmitOutcome::CloseRequested);
        assert_eq!(session.scrollback().len(), before);
        assert!(!session.is_processing());
        // The session is still usable until the host actually closes it.
        run(&mut session, "pwd");
        assert_eq!(session.scrollback().last().unwrap().output, vec!["/"]);
    }
}

#[test]
fn failed_cd_does_not_move_the_session() {
    let mut session = open_session();
    run(&mut session, "cd projects");
    run(&mut session, "cd blackice");
    assert_eq!(session.current_path(), "/projects");
    assert_eq!(
        session.scrollback().last().unwrap().output,
        vec!["cd: blackice: No such file or directory"]
    );
}

#[test]
fn custom_profile_drives_the_session() {
    let toml_str = r#"
whoami = "ghost@shell"

[tree]
"/" = ["vault"]
"/vault" = ["keys"]
"#;
    let profile = Profile::from_toml_str(toml_str).unwrap();
    let mut session = Session::new(profile, Box::new(Immediate), Duration::ZERO);
    session.open();
    session.poll();

    run(&mut session, "whoami");
    assert_eq!(session.scrollback().last().unwrap().output, vec!["ghost@shell"]);

    run(&mut session, "cd vault");
    assert_eq!(session.current_path(), "/vault");
    run(&mut session, "ls");
    assert_eq!(session.scrollback().last().unwrap().output, vec!["keys"]);
}
