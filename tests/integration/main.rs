//! Integration test harness for qterm

mod cli_test;
mod config_test;
mod dispatch_test;
mod session_test;
mod vfs_test;
