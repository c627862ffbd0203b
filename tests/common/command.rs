use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

/// File name every scenario writes its DAG description under.
pub const DAG_FILE_NAME: &str = "history.dag";

#[fixture]
pub fn dag_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A feature branch merged back into the trunk.
#[fixture]
pub fn merge_dag() -> String {
    r#"5: 3 4 "merge feature"
4: 3
3: 2
2: 1
1: 0
0:
"#
    .to_string()
}

/// A side line holding its column for two rows before folding back.
#[fixture]
pub fn side_branch_dag() -> String {
    r#"5: 3
4: 2
3: 1
2: 1
1: 0
0:
"#
    .to_string()
}

/// Two histories that never touch.
#[fixture]
pub fn disconnected_dag() -> String {
    r#"4: 3
3:
2: 1
1: 0
0:
"#
    .to_string()
}

pub fn write_dag_file(dir: &TempDir, text: &str) {
    dir.child(DAG_FILE_NAME)
        .write_str(text)
        .expect("Failed to write DAG file");
}

pub fn run_revgraph_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("revgraph").expect("Failed to find revgraph binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
