use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{DAG_FILE_NAME, run_revgraph_command, write_dag_file};

#[rstest]
fn renders_a_merge_with_junction_glyphs(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::merge_dag)] merge_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &merge_dag);

    let expected = "\
● 5 merge feature
├─╮
│ ● 4
├─╯
● 3
│
● 2
│
● 1
│
● 0
";

    run_revgraph_command(dag_dir.path(), &["render", DAG_FILE_NAME])
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn renders_plain_ascii_on_request(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::merge_dag)] merge_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &merge_dag);

    let expected = "\
o 5 merge feature
+-\\
| o 4
+-/
o 3
|
o 2
|
o 1
|
o 0
";

    run_revgraph_command(
        dag_dir.path(),
        &["render", DAG_FILE_NAME, "--glyphs", "ascii"],
    )
    .assert()
    .success()
    .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn reads_the_description_from_stdin(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revgraph_command(dag_dir.path(), &["render"])
        .write_stdin("2: 1\n1: 0\n0:\n")
        .assert()
        .success()
        .stdout(predicate::eq("● 2\n│\n● 1\n│\n● 0\n"));

    Ok(())
}

#[rstest]
fn stops_midway_and_marks_continuing_lanes(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::side_branch_dag)] side_branch_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &side_branch_dag);

    let expected = "\
● 5
│
│ ● 4
│ │
● │ 3
│ │
│ ● 2
├─╯
~
";

    run_revgraph_command(dag_dir.path(), &["render", DAG_FILE_NAME, "--stop", "2"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn keeps_disconnected_heads_unlinked(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::disconnected_dag)] disconnected_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &disconnected_dag);

    let expected = "\
● 4
│
● 3
● 2
│
● 1
│
● 0
";

    run_revgraph_command(dag_dir.path(), &["render", DAG_FILE_NAME])
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn forces_color_codes_when_asked(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::merge_dag)] merge_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &merge_dag);

    let output = run_revgraph_command(
        dag_dir.path(),
        &["render", DAG_FILE_NAME, "--color", "always"],
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(
        stdout.contains('\u{1b}'),
        "Expected ANSI color codes in forced-color output:\n{}",
        stdout
    );

    Ok(())
}

#[rstest]
fn keeps_piped_output_plain_by_default(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::merge_dag)] merge_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &merge_dag);

    let output = run_revgraph_command(dag_dir.path(), &["render", DAG_FILE_NAME])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(
        !stdout.contains('\u{1b}'),
        "Expected no ANSI color codes in piped output:\n{}",
        stdout
    );

    Ok(())
}

#[rstest]
fn rejects_an_inverted_range(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
    #[from(crate::common::command::merge_dag)] merge_dag: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, &merge_dag);

    run_revgraph_command(
        dag_dir.path(),
        &["render", DAG_FILE_NAME, "--start", "0", "--stop", "2"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid revision range"));

    Ok(())
}

#[rstest]
fn reports_the_offending_line_of_a_malformed_file(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_dag_file(&dag_dir, "5: 3\nnot a dag line\n");

    run_revgraph_command(dag_dir.path(), &["render", DAG_FILE_NAME])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed DAG line 2"));

    Ok(())
}

#[rstest]
fn fails_cleanly_on_a_missing_file(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revgraph_command(dag_dir.path(), &["render", "missing.dag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read DAG file"));

    Ok(())
}

#[rstest]
fn refuses_to_guess_a_start_for_an_empty_description(
    #[from(crate::common::command::dag_dir)] dag_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revgraph_command(dag_dir.path(), &["render"])
        .write_stdin("# comments only\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("describes no revisions"));

    Ok(())
}
