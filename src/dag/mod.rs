//! Textual DAG descriptions
//!
//! The `dag_file` submodule parses the line-based `REV: PARENT..` format
//! used to feed histories to the layout engine without a real repository.

pub mod dag_file;

/// One DAG description line: revision number, optional parent numbers and an
/// optional quoted label.
pub const DAG_LINE_REGEX: &str = r#"^(\d+)\s*:\s*((?:\d+(?:\s+\d+)*)?)\s*(?:"([^"]*)")?$"#;
