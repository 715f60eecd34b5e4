//! `hdlif.toml` loading from disk and its effect on sessions.

use hdlif_common::{Dialect, IndentUnit};
use hdlif_config::{load_config, ConfigError, CONFIG_FILE};
use hdlif_conformance::{make_config, parse_with_session};
use hdlif_ir::InstanceNames;
use hdlif_pipeline::{Session, View};
use tempfile::TempDir;

fn write_config(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
    dir
}

#[test]
fn session_from_project_directory() {
    let dir = write_config(
        r#"
[format]
indent-width = 2
initial-depth = 0

[vhdl.format]
indent = "tabs"
align = false
"#,
    );
    let session = Session::from_dir(dir.path()).unwrap();
    assert_eq!(session.layout(Dialect::SystemVerilog).indent, IndentUnit::Spaces(2));
    let vhdl = session.layout(Dialect::Vhdl);
    assert_eq!(vhdl.indent, IndentUnit::Tab);
    assert!(!vhdl.align);
    assert_eq!(vhdl.initial_depth, 0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(load_config(dir.path()), Err(ConfigError::IoError(_))));
}

#[test]
fn invalid_values_are_rejected() {
    let dir = write_config("[sv.format]\nindent-width = 0\n");
    let err = load_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("sv.format.indent-width"));

    let dir = write_config("[format]\nindent = \"sideways\"\n");
    assert!(matches!(load_config(dir.path()), Err(ConfigError::ParseError(_))));
}

#[test]
fn configured_layout_reaches_rendered_text() {
    let session = Session::new(make_config(
        "[format]\ninitial-depth = 0\n[sv.format]\nindent-width = 2\n",
    ));
    let parsed = parse_with_session(&session, Dialect::Vhdl, "entity e is port (a : in bit); end;");
    let text = session
        .render(
            parsed.interface(),
            View::Instance,
            Dialect::SystemVerilog,
            &mut InstanceNames::new(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(text, "e e_1 (\n  .a ( a )\n);");
}

#[test]
fn trace_notes_only_when_enabled() {
    let quiet = Session::default();
    let loud = Session::new(make_config("[diagnostics]\ntrace = true\n"));
    let src = "module m (input a); endmodule";
    assert!(parse_with_session(&quiet, Dialect::SystemVerilog, src)
        .codes()
        .iter()
        .all(|c| c != "D001"));
    assert!(parse_with_session(&loud, Dialect::SystemVerilog, src)
        .codes()
        .iter()
        .any(|c| c == "D001"));
}
