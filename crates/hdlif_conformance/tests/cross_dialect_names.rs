//! Name lists and escaped names carried across dialects.

use hdlif_common::Dialect;
use hdlif_conformance::{convert, parse_sv, parse_vhdl};
use hdlif_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use hdlif_ir::InstanceNames;
use hdlif_pipeline::{Session, View};
use hdlif_translate::Translator;

const SHARED: &str = "entity e is generic (A, B : integer := 5); port (x, y : in bit; z : out std_logic_vector(3 downto 0)); end;";

const ESCAPED: &str = r"module m (input logic \data.in , output logic [1:0] q); endmodule";

#[test]
fn shared_generics_become_one_parameter_each() {
    let (text, diags) = convert(Dialect::Vhdl, SHARED, View::Declaration, Dialect::SystemVerilog);
    assert_eq!(
        text.unwrap(),
        "\
module e #(
    parameter integer A = 5,
    parameter integer B = 5
) (
    input  logic       x, y,
    output logic [3:0] z
);
endmodule"
    );
    assert!(diags.is_empty(), "{diags:#?}");

    let (constants, _) = convert(Dialect::Vhdl, SHARED, View::Constants, Dialect::SystemVerilog);
    assert_eq!(
        constants.unwrap(),
        "    const integer A = 5;\n    const integer B = 5;"
    );

    let (signals, _) = convert(Dialect::Vhdl, SHARED, View::Signals, Dialect::SystemVerilog);
    assert_eq!(signals.unwrap(), "    logic       x, y;\n    logic [3:0] z;");
}

#[test]
fn flattened_entity_as_module() {
    let mut iface = parse_vhdl(SHARED).interface().clone();
    iface.flatten();
    let session = Session::default();
    let text = session
        .render(&iface, View::Declaration, Dialect::SystemVerilog, &mut InstanceNames::new())
        .unwrap()
        .unwrap();
    assert_eq!(
        text,
        "\
module e #(
    parameter integer A = 5,
    parameter integer B = 5
) (
    input  logic       x,
    input  logic       y,
    output logic [3:0] z
);
endmodule"
    );
    let constants = session
        .render(&iface, View::Constants, Dialect::SystemVerilog, &mut InstanceNames::new())
        .unwrap()
        .unwrap();
    assert_eq!(constants, "    const integer A = 5;\n    const integer B = 5;");
}

#[test]
fn shared_names_stay_joined_within_vhdl() {
    let (text, _) = convert(Dialect::Vhdl, SHARED, View::Declaration, Dialect::Vhdl);
    assert_eq!(
        text.unwrap(),
        "\
entity e is
    generic (
        A, B : integer := 5
    );
    port (
        x, y : in  bit;
        z    : out std_logic_vector(3 downto 0)
    );
end entity e;"
    );
}

#[test]
fn shared_port_default_binds_every_name() {
    let src = "entity e is port (x, y : out bit := '0'); end;";
    let (text, diags) = convert(Dialect::Vhdl, src, View::Declaration, Dialect::SystemVerilog);
    assert_eq!(
        text.unwrap(),
        "module e (\n    output logic x = '0',\n    output logic y = '0'\n);\nendmodule"
    );
    let note = diags
        .iter()
        .find(|d| d.code == DiagnosticCode::VERBATIM_DEFAULT)
        .unwrap();
    assert_eq!(note.severity, Severity::Note);
    assert_eq!(note.fragment.as_deref(), Some("x, y"));
}

#[test]
fn escaped_sv_port_as_vhdl_extended_identifier() {
    let (text, diags) = convert(Dialect::SystemVerilog, ESCAPED, View::Declaration, Dialect::Vhdl);
    assert_eq!(
        text.unwrap(),
        r"entity m is
    port (
        \data.in\ : in  std_logic;
        q         : out std_logic_vector(1 downto 0)
    );
end entity m;"
    );
    assert!(diags.iter().all(|d| d.severity == Severity::Note));
}

#[test]
fn vhdl_extended_identifier_as_sv_escaped_name() {
    let src = r"entity m is port (\data.in\ : in std_logic; q : out std_logic_vector(1 downto 0)); end;";
    let (text, diags) = convert(Dialect::Vhdl, src, View::Declaration, Dialect::SystemVerilog);
    assert_eq!(
        text.unwrap(),
        "module m (\n    input  logic       \\data.in ,\n    output logic [1:0] q\n);\nendmodule"
    );
    assert!(diags.iter().all(|d| d.severity == Severity::Note));

    let (instance, _) = convert(Dialect::Vhdl, src, View::Instance, Dialect::SystemVerilog);
    assert!(instance.unwrap().contains(r".\data.in ( \data.in )"));
}

#[test]
fn escaped_names_survive_a_round_trip() {
    let original = parse_sv(ESCAPED).interface().clone();
    assert_eq!(original.ports[0].name, r"\data.in");
    let sink = DiagnosticSink::new();
    let translator = Translator::new(&sink);
    let entity = translator.interface_to(&original, Dialect::Vhdl);
    assert_eq!(entity.ports[0].name, r"\data.in\");
    assert_eq!(translator.interface_to(&entity, Dialect::SystemVerilog), original);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn unusual_sv_name_is_kept_with_help() {
    let result = parse_sv("module m (input logic a+b, output q); endmodule");
    let names: Vec<&str> = result
        .interface()
        .ports
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["a+b", "q"]);
    assert_eq!(result.codes(), vec!["S201", "P104"]);
    let help = &result.diagnostics[1];
    assert_eq!(help.severity, Severity::Help);
    assert_eq!(help.help, vec![r"escape it as '\a+b '".to_string()]);
    assert_eq!(result.warning_count, 0);
}

#[test]
fn sv_literal_default_is_noted_in_vhdl() {
    let src = "module m (output logic ready = 1'b0); endmodule";
    let (text, diags) = convert(Dialect::SystemVerilog, src, View::Declaration, Dialect::Vhdl);
    assert_eq!(
        text.unwrap(),
        "entity m is\n    port (\n        ready : out std_logic := 1'b0\n    );\nend entity m;"
    );
    let codes: Vec<String> = diags.iter().map(|d| d.code.to_string()).collect();
    assert!(codes.contains(&"T303".to_string()), "{codes:?}");
}
