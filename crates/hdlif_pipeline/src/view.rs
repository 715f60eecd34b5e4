//! Output views.

/// One printable form of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// `module ... endmodule` or `entity ... end entity`.
    Declaration,
    /// A VHDL `component` declaration. SystemVerilog has none and prints the
    /// declaration instead.
    Component,
    /// An instantiation with every generic and port connected by name.
    Instance,
    /// One signal per port.
    Signals,
    /// One constant per generic.
    Constants,
}
