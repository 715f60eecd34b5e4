//! The interface record and its whole-interface transforms.

use crate::generic::Generic;
use crate::port::Port;
use hdlif_common::Dialect;
use serde::{Deserialize, Serialize};

/// The keyword that opened an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceKind {
    /// SystemVerilog `module`.
    Module,
    /// SystemVerilog `macromodule`.
    Macromodule,
    /// VHDL `entity`.
    Entity,
    /// VHDL `component`.
    Component,
}

impl InterfaceKind {
    /// The opening keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            InterfaceKind::Module => "module",
            InterfaceKind::Macromodule => "macromodule",
            InterfaceKind::Entity => "entity",
            InterfaceKind::Component => "component",
        }
    }

    /// Looks up an opening keyword, ignoring case.
    pub fn from_keyword(word: &str) -> Option<InterfaceKind> {
        match word.to_ascii_lowercase().as_str() {
            "module" => Some(InterfaceKind::Module),
            "macromodule" => Some(InterfaceKind::Macromodule),
            "entity" => Some(InterfaceKind::Entity),
            "component" => Some(InterfaceKind::Component),
            _ => None,
        }
    }

    /// The dialect this keyword belongs to.
    pub fn dialect(self) -> Dialect {
        match self {
            InterfaceKind::Module | InterfaceKind::Macromodule => Dialect::SystemVerilog,
            InterfaceKind::Entity | InterfaceKind::Component => Dialect::Vhdl,
        }
    }

    /// The usual opening keyword of `dialect`.
    pub fn default_for(dialect: Dialect) -> InterfaceKind {
        match dialect {
            Dialect::SystemVerilog => InterfaceKind::Module,
            Dialect::Vhdl => InterfaceKind::Entity,
        }
    }
}

/// One parsed module or entity header.
///
/// Equality compares ports and generics in order and ignores the name, the
/// kind and the source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    /// Module or entity identifier.
    pub name: String,
    /// The keyword that opened the header.
    pub kind: InterfaceKind,
    /// Ports in declaration order.
    pub ports: Vec<Port>,
    /// Generics in declaration order.
    pub generics: Vec<Generic>,
    /// The normalized block text the record was parsed from.
    pub source: String,
}

impl PartialEq for Interface {
    fn eq(&self, other: &Self) -> bool {
        self.ports == other.ports && self.generics == other.generics
    }
}

impl Interface {
    /// Creates an empty interface.
    pub fn new(name: impl Into<String>, kind: InterfaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ports: Vec::new(),
            generics: Vec::new(),
            source: String::new(),
        }
    }

    /// The dialect the interface was written in.
    pub fn dialect(&self) -> Dialect {
        self.kind.dialect()
    }

    /// Returns `true` when neither ports nor generics were found.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty() && self.generics.is_empty()
    }

    /// Finds the port declaring `name`, also inside comma-joined lists.
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.names().any(|n| n == name))
    }

    /// Mutable variant of [`port`](Self::port).
    pub fn port_mut(&mut self, name: &str) -> Option<&mut Port> {
        self.ports.iter_mut().find(|p| p.names().any(|n| n == name))
    }

    /// Finds the generic declaring `name`.
    pub fn generic(&self, name: &str) -> Option<&Generic> {
        self.generics.iter().find(|g| g.names().any(|n| n == name))
    }

    /// Expands comma-joined declarations into one record per name, in place.
    pub fn flatten(&mut self) {
        self.generics = self.generics.iter().flat_map(Generic::expand).collect();
        self.ports = self.ports.iter().flat_map(Port::expand).collect();
    }

    /// Flips every port direction, see [`Mode::reversed`](crate::Mode::reversed).
    pub fn reverse(&mut self) {
        for port in &mut self.ports {
            port.mode = port.mode.map(|m| m.reversed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::GenericKind;
    use crate::port::Mode;

    fn sample() -> Interface {
        let mut iface = Interface::new("m", InterfaceKind::Module);
        iface.generics.push(Generic::value("W, D", "int", Some("8".into())));
        iface.ports.push(Port::new("a,b", Some(Mode::Input), "int"));
        iface.ports.push(Port::new("c", Some(Mode::Output), "reg [3:0]"));
        iface.ports.push(Port::new("d", Some(Mode::Buffer), "bit"));
        iface.ports.push(Port::new("e", Some(Mode::Inout), "wire"));
        iface
    }

    #[test]
    fn kind_keywords() {
        assert_eq!(InterfaceKind::from_keyword("MacroModule"), Some(InterfaceKind::Macromodule));
        assert_eq!(InterfaceKind::Component.keyword(), "component");
        assert_eq!(InterfaceKind::Entity.dialect(), Dialect::Vhdl);
        assert_eq!(InterfaceKind::from_keyword("package"), None);
    }

    #[test]
    fn flatten_expands_in_place() {
        let mut iface = sample();
        iface.flatten();
        let names: Vec<&str> = iface.ports.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(iface.ports[1].ty, "int");
        assert_eq!(iface.ports[1].mode, Some(Mode::Input));

        assert_eq!(iface.generics.len(), 2);
        assert_eq!(iface.generics[1].name, "D");
        assert_eq!(iface.generics[1].default_value.as_deref(), Some("8"));
        assert_eq!(iface.generics[1].kind, GenericKind::Value);
    }

    #[test]
    fn flatten_is_idempotent() {
        let mut once = sample();
        once.flatten();
        let mut twice = once.clone();
        twice.flatten();
        assert_eq!(once, twice);
    }

    #[test]
    fn double_reverse_restores_all_but_buffer() {
        let mut iface = sample();
        iface.flatten();
        let original: Vec<Option<Mode>> = iface.ports.iter().map(|p| p.mode).collect();

        iface.reverse();
        assert_eq!(iface.ports[0].mode, Some(Mode::Output));
        assert_eq!(iface.ports[2].mode, Some(Mode::Input));
        assert_eq!(iface.ports[3].mode, Some(Mode::Input));
        assert_eq!(iface.ports[4].mode, Some(Mode::Inout));

        iface.reverse();
        for (i, port) in iface.ports.iter().enumerate() {
            if port.name == "d" {
                assert_eq!(port.mode, Some(Mode::Output));
            } else {
                assert_eq!(port.mode, original[i]);
            }
        }
    }

    #[test]
    fn reverse_leaves_unstated_mode() {
        let mut iface = Interface::new("m", InterfaceKind::Module);
        iface.ports.push(Port::new("x", None, "logic"));
        iface.reverse();
        assert_eq!(iface.ports[0].mode, None);
    }

    #[test]
    fn equality_ignores_name_kind_and_source() {
        let a = sample();
        let mut b = sample();
        b.name = "other".into();
        b.kind = InterfaceKind::Entity;
        b.source = "module other ...".into();
        assert_eq!(a, b);

        b.ports.pop();
        assert_ne!(a, b);
    }

    #[test]
    fn lookups_see_through_lists() {
        let mut iface = sample();
        assert_eq!(iface.port("b").map(|p| p.name.as_str()), Some("a,b"));
        assert!(iface.port("z").is_none());
        assert!(iface.generic("D").is_some());
        iface.port_mut("c").unwrap().ty = "logic".into();
        assert_eq!(iface.port("c").unwrap().ty, "logic");
    }

    #[test]
    fn interface_serde_roundtrip() {
        let iface = sample();
        let json = serde_json::to_string(&iface).unwrap();
        let back: Interface = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iface);
        assert_eq!(back.name, "m");
    }
}
