//! Mode, type and name mappings between the two dialects.

use crate::error::TranslateError;
use hdlif_text::words::{find_keyword, is_escaped_identifier, is_extended_identifier};

const MODES_SV_TO_VHDL: [(&str, &str); 3] =
    [("input", "in"), ("output", "out"), ("inout", "inout")];

const TYPES_SV_TO_VHDL: [(&str, &str); 6] = [
    ("", "std_logic"),
    ("reg", "std_logic"),
    ("bit", "std_logic"),
    ("logic", "std_logic"),
    ("integer", "integer"),
    ("int", "integer"),
];

const TYPES_VHDL_TO_SV: [(&str, &str); 6] = [
    ("std_logic", "logic"),
    ("std_ulogic", "logic"),
    ("bit", "logic"),
    ("integer", "integer"),
    ("natural", "integer"),
    ("positive", "integer"),
];

const VECTOR_SUFFIX: &str = "_vector";

fn unmapped_mode(mode: &str) -> TranslateError {
    TranslateError::UnmappedMode {
        mode: mode.to_string(),
    }
}

/// `input` → `in`, `output` → `out`, `inout` → `inout`.
pub fn mode_sv_to_vhdl(mode: &str) -> Result<&'static str, TranslateError> {
    MODES_SV_TO_VHDL
        .iter()
        .find(|(sv, _)| *sv == mode)
        .map(|(_, vhdl)| *vhdl)
        .ok_or_else(|| unmapped_mode(mode))
}

/// `in` → `input`, `out` → `output`, `inout` → `inout`. Case-insensitive.
pub fn mode_vhdl_to_sv(mode: &str) -> Result<&'static str, TranslateError> {
    MODES_SV_TO_VHDL
        .iter()
        .find(|(_, vhdl)| vhdl.eq_ignore_ascii_case(mode))
        .map(|(sv, _)| *sv)
        .ok_or_else(|| unmapped_mode(mode))
}

/// A `hi` to `lo` range with its VHDL direction.
struct Range<'a> {
    hi: &'a str,
    lo: &'a str,
    ascending: bool,
}

impl<'a> Range<'a> {
    fn new(hi: &'a str, lo: &'a str) -> Self {
        let ascending = matches!(
            (hi.parse::<i64>(), lo.parse::<i64>()),
            (Ok(hi), Ok(lo)) if hi < lo
        );
        Self { hi, lo, ascending }
    }

    fn vhdl(&self) -> String {
        let direction = if self.ascending { "to" } else { "downto" };
        format!("({} {direction} {})", self.hi, self.lo)
    }

    fn sv(&self) -> String {
        format!(" [{}:{}]", self.hi, self.lo)
    }
}

/// Splits a trailing group closed by `close` off `text`.
fn split_suffix(text: &str, open: char, close: char) -> Option<(&str, &str)> {
    let body = text.strip_suffix(close)?;
    let mut depth = 0usize;
    for (i, c) in body.char_indices().rev() {
        if c == close {
            depth += 1;
        } else if c == open {
            if depth == 0 {
                return Some((body[..i].trim_end(), &body[i + open.len_utf8()..]));
            }
            depth -= 1;
        }
    }
    None
}

/// `logic [31:0]` → `std_logic_vector(31 downto 0)`.
///
/// Numeric ascending ranges use `to`. A base type missing from the table
/// fails with a fallback of `ERR` plus the translated suffix.
pub fn type_sv_to_vhdl(ty: &str) -> Result<String, TranslateError> {
    let ty = ty.trim();
    let (base, suffix) = match split_suffix(ty, '[', ']') {
        Some((base, range)) => {
            let (hi, lo) = range.split_once(':').ok_or_else(|| TranslateError::UnmappedType {
                ty: ty.to_string(),
                fallback: "ERR".to_string(),
            })?;
            let range = Range::new(hi.trim(), lo.trim());
            (base, format!("{VECTOR_SUFFIX}{}", range.vhdl()))
        }
        None => (ty, String::new()),
    };

    let signedness = ["signed", "unsigned"]
        .into_iter()
        .find(|word| find_keyword(base, word).is_some());
    if let (Some(word), false) = (signedness, suffix.is_empty()) {
        let element = base[..find_keyword(base, word).unwrap_or(0)].trim();
        if matches!(element, "" | "logic" | "reg" | "bit") {
            return Ok(format!("{word}{}", &suffix[VECTOR_SUFFIX.len()..]));
        }
    }

    match TYPES_SV_TO_VHDL.iter().find(|(sv, _)| *sv == base) {
        Some((_, vhdl)) => Ok(format!("{vhdl}{suffix}")),
        None => Err(TranslateError::UnmappedType {
            ty: ty.to_string(),
            fallback: format!("ERR{suffix}"),
        }),
    }
}

/// `std_logic_vector(31 downto 0)` → `logic [31:0]`. Case-insensitive.
pub fn type_vhdl_to_sv(ty: &str) -> Result<String, TranslateError> {
    let ty = ty.trim();
    let unmapped = |fallback: String| TranslateError::UnmappedType {
        ty: ty.to_string(),
        fallback,
    };

    let (base, suffix) = match split_suffix(ty, '(', ')') {
        Some((base, range)) => {
            let (hi, lo) = split_range(range).ok_or_else(|| unmapped("ERR".to_string()))?;
            (base.to_ascii_lowercase(), Range::new(hi, lo).sv())
        }
        None => (ty.to_ascii_lowercase(), String::new()),
    };

    if !suffix.is_empty() && matches!(base.as_str(), "signed" | "unsigned") {
        return Ok(format!("logic {base}{suffix}"));
    }
    let element = if suffix.is_empty() {
        Some(base.as_str())
    } else {
        base.strip_suffix(VECTOR_SUFFIX)
    };
    element
        .and_then(|element| TYPES_VHDL_TO_SV.iter().find(|(vhdl, _)| *vhdl == element))
        .map(|(_, sv)| format!("{sv}{suffix}"))
        .ok_or_else(|| unmapped(format!("ERR{suffix}")))
}

/// `\a.b` → `\a.b\`. Plain identifiers are unchanged.
pub fn name_sv_to_vhdl(name: &str) -> String {
    match name.strip_prefix('\\') {
        Some(body) if is_escaped_identifier(name) => {
            format!("\\{}\\", body.replace('\\', "\\\\"))
        }
        _ => name.to_string(),
    }
}

/// `\a.b\` → `\a.b`.
///
/// An extended identifier with whitespace inside has no SystemVerilog
/// spelling and is returned unchanged, as are basic identifiers.
pub fn name_vhdl_to_sv(name: &str) -> String {
    if !is_extended_identifier(name) {
        return name.to_string();
    }
    let escaped = format!("\\{}", name[1..name.len() - 1].replace("\\\\", "\\"));
    if is_escaped_identifier(&escaped) {
        escaped
    } else {
        name.to_string()
    }
}

/// Splits `hi downto lo` or `lo to hi` at the direction keyword.
fn split_range(range: &str) -> Option<(&str, &str)> {
    ["downto", "to"].into_iter().find_map(|word| {
        let pos = find_keyword(range, word)?;
        let hi = range[..pos].trim();
        let lo = range[pos + word.len()..].trim();
        (!hi.is_empty() && !lo.is_empty()).then_some((hi, lo))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modes() {
        assert_eq!(mode_sv_to_vhdl("input"), Ok("in"));
        assert_eq!(mode_sv_to_vhdl("output"), Ok("out"));
        assert_eq!(mode_vhdl_to_sv("INOUT"), Ok("inout"));
        let err = mode_vhdl_to_sv("buffer").unwrap_err();
        assert_eq!(err.fallback(), "ERR");
    }

    #[test]
    fn sv_vectors() {
        assert_eq!(type_sv_to_vhdl("logic [31:0]").unwrap(), "std_logic_vector(31 downto 0)");
        assert_eq!(type_sv_to_vhdl("reg [5:2]").unwrap(), "std_logic_vector(5 downto 2)");
        assert_eq!(type_sv_to_vhdl("reg [0:0]").unwrap(), "std_logic_vector(0 downto 0)");
        assert_eq!(type_sv_to_vhdl("bit[0:7]").unwrap(), "std_logic_vector(0 to 7)");
        assert_eq!(
            type_sv_to_vhdl("logic [W-1:0]").unwrap(),
            "std_logic_vector(W-1 downto 0)"
        );
        assert_eq!(type_sv_to_vhdl("").unwrap(), "std_logic");
        assert_eq!(type_sv_to_vhdl("int").unwrap(), "integer");
    }

    #[test]
    fn sv_signed_vectors() {
        assert_eq!(type_sv_to_vhdl("logic signed [7:0]").unwrap(), "signed(7 downto 0)");
        assert_eq!(type_sv_to_vhdl("logic unsigned [3:0]").unwrap(), "unsigned(3 downto 0)");
        assert!(type_sv_to_vhdl("int unsigned").is_err());
    }

    #[test]
    fn sv_unmapped_keeps_suffix() {
        let err = type_sv_to_vhdl("shortint [3:0]").unwrap_err();
        assert_eq!(err.fallback(), "ERR_vector(3 downto 0)");
        assert_eq!(type_sv_to_vhdl("real").unwrap_err().fallback(), "ERR");
        assert_eq!(type_sv_to_vhdl("logic [8]").unwrap_err().fallback(), "ERR");
    }

    #[test]
    fn vhdl_vectors() {
        assert_eq!(type_vhdl_to_sv("std_logic_vector(31 downto 0)").unwrap(), "logic [31:0]");
        assert_eq!(type_vhdl_to_sv("STD_ULOGIC_VECTOR (3 DOWNTO 0)").unwrap(), "logic [3:0]");
        assert_eq!(type_vhdl_to_sv("bit_vector(0 to 7)").unwrap(), "logic [0:7]");
        assert_eq!(type_vhdl_to_sv("natural").unwrap(), "integer");
        assert_eq!(type_vhdl_to_sv("signed(15 downto 0)").unwrap(), "logic signed [15:0]");
    }

    #[test]
    fn vhdl_unmapped() {
        assert_eq!(type_vhdl_to_sv("real").unwrap_err().fallback(), "ERR");
        assert_eq!(
            type_vhdl_to_sv("word_array(3 downto 0)").unwrap_err().fallback(),
            "ERR [3:0]"
        );
        assert_eq!(type_vhdl_to_sv("std_logic_vector").unwrap_err().fallback(), "ERR");
    }

    #[test]
    fn escaped_names() {
        assert_eq!(name_sv_to_vhdl(r"\data.in"), r"\data.in\");
        assert_eq!(name_sv_to_vhdl(r"\a\b"), r"\a\\b\");
        assert_eq!(name_sv_to_vhdl("clk"), "clk");
        assert_eq!(name_vhdl_to_sv(r"\data.in\"), r"\data.in");
        assert_eq!(name_vhdl_to_sv(r"\a\\b\"), r"\a\b");
        assert_eq!(name_vhdl_to_sv(r"\two words\"), r"\two words\");
        assert_eq!(name_vhdl_to_sv("CLK"), "CLK");
    }

    #[test]
    fn round_trips() {
        for ty in ["logic", "integer", "logic [31:0]", "logic [0:7]", "logic signed [7:0]"] {
            let vhdl = type_sv_to_vhdl(ty).unwrap();
            assert_eq!(type_vhdl_to_sv(&vhdl).unwrap(), ty);
        }
    }

    proptest! {
        #[test]
        fn packed_logic_round_trips(hi in 0u32..64, lo in 0u32..64) {
            let ty = format!("logic [{hi}:{lo}]");
            let back = type_vhdl_to_sv(&type_sv_to_vhdl(&ty).unwrap()).unwrap();
            prop_assert_eq!(back, ty);
        }
    }
}
