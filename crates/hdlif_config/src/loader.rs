//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{FormatTable, HdlifConfig};
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE: &str = "hdlif.toml";

/// Loads and validates an `hdlif.toml` configuration from a project directory.
///
/// Reads `<project_dir>/hdlif.toml`, parses it, and validates its values.
pub fn load_config(project_dir: &Path) -> Result<HdlifConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `hdlif.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<HdlifConfig, ConfigError> {
    let config: HdlifConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates value ranges across all format tables and the SV net type.
fn validate_config(config: &HdlifConfig) -> Result<(), ConfigError> {
    validate_format("format", &config.format)?;
    if let Some(table) = &config.sv.format {
        validate_format("sv.format", table)?;
    }
    if let Some(table) = &config.vhdl.format {
        validate_format("vhdl.format", table)?;
    }
    if let Some(net) = &config.sv.default_net_type {
        let valid = !net.trim().is_empty()
            && net
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ');
        if !valid {
            return Err(ConfigError::ValidationError(format!(
                "sv.default-net-type '{net}' is not a type name"
            )));
        }
    }
    Ok(())
}

fn validate_format(table_name: &str, table: &FormatTable) -> Result<(), ConfigError> {
    if let Some(width) = table.indent_width() {
        if !(1..=16).contains(&width) {
            return Err(ConfigError::ValidationError(format!(
                "{table_name}.indent-width must be 1..=16, got {width}"
            )));
        }
    }
    Ok(())
}
