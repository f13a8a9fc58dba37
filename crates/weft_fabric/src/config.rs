//! Tile-grid build configuration.
//!
//! Deserialized from the `[fabric]` section of a project's TOML
//! configuration by the (excluded) front end, or constructed directly by
//! library callers. Only knobs that change the *structure* of the produced
//! grid live here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The placement style of sub-blocks within a tile.
///
/// A style fixes which neighbouring routing group each grid location pulls
/// its connection and switch blocks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStyle {
    /// The programmable block sits top-left; its connection blocks and
    /// switch block come from the routing group one row below.
    #[default]
    TopLeft,
}

impl TileStyle {
    /// Returns the canonical configuration-file spelling of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileStyle::TopLeft => "top_left",
        }
    }
}

impl fmt::Display for TileStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing tile-style strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTileStyleError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseTileStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tile style: '{}'", self.input)
    }
}

impl std::error::Error for ParseTileStyleError {}

impl FromStr for TileStyle {
    type Err = ParseTileStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top_left" => Ok(TileStyle::TopLeft),
            _ => Err(ParseTileStyleError {
                input: s.to_string(),
            }),
        }
    }
}

/// Configuration for fabric tile-grid construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FabricConfig {
    /// The tile placement style to build with.
    #[serde(default)]
    pub style: TileStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_top_left() {
        assert_eq!(TileStyle::default(), TileStyle::TopLeft);
        assert_eq!(FabricConfig::default().style, TileStyle::TopLeft);
    }

    #[test]
    fn style_string_roundtrip() {
        let style: TileStyle = "top_left".parse().unwrap();
        assert_eq!(style, TileStyle::TopLeft);
        assert_eq!(style.as_str(), "top_left");
        assert_eq!(format!("{style}"), "top_left");
    }

    #[test]
    fn unknown_style_fails_to_parse() {
        let err = "bottom_right".parse::<TileStyle>().unwrap_err();
        assert_eq!(format!("{err}"), "invalid tile style: 'bottom_right'");
    }

    #[test]
    fn parse_trims_whitespace() {
        let style: TileStyle = "  top_left ".parse().unwrap();
        assert_eq!(style, TileStyle::TopLeft);
    }

    #[test]
    fn toml_roundtrip() {
        let config: FabricConfig = toml::from_str("style = \"top_left\"").unwrap();
        assert_eq!(config.style, TileStyle::TopLeft);
    }

    #[test]
    fn toml_defaults_when_omitted() {
        let config: FabricConfig = toml::from_str("").unwrap();
        assert_eq!(config.style, TileStyle::TopLeft);
    }

    #[test]
    fn toml_rejects_unknown_style() {
        let result: Result<FabricConfig, _> = toml::from_str("style = \"diagonal\"");
        assert!(result.is_err());
    }

    #[test]
    fn json_serde_roundtrip() {
        let config = FabricConfig {
            style: TileStyle::TopLeft,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: FabricConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.style, config.style);
    }
}
