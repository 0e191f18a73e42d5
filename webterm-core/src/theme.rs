//! Terminal color themes (Catppuccin palettes)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shorthand for a `Color` literal
#[macro_export]
macro_rules! rgb {
    ($r: expr, $g: expr, $b: expr) => {
        $crate::theme::Color {
            r: $r,
            g: $g,
            b: $b,
        }
    };
}

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// CSS hex notation, e.g. `#11111b`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Inline CSS declaration for the foreground color
    pub fn style_text(&self) -> String {
        format!("color: {}", self.hex())
    }
}

/// The colors a terminal needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalTheme {
    pub name: ThemeName,
    /// Background
    pub crust: Color,
    pub red: Color,
    pub green: Color,
    pub sapphire: Color,
    pub peach: Color,
    /// Default foreground
    pub text: Color,
}

pub const LATTE: TerminalTheme = TerminalTheme {
    name: ThemeName::Latte,
    red: rgb!(210, 15, 57),
    green: rgb!(64, 160, 43),
    sapphire: rgb!(32, 159, 181),
    peach: rgb!(254, 100, 11),
    text: rgb!(76, 79, 105),
    crust: rgb!(220, 224, 232),
};

pub const FRAPPE: TerminalTheme = TerminalTheme {
    name: ThemeName::Frappe,
    red: rgb!(231, 130, 132),
    green: rgb!(166, 209, 137),
    sapphire: rgb!(133, 193, 220),
    peach: rgb!(239, 159, 118),
    text: rgb!(198, 208, 245),
    crust: rgb!(35, 38, 52),
};

pub const MACCHIATO: TerminalTheme = TerminalTheme {
    name: ThemeName::Macchiato,
    red: rgb!(237, 135, 150),
    green: rgb!(166, 218, 149),
    sapphire: rgb!(125, 196, 228),
    peach: rgb!(245, 169, 127),
    text: rgb!(202, 211, 245),
    crust: rgb!(24, 25, 38),
};

pub const MOCHA: TerminalTheme = TerminalTheme {
    name: ThemeName::Mocha,
    red: rgb!(243, 139, 168),
    green: rgb!(166, 227, 161),
    sapphire: rgb!(116, 199, 236),
    peach: rgb!(250, 179, 135),
    text: rgb!(205, 214, 244),
    crust: rgb!(17, 17, 27),
};

/// Available theme names
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Latte,
    Frappe,
    Macchiato,
    #[default]
    Mocha,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Latte,
        ThemeName::Frappe,
        ThemeName::Macchiato,
        ThemeName::Mocha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Latte => "latte",
            ThemeName::Frappe => "frappe",
            ThemeName::Macchiato => "macchiato",
            ThemeName::Mocha => "mocha",
        }
    }

    pub fn palette(&self) -> &'static TerminalTheme {
        match self {
            ThemeName::Latte => &LATTE,
            ThemeName::Frappe => &FRAPPE,
            ThemeName::Macchiato => &MACCHIATO,
            ThemeName::Mocha => &MOCHA,
        }
    }

    /// Parse a stored name, falling back to the default theme
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(MOCHA.crust.hex(), "#11111b");
        assert_eq!(rgb!(0, 10, 255).hex(), "#000aff");
        assert_eq!(MOCHA.red.style_text(), "color: #f38ba8");
    }

    #[test]
    fn test_theme_name_parsing() {
        assert_eq!("Latte".parse::<ThemeName>().unwrap(), ThemeName::Latte);
        assert_eq!(" macchiato ".parse::<ThemeName>().unwrap(), ThemeName::Macchiato);
        assert!("solarized".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::from_name_or_default("solarized"), ThemeName::Mocha);
    }

    #[test]
    fn test_palette_names_match() {
        for name in ThemeName::ALL {
            assert_eq!(name.palette().name, name);
        }
    }
}
