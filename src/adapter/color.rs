//! Colour resolution for technology tags and certification providers.
//!
//! Lookup lowercases the input and returns the colour of the first table key
//! (in declaration order) that the input contains. Declaration order matters:
//! "Tailwind CSS" contains "css" before it reaches "tailwind".

use std::fmt;

/// A 24-bit display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Colour from a `0xRRGGBB` literal; higher bits are ignored.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Relative luminance check used to pick readable text over a badge.
    pub fn is_dark(self) -> bool {
        let lum = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        lum < 128_000
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Technology tag colours (Tailwind palette).
pub const TECH_COLORS: &[(&str, Rgb)] = &[
    // Frontend
    ("react", Rgb::from_hex(0x3B82F6)),
    ("next.js", Rgb::from_hex(0x000000)),
    ("vue", Rgb::from_hex(0x22C55E)),
    ("angular", Rgb::from_hex(0xDC2626)),
    ("svelte", Rgb::from_hex(0xEA580C)),
    ("javascript", Rgb::from_hex(0xEAB308)),
    ("typescript", Rgb::from_hex(0x2563EB)),
    ("html", Rgb::from_hex(0xF97316)),
    ("css", Rgb::from_hex(0x60A5FA)),
    // CSS frameworks
    ("tailwind", Rgb::from_hex(0x06B6D4)),
    ("bootstrap", Rgb::from_hex(0x9333EA)),
    ("material-ui", Rgb::from_hex(0x1D4ED8)),
    ("chakra-ui", Rgb::from_hex(0x14B8A6)),
    // Backend
    ("node.js", Rgb::from_hex(0x16A34A)),
    ("express", Rgb::from_hex(0x4B5563)),
    ("django", Rgb::from_hex(0x166534)),
    ("flask", Rgb::from_hex(0x374151)),
    ("php", Rgb::from_hex(0xA855F7)),
    ("laravel", Rgb::from_hex(0xEF4444)),
    // Databases
    ("mongodb", Rgb::from_hex(0x22C55E)),
    ("postgresql", Rgb::from_hex(0x2563EB)),
    ("mysql", Rgb::from_hex(0x3B82F6)),
    ("firebase", Rgb::from_hex(0xCA8A04)),
    ("supabase", Rgb::from_hex(0x22C55E)),
    // CMS
    ("wordpress", Rgb::from_hex(0x3B82F6)),
    ("shopify", Rgb::from_hex(0x16A34A)),
    ("strapi", Rgb::from_hex(0xA855F7)),
];

/// Grey used for technologies missing from [`TECH_COLORS`].
pub const DEFAULT_TECH_COLOR: Rgb = Rgb::from_hex(0x6B7280);

/// Certification provider badge colours.
pub const PROVIDER_COLORS: &[(&str, Rgb)] = &[
    ("aws", Rgb::from_hex(0xFF9900)),
    ("amazon", Rgb::from_hex(0xFF9900)),
    ("google", Rgb::from_hex(0x4285F4)),
    ("microsoft", Rgb::from_hex(0x00A4EF)),
    ("azure", Rgb::from_hex(0x0078D4)),
    ("mongodb", Rgb::from_hex(0x13AA52)),
    ("freecodecamp", Rgb::from_hex(0x0A0A23)),
    ("coursera", Rgb::from_hex(0x2A73CC)),
    ("udemy", Rgb::from_hex(0xA435F0)),
    ("edx", Rgb::from_hex(0x02262B)),
    ("linkedin learning", Rgb::from_hex(0x0077B5)),
    ("hubspot", Rgb::from_hex(0xFF7A59)),
    ("salesforce", Rgb::from_hex(0x00A1E0)),
    ("oracle", Rgb::from_hex(0xC74634)),
    ("cisco", Rgb::from_hex(0x1BA0D7)),
    ("comptia", Rgb::from_hex(0xC8202C)),
    ("ibm", Rgb::from_hex(0x0530AD)),
    ("meta", Rgb::from_hex(0x0668E1)),
    ("pluralsight", Rgb::from_hex(0xF15B2A)),
    ("datacamp", Rgb::from_hex(0x03EF62)),
    ("udacity", Rgb::from_hex(0x01B3E3)),
];

/// Indigo used for providers missing from [`PROVIDER_COLORS`].
pub const DEFAULT_BADGE_COLOR: Rgb = Rgb::from_hex(0x6366F1);

/// First-match substring lookup against `table`.
pub fn resolve(table: &[(&str, Rgb)], name: &str, default: Rgb) -> Rgb {
    let normalized = name.to_lowercase();
    table
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, color)| *color)
        .unwrap_or(default)
}

/// Colour for a technology tag.
pub fn tech_color(name: &str) -> Rgb {
    resolve(TECH_COLORS, name, DEFAULT_TECH_COLOR)
}

/// Colour for a certificate provider.
pub fn badge_color(provider: &str) -> Rgb {
    resolve(PROVIDER_COLORS, provider, DEFAULT_BADGE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_color(table: &[(&str, Rgb)], key: &str) -> Rgb {
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
            .expect("key in table")
    }

    #[test]
    fn substring_match_resolves_next_js_app() {
        assert_eq!(tech_color("Next.js App"), table_color(TECH_COLORS, "next.js"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(tech_color("REACT"), table_color(TECH_COLORS, "react"));
        assert_eq!(badge_color("Amazon Web Services"), table_color(PROVIDER_COLORS, "amazon"));
    }

    #[test]
    fn first_declared_key_wins_over_later_ones() {
        // "tailwind css" contains both "css" and "tailwind"; "css" is declared first.
        assert_eq!(tech_color("Tailwind CSS"), table_color(TECH_COLORS, "css"));
        // "aws" precedes "amazon".
        assert_eq!(badge_color("Amazon AWS"), table_color(PROVIDER_COLORS, "aws"));
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(tech_color("Rust"), DEFAULT_TECH_COLOR);
        assert_eq!(badge_color("Self-taught"), DEFAULT_BADGE_COLOR);
        assert_eq!(tech_color(""), DEFAULT_TECH_COLOR);
    }

    #[test]
    fn rgb_displays_as_uppercase_hex() {
        assert_eq!(Rgb::from_hex(0xFF9900).to_string(), "#FF9900");
        assert_eq!(DEFAULT_BADGE_COLOR.to_string(), "#6366F1");
    }

    #[test]
    fn dark_detection_matches_extremes() {
        assert!(Rgb::from_hex(0x000000).is_dark());
        assert!(!Rgb::from_hex(0xFFFFFF).is_dark());
    }
}
