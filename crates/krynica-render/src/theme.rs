//! Design tokens -- the portal's color palette and typography.
//!
//! Tokens are loaded from `theme.toml`; any field may be omitted and
//! falls back to the builtin default. The renderer consumes the tokens
//! as a CSS custom-property block.

use serde::Deserialize;

use krynica_types::Result;

/// Builtin token set shipped with the renderer.
const BUILTIN_THEME: &str = include_str!("../assets/theme.toml");

/// Design tokens for the page chrome.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Page background color.
    #[serde(default = "default_background")]
    pub background: String,
    /// Card and panel background color.
    #[serde(default = "default_surface")]
    pub surface: String,
    /// Primary text color.
    #[serde(default = "default_text")]
    pub text: String,
    /// Secondary text color (meta lines, captions).
    #[serde(default = "default_dim_text")]
    pub dim_text: String,
    /// Accent color (links, active controls).
    #[serde(default = "default_accent")]
    pub accent: String,
    /// Accent hover color.
    #[serde(default = "default_accent_hover")]
    pub accent_hover: String,
    /// Category pill background.
    #[serde(default = "default_category_pill")]
    pub category_pill: String,
    /// Hairline border color.
    #[serde(default = "default_border")]
    pub border: String,
    /// Image skeleton shimmer color.
    #[serde(default = "default_skeleton")]
    pub skeleton: String,
    /// Corner radius for cards and pills, in pixels.
    #[serde(default = "default_border_radius")]
    pub border_radius: u16,
    /// Headline and body font stack.
    #[serde(default = "default_font_serif")]
    pub font_serif: String,
    /// Chrome font stack (header, pills, buttons).
    #[serde(default = "default_font_sans")]
    pub font_sans: String,
}

fn default_background() -> String {
    "#F5F1E8".to_string()
}
fn default_surface() -> String {
    "#FFFFFF".to_string()
}
fn default_text() -> String {
    "#1C1B18".to_string()
}
fn default_dim_text() -> String {
    "#6E6A60".to_string()
}
fn default_accent() -> String {
    "#8B2E2E".to_string()
}
fn default_accent_hover() -> String {
    "#A43A3A".to_string()
}
fn default_category_pill() -> String {
    "#EADFCB".to_string()
}
fn default_border() -> String {
    "#D8D2C4".to_string()
}
fn default_skeleton() -> String {
    "#E5E5EA".to_string()
}
fn default_border_radius() -> u16 {
    12
}
fn default_font_serif() -> String {
    "Georgia, 'Times New Roman', serif".to_string()
}
fn default_font_sans() -> String {
    "-apple-system, 'Segoe UI', Arial, sans-serif".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: default_background(),
            surface: default_surface(),
            text: default_text(),
            dim_text: default_dim_text(),
            accent: default_accent(),
            accent_hover: default_accent_hover(),
            category_pill: default_category_pill(),
            border: default_border(),
            skeleton: default_skeleton(),
            border_radius: default_border_radius(),
            font_serif: default_font_serif(),
            font_sans: default_font_sans(),
        }
    }
}

impl Theme {
    /// Parse tokens from a TOML string. Missing fields take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// The builtin token set.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_THEME)
    }

    /// Emit the tokens as a `:root` custom-property block.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --kr-background: {};\n  --kr-surface: {};\n  --kr-text: {};\n  --kr-dim-text: {};\n  --kr-accent: {};\n  --kr-accent-hover: {};\n  --kr-category-pill: {};\n  --kr-border: {};\n  --kr-skeleton: {};\n  --kr-radius: {}px;\n  --kr-font-serif: {};\n  --kr-font-sans: {};\n}}",
            self.background,
            self.surface,
            self.text,
            self.dim_text,
            self.accent,
            self.accent_hover,
            self.category_pill,
            self.border,
            self.skeleton,
            self.border_radius,
            self.font_serif,
            self.font_sans,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_theme_parses() {
        let theme = Theme::builtin().unwrap();
        assert_eq!(theme.accent, "#8B2E2E");
        assert_eq!(theme.border_radius, 12);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let theme = Theme::from_toml("accent = \"#123456\"").unwrap();
        assert_eq!(theme.accent, "#123456");
        assert_eq!(theme.background, default_background());
        assert_eq!(theme.font_sans, default_font_sans());
    }

    #[test]
    fn empty_toml_equals_default() {
        let theme = Theme::from_toml("").unwrap();
        assert_eq!(theme.css_variables(), Theme::default().css_variables());
    }

    #[test]
    fn css_variables_contains_every_token() {
        let css = Theme::default().css_variables();
        for name in [
            "--kr-background",
            "--kr-surface",
            "--kr-text",
            "--kr-dim-text",
            "--kr-accent",
            "--kr-accent-hover",
            "--kr-category-pill",
            "--kr-border",
            "--kr-skeleton",
            "--kr-radius",
            "--kr-font-serif",
            "--kr-font-sans",
        ] {
            assert!(css.contains(name), "missing {name}");
        }
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Theme::from_toml("border_radius = \"wide\"").is_err());
    }
}
