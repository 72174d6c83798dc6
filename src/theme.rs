use serde::{Deserialize, Serialize};

/// localStorage key for the visitor's palette choice.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Cosmetic color preset for the whole page. Two palettes, swapped by a
/// single flag; absence in storage falls back to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Cyberpunk,
    Starwars,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Cyberpunk => Theme::Starwars,
            Theme::Starwars => Theme::Cyberpunk,
        }
    }

    /// Class applied to `<body>` so stylesheet rules can follow the theme.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Cyberpunk => "theme-cyberpunk",
            Theme::Starwars => "theme-starwars",
        }
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Cyberpunk => "⚔",
            Theme::Starwars => "⚡",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Cyberpunk => &CYBERPUNK,
            Theme::Starwars => &STARWARS,
        }
    }
}

/// Utility-class strings for one theme. Declarative data only; sections
/// pick fields at render time.
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub hover: &'static str,
    pub hover_bg: &'static str,
    pub border: &'static str,
    pub heading_gradient: &'static str,
    pub button_gradient: &'static str,
    pub ring_border: &'static str,
    pub glow_color: &'static str,
    pub secondary_glow: &'static str,
    pub stats: [Stat; 3],
}

/// One hero statistics card.
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub glow: &'static str,
}

static CYBERPUNK: Palette = Palette {
    primary: "text-cyan-400",
    secondary: "text-purple-400",
    accent: "text-pink-400",
    hover: "hover:text-cyan-300",
    hover_bg: "hover:bg-cyan-400/10",
    border: "border-cyan-500/30",
    heading_gradient: "from-cyan-400 via-purple-400 to-pink-400",
    button_gradient: "from-cyan-500 to-purple-500",
    ring_border: "border-cyan-400/20",
    glow_color: "#00ffff",
    secondary_glow: "#a855f7",
    stats: [
        Stat {
            number: "600+",
            label: "Problems Solved",
            color: "text-cyan-400",
            glow: "shadow-cyan-500/50",
        },
        Stat {
            number: "7+",
            label: "Projects Built",
            color: "text-purple-400",
            glow: "shadow-purple-500/50",
        },
        Stat {
            number: "2+",
            label: "Years Experience",
            color: "text-green-400",
            glow: "shadow-green-500/50",
        },
    ],
};

static STARWARS: Palette = Palette {
    primary: "text-yellow-400",
    secondary: "text-orange-400",
    accent: "text-blue-400",
    hover: "hover:text-yellow-300",
    hover_bg: "hover:bg-yellow-400/10",
    border: "border-yellow-500/30",
    heading_gradient: "from-yellow-400 via-orange-400 to-red-400",
    button_gradient: "from-yellow-500 to-orange-500",
    ring_border: "border-yellow-400/20",
    glow_color: "#ffd700",
    secondary_glow: "#ff6b35",
    stats: [
        Stat {
            number: "600+",
            label: "Problems Solved",
            color: "text-yellow-400",
            glow: "shadow-yellow-500/50",
        },
        Stat {
            number: "7+",
            label: "Projects Built",
            color: "text-orange-400",
            glow: "shadow-orange-500/50",
        },
        Stat {
            number: "2+",
            label: "Years Experience",
            color: "text-blue-400",
            glow: "shadow-blue-500/50",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_cyberpunk() {
        assert_eq!(Theme::default(), Theme::Cyberpunk);
    }

    #[test]
    fn toggle_swaps_between_the_two_presets() {
        assert_eq!(Theme::Cyberpunk.toggled(), Theme::Starwars);
        assert_eq!(Theme::Starwars.toggled(), Theme::Cyberpunk);
        assert_eq!(Theme::Cyberpunk.toggled().toggled(), Theme::Cyberpunk);
    }

    #[test]
    fn stored_representation_round_trips() {
        let json = serde_json::to_string(&Theme::Starwars).expect("should serialize");
        assert_eq!(json, "\"starwars\"");
        let back: Theme = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, Theme::Starwars);
    }

    #[test]
    fn unknown_stored_value_is_an_error_not_a_panic() {
        assert!(serde_json::from_str::<Theme>("\"vaporwave\"").is_err());
    }

    #[test]
    fn palettes_differ_where_it_shows() {
        let cyber = Theme::Cyberpunk.palette();
        let wars = Theme::Starwars.palette();
        assert_ne!(cyber.primary, wars.primary);
        assert_ne!(cyber.heading_gradient, wars.heading_gradient);
        assert_ne!(cyber.glow_color, wars.glow_color);
    }
}
