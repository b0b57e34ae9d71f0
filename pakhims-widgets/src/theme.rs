//! Color tokens
//!
//! Every widget color is one of a fixed set of [`ColorToken`]s. Each token maps
//! to a fully spelled-out [`StyleDescriptor`], so no class name is ever built by
//! string concatenation and adding a token forces every match to handle it.

use serde::Serialize;

/// Discrete palette used by the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Emerald,
    Cyan,
    Violet,
    Indigo,
    Rose,
    Amber,
    Yellow,
    Sapphire,
}

/// Fully specified style classes for one token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub gradient: &'static str,
    pub solid: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub hex: &'static str,
}

// Primary palette
pub const BLUE: StyleDescriptor = StyleDescriptor {
    gradient: "from-blue-500 to-blue-600",
    solid: "bg-blue-500",
    accent: "via-blue-500",
    text: "text-blue-600",
    hex: "#3b82f6",
};
pub const GREEN: StyleDescriptor = StyleDescriptor {
    gradient: "from-green-500 to-green-600",
    solid: "bg-green-500",
    accent: "via-green-500",
    text: "text-green-600",
    hex: "#22c55e",
};
pub const PURPLE: StyleDescriptor = StyleDescriptor {
    gradient: "from-purple-500 to-purple-600",
    solid: "bg-purple-500",
    accent: "via-purple-500",
    text: "text-purple-600",
    hex: "#a855f7",
};
pub const ORANGE: StyleDescriptor = StyleDescriptor {
    gradient: "from-orange-500 to-orange-600",
    solid: "bg-orange-500",
    accent: "via-orange-500",
    text: "text-orange-600",
    hex: "#f97316",
};

// Screenshot hotspots
pub const TEAL: StyleDescriptor = StyleDescriptor {
    gradient: "from-teal-500 to-cyan-600",
    solid: "bg-teal-500",
    accent: "via-teal-500",
    text: "text-teal-600",
    hex: "#14b8a6",
};
pub const EMERALD: StyleDescriptor = StyleDescriptor {
    gradient: "from-emerald-500 to-teal-600",
    solid: "bg-emerald-500",
    accent: "via-emerald-500",
    text: "text-emerald-600",
    hex: "#10b981",
};
pub const CYAN: StyleDescriptor = StyleDescriptor {
    gradient: "from-cyan-500 to-cyan-600",
    solid: "bg-cyan-500",
    accent: "via-cyan-500",
    text: "text-cyan-600",
    hex: "#06b6d4",
};
pub const VIOLET: StyleDescriptor = StyleDescriptor {
    gradient: "from-violet-500 to-purple-600",
    solid: "bg-violet-500",
    accent: "via-violet-500",
    text: "text-violet-600",
    hex: "#8b5cf6",
};
pub const INDIGO: StyleDescriptor = StyleDescriptor {
    gradient: "from-indigo-500 to-indigo-600",
    solid: "bg-indigo-500",
    accent: "via-indigo-500",
    text: "text-indigo-600",
    hex: "#6366f1",
};

// Journey steps and audiences
pub const ROSE: StyleDescriptor = StyleDescriptor {
    gradient: "from-rose-500 to-pink-600",
    solid: "bg-rose-500",
    accent: "via-rose-500",
    text: "text-rose-600",
    hex: "#f43f5e",
};
pub const AMBER: StyleDescriptor = StyleDescriptor {
    gradient: "from-amber-500 to-orange-600",
    solid: "bg-amber-500",
    accent: "via-amber-500",
    text: "text-amber-600",
    hex: "#f59e0b",
};
pub const YELLOW: StyleDescriptor = StyleDescriptor {
    gradient: "from-yellow-500 to-emerald-500",
    solid: "bg-yellow-500",
    accent: "via-yellow-500",
    text: "text-yellow-600",
    hex: "#eab308",
};
pub const SAPPHIRE: StyleDescriptor = StyleDescriptor {
    gradient: "from-sapphire-500 to-yellow-500",
    solid: "bg-sapphire-500",
    accent: "via-sapphire-500",
    text: "text-sapphire-600",
    hex: "#3b82f6",
};

impl ColorToken {
    pub const ALL: [ColorToken; 13] = [
        ColorToken::Blue,
        ColorToken::Green,
        ColorToken::Purple,
        ColorToken::Orange,
        ColorToken::Teal,
        ColorToken::Emerald,
        ColorToken::Cyan,
        ColorToken::Violet,
        ColorToken::Indigo,
        ColorToken::Rose,
        ColorToken::Amber,
        ColorToken::Yellow,
        ColorToken::Sapphire,
    ];

    pub const fn style(self) -> StyleDescriptor {
        match self {
            ColorToken::Blue => BLUE,
            ColorToken::Green => GREEN,
            ColorToken::Purple => PURPLE,
            ColorToken::Orange => ORANGE,
            ColorToken::Teal => TEAL,
            ColorToken::Emerald => EMERALD,
            ColorToken::Cyan => CYAN,
            ColorToken::Violet => VIOLET,
            ColorToken::Indigo => INDIGO,
            ColorToken::Rose => ROSE,
            ColorToken::Amber => AMBER,
            ColorToken::Yellow => YELLOW,
            ColorToken::Sapphire => SAPPHIRE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_has_distinct_solid_class() {
        let mut seen = std::collections::HashSet::new();
        for token in ColorToken::ALL {
            let style = token.style();
            assert!(style.solid.starts_with("bg-"));
            assert!(style.hex.starts_with('#'));
            assert!(seen.insert(style.solid), "duplicate class for {:?}", token);
        }
    }
}
