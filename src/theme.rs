//! Immutable presentation constants shared by every screen.

use crate::models::TrendDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub primary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderRadius {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub title: u16,
    pub subtitle: u16,
    pub body: u16,
    pub label: u16,
    pub button: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: Colors,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    pub font_sizes: FontSizes,
}

impl Theme {
    /// Color used to draw a trend indicator.
    pub fn trend_color(&self, direction: TrendDirection) -> &'static str {
        match direction {
            TrendDirection::Rising => self.colors.success,
            TrendDirection::Falling => self.colors.danger,
            TrendDirection::Steady | TrendDirection::Unknown => self.colors.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

pub const THEME: Theme = Theme {
    colors: Colors {
        primary: "#e63946",
        background: "#111111",
        card: "#1e1e1e",
        text: "#ffffff",
        secondary_text: "#bbbbbb",
        muted: "#888888",
        border: "#333333",
        success: "#4caf50",
        danger: "#e53935",
    },
    spacing: Spacing {
        xs: 5,
        sm: 10,
        md: 20,
        lg: 30,
        xl: 40,
    },
    border_radius: BorderRadius {
        sm: 8,
        md: 10,
        lg: 12,
    },
    font_sizes: FontSizes {
        title: 24,
        subtitle: 18,
        body: 14,
        label: 12,
        button: 16,
    },
};
