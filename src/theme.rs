//! Design tokens shared by the button and icon primitives.
//!
//! Every token resolves to a Tailwind utility class that is bundled in
//! `assets/tailwind.css`. Class names are written out literally so the
//! Tailwind scanner picks them up.

use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use color_eyre::eyre::{eyre, Report};
use itertools::Itertools;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Gray600,
}

impl Color {
    pub fn bg_class(self) -> &'static str {
        match self {
            Self::Black => "bg-black",
            Self::White => "bg-white",
            Self::Gray600 => "bg-gray-600",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Black => "text-black",
            Self::White => "text-white",
            Self::Gray600 => "text-gray-600",
        }
    }

    pub fn hover_bg_class(self) -> &'static str {
        match self {
            Self::Black => "hover:bg-black",
            Self::White => "hover:bg-white",
            Self::Gray600 => "hover:bg-gray-600",
        }
    }
}

/// A number of theme spacing units (one unit is `0.25rem`).
///
/// Only 0 through 4 units are bundled; larger values clamp to 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Spacing(pub u8);

impl Spacing {
    fn units(self) -> u8 {
        self.0.min(4)
    }

    /// Horizontal padding. Values above 4 units render as `px-4`.
    pub fn px_class(self) -> &'static str {
        ["px-0", "px-1", "px-2", "px-3", "px-4"][self.units() as usize]
    }

    /// Vertical padding. Values above 4 units render as `py-4`.
    pub fn py_class(self) -> &'static str {
        ["py-0", "py-1", "py-2", "py-3", "py-4"][self.units() as usize]
    }

    /// Right margin. Values above 4 units render as `mr-4`.
    pub fn mr_class(self) -> &'static str {
        ["mr-0", "mr-1", "mr-2", "mr-3", "mr-4"][self.units() as usize]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontSize {
    Xs,
    Sm,
    Md,
    Lg,
}

impl FontSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Md => "text-base",
            Self::Lg => "text-lg",
        }
    }
}

/// Sizing token understood by the button primitive.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Height and minimum width. Padding and font size are left to the style.
    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => "h-6 min-w-6",
            Self::Sm => "h-8 min-w-8",
            Self::Md => "h-10 min-w-10",
            Self::Lg => "h-12 min-w-12",
        }
    }
}

impl Display for ButtonSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.token().fmt(f)
    }
}

impl FromStr for ButtonSize {
    type Err = Report;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| eyre!("unknown button size {token:?}"))
    }
}

/// The visual properties a caller sets on the button primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ButtonStyle {
    pub bg: Color,
    pub color: Color,
    pub hover_bg: Color,
    pub px: Spacing,
    pub py: Spacing,
    pub font_size: FontSize,
}

impl ButtonStyle {
    pub fn class(&self) -> String {
        [
            self.bg.bg_class(),
            self.color.text_class(),
            self.hover_bg.hover_bg_class(),
            self.px.px_class(),
            self.py.py_class(),
            self.font_size.class(),
        ]
        .into_iter()
        .join(" ")
    }
}
