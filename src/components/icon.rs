use dioxus::prelude::*;
use itertools::Itertools;

use crate::theme::{FontSize, Spacing};

/// Glyphs available to buttons, drawn as strokes on a 24x24 view box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    Plus,
    Trash,
    Edit,
    Check,
    Close,
    Refresh,
    Download,
    UserPlus,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Self::Plus,
        Self::Trash,
        Self::Edit,
        Self::Check,
        Self::Close,
        Self::Refresh,
        Self::Download,
        Self::UserPlus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::Edit => "edit",
            Self::Check => "check",
            Self::Close => "close",
            Self::Refresh => "refresh",
            Self::Download => "download",
            Self::UserPlus => "user-plus",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Plus => "M12 5v14M5 12h14",
            Self::Trash => {
                "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2M10 11v6M14 11v6"
            }
            Self::Edit => "M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3z",
            Self::Check => "M20 6 9 17l-5-5",
            Self::Close => "M18 6 6 18M6 6l12 12",
            Self::Refresh => {
                "M23 4v6h-6M1 20v-6h6M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"
            }
            Self::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            Self::UserPlus => {
                "M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M8.5 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM20 8v6M23 11h-6"
            }
        }
    }
}

#[derive(PartialEq, Props, Clone)]
pub struct IconGlyphProps {
    pub icon: Icon,
    pub margin_right: Option<Spacing>,
    pub font_size: Option<FontSize>,
}

/// Renders an [`Icon`] at `1em`, so it scales with the surrounding font size.
#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let class = ["shrink-0"]
        .into_iter()
        .chain(props.margin_right.map(Spacing::mr_class))
        .chain(props.font_size.map(FontSize::class))
        .join(" ");

    rsx! {
        svg {
            class: class,
            "data-icon": props.icon.name(),
            "aria-hidden": "true",
            width: "1em",
            height: "1em",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: props.icon.path() }
        }
    }
}
