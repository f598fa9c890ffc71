//! Styled Dioxus buttons with an optional leading icon.
//!
//! [`ActionButton`] is the black toolbar button. It is built on the
//! [`Button`] and [`IconGlyph`] primitives, which take their colors,
//! spacing and sizes from [`theme`] tokens backed by Tailwind classes.

pub mod components;
pub mod theme;

pub use components::{ActionButton, ActionButtonProps, Button, Icon, IconGlyph};
pub use theme::{ButtonSize, ButtonStyle};
