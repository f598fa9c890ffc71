mod action_button;
mod button;
mod icon;

pub use action_button::{ActionButton, ActionButtonProps, ACTION_STYLE};
pub use button::{Button, ButtonProps};
pub use icon::{Icon, IconGlyph, IconGlyphProps};
