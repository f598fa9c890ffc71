//! The black action button used for toolbar and table-row actions.
//!
//! Colors, padding and font size are fixed. Callers choose the label, an
//! optional leading [`Icon`] and the size token.

use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use super::{Button, Icon, IconGlyph};
use crate::theme::{ButtonSize, ButtonStyle, Color, FontSize, Spacing};

pub const ACTION_STYLE: ButtonStyle = ButtonStyle {
    bg: Color::Black,
    color: Color::White,
    hover_bg: Color::Gray600,
    px: Spacing(2),
    py: Spacing(1),
    font_size: FontSize::Sm,
};

const ICON_MARGIN: Spacing = Spacing(1);
const ICON_FONT_SIZE: FontSize = FontSize::Lg;

#[derive(PartialEq, Props, Clone)]
pub struct ActionButtonProps {
    pub on_click: EventHandler<()>,
    pub children: Element,
    pub icon: Option<Icon>,
    pub size: Option<ButtonSize>,
}

#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let icon = props.icon.map(|icon| {
        rsx!(IconGlyph { icon: icon, margin_right: ICON_MARGIN, font_size: ICON_FONT_SIZE })
    });

    rsx! {
        Button {
            style: ACTION_STYLE,
            size: props.size,
            onclick: move |_| activate(&props.on_click),
            {icon}
            {props.children}
        }
    }
}

/// Runs the caller's handler for one activation of the button.
fn activate(on_click: &EventHandler<()>) {
    trace!("action button activated");
    on_click.call(());
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    use dioxus::dioxus_core::{ElementId, Mutation};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };

    use super::*;

    #[derive(PartialEq, Props, Clone)]
    struct HarnessProps {
        label: String,
        icon: Option<Icon>,
        size: Option<ButtonSize>,
    }

    fn harness(props: HarnessProps) -> Element {
        rsx! {
            ActionButton {
                on_click: |_| {},
                icon: props.icon,
                size: props.size,
                "{props.label}"
            }
        }
    }

    fn render(label: &str, icon: Option<Icon>, size: Option<ButtonSize>) -> String {
        let props = HarnessProps { label: label.to_owned(), icon, size };
        let mut dom = VirtualDom::new_with_props(harness, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn label_only_renders_no_icon() {
        let html = render("Save", None, None);

        assert!(html.starts_with("<button"));
        assert!(html.contains(">Save</button>"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn missing_size_uses_primitive_default() {
        let html = render("Save", None, None);

        assert!(html.contains("data-size=\"md\""));
        assert!(html.contains("h-10 min-w-10"));
    }

    #[test]
    fn icon_precedes_label() {
        let html = render("Delete", Some(Icon::Trash), Some(ButtonSize::Sm));

        let icon_at = html.find("<svg").expect("icon is rendered");
        let label_at = html.find("Delete").expect("label is rendered");
        assert!(icon_at < label_at);
        assert!(html.contains("data-icon=\"trash\""));
        assert!(html.contains("class=\"shrink-0 mr-1 text-lg\""));
        assert!(html.contains("data-size=\"sm\""));
        assert!(html.ends_with("Delete</button>"));
    }

    #[test]
    fn size_token_is_exposed() {
        let html = render("Export", Some(Icon::Download), Some(ButtonSize::Lg));

        assert!(html.contains("data-size=\"lg\""));
        assert!(html.contains("h-12 min-w-12"));
    }

    #[test]
    fn style_is_fixed_for_every_configuration() {
        let fixed = "bg-black text-white hover:bg-gray-600 px-2 py-1 text-sm";

        for size in ButtonSize::ALL.map(Some).into_iter().chain([None]) {
            for icon in Icon::ALL.map(Some).into_iter().chain([None]) {
                let html = render("Go", icon, size);
                assert!(html.contains(fixed), "{icon:?} {size:?}: {html}");
            }
        }
    }

    thread_local! {
        static CLICKS: Cell<usize> = const { Cell::new(0) };
    }

    fn click_counter_harness() -> Element {
        rsx! {
            ActionButton {
                on_click: |()| CLICKS.with(|clicks| clicks.set(clicks.get() + 1)),
                icon: Icon::Check,
                "Save"
            }
        }
    }

    fn click_event() -> Event<dyn Any> {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        Event::new(Rc::new(data) as Rc<dyn Any>, true)
    }

    #[test]
    fn click_calls_handler_once() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        CLICKS.with(|clicks| clicks.set(0));

        let mut dom = VirtualDom::new(click_counter_harness);
        let mutations = dom.rebuild_to_vec();
        let listeners: Vec<ElementId> = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();

        assert_eq!(listeners.len(), 1);
        assert_eq!(CLICKS.with(Cell::get), 0);

        dom.runtime().handle_event("click", click_event(), listeners[0]);

        assert_eq!(CLICKS.with(Cell::get), 1);
    }
}
