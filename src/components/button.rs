use dioxus::prelude::*;
use itertools::Itertools;

use crate::theme::{ButtonSize, ButtonStyle};

static BASE_CLASS: &str = "inline-flex items-center justify-center rounded font-semibold transition-colors focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-gray-600";

#[derive(PartialEq, Props, Clone)]
pub struct ButtonProps {
    pub style: ButtonStyle,
    pub size: Option<ButtonSize>,
    pub onclick: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let size = props.size.unwrap_or_default();
    let style = props.style.class();
    let class = [BASE_CLASS, size.class(), style.as_str()].into_iter().join(" ");

    rsx! {
        button {
            r#type: "button",
            class: class,
            "data-size": size.token(),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ACTION_STYLE;

    #[derive(PartialEq, Props, Clone)]
    struct HarnessProps {
        size: Option<ButtonSize>,
    }

    fn harness(props: HarnessProps) -> Element {
        rsx! {
            Button { style: ACTION_STYLE, size: props.size, onclick: |_| {}, "Submit" }
        }
    }

    fn render(size: Option<ButtonSize>) -> String {
        let mut dom = VirtualDom::new_with_props(harness, HarnessProps { size });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_style_and_size_classes() {
        let html = render(Some(ButtonSize::Lg));

        assert!(html.starts_with("<button"));
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("h-12 min-w-12 bg-black text-white hover:bg-gray-600 px-2 py-1 text-sm"));
        assert!(html.contains("data-size=\"lg\""));
        assert!(html.contains(">Submit</button>"));
    }

    #[test]
    fn missing_size_falls_back_to_md() {
        let html = render(None);

        assert!(html.contains("data-size=\"md\""));
        assert!(html.contains("h-10 min-w-10"));
    }
}
