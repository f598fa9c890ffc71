mod args;

use action_button::{ActionButton, ButtonSize, Icon};
use color_eyre::eyre::Result;
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

static ACTIONS: &[(&str, Option<Icon>)] = &[
    ("Add user", Some(Icon::UserPlus)),
    ("Edit", Some(Icon::Edit)),
    ("Delete", Some(Icon::Trash)),
    ("Refresh", Some(Icon::Refresh)),
    ("Export", Some(Icon::Download)),
    ("Save", None),
];

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = args::get_args();
    dioxus::logger::init(if args.verbose { Level::DEBUG } else { Level::INFO })?;
    info!(size = ?args.size, icons = !args.no_icons, "starting action button gallery");

    launch();
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, WindowBuilder};

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Action buttons")),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let args = args::get_args();
    let mut last_action = use_signal(|| None::<&'static str>);
    let mut clicks = use_signal(|| 0usize);

    let on_action = move |label: &'static str| {
        info!(label, "gallery action");
        last_action.set(Some(label));
        *clicks.write() += 1;
    };

    let status = match last_action() {
        Some(label) => format!("Last action: {label} ({} clicks)", clicks()),
        None => "Click a button".to_owned(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: "min-h-screen bg-white p-6 flex flex-col gap-4",
            for size in ButtonSize::ALL {
                GalleryRow {
                    title: format!("size {size}"),
                    size: size,
                    icons: !args.no_icons,
                    on_action: on_action
                }
            }
            GalleryRow {
                title: "custom",
                size: args.size,
                icons: !args.no_icons,
                on_action: on_action
            }
            p { class: "text-sm text-gray-800", {status} }
        }
    }
}

#[derive(PartialEq, Props, Clone)]
struct GalleryRowProps {
    #[props(into)]
    title: String,
    size: Option<ButtonSize>,
    icons: bool,
    on_action: EventHandler<&'static str>,
}

#[component]
fn GalleryRow(props: GalleryRowProps) -> Element {
    let show_icons = props.icons;

    rsx! {
        div {
            class: "flex items-center gap-2",
            span { class: "w-28 text-sm text-gray-600", {props.title} }
            for &(label, icon) in ACTIONS {
                ActionButton {
                    on_click: move |_| props.on_action.call(label),
                    icon: icon.filter(|_| show_icons),
                    size: props.size,
                    "{label}"
                }
            }
        }
    }
}
