use dioxus::prelude::*;

use crate::views::{CoursesSection, Header};

#[component]
pub fn LandingView() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        div { class: if menu_open() { "page menu-open" } else { "page" },
            Header {
                menu_open: menu_open(),
                on_toggle: move |open: bool| menu_open.set(open),
            }
            main {
                CoursesSection { menu_open: menu_open() }
            }
        }
    }
}
