use dioxus::prelude::*;

/// Floating link back to the course section, hidden while the menu is open.
#[component]
pub fn BackToTop(menu_open: bool) -> Element {
    let class = if menu_open {
        "back-to-top hidden"
    } else {
        "back-to-top"
    };

    rsx! {
        a { class, href: "#courses", aria_hidden: menu_open, "↑" }
    }
}
