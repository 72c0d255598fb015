use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#courses", "Courses"),
    ("#reviews", "Reviews"),
    ("#contact", "Contact"),
];

/// Page header with a collapsible mobile menu. The open flag lives in the parent.
#[component]
pub fn Header(menu_open: bool, on_toggle: EventHandler<bool>) -> Element {
    let nav_class = if menu_open { "nav-links open" } else { "nav-links" };
    let burger_label = if menu_open { "Close menu" } else { "Open menu" };

    rsx! {
        header { class: "site-header",
            a { class: "logo", href: "#", "Psychology courses" }
            button {
                class: "burger",
                aria_label: burger_label,
                aria_expanded: menu_open,
                onclick: move |_| on_toggle.call(!menu_open),
                if menu_open { "✕" } else { "☰" }
            }
            nav { class: nav_class,
                for (href, label) in NAV_LINKS {
                    a {
                        key: "{href}",
                        href,
                        onclick: move |_| on_toggle.call(false),
                        "{label}"
                    }
                }
            }
        }
    }
}
