use course_core::model::CourseId;
use dioxus::prelude::*;

use crate::views::courses::CourseDetails;
use crate::vm::CourseCardVm;

#[component]
pub fn CourseCard(card: CourseCardVm, on_select: EventHandler<CourseId>) -> Element {
    let id = card.id;
    let toggle_label = card.toggle_label();
    let arrow = if card.expanded { "▲" } else { "▼" };

    rsx! {
        article { class: card.card_class(),
            if let Some(src) = card.image_url.as_ref() {
                img { class: "course-image", src: "{src}", alt: "{card.title}" }
            }
            header { class: "course-header",
                h3 { "{card.title}" }
                if let Some(subtitle) = card.subtitle.as_ref() {
                    p { class: "course-subtitle", "{subtitle}" }
                }
            }
            div { class: "course-content",
                div { class: "course-main",
                    p { class: "course-description", "{card.description}" }
                    button {
                        class: "details-toggle",
                        onclick: move |_| on_select.call(id),
                        "{toggle_label} {arrow}"
                    }
                    CourseDetails { course_id: id, expanded: card.expanded }
                }
                aside { class: "course-info",
                    h4 { "Course information" }
                    ul {
                        for row in card.info.iter() {
                            li { key: "{row.label}",
                                span { class: "info-icon", "{row.glyph}" }
                                span { class: "info-label", "{row.label}:" }
                                span { class: "info-value", "{row.value}" }
                            }
                        }
                    }
                    if !card.skills.is_empty() {
                        h4 { "Skills" }
                        ul { class: "skills-list",
                            for skill in card.skills.iter() {
                                li { key: "{skill}", class: "skill-tag", "{skill}" }
                            }
                        }
                    }
                    a { class: "course-button", href: "#contact", "{card.enroll_label}" }
                }
            }
        }
    }
}
