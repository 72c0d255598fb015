use course_core::expansion::SelectOutcome;
use course_core::model::CourseId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::courses::{BackToTop, CourseCard};
use crate::vm::map_course_cards;

/// The course section. Owns the listing, so at most one card is expanded.
#[component]
pub fn CoursesSection(menu_open: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let mut listing = use_signal(move || ctx.listing());

    let cards = map_course_cards(&listing.read().summaries());

    let on_select = use_callback(move |id: CourseId| match listing.write().select(id) {
        Ok(SelectOutcome::Applied(state)) => tracing::debug!(?state, "course expansion changed"),
        Ok(SelectOutcome::Dropped) => {}
        Err(err) => tracing::warn!(error = %err, "course selection failed"),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SectionTestHandles>() {
                handles.register(on_select);
            }
        }
    }

    rsx! {
        section { id: "courses", class: "courses-section",
            div { class: "courses-intro",
                h2 { "Educational courses" }
                p { "Professional training programs from a certified psychologist with years of practice" }
            }
            div { class: "courses-list",
                for card in cards {
                    CourseCard { key: "{card.id}", card, on_select }
                }
            }
            BackToTop { menu_open }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SectionTestHandles {
    select: std::rc::Rc<std::cell::RefCell<Option<Callback<CourseId>>>>,
}

#[cfg(test)]
impl SectionTestHandles {
    pub(crate) fn register(&self, select: Callback<CourseId>) {
        *self.select.borrow_mut() = Some(select);
    }

    pub(crate) fn select(&self) -> Callback<CourseId> {
        (*self.select.borrow()).expect("section select registered")
    }
}
