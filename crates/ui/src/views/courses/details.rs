use std::sync::Arc;

use course_core::model::{CourseId, ModuleId};
use dioxus::prelude::*;
use services::{CourseProgress, ProgressError};
use tokio::sync::Mutex;

use crate::context::AppContext;
use crate::views::reveal::use_staggered_reveal;
use crate::views::state::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressVm, map_module_rows};

// The async mutex queues toggles and resets in click order.
type SharedProgress = Arc<Mutex<CourseProgress>>;

fn ready(widget: Resource<Result<SharedProgress, ViewError>>) -> Option<SharedProgress> {
    match view_state_from_resource(widget) {
        ViewState::Ready(shared) => Some(shared),
        _ => None,
    }
}

/// Expandable program of one course: progress checklist and benefits.
#[component]
pub fn CourseDetails(course_id: CourseId, expanded: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.progress().catalog().get(course_id).cloned();
    let module_count = course.as_ref().map_or(0, |course| course.module_count());
    let benefit_count = course.as_ref().map_or(0, |course| course.benefits().len());

    let mut snapshot = use_signal(|| None::<ProgressVm>);
    let widget = use_resource(move || {
        let progress = ctx.progress();
        async move {
            let opened = progress.open(course_id).await.map_err(|err| match err {
                ProgressError::UnknownCourse(_) => ViewError::UnknownCourse,
                _ => ViewError::Unknown,
            })?;
            snapshot.set(Some(ProgressVm::from_progress(&opened)));
            Ok::<SharedProgress, ViewError>(Arc::new(Mutex::new(opened)))
        }
    });

    let module_reveal = use_staggered_reveal(module_count, expanded);
    let benefit_reveal = use_staggered_reveal(benefit_count, expanded);

    let on_toggle = use_callback(move |module_id: ModuleId| {
        let Some(shared) = ready(widget) else {
            return;
        };
        spawn(async move {
            let mut progress = shared.lock().await;
            if progress.toggle(module_id).await.is_none() {
                tracing::debug!(%course_id, %module_id, "toggle ignored");
            }
            snapshot.set(Some(ProgressVm::from_progress(&progress)));
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DetailsTestHandles>() {
                handles.register(on_toggle);
            }
        }
    }

    let on_reset = move |evt: MouseEvent| {
        evt.stop_propagation();
        let Some(shared) = ready(widget) else {
            return;
        };
        spawn(async move {
            let mut progress = shared.lock().await;
            progress.reset().await;
            snapshot.set(Some(ProgressVm::from_progress(&progress)));
        });
    };

    let on_dismiss = move |_: MouseEvent| {
        let Some(shared) = ready(widget) else {
            return;
        };
        spawn(async move {
            let mut progress = shared.lock().await;
            progress.dismiss_notice();
            snapshot.set(Some(ProgressVm::from_progress(&progress)));
        });
    };

    if !expanded {
        return rsx! {
            div { class: "expanded-details collapsed" }
        };
    }

    let Some(course) = course else {
        return rsx! {
            p { class: "inline-error", "{ViewError::UnknownCourse.message()}" }
        };
    };

    let vm = match (view_state_from_resource(widget), snapshot()) {
        (ViewState::Ready(_), Some(vm)) => vm,
        (ViewState::Error(err), _) => {
            return rsx! {
                p { class: "inline-error", "{err.message()}" }
            };
        }
        _ => {
            return rsx! {
                div { class: "expanded-details expanded",
                    p { class: "loading", "Loading progress…" }
                }
            };
        }
    };

    let stats = vm.stats_label();
    let bar_style = vm.bar_style();
    let rows = map_module_rows(&course);
    let benefits = course.benefits().to_vec();

    rsx! {
        div { class: "expanded-details expanded",
            h4 { class: "details-title", "Course program" }

            div { class: "progress-container",
                div { class: "progress-stats",
                    span { "Learning progress" }
                    span { "{stats}" }
                }
                div { class: "progress-track",
                    div { class: "progress-bar", style: "{bar_style}" }
                }
                if vm.has_progress() {
                    button { class: "reset-button", onclick: on_reset, "Reset progress" }
                }
                if let Some(notice) = vm.notice {
                    div { class: "inline-error", role: "alert",
                        span { "{notice}" }
                        button { class: "dismiss", onclick: on_dismiss, "×" }
                    }
                }
            }

            ul { class: "modules-list",
                for (index, row) in rows.into_iter().enumerate() {
                    li {
                        key: "{row.id}",
                        class: if module_reveal.read().is_revealed(index) { "module-item visible" } else { "module-item" },
                        div { class: "module-header",
                            span { class: "module-title", "{row.title}" }
                            button {
                                class: if vm.is_completed(row.id) { "module-checkbox completed" } else { "module-checkbox" },
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_toggle.call(row.id);
                                },
                                if vm.is_completed(row.id) { "✓" }
                            }
                        }
                        p { class: "module-content", "{row.content}" }
                    }
                }
            }

            if !benefits.is_empty() {
                h4 { class: "details-title", "What you will learn" }
                div { class: "benefits-grid",
                    for (index, benefit) in benefits.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if benefit_reveal.read().is_revealed(index) { "benefit-item visible" } else { "benefit-item" },
                            span { class: "benefit-icon", "✔" }
                            span { class: "benefit-text", "{benefit}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DetailsTestHandles {
    toggle: std::rc::Rc<std::cell::RefCell<Option<Callback<ModuleId>>>>,
}

#[cfg(test)]
impl DetailsTestHandles {
    pub(crate) fn register(&self, toggle: Callback<ModuleId>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<ModuleId> {
        (*self.toggle.borrow()).expect("details toggle registered")
    }
}
