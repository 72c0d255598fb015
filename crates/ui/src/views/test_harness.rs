use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use course_core::model::{Catalog, CourseId, ModuleId};
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CourseListing, ProgressService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::courses::{DetailsTestHandles, SectionTestHandles};
use crate::views::{BackToTop, CourseDetails, CoursesSection, LandingView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn listing(&self) -> CourseListing {
        self.services.listing()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Section { menu_open: bool },
    Details { course_id: u64, expanded: bool },
    BackToTop { menu_open: bool },
}

/// Lets a test flip the `expanded` prop of a mounted `CourseDetails`.
#[derive(Clone, Default)]
struct ExpandedHandle {
    expanded: Rc<RefCell<Option<Signal<bool>>>>,
}

impl ExpandedHandle {
    fn register(&self, expanded: Signal<bool>) {
        *self.expanded.borrow_mut() = Some(expanded);
    }

    fn signal(&self) -> Signal<bool> {
        (*self.expanded.borrow()).expect("details harness mounted")
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    expanded: ExpandedHandle,
    section: SectionTestHandles,
    details: DetailsTestHandles,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.expanded.clone());
    use_context_provider(|| props.handles.section.clone());
    use_context_provider(|| props.handles.details.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Section { menu_open } => rsx! { CoursesSection { menu_open } },
        ViewKind::Details {
            course_id,
            expanded,
        } => rsx! { DetailsHarness { course_id, expanded } },
        ViewKind::BackToTop { menu_open } => rsx! { BackToTop { menu_open } },
    }
}

#[component]
fn DetailsHarness(course_id: u64, expanded: bool) -> Element {
    let handle = use_context::<ExpandedHandle>();
    let expanded = use_signal(|| expanded);
    use_hook(move || handle.register(expanded));
    rsx! { CourseDetails { course_id: CourseId::new(course_id), expanded: expanded() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let pending resources resolve and re-render.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Keep driving the dom until `duration` of wall time has passed.
    pub async fn settle_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            self.drive_async().await;
        }
        self.drive_async().await;
    }

    pub fn set_expanded(&mut self, value: bool) {
        let mut expanded = self.handles.expanded.signal();
        self.dom.in_runtime(|| expanded.set(value));
        drive_dom(&mut self.dom);
    }

    pub fn select_course(&mut self, course_id: u64) {
        let select = self.handles.section.select();
        self.dom.in_runtime(|| select.call(CourseId::new(course_id)));
        drive_dom(&mut self.dom);
    }

    pub fn toggle_module(&mut self, module_id: u64) {
        let toggle = self.handles.details.toggle();
        self.dom.in_runtime(|| toggle.call(ModuleId::new(module_id)));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::from_storage(storage.clone(), fixed_clock(), Catalog::builtin());
    let app = Arc::new(TestApp { services });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        storage,
        handles,
    }
}

/// Number of module rows rendered as revealed.
pub fn visible_rows(html: &str) -> usize {
    html.matches("module-item visible").count()
}
