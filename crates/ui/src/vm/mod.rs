mod course_card_vm;
mod progress_vm;

pub use course_card_vm::{CourseCardVm, InfoRowVm, info_glyph, map_course_cards};
pub use progress_vm::{ModuleRowVm, ProgressVm, map_module_rows};
