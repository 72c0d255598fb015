mod back_to_top;
mod card;
mod details;
mod section;

pub use back_to_top::BackToTop;
pub use card::CourseCard;
pub use details::CourseDetails;
pub use section::CoursesSection;

#[cfg(test)]
pub(crate) use details::DetailsTestHandles;
#[cfg(test)]
pub(crate) use section::SectionTestHandles;
