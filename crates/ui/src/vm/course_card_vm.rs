use course_core::model::{CourseId, InfoIcon};
use services::CourseSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRowVm {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub enroll_label: String,
    pub image_url: Option<String>,
    pub info: Vec<InfoRowVm>,
    pub skills: Vec<String>,
    pub highlighted: bool,
    pub expanded: bool,
}

impl CourseCardVm {
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Hide course details"
        } else {
            "Show course program"
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.highlighted {
            "course-card highlighted"
        } else {
            "course-card"
        }
    }
}

#[must_use]
pub fn info_glyph(icon: InfoIcon) -> &'static str {
    match icon {
        InfoIcon::Clock => "🕒",
        InfoIcon::Graduation => "🎓",
        InfoIcon::Laptop => "💻",
        InfoIcon::Calendar => "📅",
    }
}

#[must_use]
pub fn map_course_cards(summaries: &[CourseSummary]) -> Vec<CourseCardVm> {
    summaries
        .iter()
        .map(|summary| CourseCardVm {
            id: summary.id,
            title: summary.title.clone(),
            subtitle: summary.subtitle.clone(),
            description: summary.description.clone(),
            enroll_label: match summary.price.as_deref() {
                Some(price) => format!("Enroll • {price}"),
                None => "Enroll".to_string(),
            },
            image_url: summary.image_url.clone(),
            info: summary
                .info
                .iter()
                .map(|row| InfoRowVm {
                    glyph: info_glyph(row.icon),
                    label: row.label,
                    value: row.value.clone(),
                })
                .collect(),
            skills: summary.skills.clone(),
            highlighted: summary.highlighted,
            expanded: summary.expanded,
        })
        .collect()
}
