use std::collections::BTreeMap;

use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoursesSection {
    pub id: String,
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: Option<String>,
    #[serde(default)]
    pub divider_image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub button_text: String,
    pub button_link: String,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CourseOutline {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Ordered for Course {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Ordered for CourseOutline {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub type OutlinesByCourse = BTreeMap<String, Vec<CourseOutline>>;

#[derive(Clone, Debug, PartialEq)]
pub struct CoursesContent {
    pub section: CoursesSection,
    pub courses: Vec<Course>,
    pub outlines: OutlinesByCourse,
}

impl CoursesContent {
    pub fn new(section: CoursesSection, courses: Vec<Course>, outlines: Vec<CourseOutline>) -> Self {
        Self {
            section,
            courses: in_display_order(courses),
            outlines: group_outlines(outlines),
        }
    }

    pub fn fallback() -> Self {
        let section = CoursesSection {
            id: "1".to_string(),
            section_title: "Our Courses".to_string(),
            section_subtitle: Some("Comprehensive Islamic Education Programs".to_string()),
            divider_image_url: Some("/images/islamic-divider.svg".to_string()),
        };
        let courses = vec![Course {
            id: "1".to_string(),
            title: "Quran for Kids".to_string(),
            slug: "quran-for-kids".to_string(),
            description: "The ideal approach with your child is to begin teaching them the Quran at a young age.".to_string(),
            image_url: "/images/quran-kids.jpg".to_string(),
            image_alt: "Children learning Quran".to_string(),
            button_text: "Join Us Now".to_string(),
            button_link: "/free-trial".to_string(),
            order_index: 1,
            active: true,
        }];
        Self::new(section, courses, Vec::new())
    }

    /// The tab selected when the section first renders.
    pub fn initial_tab(&self) -> Option<String> {
        self.courses.first().map(|course| course.id.clone())
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn outlines_for(&self, course_id: &str) -> &[CourseOutline] {
        self.outlines
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Buckets outline rows under their parent course, each bucket in display
/// order.
pub fn group_outlines(outlines: Vec<CourseOutline>) -> OutlinesByCourse {
    let mut grouped = OutlinesByCourse::new();
    for outline in in_display_order(outlines) {
        grouped
            .entry(outline.course_id.clone())
            .or_default()
            .push(outline);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(id: &str, course_id: &str, order_index: i32) -> CourseOutline {
        CourseOutline {
            id: id.to_string(),
            course_id: course_id.to_string(),
            title: format!("Outline {}", id),
            order_index,
            active: true,
        }
    }

    fn course(id: &str, order_index: i32) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {}", id),
            slug: id.to_string(),
            description: format!("About {}", id),
            image_url: String::new(),
            image_alt: String::new(),
            button_text: String::new(),
            button_link: String::new(),
            order_index,
            active: true,
        }
    }

    fn ids(outlines: &[CourseOutline]) -> Vec<&str> {
        outlines.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn outlines_grouped_per_course_in_order() {
        let grouped = group_outlines(vec![
            outline("b2", "B", 2),
            outline("a3", "A", 3),
            outline("a1", "A", 1),
            outline("b1", "B", 1),
            outline("a2", "A", 2),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(ids(&grouped["A"]), vec!["a1", "a2", "a3"]);
        assert_eq!(ids(&grouped["B"]), vec!["b1", "b2"]);
        assert!(grouped["A"].iter().all(|o| o.course_id == "A"));
        assert!(grouped["B"].iter().all(|o| o.course_id == "B"));
    }

    #[test]
    fn inactive_outlines_are_not_grouped() {
        let mut hidden = outline("x", "C", 1);
        hidden.active = false;
        let grouped = group_outlines(vec![hidden, outline("a1", "A", 1)]);
        assert!(!grouped.contains_key("C"));
    }

    #[test]
    fn initial_tab_is_first_course_in_display_order() {
        let section = CoursesContent::fallback().section;
        let content = CoursesContent::new(section, vec![course("late", 9), course("early", 1)], Vec::new());
        assert_eq!(content.initial_tab().as_deref(), Some("early"));
    }

    #[test]
    fn no_courses_means_no_selection() {
        let section = CoursesContent::fallback().section;
        let content = CoursesContent::new(section, Vec::new(), Vec::new());
        assert_eq!(content.initial_tab(), None);
    }

    #[test]
    fn selected_tab_resolves_to_that_course() {
        let section = CoursesContent::fallback().section;
        let content = CoursesContent::new(
            section,
            vec![course("x", 1), course("y", 2)],
            vec![outline("y1", "y", 1)],
        );
        let selected = content.course("y").unwrap();
        assert_eq!(selected.description, "About y");
        assert_eq!(content.outlines_for("y").len(), 1);
        assert!(content.outlines_for("x").is_empty());
    }

    #[test]
    fn fallback_selects_its_only_course() {
        let content = CoursesContent::fallback();
        assert_eq!(content.initial_tab().as_deref(), Some("1"));
        assert_eq!(content.courses[0].title, "Quran for Kids");
    }
}
