use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LearningProcessSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub divider_image_url: Option<String>,
    pub cta_button_text: String,
    pub cta_button_link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub step_number: i32,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Ordered for ProcessStep {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LearningProcessContent {
    pub section: LearningProcessSection,
    pub steps: Vec<ProcessStep>,
}

impl LearningProcessContent {
    pub fn new(section: LearningProcessSection, steps: Vec<ProcessStep>) -> Self {
        Self {
            section,
            steps: in_display_order(steps),
        }
    }

    pub fn fallback() -> Self {
        let section = LearningProcessSection {
            id: "1".to_string(),
            title: "Start Learning Quran".to_string(),
            subtitle: "Register yourself or register your child with us today in 3 Easy Steps and start your free trial class.".to_string(),
            divider_image_url: Some("/images/islamic-divider.svg".to_string()),
            cta_button_text: "Join Us Now".to_string(),
            cta_button_link: "/free-trial".to_string(),
        };
        let steps = [
            (
                "One Click Registration",
                "Simply Click Here which will take you to the registration page. You can register for free online Quran classes with our online Quran teachers just by filling in your name and contact information.",
                "/images/one-click-registration.png",
            ),
            (
                "Schedule Quran Free Trial",
                "Upon receiving your registration, We will contact you back to set your convenience time for you for Free Quran Trial Classes and give you overview about our Quran teaching process.",
                "/images/schedule-trial.png",
            ),
            (
                "Start Taking Your First Class",
                "Login to our Student Portal with the provided credentials and start taking your first class with one of our online Qaari (Quran Teacher).",
                "/images/first-class.png",
            ),
        ]
        .into_iter()
        .zip(1..)
        .map(|((title, description, image_url), n)| ProcessStep {
            id: n.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            image_alt: title.to_string(),
            step_number: n,
            order_index: n,
            active: true,
        })
        .collect();

        Self::new(section, steps)
    }
}

/// Progress dot `dot` is lit on the card at `position` once that step is
/// reached.
pub fn dot_lit(dot: usize, position: usize) -> bool {
    dot <= position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_numbered_steps() {
        let content = LearningProcessContent::fallback();
        let numbers: Vec<_> = content.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(content.steps[1].title, "Schedule Quran Free Trial");
    }

    #[test]
    fn dots_fill_up_to_current_step() {
        let lit: Vec<_> = (0..3).map(|dot| dot_lit(dot, 1)).collect();
        assert_eq!(lit, vec![true, true, false]);
    }
}
