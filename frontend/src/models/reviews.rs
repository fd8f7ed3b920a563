use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudentsReviewsSection {
    pub id: String,
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: Option<String>,
    pub divider_image_url: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub footer_frame_image_url: String,
    pub logo_url: String,
    pub logo_alt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewImage {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl ReviewImage {
    /// Two-digit badge shown on the slide, e.g. `07`.
    pub fn badge(&self) -> String {
        format!("{:02}", self.order_index)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterNavigationItem {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub is_external: bool,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Ordered for ReviewImage {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Ordered for FooterNavigationItem {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Everything the reviews section shows. This section has no fallback
/// content: when any of its queries fails it renders a reload prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewsContent {
    pub section: StudentsReviewsSection,
    pub images: Vec<ReviewImage>,
    pub navigation: Vec<FooterNavigationItem>,
}

impl ReviewsContent {
    pub fn new(
        section: StudentsReviewsSection,
        images: Vec<ReviewImage>,
        navigation: Vec<FooterNavigationItem>,
    ) -> Self {
        Self {
            section,
            images: in_display_order(images),
            navigation: in_display_order(navigation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, order_index: i32) -> ReviewImage {
        ReviewImage {
            id: id.to_string(),
            title: format!("Student Review {}", id),
            image_url: format!("/images/reviews/{}.webp", id),
            image_alt: String::new(),
            order_index,
            active: true,
        }
    }

    #[test]
    fn badge_is_zero_padded() {
        assert_eq!(image("a", 7).badge(), "07");
        assert_eq!(image("b", 29).badge(), "29");
    }

    #[test]
    fn images_are_put_in_display_order() {
        let section: StudentsReviewsSection = serde_json::from_str(
            r#"{
                "id": "1",
                "section_title": "Students' Reviews",
                "divider_image_url": "/d.svg",
                "cta_button_text": "Join Us Now",
                "cta_button_link": "/free-trial",
                "footer_frame_image_url": "/f.png",
                "logo_url": "/l.png",
                "logo_alt": "logo"
            }"#,
        )
        .unwrap();
        let content = ReviewsContent::new(section, vec![image("b", 2), image("a", 1)], Vec::new());
        assert_eq!(content.images[0].id, "a");
        assert_eq!(content.section.section_subtitle, None);
    }
}
