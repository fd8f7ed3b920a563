use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_link: String,
    pub hero_image_url: String,
    pub hero_image_alt: String,
}

impl HeroContent {
    pub fn fallback() -> Self {
        Self {
            id: "1".to_string(),
            title: "Nurture Your Child's".to_string(),
            subtitle: "Islamic Learning Journey".to_string(),
            description: "Join our comprehensive online Quran academy where experienced teachers guide children and adults in Islamic studies, Arabic language, and Quranic recitation from the comfort of your home.".to_string(),
            primary_button_text: "Start Free Trial".to_string(),
            secondary_button_text: "Enroll My Child".to_string(),
            primary_button_link: "/trial".to_string(),
            secondary_button_link: "/enrollment".to_string(),
            hero_image_url: "/images/hero-student.jpg".to_string(),
            hero_image_alt: "Young student learning Quran".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::settle;
    use crate::supabase::FetchError;

    #[test]
    fn missing_hero_row_renders_fallback() {
        let hero = settle(
            Err(FetchError::Status {
                table: "hero_content",
                status: 406,
            }),
            HeroContent::fallback,
            "hero",
        );
        assert_eq!(hero.title, "Nurture Your Child's");
        assert_eq!(hero.subtitle, "Islamic Learning Journey");
        assert_eq!(hero.secondary_button_link, "/enrollment");
        assert_eq!(hero.secondary_button_text, "Enroll My Child");
    }

    #[test]
    fn decodes_row_ignoring_timestamps() {
        let row = r#"{
            "id": "5b1c",
            "title": "Learn Quran",
            "subtitle": "Online",
            "description": "d",
            "primary_button_text": "Try",
            "secondary_button_text": "Enroll",
            "primary_button_link": "/trial",
            "secondary_button_link": "/enroll",
            "hero_image_url": "/images/a.jpg",
            "hero_image_alt": "a",
            "created_at": "2024-05-01T10:00:00+00:00",
            "updated_at": "2024-05-02T10:00:00+00:00"
        }"#;
        let hero: HeroContent = serde_json::from_str(row).unwrap();
        assert_eq!(hero.title, "Learn Quran");
        assert_eq!(hero.secondary_button_link, "/enroll");
    }

    #[test]
    fn row_missing_a_column_does_not_decode() {
        let row = r#"{ "id": "1", "title": "Only a title" }"#;
        assert!(serde_json::from_str::<HeroContent>(row).is_err());
    }
}
