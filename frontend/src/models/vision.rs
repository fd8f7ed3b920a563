use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VisionMissionContent {
    pub id: String,
    pub title: String,
    pub vision_text: String,
    #[serde(default)]
    pub mission_text: Option<String>,
    pub background_image_url: String,
    #[serde(default)]
    pub divider_image_url: Option<String>,
}

impl VisionMissionContent {
    pub fn fallback() -> Self {
        Self {
            id: "1".to_string(),
            title: "Vision & Mission".to_string(),
            vision_text: "Our vision and mission is to assist as many people as possible, regardless of age, in learning and mastering the recitation of the Holy Quran worldwide, using the most effective methods with experienced teachers.".to_string(),
            mission_text: None,
            background_image_url: "/images/vision-bg.jpg".to_string(),
            divider_image_url: Some("/images/islamic-divider.svg".to_string()),
        }
    }
}
