use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WhyUsContent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub image_url: String,
    pub image_alt: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl WhyUsContent {
    pub fn fallback() -> Self {
        Self {
            id: "1".to_string(),
            title: "Why Choose Our Academy?".to_string(),
            description: "At our academy, we are committed to offering the most effective methods for understanding the meanings of the Quran, reinforcing Islamic values, and simplifying the process of recitation and memorization all under the guidance of our highly experienced teachers. Our flexible scheduling and regular progress reports ensure that each learner advances at their own pace.".to_string(),
            button_text: "Join Us Today".to_string(),
            button_link: "/enrollment".to_string(),
            image_url: "/images/quran-stand.jpg".to_string(),
            image_alt: "Beautiful Quran on wooden stand with prayer beads".to_string(),
            highlights: vec![
                "Certified & Experienced Teachers".to_string(),
                "Flexible Scheduling Options".to_string(),
                "Regular Progress Reports".to_string(),
                "Personalized Learning Path".to_string(),
            ],
        }
    }
}
