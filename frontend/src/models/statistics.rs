use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

pub const DEFAULT_BACKGROUND: &str = "#3B82F6";
pub const DEFAULT_ICON_COLOR: &str = "#FFFFFF";
pub const DEFAULT_HOVER: &str = "#2563EB";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Banner,
    Main,
    Reviews,
    #[serde(other)]
    General,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Banner => "banner",
            Category::Main => "main",
            Category::Reviews => "reviews",
            Category::General => "general",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatisticsAchievement {
    pub id: String,
    pub title: String,
    pub value: String,
    pub description: String,
    pub icon_name: String,
    #[serde(default)]
    pub icon_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub hover_color: Option<String>,
    pub category: Category,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Ordered for StatisticsAchievement {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Colours a statistic is drawn with once the optional columns are
/// filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub icon: String,
    pub hover: String,
}

impl Palette {
    pub fn resolve(stat: &StatisticsAchievement) -> Self {
        Self {
            background: stat
                .background_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
            icon: stat
                .icon_color
                .clone()
                .unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string()),
            hover: stat
                .hover_color
                .clone()
                .unwrap_or_else(|| DEFAULT_HOVER.to_string()),
        }
    }

    /// Background to paint while the pointer is over the card.
    pub fn fill(&self, hovered: bool) -> &str {
        if hovered {
            &self.hover
        } else {
            &self.background
        }
    }

    pub fn gradient(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.background, self.hover)
    }
}

/// Statistics shown when the `category` query fails.
pub fn fallback(category: Category) -> Vec<StatisticsAchievement> {
    let rows: &[(&str, &str, &str, &str, &str, &str, &str)] = match category {
        Category::Banner => &[
            ("Certified Teachers", "\u{2713}", "Qualified instructors", "CheckCircle", "#10B981", "#059669", "#047857"),
            ("Students", "1000+", "Active learners", "Users", "#3B82F6", "#2563EB", "#1D4ED8"),
        ],
        Category::Main => &[
            ("Active Students", "1000+", "Active Students", "Users", "#FFFFFF", "#3B82F6", "#2563EB"),
            ("Expert Teachers", "50+", "Expert Teachers", "GraduationCap", "#FFFFFF", "#3B82F6", "#2563EB"),
            ("Course Categories", "4", "Course Categories", "BookOpen", "#FFFFFF", "#3B82F6", "#2563EB"),
            ("Support Available", "24/7", "Support Available", "Globe", "#FFFFFF", "#3B82F6", "#2563EB"),
        ],
        Category::Reviews => &[
            ("Happy Students", "5+", "Satisfied learners", "Users", "#FFFFFF", "#3B82F6", "#2563EB"),
            ("Average Rating", "4.9", "Student feedback score", "Star", "#FFFFFF", "#F59E0B", "#D97706"),
            ("Satisfaction Rate", "98%", "Student satisfaction", "TrendingUp", "#FFFFFF", "#10B981", "#059669"),
        ],
        Category::General => &[],
    };

    let stats = rows
        .iter()
        .zip(1..)
        .map(|(&(title, value, description, icon, icon_color, background, hover), n)| {
            StatisticsAchievement {
                id: n.to_string(),
                title: title.to_string(),
                value: value.to_string(),
                description: description.to_string(),
                icon_name: icon.to_string(),
                icon_color: Some(icon_color.to_string()),
                background_color: Some(background.to_string()),
                hover_color: Some(hover.to_string()),
                category,
                order_index: n,
                active: true,
            }
        })
        .collect();

    in_display_order(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_stat() -> StatisticsAchievement {
        serde_json::from_str(
            r#"{
                "id": "9",
                "title": "Countries",
                "value": "12",
                "description": "Students worldwide",
                "icon_name": "Globe",
                "category": "main",
                "order_index": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_colours_resolve_to_defaults() {
        let palette = Palette::resolve(&bare_stat());
        assert_eq!(palette.background, DEFAULT_BACKGROUND);
        assert_eq!(palette.icon, DEFAULT_ICON_COLOR);
        assert_eq!(palette.hover, DEFAULT_HOVER);
    }

    #[test]
    fn hover_swaps_fill_colour() {
        let mut stat = bare_stat();
        stat.background_color = Some("#111111".to_string());
        stat.hover_color = Some("#222222".to_string());
        let palette = Palette::resolve(&stat);
        assert_eq!(palette.fill(false), "#111111");
        assert_eq!(palette.fill(true), "#222222");
        assert_eq!(palette.gradient(), "linear-gradient(135deg, #111111, #222222)");
    }

    #[test]
    fn unknown_category_reads_as_general() {
        let stat: StatisticsAchievement = serde_json::from_str(
            r#"{
                "id": "1", "title": "t", "value": "v", "description": "d",
                "icon_name": "Star", "category": "sidebar", "order_index": 3
            }"#,
        )
        .unwrap();
        assert_eq!(stat.category, Category::General);
        assert!(stat.active);
    }

    #[test]
    fn fallbacks_match_their_category() {
        for category in [Category::Banner, Category::Main, Category::Reviews] {
            let stats = fallback(category);
            assert!(!stats.is_empty());
            assert!(stats.iter().all(|s| s.category == category));
        }
        assert_eq!(fallback(Category::Main).len(), 4);
        assert_eq!(fallback(Category::Reviews)[1].value, "4.9");
    }
}
