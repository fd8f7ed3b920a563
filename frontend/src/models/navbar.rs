use serde::Deserialize;

use crate::loader::{default_active, in_display_order, Ordered};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavbarData {
    pub id: String,
    pub logo_url: String,
    pub logo_alt: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
}

impl NavbarData {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        let number: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", number)
    }

    pub fn whatsapp_href(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{}", digits)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub order_index: i32,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NavigationItem {
    /// Section id for in-page links (`#courses` -> `courses`).
    pub fn anchor(&self) -> Option<&str> {
        anchor_id(&self.href)
    }
}

impl Ordered for NavigationItem {
    fn order_index(&self) -> i32 {
        self.order_index
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarContent {
    pub navbar: NavbarData,
    pub items: Vec<NavigationItem>,
}

impl NavbarContent {
    pub fn new(navbar: NavbarData, items: Vec<NavigationItem>) -> Self {
        Self {
            navbar,
            items: in_display_order(items),
        }
    }

    pub fn fallback() -> Self {
        let navbar = NavbarData {
            id: "1".to_string(),
            logo_url: "/images/logo.png".to_string(),
            logo_alt: "Qarabic Academy".to_string(),
            email: "info@qarabic.com".to_string(),
            phone: "+1 (309) 377-5300".to_string(),
            whatsapp: "+1 (309) 377-5300".to_string(),
        };
        let items = [
            ("Why Us", "#why_us"),
            ("Courses", "#courses"),
            ("Reviews", "#reviews"),
            ("Get Free Trial", "/free-trial"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((label, href), n)| NavigationItem {
            id: n.to_string(),
            label: label.to_string(),
            href: href.to_string(),
            order_index: n,
            is_external: false,
            icon: None,
            active: true,
        })
        .collect();

        Self::new(navbar, items)
    }

    /// Ids of the page sections the nav links point at.
    pub fn tracked_sections(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(NavigationItem::anchor)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_are_normalised() {
        let navbar = NavbarContent::fallback().navbar;
        assert_eq!(navbar.mailto_href(), "mailto:info@qarabic.com");
        assert_eq!(navbar.tel_href(), "tel:+1(309)377-5300");
        assert_eq!(navbar.whatsapp_href(), "https://wa.me/13093775300");
    }

    #[test]
    fn only_in_page_links_are_tracked() {
        let content = NavbarContent::fallback();
        assert_eq!(content.tracked_sections(), vec!["why_us", "courses", "reviews"]);
    }

    #[test]
    fn anchor_requires_an_id() {
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/login"), None);
        assert_eq!(anchor_id("#reviews"), Some("reviews"));
    }
}
