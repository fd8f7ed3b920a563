use yew::prelude::*;

/// The icon set statistics rows can name. Anything else draws as a star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Award,
    BookOpen,
    Calendar,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Clock,
    Globe,
    GraduationCap,
    Heart,
    Mail,
    Menu,
    MessageCircle,
    Pause,
    Phone,
    Play,
    Star,
    TrendingUp,
    User,
    UserPlus,
    Users,
    X,
}

impl Icon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" => Icon::ArrowRight,
            "Award" => Icon::Award,
            "BookOpen" => Icon::BookOpen,
            "Calendar" => Icon::Calendar,
            "Check" => Icon::Check,
            "CheckCircle" => Icon::CheckCircle,
            "ChevronDown" => Icon::ChevronDown,
            "ChevronLeft" => Icon::ChevronLeft,
            "ChevronRight" => Icon::ChevronRight,
            "Clock" => Icon::Clock,
            "Globe" => Icon::Globe,
            "GraduationCap" => Icon::GraduationCap,
            "Heart" => Icon::Heart,
            "Mail" => Icon::Mail,
            "Menu" => Icon::Menu,
            "MessageCircle" => Icon::MessageCircle,
            "Pause" => Icon::Pause,
            "Phone" => Icon::Phone,
            "Play" => Icon::Play,
            "TrendingUp" => Icon::TrendingUp,
            "User" => Icon::User,
            "UserPlus" => Icon::UserPlus,
            "Users" => Icon::Users,
            "X" => Icon::X,
            _ => Icon::Star,
        }
    }

    pub fn render(self, class: &str) -> Html {
        self.render_colored(class, None)
    }

    pub fn render_colored(self, class: &str, color: Option<&str>) -> Html {
        let style = color.map(|c| format!("color: {};", c)).unwrap_or_default();
        html! {
            <svg class={classes!("icon", class.to_string())} style={style} viewBox="0 0 24 24" fill="none"
                stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                { self.shape() }
            </svg>
        }
    }

    fn shape(self) -> Html {
        match self {
            Icon::ArrowRight => html! { <>
                <line x1="5" y1="12" x2="19" y2="12" />
                <polyline points="12 5 19 12 12 19" />
            </> },
            Icon::Award => html! { <>
                <circle cx="12" cy="8" r="7" />
                <polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88" />
            </> },
            Icon::BookOpen => html! { <>
                <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
            </> },
            Icon::Calendar => html! { <>
                <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
                <line x1="16" y1="2" x2="16" y2="6" />
                <line x1="8" y1="2" x2="8" y2="6" />
                <line x1="3" y1="10" x2="21" y2="10" />
            </> },
            Icon::Check => html! { <polyline points="20 6 9 17 4 12" /> },
            Icon::CheckCircle => html! { <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <polyline points="22 4 12 14.01 9 11.01" />
            </> },
            Icon::ChevronDown => html! { <polyline points="6 9 12 15 18 9" /> },
            Icon::ChevronLeft => html! { <polyline points="15 18 9 12 15 6" /> },
            Icon::ChevronRight => html! { <polyline points="9 18 15 12 9 6" /> },
            Icon::Clock => html! { <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </> },
            Icon::Globe => html! { <>
                <circle cx="12" cy="12" r="10" />
                <line x1="2" y1="12" x2="22" y2="12" />
                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
            </> },
            Icon::GraduationCap => html! { <>
                <path d="M22 10v6M2 10l10-5 10 5-10 5z" />
                <path d="M6 12v5c3 3 9 3 12 0v-5" />
            </> },
            Icon::Heart => html! {
                <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" />
            },
            Icon::Mail => html! { <>
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                <polyline points="22,6 12,13 2,6" />
            </> },
            Icon::Menu => html! { <>
                <line x1="3" y1="12" x2="21" y2="12" />
                <line x1="3" y1="6" x2="21" y2="6" />
                <line x1="3" y1="18" x2="21" y2="18" />
            </> },
            Icon::MessageCircle => html! {
                <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" />
            },
            Icon::Pause => html! { <>
                <rect x="6" y="4" width="4" height="16" />
                <rect x="14" y="4" width="4" height="16" />
            </> },
            Icon::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Icon::Play => html! { <polygon points="5 3 19 12 5 21 5 3" /> },
            Icon::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            Icon::TrendingUp => html! { <>
                <polyline points="23 6 13.5 15.5 8.5 10.5 1 18" />
                <polyline points="17 6 23 6 23 12" />
            </> },
            Icon::User => html! { <>
                <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </> },
            Icon::UserPlus => html! { <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                <circle cx="8.5" cy="7" r="4" />
                <line x1="20" y1="8" x2="20" y2="14" />
                <line x1="23" y1="11" x2="17" y2="11" />
            </> },
            Icon::Users => html! { <>
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </> },
            Icon::X => html! { <>
                <line x1="18" y1="6" x2="6" y2="18" />
                <line x1="6" y1="6" x2="18" y2="18" />
            </> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Icon::from_name("GraduationCap"), Icon::GraduationCap);
        assert_eq!(Icon::from_name("TrendingUp"), Icon::TrendingUp);
    }

    #[test]
    fn unknown_names_fall_back_to_star() {
        assert_eq!(Icon::from_name("Rocket"), Icon::Star);
        assert_eq!(Icon::from_name(""), Icon::Star);
        assert_eq!(Icon::from_name("users"), Icon::Star);
    }
}
