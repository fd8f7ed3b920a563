use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::loader::{settle, use_loader, Load};
use crate::models::navbar::{anchor_id, NavbarContent, NavbarData, NavigationItem};
use crate::supabase::{FetchError, Query, SupabaseClient};
use crate::Route;

/// Which page section the viewer is currently reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection(Option<String>);

impl ActiveSection {
    /// Feeds one observer batch of `(section id, intersecting)` pairs.
    /// The last intersecting entry wins; a batch with none leaves the
    /// current section in place.
    pub fn observe<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        if let Some(id) = entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .map(|(id, _)| id)
            .last()
        {
            self.0 = Some(id);
        }
    }

    pub fn is_active(&self, href: &str) -> bool {
        match (&self.0, anchor_id(href)) {
            (Some(current), Some(id)) => current == id,
            _ => false,
        }
    }
}

async fn fetch_navbar() -> Result<NavbarContent, FetchError> {
    let client = SupabaseClient::from_config()?;
    let (navbar, items) = futures::try_join!(
        client.single::<NavbarData>(Query::active("navbar_settings")),
        client.list::<NavigationItem>(Query::active("navigation_items").order_by("order_index")),
    )?;
    Ok(NavbarContent::new(navbar, items))
}

/// Smoothly scrolls so that the section sits just under the fixed nav.
fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(target) = target {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top() - config::NAV_OFFSET_PX));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn observe_sections(
    sections: &[String],
    active: UseStateHandle<ActiveSection>,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array)>), JsValue> {
    let mut tracker = ActiveSection::default();
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        let batch = entries.iter().filter_map(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .ok()
                .map(|entry| (entry.target().id(), entry.is_intersecting()))
        });
        tracker.observe(batch);
        active.set(tracker.clone());
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::SECTION_TRACKING_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        for id in sections {
            if let Some(section) = document.get_element_by_id(id) {
                observer.observe(&section);
            }
        }
    }

    Ok((observer, callback))
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let content = use_loader(|| async {
        settle(fetch_navbar().await, NavbarContent::fallback, "navbar")
    });
    let menu_open = use_state(|| false);
    let active = use_state(ActiveSection::default);

    let sections = match &content {
        Load::Ready(content) => content.tracked_sections(),
        Load::Loading => Vec::new(),
    };

    {
        let active = active.clone();
        use_effect_with_deps(
            move |sections: &Vec<String>| {
                let tracking = if sections.is_empty() {
                    None
                } else {
                    match observe_sections(sections, active) {
                        Ok(tracking) => Some(tracking),
                        Err(e) => {
                            log::error!("Section tracking unavailable: {:?}", e);
                            None
                        }
                    }
                };
                move || {
                    if let Some((observer, _callback)) = tracking {
                        observer.disconnect();
                    }
                }
            },
            sections,
        );
    }

    let content = match content {
        Load::Ready(content) => content,
        Load::Loading => return html! {},
    };
    let navbar = &content.navbar;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |item: &NavigationItem, class: &'static str| -> Html {
        let is_current = active.is_active(&item.href);
        let classes = classes!(class, is_current.then(|| "active"));
        let icon = item
            .icon
            .as_deref()
            .map(|name| Icon::from_name(name).render("icon-sm"));

        match item.anchor() {
            Some(id) => {
                let id = id.to_string();
                let menu_open = menu_open.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(&id);
                    menu_open.set(false);
                });
                html! {
                    <a key={item.id.clone()} href={item.href.clone()} class={classes} {onclick}>
                        { icon }
                        <span>{ &item.label }</span>
                    </a>
                }
            }
            None => {
                let target = item.is_external.then(|| "_blank");
                let rel = item.is_external.then(|| "noopener noreferrer");
                html! {
                    <a key={item.id.clone()} href={item.href.clone()} class={classes} target={target} rel={rel}>
                        { icon }
                        <span>{ &item.label }</span>
                    </a>
                }
            }
        }
    };

    html! {
        <header class="site-header">
            <div class="contact-bar">
                <div class="contact-bar-inner">
                    <div class="contact-links">
                        <a href={navbar.mailto_href()} class="contact-link">
                            { Icon::Mail.render("icon-xs") }
                            <span>{ &navbar.email }</span>
                        </a>
                        <a href={navbar.tel_href()} class="contact-link">
                            { Icon::Phone.render("icon-xs") }
                            <span>{ &navbar.phone }</span>
                        </a>
                        <a href={navbar.whatsapp_href()} class="contact-link"
                            target="_blank" rel="noopener noreferrer">
                            { Icon::MessageCircle.render("icon-xs") }
                            <span>{"WhatsApp"}</span>
                        </a>
                    </div>
                    <a href="/login" class="student-login">
                        { Icon::User.render("icon-xs") }
                        <span>{"Student Login"}</span>
                    </a>
                </div>
            </div>

            <nav class="main-nav">
                <div class="main-nav-inner">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <img src={navbar.logo_url.clone()} alt={navbar.logo_alt.clone()} />
                    </Link<Route>>

                    <div class="nav-desktop">
                        { for content.items.iter().map(|item| nav_link(item, "nav-item")) }
                    </div>

                    <button class="nav-toggle" onclick={toggle_menu}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}>
                        if *menu_open {
                            { Icon::X.render("icon-md") }
                        } else {
                            { Icon::Menu.render("icon-md") }
                        }
                    </button>
                </div>

                if *menu_open {
                    <div class="nav-mobile">
                        { for content.items.iter().map(|item| nav_link(item, "nav-mobile-item")) }
                    </div>
                }
            </nav>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                }
                .contact-bar {
                    background: linear-gradient(90deg, #1E3A8A, #2563EB);
                    color: #fff;
                    font-size: 0.8125rem;
                }
                .contact-bar-inner, .main-nav-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .contact-bar-inner { height: 40px; }
                .contact-links { display: flex; gap: 1.25rem; }
                .contact-link, .student-login {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.375rem;
                    color: inherit;
                    text-decoration: none;
                    opacity: 0.9;
                }
                .contact-link:hover, .student-login:hover { opacity: 1; }
                @media (max-width: 640px) {
                    .contact-link span { display: none; }
                }
                .main-nav {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
                }
                .main-nav-inner { height: 80px; }
                .nav-logo img { height: 56px; width: auto; }
                .nav-desktop { display: none; gap: 0.5rem; }
                @media (min-width: 768px) {
                    .nav-desktop { display: flex; }
                    .nav-toggle { display: none; }
                }
                .nav-item, .nav-mobile-item {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.375rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-item:hover, .nav-mobile-item:hover { color: #2563EB; background: #EFF6FF; }
                .nav-item.active, .nav-mobile-item.active { color: #fff; background: #2563EB; }
                .nav-toggle {
                    border: none;
                    background: transparent;
                    color: #374151;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .nav-mobile {
                    display: flex;
                    flex-direction: column;
                    padding: 0.5rem 1rem 1rem;
                    background: #fff;
                    border-top: 1px solid #E5E7EB;
                }
                @media (min-width: 768px) {
                    .nav-mobile { display: none; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(entries: &[(&str, bool)]) -> Vec<(String, bool)> {
        entries
            .iter()
            .map(|(id, intersecting)| (id.to_string(), *intersecting))
            .collect()
    }

    #[test]
    fn nothing_active_before_first_batch() {
        let active = ActiveSection::default();
        assert!(!active.is_active("#why_us"));
    }

    #[test]
    fn intersecting_section_highlights_its_link() {
        let mut active = ActiveSection::default();
        active.observe(batch(&[("why_us", false), ("courses", false), ("reviews", true)]));
        assert!(active.is_active("#reviews"));
        assert!(!active.is_active("#why_us"));
        assert!(!active.is_active("#courses"));
        assert!(!active.is_active("/free-trial"));
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let mut active = ActiveSection::default();
        active.observe(batch(&[("why_us", true), ("courses", true)]));
        assert!(active.is_active("#courses"));
    }

    #[test]
    fn quiet_batch_keeps_current_section() {
        let mut active = ActiveSection::default();
        active.observe(batch(&[("courses", true)]));
        active.observe(batch(&[("courses", false)]));
        assert!(active.is_active("#courses"));
    }
}
