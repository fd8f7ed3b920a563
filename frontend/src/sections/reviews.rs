use log::error;
use yew::prelude::*;

use crate::components::carousel::ReviewCarousel;
use crate::components::icons::Icon;
use crate::components::statistics::ReviewStatistics;
use crate::loader::{use_loader, Load};
use crate::models::reviews::{FooterNavigationItem, ReviewImage, ReviewsContent, StudentsReviewsSection};
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_reviews() -> Result<ReviewsContent, FetchError> {
    let client = SupabaseClient::from_config()?;
    let (section, images, navigation) = futures::try_join!(
        client.single::<StudentsReviewsSection>(Query::active("students_reviews_section")),
        client.list::<ReviewImage>(Query::active("review_images").order_by("order_index")),
        client.list::<FooterNavigationItem>(
            Query::active("footer_navigation").order_by("order_index"),
        ),
    )?;
    Ok(ReviewsContent::new(section, images, navigation))
}

fn footer_link(item: &FooterNavigationItem, class: &'static str) -> Html {
    let target = if item.is_external { "_blank" } else { "_self" };
    let rel = item.is_external.then(|| "noopener noreferrer");
    html! {
        <a key={item.id.clone()} href={item.href.clone()} class={class} target={target} rel={rel}>
            { &item.label }
        </a>
    }
}

// Shares the `<section id="reviews">` root with the loaded view so the
// navbar keeps tracking the same node.
fn reviews_unavailable() -> Html {
    let reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                error!("Reloading the page failed: {:?}", e);
            }
        }
    });

    html! {
        <section id="reviews" class="reviews">
            <div class="reviews-error">
                <div class="reviews-error-icon">{ Icon::MessageCircle.render("icon-lg") }</div>
                <h3>{"Unable to Load Reviews"}</h3>
                <p>{"We're having trouble loading student reviews at the moment. Please try again."}</p>
                <button onclick={reload}>{"Try Again"}</button>
            </div>
            <style>
                {r#"
                .reviews { padding: 5rem 1rem; }
                .reviews-error {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem;
                    text-align: center;
                    border-radius: 24px;
                    border: 1px solid #FECACA;
                    background: linear-gradient(135deg, #FEF2F2, #FFF7ED);
                }
                .reviews-error-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 16px;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #EF4444, #EA580C);
                }
                .reviews-error h3 { color: #991B1B; font-size: 1.875rem; margin: 0 0 1rem; }
                .reviews-error p { color: #DC2626; font-size: 1.125rem; margin-bottom: 2rem; }
                .reviews-error button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 12px;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(90deg, #DC2626, #EA580C);
                }
                "#}
            </style>
        </section>
    }
}

/// Students' reviews with the page footer. Unlike the other sections a
/// failed fetch shows a reload prompt instead of stand-in content.
#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    let content = use_loader(|| async {
        fetch_reviews()
            .await
            .map_err(|e| error!("Error fetching reviews data: {}", e))
            .ok()
    });

    let content = match content {
        Load::Loading => {
            return html! {
                <section id="reviews" class="reviews loading">
                    <div class="reviews-skeleton-title"></div>
                    <div class="reviews-skeleton-strip">
                        { for (0..4).map(|_| html! { <div class="reviews-skeleton-slide"></div> }) }
                    </div>
                </section>
            }
        }
        Load::Ready(content) => content,
    };
    let Some(content) = &*content else {
        return reviews_unavailable();
    };
    let section = &content.section;

    html! {
        <section id="reviews" class="reviews">
            <div class="reviews-inner">
                <header class="reviews-header">
                    <div class="reviews-pill">
                        { Icon::Star.render_colored("icon-xs star-filled", Some("#FBBF24")) }
                        <span>{"Testimonials"}</span>
                    </div>
                    <h2>{ &section.section_title }</h2>
                    <img class="reviews-divider" src={section.divider_image_url.clone()} alt="" />
                    if let Some(subtitle) = &section.section_subtitle {
                        <p>{ subtitle }</p>
                    }
                </header>

                if !content.images.is_empty() {
                    <ReviewCarousel images={content.images.clone()} />
                }

                <ReviewStatistics />

                <div class="reviews-cta">
                    <a href={section.cta_button_link.clone()} class="reviews-button">
                        <span>{ &section.cta_button_text }</span>
                        { Icon::ChevronRight.render("icon-md") }
                    </a>
                    <p>{"Join thousands of satisfied students and parents worldwide in their Arabic learning journey"}</p>
                </div>

                <footer class="reviews-footer">
                    <div class="footer-frame">
                        <img src={section.footer_frame_image_url.clone()} alt="Decorative Islamic frame" />
                    </div>
                    <div class="footer-logo">
                        <img src={section.logo_url.clone()} alt={section.logo_alt.clone()} />
                    </div>
                    <nav class="footer-nav desktop">
                        { for content.navigation.iter().map(|item| footer_link(item, "footer-link")) }
                    </nav>
                    <nav class="footer-nav mobile">
                        { for content.navigation.iter().map(|item| footer_link(item, "footer-link-mobile")) }
                    </nav>
                </footer>
            </div>

            <style>
                {r#"
                .reviews { padding: 5rem 0; background: linear-gradient(135deg, #F8FAFC, #fff, #EFF6FF); }
                .reviews.loading { display: flex; flex-direction: column; align-items: center; gap: 2rem; }
                .reviews-skeleton-title { width: 20rem; height: 2.5rem; border-radius: 8px; background: #E5E7EB; }
                .reviews-skeleton-strip { display: flex; gap: 1.5rem; height: 24rem; overflow: hidden; max-width: 100%; }
                .reviews-skeleton-slide { flex-shrink: 0; width: 360px; border-radius: 16px; background: #E5E7EB; animation: pulse 1.5s ease-in-out infinite; }
                .reviews-inner { max-width: 1280px; margin: 0 auto; padding: 0 1rem; }
                .reviews-header { text-align: center; margin-bottom: 3rem; }
                .reviews-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: #FEF3C7;
                    color: #92400E;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .reviews-header h2 { font-size: clamp(2rem, 4vw, 3rem); color: #1E3A8A; margin: 1rem 0 0; }
                .reviews-divider { display: block; height: 2rem; margin: 1rem auto; }
                .reviews-header p { color: #4B5563; font-size: 1.125rem; max-width: 42rem; margin: 0 auto; }
                .reviews-cta { text-align: center; margin: 4rem 0 5rem; }
                .reviews-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 3rem;
                    border-radius: 16px;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                    background: linear-gradient(90deg, #059669, #16A34A, #0F766E);
                    box-shadow: 0 25px 50px rgba(5, 150, 105, 0.3);
                    transition: transform 0.5s ease;
                }
                .reviews-button:hover { transform: translateY(-0.75rem); }
                .reviews-cta p { color: #4B5563; font-size: 1.125rem; margin-top: 2rem; }
                .footer-frame { border-radius: 24px; overflow: hidden; aspect-ratio: 16 / 5; margin-bottom: 4rem; }
                .footer-frame img { width: 100%; height: 100%; object-fit: cover; }
                .footer-logo { display: flex; justify-content: center; margin-bottom: 3rem; }
                .footer-logo img { width: 14rem; height: 4rem; object-fit: cover; }
                .footer-nav.desktop { display: none; justify-content: center; flex-wrap: wrap; gap: 0.5rem; }
                .footer-nav.mobile { display: grid; gap: 0.75rem; max-width: 20rem; margin: 0 auto; }
                @media (min-width: 768px) {
                    .footer-nav.desktop { display: flex; }
                    .footer-nav.mobile { display: none; }
                }
                .footer-link, .footer-link-mobile {
                    padding: 1rem 1.5rem;
                    border-radius: 16px;
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .footer-link-mobile { text-align: center; border: 1px solid #E5E7EB; }
                .footer-link:hover, .footer-link-mobile:hover { color: #1D4ED8; background: #EFF6FF; }
                "#}
            </style>
        </section>
    }
}
