use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::statistics::BannerStatistics;
use crate::loader::{settle, use_loader, Load};
use crate::models::hero::HeroContent;
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_hero() -> Result<HeroContent, FetchError> {
    SupabaseClient::from_config()?
        .single(Query::active("hero_content"))
        .await
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let hero = match use_loader(|| async { settle(fetch_hero().await, HeroContent::fallback, "hero") }) {
        Load::Loading => {
            return html! {
                <section class="hero loading">
                    <div class="hero-spinner"></div>
                </section>
            }
        }
        Load::Ready(hero) => hero,
    };

    html! {
        <section class="hero">
            <div class="hero-glow top"></div>
            <div class="hero-glow bottom"></div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>
                        <span class="hero-title">{ &hero.title }</span>
                        <span class="hero-subtitle">{ &hero.subtitle }</span>
                    </h1>
                    <div class="hero-rule"></div>
                    <p class="hero-description">{ &hero.description }</p>

                    <div class="hero-actions">
                        <a href={hero.secondary_button_link.clone()} class="hero-button">
                            { &hero.secondary_button_text }
                            { Icon::ChevronRight.render("icon-sm") }
                        </a>
                    </div>

                    <div class="hero-trust">
                        <BannerStatistics />
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-card"></div>
                    <div class="hero-image">
                        <img src={hero.hero_image_url.clone()} alt={hero.hero_image_alt.clone()} />
                    </div>
                    <div class="hero-bubble gold"></div>
                    <div class="hero-bubble blue"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding-top: 120px;
                    overflow: hidden;
                    background: linear-gradient(135deg, #1E3A8A, #3730A3 50%, #0F172A);
                }
                .hero.loading { display: flex; align-items: center; justify-content: center; }
                .hero-spinner {
                    width: 3rem;
                    height: 3rem;
                    border: 4px solid rgba(255, 255, 255, 0.2);
                    border-top-color: #FBBF24;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .hero-glow { position: absolute; border-radius: 50%; filter: blur(64px); }
                .hero-glow.top { top: 5rem; right: 2.5rem; width: 16rem; height: 16rem; background: rgba(251, 191, 36, 0.2); }
                .hero-glow.bottom { bottom: 5rem; left: 2.5rem; width: 24rem; height: 24rem; background: rgba(59, 130, 246, 0.1); }
                .hero-inner {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3.5rem 1rem;
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .hero-inner { grid-template-columns: 1fr 1fr; gap: 4rem; }
                }
                .hero-copy { display: flex; flex-direction: column; gap: 1.25rem; }
                .hero h1 { margin: 0; font-size: clamp(2rem, 5vw, 3.75rem); line-height: 1.15; }
                .hero-title {
                    display: block;
                    background: linear-gradient(90deg, #FCD34D, #FBBF24, #F59E0B);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle { display: block; color: #fff; margin-top: 0.5rem; }
                .hero-rule { width: 6rem; height: 4px; border-radius: 999px; background: linear-gradient(90deg, #FBBF24, #F59E0B); }
                .hero-description { color: #DBEAFE; font-size: 1.125rem; line-height: 1.7; max-width: 42rem; }
                .hero-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid #93C5FD;
                    border-radius: 6px;
                    color: #DBEAFE;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .hero-button:hover { background: #EFF6FF; color: #1E3A8A; }
                .hero-trust { padding-top: 2rem; }
                .hero-trust .stat-banner-value { color: #fff; }
                .hero-trust .stat-banner-title { color: #BFDBFE; }
                .hero-visual { position: relative; }
                .hero-card {
                    position: absolute;
                    inset: 1rem;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-image {
                    position: relative;
                    z-index: 1;
                    border-radius: 24px;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                }
                .hero-image img { width: 100%; height: 100%; object-fit: contain; }
                .hero-bubble { position: absolute; width: 6rem; height: 6rem; border-radius: 50%; }
                .hero-bubble.gold { top: -1.5rem; right: -1.5rem; opacity: 0.2; background: linear-gradient(135deg, #FBBF24, #F59E0B); animation: pulse 2s ease-in-out infinite; }
                .hero-bubble.blue { bottom: -2rem; left: -2rem; opacity: 0.3; background: linear-gradient(135deg, #60A5FA, #6366F1); }
                "#}
            </style>
        </section>
    }
}
