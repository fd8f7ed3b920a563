use yew::prelude::*;

use crate::components::icons::Icon;
use crate::loader::{settle, use_loader, Load};
use crate::models::why_us::WhyUsContent;
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_why_us() -> Result<WhyUsContent, FetchError> {
    SupabaseClient::from_config()?
        .single(Query::active("why_us_content"))
        .await
}

#[function_component(WhyUsSection)]
pub fn why_us_section() -> Html {
    let content = use_loader(|| async {
        settle(fetch_why_us().await, WhyUsContent::fallback, "why us")
    });

    let why_us = match content {
        Load::Loading => {
            return html! {
                <section id="why_us" class="why-us loading">
                    <div class="why-us-skeleton wide"></div>
                    <div class="why-us-skeleton"></div>
                </section>
            }
        }
        Load::Ready(why_us) => why_us,
    };

    html! {
        <section id="why_us" class="why-us">
            <div class="why-us-inner">
                <div class="why-us-visual">
                    <div class="why-us-frame">
                        <img src={why_us.image_url.clone()} alt={why_us.image_alt.clone()} />
                    </div>
                    <div class="why-us-badge bottom">
                        <div class="badge-icon blue">{ Icon::Users.render("icon-sm") }</div>
                        <div>
                            <div class="badge-value">{"1000+"}</div>
                            <div class="badge-label">{"Happy Students"}</div>
                        </div>
                    </div>
                    <div class="why-us-badge top">
                        <div class="badge-icon gold">{ Icon::Clock.render("icon-sm") }</div>
                        <div>
                            <div class="badge-value">{"24/7"}</div>
                            <div class="badge-label">{"Support"}</div>
                        </div>
                    </div>
                </div>

                <div class="why-us-copy">
                    <h2>{ &why_us.title }</h2>
                    <div class="why-us-rule"></div>
                    <p>{ &why_us.description }</p>

                    <ul class="why-us-highlights">
                        { for why_us.highlights.iter().enumerate().map(|(i, highlight)| html! {
                            <li key={i}>
                                <span class="highlight-check">{ Icon::CheckCircle.render("icon-xs") }</span>
                                <span>{ highlight }</span>
                            </li>
                        }) }
                    </ul>

                    <a href={why_us.button_link.clone()} class="why-us-button">
                        { &why_us.button_text }
                        { Icon::ArrowRight.render("icon-sm") }
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .why-us {
                    position: relative;
                    padding: 3.5rem 0;
                    background: linear-gradient(135deg, #F8FAFC, #EFF6FF);
                    overflow: hidden;
                }
                .why-us.loading { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
                .why-us-skeleton { height: 1rem; width: 66%; border-radius: 6px; background: #D1D5DB; animation: pulse 1.5s ease-in-out infinite; }
                .why-us-skeleton.wide { height: 2rem; width: 33%; }
                .why-us-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .why-us-inner { grid-template-columns: 1fr 1fr; gap: 4rem; }
                }
                .why-us-visual { position: relative; }
                .why-us-frame {
                    background: #fff;
                    border-radius: 24px;
                    padding: 20%;
                    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
                }
                .why-us-frame img { width: 100%; aspect-ratio: 1; object-fit: contain; }
                .why-us-badge {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #fff;
                    border-radius: 16px;
                    border: 1px solid #F3F4F6;
                    box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1);
                }
                .why-us-badge.bottom { bottom: -1.5rem; left: -1.5rem; }
                .why-us-badge.top { top: -1.5rem; right: -1.5rem; }
                .badge-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .badge-icon.blue { background: linear-gradient(90deg, #3B82F6, #4F46E5); }
                .badge-icon.gold { background: linear-gradient(90deg, #F59E0B, #CA8A04); }
                .badge-value { font-size: 1.25rem; font-weight: 700; color: #111827; }
                .badge-label { font-size: 0.875rem; color: #4B5563; }
                .why-us-copy h2 { font-size: clamp(1.875rem, 4vw, 3rem); color: #1E3A8A; margin: 0; }
                .why-us-rule { width: 5rem; height: 4px; margin: 0.5rem 0 1rem; border-radius: 999px; background: linear-gradient(90deg, #FBBF24, #EAB308); }
                .why-us-copy p { font-size: 1.125rem; color: #374151; line-height: 1.7; }
                .why-us-highlights {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 0.5rem;
                }
                @media (min-width: 640px) {
                    .why-us-highlights { grid-template-columns: 1fr 1fr; }
                }
                .why-us-highlights li { display: flex; align-items: center; gap: 0.75rem; color: #374151; }
                .highlight-check {
                    width: 1.5rem;
                    height: 1.5rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    color: #fff;
                    background: linear-gradient(90deg, #22C55E, #059669);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .why-us-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 8px;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                }
                "#}
            </style>
        </section>
    }
}
