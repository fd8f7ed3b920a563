use yew::prelude::*;

use crate::loader::{settle, use_loader, Load};
use crate::models::vision::VisionMissionContent;
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_vision() -> Result<VisionMissionContent, FetchError> {
    SupabaseClient::from_config()?
        .single(Query::active("vision_mission_content"))
        .await
}

// Renders nothing until the content arrives.
#[function_component(VisionMissionSection)]
pub fn vision_mission_section() -> Html {
    let vision = match use_loader(|| async {
        settle(fetch_vision().await, VisionMissionContent::fallback, "vision & mission")
    }) {
        Load::Loading => return html! { <section id="Vision_Mission"></section> },
        Load::Ready(vision) => vision,
    };

    html! {
        <section id="Vision_Mission" class="vision">
            <div class="vision-background">
                <img src={vision.background_image_url.clone()} alt="Vision Background" />
                <div class="vision-overlay"></div>
            </div>

            <div class="vision-inner">
                <h2>{ &vision.title }</h2>
                <div class="vision-divider">
                    if let Some(divider) = &vision.divider_image_url {
                        <img src={divider.clone()} alt="" />
                    } else {
                        <div class="vision-rule"></div>
                    }
                </div>
                <div class="vision-card">
                    <p><strong>{ &vision.vision_text }</strong></p>
                    if let Some(mission) = &vision.mission_text {
                        <p class="vision-mission">{ mission }</p>
                    }
                </div>
            </div>

            <style>
                {r#"
                .vision { position: relative; padding: 5rem 0; overflow: hidden; }
                .vision-background { position: absolute; inset: 0; }
                .vision-background img { width: 100%; height: 100%; object-fit: cover; }
                .vision-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(15, 23, 42, 0.85), rgba(17, 24, 39, 0.8), rgba(15, 23, 42, 0.85));
                }
                .vision-inner {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }
                .vision-inner h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    background: linear-gradient(90deg, #FCD34D, #FACC15);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .vision-divider { display: flex; justify-content: center; padding: 1.5rem 0; }
                .vision-divider img { height: 2rem; }
                .vision-rule {
                    width: 8rem;
                    height: 4px;
                    border-radius: 999px;
                    background: linear-gradient(90deg, transparent, #FBBF24, transparent);
                }
                .vision-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }
                .vision-card p { color: #fff; font-size: clamp(1.25rem, 2.5vw, 1.5rem); line-height: 1.6; }
                .vision-card .vision-mission { font-size: 1.125rem; color: #E5E7EB; margin-top: 1.5rem; }
                "#}
            </style>
        </section>
    }
}
