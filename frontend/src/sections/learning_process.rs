use yew::prelude::*;

use crate::components::icons::Icon;
use crate::loader::{settle, use_loader, Load};
use crate::models::learning_process::{
    dot_lit, LearningProcessContent, LearningProcessSection, ProcessStep,
};
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_learning_process() -> Result<LearningProcessContent, FetchError> {
    let client = SupabaseClient::from_config()?;
    let (section, steps) = futures::try_join!(
        client.single::<LearningProcessSection>(Query::active("learning_process_section")),
        client.list::<ProcessStep>(Query::active("process_steps").order_by("order_index")),
    )?;
    Ok(LearningProcessContent::new(section, steps))
}

#[function_component(LearningProcessView)]
pub fn learning_process_view() -> Html {
    let content = match use_loader(|| async {
        settle(
            fetch_learning_process().await,
            LearningProcessContent::fallback,
            "learning process",
        )
    }) {
        Load::Loading => {
            return html! {
                <section id="Learning_Process" class="process loading">
                    <div class="process-skeleton"></div>
                </section>
            }
        }
        Load::Ready(content) => content,
    };
    let section = &content.section;
    let steps = &content.steps;

    html! {
        <section id="Learning_Process" class="process">
            <div class="process-inner">
                <header class="process-header">
                    <h2>{ &section.title }</h2>
                    if let Some(divider) = &section.divider_image_url {
                        <img class="process-divider" src={divider.clone()} alt="" />
                    }
                    <p>{ &section.subtitle }</p>
                </header>

                <div class="process-steps">
                    { for steps.iter().enumerate().map(|(position, step)| html! {
                        <>
                            <article class="process-card">
                                <div class="process-number">{ step.step_number }</div>
                                <div class="process-image">
                                    <img src={step.image_url.clone()} alt={step.image_alt.clone()} />
                                </div>
                                <h3>{ &step.title }</h3>
                                <p>{ &step.description }</p>
                                <div class="process-dots">
                                    { for (0..steps.len()).map(|dot| html! {
                                        <span class={classes!("process-dot", dot_lit(dot, position).then(|| "lit"))}></span>
                                    }) }
                                </div>
                            </article>
                            if position + 1 < steps.len() {
                                <div class="process-arrow">{ Icon::ArrowRight.render("icon-md") }</div>
                            }
                        </>
                    }) }
                </div>

                <div class="process-cta">
                    <a href={section.cta_button_link.clone()} class="process-button">
                        { &section.cta_button_text }
                        { Icon::ArrowRight.render("icon-sm") }
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .process { position: relative; padding: 5rem 0; background: #fff; overflow: hidden; }
                .process.loading { display: flex; justify-content: center; }
                .process-skeleton {
                    width: 66%;
                    height: 12rem;
                    border-radius: 16px;
                    background: #E5E7EB;
                    animation: pulse 1.5s ease-in-out infinite;
                }
                .process-inner { max-width: 1280px; margin: 0 auto; padding: 0 1rem; }
                .process-header { text-align: center; margin-bottom: 4rem; }
                .process-header h2 { font-size: clamp(2rem, 4vw, 3rem); color: #1E3A8A; margin: 0; }
                .process-divider { height: 2rem; margin: 1rem auto; display: block; }
                .process-header p { max-width: 48rem; margin: 0 auto; color: #4B5563; font-size: 1.125rem; }
                .process-steps {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                @media (min-width: 1024px) {
                    .process-steps { flex-direction: row; align-items: stretch; }
                }
                .process-card {
                    position: relative;
                    flex: 1;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    border-radius: 24px;
                    background: linear-gradient(135deg, #F8FAFC, #EFF6FF);
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                    transition: transform 0.3s ease;
                }
                .process-card:hover { transform: translateY(-6px); }
                .process-number {
                    position: absolute;
                    top: -1.25rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(90deg, #F59E0B, #CA8A04);
                }
                .process-image img { width: 8rem; height: 8rem; object-fit: contain; margin: 1rem auto; display: block; }
                .process-card h3 { color: #111827; font-size: 1.25rem; }
                .process-card p { color: #4B5563; line-height: 1.6; }
                .process-dots { display: flex; justify-content: center; gap: 0.375rem; margin-top: 1rem; }
                .process-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #D1D5DB; }
                .process-dot.lit { background: #2563EB; }
                .process-arrow { display: flex; align-items: center; color: #93C5FD; transform: rotate(90deg); }
                @media (min-width: 1024px) {
                    .process-arrow { transform: none; }
                }
                .process-cta { text-align: center; margin-top: 3rem; }
                .process-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                    box-shadow: 0 10px 25px rgba(37, 99, 235, 0.3);
                }
                "#}
            </style>
        </section>
    }
}
