use std::rc::Rc;

use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::statistics::MainStatistics;
use crate::loader::{settle, use_loader, Load};
use crate::models::courses::{Course, CourseOutline, CoursesContent, CoursesSection};
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_courses() -> Result<CoursesContent, FetchError> {
    let client = SupabaseClient::from_config()?;
    let (section, courses, outlines) = futures::try_join!(
        client.single::<CoursesSection>(Query::active("courses_section")),
        client.list::<Course>(Query::active("courses").order_by("order_index")),
        client.list::<CourseOutline>(
            Query::active("course_outlines")
                .order_by("course_id")
                .order_by("order_index"),
        ),
    )?;
    Ok(CoursesContent::new(section, courses, outlines))
}

#[function_component(CoursesSectionView)]
pub fn courses_section_view() -> Html {
    let content = match use_loader(|| async {
        settle(fetch_courses().await, CoursesContent::fallback, "courses")
    }) {
        Load::Loading => {
            return html! {
                <section id="courses" class="courses loading">
                    <div class="courses-spinner"></div>
                </section>
            }
        }
        Load::Ready(content) => content,
    };
    let section = &content.section;

    html! {
        <section id="courses" class="courses">
            <div class="courses-inner">
                <header class="courses-header">
                    <h2>{ &section.section_title }</h2>
                    if let Some(divider) = &section.divider_image_url {
                        <img class="courses-divider" src={divider.clone()} alt="" />
                    }
                    if let Some(subtitle) = &section.section_subtitle {
                        <p>{ subtitle }</p>
                    }
                </header>

                <CourseTabs content={content.clone()} />

                <div class="courses-stats">
                    <MainStatistics />
                </div>
            </div>

            <style>
                {r#"
                .courses { padding: 5rem 0; background: #fff; }
                .courses.loading { display: flex; justify-content: center; }
                .courses-spinner {
                    width: 3rem;
                    height: 3rem;
                    border: 4px solid #DBEAFE;
                    border-top-color: #2563EB;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .courses-inner { max-width: 1280px; margin: 0 auto; padding: 0 1rem; }
                .courses-header { text-align: center; margin-bottom: 3rem; }
                .courses-header h2 { font-size: clamp(2rem, 4vw, 3rem); color: #1E3A8A; margin: 0; }
                .courses-divider { height: 2rem; margin: 1rem auto; display: block; }
                .courses-header p { color: #4B5563; font-size: 1.125rem; }
                .course-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .course-tab {
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid #E5E7EB;
                    background: #fff;
                    color: #374151;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .course-tab:hover { border-color: #93C5FD; color: #2563EB; }
                .course-tab.selected {
                    color: #fff;
                    border-color: transparent;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                    box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
                }
                .course-panel {
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                    padding: 2rem;
                    border-radius: 24px;
                    background: linear-gradient(135deg, #F8FAFC, #EFF6FF);
                    animation: fadeIn 0.4s ease-out;
                }
                @media (min-width: 1024px) {
                    .course-panel { grid-template-columns: 1fr 1fr; }
                }
                .course-panel img { width: 100%; border-radius: 16px; object-fit: cover; aspect-ratio: 4 / 3; }
                .course-panel h3 { font-size: 1.875rem; color: #111827; margin: 0 0 1rem; }
                .course-panel p { color: #374151; line-height: 1.7; }
                .course-outline { list-style: none; padding: 0; margin: 1.5rem 0; display: grid; gap: 0.5rem; }
                .course-outline li { display: flex; align-items: center; gap: 0.5rem; color: #374151; }
                .course-outline .outline-check { color: #10B981; }
                .course-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                }
                .courses-empty { text-align: center; color: #6B7280; }
                .courses-stats { margin-top: 3rem; }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(8px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CourseTabsProps {
    content: Rc<CoursesContent>,
}

#[function_component(CourseTabs)]
fn course_tabs(props: &CourseTabsProps) -> Html {
    let content = &props.content;
    let selected = {
        let content = content.clone();
        use_state(move || content.initial_tab())
    };

    if content.courses.is_empty() {
        return html! { <p class="courses-empty">{"No courses available yet."}</p> };
    }

    let current = selected.as_deref().and_then(|id| content.course(id));

    html! {
        <>
            <div class="course-tabs" role="tablist">
                { for content.courses.iter().map(|course| {
                    let is_selected = selected.as_deref() == Some(course.id.as_str());
                    let onclick = {
                        let selected = selected.clone();
                        let id = course.id.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(id.clone())))
                    };
                    html! {
                        <button key={course.id.clone()}
                            class={classes!("course-tab", is_selected.then(|| "selected"))}
                            role="tab"
                            aria-selected={is_selected.to_string()}
                            {onclick}>
                            { &course.title }
                        </button>
                    }
                }) }
            </div>

            if let Some(course) = current {
                <div class="course-panel">
                    <img src={course.image_url.clone()} alt={course.image_alt.clone()} />
                    <div>
                        <h3>{ &course.title }</h3>
                        <p>{ &course.description }</p>
                        <ul class="course-outline">
                            { for content.outlines_for(&course.id).iter().map(|outline| html! {
                                <li key={outline.id.clone()}>
                                    <span class="outline-check">{ Icon::Check.render("icon-sm") }</span>
                                    <span>{ &outline.title }</span>
                                </li>
                            }) }
                        </ul>
                        <a href={course.button_link.clone()} class="course-button">
                            { &course.button_text }
                            { Icon::ArrowRight.render("icon-sm") }
                        </a>
                    </div>
                </div>
            }
        </>
    }
}
