use yew::prelude::*;

use crate::components::icons::Icon;
use crate::loader::{in_display_order, settle, use_loader, Load};
use crate::models::statistics::{self, Category, Palette, StatisticsAchievement};
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_statistics(category: Category) -> Result<Vec<StatisticsAchievement>, FetchError> {
    let client = SupabaseClient::from_config()?;
    client
        .list(
            Query::active("statistics_achievements")
                .eq("category", category.as_str())
                .order_by("order_index"),
        )
        .await
}

#[hook]
fn use_statistics(category: Category) -> Load<Vec<StatisticsAchievement>> {
    use_loader(move || async move {
        let section = format!("{} statistics", category.as_str());
        settle(
            fetch_statistics(category).await.map(in_display_order),
            || statistics::fallback(category),
            &section,
        )
    })
}

#[derive(Clone, Copy, PartialEq)]
pub enum CardStyle {
    Banner,
    Compact,
}

#[derive(Properties, PartialEq)]
pub struct StatisticCardProps {
    pub stat: StatisticsAchievement,
    pub style: CardStyle,
}

#[function_component(StatisticCard)]
pub fn statistic_card(props: &StatisticCardProps) -> Html {
    let hovered = use_state(|| false);
    let palette = Palette::resolve(&props.stat);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let icon = Icon::from_name(&props.stat.icon_name);
    let badge_style = format!(
        "background: {}; color: {};",
        palette.fill(*hovered),
        palette.icon
    );

    match props.style {
        CardStyle::Banner => html! {
            <div class="stat-banner" {onmouseenter} {onmouseleave}>
                <div class="stat-banner-icon" style={badge_style}>
                    { icon.render_colored("icon-sm", Some(&palette.icon)) }
                </div>
                <div>
                    <div class="stat-banner-value">{ &props.stat.value }</div>
                    <div class="stat-banner-title">{ &props.stat.title }</div>
                </div>
            </div>
        },
        CardStyle::Compact => html! {
            <div class="stat-compact" {onmouseenter} {onmouseleave}>
                <div class="stat-compact-icon" style={badge_style}>
                    { icon.render_colored("icon-md", Some(&palette.icon)) }
                </div>
                <div class="stat-compact-value">{ &props.stat.value }</div>
                <div class="stat-compact-description">{ &props.stat.description }</div>
            </div>
        },
    }
}

/// Trust indicators under the hero call to action.
#[function_component(BannerStatistics)]
pub fn banner_statistics() -> Html {
    match use_statistics(Category::Banner) {
        Load::Loading => html! {
            <div class="stat-row">
                <div class="stat-placeholder"></div>
                <div class="stat-placeholder"></div>
            </div>
        },
        Load::Ready(stats) => html! {
            <div class="stat-row">
                { for stats.iter().map(|stat| html! {
                    <StatisticCard key={stat.id.clone()} stat={stat.clone()} style={CardStyle::Banner} />
                }) }
                <style>
                    {r#"
                    .stat-row { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: center; }
                    .stat-banner { display: flex; align-items: center; gap: 0.75rem; cursor: default; }
                    .stat-banner-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s ease;
                    }
                    .stat-banner-value { font-weight: 700; color: #111827; }
                    .stat-banner-title { font-size: 0.875rem; color: #6B7280; }
                    .stat-placeholder {
                        width: 8rem;
                        height: 2.5rem;
                        border-radius: 999px;
                        background: #E5E7EB;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    "#}
                </style>
            </div>
        },
    }
}

/// Figures shown inline with the course tabs.
#[function_component(MainStatistics)]
pub fn main_statistics() -> Html {
    match use_statistics(Category::Main) {
        Load::Loading => html! { <div class="stat-grid loading"></div> },
        Load::Ready(stats) => html! {
            <div class="stat-grid">
                { for stats.iter().map(|stat| html! {
                    <StatisticCard key={stat.id.clone()} stat={stat.clone()} style={CardStyle::Compact} />
                }) }
                <style>
                    {r#"
                    .stat-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 1rem;
                    }
                    .stat-grid.loading { min-height: 8rem; }
                    @media (min-width: 1024px) {
                        .stat-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
                    }
                    .stat-compact {
                        text-align: center;
                        padding: 1rem;
                        border-radius: 16px;
                        background: #fff;
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .stat-compact:hover { transform: translateY(-4px); }
                    .stat-compact-icon {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 0.75rem;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s ease;
                    }
                    .stat-compact-value { font-size: 1.5rem; font-weight: 700; color: #111827; }
                    .stat-compact-description { font-size: 0.875rem; color: #6B7280; }
                    "#}
                </style>
            </div>
        },
    }
}

#[function_component(ReviewStatistics)]
pub fn review_statistics() -> Html {
    let stats = match use_statistics(Category::Reviews) {
        Load::Loading => return html! { <div class="review-stats loading"></div> },
        Load::Ready(stats) => stats,
    };

    html! {
        <div class="review-stats">
            { for stats.iter().map(|stat| {
                let palette = Palette::resolve(stat);
                let icon = Icon::from_name(&stat.icon_name);
                html! {
                    <div key={stat.id.clone()} class="review-stat">
                        <div class="review-stat-icon" style={format!("background: {};", palette.gradient())}>
                            { icon.render_colored("icon-md", Some(&palette.icon)) }
                        </div>
                        <div class="review-stat-value">{ &stat.value }</div>
                        if icon == Icon::Star {
                            <div class="review-stat-stars">
                                { for (0..5).map(|_| Icon::Star.render_colored("icon-xs star-filled", Some("#FBBF24"))) }
                            </div>
                        }
                        <div class="review-stat-title">{ &stat.title }</div>
                        <div class="review-stat-description">{ &stat.description }</div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .review-stats {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .review-stats.loading { min-height: 10rem; }
                @media (min-width: 768px) {
                    .review-stats { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                }
                .review-stat {
                    text-align: center;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    border-radius: 16px;
                    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                }
                .review-stat-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    margin: 0 auto 1rem;
                    border-radius: 16px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .review-stat-value { font-size: 2rem; font-weight: 800; color: #111827; }
                .review-stat-stars { display: flex; justify-content: center; gap: 0.125rem; margin: 0.25rem 0; }
                .star-filled { fill: #FBBF24; }
                .review-stat-title { font-weight: 600; color: #374151; }
                .review-stat-description { font-size: 0.875rem; color: #6B7280; }
                "#}
            </style>
        </div>
    }
}
