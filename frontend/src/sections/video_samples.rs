use std::rc::Rc;

use yew::prelude::*;

use crate::components::icons::Icon;
use crate::loader::{settle, use_loader, Load};
use crate::models::video_samples::{VideoSample, VideoSamplesContent, VideoSamplesSection};
use crate::supabase::{FetchError, Query, SupabaseClient};

async fn fetch_video_samples() -> Result<VideoSamplesContent, FetchError> {
    let client = SupabaseClient::from_config()?;
    let (section, videos) = futures::try_join!(
        client.single::<VideoSamplesSection>(Query::active("video_samples_section")),
        client.list::<VideoSample>(Query::active("video_samples").order_by("order_index")),
    )?;
    Ok(VideoSamplesContent::new(section, videos))
}

#[function_component(VideoSamplesView)]
pub fn video_samples_view() -> Html {
    let content = match use_loader(|| async {
        settle(
            fetch_video_samples().await,
            VideoSamplesContent::fallback,
            "video samples",
        )
    }) {
        Load::Loading => {
            return html! {
                <section class="videos loading">
                    <div class="videos-spinner"></div>
                </section>
            }
        }
        Load::Ready(content) => content,
    };
    let section = &content.section;

    html! {
        <section class="videos">
            <div class="videos-inner">
                <header class="videos-header">
                    <h2>{ &section.section_title }</h2>
                    if let Some(subtitle) = &section.section_subtitle {
                        <p>{ subtitle }</p>
                    }
                </header>

                <VideoPlayer content={content.clone()} />

                <div class="videos-cta">
                    <a href={section.cta_button_link.clone()} class="videos-button">
                        { &section.cta_button_text }
                        { Icon::ArrowRight.render("icon-sm") }
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .videos { padding: 5rem 0; background: linear-gradient(135deg, #0F172A, #1E3A8A); color: #fff; }
                .videos.loading { display: flex; justify-content: center; }
                .videos-spinner {
                    width: 3rem;
                    height: 3rem;
                    border: 4px solid rgba(255, 255, 255, 0.2);
                    border-top-color: #FBBF24;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .videos-inner { max-width: 1280px; margin: 0 auto; padding: 0 1rem; }
                .videos-header { text-align: center; margin-bottom: 3rem; }
                .videos-header h2 { font-size: clamp(2rem, 4vw, 3rem); margin: 0; color: #FCD34D; }
                .videos-header p { color: #BFDBFE; font-size: 1.125rem; }
                .videos-layout { display: grid; gap: 2rem; }
                @media (min-width: 1024px) {
                    .videos-layout { grid-template-columns: 2fr 1fr; }
                }
                .video-frame {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 16px;
                    overflow: hidden;
                    background: #000;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                }
                .video-frame iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
                .video-unavailable {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #9CA3AF;
                }
                .video-caption h3 { margin: 1rem 0 0.25rem; }
                .video-caption p { color: #BFDBFE; margin: 0; }
                .playlist {
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1rem;
                }
                .playlist-toggle {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .playlist-toggle .chevron { transition: transform 0.3s ease; }
                .playlist-toggle .chevron.open { transform: rotate(180deg); }
                .playlist-items { list-style: none; padding: 0; margin: 1rem 0 0; display: grid; gap: 0.75rem; }
                .playlist-item {
                    display: flex;
                    gap: 0.75rem;
                    width: 100%;
                    padding: 0.5rem;
                    border-radius: 12px;
                    border: 1px solid transparent;
                    background: transparent;
                    color: inherit;
                    text-align: left;
                    cursor: pointer;
                }
                .playlist-item:hover { background: rgba(255, 255, 255, 0.08); }
                .playlist-item.selected { border-color: #FBBF24; background: rgba(251, 191, 36, 0.1); }
                .playlist-thumb { position: relative; flex-shrink: 0; width: 7rem; aspect-ratio: 16 / 9; border-radius: 8px; overflow: hidden; }
                .playlist-thumb img { width: 100%; height: 100%; object-fit: cover; }
                .playlist-duration {
                    position: absolute;
                    right: 0.25rem;
                    bottom: 0.25rem;
                    padding: 0 0.25rem;
                    border-radius: 4px;
                    font-size: 0.75rem;
                    background: rgba(0, 0, 0, 0.75);
                }
                .playlist-title { font-size: 0.875rem; font-weight: 600; }
                .videos-cta { text-align: center; margin-top: 3rem; }
                .videos-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    color: #1E3A8A;
                    font-weight: 700;
                    text-decoration: none;
                    background: linear-gradient(90deg, #FCD34D, #F59E0B);
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct VideoPlayerProps {
    content: Rc<VideoSamplesContent>,
}

#[function_component(VideoPlayer)]
fn video_player(props: &VideoPlayerProps) -> Html {
    let content = &props.content;
    let selected = {
        let content = content.clone();
        use_state(move || content.initial_video())
    };
    let playlist_open = use_state(|| true);

    let toggle_playlist = {
        let playlist_open = playlist_open.clone();
        Callback::from(move |_: MouseEvent| playlist_open.set(!*playlist_open))
    };

    let current = selected.as_deref().and_then(|id| content.video(id));

    html! {
        <div class="videos-layout">
            <div>
                if let Some(video) = current {
                    <div class="video-frame">
                        if let Some(src) = video.embed_url() {
                            <iframe src={src} title={video.title.clone()}
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true>
                            </iframe>
                        } else {
                            <div class="video-unavailable">{"Video unavailable"}</div>
                        }
                    </div>
                    <div class="video-caption">
                        <h3>{ &video.title }</h3>
                        if let Some(description) = &video.description {
                            <p>{ description }</p>
                        }
                    </div>
                }
            </div>

            <aside class="playlist">
                <button class="playlist-toggle" onclick={toggle_playlist}
                    aria-expanded={playlist_open.to_string()}>
                    <span>{ &content.section.playlist_title }</span>
                    <span class={classes!("chevron", (*playlist_open).then(|| "open"))}>
                        { Icon::ChevronDown.render("icon-sm") }
                    </span>
                </button>
                if *playlist_open {
                    <ul class="playlist-items">
                        { for content.videos.iter().map(|video| {
                            let is_selected = selected.as_deref() == Some(video.id.as_str());
                            let onclick = {
                                let selected = selected.clone();
                                let id = video.id.clone();
                                Callback::from(move |_: MouseEvent| selected.set(Some(id.clone())))
                            };
                            html! {
                                <li key={video.id.clone()}>
                                    <button class={classes!("playlist-item", is_selected.then(|| "selected"))} {onclick}>
                                        <div class="playlist-thumb">
                                            <img src={video.thumbnail_url.clone()} alt={video.thumbnail_alt.clone()} loading="lazy" />
                                            <span class="playlist-duration">{ &video.duration }</span>
                                        </div>
                                        <div>
                                            <div class="playlist-title">{ &video.title }</div>
                                            if is_selected {
                                                <span class="playlist-now">{ Icon::Play.render("icon-xs") }{" Now playing"}</span>
                                            }
                                        </div>
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </aside>
        </div>
    }
}
