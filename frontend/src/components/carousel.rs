use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::models::reviews::ReviewImage;

/// Slide geometry for one viewport tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideLayout {
    pub slide_width: u32,
    pub spacing: u32,
    pub visible_slides: f64,
}

impl SlideLayout {
    pub fn for_viewport(width: f64) -> Self {
        let (slide_width, spacing, visible_slides) = if width < 640.0 {
            (280, 16, 1.2)
        } else if width < 768.0 {
            (320, 20, 1.5)
        } else if width < 1024.0 {
            (340, 24, 2.2)
        } else if width < 1280.0 {
            (360, 28, 3.2)
        } else {
            (480, 32, 4.0)
        };
        Self {
            slide_width,
            spacing,
            visible_slides,
        }
    }

    /// Horizontal translation that brings slide `current` to the left edge.
    pub fn offset(&self, current: usize) -> i64 {
        -((current as i64) * i64::from(self.slide_width + self.spacing))
    }

    /// Slide indices to lay out: every image once, then enough of the
    /// first ones again that the strip never shows a gap when wrapping.
    pub fn strip(&self, len: usize) -> Vec<usize> {
        let tail = (self.visible_slides.ceil() as usize + 1).min(len);
        (0..len).chain(0..tail).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub current: usize,
    pub len: usize,
    pub autoplay: bool,
    pub locked: bool,
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Unlock,
    ToggleAutoplay,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            autoplay: true,
            locked: false,
        }
    }

    /// Applies `action`; returns whether the visible slide changed.
    /// Moves are refused while a transition holds the lock.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Next => self.move_to((self.current + 1) % self.len.max(1)),
            CarouselAction::Prev => {
                let len = self.len.max(1);
                self.move_to((self.current + len - 1) % len)
            }
            CarouselAction::GoTo(index) => {
                if index == self.current || index >= self.len {
                    return false;
                }
                self.move_to(index)
            }
            CarouselAction::Unlock => {
                self.locked = false;
                false
            }
            CarouselAction::ToggleAutoplay => {
                self.autoplay = !self.autoplay;
                false
            }
        }
    }

    fn move_to(&mut self, index: usize) -> bool {
        if self.locked || self.len == 0 {
            return false;
        }
        self.locked = true;
        self.current = index;
        true
    }

    pub fn autoplay_interval(&self) -> u32 {
        if self.autoplay && self.len > 1 {
            config::AUTOPLAY_INTERVAL_MS
        } else {
            0
        }
    }

    /// Autoplay restarts whenever this changes: on toggling and on every
    /// move, so a slide always stays up for the full interval.
    pub fn autoplay_schedule(&self) -> (u32, usize) {
        (self.autoplay_interval(), self.current)
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ReviewCarouselProps {
    pub images: Vec<ReviewImage>,
}

#[function_component(ReviewCarousel)]
pub fn review_carousel(props: &ReviewCarouselProps) -> Html {
    let len = props.images.len();
    let carousel = use_reducer(|| Carousel::new(len));
    let (viewport_width, _) = use_window_size();
    let layout = SlideLayout::for_viewport(viewport_width);

    // Re-armed on every slide change so a manual move gets a full interval.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |&(interval, _)| {
                let autoplay = (interval > 0).then(|| {
                    Interval::new(interval, move || dispatcher.dispatch(CarouselAction::Next))
                });
                move || drop(autoplay)
            },
            carousel.autoplay_schedule(),
        );
    }

    // Release the transition lock a moment after every move.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |locked| {
                let release = locked.then(|| {
                    Timeout::new(config::TRANSITION_LOCK_MS, move || {
                        dispatcher.dispatch(CarouselAction::Unlock)
                    })
                });
                move || drop(release)
            },
            carousel.locked,
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let toggle_autoplay = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::ToggleAutoplay))
    };

    let track_style = format!(
        "transform: translateX({}px); gap: {}px;",
        layout.offset(carousel.current),
        layout.spacing
    );

    html! {
        <div class="carousel">
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for layout.strip(len).into_iter().enumerate().map(|(position, index)| {
                        let image = &props.images[index];
                        let is_active = index == carousel.current;
                        html! {
                            <div key={format!("slide-{}-{}", position, image.id)}
                                class={classes!("carousel-slide", is_active.then(|| "active"))}
                                style={format!("width: {}px;", layout.slide_width)}>
                                <img src={image.image_url.clone()} alt={image.image_alt.clone()}
                                    loading={if position < 5 { "eager" } else { "lazy" }} />
                                <div class="slide-badge">
                                    <span class="slide-number">{ image.badge() }</span>
                                    if is_active {
                                        <span class="slide-active">
                                            { Icon::Award.render("icon-xs") }
                                            {"Active"}
                                        </span>
                                    }
                                </div>
                                if is_active {
                                    <div class="slide-shine"></div>
                                }
                            </div>
                        }
                    }) }
                </div>

                <button class="carousel-arrow left" onclick={prev} disabled={carousel.locked}
                    aria-label="Previous slide">
                    { Icon::ChevronLeft.render("icon-md") }
                </button>
                <button class="carousel-arrow right" onclick={next} disabled={carousel.locked}
                    aria-label="Next slide">
                    { Icon::ChevronRight.render("icon-md") }
                </button>
                <button class="carousel-autoplay" onclick={toggle_autoplay}
                    aria-label={if carousel.autoplay { "Pause slideshow" } else { "Play slideshow" }}>
                    if carousel.autoplay {
                        { Icon::Pause.render("icon-sm") }
                    } else {
                        { Icon::Play.render("icon-sm") }
                    }
                </button>
            </div>

            <div class="carousel-dots">
                { for (0..len).map(|index| {
                    let go_to = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                    };
                    html! {
                        <button key={index}
                            class={classes!("carousel-dot", (index == carousel.current).then(|| "current"))}
                            onclick={go_to}
                            disabled={carousel.locked}
                            aria-label={format!("Go to slide {}", index + 1)}>
                        </button>
                    }
                }) }
            </div>

            <div class="carousel-counter">
                <span class="counter-current">{ carousel.current + 1 }</span>
                <span class="counter-separator">{"/"}</span>
                <span>{ len }</span>
            </div>

            <style>
                {r#"
                .carousel { position: relative; width: 100%; }
                .carousel-viewport {
                    position: relative;
                    overflow: hidden;
                    border-radius: 24px;
                    height: 500px;
                }
                .carousel-track {
                    display: flex;
                    height: 100%;
                    transition: transform 0.5s ease-in-out;
                }
                .carousel-slide {
                    flex-shrink: 0;
                    position: relative;
                    height: 90%;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.25);
                    transform: scale(0.95);
                    transition: transform 0.5s ease;
                }
                .carousel-slide.active { transform: scale(1.05); z-index: 1; }
                .carousel-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    filter: brightness(0.75);
                    transition: filter 0.7s ease;
                }
                .carousel-slide.active img,
                .carousel-slide:hover img { filter: brightness(1); }
                .slide-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .slide-number {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 12px;
                    background: linear-gradient(90deg, #2563EB, #4338CA);
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .slide-active {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.25rem 0.75rem;
                    background: #22C55E;
                    color: #fff;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    animation: slideFadeIn 0.3s ease-out;
                }
                .slide-shine {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                    animation: shine 2s ease-in-out infinite;
                }
                .carousel-arrow, .carousel-autoplay {
                    position: absolute;
                    z-index: 2;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    color: #374151;
                    transition: transform 0.3s ease;
                }
                .carousel-arrow { top: 50%; width: 3rem; height: 3rem; transform: translateY(-50%); }
                .carousel-arrow.left { left: 1rem; }
                .carousel-arrow.right { right: 1rem; }
                .carousel-arrow:disabled { opacity: 0.5; cursor: not-allowed; }
                .carousel-autoplay { top: 1rem; right: 1rem; width: 2.5rem; height: 2.5rem; }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 2rem;
                    max-height: 5rem;
                    overflow-y: auto;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 999px;
                    background: #D1D5DB;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot.current {
                    width: 3rem;
                    background: linear-gradient(90deg, #3B82F6, #4F46E5);
                }
                .carousel-counter {
                    text-align: center;
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #4B5563;
                }
                .counter-current { color: #2563EB; font-size: 1.125rem; }
                .counter-separator { margin: 0 0.5rem; color: #9CA3AF; }
                @keyframes shine {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(100%); }
                }
                @keyframes slideFadeIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(carousel: &mut Carousel) -> bool {
        let moved = carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Unlock);
        moved
    }

    #[test]
    fn advancing_len_times_wraps_to_start() {
        let mut carousel = Carousel::new(5);
        for _ in 0..5 {
            assert!(advance(&mut carousel));
        }
        assert_eq!(carousel.current, 0);
    }

    #[test]
    fn advance_then_retreat_returns() {
        let mut carousel = Carousel::new(4);
        advance(&mut carousel);
        advance(&mut carousel);
        let start = carousel.current;
        advance(&mut carousel);
        carousel.apply(CarouselAction::Prev);
        assert_eq!(carousel.current, start);
    }

    #[test]
    fn retreat_from_first_goes_to_last() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.apply(CarouselAction::Prev));
        assert_eq!(carousel.current, 2);
    }

    #[test]
    fn locked_carousel_ignores_moves() {
        let mut carousel = Carousel::new(6);
        assert!(carousel.apply(CarouselAction::Next));
        assert!(carousel.locked);
        for _ in 0..3 {
            assert!(!carousel.apply(CarouselAction::Next));
        }
        assert!(!carousel.apply(CarouselAction::Prev));
        assert!(!carousel.apply(CarouselAction::GoTo(4)));
        assert_eq!(carousel.current, 1);
    }

    #[test]
    fn jump_only_to_a_different_slide() {
        let mut carousel = Carousel::new(4);
        assert!(!carousel.apply(CarouselAction::GoTo(0)));
        assert!(!carousel.locked);
        assert!(carousel.apply(CarouselAction::GoTo(3)));
        assert_eq!(carousel.current, 3);
        carousel.apply(CarouselAction::Unlock);
        assert!(!carousel.apply(CarouselAction::GoTo(9)));
    }

    #[test]
    fn toggling_autoplay_keeps_position() {
        let mut carousel = Carousel::new(3);
        advance(&mut carousel);
        carousel.apply(CarouselAction::ToggleAutoplay);
        assert!(!carousel.autoplay);
        assert_eq!(carousel.autoplay_interval(), 0);
        assert_eq!(carousel.current, 1);
        carousel.apply(CarouselAction::ToggleAutoplay);
        assert_eq!(carousel.autoplay_interval(), config::AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn manual_move_restarts_autoplay_schedule() {
        let mut carousel = Carousel::new(4);
        let before = carousel.autoplay_schedule();
        carousel.apply(CarouselAction::GoTo(2));
        let after = carousel.autoplay_schedule();
        assert_ne!(before, after);
        assert_eq!(after, (config::AUTOPLAY_INTERVAL_MS, 2));
    }

    #[test]
    fn refused_move_keeps_autoplay_schedule() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselAction::Next);
        let locked = carousel.autoplay_schedule();
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.autoplay_schedule(), locked);
    }

    #[test]
    fn single_image_never_autoplays() {
        assert_eq!(Carousel::new(1).autoplay_interval(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.apply(CarouselAction::Next));
        assert!(!carousel.apply(CarouselAction::Prev));
        assert_eq!(carousel.current, 0);
    }

    #[test]
    fn breakpoint_tiers() {
        assert_eq!(SlideLayout::for_viewport(375.0).slide_width, 280);
        assert_eq!(SlideLayout::for_viewport(640.0).slide_width, 320);
        assert_eq!(SlideLayout::for_viewport(800.0).spacing, 24);
        assert_eq!(SlideLayout::for_viewport(1100.0).visible_slides, 3.2);
        assert_eq!(SlideLayout::for_viewport(1920.0).slide_width, 480);
    }

    #[test]
    fn offset_moves_one_slide_and_gap_per_step() {
        let layout = SlideLayout::for_viewport(1920.0);
        assert_eq!(layout.offset(0), 0);
        assert_eq!(layout.offset(2), -1024);
    }

    #[test]
    fn strip_repeats_leading_slides() {
        let layout = SlideLayout::for_viewport(1100.0);
        assert_eq!(layout.strip(6), vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4]);
        assert_eq!(layout.strip(2), vec![0, 1, 0, 1]);
    }
}
