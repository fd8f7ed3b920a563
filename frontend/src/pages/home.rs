use yew::prelude::*;

use crate::sections::courses::CoursesSectionView;
use crate::sections::hero::HeroSection;
use crate::sections::learning_process::LearningProcessView;
use crate::sections::reviews::ReviewsSection;
use crate::sections::video_samples::VideoSamplesView;
use crate::sections::vision::VisionMissionSection;
use crate::sections::why_us::WhyUsSection;

/// The landing page. Every section loads its own content independently.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="landing">
            <HeroSection />
            <WhyUsSection />
            <VisionMissionSection />
            <CoursesSectionView />
            <LearningProcessView />
            <VideoSamplesView />
            <ReviewsSection />
        </main>
    }
}
