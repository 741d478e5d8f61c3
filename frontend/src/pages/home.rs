use gloo_net::http::Request;
use yew::prelude::*;

use crate::components::caption_tool::CaptionTool;
use crate::components::detail_section::DetailSection;
use crate::components::hero::{Align, Hero};
use crate::config;
use crate::models::MediaLibrary;
use crate::theme::ThemeColor;

/// Up to `count` entries starting at `start`, wrapping around.
pub fn pick(sources: &[String], start: usize, count: usize) -> Vec<String> {
    if sources.is_empty() {
        return Vec::new();
    }
    (0..count.min(sources.len()))
        .map(|i| sources[(start + i) % sources.len()].clone())
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    let media = use_state(MediaLibrary::default);

    {
        let media = media.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match Request::get(&config::api_url("/api/media")).send().await {
                        Ok(response) if response.ok() => match response.json::<MediaLibrary>().await {
                            Ok(library) => media.set(library),
                            Err(e) => log::error!("Failed to parse media library: {}", e),
                        },
                        Ok(response) => log::error!("Media request failed with status {}", response.status()),
                        Err(e) => log::error!("Failed to fetch media library: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    let photos = &media.photos;
    let mut video_gallery = pick(&media.videos, 0, 2);
    video_gallery.extend(pick(photos, 4, 2));

    html! {
        <div class="min-h-screen bg-black">
            <Hero
                id="photography"
                subtitle="Next Image Lipu Photography"
                title={"CAPTURING\nTIMELESS MOMENTS"}
                description="Weddings, portraits and celebrations, told through light and emotion."
                theme={ThemeColor::Teal}
                bg_image={media.hero_image("photography")}
                overlay="bg-black/50"
                show_reel_button=true
            />
            <DetailSection
                theme={ThemeColor::Teal}
                title="Photography Portfolio"
                description="Every frame is composed to hold the feeling of the day, from candid laughter to quiet glances."
                images={pick(photos, 0, 4)}
            />
            <Hero
                id="videography"
                subtitle="Cinematic Films"
                title={"STORIES\nIN MOTION"}
                description="Wedding films and highlight reels cut with a cinematic eye."
                theme={ThemeColor::Orange}
                bg_image={media.hero_image("videography")}
                bg_video={media.videos.first().cloned().map(AttrValue::from)}
                bg_video_rotate={Some(90)}
                overlay="bg-black/40"
                align={Align::Left}
            />
            <DetailSection
                theme={ThemeColor::Orange}
                title="Videography Showcase"
                description="From pre-wedding teasers to full-length films, every moment is captured in motion."
                images={video_gallery}
            />
            <Hero
                id="editing"
                subtitle="Post Production"
                title="NEXTIMAGE"
                description="Colour grading, retouching and album design that bring every image to life."
                theme={ThemeColor::Purple}
                bg_image={media.hero_image("editing")}
                overlay="bg-black/60"
                headline_words={vec!["NEXT".to_string(), "IMAGE".to_string()]}
            />
            <DetailSection
                theme={ThemeColor::Purple}
                title="Editing Studio"
                description="Careful retouching and grading give each album a consistent, timeless look."
                images={pick(photos, 8, 4)}
            />
            <CaptionTool />
            <footer class="py-12 bg-black border-t border-gray-900 flex flex-col items-center gap-4">
                if let Some(logo) = media.logo("full") {
                    <img src={logo} alt="Next Image" class="h-12 opacity-80" />
                }
                <p class="text-gray-600 text-xs uppercase tracking-widest">{"Next Image Lipu Photography"}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pick_wraps_around() {
        let sources = strings(&["a", "b", "c"]);
        assert_eq!(pick(&sources, 2, 2), strings(&["c", "a"]));
    }

    #[test]
    fn pick_never_repeats_a_short_list() {
        let sources = strings(&["a", "b"]);
        assert_eq!(pick(&sources, 0, 4), strings(&["a", "b"]));
        assert!(pick(&[], 0, 4).is_empty());
    }
}
