use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::theme::ThemeColor;

pub const GALLERY_SLOTS: usize = 4;

/// Cycles the non-empty sources until there are exactly `slots` of them.
/// With nothing to show every slot is an empty string.
pub fn normalize_gallery(images: &[String], slots: usize) -> Vec<String> {
    let sources: Vec<&String> = images.iter().filter(|s| !s.is_empty()).collect();
    if sources.is_empty() {
        return vec![String::new(); slots];
    }
    (0..slots).map(|i| sources[i % sources.len()].clone()).collect()
}

pub fn is_video(src: &str) -> bool {
    src.ends_with(".mp4")
}

/// What a broken image gets swapped for: the first source that isn't a video.
pub fn fallback_image(sources: &[String]) -> Option<String> {
    sources
        .iter()
        .find(|s| !s.is_empty() && !is_video(s))
        .cloned()
}

#[derive(Properties, PartialEq)]
pub struct DetailSectionProps {
    pub theme: ThemeColor,
    pub title: AttrValue,
    pub description: AttrValue,
    /// May contain `.mp4` sources.
    pub images: Vec<String>,
}

#[derive(Properties, PartialEq)]
struct GalleryTileProps {
    src: String,
    alt: String,
    height_class: &'static str,
    fallback: Option<String>,
}

#[function_component(GalleryTile)]
fn gallery_tile(props: &GalleryTileProps) -> Html {
    let media = if is_video(&props.src) {
        html! {
            <video src={props.src.clone()} autoplay=true muted=true loop=true playsinline=true class="w-full h-full object-cover" />
        }
    } else {
        let onerror = {
            let fallback = props.fallback.clone();
            Callback::from(move |e: Event| {
                let img: HtmlImageElement = e.target_unchecked_into();
                if let Some(fallback) = &fallback {
                    // guard so a broken fallback can't loop forever
                    if !img.src().ends_with(fallback.as_str()) {
                        img.set_src(fallback);
                    }
                }
            })
        };
        html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                class="gallery-image w-full h-full object-cover"
                onerror={onerror}
            />
        }
    };

    html! {
        <div class={classes!("gallery-tile", props.height_class)}>
            { media }
        </div>
    }
}

#[function_component(DetailSection)]
pub fn detail_section(props: &DetailSectionProps) -> Html {
    let slots = normalize_gallery(&props.images, GALLERY_SLOTS);
    let fallback = fallback_image(&slots);
    let accent = props.theme.accent_text_class();

    let tile = |i: usize, height_class: &'static str| {
        html! {
            <GalleryTile
                src={slots[i].clone()}
                alt={format!("Gallery {}", i + 1)}
                height_class={height_class}
                fallback={fallback.clone()}
            />
        }
    };

    html! {
        <section class="detail-section">
            <style>
                {r#"
                    .detail-section {
                        min-height: 100vh;
                        width: 100%;
                        background: #1c2226;
                        padding: 6rem 1rem;
                        position: relative;
                        display: flex;
                        align-items: center;
                    }
                    .detail-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .detail-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .detail-title {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        line-height: 1.15;
                    }
                    .detail-description {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        max-width: 36rem;
                        margin: 2rem 0;
                    }
                    .detail-cta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2.5rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        border-width: 1px;
                        transition: all 0.3s;
                    }
                    .gallery-tile {
                        width: 100%;
                        background: #1f2937;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        position: relative;
                    }
                    .gallery-tile.tall { height: 16rem; }
                    .gallery-tile.short { height: 12rem; }
                    .gallery-image {
                        opacity: 0.8;
                        transition: transform 0.7s, opacity 0.7s;
                    }
                    .gallery-tile:hover .gallery-image {
                        transform: scale(1.1);
                        opacity: 1;
                    }
                "#}
            </style>
            <div class="detail-grid">
                <div>
                    <h2 class="detail-title">
                        { for props.title.split(' ').enumerate().map(|(i, word)| html! {
                            <span class={if i == 0 { accent } else { "text-white" }}>
                                { format!("{} ", word) }
                            </span>
                        }) }
                    </h2>
                    <p class="detail-description">{ props.description.clone() }</p>
                    <button class={classes!("detail-cta", props.theme.button_classes())}>
                        {"Explore Portfolio"}
                        <span class="cta-arrow">{"→"}</span>
                    </button>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="space-y-4 mt-8">
                        { tile(0, "tall") }
                        { tile(1, "short") }
                    </div>
                    <div class="space-y-4">
                        { tile(2, "short") }
                        { tile(3, "tall") }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_lists_are_cycled_to_four() {
        let slots = normalize_gallery(&strings(&["a.jpg", "b.mp4"]), GALLERY_SLOTS);
        assert_eq!(slots, strings(&["a.jpg", "b.mp4", "a.jpg", "b.mp4"]));
    }

    #[test]
    fn long_lists_are_cut_to_four() {
        let slots = normalize_gallery(&strings(&["1", "2", "3", "4", "5"]), GALLERY_SLOTS);
        assert_eq!(slots, strings(&["1", "2", "3", "4"]));
    }

    #[test]
    fn empty_entries_are_skipped() {
        let slots = normalize_gallery(&strings(&["", "only.jpg", ""]), GALLERY_SLOTS);
        assert_eq!(slots, strings(&["only.jpg"; 4]));
    }

    #[test]
    fn nothing_to_show_gives_empty_slots() {
        assert_eq!(normalize_gallery(&[], GALLERY_SLOTS), vec![String::new(); 4]);
    }

    #[test]
    fn fallback_skips_videos() {
        let slots = strings(&["reel.mp4", "", "b.jpg", "c.png"]);
        assert_eq!(fallback_image(&slots), Some("b.jpg".to_string()));
        assert_eq!(fallback_image(&strings(&["reel.mp4", "teaser.mp4"])), None);
    }
}
