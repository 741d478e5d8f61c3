use yew::prelude::*;

use crate::components::visibility::use_reveal_trigger;
use crate::reveal::{late_fade_style, schedule_for, word_style, HeadlineSpec, REVEAL_KEYFRAMES};
use crate::theme::ThemeColor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    Left,
}

impl Align {
    fn text_class(&self) -> &'static str {
        match self {
            Align::Center => "text-center",
            Align::Left => "text-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub subtitle: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub theme: ThemeColor,
    pub bg_image: AttrValue,
    #[prop_or_default]
    pub bg_video: Option<AttrValue>,
    /// Degrees, e.g. -90, 90 or 180.
    #[prop_or_default]
    pub bg_video_rotate: Option<i32>,
    pub overlay: AttrValue,
    #[prop_or(false)]
    pub show_reel_button: bool,
    #[prop_or_default]
    pub align: Align,
    #[prop_or(true)]
    pub animated_headline: bool,
    /// Explicit segmentation for titles without spaces.
    #[prop_or_default]
    pub headline_words: Vec<String>,
    #[prop_or(false)]
    pub hide_content: bool,
}

/// Inline style for a (possibly rotated) background video. Sideways videos
/// swap their box so they still cover the viewport.
pub fn video_style(rotate: Option<i32>) -> String {
    match rotate {
        Some(deg) if deg == 90 || deg == -90 => format!(
            "object-fit:cover;transform:rotate({}deg);width:100vh;height:100vw;",
            deg
        ),
        Some(deg) if deg != 0 => format!(
            "object-fit:cover;transform:rotate({}deg);width:100%;height:100%;",
            deg
        ),
        _ => "object-fit:cover;width:100%;height:100%;".to_string(),
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let section_ref = use_node_ref();
    let triggered = use_reveal_trigger(section_ref.clone(), props.animated_headline);

    let headline = HeadlineSpec::new(&props.title, &props.headline_words);
    let subtitle_delay = headline.last_word_finish_seconds();
    let description_delay = headline.description_delay_seconds();
    let align_class = props.align.text_class();

    let background = match &props.bg_video {
        Some(video) => html! {
            <div class="absolute inset-0 flex items-center justify-center">
                <video
                    src={video.clone()}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    style={video_style(props.bg_video_rotate)}
                />
            </div>
        },
        None => html! {
            <div
                class="w-full h-full bg-cover bg-center"
                style={format!("background-image: url({});", props.bg_image)}
            />
        },
    };

    let headline_html = if props.animated_headline {
        let lines = headline.indexed_lines();
        if headline.is_explicit() {
            let last = headline.word_count().saturating_sub(1);
            html! {
                <span style="display:block">
                    { for lines.iter().flatten().map(|(idx, word)| {
                        let margin = if *idx == last { "0" } else { "0.35em" };
                        let schedule = schedule_for(*idx, headline.word_count());
                        html! {
                            <span key={*idx} style={word_style(schedule, triggered, margin)}>{ *word }</span>
                        }
                    }) }
                </span>
            }
        } else {
            html! {
                <>
                    { for lines.iter().enumerate().map(|(line_idx, line)| html! {
                        <span key={line_idx} style="display:block">
                            { for line.iter().map(|(idx, word)| {
                                let schedule = schedule_for(*idx, headline.word_count());
                                html! {
                                    <span key={*idx} style={word_style(schedule, triggered, "0.25em")}>{ *word }</span>
                                }
                            }) }
                        </span>
                    }) }
                </>
            }
        }
    } else {
        html! { { props.title.clone() } }
    };

    let headline_size = if props.animated_headline {
        "clamp(3.5em, 8vw, 5em)"
    } else {
        "clamp(6em, 10vw, 10em)"
    };

    let subtitle_style = if props.animated_headline {
        late_fade_style(subtitle_delay, triggered)
    } else {
        String::new()
    };

    let content = if props.hide_content {
        html! {}
    } else {
        html! {
            <div class="relative z-10 max-w-7xl mx-auto px-4 text-center sm:text-left w-full pt-20 sm:pt-0">
                <div class="overflow-hidden">
                    <p
                        class={classes!("hero-subtitle", props.theme.accent_text_class(), align_class)}
                        style={subtitle_style}
                    >
                        { props.subtitle.clone() }
                    </p>
                </div>
                <h1
                    class={classes!("hero-headline", align_class)}
                    style={format!("font-size: {};", headline_size)}
                >
                    { headline_html }
                </h1>
                if !props.animated_headline {
                    <p class={classes!("hero-description", align_class)}>
                        { props.description.clone() }
                    </p>
                }
                <div class="flex flex-col sm:flex-row gap-6 justify-center sm:justify-start">
                    if props.show_reel_button {
                        <button class={classes!("reel-button", props.theme.reel_hover_classes())}>
                            <span class="reel-icon">{"▶"}</span>
                            {"Watch Reel"}
                        </button>
                    }
                </div>
            </div>
        }
    };

    html! {
        <section ref={section_ref} id={props.id.clone()} class="hero-section">
            if props.animated_headline {
                <style>{ REVEAL_KEYFRAMES }</style>
            }
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        height: 100dvh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                    }
                    .hero-subtitle {
                        font-family: Poppins, Roboto, Arial, sans-serif;
                        font-weight: 700;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                        transition: color 0.5s;
                    }
                    .hero-headline {
                        font-family: Montserrat, 'Bebas Neue', Arial, sans-serif;
                        font-weight: 900;
                        line-height: 1.05;
                        letter-spacing: 0.03em;
                        text-transform: uppercase;
                        color: #fff;
                        margin-bottom: 1.5rem;
                        text-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
                    }
                    .hero-description {
                        font-family: Poppins, Roboto, Arial, sans-serif;
                        font-weight: 300;
                        font-size: 1.1em;
                        line-height: 1.7;
                        color: #fff;
                        max-width: 40em;
                        margin-bottom: 3rem;
                    }
                    .hero-description.text-center {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .hero-late-description {
                        font-family: Poppins, Roboto, Arial, sans-serif;
                        font-weight: 300;
                        font-size: 1.1em;
                        line-height: 1.7;
                        color: #fff;
                        text-align: center;
                        max-width: 60em;
                        margin: 0 auto;
                    }
                    .reel-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(4px);
                        color: #fff;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        background: transparent;
                        transition: background-color 0.3s;
                    }
                    .reel-button:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                "#}
            </style>
            <div class="absolute inset-0 z-0">
                { background }
                <div class={classes!("absolute", "inset-0", "transition-colors", "duration-1000", props.overlay.to_string())} />
                <div class={classes!(
                    "absolute", "inset-0", "opacity-20", "mix-blend-overlay", "pointer-events-none",
                    "transition-colors", "duration-1000", props.theme.tint_class()
                )}></div>
            </div>
            { content }
            if props.animated_headline {
                <div class="absolute bottom-6 left-0 w-full px-6 z-20">
                    <p class="hero-late-description" style={late_fade_style(description_delay, triggered)}>
                        { props.description.clone() }
                    </p>
                </div>
            }
        </section>
    }
}
