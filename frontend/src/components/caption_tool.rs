use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::models::{CaptionRequest, CaptionResponse, CaptionTone};

pub const ERROR_CAPTION: &str = "Error generating caption. Please try again.";
const COPIED_RESET_MS: u32 = 2_000;

pub fn can_generate(context: &str, loading: bool) -> bool {
    !loading && !context.trim().is_empty()
}

pub fn button_label(loading: bool) -> &'static str {
    if loading {
        "Dreaming..."
    } else {
        "Generate Magic Caption"
    }
}

fn tone_button_class(selected: bool) -> &'static str {
    if selected {
        "py-2 px-4 rounded text-sm transition-all border bg-teal-500/10 border-teal-500 text-teal-400"
    } else {
        "py-2 px-4 rounded text-sm transition-all border bg-transparent border-gray-700 text-gray-400 hover:border-gray-600"
    }
}

async fn request_caption(body: &CaptionRequest) -> Result<String, String> {
    let response = Request::post(&config::api_url("/api/caption"))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }

    let data: CaptionResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(data.caption)
}

#[function_component(CaptionTool)]
pub fn caption_tool() -> Html {
    let context = use_state(String::new);
    let tone = use_state(CaptionTone::default);
    let caption = use_state(String::new);
    let loading = use_state(|| false);
    let copied = use_state(|| false);
    let clipboard = use_clipboard();

    let oninput = {
        let context = context.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            context.set(input.value());
        })
    };

    let onclick_generate = {
        let context = context.clone();
        let tone = tone.clone();
        let caption = caption.clone();
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| {
            if !can_generate(&context, *loading) {
                return;
            }
            let body = CaptionRequest {
                image_context: (*context).clone(),
                tone: tone.as_str().to_string(),
            };
            let caption = caption.clone();
            let loading = loading.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match request_caption(&body).await {
                    Ok(text) => caption.set(text),
                    Err(e) => {
                        log::error!("Caption request failed: {}", e);
                        caption.set(ERROR_CAPTION.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let onclick_copy = {
        let caption = caption.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            clipboard.write_text((*caption).clone());
            copied.set(true);
            let copied = copied.clone();
            Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
        })
    };

    html! {
        <section id="ai-tools" class="py-24 bg-gunmetal border-t border-gray-800">
            <style>
                {r#"
                    @keyframes captionFadeIn {
                        from { opacity: 0; transform: translateY(4px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .caption-output {
                        animation: captionFadeIn 0.5s ease-out forwards;
                    }
                    .bg-gunmetal {
                        background: #1c2226;
                    }
                "#}
            </style>
            <div class="max-w-4xl mx-auto px-4">
                <div class="bg-black border border-gray-800 rounded-2xl p-8 md:p-12 relative overflow-hidden shadow-2xl">
                    <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-teal-400 via-purple-500 to-orange-500"></div>

                    <div class="flex items-center gap-3 mb-8">
                        <div class="bg-gradient-to-br from-purple-600 to-blue-600 p-3 rounded-lg text-white">{"✦"}</div>
                        <div>
                            <h2 class="text-2xl font-bold text-white">{"AI Creative Assistant"}</h2>
                            <p class="text-gray-400 text-sm">{"Powered by Google Gemini"}</p>
                        </div>
                    </div>

                    <div class="grid md:grid-cols-2 gap-8">
                        <div class="space-y-4">
                            <div>
                                <label class="block text-xs uppercase tracking-wider text-gray-500 mb-2">{"Image Context"}</label>
                                <textarea
                                    class="w-full bg-gray-900 border border-gray-700 rounded-lg p-4 text-white outline-none resize-none h-32 text-sm"
                                    placeholder="e.g. Bride smiling at sunset, wearing red lehenga..."
                                    value={(*context).clone()}
                                    oninput={oninput}
                                />
                            </div>

                            <div>
                                <label class="block text-xs uppercase tracking-wider text-gray-500 mb-2">{"Caption Tone"}</label>
                                <div class="grid grid-cols-2 gap-2">
                                    { for CaptionTone::ALL.iter().map(|t| {
                                        let selected = *tone == *t;
                                        let onclick = {
                                            let tone = tone.clone();
                                            let t = *t;
                                            Callback::from(move |_: MouseEvent| tone.set(t))
                                        };
                                        html! {
                                            <button key={t.as_str()} onclick={onclick} class={tone_button_class(selected)}>
                                                { t.label() }
                                            </button>
                                        }
                                    }) }
                                </div>
                            </div>

                            <button
                                onclick={onclick_generate}
                                disabled={!can_generate(&context, *loading)}
                                class="w-full py-3 bg-gradient-to-r from-teal-500 to-blue-600 text-white font-bold rounded-lg flex items-center justify-center gap-2 hover:opacity-90 transition-opacity disabled:opacity-50"
                            >
                                if *loading {
                                    <span class="animate-spin">{"◌"}</span>
                                }
                                { button_label(*loading) }
                            </button>
                        </div>

                        <div class="bg-gray-900 rounded-lg p-6 border border-gray-800 flex flex-col">
                            <label class="block text-xs uppercase tracking-wider text-gray-500 mb-4">{"Generated Output"}</label>
                            <div class="flex-1 flex items-center justify-center">
                                if caption.is_empty() {
                                    <div class="text-center text-gray-600">
                                        <p class="text-sm">{"AI result will appear here"}</p>
                                    </div>
                                } else {
                                    <p class="caption-output text-white font-medium text-lg italic leading-relaxed">
                                        { format!("\"{}\"", *caption) }
                                    </p>
                                }
                            </div>
                            if !caption.is_empty() {
                                <button
                                    onclick={onclick_copy}
                                    class="mt-4 text-xs flex items-center gap-1 text-gray-400 hover:text-white transition-colors self-end"
                                >
                                    { if *copied { "Copied!" } else { "Copy to clipboard" } }
                                </button>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
