use gloo_console::log;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlMediaElement, KeyboardEvent};
use yew::prelude::*;

use crate::content::Video;
use crate::dom;
use crate::hooks::{use_global_listener, use_node_refs, ListenOn};

/// Starts playback and reports a rejected play promise (autoplay policy,
/// missing source) to the console instead of failing silently.
fn play(media: &HtmlMediaElement) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log!("Video play failed:", err);
            }
        }),
        Err(err) => log!("Video play failed:", err),
    }
}

fn stop(media: &HtmlMediaElement) {
    if let Err(err) = media.pause() {
        log!("Video pause failed:", err);
    }
    media.set_current_time(0.0);
}

#[derive(Properties, PartialEq)]
pub struct VideoGalleryProps {
    pub videos: &'static [Video],
}

#[function_component(VideoGallery)]
pub fn video_gallery(props: &VideoGalleryProps) -> Html {
    let open = use_state(|| None::<usize>);
    let saved_scroll = use_mut_ref(|| 0.0f64);
    let modal_video = use_node_ref();
    let backdrop = use_node_ref();
    let previews = use_node_refs(props.videos.len());

    // Play once the modal's video element is in the DOM with its new source.
    {
        let modal_video = modal_video.clone();
        use_effect_with_deps(move |open: &Option<usize>| {
            if open.is_some() {
                if let Some(media) = modal_video.cast::<HtmlMediaElement>() {
                    media.set_current_time(0.0);
                    play(&media);
                }
            }
            || ()
        }, *open);
    }

    let close = {
        let open = open.clone();
        let modal_video = modal_video.clone();
        let saved_scroll = saved_scroll.clone();
        Callback::from(move |_: ()| {
            if open.is_none() {
                return;
            }
            if let Some(media) = modal_video.cast::<HtmlMediaElement>() {
                stop(&media);
            }
            dom::unlock_body_scroll();
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, *saved_scroll.borrow());
            }
            open.set(None);
        })
    };

    {
        let close = close.clone();
        use_global_listener(ListenOn::Document, "keydown", Callback::from(move |e: Event| {
            if e.dyn_ref::<KeyboardEvent>().map(|k| k.key()).as_deref() == Some("Escape") {
                close.emit(());
            }
        }));
    }

    let on_backdrop = {
        let close = close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::clicked_backdrop(&e, &backdrop) {
                close.emit(());
            }
        })
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let current = (*open).and_then(|i| props.videos.get(i));

    html! {
        <>
            <div class="video-grid">
                { for props.videos.iter().zip(previews.iter()).enumerate().map(|(index, (video, preview))| {
                    let on_enter = {
                        let preview = preview.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(media) = preview.cast::<HtmlMediaElement>() {
                                media.set_current_time(0.0);
                                play(&media);
                            }
                        })
                    };
                    let on_leave = {
                        let preview = preview.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(media) = preview.cast::<HtmlMediaElement>() {
                                stop(&media);
                            }
                        })
                    };
                    let on_click = {
                        let open = open.clone();
                        let saved_scroll = saved_scroll.clone();
                        let preview = preview.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(media) = preview.cast::<HtmlMediaElement>() {
                                stop(&media);
                            }
                            let top = dom::scroll_y();
                            *saved_scroll.borrow_mut() = top;
                            dom::lock_body_scroll(Some(top));
                            open.set(Some(index));
                        })
                    };
                    html! {
                        <div key={index} class="video-card"
                            onmouseenter={on_enter} onmouseleave={on_leave} onclick={on_click}>
                            <video ref={preview.clone()} src={video.src} poster={video.thumbnail} muted=true loop=true playsinline=true preload="metadata"></video>
                            <div class="video-card-title"><i class="fas fa-play"></i>{ video.title }</div>
                        </div>
                    }
                }) }
            </div>
            <div ref={backdrop} class={classes!("video-modal", current.is_some().then_some("active"))} onclick={on_backdrop}>
                <div class="video-modal-content">
                    <button class="video-modal-close" onclick={on_close_button}><i class="fas fa-times"></i></button>
                    <video ref={modal_video} src={current.map(|v| v.src).unwrap_or_default()} controls=true playsinline=true></video>
                    if let Some(video) = current {
                        <h3>{ video.title }</h3>
                    }
                </div>
            </div>
        </>
    }
}
