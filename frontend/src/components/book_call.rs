use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const COOLDOWN_MS: u32 = 15_000;
const SCROLL_INTENT_DEPTH: f64 = 0.15;
const EXIT_INTENT_EDGE: i32 = 50;

/// Floating call-booking prompt. Appears once the visitor has scrolled
/// ~15% of the page or moves the pointer out of the viewport top, and
/// stays away for fifteen seconds after being dismissed.
#[function_component(BookCallWidget)]
pub fn book_call_widget() -> Html {
    let visible = use_state(|| false);
    // Event listeners outlive any single render, so they read the
    // current widget state through shared cells instead of the hooks.
    let shown = use_mut_ref(|| false);
    let cooldown = use_mut_ref(|| false);

    {
        let visible = visible.clone();
        let shown = shown.clone();
        let cooldown = cooldown.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let document = window.document().expect("document should exist");

                    let show = {
                        let visible = visible.clone();
                        let shown = shown.clone();
                        let cooldown = cooldown.clone();
                        Rc::new(move || {
                            if *shown.borrow() || *cooldown.borrow() {
                                return;
                            }
                            *shown.borrow_mut() = true;
                            visible.set(true);
                        })
                    };

                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let show = show.clone();
                        move || {
                            let Some(win) = web_sys::window() else { return };
                            let Some(doc) = win.document() else { return };
                            let Some(body) = doc.body() else { return };

                            let scroll_y = win.scroll_y().unwrap_or(0.0);
                            let inner_height = win
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let page_height = f64::from(body.scroll_height());
                            if page_height <= 0.0 {
                                return;
                            }

                            if (scroll_y + inner_height) / page_height > SCROLL_INTENT_DEPTH {
                                (*show)();
                            }
                        }
                    });

                    let mouseout_callback = Closure::<dyn Fn(MouseEvent)>::new({
                        let show = show.clone();
                        move |e: MouseEvent| {
                            if e.client_y() < EXIT_INTENT_EDGE {
                                (*show)();
                            }
                        }
                    });

                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    document
                        .add_event_listener_with_callback(
                            "mouseout",
                            mouseout_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                            if let Some(doc) = win.document() {
                                let _ = doc.remove_event_listener_with_callback(
                                    "mouseout",
                                    mouseout_callback.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let onclose = {
        let visible = visible.clone();
        let shown = shown.clone();
        let cooldown = cooldown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *shown.borrow_mut() = false;
            *cooldown.borrow_mut() = true;
            visible.set(false);

            let cooldown = cooldown.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COOLDOWN_MS).await;
                *cooldown.borrow_mut() = false;
            });
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div id="bookCallWidget" class="book-call-widget">
            <button class="book-call-close" onclick={onclose}>{"×"}</button>
            <p>{"Have a project in mind?"}</p>
            <a
                class="book-call-button"
                href="https://calendly.com/genaiworks/intro"
                target="_blank"
                rel="noopener"
            >
                {"Book a Call"}
            </a>
        </div>
    }
}
