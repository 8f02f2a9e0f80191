use log::{error, info};
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::preload::{self, ImagePair, PreloadEvent, PreloadStatus};
use crate::slider::{ContainerBounds, PointerSample, SliderAction, SliderState};

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub before_image: AttrValue,
    pub after_image: AttrValue,
}

fn container_bounds(node: &NodeRef) -> Option<ContainerBounds> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(ContainerBounds {
        left: rect.left(),
        width: rect.width(),
    })
}

fn first_touch(e: &TouchEvent) -> Option<PointerSample> {
    e.touches()
        .get(0)
        .map(|touch| PointerSample::new(touch.client_x() as f64))
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &SliderProps) -> Html {
    let state = use_reducer(|| {
        SliderState::new(ImagePair::new(props.before_image.clone(), props.after_image.clone()))
    });
    let container = use_node_ref();

    // Preload both images, again whenever the pair changes. Dropping the
    // requests in the destructor keeps late loads away from an unmounted slider.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(before, after): &(AttrValue, AttrValue)| {
                let pair = ImagePair::new(before.clone(), after.clone());
                dispatcher.dispatch(SliderAction::Track(pair.clone()));

                let on_event = {
                    let dispatcher = dispatcher.clone();
                    let pair = pair.clone();
                    Callback::from(move |event: PreloadEvent| {
                        let pair = pair.clone();
                        dispatcher.dispatch(match event {
                            PreloadEvent::Loaded(slot) => SliderAction::Loaded { pair, slot },
                            PreloadEvent::Failed(error) => SliderAction::LoadFailed { pair, error },
                        });
                    })
                };

                let requests = match preload::preload(&pair, config::PRELOAD_TIMEOUT_MS, on_event) {
                    Ok(requests) => Some(requests),
                    Err(e) => {
                        error!("Could not start preloading {}: {}", pair.before, e);
                        dispatcher.dispatch(SliderAction::LoadFailed { pair, error: e });
                        None
                    }
                };
                move || drop(requests)
            },
            (props.before_image.clone(), props.after_image.clone()),
        );
    }

    {
        let ready = state.images_ready();
        let before = props.before_image.clone();
        use_effect_with_deps(
            move |ready| {
                if *ready {
                    info!("Comparison slider {} is interactive", before);
                }
                || ()
            },
            ready,
        );
    }

    let onmousedown = {
        let state = state.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(bounds) = container_bounds(&container) {
                state.dispatch(SliderAction::BeginDrag {
                    pointer: PointerSample::new(e.client_x() as f64),
                    bounds,
                });
            }
        })
    };

    let onmousemove = {
        let state = state.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            if !state.is_dragging() {
                return;
            }
            if let Some(bounds) = container_bounds(&container) {
                state.dispatch(SliderAction::ContinueDrag {
                    pointer: PointerSample::new(e.client_x() as f64),
                    bounds,
                });
            }
        })
    };

    let ontouchstart = {
        let state = state.clone();
        let container = container.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            if let (Some(pointer), Some(bounds)) = (first_touch(&e), container_bounds(&container)) {
                state.dispatch(SliderAction::BeginDrag { pointer, bounds });
            }
        })
    };

    let ontouchmove = {
        let state = state.clone();
        let container = container.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            if let (Some(pointer), Some(bounds)) = (first_touch(&e), container_bounds(&container)) {
                state.dispatch(SliderAction::ContinueDrag { pointer, bounds });
            }
        })
    };

    let end_drag = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SliderAction::EndDrag))
    };
    let onmouseup = end_drag.reform(|_: MouseEvent| ());
    let onmouseleave = end_drag.reform(|_: MouseEvent| ());
    let ontouchend = end_drag.reform(|_: TouchEvent| ());
    let ontouchcancel = end_drag.reform(|_: TouchEvent| ());

    let body = match state.preload_status() {
        PreloadStatus::Loading => html! {
            <div class="comparison-placeholder">
                <span class="comparison-spinner"></span>
                <span>{"Loading comparison..."}</span>
            </div>
        },
        PreloadStatus::Failed(_) => html! {
            <div class="comparison-placeholder comparison-failed">
                <span>{"We couldn't load these photos right now."}</span>
            </div>
        },
        PreloadStatus::Ready => html! {
            <>
                <div
                    class="comparison-layer"
                    style={format!("background-image: url({});", props.before_image)}
                />
                <div
                    class="comparison-layer"
                    style={format!("background-image: url({}); {}", props.after_image, state.after_clip())}
                />
                <div class="comparison-divider" style={state.divider_offset()}>
                    <div class="comparison-handle">
                        <span></span>
                        <span></span>
                    </div>
                </div>
            </>
        },
    };

    html! {
        <div
            ref={container}
            class={classes!("comparison-slider", state.is_dragging().then(|| "dragging"))}
            onmousedown={onmousedown}
            onmousemove={onmousemove}
            onmouseup={onmouseup}
            onmouseleave={onmouseleave}
            ontouchstart={ontouchstart}
            ontouchmove={ontouchmove}
            ontouchend={ontouchend}
            ontouchcancel={ontouchcancel}
        >
            { body }
        </div>
    }
}

#[function_component(BeforeAfterComparison)]
pub fn before_after_comparison() -> Html {
    html! {
        <div class="comparison-section">
            <style>
                {r#"
                .comparison-section {
                    width: 100%;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2rem;
                    box-sizing: border-box;
                }
                .comparison-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .comparison-slider {
                    position: relative;
                    height: 24rem;
                    overflow: hidden;
                    cursor: col-resize;
                    touch-action: none;
                    user-select: none;
                    border-radius: 8px;
                    background: #f3f4f6;
                }
                .comparison-layer {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .comparison-divider {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    background: #fff;
                    cursor: col-resize;
                }
                .comparison-handle {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 2rem;
                    height: 2rem;
                    transform: translate(-50%, -50%);
                    background: #fff;
                    border-radius: 50%;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .comparison-handle span {
                    width: 4px;
                    height: 1rem;
                    margin: 0 2px;
                    background: #9ca3af;
                }
                .comparison-placeholder {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                    cursor: default;
                }
                .comparison-failed {
                    background: #fef2f2;
                    color: #b91c1c;
                }
                .comparison-spinner {
                    width: 2rem;
                    height: 2rem;
                    border: 3px solid #d1d5db;
                    border-top-color: #2563eb;
                    border-radius: 50%;
                    animation: comparison-spin 1s linear infinite;
                }
                @keyframes comparison-spin { to { transform: rotate(360deg); } }
                @media (min-width: 768px) {
                    .comparison-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
            <div class="comparison-grid">
                <BeforeAfterSlider
                    before_image={config::asset_url("before.jpg")}
                    after_image={config::asset_url("after.jpg")}
                />
                <BeforeAfterSlider
                    before_image={config::asset_url("before1.jpg")}
                    after_image={config::asset_url("after1.jpg")}
                />
            </div>
        </div>
    }
}
