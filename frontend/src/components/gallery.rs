use web_sys::MouseEvent;
use yew::prelude::*;

use crate::gallery::{catalog, Filter, GalleryAction, GalleryImage, GalleryView};

#[derive(Properties, PartialEq)]
struct LightboxProps {
    image: GalleryImage,
    has_prev: bool,
    has_next: bool,
    on_close: Callback<()>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
}

#[function_component(LightboxModal)]
fn lightbox_modal(props: &LightboxProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_prev.emit(());
        })
    };
    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_next.emit(());
        })
    };

    html! {
        <div class="lightbox" onclick={close.clone()}>
            <button class="lightbox-close" onclick={close} aria-label="Close modal">{"✕"}</button>
            <div class="lightbox-stage" onclick={stop}>
                if props.has_prev {
                    <button class="lightbox-nav lightbox-prev" onclick={prev} aria-label="Previous image">{"‹"}</button>
                }
                <div class="lightbox-frame">
                    <img src={props.image.src.clone()} alt={props.image.alt} />
                    <div class="lightbox-caption">
                        <p class="lightbox-title">{props.image.alt}</p>
                        <p class="lightbox-description">{props.image.description}</p>
                    </div>
                </div>
                if props.has_next {
                    <button class="lightbox-nav lightbox-next" onclick={next} aria-label="Next image">{"›"}</button>
                }
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let view = use_reducer(|| GalleryView::new(catalog()));

    let filter_buttons = Filter::options().map(|filter| {
        let onclick = {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| view.dispatch(GalleryAction::SetFilter(filter)))
        };
        html! {
            <button
                key={filter.label()}
                class={classes!("gallery-filter", (view.filter() == filter).then(|| "active"))}
                onclick={onclick}
            >
                {filter.label()}
            </button>
        }
    });

    let cards = view.filtered_images().into_iter().map(|image| {
        let id = image.id;
        let loaded = view.is_loaded(id);
        let onclick = {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| view.dispatch(GalleryAction::Open(id)))
        };
        let onload = {
            let view = view.clone();
            Callback::from(move |_: Event| view.dispatch(GalleryAction::ImageLoaded(id)))
        };
        html! {
            <div key={id} class="gallery-card" onclick={onclick}>
                if !loaded {
                    <div class="gallery-card-loading"><span class="gallery-spinner"></span></div>
                }
                <img
                    src={image.src.clone()}
                    alt={image.alt}
                    loading="lazy"
                    class={classes!("gallery-card-image", (!loaded).then(|| "pending"))}
                    onload={onload}
                />
                <div class="gallery-card-overlay">
                    <p class="gallery-card-title">{image.alt}</p>
                    <p class="gallery-card-description">{image.description}</p>
                </div>
            </div>
        }
    });

    let lightbox = view.selected().cloned().map(|image| {
        let dispatch = |action: GalleryAction| {
            let view = view.clone();
            Callback::from(move |_: ()| view.dispatch(action.clone()))
        };
        html! {
            <LightboxModal
                image={image}
                has_prev={view.has_prev()}
                has_next={view.has_next()}
                on_close={dispatch(GalleryAction::Close)}
                on_prev={dispatch(GalleryAction::Prev)}
                on_next={dispatch(GalleryAction::Next)}
            />
        }
    });

    html! {
        <div class="gallery-container">
            <style>
                {r#"
                .gallery-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .gallery-filters {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                    overflow-x: auto;
                    padding-bottom: 1rem;
                    scrollbar-width: none;
                }
                .gallery-filter {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                    background: #f3f4f6;
                    color: #4b5563;
                    transition: all 0.2s ease;
                }
                .gallery-filter:hover {
                    background: #e5e7eb;
                }
                .gallery-filter.active {
                    background: #2563eb;
                    color: #fff;
                    box-shadow: 0 10px 15px rgba(37, 99, 235, 0.25);
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .gallery-card {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    background: #f3f4f6;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease;
                }
                .gallery-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .gallery-card-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .gallery-spinner {
                    width: 2rem;
                    height: 2rem;
                    border: 3px solid #d1d5db;
                    border-top-color: #9ca3af;
                    border-radius: 50%;
                    animation: gallery-spin 1s linear infinite;
                }
                @keyframes gallery-spin { to { transform: rotate(360deg); } }
                .gallery-card-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: all 0.5s ease;
                }
                .gallery-card-image.pending {
                    opacity: 0;
                }
                .gallery-card:hover .gallery-card-image {
                    transform: scale(1.05);
                }
                .gallery-card-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0));
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-card:hover .gallery-card-overlay {
                    opacity: 1;
                }
                .gallery-card-title {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin: 0;
                }
                .gallery-card-description {
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.75rem;
                    margin: 0.25rem 0 0;
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(4px);
                }
                .lightbox-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 51;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 2rem;
                    cursor: pointer;
                }
                .lightbox-stage {
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lightbox-nav {
                    position: absolute;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 3rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .lightbox-nav:hover, .lightbox-close:hover {
                    color: #fff;
                }
                .lightbox-prev { left: 1rem; }
                .lightbox-next { right: 1rem; }
                .lightbox-frame {
                    position: relative;
                    max-width: 64rem;
                    max-height: 100%;
                    margin: 0 auto;
                }
                .lightbox-frame img {
                    display: block;
                    max-height: 85vh;
                    width: auto;
                    max-width: 100%;
                    margin: 0 auto;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .lightbox-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    border-radius: 0 0 0.5rem 0.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                }
                .lightbox-title {
                    color: #fff;
                    font-weight: 500;
                    margin: 0;
                }
                .lightbox-description {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    margin: 0.25rem 0 0;
                }
                @media (min-width: 640px) {
                    .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (min-width: 768px) {
                    .lightbox { padding: 2rem; }
                }
                "#}
            </style>
            <div class="gallery-filters">
                { for filter_buttons }
            </div>
            <div class="gallery-grid">
                { for cards }
            </div>
            { for lightbox }
        </div>
    }
}
