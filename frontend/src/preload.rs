use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageLoadError {
    #[error("image {url} failed to load")]
    Failed { url: String },
    #[error("image {url} did not load within {after_ms} ms")]
    TimedOut { url: String, after_ms: u32 },
    #[error("this browser cannot create image elements")]
    Unsupported,
}

/// Which half of a before/after pair an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePair {
    pub before: AttrValue,
    pub after: AttrValue,
}

impl ImagePair {
    pub fn new(before: impl Into<AttrValue>, after: impl Into<AttrValue>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn url(&self, slot: Slot) -> &str {
        match slot {
            Slot::Before => &*self.before,
            Slot::After => &*self.after,
        }
    }
}

/// A single off-screen image load.
///
/// Exactly one of load, error or timeout reaches `on_done`. Dropping the
/// request detaches the element handlers and cancels the timeout, so nothing
/// is reported once the owner is gone.
pub struct ImageRequest {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
    _timeout: Timeout,
}

impl ImageRequest {
    pub fn start(
        url: &str,
        timeout_ms: u32,
        on_done: Callback<Result<(), ImageLoadError>>,
    ) -> Result<Self, ImageLoadError> {
        let image = HtmlImageElement::new().map_err(|_| ImageLoadError::Unsupported)?;

        let settled = Rc::new(Cell::new(false));
        let finish: Rc<dyn Fn(Result<(), ImageLoadError>)> = Rc::new(move |result| {
            if !settled.replace(true) {
                on_done.emit(result);
            }
        });

        let onload = {
            let finish = finish.clone();
            Closure::<dyn FnMut()>::new(move || finish(Ok(())))
        };
        let onerror = {
            let finish = finish.clone();
            let url = url.to_string();
            Closure::<dyn FnMut()>::new(move || {
                finish(Err(ImageLoadError::Failed { url: url.clone() }))
            })
        };
        let timeout = {
            let url = url.to_string();
            Timeout::new(timeout_ms, move || {
                finish(Err(ImageLoadError::TimedOut {
                    url,
                    after_ms: timeout_ms,
                }))
            })
        };

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(url);

        Ok(Self {
            image,
            _onload: onload,
            _onerror: onerror,
            _timeout: timeout,
        })
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreloadEvent {
    Loaded(Slot),
    Failed(ImageLoadError),
}

/// Both loads of a pair, issued together. Keep it alive for as long as the
/// results are wanted.
pub struct PairPreload {
    _before: ImageRequest,
    _after: ImageRequest,
}

pub fn preload(
    pair: &ImagePair,
    timeout_ms: u32,
    on_event: Callback<PreloadEvent>,
) -> Result<PairPreload, ImageLoadError> {
    let request = |slot: Slot| {
        let on_event = on_event.clone();
        let url = pair.url(slot).to_string();
        ImageRequest::start(
            pair.url(slot),
            timeout_ms,
            Callback::from(move |result: Result<(), ImageLoadError>| match result {
                Ok(()) => {
                    info!("Loaded comparison image {}", url);
                    on_event.emit(PreloadEvent::Loaded(slot));
                }
                Err(e) => {
                    warn!("{}", e);
                    on_event.emit(PreloadEvent::Failed(e));
                }
            }),
        )
    };

    Ok(PairPreload {
        _before: request(Slot::Before)?,
        _after: request(Slot::After)?,
    })
}

/// Join on the two loads of a pair. Completion order does not matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreloadLatch {
    before: bool,
    after: bool,
    failure: Option<ImageLoadError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreloadStatus {
    Loading,
    Ready,
    Failed(ImageLoadError),
}

impl PreloadLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this call completed the latch.
    pub fn mark_loaded(&mut self, slot: Slot) -> bool {
        if self.failure.is_some() || self.is_ready() {
            return false;
        }
        match slot {
            Slot::Before => self.before = true,
            Slot::After => self.after = true,
        }
        self.is_ready()
    }

    /// A failure after both images loaded is ignored; ready never reverts.
    pub fn mark_failed(&mut self, error: ImageLoadError) -> bool {
        if self.is_ready() || self.failure.is_some() {
            return false;
        }
        self.failure = Some(error);
        true
    }

    pub fn is_ready(&self) -> bool {
        self.before && self.after
    }

    pub fn status(&self) -> PreloadStatus {
        if self.is_ready() {
            PreloadStatus::Ready
        } else if let Some(error) = &self.failure {
            PreloadStatus::Failed(error.clone())
        } else {
            PreloadStatus::Loading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_waits_for_both_slots() {
        let mut latch = PreloadLatch::new();
        assert_eq!(latch.status(), PreloadStatus::Loading);
        assert!(!latch.mark_loaded(Slot::Before));
        assert_eq!(latch.status(), PreloadStatus::Loading);
        assert!(latch.mark_loaded(Slot::After));
        assert_eq!(latch.status(), PreloadStatus::Ready);
    }

    #[test]
    fn latch_ignores_completion_order() {
        let mut latch = PreloadLatch::new();
        assert!(!latch.mark_loaded(Slot::After));
        assert!(latch.mark_loaded(Slot::Before));
        assert!(latch.is_ready());
    }

    #[test]
    fn duplicate_load_does_not_complete_latch() {
        let mut latch = PreloadLatch::new();
        latch.mark_loaded(Slot::Before);
        assert!(!latch.mark_loaded(Slot::Before));
        assert!(!latch.is_ready());
    }

    #[test]
    fn failure_before_ready_is_reported() {
        let mut latch = PreloadLatch::new();
        latch.mark_loaded(Slot::Before);
        let error = ImageLoadError::Failed {
            url: "/after.jpg".to_string(),
        };
        assert!(latch.mark_failed(error.clone()));
        assert_eq!(latch.status(), PreloadStatus::Failed(error));
        // a late success does not resurrect a failed pair
        assert!(!latch.mark_loaded(Slot::After));
        assert!(!latch.is_ready());
    }

    #[test]
    fn timeout_after_ready_is_ignored() {
        let mut latch = PreloadLatch::new();
        latch.mark_loaded(Slot::Before);
        latch.mark_loaded(Slot::After);
        assert!(!latch.mark_failed(ImageLoadError::TimedOut {
            url: "/before.jpg".to_string(),
            after_ms: 15_000,
        }));
        assert_eq!(latch.status(), PreloadStatus::Ready);
    }

    #[test]
    fn error_messages_name_the_image() {
        let error = ImageLoadError::TimedOut {
            url: "/before1.jpg".to_string(),
            after_ms: 250,
        };
        assert_eq!(error.to_string(), "image /before1.jpg did not load within 250 ms");
    }
}
