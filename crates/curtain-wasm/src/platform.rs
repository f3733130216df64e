//! Media capability bindings over the browser DOM

use curtain_core::{Error, FailureLog, FullscreenHost, MediaElement, Operation, Result};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlVideoElement};

// web-sys declares the fullscreen calls as returning nothing; bind the
// promise-returning forms on local views of the same objects so
// rejections can be observed.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element)]
    type FullscreenTarget;

    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(
        this: &FullscreenTarget,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(extends = Document)]
    type FullscreenDocument;

    #[wasm_bindgen(method, catch, js_name = exitFullscreen)]
    fn exit_fullscreen_promise(
        this: &FullscreenDocument,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// Readable description of a thrown or rejected JS value
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        format!("{}: {}", String::from(err.name()), String::from(err.message()))
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

/// Record the rejection of `value` if it is a promise.
///
/// Older engines return `undefined` from the fullscreen calls; there is
/// nothing to observe then.
fn watch_rejection(value: JsValue, failures: &FailureLog, to_error: fn(String) -> Error) {
    let Ok(promise) = value.dyn_into::<Promise>() else {
        return;
    };

    let failures = failures.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(reason) = JsFuture::from(promise).await {
            failures.record(Operation::PromiseRejection, &to_error(describe(&reason)));
        }
    });
}

/// `<video>` element driven by the widget
pub struct WebMedia {
    video: HtmlVideoElement,
    failures: FailureLog,
}

impl WebMedia {
    pub fn new(video: HtmlVideoElement, failures: FailureLog) -> Self {
        Self { video, failures }
    }
}

impl MediaElement for WebMedia {
    fn play(&self) -> Result<()> {
        let promise = self
            .video
            .play()
            .map_err(|e| Error::PlaybackStart(describe(&e)))?;
        watch_rejection(promise.into(), &self.failures, Error::PlaybackStart);
        Ok(())
    }

    fn pause(&self) {
        self.video.pause().ok();
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.video.set_volume(volume);
    }

    fn paused(&self) -> bool {
        self.video.paused()
    }

    fn request_fullscreen(&self) -> Result<()> {
        let pending = self
            .video
            .unchecked_ref::<FullscreenTarget>()
            .request_fullscreen_promise()
            .map_err(|e| Error::FullscreenEnter(describe(&e)))?;
        watch_rejection(pending, &self.failures, Error::FullscreenEnter);
        Ok(())
    }
}

/// The document's fullscreen query and exit
pub struct WebDocument {
    document: Document,
    failures: FailureLog,
}

impl WebDocument {
    pub fn new(document: Document, failures: FailureLog) -> Self {
        Self { document, failures }
    }
}

impl FullscreenHost for WebDocument {
    fn has_fullscreen_element(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn exit_fullscreen(&self) -> Result<()> {
        let pending = self
            .document
            .unchecked_ref::<FullscreenDocument>()
            .exit_fullscreen_promise()
            .map_err(|e| Error::FullscreenExit(describe(&e)))?;
        watch_rejection(pending, &self.failures, Error::FullscreenExit);
        Ok(())
    }
}
