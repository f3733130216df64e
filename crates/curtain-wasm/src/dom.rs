//! Element tree for the widget
//!
//! ```text
//! container
//! ├── start overlay ── start button        (removed once dismissed)
//! ├── video ── source
//! └── control bar
//!     ├── play/pause button
//!     ├── seek range
//!     ├── time label
//!     ├── volume group ── icon, volume range
//!     └── fullscreen button
//! ```

use crate::platform::describe;
use curtain_core::{
    view::{FULLSCREEN_GLYPH, VOLUME_GLYPH},
    Error, Result, Style, WidgetConfig, WidgetView,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlVideoElement};

fn dom_error(err: wasm_bindgen::JsValue) -> Error {
    Error::Dom(describe(&err))
}

fn create<T: JsCast>(document: &Document, tag: &str, style: Option<Style>) -> Result<T> {
    let element = document.create_element(tag).map_err(dom_error)?;
    if let Some(style) = style {
        element.set_attribute("style", &style.to_css()).map_err(dom_error)?;
    }
    element
        .dyn_into::<T>()
        .map_err(|_| Error::Dom(format!("<{tag}> has an unexpected element type")))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child).map(|_| ()).map_err(dom_error)
}

fn range(
    document: &Document,
    min: &str,
    max: &str,
    step: Option<&str>,
) -> Result<HtmlInputElement> {
    let input: HtmlInputElement = create(document, "input", None)?;
    input.set_type("range");
    input.set_min(min);
    input.set_max(max);
    if let Some(step) = step {
        input.set_step(step);
    }
    Ok(input)
}

/// Handles to every element a handler reads or the renderer updates
pub struct WidgetDom {
    pub container: HtmlElement,
    pub overlay: HtmlElement,
    pub start_button: HtmlElement,
    pub video: HtmlVideoElement,
    pub play_button: HtmlElement,
    pub seek: HtmlInputElement,
    pub time_label: HtmlElement,
    pub volume: HtmlInputElement,
    pub fullscreen_button: HtmlElement,
}

impl WidgetDom {
    /// Build the detached tree
    pub fn build(document: &Document, config: &WidgetConfig) -> Result<Self> {
        let container: HtmlElement = create(document, "div", Some(Style::container()))?;

        let overlay: HtmlElement = create(document, "div", Some(Style::start_overlay()))?;
        let start_button: HtmlElement = create(document, "button", Some(Style::start_button()))?;
        start_button.set_text_content(Some(&config.start_label));
        append(&overlay, &start_button)?;
        append(&container, &overlay)?;

        let video: HtmlVideoElement = create(document, "video", Some(Style::video()))?;
        video.set_autoplay(config.autoplay);
        video.set_muted(config.muted);
        video.set_loop(config.looping);
        if config.plays_inline {
            video.set_attribute("playsinline", "").map_err(dom_error)?;
        }
        let source: Element = create(document, "source", None)?;
        source
            .set_attribute("src", &config.source_url)
            .map_err(dom_error)?;
        source
            .set_attribute("type", &config.mime_type)
            .map_err(dom_error)?;
        append(&video, &source)?;
        video
            .append_with_str_1(&config.unsupported_text)
            .map_err(dom_error)?;
        append(&container, &video)?;

        let control_bar: HtmlElement = create(document, "div", Some(Style::control_bar()))?;

        let play_button: HtmlElement = create(document, "button", Some(Style::play_button()))?;
        play_button
            .set_attribute("aria-label", "Play/Pause")
            .map_err(dom_error)?;
        append(&control_bar, &play_button)?;

        let seek = range(document, "0", &config.seek_fallback_max.to_string(), None)?;
        seek.set_attribute("style", &Style::seek_range().to_css()).map_err(dom_error)?;
        append(&control_bar, &seek)?;

        let time_label: HtmlElement = create(document, "span", Some(Style::time_label()))?;
        append(&control_bar, &time_label)?;

        let volume_group: HtmlElement = create(document, "div", Some(Style::volume_group()))?;
        let volume_icon: HtmlElement = create(document, "span", Some(Style::volume_icon()))?;
        volume_icon.set_text_content(Some(VOLUME_GLYPH));
        append(&volume_group, &volume_icon)?;
        let volume = range(document, "0", "1", Some(&config.volume_step.to_string()))?;
        append(&volume_group, &volume)?;
        append(&control_bar, &volume_group)?;

        let fullscreen_button: HtmlElement =
            create(document, "button", Some(Style::fullscreen_button()))?;
        fullscreen_button.set_text_content(Some(FULLSCREEN_GLYPH));
        fullscreen_button
            .set_attribute("aria-label", "Fullscreen")
            .map_err(dom_error)?;
        append(&control_bar, &fullscreen_button)?;

        append(&container, &control_bar)?;

        Ok(Self {
            container,
            overlay,
            start_button,
            video,
            play_button,
            seek,
            time_label,
            volume,
            fullscreen_button,
        })
    }

    /// Bring the controls in line with `view`
    pub fn render(&self, view: &WidgetView) {
        if !view.show_start_gate {
            self.overlay.remove();
        }

        self.play_button.set_text_content(Some(view.play_label));

        // max first, or the browser clamps the value to the old range
        self.seek.set_max(&view.seek_max.to_string());
        self.seek.set_value(&view.seek_value.to_string());

        self.time_label.set_text_content(Some(&view.time_label));
        self.volume.set_value(&view.volume.to_string());

        let _ = self
            .fullscreen_button
            .set_attribute("data-state", &view.fullscreen.to_string());
    }
}
