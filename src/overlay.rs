use crate::constants::*;
use crate::dom;
use crate::format::{format_time, percent_css, quantize_opacity};
use tribute_core::{SceneSnapshot, TimelineConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Static page chrome that depends only on the timeline: track label, total
/// time, seekbar range and one marker per segment.
pub fn init(document: &web::Document, config: &TimelineConfig) {
    dom::set_text(
        document,
        TRACK_LABEL_ID,
        &format!("{} · {}", config.audio.track, config.audio.artist),
    );
    dom::set_text(document, TIME_TOTAL_ID, &format_time(config.total_duration()));
    if let Some(seek) = dom::element_by_id::<web::HtmlInputElement>(document, SEEKBAR_ID) {
        seek.set_min("0");
        seek.set_max(&format!("{}", config.total_duration()));
        seek.set_step("0.1");
        seek.set_value("0");
    }
    if let Some(markers) = document.get_element_by_id(SEGMENT_MARKERS_ID) {
        markers.set_inner_html("");
        for seg in &config.scene_timeline {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            el.set_class_name("segment-marker");
            _ = el.set_attribute("title", &format!("{} ({})", seg.title, seg.time.start));
            if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
                _ = html
                    .style()
                    .set_property("left", &percent_css(config.marker_percent(seg)));
                _ = markers.append_child(&html);
            }
        }
    }
}

/// Writes the per-frame snapshot into the DOM, touching an element only when
/// its value changed.
#[derive(Default)]
pub struct Overlay {
    segment: Option<Option<usize>>,
    shown_second: Option<u64>,
    intro_opacity: Option<f32>,
    narrative_opacity: Option<f32>,
    meta_opacity: Option<f32>,
    flags: Option<[bool; 8]>,
}

impl Overlay {
    pub fn apply(
        &mut self,
        document: &web::Document,
        snapshot: &SceneSnapshot,
        config: &TimelineConfig,
        scrubbing: bool,
    ) {
        if self.segment != Some(snapshot.segment) {
            self.segment = Some(snapshot.segment);
            let seg = snapshot.segment.and_then(|i| config.scene_timeline.get(i));
            if let Some(seg) = seg {
                dom::set_text(document, SEGMENT_TITLE_ID, &seg.title);
                dom::set_text(
                    document,
                    SEGMENT_TIME_ID,
                    &format!("{} – {}", seg.time.start, seg.time.end),
                );
                dom::set_text(document, SEGMENT_SANSKRIT_ID, &seg.sanskrit);
                dom::set_text(document, SEGMENT_TRANSLATION_ID, &seg.translation);
                dom::set_text(document, SEGMENT_DESCRIPTION_ID, &seg.description);
                log::debug!("[ui] segment {} '{}'", seg.id, seg.title);
            }
        }

        if !scrubbing {
            let second = snapshot.displayed_time.max(0.0).floor() as u64;
            if self.shown_second != Some(second) {
                self.shown_second = Some(second);
                dom::set_text(document, TIME_CURRENT_ID, &format_time(snapshot.displayed_time));
            }
            if let Some(seek) = dom::element_by_id::<web::HtmlInputElement>(document, SEEKBAR_ID) {
                seek.set_value_as_number(snapshot.displayed_time);
            }
        }

        if let Some(o) = quantize_opacity(
            snapshot.intro_overlay_opacity,
            self.intro_opacity,
            OPACITY_STEPS,
        ) {
            self.intro_opacity = Some(o);
            dom::set_opacity(document, INTRO_OVERLAY_ID, o);
            dom::set_hidden(document, INTRO_OVERLAY_ID, o <= 0.0);
        }
        if let Some(o) = quantize_opacity(
            snapshot.overlay_opacity,
            self.narrative_opacity,
            OPACITY_STEPS,
        ) {
            self.narrative_opacity = Some(o);
            dom::set_opacity(document, NARRATIVE_OVERLAY_ID, o);
        }
        if let Some(o) = quantize_opacity(snapshot.meta_ui_opacity, self.meta_opacity, OPACITY_STEPS)
        {
            self.meta_opacity = Some(o);
            dom::set_opacity(document, META_UI_ID, o);
        }

        let flags = [
            snapshot.show_drag_hint,
            snapshot.show_shaping_message,
            snapshot.show_ending_line,
            snapshot.starting,
            snapshot.audio_ready,
            snapshot.music_playing,
            snapshot.fading_to_black,
            snapshot.model_loaded,
        ];
        if self.flags == Some(flags) {
            return;
        }
        self.flags = Some(flags);
        dom::set_hidden(document, DRAG_HINT_ID, !snapshot.show_drag_hint);
        dom::set_hidden(document, SHAPING_MESSAGE_ID, !snapshot.show_shaping_message);
        dom::set_hidden(document, ENDING_LINE_ID, !snapshot.show_ending_line);
        dom::set_hidden(document, STARTING_INDICATOR_ID, !snapshot.starting);
        dom::set_hidden(
            document,
            LOADING_INDICATOR_ID,
            snapshot.audio_ready && snapshot.model_loaded,
        );
        if let Some(button) = document.get_element_by_id(BEGIN_BUTTON_ID) {
            if snapshot.audio_ready {
                _ = button.remove_attribute("disabled");
            } else {
                _ = button.set_attribute("disabled", "");
            }
        }
        dom::set_text(
            document,
            PLAY_TOGGLE_ID,
            if snapshot.music_playing { "Pause" } else { "Play" },
        );
        if let Some(body) = document.body() {
            _ = body
                .class_list()
                .toggle_with_force(FADING_CLASS, snapshot.fading_to_black);
        }
    }
}

/// Toggle the drag hint by hand (keyboard `H`), independent of the engine's
/// one-shot state.
pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DRAG_HINT_ID) {
        _ = el.class_list().toggle(HIDDEN_CLASS);
    }
}
