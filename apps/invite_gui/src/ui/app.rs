//! The invitation page: layout, widgets, and reveal-on-scroll wiring.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use chrono::Utc;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use page_core::{
    audio::MusicController,
    countdown::CountdownParts,
    rsvp::{RsvpForm, SubmitNotice},
    IntersectionEntry, ObserverHost, ObserverSubscription, RevealController, RevealSurface,
    REVEAL_VISIBILITY_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use shared::{domain::ElementId, error::DispatchError};

use crate::audio::RodioMusicSink;
use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::content::{content_for, Language, PageContent};

pub const SETTINGS_STORAGE_KEY: &str = "invite_page_settings";

/// The slice of UI state that survives restarts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub language: Language,
}

/// Section geometry and reveal flags recorded while the page lays out.
struct SectionSurface {
    elements: Vec<ElementId>,
    rects: HashMap<ElementId, egui::Rect>,
    viewport: egui::Rect,
    revealed: HashSet<ElementId>,
}

impl SectionSurface {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
            rects: HashMap::new(),
            viewport: egui::Rect::NOTHING,
            revealed: HashSet::new(),
        }
    }

    fn set_elements(&mut self, count: usize) {
        self.elements = (0..count as i64).map(ElementId).collect();
        let keep: HashSet<ElementId> = self.elements.iter().copied().collect();
        self.rects.retain(|element, _| keep.contains(element));
    }

    fn record_rect(&mut self, element: ElementId, rect: egui::Rect) {
        self.rects.insert(element, rect);
    }

    fn record_viewport(&mut self, viewport: egui::Rect) {
        self.viewport = viewport;
    }

    fn visible_fraction(&self, element: ElementId) -> f32 {
        let Some(rect) = self.rects.get(&element) else {
            return 0.0;
        };
        let area = rect.area();
        if area <= 0.0 {
            return 0.0;
        }
        let overlap = rect.intersect(self.viewport);
        if overlap.is_negative() {
            return 0.0;
        }
        overlap.area() / area
    }

    fn is_revealed(&self, element: ElementId) -> bool {
        self.revealed.contains(&element)
    }

    /// True once every section has reported a rect, i.e. the first layout
    /// pass is done and viewport probes are meaningful.
    fn layout_ready(&self) -> bool {
        !self.elements.is_empty()
            && self
                .elements
                .iter()
                .all(|element| self.rects.contains_key(element))
    }
}

impl RevealSurface for SectionSurface {
    fn reveal_elements(&self) -> Vec<ElementId> {
        self.elements.clone()
    }

    fn is_in_viewport(&self, element: ElementId) -> bool {
        self.visible_fraction(element) >= REVEAL_VISIBILITY_THRESHOLD
    }

    fn set_revealed(&mut self, element: ElementId, revealed: bool) {
        if revealed {
            self.revealed.insert(element);
        } else {
            self.revealed.remove(&element);
        }
    }
}

/// Frame-polled stand-in for the browser's intersection observer: every
/// observed element is checked against the recorded rects once per frame.
struct FrameObserver {
    observed: HashSet<ElementId>,
    threshold: f32,
}

impl FrameObserver {
    fn poll(&self, surface: &SectionSurface) -> Vec<IntersectionEntry> {
        self.observed
            .iter()
            .map(|&element| IntersectionEntry {
                element,
                is_intersecting: surface.visible_fraction(element) >= self.threshold,
            })
            .collect()
    }
}

impl ObserverSubscription for FrameObserver {
    fn observe(&mut self, element: ElementId) {
        self.observed.insert(element);
    }

    fn unobserve(&mut self, element: ElementId) {
        self.observed.remove(&element);
    }
}

struct FrameObserverHost;

impl ObserverHost for FrameObserverHost {
    type Subscription = FrameObserver;

    fn subscribe(&mut self, threshold: f32) -> FrameObserver {
        FrameObserver {
            observed: HashSet::new(),
            threshold,
        }
    }
}

pub struct InviteApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    settings: Settings,

    language: Language,
    content: PageContent,

    form: RsvpForm,
    notice: Option<SubmitNotice>,
    status: String,

    surface: SectionSurface,
    reveal: RevealController<FrameObserver>,
    observer_host: FrameObserverHost,
    reveal_started: bool,

    music: MusicController,
    music_sink: Option<RodioMusicSink>,
}

impl InviteApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: Settings,
        persisted: Option<PersistedSettings>,
    ) -> Self {
        let language = persisted.unwrap_or_default().language;
        let content = content_for(language);
        let mut surface = SectionSurface::new();
        surface.set_elements(content.sections.len());

        let mut music = MusicController::new();
        let mut music_sink = settings.music_path.as_deref().and_then(RodioMusicSink::open);
        if settings.autoplay {
            if let Some(sink) = music_sink.as_mut() {
                music.try_autoplay(sink);
            }
        }

        Self {
            cmd_tx,
            ui_rx,
            settings,
            language,
            content,
            form: RsvpForm::new(),
            notice: None,
            status: String::new(),
            surface,
            reveal: RevealController::new(),
            observer_host: FrameObserverHost,
            reveal_started: false,
            music,
            music_sink,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::RsvpAccepted => {
                    self.notice = Some(self.form.apply_outcome(Ok(())));
                }
                UiEvent::RsvpFailed(err) => {
                    self.notice = Some(
                        self.form
                            .apply_outcome(Err(DispatchError::new(err.message()))),
                    );
                    self.status = match err.category() {
                        UiErrorCategory::Transport => {
                            "Could not reach the RSVP service".to_string()
                        }
                        _ => err.message().to_string(),
                    };
                    tracing::warn!(
                        context = ?err.context(),
                        "rsvp submission failed: {}",
                        err.message()
                    );
                }
            }
        }
    }

    /// The content-swap collaborator: replace every display string, then
    /// replay reveal-on-scroll for the new content.
    fn switch_language(&mut self) {
        self.language = self.language.toggled();
        self.content = content_for(self.language);
        self.surface.set_elements(self.content.sections.len());
        self.reveal.reset(&mut self.surface, &mut self.observer_host);
        self.reveal_started = true;
    }

    fn drive_reveals(&mut self) {
        if !self.reveal_started {
            // Page-ready: wait for the first full layout pass so the
            // in-viewport probe sees real geometry.
            if self.surface.layout_ready() {
                self.reveal
                    .initialize(&mut self.surface, &mut self.observer_host);
                self.reveal_started = true;
            }
            return;
        }

        let entries = match self.reveal.subscription() {
            Some(observer) => observer.poll(&self.surface),
            None => Vec::new(),
        };
        if !entries.is_empty() {
            self.reveal.on_intersections(&mut self.surface, &entries);
        }
    }

    fn submit(&mut self) {
        let payload = self.form.payload();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitRsvp { payload },
            &mut self.status,
        );
    }

    fn countdown_row(&self, ui: &mut egui::Ui) {
        let parts = CountdownParts::at(self.settings.event_start, Utc::now());
        ui.heading(self.content.countdown_heading);
        ui.horizontal(|ui| {
            for (value, label) in [
                (parts.days_label(), self.content.days_label),
                (parts.hours_label(), self.content.hours_label),
                (parts.minutes_label(), self.content.minutes_label),
                (parts.seconds_label(), self.content.seconds_label),
            ] {
                ui.group(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(value).size(28.0).strong());
                        ui.small(label);
                    });
                });
            }
        });
    }

    fn rsvp_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.content.rsvp_heading);

        ui.label(self.content.name_label);
        ui.text_edit_singleline(&mut self.form.name);

        let selected = self
            .form
            .attendance
            .as_ref()
            .map(|option| option.value.clone());
        for choice in &self.content.attendance {
            let checked = selected.as_deref() == Some(choice.option.value.as_str());
            if ui.radio(checked, choice.label).clicked() && !checked {
                self.form.select_attendance(choice.option.clone());
            }
        }

        ui.label(self.content.guests_label);
        ui.horizontal(|ui| {
            if ui.button("−").clicked() {
                self.form.decrement_guests();
            }
            ui.label(egui::RichText::new(self.form.guest_count.0.to_string()).strong());
            if ui.button("+").clicked() {
                self.form.increment_guests();
            }
        });

        ui.label(self.content.message_label);
        ui.text_edit_multiline(&mut self.form.message);

        if ui.button(self.content.submit_label).clicked() {
            self.submit();
        }

        match self.notice {
            Some(SubmitNotice::Confirmed) => {
                ui.colored_label(
                    egui::Color32::from_rgb(0x2e, 0x7d, 0x32),
                    self.content.confirmation_notice,
                );
            }
            Some(SubmitNotice::Failed) => {
                ui.colored_label(ui.visuals().error_fg_color, self.content.failure_notice);
            }
            None => {}
        }
    }

    fn reveal_sections(&mut self, ui: &mut egui::Ui) {
        for (index, section) in self.content.sections.iter().enumerate() {
            let element = ElementId(index as i64);
            let target = if self.surface.is_revealed(element) {
                1.0
            } else {
                0.0
            };
            let opacity = ui.ctx().animate_value_with_time(
                egui::Id::new(("reveal_section", index)),
                target,
                0.6,
            );
            let response = ui
                .scope(|ui| {
                    ui.set_opacity(opacity);
                    ui.add_space(24.0);
                    ui.heading(section.heading);
                    ui.label(section.body);
                })
                .response;
            self.surface.record_rect(element, response.rect);
        }
    }
}

impl eframe::App for InviteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("invite_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.content.title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.language.toggle_label()).clicked() {
                        self.switch_language();
                    }
                    if self.music_sink.is_some() {
                        let label = if self.music.is_playing() {
                            self.content.music_pause_label
                        } else {
                            self.content.music_play_label
                        };
                        if ui.button(label).clicked() {
                            if let Some(sink) = self.music_sink.as_mut() {
                                self.music.toggle(sink);
                            }
                        }
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("invite_status").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.surface.record_viewport(ui.clip_rect());
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(self.content.subtitle).size(20.0));
                });
                self.countdown_row(ui);
                ui.separator();
                self.rsvp_form(ui);
                ui.separator();
                self.reveal_sections(ui);
                ui.add_space(48.0);
            });
        });

        self.drive_reveals();

        // Wall-clock cadence for the countdown readout.
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedSettings {
            language: self.language,
        };
        if let Ok(text) = serde_json::to_string(&persisted) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn band(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    fn surface_with_viewport(sections: usize) -> SectionSurface {
        let mut surface = SectionSurface::new();
        surface.set_elements(sections);
        surface.record_viewport(band(0.0, 600.0));
        surface
    }

    #[test]
    fn visible_fraction_tracks_viewport_overlap() {
        let mut surface = surface_with_viewport(1);
        surface.record_rect(ElementId(0), band(500.0, 700.0));

        assert!((surface.visible_fraction(ElementId(0)) - 0.5).abs() < f32::EPSILON);
        assert!(surface.is_in_viewport(ElementId(0)));
    }

    #[test]
    fn sections_below_the_threshold_are_outside_the_viewport() {
        let mut surface = surface_with_viewport(2);
        surface.record_rect(ElementId(0), band(700.0, 900.0));
        surface.record_rect(ElementId(1), band(590.0, 690.0));

        assert_eq!(surface.visible_fraction(ElementId(0)), 0.0);
        assert!(!surface.is_in_viewport(ElementId(0)));
        // A tenth visible is below the 15% threshold.
        assert!(!surface.is_in_viewport(ElementId(1)));
    }

    #[test]
    fn frame_observer_polls_only_observed_elements() {
        let mut surface = surface_with_viewport(2);
        surface.record_rect(ElementId(0), band(0.0, 100.0));
        surface.record_rect(ElementId(1), band(1_000.0, 1_100.0));

        let mut host = FrameObserverHost;
        let mut observer = host.subscribe(REVEAL_VISIBILITY_THRESHOLD);
        observer.observe(ElementId(1));

        let entries = observer.poll(&surface);
        assert_eq!(
            entries,
            vec![IntersectionEntry {
                element: ElementId(1),
                is_intersecting: false,
            }]
        );
    }

    #[test]
    fn changing_the_element_set_drops_stale_rects() {
        let mut surface = surface_with_viewport(3);
        for id in 0..3 {
            surface.record_rect(ElementId(id), band(0.0, 100.0));
        }

        surface.set_elements(2);

        assert!(surface.layout_ready());
        assert_eq!(surface.visible_fraction(ElementId(2)), 0.0);
    }

    #[test]
    fn language_swap_keeps_attendance_wire_values_stable() {
        let english = content_for(Language::En);
        let czech = content_for(Language::Cs);

        let english_values: Vec<_> = english
            .attendance
            .iter()
            .map(|choice| choice.option.clone())
            .collect();
        let czech_values: Vec<_> = czech
            .attendance
            .iter()
            .map(|choice| choice.option.clone())
            .collect();

        assert_eq!(english_values, czech_values);
        assert_eq!(english.sections.len(), czech.sections.len());
    }
}
