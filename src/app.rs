//! Headless application shell.
//!
//! Holds the current parameters, the renderer and a status line, and drives
//! the update flow: validate, post a pending status, regenerate one tick
//! later, then frame and report the result.

use std::fmt;

use krinkle_core::{GenerationError, TilingMode, Timeline};
use krinkle_settings::{Config, OverlaySettings};
use krinkle_tiling::{generate, GeneratedTiling, TilingParams};
use krinkle_visualizer::{
    DrawSurface, InputEvent, RenderOptions, TilingRenderer, ViewportState,
};
use tracing::{error, info};

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line status shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn generating(mode: TilingMode) -> Self {
        Self::info(format!("Generating {}...", mode))
    }

    /// Summary of a finished run.
    pub fn generated(result: &GeneratedTiling) -> Self {
        let mut text = format!(
            "(m, k, n) = ({}, {}, {}) | Closure Error: {:.2} | Polygons: {}",
            result.params.m,
            result.params.k,
            result.n,
            result.closure_error.unwrap_or(0.0),
            result.len()
        );
        if result.has_short_period() {
            text.push_str(" | Short period");
        }
        Self::info(text)
    }

    pub fn invalid(err: &GenerationError) -> Self {
        match err {
            GenerationError::SymmetryTooSmall { .. } => {
                Self::error("Error: n (k*t) must be >= k")
            }
            other => Self::error(other.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Deferred work scheduled on the application timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Regenerate,
}

pub fn render_options(overlays: &OverlaySettings) -> RenderOptions {
    RenderOptions {
        show_edges: overlays.show_edges,
        show_wedge_labels: overlays.show_wedge_labels,
        show_tile_labels: overlays.show_tile_labels,
        warn_short_period: overlays.warn_short_period,
    }
}

pub struct KrinkleApp {
    mode: TilingMode,
    params: TilingParams,
    renderer: TilingRenderer,
    timeline: Timeline<AppAction>,
    status: StatusMessage,
    result: Option<GeneratedTiling>,
    auto_center: bool,
    label_font_family: String,
}

impl KrinkleApp {
    pub fn new(config: &Config) -> Self {
        let viewport = ViewportState::new(
            config.view.canvas_width as f64,
            config.view.canvas_height as f64,
        )
        .with_zoom_sensitivity(config.view.zoom_sensitivity);
        let mut renderer = TilingRenderer::with_viewport(viewport);
        renderer.set_options(render_options(&config.overlays));

        Self {
            mode: config.parameters.mode,
            params: config.parameters.to_params(),
            renderer,
            timeline: Timeline::new(),
            status: StatusMessage::info("Ready"),
            result: None,
            auto_center: config.view.auto_center,
            label_font_family: config.overlays.label_font_family.clone(),
        }
    }

    pub fn mode(&self) -> TilingMode {
        self.mode
    }

    pub fn params(&self) -> &TilingParams {
        &self.params
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn result(&self) -> Option<&GeneratedTiling> {
        self.result.as_ref()
    }

    pub fn renderer(&self) -> &TilingRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TilingRenderer {
        &mut self.renderer
    }

    pub fn label_font_family(&self) -> &str {
        &self.label_font_family
    }

    pub fn has_pending_work(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Replaces the inputs; takes effect on the next [`request_update`](Self::request_update).
    pub fn set_parameters(&mut self, mode: TilingMode, params: TilingParams) {
        self.mode = mode;
        self.params = params;
    }

    /// Validates the current parameters and schedules a regeneration for the
    /// next tick so the pending status can be shown first.
    ///
    /// Invalid parameters set an error status and skip generation. Returns
    /// `true` when a regeneration was scheduled.
    pub fn request_update(&mut self) -> bool {
        if let Err(err) = self.params.validate(self.mode) {
            error!("Rejected parameters {:?}: {}", self.params, err);
            self.timeline.clear();
            self.status = StatusMessage::invalid(&err);
            return false;
        }

        self.status = StatusMessage::generating(self.mode);
        self.timeline.schedule_unique(1, AppAction::Regenerate);
        true
    }

    /// Advances the timeline by one frame. Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut redraw = false;
        for action in self.timeline.tick() {
            match action {
                AppAction::Regenerate => {
                    self.regenerate();
                    redraw = true;
                }
            }
        }
        redraw
    }

    /// Ticks until no deferred work remains.
    pub fn run_until_idle(&mut self) {
        while self.has_pending_work() {
            self.tick();
        }
    }

    fn regenerate(&mut self) {
        match generate(self.mode, &self.params) {
            Ok(result) => {
                self.renderer
                    .set_display_data(result.polygons.clone(), self.mode);
                if self.auto_center {
                    self.renderer.auto_center();
                }
                self.status = StatusMessage::generated(&result);
                info!("{}", self.status);
                self.result = Some(result);
            }
            Err(err) => {
                self.status = StatusMessage::invalid(&err);
                error!("{}", err);
            }
        }
    }

    /// Routes pointer and window input to the renderer. Returns `true` if a
    /// redraw is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.renderer.handle_input(event)
    }

    pub fn render(&self, surface: &mut impl DrawSurface) {
        self.renderer.draw(surface);
    }
}

impl Default for KrinkleApp {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
