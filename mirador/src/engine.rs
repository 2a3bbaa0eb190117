// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use mirador_filter::{FilterState, FlowId, LoopId, OverlaySink, StartupQuery};
use mirador_gesture::{GestureOutput, GestureSession};
use mirador_layout::PanelLayout;
use mirador_view::{
    ContentChild, DeviceClass, Projection, RenderSink, TransformState, ViewportState,
    compute_bounds,
};

use crate::config::EngineConfig;
use crate::event::{Event, Metrics};

bitflags::bitflags! {
    /// What an event changed, so the binding layer repaints only that.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Changes: u8 {
        /// Scale or pan changed: reapply the transform and zoom readouts.
        const TRANSFORM = 0b001;
        /// Overlay visibility changed.
        const FILTERS   = 0b010;
        /// Side panel collapse state or width changed.
        const PANEL     = 0b100;
    }
}

/// The viewport engine.
///
/// `Engine` is the single owner of the viewport transform, the overlay
/// filters, the side panel layout and the gesture in progress. Input arrives
/// through [`Engine::handle`]; each call runs to completion before the next,
/// and reports what it changed.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    metrics: Metrics,
    view: TransformState,
    filters: FilterState,
    panel: PanelLayout,
    session: GestureSession,
    content: Vec<ContentChild>,
    export_mode: bool,
}

impl Engine {
    /// Creates an engine for the given window geometry and measured content.
    ///
    /// The view starts at scale `1.0`; call [`Engine::startup`] to fit it and
    /// apply the link's query.
    #[must_use]
    pub fn new(config: EngineConfig, metrics: Metrics, content: Vec<ContentChild>) -> Self {
        let panel = PanelLayout::new(config.layout);
        let viewer = viewer_size(&panel, &metrics);
        Self {
            config,
            metrics,
            view: TransformState::new(viewer, config.fit),
            filters: FilterState::new(),
            panel,
            session: GestureSession::default(),
            content,
            export_mode: false,
        }
    }

    /// Runs the startup sequence for a page opened with `query`.
    ///
    /// Fits the view, sizes the panel to its default width, resets the
    /// filters, applies the query's overlay lists and finally collapses or
    /// expands the panel from the query's directive (or the window class when
    /// there is none).
    pub fn startup(&mut self, query: &str) -> Changes {
        self.fit_to_view();

        let main_w = self.main_area_width();
        let default_width = self.panel.default_sidebar_width(main_w);
        self.panel.set_last_non_zero_width(default_width);
        self.set_sidebar_width(f64::from(default_width));

        self.filters.reset_filters();
        let parsed = self.filters.apply_from_query(query);
        self.apply_directives(&parsed);

        tracing::debug!(
            export_mode = self.export_mode,
            collapsed = self.panel.is_collapsed(),
            scale = self.view.scale(),
            "startup complete"
        );
        Changes::all()
    }

    /// Processes one input event.
    pub fn handle(&mut self, event: &Event) -> Changes {
        match event {
            Event::PointerDown { pos, button } => {
                self.session.pointer_down(*pos, *button, self.view.pan());
                Changes::empty()
            }
            Event::PointerMove { pos } => match self.session.pointer_move(*pos) {
                Some(out) => self.apply_gesture(out),
                None => Changes::empty(),
            },
            Event::PointerUp | Event::TouchEnd => {
                self.session.end();
                Changes::empty()
            }
            Event::Wheel { pos, delta_y } => {
                let step = self.config.zoom_step;
                let factor = if *delta_y < 0.0 { step } else { 1.0 / step };
                let anchor = *pos - self.viewer_origin().to_vec2();
                self.zoom_to_point(anchor, factor)
            }
            Event::TouchStart { contacts } => {
                let origin = self.viewer_origin();
                self.session.touch_start(contacts, self.view.pan(), origin);
                Changes::empty()
            }
            Event::TouchMove { contacts } => {
                let origin = self.viewer_origin();
                match self.session.touch_move(contacts, origin) {
                    Some(out) => self.apply_gesture(out),
                    None => Changes::empty(),
                }
            }
            Event::SplitterDown { x } => {
                let width = if self.panel.is_collapsed() {
                    0.0
                } else {
                    f64::from(self.panel.width())
                };
                self.session.splitter_down(*x, width);
                Changes::empty()
            }
            Event::ZoomSlider { percent } => self.set_scale_centered(percent / 100.0),
            Event::ZoomIn => self.zoom_by_factor(self.config.zoom_step),
            Event::ZoomOut => self.zoom_by_factor(1.0 / self.config.zoom_step),
            Event::Fit | Event::ResetView => self.fit_to_view(),
            Event::ResetFilters => {
                self.filters.reset_filters();
                Changes::FILTERS
            }
            Event::ToggleFlow(id) => {
                self.filters.toggle_flow(*id);
                Changes::FILTERS
            }
            Event::ToggleLoop(id) => {
                self.filters.toggle_loop(*id);
                Changes::FILTERS
            }
            Event::SetFlow { id, active } => self.set_flow(*id, *active),
            Event::SetLoop { id, active } => self.set_loop(*id, *active),
            Event::SetPanelCollapsed(collapsed) => self.set_panel_collapsed(*collapsed),
            Event::Resize(metrics) => self.resize(*metrics),
        }
    }

    /// Zooms around the viewport center.
    pub fn zoom_by_factor(&mut self, factor: f64) -> Changes {
        self.view.zoom_by_factor(factor);
        Changes::TRANSFORM
    }

    /// Zooms around a viewport-space point.
    pub fn zoom_to_point(&mut self, anchor: Point, factor: f64) -> Changes {
        self.view.zoom_to_point(anchor, factor);
        Changes::TRANSFORM
    }

    /// Sets an absolute scale around the viewport center.
    pub fn set_scale_centered(&mut self, scale: f64) -> Changes {
        self.view.set_scale_centered(scale);
        Changes::TRANSFORM
    }

    /// Measures the content and fits it into the viewport.
    pub fn fit_to_view(&mut self) -> Changes {
        self.sync_viewer_size();
        let bounds = compute_bounds(&self.content, self.config.fit.fallback_bounds);
        self.view.fit_to_view(bounds, self.device_class());
        Changes::TRANSFORM
    }

    /// Collapses or expands the side panel, then refits.
    pub fn set_panel_collapsed(&mut self, collapsed: bool) -> Changes {
        let main_w = self.main_area_width();
        self.panel.set_panel_collapsed(collapsed, main_w);
        self.fit_to_view() | Changes::PANEL
    }

    /// Resizes the side panel, then refits.
    ///
    /// Does nothing while the panel is collapsed or when `px` is not finite;
    /// the view keeps its scale and pan.
    pub fn set_sidebar_width(&mut self, px: f64) -> Changes {
        if self.panel.is_collapsed() || !px.is_finite() {
            return Changes::empty();
        }
        let main_w = self.main_area_width();
        let changed = self.panel.set_sidebar_width(px, main_w);
        let changes = self.fit_to_view();
        if changed {
            changes | Changes::PANEL
        } else {
            changes
        }
    }

    /// Shows or hides a flow overlay. Reports a change only if it had one.
    pub fn set_flow(&mut self, id: FlowId, active: bool) -> Changes {
        if self.filters.set_flow(id, active) {
            Changes::FILTERS
        } else {
            Changes::empty()
        }
    }

    /// Shows or hides a loop overlay. Reports a change only if it had one.
    pub fn set_loop(&mut self, id: LoopId, active: bool) -> Changes {
        if self.filters.set_loop(id, active) {
            Changes::FILTERS
        } else {
            Changes::empty()
        }
    }

    /// Replaces the measured content. The view is not refitted.
    pub fn set_content(&mut self, content: Vec<ContentChild>) {
        self.content = content;
    }

    /// Current bounds of the content, or the fallback rectangle.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        compute_bounds(&self.content, self.config.fit.fallback_bounds)
    }

    /// Pushes the outputs named in `changes` to `sink`.
    pub fn present<S>(&self, changes: Changes, sink: &mut S)
    where
        S: RenderSink + OverlaySink + ?Sized,
    {
        if changes.contains(Changes::TRANSFORM) {
            self.view.apply_transform(sink);
        }
        if changes.contains(Changes::FILTERS) {
            self.filters.apply_to(sink);
        }
    }

    /// Transform owner.
    #[must_use]
    pub fn view(&self) -> &TransformState {
        &self.view
    }

    /// Snapshot of scale and pan.
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.view.state()
    }

    /// Render strings for the current transform.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.view.projection()
    }

    /// Overlay filters.
    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Side panel layout.
    #[must_use]
    pub fn panel(&self) -> &PanelLayout {
        &self.panel
    }

    /// Gesture in progress.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Whether the startup query asked for export mode.
    #[must_use]
    pub fn export_mode(&self) -> bool {
        self.export_mode
    }

    /// Current window geometry.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Window class of the current window.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.config.device_class(self.metrics.window_width)
    }

    /// Viewport rectangle in client coordinates.
    #[must_use]
    pub fn viewer_rect(&self) -> Rect {
        let origin = self.viewer_origin();
        Rect::from_origin_size(origin, viewer_size(&self.panel, &self.metrics))
    }

    fn apply_gesture(&mut self, out: GestureOutput) -> Changes {
        match out {
            GestureOutput::Pan(pan) => {
                self.view.pan_to(pan);
                Changes::TRANSFORM
            }
            GestureOutput::Zoom(step) => self.zoom_to_point(step.anchor, step.factor),
            GestureOutput::PanelWidth(width) => self.set_sidebar_width(width),
        }
    }

    fn apply_directives(&mut self, query: &StartupQuery) {
        self.export_mode = query.export_mode;
        let forced = query.forced_collapse();
        self.panel.set_forced(forced);
        let collapsed = forced.unwrap_or_else(|| self.device_class().is_compact());
        self.set_panel_collapsed(collapsed);
    }

    fn resize(&mut self, metrics: Metrics) -> Changes {
        self.metrics = metrics;
        let main_w = self.main_area_width();
        let class = self.device_class();
        let action = self.panel.on_viewport_resize(main_w, class);
        tracing::debug!(?action, window_width = metrics.window_width, "viewport resized");
        self.fit_to_view() | Changes::PANEL
    }

    fn main_area_width(&self) -> f64 {
        self.metrics.main_area.width()
    }

    fn viewer_origin(&self) -> Point {
        self.metrics.main_area.origin()
    }

    fn sync_viewer_size(&mut self) {
        let size = viewer_size(&self.panel, &self.metrics);
        self.view.set_viewport_size(size);
    }
}

fn viewer_size(panel: &PanelLayout, metrics: &Metrics) -> Size {
    Size::new(
        panel.viewer_width(metrics.main_area.width()),
        metrics.main_area.height(),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use mirador_filter::{FlowId, LoopId};
    use mirador_view::{ContentChild, IntrinsicGeometry};
    use smallvec::smallvec;

    use super::{Changes, Engine};
    use crate::{EngineConfig, Event, Metrics};

    fn engine(width: f64) -> Engine {
        let content = vec![ContentChild::Intrinsic(IntrinsicGeometry::new(Rect::new(
            0.0, 0.0, 2000.0, 1500.0,
        )))];
        Engine::new(EngineConfig::default(), Metrics::fill(width, 900.0), content)
    }

    #[test]
    fn startup_defaults_on_desktop() {
        let mut e = engine(1600.0);
        assert_eq!(e.startup(""), Changes::all());
        assert!(!e.panel().is_collapsed());
        assert_eq!(e.panel().width(), 352);
        assert_eq!(e.view().viewport_size().width, 1600.0 - 352.0);
        assert_eq!(e.filters().active_flows().collect::<Vec<_>>(), [FlowId::Main]);
        assert!(!e.export_mode());
    }

    #[test]
    fn startup_collapses_on_compact_window() {
        let mut e = engine(900.0);
        e.startup("");
        assert!(e.panel().is_collapsed());
        assert_eq!(e.panel().forced(), None);
        assert_eq!(e.view().viewport_size().width, 900.0);
    }

    #[test]
    fn export_query_collapses_panel() {
        let mut e = engine(1600.0);
        e.startup("?export=1&flows=fiscal&loops=r1");
        assert!(e.export_mode());
        assert!(e.panel().is_collapsed());
        assert_eq!(e.panel().forced(), Some(true));
        assert!(e.filters().is_flow_active(FlowId::Fiscal));
        assert!(!e.filters().is_flow_active(FlowId::Main));
        assert!(e.filters().is_loop_active(LoopId::R1));
    }

    #[test]
    fn wheel_zooms_toward_cursor() {
        let mut e = engine(1600.0);
        e.startup("");
        let cursor = Point::new(300.0, 200.0);
        let before = e.view().view_to_content(cursor);
        assert_eq!(
            e.handle(&Event::Wheel { pos: cursor, delta_y: -1.0 }),
            Changes::TRANSFORM
        );
        assert!((e.view().view_to_content(cursor) - before).hypot() < 1e-9);
    }

    #[test]
    fn splitter_drag_resizes_instead_of_panning() {
        let mut e = engine(1600.0);
        e.startup("");
        let pan = e.view().pan();
        e.handle(&Event::SplitterDown { x: 1248.0 });
        let changes = e.handle(&Event::PointerMove { pos: Point::new(1198.0, 10.0) });
        assert!(changes.contains(Changes::PANEL));
        assert_eq!(e.panel().width(), 402);
        assert_ne!(e.view().pan(), pan);

        e.handle(&Event::PointerUp);
        assert!(!e.session().is_resizing_panel());
        assert_eq!(e.handle(&Event::PointerMove { pos: Point::ORIGIN }), Changes::empty());
    }

    #[test]
    fn touch_end_clears_a_mouse_resize() {
        let mut e = engine(1600.0);
        e.startup("");
        e.handle(&Event::SplitterDown { x: 1000.0 });
        e.handle(&Event::TouchEnd);
        assert!(!e.session().is_resizing_panel());
        assert!(!e.session().is_dragging());
    }

    #[test]
    fn pinch_zooms_around_centroid() {
        let mut e = engine(1600.0);
        e.startup("");
        let start = e.view().scale();
        e.handle(&Event::TouchStart {
            contacts: smallvec![Point::new(100.0, 100.0), Point::new(200.0, 100.0)],
        });
        let centroid = Point::new(150.0, 100.0);
        let before = e.view().view_to_content(centroid);
        e.handle(&Event::TouchMove {
            contacts: smallvec![Point::new(75.0, 100.0), Point::new(225.0, 100.0)],
        });
        assert!((e.view().scale() / start - 1.5).abs() < 1e-9);
        assert!((e.view().view_to_content(centroid) - before).hypot() < 1e-9);
    }

    #[test]
    fn slider_sets_percent_scale() {
        let mut e = engine(1600.0);
        e.startup("");
        e.handle(&Event::ZoomSlider { percent: 250.0 });
        assert_eq!(e.view().scale(), 2.5);
        assert_eq!(e.projection().zoom_text, "250%");
    }

    #[test]
    fn toggles_and_reset_report_filter_changes() {
        let mut e = engine(1600.0);
        e.startup("");
        assert_eq!(e.handle(&Event::ToggleLoop(LoopId::B1)), Changes::FILTERS);
        assert!(e.filters().is_loop_active(LoopId::B1));
        e.handle(&Event::ToggleFlow(FlowId::Main));
        assert!(!e.filters().is_flow_active(FlowId::Main));
        e.handle(&Event::ResetFilters);
        assert_eq!(*e.filters(), mirador_filter::FilterState::default());
    }
}
