//! Shared contract types between the desktop window manager and the content it hosts.
//!
//! The window manager stores a [`WindowContent`] handle per window and never looks inside it; the
//! window view asks the handle to render into a managed window body. Content can read advisory
//! [`ContentMetrics`] for the rendered body through [`use_content_metrics`] to adapt its internal
//! layout. Metrics never feed back into window geometry.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::{provide_context, use_context, Signal, View};
use serde::{Deserialize, Serialize};

/// Render capability implemented by anything that can fill a managed window body.
///
/// Each UI layer provides its own implementation; closures of the right shape implement it
/// directly.
pub trait RenderWindowContent {
    /// Builds the view for one mount of a window body.
    fn render(&self, context: ContentMountContext) -> View;
}

impl<F> RenderWindowContent for F
where
    F: Fn(ContentMountContext) -> View,
{
    fn render(&self, context: ContentMountContext) -> View {
        self(context)
    }
}

#[derive(Clone)]
/// Per-mount inputs handed to [`RenderWindowContent::render`].
pub struct ContentMountContext {
    /// Identity of the window hosting the content.
    pub window_id: String,
    /// Live size metrics of the window body.
    pub metrics: Signal<ContentMetrics>,
}

#[derive(Clone)]
/// Opaque, cheaply clonable render payload owned by a window record.
pub struct WindowContent(Rc<dyn RenderWindowContent>);

impl WindowContent {
    /// Wraps a render capability.
    pub fn new(content: impl RenderWindowContent + 'static) -> Self {
        Self(Rc::new(content))
    }

    /// Renders the payload into a view.
    pub fn render(&self, context: ContentMountContext) -> View {
        self.0.render(context)
    }

    /// Returns whether both handles point at the same payload.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0).cast::<()>() == Rc::as_ptr(&other.0).cast::<()>()
    }
}

impl PartialEq for WindowContent {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for WindowContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowContent(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Pixel thresholds below which content is reported as narrow or short.
pub struct ContentBreakpoints {
    /// Width (px) under which [`ContentMetrics::is_narrow`] is set.
    pub narrow_px: f64,
    /// Height (px) under which [`ContentMetrics::is_short`] is set.
    pub short_px: f64,
}

impl Default for ContentBreakpoints {
    fn default() -> Self {
        Self {
            narrow_px: 560.0,
            short_px: 420.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Rendered size of a window body, in CSS pixels.
pub struct ContentMetrics {
    /// Body width.
    pub width: f64,
    /// Body height.
    pub height: f64,
    /// Body is narrower than the configured breakpoint.
    pub is_narrow: bool,
    /// Body is shorter than the configured breakpoint.
    pub is_short: bool,
}

impl ContentMetrics {
    /// Derives metrics for a measured body size.
    pub fn measure(width: f64, height: f64, breakpoints: ContentBreakpoints) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            is_narrow: width < breakpoints.narrow_px,
            is_short: height < breakpoints.short_px,
        }
    }
}

#[derive(Clone, Copy)]
struct ContentMetricsContext(Signal<ContentMetrics>);

/// Publishes body metrics to descendant content.
pub fn provide_content_metrics(metrics: impl Into<Signal<ContentMetrics>>) {
    provide_context(ContentMetricsContext(metrics.into()));
}

/// Returns the metrics of the enclosing window body.
///
/// Outside a managed window this yields a constant default (zero size, not narrow or short).
pub fn use_content_metrics() -> Signal<ContentMetrics> {
    use_context::<ContentMetricsContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(ContentMetrics::default))
}
