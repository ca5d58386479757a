//! The isolation boundary: renders children under supervision and contains
//! their failures.
//!
//! # State machine
//!
//! ```text
//! Healthy --capture_failure--> Failed
//! ```
//!
//! `Failed` is terminal for the instance. A failed boundary never invokes its
//! children again; recovery means constructing a new boundary.
//!
//! # Catch scope
//!
//! Each render of a healthy boundary runs its children inside its own
//! `catch_unwind` and into its own scratch buffer. Only failures raised
//! synchronously during that call are caught, and only this boundary's state
//! changes. A nested boundary catches first, so an outer boundary never sees
//! failures its descendants already contained.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Wrap},
};
use tracing::{debug, warn};

use showcase_types::{BoundaryPhase, BoundaryState, NO_MESSAGE_PLACEHOLDER, RenderFailure};

use crate::content::{Content, render_widget};
use crate::view::{BoundaryView, FRAME_BORDER, RenderContext, fit_width};

/// What a reporter is told when a boundary captures a failure.
#[derive(Debug, Clone, Copy)]
pub struct FailureReport<'a> {
    pub label: &'a str,
    pub failure: &'a RenderFailure,
}

/// Failure-capture callback shared by a boundary and its replacements.
#[derive(Clone)]
pub struct Reporter(Rc<dyn Fn(&FailureReport<'_>)>);

impl Reporter {
    pub fn new(report: impl Fn(&FailureReport<'_>) + 'static) -> Self {
        Self(Rc::new(report))
    }

    /// Logs the failure through `tracing`.
    #[must_use]
    pub fn log() -> Self {
        Self::new(|report| {
            warn!(
                label = report.label,
                message = report.failure.display_message(),
                "Widget render failed"
            );
        })
    }

    fn report(&self, report: &FailureReport<'_>) {
        (self.0)(report);
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::log()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reporter(..)")
    }
}

#[derive(Debug)]
pub struct IsolationBoundary {
    label: String,
    state: BoundaryState,
    reporter: Reporter,
}

impl IsolationBoundary {
    /// A healthy boundary. Any label is accepted, including the empty string.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: BoundaryState::default(),
            reporter: Reporter::default(),
        }
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn set_reporter(&mut self, reporter: Reporter) {
        self.reporter = reporter;
    }

    #[must_use]
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn state(&self) -> &BoundaryState {
        &self.state
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.state.has_failed()
    }

    /// Renders `children` in a healthy frame, or the failed frame once a
    /// failure has been captured.
    ///
    /// A failure raised by `children` during this call is captured and the
    /// failed frame is returned in its place; it never propagates to the
    /// caller.
    pub fn render(&mut self, children: &mut dyn Content, ctx: &RenderContext) -> BoundaryView {
        let inner = ctx.with_width(ctx.width.saturating_sub(FRAME_BORDER));
        if self.state.has_failed() {
            return self.failed_view(&inner);
        }

        let attempt = panic::catch_unwind(AssertUnwindSafe(|| children.render(&inner)));
        let failure = match attempt {
            Ok(Ok(body)) => return self.healthy_view(fit_width(body, inner.width), &inner),
            Ok(Err(failure)) => failure,
            Err(payload) => RenderFailure::from_panic(payload.as_ref()),
        };

        self.capture_failure(failure);
        self.failed_view(&inner)
    }

    /// Records `failure` and reports it. Ignored once the boundary has failed.
    ///
    /// A panicking reporter is contained here; the boundary still fails.
    pub fn capture_failure(&mut self, failure: RenderFailure) {
        if self.state.has_failed() {
            debug!(label = %self.label, "Boundary already failed; ignoring capture");
            return;
        }
        let report = FailureReport {
            label: &self.label,
            failure: &failure,
        };
        let reported = panic::catch_unwind(AssertUnwindSafe(|| self.reporter.report(&report)));
        if let Err(payload) = reported {
            warn!(
                label = %self.label,
                reporter_message = RenderFailure::from_panic(payload.as_ref()).display_message(),
                "Failure reporter panicked; report dropped"
            );
        }
        self.state.record_failure(failure);
    }

    fn healthy_view(&self, body: Buffer, ctx: &RenderContext) -> BoundaryView {
        let title = format!("{} {}", ctx.markers.healthy, self.label);
        BoundaryView::new(
            BoundaryPhase::Healthy,
            self.label.clone(),
            title,
            body,
            ctx.frame_style(BoundaryPhase::Healthy),
        )
    }

    fn failed_view(&self, ctx: &RenderContext) -> BoundaryView {
        let message = self
            .state
            .failure_message()
            .unwrap_or(NO_MESSAGE_PLACEHOLDER);
        let paragraph = Paragraph::new(Text::styled(message.to_string(), ctx.message))
            .wrap(Wrap { trim: false });
        let height = u16::try_from(paragraph.line_count(ctx.width))
            .unwrap_or(u16::MAX)
            .max(1);
        let body = if ctx.width == 0 {
            Buffer::empty(Rect::new(0, 0, 0, height))
        } else {
            render_widget(paragraph, ctx.width, height)
        };
        let title = format!("{} {} failed", ctx.markers.failed, self.label);
        BoundaryView::new(
            BoundaryPhase::Failed,
            self.label.clone(),
            title,
            body,
            ctx.frame_style(BoundaryPhase::Failed),
        )
    }
}
