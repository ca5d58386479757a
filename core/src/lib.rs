//! Failure isolation for a tree of independently rendered widgets.
//!
//! Every widget on the page is rendered through an [`IsolationBoundary`].
//! A boundary renders its children into a private scratch buffer inside a
//! local catch scope; a failure (an `Err(RenderFailure)` or a panic) flips
//! that one boundary to its failed frame and goes no further.
//!
//! ```text
//! Catalog -> Section -> DemoSlot -> IsolationBoundary -> Content
//!                                                          |
//!                                         Group -> DemoSlot -> ...
//! ```

mod boundary;
mod content;
mod group;
mod marker;
mod page;
mod slot;
mod view;

pub use boundary::{FailureReport, IsolationBoundary, Reporter};
pub use content::{Content, FnContent, WidgetContent, from_fn, render_widget, widget};
pub use group::Group;
pub use marker::Markers;
pub use page::{Catalog, PageView, Section, SectionView, Summary};
pub use slot::{DemoSlot, DemonstrationEntry};
pub use view::{BoundaryView, FRAME_BORDER, FrameStyle, RenderContext, buffer_to_string};

pub use showcase_types::{BoundaryPhase, BoundaryState, NO_MESSAGE_PLACEHOLDER, RenderFailure};
