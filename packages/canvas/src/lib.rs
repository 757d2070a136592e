//! Typed drawing commands for a browser canvas driven from the server.
//!
//! Application logic runs on the server and the browser owns the actual
//! `<canvas>` element. Every operation in this crate is a pure translation
//! from a typed call into a [`Command`]: a JavaScript template with
//! positional `%n` placeholders plus the arguments that fill them, the first
//! of which is always the target [`CanvasHandle`]. Commands are batched into a
//! [`CanvasUpdate`] and handed to a [`CanvasTransport`], which delivers them
//! to the client in order.
//!
//! # Main types
//!
//! * [`command`] - One builder per `CanvasRenderingContext2D` primitive
//! * [`Style`] - Solid color or linear gradient fill/stroke style
//! * [`Drawing`] / [`DrawingPath`] - Composable, replayable step sequences
//! * [`RemoteCanvas`] - A handle paired with a transport
//!
//! # Example
//!
//! ```rust
//! use remote_canvas::{CanvasHandle, Color, Point, Style, drawing};
//!
//! let triangle = drawing::closed_path(
//!     Style::from(Color::BLACK),
//!     2.0,
//!     drawing::path([Point(0.0, 0.0), Point(10.0, 0.0), Point(5.0, 8.0)]),
//! );
//!
//! let commands = triangle.commands(&CanvasHandle::new("board"));
//! assert_eq!(commands.len(), 8);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

pub mod canvas;
pub mod command;
pub mod drawing;
pub mod script;
pub mod style;
pub mod text;
pub mod transport;
pub mod update;

pub use log;

pub use canvas::{RemoteCanvas, render_drawing};
pub use command::{Arg, Command};
pub use drawing::{Drawing, DrawingPath};
pub use remote_canvas_color::{Color, ParseColorError};
pub use style::{ColorStop, Gradient, Style, StyleTarget};
pub use text::TextAlign;
pub use transport::{CanvasTransport, ChannelTransport, RecordingTransport, TransportError};
pub use update::CanvasUpdate;

/// Logs the short message at debug level, or the detailed one when trace is
/// enabled.
#[macro_export]
macro_rules! debug_or_trace {
    (($($debug:tt)+), ($($trace:tt)+)) => {
        if $crate::log::log_enabled!($crate::log::Level::Trace) {
            $crate::log::trace!($($trace)*);
        } else {
            $crate::log::debug!($($debug)*);
        }
    }
}

/// A position on the canvas in pixels, `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(pub f64, pub f64);

impl Point {
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self(x, y)
    }
}

/// Opaque reference to a client-side `<canvas>` element.
///
/// Wraps the DOM id the caller's element layer assigned to the canvas. This
/// crate never creates the element itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CanvasHandle(String);

impl CanvasHandle {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanvasHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to an already loaded client-side `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageHandle(String);

impl ImageHandle {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}
