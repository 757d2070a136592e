//! Builders for single canvas commands.
//!
//! Each builder maps 1:1 onto a `CanvasRenderingContext2D` primitive, in the
//! same units (pixels for lengths, radians for angles). The returned
//! [`Command`] is fire-and-forget: nothing is read back from the client.

use crate::{CanvasHandle, ImageHandle, Point, Style, StyleTarget, TextAlign, style};

/// Template fragment addressing the 2D context of the canvas in `%1`.
pub const CONTEXT: &str = "%1.getContext('2d')";

/// A positional argument of a [`Command`] template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Arg {
    Canvas(CanvasHandle),
    Image(ImageHandle),
    Number(f64),
    Text(String),
    Bool(bool),
    /// A variadic list of numbers, spliced into the call as separate arguments.
    Numbers(Vec<f64>),
}

impl From<&CanvasHandle> for Arg {
    fn from(value: &CanvasHandle) -> Self {
        Self::Canvas(value.clone())
    }
}

impl From<&ImageHandle> for Arg {
    fn from(value: &ImageHandle) -> Self {
        Self::Image(value.clone())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for Arg {
    fn from(value: Vec<f64>) -> Self {
        Self::Numbers(value)
    }
}

/// A remote invocation: a JavaScript template with `%n` placeholders and
/// the arguments that fill them.
///
/// The first argument is always the [`CanvasHandle`] the command targets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Command {
    name: String,
    template: String,
    args: Vec<Arg>,
}

impl Command {
    /// Starts a command against `handle`, which becomes `%1`.
    #[must_use]
    pub fn on(handle: &CanvasHandle, name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            args: vec![Arg::from(handle)],
        }
    }

    /// Appends the next positional argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn point(self, point: Point) -> Self {
        self.arg(point.x()).arg(point.y())
    }

    /// The context method or property this command touches, e.g. `fillRect`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// The canvas this command targets.
    #[must_use]
    pub fn handle(&self) -> Option<&CanvasHandle> {
        match self.args.first() {
            Some(Arg::Canvas(handle)) => Some(handle),
            _ => None,
        }
    }
}

fn call(handle: &CanvasHandle, method: &str, params: &str) -> Command {
    Command::on(handle, method, format!("{CONTEXT}.{method}({params})"))
}

fn assign(handle: &CanvasHandle, property: &str) -> Command {
    Command::on(handle, property, format!("{CONTEXT}.{property} = %2"))
}

/// Fills a `width` x `height` rectangle at `origin` with the current fill style.
#[must_use]
pub fn fill_rect(handle: &CanvasHandle, origin: Point, width: f64, height: f64) -> Command {
    call(handle, "fillRect", "%2, %3, %4, %5")
        .point(origin)
        .arg(width)
        .arg(height)
}

/// Draws a previously loaded image with its top-left corner at `position`.
#[must_use]
pub fn draw_image(handle: &CanvasHandle, image: &ImageHandle, position: Point) -> Command {
    call(handle, "drawImage", "%2, %3, %4")
        .arg(image)
        .point(position)
}

/// Clears the whole drawing surface.
#[must_use]
pub fn clear_canvas(handle: &CanvasHandle) -> Command {
    call(handle, "clearRect", "0, 0, %1.width, %1.height")
}

#[must_use]
pub fn begin_path(handle: &CanvasHandle) -> Command {
    call(handle, "beginPath", "")
}

#[must_use]
pub fn close_path(handle: &CanvasHandle) -> Command {
    call(handle, "closePath", "")
}

#[must_use]
pub fn fill(handle: &CanvasHandle) -> Command {
    call(handle, "fill", "")
}

#[must_use]
pub fn stroke(handle: &CanvasHandle) -> Command {
    call(handle, "stroke", "")
}

#[must_use]
pub fn move_to(handle: &CanvasHandle, point: Point) -> Command {
    call(handle, "moveTo", "%2, %3").point(point)
}

#[must_use]
pub fn line_to(handle: &CanvasHandle, point: Point) -> Command {
    call(handle, "lineTo", "%2, %3").point(point)
}

/// Adds a clockwise arc around `center`. Angles are in radians.
#[must_use]
pub fn arc(
    handle: &CanvasHandle,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Command {
    call(handle, "arc", "%2, %3, %4, %5, %6")
        .point(center)
        .arg(radius)
        .arg(start_angle)
        .arg(end_angle)
}

/// Adds an arc around `center`, anticlockwise when `anticlockwise` is set.
#[must_use]
pub fn arc_with_direction(
    handle: &CanvasHandle,
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    anticlockwise: bool,
) -> Command {
    call(handle, "arc", "%2, %3, %4, %5, %6, %7")
        .point(center)
        .arg(radius)
        .arg(start_angle)
        .arg(end_angle)
        .arg(anticlockwise)
}

/// Issues one `bezierCurveTo` carrying every point flattened, in order.
#[must_use]
pub fn bezier_curve_to(handle: &CanvasHandle, points: &[Point]) -> Command {
    let coordinates = points.iter().flat_map(|p| [p.x(), p.y()]).collect::<Vec<_>>();

    call(handle, "bezierCurveTo", "%2").arg(coordinates)
}

#[must_use]
pub fn quadratic_curve_to(handle: &CanvasHandle, control: Point, end: Point) -> Command {
    call(handle, "quadraticCurveTo", "%2, %3, %4, %5")
        .point(control)
        .point(end)
}

/// Fills `text` at `position` with the current fill style and font.
#[must_use]
pub fn fill_text(handle: &CanvasHandle, text: &str, position: Point) -> Command {
    call(handle, "fillText", "%2, %3, %4")
        .arg(text)
        .point(position)
}

/// Strokes the outline of `text` at `position`.
#[must_use]
pub fn stroke_text(handle: &CanvasHandle, text: &str, position: Point) -> Command {
    call(handle, "strokeText", "%2, %3, %4")
        .arg(text)
        .point(position)
}

#[must_use]
pub fn set_line_width(handle: &CanvasHandle, width: f64) -> Command {
    assign(handle, "lineWidth").arg(width)
}

/// Sets the CSS font used by text commands, e.g. `"bold 12px sans-serif"`.
#[must_use]
pub fn set_text_font(handle: &CanvasHandle, font: &str) -> Command {
    assign(handle, "font").arg(font)
}

#[must_use]
pub fn set_text_align(handle: &CanvasHandle, align: TextAlign) -> Command {
    assign(handle, "textAlign").arg(align.as_ref())
}

/// Assigns `style` to `fillStyle`. Gradients take several commands.
#[must_use]
pub fn set_fill_style(handle: &CanvasHandle, style: &Style) -> Vec<Command> {
    style::assign_style(handle, StyleTarget::Fill, style)
}

/// Assigns `style` to `strokeStyle`. Gradients take several commands.
#[must_use]
pub fn set_stroke_style(handle: &CanvasHandle, style: &Style) -> Vec<Command> {
    style::assign_style(handle, StyleTarget::Stroke, style)
}
