//! Fill and stroke styles and their assignment commands.
//!
//! A solid [`Color`] is assigned with a single property write. A linear
//! [`Gradient`] is a short script: the gradient object is created on the
//! client, every [`ColorStop`] is added to it in the given order, and the
//! object is then assigned to the style property. Those steps depend on each
//! other and must reach the client contiguously, which is why they are always
//! produced together by [`assign_style`].

use crate::{CanvasHandle, Color, Command, Point, command::CONTEXT};

/// Client-side variable holding the gradient under construction.
const GRADIENT_VAR: &str = "gradient";

/// Which context property a [`Style`] is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum StyleTarget {
    Fill,
    Stroke,
}

impl StyleTarget {
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Fill => "fillStyle",
            Self::Stroke => "strokeStyle",
        }
    }
}

/// A gradient transition point. Offsets are expected in `[0, 1]` but are not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Gradient {
    /// Spans from `origin` to `origin + (width, height)`.
    Linear {
        origin: Point,
        width: f64,
        height: f64,
        stops: Vec<ColorStop>,
    },
}

impl Gradient {
    #[must_use]
    pub const fn linear(origin: Point, width: f64, height: f64) -> Self {
        Self::Linear {
            origin,
            width,
            height,
            stops: Vec::new(),
        }
    }

    /// Appends a color stop after the existing ones.
    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        match &mut self {
            Self::Linear { stops, .. } => stops.push(ColorStop::new(offset, color)),
        }
        self
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::Linear { stops, .. } => stops,
        }
    }
}

/// Fill or stroke appearance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Style {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Style {
    fn from(value: Color) -> Self {
        Self::Solid(value)
    }
}

impl From<Gradient> for Style {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

/// Builds the commands that assign `style` to `target` on `handle`.
///
/// A solid color yields one command. A linear gradient with `n` stops yields
/// `n + 2`: creation, one `addColorStop` per stop in order, assignment.
#[must_use]
pub fn assign_style(handle: &CanvasHandle, target: StyleTarget, style: &Style) -> Vec<Command> {
    let property = target.property();

    match style {
        Style::Solid(color) => vec![
            Command::on(handle, property, format!("{CONTEXT}.{property} = %2"))
                .arg(color.to_string()),
        ],
        Style::Gradient(Gradient::Linear {
            origin,
            width,
            height,
            stops,
        }) => {
            let mut commands = Vec::with_capacity(stops.len() + 2);

            commands.push(
                Command::on(
                    handle,
                    "createLinearGradient",
                    format!("var {GRADIENT_VAR} = {CONTEXT}.createLinearGradient(%2, %3, %4, %5)"),
                )
                .arg(origin.x())
                .arg(origin.y())
                .arg(origin.x() + width)
                .arg(origin.y() + height),
            );

            commands.extend(stops.iter().map(|stop| {
                Command::on(
                    handle,
                    "addColorStop",
                    format!("{GRADIENT_VAR}.addColorStop(%2, %3)"),
                )
                .arg(stop.offset)
                .arg(stop.color.to_string())
            }));

            commands.push(Command::on(
                handle,
                property,
                format!("{CONTEXT}.{property} = {GRADIENT_VAR}"),
            ));

            commands
        }
    }
}
