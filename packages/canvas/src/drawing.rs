//! Composable drawings.
//!
//! A [`Drawing`] is an ordered list of [`Step`]s that is replayed against a
//! [`CanvasHandle`] in one go. Drawings form a monoid: [`Drawing::empty`] is
//! the identity and [`Drawing::then`] (also `+`) replays the left operand
//! completely before the right one. Both laws hold exactly since composition
//! is list concatenation.
//!
//! A [`DrawingPath`] is the same structure restricted to path-building
//! [`PathStep`]s. It only becomes a drawing through [`closed_path`],
//! [`opened_path`] or [`filled_path`], which add the begin/close/style/stroke
//! framing around it.
//!
//! No geometry is computed here. Steps are interpreted by the client canvas.

use std::ops::{Add, AddAssign};

use crate::{
    CanvasHandle, Command, ImageHandle, Point, Style, StyleTarget, TextAlign, command, style,
};

/// A path-building step. Never fills or strokes by itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PathStep {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc. Angles are in radians.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    BezierCurveTo(Vec<Point>),
    QuadraticCurveTo {
        control: Point,
        end: Point,
    },
}

impl PathStep {
    #[must_use]
    pub fn command(&self, handle: &CanvasHandle) -> Command {
        match self {
            Self::MoveTo(point) => command::move_to(handle, *point),
            Self::LineTo(point) => command::line_to(handle, *point),
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => command::arc(handle, *center, *radius, *start_angle, *end_angle),
            Self::BezierCurveTo(points) => command::bezier_curve_to(handle, points),
            Self::QuadraticCurveTo { control, end } => {
                command::quadratic_curve_to(handle, *control, *end)
            }
        }
    }
}

/// A single draw step of a [`Drawing`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Step {
    /// A path-building step. Only produced inside the begin/stroke framing
    /// added by [`closed_path`], [`opened_path`] and [`filled_path`].
    Path(PathStep),
    BeginPath,
    ClosePath,
    LineWidth(f64),
    Style(StyleTarget, Style),
    Stroke,
    Fill,
    FillRect {
        origin: Point,
        width: f64,
        height: f64,
    },
    Font(String),
    TextAlign(TextAlign),
    FillText {
        text: String,
        position: Point,
    },
    StrokeText {
        text: String,
        position: Point,
    },
    Image {
        image: ImageHandle,
        position: Point,
    },
    Clear,
}

impl Step {
    /// Appends the commands for this step. Style steps may produce several.
    pub fn write_commands(&self, handle: &CanvasHandle, commands: &mut Vec<Command>) {
        let command = match self {
            Self::Path(step) => step.command(handle),
            Self::BeginPath => command::begin_path(handle),
            Self::ClosePath => command::close_path(handle),
            Self::LineWidth(width) => command::set_line_width(handle, *width),
            Self::Style(target, value) => {
                commands.extend(style::assign_style(handle, *target, value));
                return;
            }
            Self::Stroke => command::stroke(handle),
            Self::Fill => command::fill(handle),
            Self::FillRect {
                origin,
                width,
                height,
            } => command::fill_rect(handle, *origin, *width, *height),
            Self::Font(font) => command::set_text_font(handle, font),
            Self::TextAlign(align) => command::set_text_align(handle, *align),
            Self::FillText { text, position } => command::fill_text(handle, text, *position),
            Self::StrokeText { text, position } => command::stroke_text(handle, text, *position),
            Self::Image { image, position } => command::draw_image(handle, image, *position),
            Self::Clear => command::clear_canvas(handle),
        };

        commands.push(command);
    }
}

macro_rules! impl_sequence {
    ($name:ident, $step:ty) => {
        impl $name {
            /// The identity element: replays nothing.
            #[must_use]
            pub const fn empty() -> Self {
                Self { steps: Vec::new() }
            }

            #[must_use]
            pub(crate) fn from_steps(steps: impl IntoIterator<Item = $step>) -> Self {
                Self {
                    steps: steps.into_iter().collect(),
                }
            }

            #[must_use]
            pub fn steps(&self) -> &[$step] {
                &self.steps
            }

            #[must_use]
            pub fn len(&self) -> usize {
                self.steps.len()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.steps.is_empty()
            }

            /// Sequences `other` after `self`.
            #[must_use]
            pub fn then(mut self, other: Self) -> Self {
                self.steps.extend(other.steps);
                self
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                self.then(rhs)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.steps.extend(rhs.steps);
            }
        }

        impl FromIterator<$name> for $name {
            fn from_iter<T: IntoIterator<Item = $name>>(iter: T) -> Self {
                iter.into_iter().fold(Self::empty(), Self::then)
            }
        }

        impl Extend<$name> for $name {
            fn extend<T: IntoIterator<Item = $name>>(&mut self, iter: T) {
                for other in iter {
                    *self += other;
                }
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.collect()
            }
        }
    };
}

/// An in-progress path: path-building steps without any begin, close, fill
/// or stroke.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawingPath {
    steps: Vec<PathStep>,
}

impl_sequence!(DrawingPath, PathStep);

impl From<PathStep> for DrawingPath {
    fn from(value: PathStep) -> Self {
        Self::from_steps([value])
    }
}

impl DrawingPath {
    /// The commands of the path steps alone, in order.
    #[must_use]
    pub fn commands(&self, handle: &CanvasHandle) -> Vec<Command> {
        self.steps.iter().map(|step| step.command(handle)).collect()
    }
}

/// A replayable sequence of draw steps.
///
/// Drawings are only built through the functions of this module, so any
/// [`Step::Path`] they contain sits inside a begin/stroke or begin/fill pair.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drawing {
    steps: Vec<Step>,
}

impl_sequence!(Drawing, Step);

impl Drawing {
    /// Replays every step against `handle`, in composition order.
    #[must_use]
    pub fn commands(&self, handle: &CanvasHandle) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            step.write_commands(handle, &mut commands);
        }

        commands
    }
}

/// Moves to `start` and draws a straight segment to `end`.
#[must_use]
pub fn line(start: Point, end: Point) -> DrawingPath {
    DrawingPath::from_steps([PathStep::MoveTo(start), PathStep::LineTo(end)])
}

/// Moves to the first point and draws straight segments through the rest.
///
/// Empty when `points` is empty.
#[must_use]
pub fn path(points: impl IntoIterator<Item = Point>) -> DrawingPath {
    DrawingPath::from_steps(points.into_iter().enumerate().map(|(i, point)| {
        if i == 0 {
            PathStep::MoveTo(point)
        } else {
            PathStep::LineTo(point)
        }
    }))
}

/// A single bezier curve step carrying every control and end point in order.
#[must_use]
pub fn bezier_curve(points: impl IntoIterator<Item = Point>) -> DrawingPath {
    PathStep::BezierCurveTo(points.into_iter().collect()).into()
}

#[must_use]
pub fn quadratic_curve(control: Point, end: Point) -> DrawingPath {
    PathStep::QuadraticCurveTo { control, end }.into()
}

/// A clockwise arc around `center`. Angles are in radians.
#[must_use]
pub fn arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> DrawingPath {
    PathStep::Arc {
        center,
        radius,
        start_angle,
        end_angle,
    }
    .into()
}

/// Repositions the path cursor without drawing a segment.
#[must_use]
pub fn move_to(point: Point) -> DrawingPath {
    PathStep::MoveTo(point).into()
}

fn stroked(style: Style, width: f64, path: DrawingPath, close: bool) -> Drawing {
    let mut steps = Vec::with_capacity(path.len() + 5);

    steps.push(Step::BeginPath);
    steps.extend(path.steps.into_iter().map(Step::Path));
    if close {
        steps.push(Step::ClosePath);
    }
    steps.push(Step::LineWidth(width));
    steps.push(Step::Style(StyleTarget::Stroke, style));
    steps.push(Step::Stroke);

    Drawing { steps }
}

/// Strokes `path` after closing it back to its start.
#[must_use]
pub fn closed_path(style: Style, width: f64, path: DrawingPath) -> Drawing {
    stroked(style, width, path, true)
}

/// Strokes `path` without closing it.
#[must_use]
pub fn opened_path(style: Style, width: f64, path: DrawingPath) -> Drawing {
    stroked(style, width, path, false)
}

/// Closes `path` and fills its interior.
#[must_use]
pub fn filled_path(style: Style, path: DrawingPath) -> Drawing {
    let mut steps = Vec::with_capacity(path.len() + 4);

    steps.push(Step::BeginPath);
    steps.extend(path.steps.into_iter().map(Step::Path));
    steps.push(Step::ClosePath);
    steps.push(Step::Style(StyleTarget::Fill, style));
    steps.push(Step::Fill);

    Drawing { steps }
}

#[must_use]
pub fn filled_rect(style: Style, origin: Point, width: f64, height: f64) -> Drawing {
    Drawing::from_steps([
        Step::Style(StyleTarget::Fill, style),
        Step::FillRect {
            origin,
            width,
            height,
        },
    ])
}

/// Fills `text` at `position` using `font` and `align`.
#[must_use]
pub fn fill_text(
    style: Style,
    font: &str,
    align: TextAlign,
    text: &str,
    position: Point,
) -> Drawing {
    Drawing::from_steps([
        Step::Style(StyleTarget::Fill, style),
        Step::Font(font.to_string()),
        Step::TextAlign(align),
        Step::FillText {
            text: text.to_string(),
            position,
        },
    ])
}

/// Strokes the outline of `text` at `position` using `font` and `align`.
#[must_use]
pub fn stroke_text(
    style: Style,
    font: &str,
    align: TextAlign,
    text: &str,
    position: Point,
) -> Drawing {
    Drawing::from_steps([
        Step::Style(StyleTarget::Stroke, style),
        Step::Font(font.to_string()),
        Step::TextAlign(align),
        Step::StrokeText {
            text: text.to_string(),
            position,
        },
    ])
}

#[must_use]
pub fn image(image: ImageHandle, position: Point) -> Drawing {
    Drawing::from_steps([Step::Image { image, position }])
}

#[must_use]
pub fn clear() -> Drawing {
    Drawing::from_steps([Step::Clear])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{Arg, Color, Gradient};

    fn handle() -> CanvasHandle {
        CanvasHandle::new("canvas")
    }

    fn names(commands: &[Command]) -> Vec<&str> {
        commands.iter().map(Command::name).collect()
    }

    fn triangle() -> DrawingPath {
        path([Point(0.0, 0.0), Point(10.0, 0.0), Point(5.0, 8.0)])
    }

    #[test_log::test]
    fn empty_path_renders_no_commands() {
        assert!(path([]).is_empty());
        assert!(path([]).commands(&handle()).is_empty());
    }

    #[test_log::test]
    fn path_moves_to_first_point_then_draws_lines() {
        let commands = triangle().commands(&handle());

        assert_eq!(names(&commands), vec!["moveTo", "lineTo", "lineTo"]);
        assert_eq!(
            commands[2].args()[1..],
            [Arg::Number(5.0), Arg::Number(8.0)]
        );
    }

    #[test_log::test]
    fn line_is_move_then_line() {
        assert_eq!(
            line(Point(1.0, 1.0), Point(2.0, 2.0)),
            move_to(Point(1.0, 1.0)) + DrawingPath::from(PathStep::LineTo(Point(2.0, 2.0)))
        );
    }

    #[test_log::test]
    fn closed_path_frames_the_path_and_strokes() {
        let drawing = closed_path(Style::from(Color::BLACK), 2.0, triangle());

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec![
                "beginPath",
                "moveTo",
                "lineTo",
                "lineTo",
                "closePath",
                "lineWidth",
                "strokeStyle",
                "stroke",
            ]
        );
    }

    #[test_log::test]
    fn opened_path_omits_close_path() {
        let drawing = opened_path(Style::from(Color::BLACK), 2.0, triangle());

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec![
                "beginPath",
                "moveTo",
                "lineTo",
                "lineTo",
                "lineWidth",
                "strokeStyle",
                "stroke",
            ]
        );
    }

    #[test_log::test]
    fn closed_path_with_gradient_inlines_gradient_script() {
        let gradient = Gradient::linear(Point(0.0, 0.0), 10.0, 10.0)
            .with_stop(0.0, Color::BLACK)
            .with_stop(1.0, Color::WHITE);
        let drawing = closed_path(gradient.into(), 1.0, line(Point(0.0, 0.0), Point(1.0, 1.0)));

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec![
                "beginPath",
                "moveTo",
                "lineTo",
                "closePath",
                "lineWidth",
                "createLinearGradient",
                "addColorStop",
                "addColorStop",
                "strokeStyle",
                "stroke",
            ]
        );
    }

    #[test_log::test]
    fn filled_path_closes_and_fills() {
        let drawing = filled_path(Style::from(Color::WHITE), triangle());

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec![
                "beginPath",
                "moveTo",
                "lineTo",
                "lineTo",
                "closePath",
                "fillStyle",
                "fill",
            ]
        );
    }

    #[test_log::test]
    fn bezier_curve_is_a_single_step_with_all_points() {
        let curve = bezier_curve([Point(1.0, 2.0), Point(3.0, 4.0), Point(5.0, 6.0)]);
        let commands = curve.commands(&handle());

        assert_eq!(curve.len(), 1);
        assert_eq!(
            commands[0].args()[1],
            Arg::Numbers(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        );
    }

    #[test_log::test]
    fn arc_is_clockwise_with_five_arguments() {
        let commands = arc(Point(1.0, 1.0), 3.0, 0.0, 1.5).commands(&handle());

        assert_eq!(commands[0].name(), "arc");
        assert_eq!(commands[0].args().len(), 6);
    }

    #[test_log::test]
    fn text_drawing_sets_font_and_alignment_before_text() {
        let drawing = fill_text(
            Style::from(Color::BLACK),
            "12px sans-serif",
            TextAlign::Center,
            "score",
            Point(50.0, 10.0),
        ) + stroke_text(
            Style::from(Color::WHITE),
            "12px sans-serif",
            TextAlign::Left,
            "score",
            Point(50.0, 10.0),
        );

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec![
                "fillStyle",
                "font",
                "textAlign",
                "fillText",
                "strokeStyle",
                "font",
                "textAlign",
                "strokeText",
            ]
        );
    }

    #[test_log::test]
    fn composition_preserves_order_without_deduplication() {
        let drawing: Drawing = [clear(), clear(), image(ImageHandle::new("img"), Point(0.0, 0.0))]
            .into_iter()
            .sum();

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec!["clearRect", "clearRect", "drawImage"]
        );
    }

    #[test_log::test]
    fn path_composition_preserves_order() {
        let combined: DrawingPath = [move_to(Point(1.0, 1.0)), triangle(), arc(Point(0.0, 0.0), 1.0, 0.0, 1.0)]
            .into_iter()
            .collect();

        assert_eq!(
            names(&combined.commands(&handle())),
            vec!["moveTo", "moveTo", "lineTo", "lineTo", "arc"]
        );
    }

    #[test_log::test]
    fn add_assign_and_extend_append_in_order() {
        let mut drawing = clear();
        drawing += filled_rect(Style::from(Color::BLACK), Point(0.0, 0.0), 1.0, 1.0);
        drawing.extend([clear()]);

        assert_eq!(
            names(&drawing.commands(&handle())),
            vec!["clearRect", "fillStyle", "fillRect", "clearRect"]
        );
    }

    #[test_log::test]
    fn path_steps_are_always_framed_by_begin_and_finish() {
        let drawings = [
            closed_path(Style::from(Color::BLACK), 1.0, triangle()),
            opened_path(Style::from(Color::BLACK), 1.0, triangle()),
            filled_path(Style::from(Color::BLACK), triangle()),
        ];

        for drawing in drawings {
            let steps = drawing.steps();
            let first = steps.iter().position(|step| matches!(step, Step::Path(_)));
            let last = steps.iter().rposition(|step| matches!(step, Step::Path(_)));
            let (Some(first), Some(last)) = (first, last) else {
                panic!("no path steps in {drawing:?}");
            };

            assert!(steps[..first].contains(&Step::BeginPath));
            assert!(
                steps[last + 1..]
                    .iter()
                    .any(|step| matches!(step, Step::Stroke | Step::Fill))
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn unknown_text_align_step_decodes_to_start() {
        assert_eq!(
            serde_json::from_str::<Step>(r#"{"textAlign":"bogus"}"#).unwrap(),
            Step::TextAlign(TextAlign::Start)
        );
        assert_eq!(
            serde_json::from_str::<Step>(r#"{"textAlign":"center"}"#).unwrap(),
            Step::TextAlign(TextAlign::Center)
        );
    }

    fn point() -> impl Strategy<Value = Point> {
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point(x, y))
    }

    fn path_step() -> impl Strategy<Value = PathStep> {
        prop_oneof![
            point().prop_map(PathStep::MoveTo),
            point().prop_map(PathStep::LineTo),
            (point(), 0.0..100.0f64, 0.0..7.0f64, 0.0..7.0f64).prop_map(
                |(center, radius, start_angle, end_angle)| PathStep::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                }
            ),
            prop::collection::vec(point(), 0..4).prop_map(PathStep::BezierCurveTo),
        ]
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            path_step().prop_map(Step::Path),
            Just(Step::BeginPath),
            Just(Step::ClosePath),
            Just(Step::Stroke),
            Just(Step::Fill),
            (0.0..10.0f64).prop_map(Step::LineWidth),
            any::<Color>().prop_map(|color| Step::Style(StyleTarget::Fill, color.into())),
        ]
    }

    fn drawing_path() -> impl Strategy<Value = DrawingPath> {
        prop::collection::vec(path_step(), 0..8).prop_map(DrawingPath::from_steps)
    }

    fn drawing() -> impl Strategy<Value = Drawing> {
        prop::collection::vec(step(), 0..8).prop_map(Drawing::from_steps)
    }

    proptest! {
        #[test]
        fn composition_is_associative(a in drawing(), b in drawing(), c in drawing()) {
            let left = (a.clone() + b.clone()) + c.clone();
            let right = a + (b + c);

            prop_assert_eq!(left.commands(&handle()), right.commands(&handle()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn empty_is_a_two_sided_identity(a in drawing()) {
            prop_assert_eq!(a.clone() + Drawing::empty(), a.clone());
            prop_assert_eq!(Drawing::empty() + a.clone(), a.clone());
            prop_assert_eq!(
                (Drawing::empty() + a.clone()).commands(&handle()),
                a.commands(&handle())
            );
        }

        #[test]
        fn path_composition_is_associative(
            a in drawing_path(),
            b in drawing_path(),
            c in drawing_path(),
        ) {
            let left = (a.clone() + b.clone()) + c.clone();
            let right = a + (b + c);

            prop_assert_eq!(left.commands(&handle()), right.commands(&handle()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn empty_path_is_a_two_sided_identity(a in drawing_path()) {
            prop_assert_eq!(a.clone() + DrawingPath::empty(), a.clone());
            prop_assert_eq!(DrawingPath::empty() + a.clone(), a.clone());
            prop_assert_eq!(
                (a.clone() + DrawingPath::empty()).commands(&handle()),
                a.commands(&handle())
            );
        }

        #[test]
        fn rendered_commands_are_the_concatenation(a in drawing(), b in drawing()) {
            let mut expected = a.commands(&handle());
            expected.extend(b.commands(&handle()));

            prop_assert_eq!((a + b).commands(&handle()), expected);
        }
    }
}
