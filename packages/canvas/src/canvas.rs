//! A canvas handle bound to a transport.

use crate::{
    CanvasHandle, CanvasTransport, CanvasUpdate, Command, Drawing, ImageHandle, Point, Style,
    TextAlign, TransportError, command,
};

/// Replays `drawing` against `handle` and hands the resulting commands to
/// `transport` as a single [`CanvasUpdate`].
///
/// Nothing is sent when the drawing produces no commands.
///
/// # Errors
///
/// * If the transport fails to deliver the update
pub async fn render_drawing<T: CanvasTransport + ?Sized>(
    transport: &T,
    handle: &CanvasHandle,
    drawing: &Drawing,
) -> Result<(), TransportError> {
    log::trace!("render_drawing: target={handle} steps={}", drawing.len());

    let update = CanvasUpdate::from_drawing(handle.clone(), drawing);

    if update.is_empty() {
        log::debug!("render_drawing: nothing to draw on {handle}");
        return Ok(());
    }

    log::debug!(
        "render_drawing: sending {} commands to {handle}",
        update.len()
    );

    transport.send(update).await
}

/// Issues commands against one canvas through a [`CanvasTransport`].
///
/// Every method sends exactly one update, so multi-command operations such as
/// gradient assignment reach the client without anything in between.
#[derive(Debug, Clone)]
pub struct RemoteCanvas<T: CanvasTransport> {
    handle: CanvasHandle,
    transport: T,
}

impl<T: CanvasTransport> RemoteCanvas<T> {
    #[must_use]
    pub const fn new(handle: CanvasHandle, transport: T) -> Self {
        Self { handle, transport }
    }

    #[must_use]
    pub const fn handle(&self) -> &CanvasHandle {
        &self.handle
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a single command.
    ///
    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn run(&self, command: Command) -> Result<(), TransportError> {
        self.run_all(vec![command]).await
    }

    /// Sends `commands` as one update, in order. Nothing is sent when empty.
    ///
    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn run_all(&self, commands: Vec<Command>) -> Result<(), TransportError> {
        if commands.is_empty() {
            return Ok(());
        }

        let mut update = CanvasUpdate::new(self.handle.clone());
        update.extend(commands);

        self.transport.send(update).await
    }

    /// Replays `drawing` on this canvas.
    ///
    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn render(&self, drawing: &Drawing) -> Result<(), TransportError> {
        render_drawing(&self.transport, &self.handle, drawing).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn fill_rect(
        &self,
        origin: Point,
        width: f64,
        height: f64,
    ) -> Result<(), TransportError> {
        self.run(command::fill_rect(&self.handle, origin, width, height))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn draw_image(
        &self,
        image: &ImageHandle,
        position: Point,
    ) -> Result<(), TransportError> {
        self.run(command::draw_image(&self.handle, image, position))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn clear(&self) -> Result<(), TransportError> {
        self.run(command::clear_canvas(&self.handle)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn begin_path(&self) -> Result<(), TransportError> {
        self.run(command::begin_path(&self.handle)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn close_path(&self) -> Result<(), TransportError> {
        self.run(command::close_path(&self.handle)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn move_to(&self, point: Point) -> Result<(), TransportError> {
        self.run(command::move_to(&self.handle, point)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn line_to(&self, point: Point) -> Result<(), TransportError> {
        self.run(command::line_to(&self.handle, point)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn arc(
        &self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), TransportError> {
        self.run(command::arc(
            &self.handle,
            center,
            radius,
            start_angle,
            end_angle,
        ))
        .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn arc_with_direction(
        &self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Result<(), TransportError> {
        self.run(command::arc_with_direction(
            &self.handle,
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        ))
        .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn bezier_curve_to(&self, points: &[Point]) -> Result<(), TransportError> {
        self.run(command::bezier_curve_to(&self.handle, points))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn quadratic_curve_to(
        &self,
        control: Point,
        end: Point,
    ) -> Result<(), TransportError> {
        self.run(command::quadratic_curve_to(&self.handle, control, end))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn fill(&self) -> Result<(), TransportError> {
        self.run(command::fill(&self.handle)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn stroke(&self) -> Result<(), TransportError> {
        self.run(command::stroke(&self.handle)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn fill_text(&self, text: &str, position: Point) -> Result<(), TransportError> {
        self.run(command::fill_text(&self.handle, text, position))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn stroke_text(&self, text: &str, position: Point) -> Result<(), TransportError> {
        self.run(command::stroke_text(&self.handle, text, position))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn set_line_width(&self, width: f64) -> Result<(), TransportError> {
        self.run(command::set_line_width(&self.handle, width)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn set_text_font(&self, font: &str) -> Result<(), TransportError> {
        self.run(command::set_text_font(&self.handle, font)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn set_text_align(&self, align: TextAlign) -> Result<(), TransportError> {
        self.run(command::set_text_align(&self.handle, align)).await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn set_fill_style(&self, style: &Style) -> Result<(), TransportError> {
        self.run_all(command::set_fill_style(&self.handle, style))
            .await
    }

    /// # Errors
    ///
    /// * If the transport fails to deliver the update
    pub async fn set_stroke_style(&self, style: &Style) -> Result<(), TransportError> {
        self.run_all(command::set_stroke_style(&self.handle, style))
            .await
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ChannelTransport, Color, Gradient, RecordingTransport, drawing};

    fn canvas() -> RemoteCanvas<RecordingTransport> {
        RemoteCanvas::new(CanvasHandle::new("board"), RecordingTransport::new())
    }

    fn names(update: &CanvasUpdate) -> Vec<&str> {
        update.commands.iter().map(Command::name).collect()
    }

    #[test_log::test(tokio::test)]
    async fn drawing_arrives_as_one_ordered_update() {
        let canvas = canvas();
        let drawing = drawing::clear()
            + drawing::closed_path(
                Style::from(Color::BLACK),
                1.0,
                drawing::path([Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 1.0)]),
            );

        canvas.render(&drawing).await.unwrap();

        let updates = canvas.transport().updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].target, CanvasHandle::new("board"));
        assert_eq!(
            names(&updates[0]),
            vec![
                "clearRect",
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

    #[test_log::test(tokio::test)]
    async fn empty_drawing_sends_nothing() {
        let canvas = canvas();

        canvas.render(&Drawing::empty()).await.unwrap();
        canvas.render(&drawing::opened_path(
            Style::from(Color::BLACK),
            1.0,
            drawing::path([]),
        ))
        .await
        .unwrap();

        let updates = canvas.transport().updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(
            names(&updates[0]),
            vec!["beginPath", "lineWidth", "strokeStyle", "stroke"]
        );
    }

    #[test_log::test(tokio::test)]
    async fn gradient_style_is_sent_as_one_update() {
        let canvas = canvas();
        let gradient = Gradient::linear(Point(0.0, 0.0), 100.0, 0.0)
            .with_stop(0.0, Color::BLACK)
            .with_stop(1.0, Color::WHITE);

        canvas.set_fill_style(&gradient.into()).await.unwrap();
        canvas
            .fill_rect(Point(0.0, 0.0), 100.0, 10.0)
            .await
            .unwrap();

        let updates = canvas.transport().updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(
            names(&updates[0]),
            vec![
                "createLinearGradient",
                "addColorStop",
                "addColorStop",
                "fillStyle"
            ]
        );
        assert_eq!(names(&updates[1]), vec!["fillRect"]);
    }

    #[test_log::test(tokio::test)]
    async fn primitives_send_one_command_each() {
        let canvas = canvas();

        canvas.begin_path().await.unwrap();
        canvas.move_to(Point(0.0, 0.0)).await.unwrap();
        canvas.line_to(Point(1.0, 1.0)).await.unwrap();
        canvas
            .arc_with_direction(Point(1.0, 1.0), 2.0, 0.0, 1.0, true)
            .await
            .unwrap();
        canvas.close_path().await.unwrap();
        canvas.set_line_width(3.0).await.unwrap();
        canvas.stroke().await.unwrap();
        canvas.set_text_font("10px serif").await.unwrap();
        canvas.set_text_align(TextAlign::End).await.unwrap();
        canvas.fill_text("hi", Point(5.0, 5.0)).await.unwrap();

        assert_eq!(
            canvas
                .transport()
                .commands()
                .iter()
                .map(Command::name)
                .collect::<Vec<_>>(),
            vec![
                "beginPath",
                "moveTo",
                "lineTo",
                "arc",
                "closePath",
                "lineWidth",
                "stroke",
                "font",
                "textAlign",
                "fillText",
            ]
        );
        assert_eq!(canvas.transport().updates().len(), 10);
    }

    #[test_log::test(tokio::test)]
    async fn render_drawing_works_through_a_channel() {
        let (transport, rx) = ChannelTransport::unbounded();
        let handle = CanvasHandle::new("board");

        render_drawing(&transport, &handle, &drawing::clear())
            .await
            .unwrap();

        let update = rx.recv_async().await.unwrap();
        assert_eq!(update.commands, vec![command::clear_canvas(&handle)]);
    }

    #[test_log::test(tokio::test)]
    async fn render_drawing_reports_disconnected_transport() {
        let (transport, rx) = ChannelTransport::unbounded();
        drop(rx);

        let result = render_drawing(&transport, &CanvasHandle::new("board"), &drawing::clear()).await;

        assert!(matches!(result, Err(TransportError::Disconnected)));
    }
}
