#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `remote_canvas`.
//!
//! This example demonstrates:
//! - Composing paths and drawings
//! - Gradient and solid styles
//! - Rendering a drawing through a `flume` channel transport
//! - Turning the received updates into JavaScript

use std::f64::consts::PI;

use remote_canvas::{
    CanvasHandle, ChannelTransport, Color, Drawing, Gradient, Point, RemoteCanvas, Style,
    TextAlign, TransportError, drawing, script,
};

/// Errors that can occur when running the basic drawing example.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

fn scene() -> Drawing {
    let sky = Gradient::linear(Point(0.0, 0.0), 0.0, 200.0)
        .with_stop(0.0, Color::rgb(0x87, 0xCE, 0xEB))
        .with_stop(1.0, Color::WHITE);

    let house = drawing::path([
        Point(60.0, 180.0),
        Point(60.0, 110.0),
        Point(100.0, 70.0),
        Point(140.0, 110.0),
        Point(140.0, 180.0),
    ]);

    let sun = drawing::move_to(Point(280.0, 50.0)) + drawing::arc(Point(250.0, 50.0), 30.0, 0.0, 2.0 * PI);

    drawing::clear()
        + drawing::filled_rect(sky.into(), Point(0.0, 0.0), 320.0, 200.0)
        + drawing::closed_path(Style::from(Color::rgb(0x5A, 0x3E, 0x2B)), 3.0, house)
        + drawing::filled_path(Style::from(Color::rgba(255, 200, 0, 0.8)), sun)
        + drawing::fill_text(
            Style::from(Color::BLACK),
            "16px sans-serif",
            TextAlign::Center,
            "home",
            Point(100.0, 195.0),
        )
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "canvas".to_string());
    log::info!("drawing on canvas id={id:?}");

    let (transport, rx) = ChannelTransport::unbounded();
    let canvas = RemoteCanvas::new(CanvasHandle::new(id), transport);

    canvas.render(&scene()).await?;
    canvas.set_line_width(1.0).await?;
    canvas
        .stroke_text("outlined", Point(10.0, 20.0))
        .await?;

    drop(canvas);

    while let Ok(update) = rx.recv_async().await {
        println!("// {} commands for #{}", update.len(), update.target);
        print!("{}", script::render_update(&update));
    }

    Ok(())
}
