//! Windowed backend for the simulation loop.
//!
//! The engine core only knows the `Surface`/`FrameClock`/`EventSource`
//! traits; this module supplies egui-backed implementations and hosts one
//! engine tick per eframe update.

use dropsim_core::{
    scenario, Color, Engine, EngineState, Event, EventSource, FrameClock, Surface, Timestep,
};
use eframe::egui;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to open window: {0}")]
    Window(#[from] eframe::Error),
}

/// A buffered draw command, replayed onto the egui painter after the engine
/// presents its frame.
#[derive(Debug, Clone)]
enum DrawCommand {
    Clear(Color),
    Circle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
}

/// Surface that records draw commands; `present` publishes the frame for
/// the egui pass to replay.
struct CanvasSurface {
    width: f32,
    height: f32,
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    caption: String,
}

impl CanvasSurface {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pending: Vec::new(),
            presented: Vec::new(),
            caption: String::new(),
        }
    }

    fn frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    fn caption(&self) -> &str {
        &self.caption
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.pending.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = caption.to_string();
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
    }
}

/// Wall clock: measures the rate of completed frames and sleeps out the
/// remainder of each frame budget.
struct WallClock {
    frame_start: Instant,
    measured: f32,
}

impl WallClock {
    fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            measured: 0.0,
        }
    }
}

impl FrameClock for WallClock {
    fn measured_rate(&self) -> f32 {
        self.measured
    }

    fn throttle(&mut self, target_rate: f32) {
        if target_rate > 0.0 {
            let budget = Duration::from_secs_f32(1.0 / target_rate);
            let elapsed = self.frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        let frame_time = self.frame_start.elapsed().as_secs_f32();
        self.measured = if frame_time > 0.0 {
            1.0 / frame_time
        } else {
            0.0
        };
        self.frame_start = Instant::now();
    }
}

/// Event source fed from the egui input pass.
#[derive(Default)]
struct InputEvents {
    quit_requested: bool,
}

impl InputEvents {
    fn request_quit(&mut self) {
        self.quit_requested = true;
    }
}

impl EventSource for InputEvents {
    fn poll(&mut self) -> Vec<Event> {
        if std::mem::take(&mut self.quit_requested) {
            vec![Event::Quit]
        } else {
            Vec::new()
        }
    }
}

struct DropsimApp {
    engine: Engine<CanvasSurface, WallClock, InputEvents>,
}

impl DropsimApp {
    fn new(width: f32, height: f32, fps: f32, count: usize, fixed_dt: Option<f32>) -> Self {
        let surface = CanvasSurface::new(width, height);
        let mut engine = Engine::new(surface, WallClock::new(), InputEvents::default(), fps);
        if let Some(dt) = fixed_dt {
            engine = engine.with_timestep(Timestep::Fixed(dt));
        }

        let mut rng = rand::thread_rng();
        for body in scenario::rain(width, height, count, &mut rng) {
            engine.add_body(body);
        }

        Self { engine }
    }
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl eframe::App for DropsimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let quit = ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.viewport().close_requested());
        if quit {
            self.engine.events_mut().request_quit();
        }

        self.engine.tick();

        if self.engine.state() == EngineState::Stopped {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(
            self.engine.surface().caption().to_string(),
        ));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let origin = rect.min;
                let painter = ui.painter();

                for command in self.engine.surface().frame() {
                    match command {
                        DrawCommand::Clear(color) => {
                            painter.rect_filled(rect, 0.0, to_color32(*color));
                        }
                        DrawCommand::Circle {
                            center,
                            radius,
                            color,
                        } => {
                            let center = origin + egui::vec2(center.0, center.1);
                            painter.circle_filled(center, *radius, to_color32(*color));
                        }
                        DrawCommand::Line {
                            from,
                            to,
                            width,
                            color,
                        } => {
                            let from = origin + egui::vec2(from.0, from.1);
                            let to = origin + egui::vec2(to.0, to.1);
                            painter
                                .line_segment([from, to], egui::Stroke::new(*width, to_color32(*color)));
                        }
                    }
                }
            });

        ctx.request_repaint();
    }
}

pub fn launch(
    width: f32,
    height: f32,
    fps: f32,
    count: usize,
    fixed_dt: Option<f32>,
) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "dropsim",
        options,
        Box::new(move |_cc| Ok(Box::new(DropsimApp::new(width, height, fps, count, fixed_dt)))),
    )?;

    Ok(())
}
