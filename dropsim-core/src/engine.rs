use crate::body::Renderable;
use crate::surface::{Color, Event, EventSource, FrameClock, Surface};
use crate::timestep::Timestep;

/// Pixels per simulated meter, the default length scale for position
/// updates.
pub const METER: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Stopped,
}

/// The simulation loop: owns the bodies, a frame clock, an event source and
/// the render surface, and advances everything in lockstep once per frame.
///
/// Bodies update and draw in insertion order. One thread, no overlap:
/// calculation finishes before rendering starts, and the only blocking point
/// is the end-of-frame throttle.
pub struct Engine<S, C, E> {
    bodies: Vec<Box<dyn Renderable>>,
    surface: S,
    clock: C,
    events: E,
    target_fps: f32,
    length_scale: f32,
    timestep: Timestep,
    state: EngineState,
}

impl<S: Surface, C: FrameClock, E: EventSource> Engine<S, C, E> {
    pub fn new(surface: S, clock: C, events: E, target_fps: f32) -> Self {
        Self {
            bodies: Vec::new(),
            surface,
            clock,
            events,
            target_fps,
            length_scale: METER,
            timestep: Timestep::MeasuredRate,
            state: EngineState::Running,
        }
    }

    pub fn with_timestep(mut self, timestep: Timestep) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_length_scale(mut self, length_scale: f32) -> Self {
        self.length_scale = length_scale;
        self
    }

    pub fn add_body(&mut self, body: Box<dyn Renderable>) {
        self.bodies.push(body);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn bodies(&self) -> &[Box<dyn Renderable>] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut Vec<Box<dyn Renderable>> {
        &mut self.bodies
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    fn drain_events(&mut self) {
        for event in self.events.poll() {
            match event {
                Event::Quit => {
                    self.state = EngineState::Stopped;
                    break;
                }
            }
        }
    }

    /// Advance every body by the current timestep. The timestep source is
    /// queried per body: under `MeasuredRate` the clock is live and can
    /// change mid-pass.
    fn calculation(&mut self) {
        for body in &mut self.bodies {
            let dt = self.timestep.dt(&self.clock);
            body.body_mut().move_during(dt, self.length_scale);
        }
    }

    fn render(&mut self) {
        self.surface.clear(Color::BLACK);
        for body in &self.bodies {
            body.draw(&mut self.surface);
        }
    }

    /// One full frame: drain events, integrate, redraw, present, throttle.
    ///
    /// A quit event flips the state to `Stopped`, but the tick in progress
    /// still completes; `run` checks the state between ticks, never inside
    /// one.
    pub fn tick(&mut self) {
        self.drain_events();
        self.calculation();
        self.render();
        let caption = format!(
            "max fps: {}, fps now: {}",
            self.target_fps,
            self.clock.measured_rate()
        );
        self.surface.set_caption(&caption);
        self.surface.present();
        self.clock.throttle(self.target_fps);
    }

    /// Tick until a quit event is drained.
    pub fn run(&mut self) {
        while self.state == EngineState::Running {
            self.tick();
        }
    }
}
