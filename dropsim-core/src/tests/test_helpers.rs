//! Test helper utilities and boundary-trait doubles for dropsim tests

use crate::surface::{Color, Event, EventSource, FrameClock, Surface};
use std::collections::VecDeque;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// One recorded call against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
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
    Caption(String),
    Present,
}

/// Surface double that records every call in order.
#[derive(Debug)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// The calls recorded since the last `clear`, clear included.
    pub fn last_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Clear(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.calls.push(DrawCall::Line {
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
        self.calls.push(DrawCall::Caption(caption.to_string()));
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

/// Clock double: reports a scripted rate per frame and records throttle
/// calls. `throttle` advances to the next scripted rate; past the end of the
/// script the last rate repeats.
#[derive(Debug)]
pub struct ScriptedClock {
    rates: Vec<f32>,
    frame: usize,
    pub throttled: Vec<f32>,
}

impl ScriptedClock {
    pub fn new(rates: Vec<f32>) -> Self {
        Self {
            rates,
            frame: 0,
            throttled: Vec::new(),
        }
    }

    /// A clock stuck at one rate.
    pub fn steady(rate: f32) -> Self {
        Self::new(vec![rate])
    }
}

impl FrameClock for ScriptedClock {
    fn measured_rate(&self) -> f32 {
        let idx = self.frame.min(self.rates.len().saturating_sub(1));
        self.rates.get(idx).copied().unwrap_or(0.0)
    }

    fn throttle(&mut self, target_rate: f32) {
        self.throttled.push(target_rate);
        self.frame += 1;
    }
}

/// Event-source double: yields one pre-queued batch per poll, then empty
/// batches forever.
#[derive(Debug, Default)]
pub struct QueuedEvents {
    batches: VecDeque<Vec<Event>>,
}

impl QueuedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quiet polls for `frames` frames, then a quit event.
    pub fn quit_after(frames: usize) -> Self {
        let mut source = Self::new();
        for _ in 0..frames {
            source.push_batch(Vec::new());
        }
        source.push_batch(vec![Event::Quit]);
        source
    }

    pub fn push_batch(&mut self, batch: Vec<Event>) {
        self.batches.push_back(batch);
    }
}

impl EventSource for QueuedEvents {
    fn poll(&mut self) -> Vec<Event> {
        self.batches.pop_front().unwrap_or_default()
    }
}
