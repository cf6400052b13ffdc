//! Repaint controller
//!
//! egui is an immediate-mode GUI and repaints when input arrives. A button
//! click is handled while the frame is being built, so the display drawn
//! above the buttons still shows the old state at the end of that frame.
//!
//! `RepaintController` tracks whether state changed during a frame and asks
//! egui for exactly one follow-up repaint in that case. An idle calculator
//! does not repaint at all.

use tracing::trace;

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, key press, click).
    Input,
    /// State changed during the previous frame.
    StateChange,
}

/// Controls when the egui context should request repaints.
///
/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Frame counter (0 = first frame).
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint after the current frame.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Inspects the frame input to determine why this frame is running.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            RepaintReason::Input
        };
        trace!(frame = self.frame, reason = ?self.reason, "begin frame");

        self.needs_repaint = false;
    }

    /// Schedules one more repaint if the frame changed state.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}
