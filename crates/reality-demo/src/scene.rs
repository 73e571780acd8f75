use std::borrow::Cow;

use reality_engine::core::{App, AppControl, FrameCtx};
use reality_engine::mesh::{Mesh, Spin};
use reality_engine::paint::{rotate_with, Color, Overflow, Rotation};
use reality_engine::render::{MeshRenderer, WgslShader};

use crate::args::SceneConfig;

/// Frames between periodic color reports at trace level.
const TRACE_EVERY: u64 = 600;

/// The color the frame loop owns, plus the rotation applied to it each frame.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    start: Color,
    color: Color,
    delta: Rotation,
    overflow: Overflow,
}

impl ColorCycle {
    pub fn new(start: Color, delta: Rotation, overflow: Overflow) -> Self {
        Self {
            start,
            color: start,
            delta,
            overflow,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Rotates the color once and returns the result.
    ///
    /// A color that overflows to infinity restarts the cycle from its start
    /// color, so only finite values reach the uniform buffer.
    pub fn step(&mut self) -> Color {
        rotate_with(&mut self.color, self.delta, self.overflow);
        if !self.color.is_finite() {
            log::warn!(
                "color {:?} is no longer finite; restarting from {:?}",
                self.color.to_array(),
                self.start.to_array()
            );
            self.color = self.start;
        }
        self.color
    }
}

/// Draws one mesh with the cycling color.
pub struct ColorScene {
    cycle: ColorCycle,
    mesh: Mesh,
    spin: Spin,
    renderer: MeshRenderer,
}

impl ColorScene {
    pub fn new(config: SceneConfig, shader: WgslShader) -> Self {
        log::info!(
            "color cycle: start {:?}, delta {:?}, overflow {}",
            config.start,
            config.delta,
            config.overflow.name()
        );

        Self {
            cycle: ColorCycle::new(config.start, config.delta, config.overflow),
            mesh: config.mesh,
            spin: Spin::new(config.spin_deg),
            renderer: MeshRenderer::new(shader),
        }
    }
}

impl App for ColorScene {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let color = self.cycle.step();

        if ctx.time.frame_index % TRACE_EVERY == 0 {
            log::trace!(
                "frame {}: color {:?} ({:.1} fps)",
                ctx.time.frame_index,
                color.to_array(),
                ctx.time.fps()
            );
        }

        let mesh = if self.spin.is_still() {
            Cow::Borrowed(&self.mesh)
        } else {
            Cow::Owned(self.mesh.rotated_about([0.0, 0.0], self.spin.advance()))
        };

        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, &mesh, color);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_starts_at_the_named_color() {
        let cycle = ColorCycle::new(Color::RED, Rotation::ZERO, Overflow::WrapByOne);
        assert_eq!(cycle.color(), Color::RED);
    }

    #[test]
    fn cycle_wraps_red_channel() {
        let mut cycle = ColorCycle::new(Color::BLACK, Rotation::new(0.25, 0.0, 0.0), Overflow::WrapByOne);
        for _ in 0..5 {
            cycle.step();
        }
        // 1.25 -> 0.25
        assert_eq!(cycle.color(), Color::new(0.25, 0.0, 0.0, 1.0));
    }

    #[test]
    fn unchecked_cycle_grows_without_bound() {
        let mut cycle = ColorCycle::new(Color::WHITE, Rotation::new(0.5, 0.5, 0.5), Overflow::Unchecked);
        let c = cycle.step();
        assert_eq!(c, Color::new(1.5, 1.5, 1.5, 1.0));
    }

    #[test]
    fn digit_cycle_jumps_to_first_decimal() {
        let mut cycle = ColorCycle::new(Color::WHITE, Rotation::new(0.37, 0.0, 0.0), Overflow::DecimalDigit);
        assert_eq!(cycle.step(), Color::new(3.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn infinite_color_restarts_from_start() {
        let mut cycle = ColorCycle::new(Color::RED, Rotation::new(f32::MAX, 0.0, 0.0), Overflow::Unchecked);
        assert_eq!(cycle.step().r, f32::MAX);
        // f32::MAX + f32::MAX overflows to +inf.
        let c = cycle.step();
        assert!(c.is_finite());
        assert_eq!(c, Color::RED);
    }
}
