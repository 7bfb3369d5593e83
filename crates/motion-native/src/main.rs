//! Headless timeline preview.
//!
//! Sweeps a simulated scroll position through a hero-style timeline and a
//! pointer dart through a tilt spring, logging the mapped outputs. Useful
//! for eyeballing curve and spring tuning without a browser.

use std::time::Duration;

use anyhow::Result;
use glam::Vec2;
use motion_core::{Channel, Curve, ScrollRange, Spring, SpringConfig, SpringVec2, Timeline};

const VIEWPORT_H: f32 = 800.0;
const HERO_H: f32 = 800.0;
const FRAME: Duration = Duration::from_millis(16);
const SWEEP_FRAMES: usize = 300;

fn main() -> Result<()> {
    env_logger::init();

    preview_scroll_sweep()?;
    preview_pointer_dart();
    Ok(())
}

/// Scroll the hero off the top of a simulated viewport over ~5 seconds.
fn preview_scroll_sweep() -> Result<()> {
    let range = ScrollRange::exit_top();
    let timeline = Timeline::new()
        .with(
            Channel::TranslateY,
            Curve::linear(0.0, 0.0, 1.0, VIEWPORT_H * 0.30)?,
        )
        .with(Channel::Opacity, Curve::linear(0.0, 1.0, 0.5, 0.0)?)
        .with(Channel::Blur, Curve::new([(0.0, 0.0), (0.7, 0.0), (1.0, 10.0)])?);

    let mut spring = Spring::new(SpringConfig::default(), 0.0);
    log::info!("[sweep] scrolling hero out over {SWEEP_FRAMES} frames");
    for frame in 0..=SWEEP_FRAMES {
        let scrolled = HERO_H * frame as f32 / SWEEP_FRAMES as f32;
        let top = -scrolled;
        let progress = range.progress(top, HERO_H, VIEWPORT_H);
        spring.set_target(progress);
        let smoothed = spring.step(FRAME);
        let out = timeline.evaluate(smoothed);

        if frame % 30 == 0 {
            log::info!(
                "[sweep] frame {frame:3} top {top:7.1} phase {:?} progress {progress:.3} -> y {:6.1}px opacity {:.2} blur {:4.1}px",
                range.phase(top, HERO_H, VIEWPORT_H),
                out.translate_y,
                out.opacity,
                out.blur
            );
        }
    }
    let final_top = -HERO_H;
    let settled = timeline.evaluate(spring.value());
    log::info!(
        "[sweep] settled at y {:.1}px opacity {:.2} (phase {:?})",
        settled.translate_y,
        settled.opacity,
        range.phase(final_top, HERO_H, VIEWPORT_H)
    );
    Ok(())
}

/// Dart the pointer to a corner, then let it leave; the spring carries the
/// tilt out and back to neutral.
fn preview_pointer_dart() {
    let mut spring = SpringVec2::new(SpringConfig::new(100.0, 20.0), Vec2::ZERO);

    spring.set_target(Vec2::new(0.5, -0.5));
    for _ in 0..90 {
        spring.step(FRAME);
    }
    log::info!(
        "[dart] after dart: offset ({:.3}, {:.3})",
        spring.value().x,
        spring.value().y
    );

    // pointer leaves the tracked region
    spring.set_target(Vec2::ZERO);
    let mut frames = 0;
    while !spring.is_settled() && frames < 1000 {
        spring.step(FRAME);
        frames += 1;
    }
    log::info!(
        "[dart] back to neutral in {frames} frames: offset ({:.4}, {:.4})",
        spring.value().x,
        spring.value().y
    );
}
