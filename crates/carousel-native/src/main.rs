//! Headless replay of the carousel engine.
//!
//! Runs a scripted drag and a keyboard-style step at a fixed 60 Hz frame rate
//! and logs the ring as a one-line text lane, so the settle motion and the
//! media hand-offs can be inspected without a browser. Set `RUST_LOG=debug`
//! to also see the engine's own gesture and settle logging.

use anyhow::{bail, Context};
use carousel_core::{render_order, CarouselConfig, CarouselEngine, CarouselItem, Phase};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const FRAME_DT: Duration = Duration::from_nanos(16_666_667);
const MAX_SETTLE_FRAMES: usize = 600;
const LANE_LOG_EVERY: usize = 8;
const LANE_WIDTH: usize = 61;

#[derive(Clone, Debug)]
struct Project {
    title: &'static str,
}

fn demo_items() -> Vec<CarouselItem<Project>> {
    let project = |id: u32, title| CarouselItem::new(id, Project { title });
    vec![
        project(1, "Study Buddy").with_media("/imgs/studybuddy.mp4"),
        project(2, "Flixit").with_media("/imgs/movierental.mp4"),
        project(3, "Hack Mate").with_media("/imgs/hackmate.mp4"),
        project(4, "SocialSphere API"),
        project(5, "LearnAI").with_media("/imgs/learnai.mp4"),
    ]
}

/// One text row: each item's initial at its projected x, drawn back to front.
/// Items in the front zone are upper-case.
fn lane(engine: &CarouselEngine<Project>) -> String {
    let ring = engine.ring();
    let frames = engine.frames();
    // widest possible screen x: an item at the side is at depth 0, so no magnification
    let half_span = ring.radius;
    let mut row = vec!['.'; LANE_WIDTH];
    for index in render_order(&frames) {
        let frame = &frames[index];
        let projected = frame.project(ring.perspective);
        let t = (projected.screen_x / half_span).clamp(-1.0, 1.0) * 0.5 + 0.5;
        let col = (t * (LANE_WIDTH - 1) as f64).round() as usize;
        let initial = engine
            .item(index)
            .and_then(|item| item.payload.title.chars().next())
            .unwrap_or('?');
        row[col] = if frame.is_front {
            initial.to_ascii_uppercase()
        } else {
            initial.to_ascii_lowercase()
        };
    }
    row.into_iter().collect()
}

fn flush_media(engine: &mut CarouselEngine<Project>) {
    for signal in engine.drain_media_signals() {
        let title = engine
            .item(signal.index)
            .map(|i| i.payload.title)
            .unwrap_or("?");
        log::info!("[media] {:?} {} ({})", signal.action, title, signal.id);
    }
}

fn run_settle(engine: &mut CarouselEngine<Project>, label: &str) -> anyhow::Result<usize> {
    let mut frames = 0;
    while engine.tick(FRAME_DT) {
        frames += 1;
        if frames % LANE_LOG_EVERY == 0 {
            log::info!("[{}] {:8.3} |{}|", label, engine.rotation(), lane(engine));
        }
        flush_media(engine);
        if frames >= MAX_SETTLE_FRAMES {
            bail!("{label}: no rest after {frames} frames (rotation {:.3})", engine.rotation());
        }
    }
    flush_media(engine);
    log::info!(
        "[{}] rest at {:.1} after {} frames |{}|",
        label,
        engine.rotation(),
        frames,
        lane(engine)
    );
    Ok(frames)
}

fn front_title(engine: &CarouselEngine<Project>) -> &'static str {
    engine
        .item(engine.front_index())
        .map(|i| i.payload.title)
        .unwrap_or("?")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = CarouselEngine::new(demo_items(), CarouselConfig::default())
        .context("building demo carousel")?;
    log::info!(
        "ring of {} items, {:.0} deg apart, front: {}",
        engine.item_count(),
        engine.ring().angle_per_item(),
        front_title(&engine)
    );

    let last_phase = Rc::new(Cell::new(engine.phase()));
    let seen = last_phase.clone();
    engine.subscribe(move |ev| {
        if seen.replace(ev.phase) != ev.phase {
            log::info!("[phase] {:?} at {:.2}", ev.phase, ev.rotation);
        }
    });
    flush_media(&mut engine);
    log::info!("[start] {:8.3} |{}|", engine.rotation(), lane(&engine));

    for _ in 0..3 {
        engine.on_drag_move(50.0);
        log::info!("[drag] {:8.3} |{}|", engine.rotation(), lane(&engine));
    }
    flush_media(&mut engine);
    let target = engine.on_drag_end();
    log::info!("[release] settling to {:.1}", target);
    run_settle(&mut engine, "settle")?;
    log::info!("front: {}", front_title(&engine));

    let target = engine.step(1);
    log::info!("[step] next item, settling to {:.1}", target);
    run_settle(&mut engine, "step")?;
    log::info!("front: {}", front_title(&engine));

    if last_phase.get() != Phase::Idle {
        bail!("engine did not return to idle");
    }
    Ok(())
}
