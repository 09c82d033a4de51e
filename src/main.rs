/*
 * Procedural Bird Wing
 *
 * This application builds a bird wing from a cubic Bezier curve and covers
 * it with feathers whose size and sweep follow simple easing curves:
 * 1. Tertiaries: long feathers close to the body
 * 2. Secondaries: the broad middle of the wing
 * 3. Primaries: swept-back flight feathers toward the tip
 *
 * The wing can flap between keyframe poses and flutter in the wind, and
 * every parameter can be adjusted in real time from the control panel.
 *
 * Logging is controlled with RUST_LOG (default: info).
 */

use bird_wing::app::{model, update};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    nannou::app(model).update(update).run();
}
