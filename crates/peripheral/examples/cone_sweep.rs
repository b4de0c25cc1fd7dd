//! Sweep the half-angle for one observer and print how many points it sees.
//!
//! Purpose
//! - Show how the unwrapped cone interval behaves per facing direction: an
//!   East-facing observer stops gaining points below its axis, a West-facing
//!   one sees the full plane at 180°.
//!
//! Run: `cargo run -p peripheral --example cone_sweep`

use peripheral::prelude::*;

fn main() {
    let store = draw_scene(
        SceneCfg {
            count: 200,
            extent: 100.0,
        },
        ReplayToken { seed: 7, index: 0 },
    );
    for direction in Direction::ALL {
        let Some(ordinal) = store
            .points()
            .iter()
            .position(|p| p.direction == Some(direction))
            .map(|i| i + 1)
        else {
            continue;
        };
        print!("{:>5} (#{ordinal}):", direction.name());
        for half in [0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0] {
            let q = Query::new(ordinal, half, f64::INFINITY)
                .validate(&store)
                .expect("scene points all face somewhere");
            let seen = visible_points(&q).visible.len();
            let clip = if q.cone().is_seam_clipped() { "*" } else { "" };
            print!(" {half:>3}°={seen:<3}{clip}");
        }
        println!();
    }
    println!("(* = cone interval crosses the 0/2π seam)");
}
