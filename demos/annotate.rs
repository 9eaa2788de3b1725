//! Scripted annotation session demo.
//!
//! Drives a session through a synthetic pointer-event sequence and prints
//! the submission payload. Run with `cargo run --example annotate`.

use bbat::model::Point;
use bbat::{AnnotationSession, PointerTarget};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut session = AnnotationSession::new("steering-column-image");

    // Drag out two boxes and label them.
    session.pointer_down(Point::new(180.0, 80.0), PointerTarget::Surface);
    session.pointer_move(Point::new(360.0, 160.0));
    session.pointer_up();
    session.edit_label("Correct Cross Pinch Bolt");

    session.pointer_down(Point::new(180.0, 180.0), PointerTarget::Surface);
    session.pointer_move(Point::new(400.0, 300.0));
    session.pointer_up();
    session.edit_label("Stub Shaft Visible in U Joint");

    // Re-select the first box via hit-test and relabel it from a preset.
    if let Some(id) = session.store().hit_test(Point::new(200.0, 100.0)) {
        session.pointer_down(Point::new(200.0, 100.0), PointerTarget::Annotation(id));
        let preset = session.presets()[1].clone();
        session.apply_preset(&preset);
    }

    match session.submit().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Submission error: {e}"),
    }
}
