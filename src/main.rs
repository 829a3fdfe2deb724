//! Paddle Duel entry point
//!
//! Runs the fixed-rate loop in real time: a demo input thread drives the
//! paddles through the shared sampler, scoring events are logged, and a text
//! frame is printed once per second.
//!
//! Usage: `paddle-duel [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    use paddle_duel::renderer::{AsciiRenderer, Renderer};
    use paddle_duel::sim::{ControlKey, InputSampler};
    use paddle_duel::{Session, Settings};

    /// How long the demo match runs
    const DEMO_DURATION: Duration = Duration::from_secs(10);
    /// Interval between printed frames
    const FRAME_PRINT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn run() {
        let path = std::env::args().nth(1).map(PathBuf::from);
        let settings = Settings::load_or_default(path.as_deref());

        let mut session = match Session::new(&settings) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Cannot start session: {}", e);
                return;
            }
        };

        let sampler = Arc::new(InputSampler::new(settings.bindings.clone()));
        let running = Arc::new(AtomicBool::new(true));
        let input_thread = spawn_demo_input(Arc::clone(&sampler), Arc::clone(&running));

        // Both demo players are always ready
        session.start(true);

        let tick = Duration::from_secs_f32(settings.tick_dt());
        let mut renderer = AsciiRenderer::default();
        let started = Instant::now();
        let mut last = started;
        let mut last_print = started;

        while started.elapsed() < DEMO_DURATION {
            let now = Instant::now();
            let elapsed = (now - last).as_secs_f32();
            last = now;

            for event in session.advance(elapsed, &sampler) {
                let score = session.state().score;
                log::info!(
                    "Point to player {} ({} - {})",
                    event.winner.number(),
                    score.player1,
                    score.player2
                );
            }

            if now.duration_since(last_print) >= FRAME_PRINT_INTERVAL {
                renderer.present(session.state(), session.area());
                println!("{}", renderer.frame());
                last_print = now;
            }

            thread::sleep(tick.saturating_sub(now.elapsed()));
        }

        running.store(false, Ordering::Relaxed);
        if input_thread.join().is_err() {
            log::warn!("Demo input thread panicked");
        }

        let score = session.state().score;
        log::info!(
            "Final score {} - {} after {} ticks",
            score.player1,
            score.player2,
            session.ticks()
        );
    }

    /// Presses and releases bound keys on a fixed rhythm, like a keyboard would
    fn spawn_demo_input(
        sampler: Arc<InputSampler>,
        running: Arc<AtomicBool>,
    ) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let pattern = [
                (ControlKey::Player1Down, ControlKey::Player2Up),
                (ControlKey::Player1Up, ControlKey::Player2Down),
            ];
            let mut phase = 0;
            while running.load(Ordering::Relaxed) {
                let (left, right) = pattern[phase % pattern.len()];
                let left = sampler.bindings().name_of(left).to_string();
                let right = sampler.bindings().name_of(right).to_string();

                sampler.on_press(&left);
                sampler.on_press(&right);
                thread::sleep(Duration::from_millis(400));
                sampler.on_release(&left);
                sampler.on_release(&right);
                thread::sleep(Duration::from_millis(100));

                phase += 1;
            }
            sampler.release_all();
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive `Session` directly on the web
}
