//! Confetti for a saved order, drawn as rows of glyphs.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use bistro_core::CelebrationPort;
use rand::Rng;
use tokio::runtime::Handle;
use tokio::time::{Instant, interval_at};

const DURATION: Duration = Duration::from_millis(1800);
const TICK: Duration = Duration::from_millis(250);
const PARTICLES: f64 = 50.0;
const ROW_WIDTH: usize = 60;
const GLYPHS: [char; 6] = ['*', '+', 'o', '~', '•', '✦'];

/// One burst: particle count and a normalized origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub particles: usize,
    pub x: f64,
    pub y: f64,
}

/// The two bursts of one tick, sized by how much of the show is left.
pub fn tick_bursts<R: Rng + ?Sized>(rng: &mut R, time_left: Duration) -> [Burst; 2] {
    let share = (time_left.as_secs_f64() / DURATION.as_secs_f64()).clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let particles = (PARTICLES * share) as usize;
    [
        Burst {
            particles,
            x: rng.gen_range(0.1..0.4),
            y: rng.gen_range(0.2..0.4),
        },
        Burst {
            particles,
            x: rng.gen_range(0.6..0.9),
            y: rng.gen_range(0.2..0.4),
        },
    ]
}

/// Render bursts into one row of `width` columns.
///
/// Each burst scatters its particles around its `x` origin; the spread
/// narrows as `y` rises.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bursts<R: Rng + ?Sized>(rng: &mut R, bursts: &[Burst], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut row = vec![' '; width];
    for burst in bursts {
        let center = burst.x * width as f64;
        let spread = (width as f64 * (0.5 - burst.y / 2.0)).max(1.0);
        for _ in 0..burst.particles {
            let col = (center + rng.gen_range(-spread..spread)).clamp(0.0, (width - 1) as f64);
            row[col as usize] = GLYPHS[rng.gen_range(0..GLYPHS.len())];
        }
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Celebration that prints a short confetti show below the receipt.
pub struct TerminalConfetti {
    out: Arc<Mutex<dyn Write + Send>>,
    width: usize,
}

impl TerminalConfetti {
    /// Confetti printed to stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(Mutex::new(io::stdout())))
    }

    pub fn new(out: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self {
            out,
            width: ROW_WIDTH,
        }
    }
}

impl CelebrationPort for TerminalConfetti {
    fn celebrate(&self) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!("No runtime, skipping confetti");
            return;
        };

        let out = Arc::clone(&self.out);
        let width = self.width;
        runtime.spawn(async move {
            let start = Instant::now();
            let end = start + DURATION;
            let mut ticks = interval_at(start + TICK, TICK);
            loop {
                let now = ticks.tick().await;
                let time_left = end.saturating_duration_since(now);
                if time_left.is_zero() {
                    break;
                }

                let row = {
                    let mut rng = rand::thread_rng();
                    let bursts = tick_bursts(&mut rng, time_left);
                    render_bursts(&mut rng, &bursts, width)
                };
                let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
                if writeln!(out, "  {row}").and_then(|()| out.flush()).is_err() {
                    break;
                }
            }
        });
    }
}
