//! Celebration effect port.

/// Cosmetic, fire-and-forget effect played when an order is saved.
///
/// Implementations must return immediately; any animation runs on its own.
pub trait CelebrationPort: Send + Sync {
    fn celebrate(&self);
}

/// A celebration that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCelebration;

impl CelebrationPort for NoopCelebration {
    fn celebrate(&self) {}
}
