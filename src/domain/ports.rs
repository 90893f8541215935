// Ports the simulation depends on but does not implement.

/// Monotonic time source, sampled on demand. The simulation never advances it.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}
