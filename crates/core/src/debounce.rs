//! Generation-counter debounce tokens for the query-string mirror.
//!
//! Every term change arms the gate, which invalidates all previously issued
//! tokens. A timer that wakes holding a stale token skips its write, so at
//! most one write lands per quiet window, carrying the latest term.

/// Proof of the most recent arm, held by a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Cancellation state for a rescheduable debounce timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding token and issue a fresh one.
    pub fn arm(&mut self) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        DebounceToken(self.generation)
    }

    /// Whether `token` is still the most recent arm.
    pub fn is_current(&self, token: DebounceToken) -> bool {
        self.generation == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_token_is_current() {
        let mut gate = DebounceGate::new();
        let token = gate.arm();
        assert!(gate.is_current(token));
    }

    #[test]
    fn rearming_invalidates_every_older_token() {
        let mut gate = DebounceGate::new();
        let first = gate.arm();
        let second = gate.arm();
        let third = gate.arm();

        assert!(!gate.is_current(first));
        assert!(!gate.is_current(second));
        assert!(gate.is_current(third), "only the last arm within a window may write");
    }

    #[test]
    fn stale_token_stays_stale() {
        let mut gate = DebounceGate::new();
        let stale = gate.arm();
        let _ = gate.arm();
        let fresh = gate.arm();

        assert!(gate.is_current(fresh));
        assert!(!gate.is_current(stale), "a cancelled write must never resurrect");
    }
}
