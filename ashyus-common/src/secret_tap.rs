/// Clicks needed to open the admin panel
const TAPS_TO_UNLOCK: u32 = 5;

/// Max gap between consecutive clicks before the count restarts
const TAP_WINDOW_MS: i64 = 1000;

/// Counts rapid clicks on the site title to reveal the admin panel.
///
/// Pure state machine: the caller supplies the click time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretTap {
    count: u32,
    last_tap_ms: Option<i64>,
}

impl SecretTap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click at `now_ms`. Returns true when this click unlocks the panel.
    pub fn register(&mut self, now_ms: i64) -> bool {
        let within_window = self
            .last_tap_ms
            .is_some_and(|last| now_ms - last <= TAP_WINDOW_MS);

        self.count = if within_window { self.count + 1 } else { 1 };
        self.last_tap_ms = Some(now_ms);

        if self.count >= TAPS_TO_UNLOCK {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_quick_taps_unlock() {
        let mut tap = SecretTap::new();
        for i in 0..4 {
            assert!(!tap.register(i * 200));
        }
        assert!(tap.register(800));
        assert_eq!(tap.count(), 0);
    }

    #[test]
    fn slow_tap_restarts_count() {
        let mut tap = SecretTap::new();
        tap.register(0);
        tap.register(500);
        tap.register(1000);
        assert_eq!(tap.count(), 3);

        assert!(!tap.register(2500));
        assert_eq!(tap.count(), 1);
    }

    #[test]
    fn unlock_resets_for_next_round() {
        let mut tap = SecretTap::new();
        for i in 0..5 {
            tap.register(i * 100);
        }
        for i in 5..9 {
            assert!(!tap.register(i * 100));
        }
        assert!(tap.register(900));
    }
}
