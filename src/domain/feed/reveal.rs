use serde::Serialize;

/// Phase of the progressive "drawing" replay of the seed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "index", rename_all = "camelCase")]
pub enum RevealPhase {
    Idle,
    /// Seed prefix `[0..=index]` is visible.
    Revealing(usize),
    Done,
}

/// State machine `Idle -> Revealing(index) -> Done`.
///
/// It never touches the window itself; it only decides how much of the seed
/// is visible. The engine owns both and applies them in queue order.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    seed_len: usize,
    phase: RevealPhase,
}

impl RevealSequencer {
    pub fn new(seed_len: usize) -> Self {
        Self { seed_len, phase: RevealPhase::Idle }
    }

    /// A sequencer that starts out finished (live-only sessions).
    pub fn finished(seed_len: usize) -> Self {
        Self { seed_len, phase: RevealPhase::Done }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealing(_))
    }

    /// `Idle -> Revealing(0)`, or straight to `Done` for a seed of one sample
    /// or less. Returns whether the phase changed.
    pub fn start(&mut self) -> bool {
        if self.phase != RevealPhase::Idle {
            return false;
        }
        self.phase = if self.seed_len <= 1 { RevealPhase::Done } else { RevealPhase::Revealing(0) };
        true
    }

    /// Advance by one point. No-op outside `Revealing`.
    pub fn advance(&mut self) -> RevealPhase {
        if let RevealPhase::Revealing(index) = self.phase {
            let next = index + 1;
            self.phase =
                if next + 1 >= self.seed_len { RevealPhase::Done } else { RevealPhase::Revealing(next) };
        }
        self.phase
    }

    /// Number of seed samples currently visible, `None` meaning "everything".
    pub fn visible_len(&self) -> Option<usize> {
        match self.phase {
            RevealPhase::Idle => Some(0),
            RevealPhase::Revealing(index) => Some(index + 1),
            RevealPhase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_every_seed_point() {
        let mut seq = RevealSequencer::new(3);
        assert_eq!(seq.visible_len(), Some(0));
        assert!(seq.start());
        assert_eq!(seq.phase(), RevealPhase::Revealing(0));
        assert_eq!(seq.advance(), RevealPhase::Revealing(1));
        assert_eq!(seq.visible_len(), Some(2));
        assert_eq!(seq.advance(), RevealPhase::Done);
        assert_eq!(seq.visible_len(), None);
        assert_eq!(seq.advance(), RevealPhase::Done);
    }

    #[test]
    fn start_is_one_shot() {
        let mut seq = RevealSequencer::new(6);
        assert!(seq.start());
        assert!(!seq.start());
        assert_eq!(seq.phase(), RevealPhase::Revealing(0));
    }

    #[test]
    fn single_point_seed_skips_reveal() {
        let mut seq = RevealSequencer::new(1);
        seq.start();
        assert!(seq.is_done());
    }

    #[test]
    fn advance_in_idle_is_ignored() {
        let mut seq = RevealSequencer::new(4);
        assert_eq!(seq.advance(), RevealPhase::Idle);
    }
}
