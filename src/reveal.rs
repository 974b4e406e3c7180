//! One-shot reveal bookkeeping for scroll-triggered effects.

/// Whether an element showing `visible_fraction` of itself has crossed
/// `threshold`. A fraction of zero never reveals, even at threshold zero.
pub fn should_reveal(visible_fraction: f64, threshold: f64) -> bool {
    visible_fraction > 0.0 && visible_fraction >= threshold
}

/// Tracks which registered elements have already been revealed.
///
/// Elements are addressed by the index [`RevealLatch::track`] returned.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: Vec::new(),
        }
    }

    pub fn track(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Report a visibility change. Returns `true` exactly once per element,
    /// the first time it qualifies; unknown indices never fire.
    pub fn offer(&mut self, index: usize, visible_fraction: f64) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if !*done && should_reveal(visible_fraction, self.threshold) => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}

/// What a skill bar does when it scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFill {
    pub start: &'static str,
    pub target: String,
    pub delay_ms: u32,
}

/// Plan a bar fill from its `data-width` attribute. Missing or blank widths
/// leave the bar alone.
pub fn skill_fill(data_width: Option<&str>, delay_ms: u32) -> Option<SkillFill> {
    let target = data_width.map(str::trim).filter(|w| !w.is_empty())?;
    Some(SkillFill {
        start: "0%",
        target: target.to_string(),
        delay_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_predicate() {
        assert!(should_reveal(0.2, 0.2));
        assert!(should_reveal(1.0, 0.5));
        assert!(!should_reveal(0.19, 0.2));
        assert!(!should_reveal(0.0, 0.0));
        assert!(should_reveal(0.01, 0.0));
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::new(0.2);
        let a = latch.track();
        let b = latch.track();
        assert_eq!(latch.pending(), 2);

        assert!(!latch.offer(a, 0.1));
        assert!(latch.offer(a, 0.3));
        // leaves and comes back
        assert!(!latch.offer(a, 0.0));
        assert!(!latch.offer(a, 0.9));
        assert!(latch.is_revealed(a));
        assert!(!latch.is_revealed(b));
        assert_eq!(latch.pending(), 1);

        assert!(!latch.offer(42, 1.0));
    }

    #[test]
    fn skill_fill_plan() {
        let plan = skill_fill(Some("80%"), 100).unwrap();
        assert_eq!(plan.start, "0%");
        assert_eq!(plan.target, "80%");
        assert_eq!(plan.delay_ms, 100);
        assert_eq!(skill_fill(Some(" 65% "), 100).unwrap().target, "65%");
        assert_eq!(skill_fill(Some("  "), 100), None);
        assert_eq!(skill_fill(None, 100), None);
    }
}
