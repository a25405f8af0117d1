use std::fmt;

/// Why the eager loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GenerationOutcome {
    /// Every deck entry was placed.
    Complete,
    /// The frontier ran dry while tiles were still waiting.
    Stranded,
    /// The iteration cap was reached first.
    IterationCap,
}

/// Summary of one `generate()` run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    pub outcome: GenerationOutcome,
    pub iterations: u32,
    pub anchors_placed: usize,
    pub tiles_placed: usize,
    pub positions_retired: usize,
    pub remaining: usize,
    /// Names of the deck entries left over, in deck order.
    pub stranded: Vec<String>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == GenerationOutcome::Complete
    }

    pub fn total_placed(&self) -> usize {
        self.anchors_placed + self.tiles_placed
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} placed ({} anchors), {} remaining, {} retired after {} iterations",
            self.outcome,
            self.total_placed(),
            self.anchors_placed,
            self.remaining,
            self.positions_retired,
            self.iterations
        )
    }
}
