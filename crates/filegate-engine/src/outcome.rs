use filegate_types::Finding;

/// Result of one item's check.
///
/// Success carries nothing; failure carries the finding with its diagnostic
/// line. There is no "empty diagnostic means success" convention to uphold.
#[derive(Clone, Debug)]
pub enum CheckOutcome {
    Pass,
    Fail(Finding),
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Pass)
    }
}
