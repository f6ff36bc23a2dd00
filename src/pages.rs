/// Why a walk over listing pages ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Enough jobs were collected before the next fetch
    QuotaReached,
    /// The given page produced no jobs
    EndOfResults { page: u32 },
}

/// What the walker should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fetch this 1-based listing page
    Fetch(u32),
    Stop(StopReason),
}

/// Pagination over listing pages as an explicit state machine.
///
/// `step` decides whether to fetch, `complete_page` records the result of a
/// fetch. A page with zero jobs is the only end-of-results signal.
#[derive(Debug, Clone)]
pub struct Pagination {
    quota: usize,
    page: u32,
    collected: usize,
    stopped: Option<StopReason>,
}

impl Pagination {
    pub fn new(quota: usize) -> Self {
        Self {
            quota,
            page: 1,
            collected: 0,
            stopped: None,
        }
    }

    /// The next action; checks the quota before every fetch
    pub fn step(&mut self) -> Step {
        if let Some(reason) = self.stopped {
            return Step::Stop(reason);
        }
        if self.collected >= self.quota {
            self.stopped = Some(StopReason::QuotaReached);
            return Step::Stop(StopReason::QuotaReached);
        }
        Step::Fetch(self.page)
    }

    /// Record a fetched page: `found` jobs were extracted, `kept` of them were added
    pub fn complete_page(&mut self, found: usize, kept: usize) -> Step {
        if found == 0 {
            let reason = StopReason::EndOfResults { page: self.page };
            self.stopped = Some(reason);
            return Step::Stop(reason);
        }
        self.collected += kept;
        self.page += 1;
        self.step()
    }

    /// Jobs still needed to meet the quota
    pub fn remaining(&self) -> usize {
        self.quota.saturating_sub(self.collected)
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    /// Page the walker is on (or stopped at)
    pub fn page(&self) -> u32 {
        self.page
    }
}
