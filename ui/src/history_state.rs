//! The state behind the wash history table and its transitions.

use api::FetchError;
use api::PageResult;
use api::SubjectId;
use api::WashRecord;

/// Identifies one dispatched fetch.  Only the most recent ticket may update
/// the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What the history table should display for a given state.
#[derive(Debug, PartialEq, strum::EnumIs)]
pub enum HistoryView<'a> {
    /// First load for this client is in flight.
    Loading,
    /// The last fetch failed.  Records from earlier fetches are kept.
    Error {
        message: &'a str,
        records: &'a [WashRecord],
    },
    Empty,
    Populated {
        records: &'a [WashRecord],
        refreshing: bool,
    },
}

/// What the hook should do after the selected client or page changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum FetchPlan {
    /// No client is selected.
    Idle,
    /// A new client was selected away from page 1.  Setting the page back
    /// to 1 leads to another call, which then fetches.
    ResetPage,
    Fetch { subject: SubjectId, page: u32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    subject: Option<SubjectId>,
    records: Vec<WashRecord>,
    total_items: u64,
    loading: bool,
    error: Option<String>,
    latest_request: u64,
}

impl HistoryState {
    /// A state for `subject` that has not been fetched yet.
    pub fn new(subject: Option<SubjectId>) -> Self {
        let mut state = Self::default();
        state.select_subject(subject);
        state
    }

    pub fn subject(&self) -> Option<SubjectId> {
        self.subject
    }

    pub fn records(&self) -> &[WashRecord] {
        &self.records
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switches to another client, forgetting everything shown for the
    /// previous one.  Fetches already in flight become stale.
    ///
    /// A selected client counts as loading until its first fetch completes.
    pub fn select_subject(&mut self, subject: Option<SubjectId>) {
        self.subject = subject;
        self.records.clear();
        self.total_items = 0;
        self.loading = subject.is_some();
        self.error = None;
        self.latest_request += 1;
    }

    /// Decides what to fetch for the selected client and page.
    ///
    /// A client different from the current one is selected first.  The
    /// same inputs always yield the same plan.
    pub fn plan(&mut self, subject: Option<SubjectId>, page: u32) -> FetchPlan {
        let changed = self.subject != subject;
        if changed {
            self.select_subject(subject);
        }

        match subject {
            None => FetchPlan::Idle,
            Some(_) if changed && page != 1 => FetchPlan::ResetPage,
            Some(subject) => FetchPlan::Fetch { subject, page },
        }
    }

    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest_request)
    }

    /// Applies the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false`, leaving the state untouched, when a newer fetch has
    /// been dispatched since.
    pub fn finish_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageResult, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest_request {
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.data;
                self.total_items = page.total;
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("wash history fetch failed: {}", e);
                self.error = Some(format!("Failed to load wash history: {e}"));
            }
        }
        true
    }

    pub fn view(&self) -> HistoryView<'_> {
        if self.loading && self.records.is_empty() {
            HistoryView::Loading
        } else if let Some(message) = &self.error {
            HistoryView::Error {
                message,
                records: &self.records,
            }
        } else if self.records.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Populated {
                records: &self.records,
                refreshing: self.loading,
            }
        }
    }
}
