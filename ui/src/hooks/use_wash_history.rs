use api::PageRequest;
use api::RestWashHistory;
use api::SubjectId;
use api::WashHistorySource;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::app_state::AppState;
use crate::history_state::FetchPlan;
use crate::history_state::HistoryState;
use crate::pagination::Pagination;
use crate::pagination::PAGE_SIZE;

/// Handle to the paged wash history of the selected client.
#[derive(Clone, Copy)]
pub struct WashHistory {
    state: Signal<HistoryState>,
    page: Signal<u32>,
    source: Signal<RestWashHistory>,
}

impl WashHistory {
    /// Returns the signal holding the fetched records and fetch status.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<HistoryState> {
        self.state
    }

    /// The current 1-based page.  Setting it triggers a fetch.
    pub fn page(&self) -> Signal<u32> {
        self.page
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(*self.page.read(), PAGE_SIZE, self.state.read().total_items())
    }

    /// Re-issues the fetch for the current client and page.
    pub fn retry(&mut self) {
        let subject = self.state.peek().subject();
        if let Some(subject) = subject {
            let page = *self.page.peek();
            self.dispatch(subject, page);
        }
    }

    fn dispatch(&mut self, subject: SubjectId, page: u32) {
        let request = match PageRequest::new(page, PAGE_SIZE) {
            Ok(r) => r,
            Err(e) => {
                warn!("not fetching wash history: {}", e);
                return;
            }
        };

        info!("fetching wash history for client {} (page {})", subject, page);
        let ticket = self.state.write().begin_fetch();
        let source = self.source.peek().clone();
        let mut state = self.state;
        let mut page_signal = self.page;

        spawn(async move {
            let result = source.fetch_wash_history(subject, request).await;
            let fetched = result.is_ok();
            if !state.write().finish_fetch(ticket, result) {
                debug!(
                    "discarded stale wash history response for client {} (page {})",
                    subject, page
                );
                return;
            }

            // the total may have shrunk below the requested page
            if fetched {
                let total = state.peek().total_items();
                let last = Pagination::new(page, PAGE_SIZE, total).clamped_page();
                if last != page {
                    info!("page {} is past the last page, moving to page {}", page, last);
                    page_signal.set(last);
                }
            }
        });
    }
}

/// Keeps a page of the given client's wash history loaded.
///
/// Fetches on mount and whenever `subject` or the page changes.  Choosing
/// another client starts over at page 1.  Nothing is fetched while `subject`
/// is `None`.
pub fn use_wash_history(subject: Signal<Option<SubjectId>>) -> WashHistory {
    let app_state = use_context::<AppState>();
    let source = use_signal(|| app_state.wash_history.clone());
    let state = use_signal(|| HistoryState::new(*subject.peek()));
    let page = use_signal(|| 1u32);

    let mut history = WashHistory {
        state,
        page,
        source,
    };

    use_effect(move || {
        let current_subject = subject();
        let current_page = (history.page)();

        let plan = history.state.write().plan(current_subject, current_page);
        match plan {
            FetchPlan::Idle => {}
            // the page change re-runs this effect, which then fetches page 1
            FetchPlan::ResetPage => history.page.set(1),
            FetchPlan::Fetch { subject, page } => history.dispatch(subject, page),
        }
    });

    history
}
