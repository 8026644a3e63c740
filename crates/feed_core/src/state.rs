use std::collections::HashSet;

use crate::view_model::{CategoryChip, FactRowView, FeedViewModel, FormView, EMPTY_FEED_MESSAGE};
use crate::{
    validate_draft, Category, CategoryFilter, DraftError, Fact, FactId, NewFact, Notice, VoteKind,
    MAX_TEXT_CHARS,
};

/// Upper bound on the number of facts held by the feed.
pub const MAX_ITEMS: usize = 1000;

/// Initial value of the form's source field.
pub const DEFAULT_SOURCE: &str = "http://example.com";

/// Tag attached to every fetch. Only the most recently issued ticket may
/// write `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub seq: u64,
    pub filter: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            source: DEFAULT_SOURCE.to_string(),
            category: String::new(),
        }
    }
}

impl DraftForm {
    fn cleared() -> Self {
        Self {
            text: String::new(),
            source: String::new(),
            category: String::new(),
        }
    }
}

pub(crate) enum FetchOutcome {
    Applied,
    Failed(Notice),
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    items: Vec<Fact>,
    filter: CategoryFilter,
    last_seq: u64,
    pending: Option<FetchTicket>,
    form_open: bool,
    draft: DraftForm,
    submitting: bool,
    draft_error: Option<DraftError>,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Fact] {
        &self.items
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// True exactly while the fetch for the current filter is in flight.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn draft_error(&self) -> Option<&DraftError> {
        self.draft_error.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> FeedViewModel {
        let facts: Vec<FactRowView> = self.items.iter().map(FactRowView::from_fact).collect();
        let empty_message = (facts.is_empty() && !self.loading()).then_some(EMPTY_FEED_MESSAGE);
        let form = self.form_open.then(|| FormView {
            text: self.draft.text.clone(),
            source: self.draft.source.clone(),
            category: self.draft.category.clone(),
            remaining_chars: MAX_TEXT_CHARS as i64 - self.draft.text.chars().count() as i64,
            submitting: self.submitting,
            error: self.draft_error.as_ref().map(ToString::to_string),
        });

        FeedViewModel {
            filter: self.filter,
            loading: self.loading(),
            fact_count: facts.len(),
            facts,
            empty_message,
            form_button_label: if self.form_open { "Close" } else { "Share a fact" },
            form,
            notice: self.notice.as_ref().map(ToString::to_string),
            categories: Category::ALL.into_iter().map(CategoryChip::from).collect(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn has_fetched(&self) -> bool {
        self.last_seq > 0
    }

    /// Switches the filter and issues the ticket for its fetch, superseding
    /// any fetch still in flight.
    pub(crate) fn begin_fetch(&mut self, filter: CategoryFilter) -> FetchTicket {
        self.last_seq += 1;
        let ticket = FetchTicket {
            seq: self.last_seq,
            filter,
        };
        self.filter = filter;
        self.pending = Some(ticket);
        self.mark_dirty();
        ticket
    }

    pub(crate) fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Fact>, String>,
    ) -> FetchOutcome {
        if self.pending != Some(ticket) {
            return FetchOutcome::Stale;
        }
        self.pending = None;
        self.mark_dirty();
        match result {
            Ok(facts) => {
                self.items = dedupe_and_cap(facts);
                FetchOutcome::Applied
            }
            Err(reason) => {
                let notice = Notice::FetchFailed {
                    filter: ticket.filter,
                    reason,
                };
                self.notice = Some(notice.clone());
                FetchOutcome::Failed(notice)
            }
        }
    }

    /// Inserts a confirmed fact at the head of the list.
    pub(crate) fn prepend(&mut self, fact: Fact) {
        self.items.retain(|existing| existing.id != fact.id);
        self.items.insert(0, fact);
        self.items.truncate(MAX_ITEMS);
        self.mark_dirty();
    }

    pub(crate) fn apply_vote(&mut self, fact_id: FactId, vote: VoteKind) -> bool {
        let Some(fact) = self.items.iter_mut().find(|fact| fact.id == fact_id) else {
            return false;
        };
        fact.apply_vote(vote);
        self.mark_dirty();
        true
    }

    pub(crate) fn toggle_form(&mut self) {
        // Opening or closing the form always starts from a fresh draft.
        self.form_open = !self.form_open;
        self.draft = DraftForm::default();
        self.draft_error = None;
        self.mark_dirty();
    }

    pub(crate) fn draft_mut(&mut self) -> &mut DraftForm {
        self.draft_error = None;
        self.mark_dirty();
        &mut self.draft
    }

    pub(crate) fn validate_current_draft(&self) -> Result<NewFact, DraftError> {
        validate_draft(&self.draft.text, &self.draft.source, &self.draft.category)
    }

    pub(crate) fn reject_draft(&mut self, err: DraftError) {
        self.draft_error = Some(err);
        self.mark_dirty();
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submitting = true;
        self.draft_error = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_submit(&mut self, result: Result<Fact, String>) -> Option<Notice> {
        self.submitting = false;
        self.mark_dirty();
        match result {
            Ok(fact) => {
                self.prepend(fact);
                self.draft = DraftForm::cleared();
                self.form_open = false;
                None
            }
            Err(reason) => {
                let notice = Notice::CreateFailed { reason };
                self.notice = Some(notice.clone());
                Some(notice)
            }
        }
    }

    pub(crate) fn dismiss_notice(&mut self) -> bool {
        if self.notice.take().is_some() {
            self.mark_dirty();
            true
        } else {
            false
        }
    }
}

/// Keeps the first occurrence of each id and enforces the item cap.
fn dedupe_and_cap(facts: Vec<Fact>) -> Vec<Fact> {
    let mut seen = HashSet::with_capacity(facts.len().min(MAX_ITEMS));
    facts
        .into_iter()
        .filter(|fact| seen.insert(fact.id))
        .take(MAX_ITEMS)
        .collect()
}
