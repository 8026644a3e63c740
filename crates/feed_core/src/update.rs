use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::state::FetchOutcome;
use crate::{AppState, CategoryFilter, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.has_fetched() {
                return (state, Vec::new());
            }
            let ticket = state.begin_fetch(CategoryFilter::All);
            feed_debug!("initial fetch seq={} filter={}", ticket.seq, ticket.filter);
            vec![Effect::FetchFacts { ticket }]
        }
        Msg::FilterSelected(filter) => {
            if filter == state.filter() {
                return (state, Vec::new());
            }
            let ticket = state.begin_fetch(filter);
            feed_debug!("filter changed seq={} filter={}", ticket.seq, ticket.filter);
            vec![Effect::FetchFacts { ticket }]
        }
        Msg::FactsFetched { ticket, result } => match state.finish_fetch(ticket, result) {
            FetchOutcome::Applied => {
                feed_debug!(
                    "fetch applied seq={} filter={} items={}",
                    ticket.seq,
                    ticket.filter,
                    state.items().len()
                );
                Vec::new()
            }
            FetchOutcome::Failed(notice) => {
                feed_warn!(
                    "fetch failed seq={} filter={}: {}",
                    ticket.seq,
                    ticket.filter,
                    notice.reason()
                );
                vec![Effect::ShowNotice(notice)]
            }
            FetchOutcome::Stale => {
                feed_debug!(
                    "discarding stale fetch seq={} filter={} (current filter={})",
                    ticket.seq,
                    ticket.filter,
                    state.filter()
                );
                Vec::new()
            }
        },
        Msg::FormToggled => {
            // The in-flight create owns the form until it completes.
            if state.submitting() {
                return (state, Vec::new());
            }
            state.toggle_form();
            Vec::new()
        }
        Msg::DraftTextChanged(text) => {
            if state.form_open() && !state.submitting() {
                state.draft_mut().text = text;
            }
            Vec::new()
        }
        Msg::DraftSourceChanged(source) => {
            if state.form_open() && !state.submitting() {
                state.draft_mut().source = source;
            }
            Vec::new()
        }
        Msg::DraftCategoryChanged(category) => {
            if state.form_open() && !state.submitting() {
                state.draft_mut().category = category;
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.form_open() || state.submitting() {
                return (state, Vec::new());
            }
            match state.validate_current_draft() {
                Ok(draft) => {
                    feed_info!(
                        "submitting fact category={} text_len={}",
                        draft.category,
                        draft.text.chars().count()
                    );
                    state.begin_submit();
                    vec![Effect::CreateFact { draft }]
                }
                Err(err) => {
                    feed_debug!("draft rejected: {}", err);
                    state.reject_draft(err);
                    Vec::new()
                }
            }
        }
        Msg::FactCreated { result } => {
            if !state.submitting() {
                feed_warn!("create completion without a submission in flight; ignoring");
                return (state, Vec::new());
            }
            match state.finish_submit(result) {
                None => {
                    feed_info!("fact created, feed now holds {}", state.items().len());
                    Vec::new()
                }
                Some(notice) => {
                    feed_warn!("create failed: {}", notice.reason());
                    vec![Effect::ShowNotice(notice)]
                }
            }
        }
        Msg::VoteClicked { fact_id, vote } => {
            if !state.apply_vote(fact_id, vote) {
                feed_debug!("vote for unknown fact id={}", fact_id);
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
    };

    (state, effects)
}
