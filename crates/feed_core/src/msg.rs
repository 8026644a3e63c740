use crate::{CategoryFilter, Fact, FactId, FetchTicket, VoteKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session start; triggers the initial load for `all`.
    Started,
    /// User picked a category (or `all`) in the filter bar.
    FilterSelected(CategoryFilter),
    /// Gateway completion for a fetch issued with `ticket`.
    FactsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Fact>, String>,
    },
    /// User clicked "Share a fact" / "Close".
    FormToggled,
    DraftTextChanged(String),
    DraftSourceChanged(String),
    /// Raw category as selected in the form; validated on submit.
    DraftCategoryChanged(String),
    /// User clicked Post.
    SubmitClicked,
    /// Gateway completion for the in-flight create.
    FactCreated { result: Result<Fact, String> },
    /// Local-only vote on a listed fact.
    VoteClicked { fact_id: FactId, vote: VoteKind },
    /// User acknowledged the current notice.
    NoticeDismissed,
}
