//! Feed core: pure state machine, validation and view-model helpers.
mod category;
mod effect;
mod fact;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use effect::{Effect, Notice};
pub use fact::{Fact, FactId, NewFact, VoteKind};
pub use msg::Msg;
pub use state::{AppState, DraftForm, FetchTicket, DEFAULT_SOURCE, MAX_ITEMS};
pub use update::update;
pub use validate::{is_valid_draft, is_valid_url, validate_draft, DraftError, MAX_TEXT_CHARS};
pub use view_model::{CategoryChip, FactRowView, FeedViewModel, FormView, EMPTY_FEED_MESSAGE};
