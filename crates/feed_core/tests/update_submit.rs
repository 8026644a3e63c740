use std::sync::Once;

use feed_core::{
    update, AppState, Category, DraftError, Effect, Fact, Msg, NewFact, Notice, DEFAULT_SOURCE,
    MAX_ITEMS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn fact(id: u64, text: &str, category: Category) -> Fact {
    Fact {
        id,
        text: text.to_string(),
        source: "https://s.com".to_string(),
        category,
        votes_interesting: 0,
        votes_mindblowing: 0,
        votes_false: 0,
        created_in: 2025,
    }
}

/// A loaded feed with `count` facts and the form open.
fn loaded_with_form(count: u64) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let ticket = match effects.as_slice() {
        [Effect::FetchFacts { ticket }] => *ticket,
        other => panic!("expected fetch, got {other:?}"),
    };
    let facts = (1..=count)
        .map(|id| fact(id, "existing", Category::Science))
        .collect();
    let (state, _) = update(
        state,
        Msg::FactsFetched {
            ticket,
            result: Ok(facts),
        },
    );
    let (state, _) = update(state, Msg::FormToggled);
    state
}

fn fill(state: AppState, text: &str, source: &str, category: &str) -> AppState {
    let (state, _) = update(state, Msg::DraftTextChanged(text.to_string()));
    let (state, _) = update(state, Msg::DraftSourceChanged(source.to_string()));
    let (state, _) = update(state, Msg::DraftCategoryChanged(category.to_string()));
    state
}

#[test]
fn form_starts_with_default_source_and_toggles_label() {
    let state = AppState::new();
    assert_eq!(state.view().form_button_label, "Share a fact");
    assert!(state.view().form.is_none());

    let (state, _) = update(state, Msg::FormToggled);
    let view = state.view();
    assert_eq!(view.form_button_label, "Close");
    let form = view.form.expect("form visible");
    assert_eq!(form.source, DEFAULT_SOURCE);
    assert_eq!(form.text, "");
    assert_eq!(form.remaining_chars, 200);
}

#[test]
fn remaining_chars_tracks_text_and_goes_negative() {
    let state = fill(loaded_with_form(0), "hello", "https://s.com", "news");
    assert_eq!(state.view().form.unwrap().remaining_chars, 195);

    let (state, _) = update(state, Msg::DraftTextChanged("x".repeat(205)));
    assert_eq!(state.view().form.unwrap().remaining_chars, -5);
}

#[test]
fn valid_submission_waits_for_confirmation_then_prepends() {
    init_logging();
    let state = fill(loaded_with_form(3), "T", "https://s.com", "history");

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::CreateFact {
            draft: NewFact {
                text: "T".to_string(),
                source: "https://s.com".to_string(),
                category: Category::History,
            }
        }]
    );
    assert!(state.submitting());
    // Nothing is shown before the gateway confirms.
    assert_eq!(state.items().len(), 3);

    let (state, effects) = update(
        state,
        Msg::FactCreated {
            result: Ok(fact(99, "T", Category::History)),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.items().len(), 4);
    assert_eq!(state.items()[0].text, "T");
    assert_eq!(state.items()[0].votes_interesting, 0);
    assert!(!state.submitting());
    assert!(!state.form_open());
    assert_eq!(state.draft().text, "");
    assert_eq!(state.draft().source, "");
    assert_eq!(state.draft().category, "");
}

#[test]
fn invalid_draft_is_rejected_without_effects() {
    init_logging();
    let state = fill(loaded_with_form(2), "", "https://x.com", "science");
    let before = state.items().to_vec();

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(!state.submitting());
    assert_eq!(state.items(), before.as_slice());
    assert_eq!(state.draft_error(), Some(&DraftError::EmptyText));
    assert_eq!(
        state.view().form.unwrap().error.as_deref(),
        Some("text is empty")
    );

    // Editing clears the rejection.
    let (state, _) = update(state, Msg::DraftTextChanged("ok".to_string()));
    assert!(state.draft_error().is_none());
}

#[test]
fn unknown_category_is_rejected() {
    let state = fill(loaded_with_form(0), "hi", "https://x.com", "gossip");
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(
        state.draft_error(),
        Some(&DraftError::UnknownCategory("gossip".to_string()))
    );
}

#[test]
fn create_failure_leaves_items_and_draft_intact() {
    init_logging();
    let state = fill(loaded_with_form(2), "T", "https://s.com", "history");
    let before = state.items().to_vec();
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(
        state,
        Msg::FactCreated {
            result: Err("http status 500".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ShowNotice(Notice::CreateFailed {
            reason: "http status 500".to_string()
        })]
    );
    assert_eq!(state.items(), before.as_slice());
    assert!(!state.submitting());
    assert!(state.form_open());
    assert_eq!(state.draft().text, "T");
    assert_eq!(state.draft().source, "https://s.com");
    assert_eq!(
        state.view().notice.as_deref(),
        Some("There was a problem uploading the fact")
    );
}

#[test]
fn form_is_locked_while_submitting() {
    init_logging();
    let state = fill(loaded_with_form(0), "T", "https://s.com", "news");
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::DraftTextChanged("changed".to_string()));
    assert_eq!(state.draft().text, "T");

    let (state, _) = update(state, Msg::FormToggled);
    assert!(state.form_open());
    assert!(state.view().form.unwrap().submitting);
}

#[test]
fn submit_needs_open_form() {
    let (state, _) = update(AppState::new(), Msg::DraftTextChanged("T".to_string()));
    assert_eq!(state.draft().text, "");
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(!state.submitting());
}

#[test]
fn unsolicited_create_completion_is_ignored() {
    init_logging();
    let state = loaded_with_form(1);
    let (next, effects) = update(
        state.clone(),
        Msg::FactCreated {
            result: Ok(fact(50, "ghost", Category::News)),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn prepend_replaces_duplicate_id_and_respects_cap() {
    init_logging();
    let state = fill(loaded_with_form(MAX_ITEMS as u64), "T", "https://s.com", "science");
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::FactCreated {
            result: Ok(fact(5, "T", Category::Science)),
        },
    );

    assert_eq!(state.items().len(), MAX_ITEMS);
    assert_eq!(state.items()[0].id, 5);
    assert_eq!(state.items()[0].text, "T");
    assert_eq!(state.items().iter().filter(|fact| fact.id == 5).count(), 1);
}

#[test]
fn closing_the_form_discards_the_draft() {
    let state = fill(loaded_with_form(0), "half written", "https://s.com", "news");
    let (state, _) = update(state, Msg::FormToggled);
    let (state, _) = update(state, Msg::FormToggled);
    assert_eq!(state.draft().text, "");
    assert_eq!(state.draft().source, DEFAULT_SOURCE);
}
