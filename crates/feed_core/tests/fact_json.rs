use feed_core::{Category, Fact, NewFact};

#[test]
fn fact_reads_gateway_row_with_camel_case_columns() {
    let row = r#"{
        "id": 7,
        "text": "Lisbon is the capital of Portugal",
        "source": "https://en.wikipedia.org/wiki/Lisbon",
        "category": "society",
        "votesInteresting": 8,
        "votesMindblowing": 3,
        "votesFalse": 1,
        "createdIn": 2015
    }"#;

    let fact: Fact = serde_json::from_str(row).expect("row decodes");
    assert_eq!(fact.id, 7);
    assert_eq!(fact.category, Category::Society);
    assert_eq!(fact.votes_interesting, 8);
    assert_eq!(fact.votes_mindblowing, 3);
    assert_eq!(fact.votes_false, 1);
    assert_eq!(fact.created_in, 2015);
}

#[test]
fn missing_vote_columns_default_to_zero() {
    let row = r#"{"id":1,"text":"t","source":"https://s.com","category":"news","createdIn":2024}"#;
    let fact: Fact = serde_json::from_str(row).expect("row decodes");
    assert_eq!(
        (fact.votes_interesting, fact.votes_mindblowing, fact.votes_false),
        (0, 0, 0)
    );
}

#[test]
fn unknown_category_is_rejected_at_decode() {
    let row = r#"{"id":1,"text":"t","source":"https://s.com","category":"gossip","createdIn":2024}"#;
    assert!(serde_json::from_str::<Fact>(row).is_err());
}

#[test]
fn new_fact_carries_only_client_fields() {
    let draft = NewFact {
        text: "T".to_string(),
        source: "https://s.com".to_string(),
        category: Category::History,
    };
    let json = serde_json::to_value(&draft).expect("encodes");
    assert_eq!(
        json,
        serde_json::json!({"text": "T", "source": "https://s.com", "category": "history"})
    );
}
