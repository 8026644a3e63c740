use serde::{Deserialize, Serialize};

use crate::Category;

/// Gateway-assigned identifier; opaque to the client.
pub type FactId = u64;

/// A persisted feed record, as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    #[serde(default)]
    pub votes_interesting: u32,
    #[serde(default)]
    pub votes_mindblowing: u32,
    #[serde(default)]
    pub votes_false: u32,
    pub created_in: i32,
}

impl Fact {
    pub(crate) fn apply_vote(&mut self, vote: VoteKind) {
        let counter = match vote {
            VoteKind::Interesting => &mut self.votes_interesting,
            VoteKind::Mindblowing => &mut self.votes_mindblowing,
            VoteKind::False => &mut self.votes_false,
        };
        *counter = counter.saturating_add(1);
    }
}

/// A validated draft ready to be persisted. Ids, years and vote counters
/// are assigned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Interesting,
    Mindblowing,
    False,
}
