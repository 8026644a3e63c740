use std::fmt;

use crate::{CategoryFilter, FetchTicket, NewFact};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load facts for `ticket.filter`; the completion must echo the ticket.
    FetchFacts { ticket: FetchTicket },
    /// Persist a validated draft.
    CreateFact { draft: NewFact },
    /// Interrupt the user with a failure alert.
    ShowNotice(Notice),
}

/// User-visible failure notice raised by a gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FetchFailed {
        filter: CategoryFilter,
        reason: String,
    },
    CreateFailed {
        reason: String,
    },
}

impl Notice {
    pub fn reason(&self) -> &str {
        match self {
            Notice::FetchFailed { reason, .. } | Notice::CreateFailed { reason } => reason,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FetchFailed { .. } => write!(f, "There was a problem getting data"),
            Notice::CreateFailed { .. } => write!(f, "There was a problem uploading the fact"),
        }
    }
}
