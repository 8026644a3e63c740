use crate::{Category, CategoryFilter, Fact, FactId};

/// Shown in place of the list when a load finished with no facts.
pub const EMPTY_FEED_MESSAGE: &str = "No facts for this category yet! Create the first one";

/// Immutable snapshot of everything the view needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedViewModel {
    pub filter: CategoryFilter,
    pub loading: bool,
    pub facts: Vec<FactRowView>,
    pub fact_count: usize,
    pub empty_message: Option<&'static str>,
    pub form_button_label: &'static str,
    pub form: Option<FormView>,
    pub notice: Option<String>,
    pub categories: Vec<CategoryChip>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRowView {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    pub category_color: &'static str,
    pub votes_interesting: u32,
    pub votes_mindblowing: u32,
    pub votes_false: u32,
    pub created_in: i32,
}

impl FactRowView {
    pub(crate) fn from_fact(fact: &Fact) -> Self {
        Self {
            id: fact.id,
            text: fact.text.clone(),
            source: fact.source.clone(),
            category: fact.category,
            category_color: fact.category.color(),
            votes_interesting: fact.votes_interesting,
            votes_mindblowing: fact.votes_mindblowing,
            votes_false: fact.votes_false,
            created_in: fact.created_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub text: String,
    pub source: String,
    pub category: String,
    /// Characters left before the text limit; negative once over it.
    pub remaining_chars: i64,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryChip {
    pub name: &'static str,
    pub color: &'static str,
}

impl From<Category> for CategoryChip {
    fn from(category: Category) -> Self {
        Self {
            name: category.name(),
            color: category.color(),
        }
    }
}
