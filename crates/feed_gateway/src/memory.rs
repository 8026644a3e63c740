use std::sync::Mutex;

use chrono::Datelike;
use feed_core::{Category, CategoryFilter, Fact, FactId, NewFact, MAX_ITEMS};

use crate::{FactGateway, FailureKind, GatewayError};

/// In-process fact store with the same query contract as the remote one.
#[derive(Debug)]
pub struct MemoryGateway {
    table: Mutex<Table>,
    max_records: usize,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Fact>,
    next_id: FactId,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::with_facts(Vec::new())
    }

    /// Store pre-populated with `rows`; new ids continue after the largest one.
    pub fn with_facts(rows: Vec<Fact>) -> Self {
        let next_id = rows.iter().map(|fact| fact.id).max().unwrap_or(0) + 1;
        Self {
            table: Mutex::new(Table { rows, next_id }),
            max_records: MAX_ITEMS,
        }
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn len(&self) -> usize {
        self.table.lock().map(|table| table.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> Result<std::sync::MutexGuard<'_, Table>, GatewayError> {
        self.table
            .lock()
            .map_err(|_| GatewayError::new(FailureKind::Unavailable, "table lock poisoned"))
    }
}

#[async_trait::async_trait]
impl FactGateway for MemoryGateway {
    async fn fetch_facts(&self, filter: CategoryFilter) -> Result<Vec<Fact>, GatewayError> {
        let table = self.table()?;
        let mut rows: Vec<Fact> = table
            .rows
            .iter()
            .filter(|fact| filter.matches(fact.category))
            .cloned()
            .collect();
        // Stable, so equal vote counts keep insertion order.
        rows.sort_by(|a, b| b.votes_interesting.cmp(&a.votes_interesting));
        rows.truncate(self.max_records);
        Ok(rows)
    }

    async fn create_fact(&self, draft: &NewFact) -> Result<Fact, GatewayError> {
        let mut table = self.table()?;
        let fact = Fact {
            id: table.next_id,
            text: draft.text.clone(),
            source: draft.source.clone(),
            category: draft.category,
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: chrono::Utc::now().year(),
        };
        table.next_id += 1;
        table.rows.push(fact.clone());
        Ok(fact)
    }
}

/// A few facts to start an offline session with.
pub fn sample_facts() -> Vec<Fact> {
    vec![
        Fact {
            id: 1,
            text: "React is being developed by Meta (formerly facebook)".to_string(),
            source: "https://opensource.fb.com/".to_string(),
            category: Category::Technology,
            votes_interesting: 24,
            votes_mindblowing: 9,
            votes_false: 4,
            created_in: 2021,
        },
        Fact {
            id: 2,
            text: "Millennial dads spend 3 times as much time with their kids than their \
                   fathers spent with them. In 1982, 43% of fathers had never changed a \
                   diaper. Today, that number is down to 3%"
                .to_string(),
            source: "https://www.mother.ly/parenting/millennial-dads-spend-more-time-with-their-kids"
                .to_string(),
            category: Category::Society,
            votes_interesting: 11,
            votes_mindblowing: 2,
            votes_false: 0,
            created_in: 2019,
        },
        Fact {
            id: 3,
            text: "Lisbon is the capital of Portugal".to_string(),
            source: "https://en.wikipedia.org/wiki/Lisbon".to_string(),
            category: Category::Society,
            votes_interesting: 8,
            votes_mindblowing: 3,
            votes_false: 1,
            created_in: 2015,
        },
    ]
}
