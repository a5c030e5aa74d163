use crate::core::models::{
    common::Pagination,
    poll::{Insert as PollInsert, Poll, Query as PollQuery},
};
use crate::core::ports::repository::{Manager, PollCommon, Store};
use crate::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: Vec<Poll>,
}

/// Process-local poll table shared by every handle cloned from it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, Error> {
        self.table.lock().map_err(|_| Error::ServerError("memory store lock poisoned".into()))
    }
}

impl PollCommon for MemoryStore {
    async fn insert(&mut self, data: PollInsert) -> Result<i32, Error> {
        let mut table = self.lock()?;
        let id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::ServerError("memory store ran out of poll ids".into()))?;
        table.next_id = id;
        table.rows.push(Poll {
            id,
            question: data.question,
            pub_date: data.pub_date,
        });
        Ok(id)
    }

    async fn query(&mut self, query: &PollQuery, pagination: Option<Pagination>) -> Result<Vec<Poll>, Error> {
        let table = self.lock()?;
        let mut polls: Vec<Poll> = table.rows.iter().filter(|p| query.matches(p)).cloned().collect();
        polls.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(a.id.cmp(&b.id)));
        Ok(match pagination {
            Some(p) => p.slice(&polls),
            None => polls,
        })
    }

    async fn count(&mut self, query: &PollQuery) -> Result<i64, Error> {
        let table = self.lock()?;
        Ok(table.rows.iter().filter(|p| query.matches(p)).count() as i64)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Poll>, Error> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }
}

impl Store for MemoryStore {}

impl Manager for MemoryStore {
    type Handle = MemoryStore;

    async fn db(&self) -> Result<Self::Handle, Error> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn insert(question: &str) -> PollInsert {
        PollInsert {
            question: question.into(),
            pub_date: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn ids_increase_from_one() {
        let mut store = MemoryStore::new();
        assert_eq!(store.insert(insert("Poll1")).await.unwrap(), 1);
        assert_eq!(store.insert(insert("Poll2")).await.unwrap(), 2);
    }

    #[actix_web::test]
    async fn exhausted_ids_are_an_error() {
        let mut store = MemoryStore::new();
        store.table.lock().unwrap().next_id = i32::MAX;
        assert!(matches!(store.insert(insert("Overflow")).await, Err(Error::ServerError(_))));
        assert_eq!(store.count(&PollQuery::default()).await.unwrap(), 0);
    }
}
