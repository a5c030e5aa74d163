use crate::core::models::{
    common::Pagination,
    poll::{Insert as PollInsert, Poll, Query as PollQuery},
};
use crate::error::Error;

#[allow(async_fn_in_trait)]
pub trait PollCommon {
    async fn insert(&mut self, data: PollInsert) -> Result<i32, Error>;
    /// Rows matching `query`, newest `pub_date` first, ties by ascending id.
    async fn query(&mut self, query: &PollQuery, pagination: Option<Pagination>) -> Result<Vec<Poll>, Error>;
    async fn count(&mut self, query: &PollQuery) -> Result<i64, Error>;
    async fn get(&mut self, id: i32) -> Result<Option<Poll>, Error>;
}

pub trait Store: PollCommon {}

#[allow(async_fn_in_trait)]
pub trait Manager {
    type Handle: Store;
    async fn db(&self) -> Result<Self::Handle, Error>;
}
