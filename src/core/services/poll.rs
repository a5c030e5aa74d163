use chrono::{DateTime, Utc};

use crate::{
    core::{
        models::{
            common::Pagination,
            poll::{Insert as PollInsert, Poll, Query},
        },
        ports::repository::{PollCommon, Store},
    },
    error::Error,
};

pub async fn create_poll<S>(storer: &mut S, question: impl Into<String>, pub_date: DateTime<Utc>) -> Result<Poll, Error>
where
    S: Store,
{
    let question = question.into();
    let id = PollCommon::insert(
        storer,
        PollInsert {
            question: question.clone(),
            pub_date,
        },
    )
    .await?;
    log::debug!("created poll {} published at {}", id, pub_date);
    Ok(Poll { id, question, pub_date })
}

pub async fn list_published<S>(storer: &mut S, now: DateTime<Utc>, pagination: Option<Pagination>) -> Result<Vec<Poll>, Error>
where
    S: Store,
{
    PollCommon::query(storer, &Query::published(now), pagination).await
}

pub async fn published_with_total<S>(storer: &mut S, now: DateTime<Utc>, pagination: Option<Pagination>) -> Result<(Vec<Poll>, i64), Error>
where
    S: Store,
{
    let total = PollCommon::count(storer, &Query::published(now)).await?;
    let polls = list_published(storer, now, pagination).await?;
    Ok((polls, total))
}

/// Polls that exist but are scheduled after `now` are reported as missing.
pub async fn get_detail<S>(storer: &mut S, id: i32, now: DateTime<Utc>) -> Result<Poll, Error>
where
    S: Store,
{
    match PollCommon::get(storer, id).await? {
        Some(poll) if poll.is_published(now) => Ok(poll),
        _ => Err(Error::NotFound),
    }
}
