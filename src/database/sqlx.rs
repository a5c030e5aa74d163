use crate::config::Config;
use crate::core::models::{
    common::Pagination,
    poll::{Insert as PollInsert, Poll, Query as PollQuery},
};
use crate::core::ports::repository::{Manager, PollCommon, Store};
use crate::error::Error;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query_as, query_scalar, Executor, PgPool, Postgres, QueryBuilder, Transaction};

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

fn push_filters(stmt: &mut QueryBuilder<'_, Postgres>, query: &PollQuery) {
    stmt.push(" WHERE 1 = 1");
    if let Some(lte) = query.pub_date_lte {
        stmt.push(" AND pub_date <= ").push_bind(lte);
    }
}

fn select(query: &PollQuery, pagination: Option<Pagination>) -> QueryBuilder<'static, Postgres> {
    let mut stmt = QueryBuilder::new("SELECT id, question, pub_date FROM polls");
    push_filters(&mut stmt, query);
    stmt.push(" ORDER BY pub_date DESC, id ASC");
    if let Some(p) = pagination {
        stmt.push(" LIMIT ").push_bind(p.limit);
        if let Some(offset) = p.offset {
            stmt.push(" OFFSET ").push_bind(offset);
        }
    }
    stmt
}

fn select_count(query: &PollQuery) -> QueryBuilder<'static, Postgres> {
    let mut stmt = QueryBuilder::new("SELECT COUNT(id) FROM polls");
    push_filters(&mut stmt, query);
    stmt
}

impl<E> PollCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: PollInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO polls (question, pub_date) VALUES ($1, $2) RETURNING id")
            .bind(data.question)
            .bind(data.pub_date)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn query(&mut self, query: &PollQuery, pagination: Option<Pagination>) -> Result<Vec<Poll>, Error> {
        let mut stmt = select(query, pagination);
        let polls = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(polls)
    }

    async fn count(&mut self, query: &PollQuery) -> Result<i64, Error> {
        let mut stmt = select_count(query);
        let (n,): (i64,) = stmt.build_query_as().fetch_one(&mut self.executor).await?;
        Ok(n)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Poll>, Error> {
        let poll = query_as("SELECT id, question, pub_date FROM polls WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        Ok(poll)
    }
}

impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl<'c> Store for PgSqlx<Transaction<'c, Postgres>> {}

impl<'c> PgSqlx<Transaction<'c, Postgres>> {
    pub async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool and brings the schema up to date.
    pub async fn connect(url: &str, config: &Config) -> Result<Self, Error> {
        let pool = PgPoolOptions::new().max_connections(config.max_connections).connect(url).await?;
        sqlx::migrate!().run(&pool).await?;
        log::info!("connected to postgres with at most {} connections", config.max_connections);
        Ok(Self::new(pool))
    }

    pub async fn acquire(&self) -> Result<PgSqlx<PoolConnection<Postgres>>, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx::new(conn))
    }

    pub async fn begin(&self) -> Result<PgSqlx<Transaction<'static, Postgres>>, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx::new(tx))
    }
}

impl Manager for PgSqlxManager {
    type Handle = PgSqlx<PoolConnection<Postgres>>;

    async fn db(&self) -> Result<Self::Handle, Error> {
        self.acquire().await
    }
}
