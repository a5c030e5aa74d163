use actix_web::{
    http::header::ContentType,
    web::{Data, Json, Path},
    HttpResponse,
};
use chrono::Utc;

use crate::config::Config;
use crate::core::models::poll::Detail;
use crate::core::ports::repository::Manager;
use crate::core::services::poll::{get_detail, list_published, published_with_total};
use crate::error::Error;
use crate::render;
use crate::response::List;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub async fn index<M>(manager: Data<M>, config: Data<Config>) -> Result<HttpResponse, Error>
where
    M: Manager + 'static,
{
    let mut db = manager.db().await?;
    let polls = list_published(&mut db, Utc::now(), config.index_pagination()).await?;
    Ok(html(render::index(&polls)))
}

pub async fn detail<M>(manager: Data<M>, poll_id: Path<(i32,)>) -> Result<HttpResponse, Error>
where
    M: Manager + 'static,
{
    let poll_id = poll_id.into_inner().0;
    let mut db = manager.db().await?;
    let poll = get_detail(&mut db, poll_id, Utc::now()).await?;
    Ok(html(render::detail(&poll)))
}

pub async fn list<M>(manager: Data<M>, config: Data<Config>) -> Result<Json<List<Detail>>, Error>
where
    M: Manager + 'static,
{
    let now = Utc::now();
    let mut db = manager.db().await?;
    let (polls, total) = published_with_total(&mut db, now, config.index_pagination()).await?;
    let list = polls.into_iter().map(|p| Detail::new(p, now)).collect();
    Ok(Json(List::new(list, total)))
}

pub async fn get<M>(manager: Data<M>, poll_id: Path<(i32,)>) -> Result<Json<Detail>, Error>
where
    M: Manager + 'static,
{
    let now = Utc::now();
    let poll_id = poll_id.into_inner().0;
    let mut db = manager.db().await?;
    let poll = get_detail(&mut db, poll_id, now).await?;
    Ok(Json(Detail::new(poll, now)))
}
