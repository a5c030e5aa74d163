pub mod poll;

use actix_web::{
    http::header,
    web::{get, scope, ServiceConfig},
    HttpResponse,
};

use crate::core::ports::repository::Manager;

pub async fn root() -> HttpResponse {
    HttpResponse::Found().insert_header((header::LOCATION, "/polls/")).finish()
}

/// Registers every route; `M` picks the store backing the handlers.
pub fn configure<M>(cfg: &mut ServiceConfig)
where
    M: Manager + 'static,
{
    cfg.route("/", get().to(root))
        .service(
            scope("/polls")
                .route("", get().to(poll::index::<M>))
                .route("/", get().to(poll::index::<M>))
                .route("/{poll_id}", get().to(poll::detail::<M>))
                .route("/{poll_id}/", get().to(poll::detail::<M>)),
        )
        .service(
            scope("/api/polls")
                .route("", get().to(poll::list::<M>))
                .route("/{poll_id}", get().to(poll::get::<M>)),
        );
}
