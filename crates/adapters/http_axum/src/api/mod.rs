//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod homes;

use axum::Router;
use axum::routing::get;

use homelist_app::ports::HomeRepository;

use crate::state::AppState;

/// Build the `/homes` resource router.
pub fn routes<HR>() -> Router<AppState<HR>>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/homes",
            get(homes::list::<HR>)
                .post(homes::create::<HR>)
                .delete(homes::clear::<HR>),
        )
        .route(
            "/homes/{id}",
            get(homes::show::<HR>)
                .patch(homes::update::<HR>)
                .put(homes::replace::<HR>)
                .delete(homes::delete::<HR>),
        )
}
