use crate::{
    api::{leave_request, users},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let users_limiter = Arc::new(build_limiter(config.rate_users_per_min));
    let apply_limiter = Arc::new(build_limiter(config.rate_apply_per_min));
    let admin_limiter = Arc::new(build_limiter(config.rate_admin_per_min));

    cfg.service(
        web::resource("/users")
            .wrap(users_limiter.clone())
            .route(web::post().to(users::register_user))
            .route(web::get().to(users::list_users)),
    );

    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/leave")
                // /leave/apply
                .service(
                    web::resource("/apply")
                        .wrap(apply_limiter.clone())
                        .route(web::post().to(leave_request::apply_leave)),
                )
                // /leave/all
                .service(
                    web::resource("/all")
                        .wrap(admin_limiter.clone())
                        .route(web::get().to(leave_request::leave_list)),
                )
                // /leave/{id}/status
                .service(
                    web::resource("/{id}/status")
                        .wrap(admin_limiter.clone())
                        .route(web::put().to(leave_request::update_leave_status)),
                ),
        ),
    );
}
