//! Shared handler state and the HTTP router.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{AuthError, SessionIssuer};
use crate::config::{AppConfig, SecurityConfig};
use crate::handlers;
use crate::middleware::{jwt_auth_middleware, require_admin};
use crate::services::{
    AnnouncementService, ComplaintService, InstitutionService, OwnershipResolver, SessionService, StatsService,
    StructuralOwnership, TicketService,
};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionService,
    pub ownership: Arc<dyn OwnershipResolver>,
    pub institutions: InstitutionService,
    pub tickets: TicketService,
    pub announcements: AnnouncementService,
    pub complaints: ComplaintService,
    pub stats: StatsService,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Store) -> Result<Self, AuthError> {
        let issuer = SessionIssuer::from_config(&config.security)?;

        Ok(Self {
            sessions: SessionService::new(
                store.principals.clone(),
                issuer,
                config.security.password_pepper.clone(),
            )?,
            ownership: Arc::new(StructuralOwnership),
            institutions: InstitutionService::new(store.institutions.clone()),
            tickets: TicketService::new(store.tickets.clone()),
            announcements: AnnouncementService::new(store.announcements),
            complaints: ComplaintService::new(store.complaints),
            stats: StatsService::new(store.principals, store.institutions, store.tickets),
        })
    }

    /// Replace the default one-account-per-institution resolver.
    pub fn with_ownership(mut self, ownership: Arc<dyn OwnershipResolver>) -> Self {
        self.ownership = ownership;
        self
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .merge(elevated_routes(state.clone()));

    let router = Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health));

    // axum refuses to nest at the root
    let router = match config.api.prefix.trim_end_matches('/') {
        "" => router.merge(api),
        prefix => router.nest(prefix, api),
    };

    router
        // Enforced by the body extractors, so oversize bodies get the error envelope.
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new().route("/auth/login", post(auth::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::auth;
    use handlers::protected::institution::{announcements, profile, stats, tickets};

    Router::new()
        .route("/auth/whoami", get(auth::whoami_get))
        .route(
            "/institutions/:institution_id",
            get(profile::profile_get).put(profile::profile_put),
        )
        .route("/institutions/:institution_id/stats", get(stats::stats_get))
        .route(
            "/institutions/:institution_id/announcements",
            get(announcements::announcements_get).post(announcements::announcements_post),
        )
        .route(
            "/institutions/:institution_id/announcements/:announcement_id",
            put(announcements::announcement_put).delete(announcements::announcement_delete),
        )
        .route(
            "/institutions/:institution_id/tickets",
            get(tickets::tickets_get).post(tickets::tickets_post),
        )
        .route(
            "/institutions/:institution_id/tickets/:ticket_id",
            put(tickets::ticket_put).delete(tickets::ticket_delete),
        )
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn elevated_routes(state: AppState) -> Router<AppState> {
    use handlers::elevated::admin::{complaints, institutions, stats};

    // Layers run outermost-last: authenticate, then require the admin role.
    Router::new()
        .route("/admin/stats", get(stats::stats_get))
        .route("/admin/institutions/verified", get(institutions::verified_get))
        .route("/admin/institutions/pending", get(institutions::pending_get))
        .route("/admin/institutions/:institution_id/approve", post(institutions::approve_post))
        .route("/admin/institutions/:institution_id/reject", post(institutions::reject_post))
        .route("/admin/complaints", get(complaints::complaints_get))
        .route("/admin/complaints/:complaint_id/resolve", post(complaints::resolve_post))
        .route_layer(from_fn(require_admin))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
