use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::HealthDto,
    server::{
        config::Config,
        controller::{
            auth, carpool, discussion, event, group, media, poll, shopping, ticket, user,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        user::me,
        user::get_user,
        group::create_group,
        group::list_groups,
        group::get_group,
        group::update_group,
        group::delete_group,
        group::add_group_member,
        group::list_group_members,
        group::update_group_member,
        group::remove_group_member,
        event::create_event,
        event::list_events,
        event::get_event,
        event::update_event,
        event::delete_event,
        event::add_event_organizer,
        event::remove_event_organizer,
        event::add_event_participant,
        event::remove_event_participant,
        discussion::create_thread,
        discussion::get_thread,
        discussion::create_message,
        discussion::list_messages,
        media::create_album,
        media::list_albums,
        media::delete_album,
        media::add_photo,
        media::list_photos,
        media::add_comment,
        media::list_comments,
        poll::create_poll,
        poll::list_polls,
        poll::get_poll,
        poll::submit_votes,
        ticket::create_ticket_type,
        ticket::list_ticket_types,
        ticket::purchase_ticket,
        shopping::add_shopping_item,
        shopping::list_shopping_items,
        shopping::update_shopping_item,
        shopping::delete_shopping_item,
        carpool::create_carpool_offer,
        carpool::list_carpool_offers,
        carpool::update_carpool_offer,
        carpool::delete_carpool_offer,
    ),
    tags(
        (name = "auth", description = "Registration and token issuance"),
        (name = "users", description = "User profiles"),
        (name = "groups", description = "Groups and memberships"),
        (name = "events", description = "Events, organizers and participants"),
        (name = "discussions", description = "Discussion threads and messages"),
        (name = "media", description = "Albums, photos and comments"),
        (name = "polls", description = "Polls and voting"),
        (name = "tickets", description = "Ticket types and purchases"),
        (name = "shopping", description = "Event shopping lists"),
        (name = "carpool", description = "Event carpooling"),
    )
)]
struct ApiDoc;

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .route("/", get(healthcheck))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/token", post(auth::login))
        .route("/api/users/me", get(user::me))
        .route("/api/users/{user_id}", get(user::get_user))
        .route("/api/groups", post(group::create_group).get(group::list_groups))
        .route(
            "/api/groups/{group_id}",
            get(group::get_group)
                .patch(group::update_group)
                .delete(group::delete_group),
        )
        .route(
            "/api/groups/{group_id}/members",
            post(group::add_group_member).get(group::list_group_members),
        )
        .route(
            "/api/groups/{group_id}/members/{user_id}",
            patch(group::update_group_member).delete(group::remove_group_member),
        )
        .route("/api/events", post(event::create_event).get(event::list_events))
        .route(
            "/api/events/{event_id}",
            get(event::get_event)
                .patch(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/events/{event_id}/organizers",
            post(event::add_event_organizer),
        )
        .route(
            "/api/events/{event_id}/organizers/{user_id}",
            delete(event::remove_event_organizer),
        )
        .route(
            "/api/events/{event_id}/participants",
            post(event::add_event_participant),
        )
        .route(
            "/api/events/{event_id}/participants/{user_id}",
            delete(event::remove_event_participant),
        )
        .route("/api/discussions", post(discussion::create_thread))
        .route("/api/discussions/{thread_id}", get(discussion::get_thread))
        .route(
            "/api/discussions/{thread_id}/messages",
            post(discussion::create_message).get(discussion::list_messages),
        )
        .route(
            "/api/media/events/{event_id}/albums",
            post(media::create_album).get(media::list_albums),
        )
        .route("/api/media/albums/{album_id}", delete(media::delete_album))
        .route(
            "/api/media/albums/{album_id}/photos",
            post(media::add_photo).get(media::list_photos),
        )
        .route(
            "/api/media/photos/{photo_id}/comments",
            post(media::add_comment).get(media::list_comments),
        )
        .route(
            "/api/polls/events/{event_id}",
            post(poll::create_poll).get(poll::list_polls),
        )
        .route("/api/polls/{poll_id}", get(poll::get_poll))
        .route("/api/polls/{poll_id}/votes", post(poll::submit_votes))
        .route(
            "/api/tickets/events/{event_id}/types",
            post(ticket::create_ticket_type).get(ticket::list_ticket_types),
        )
        .route(
            "/api/tickets/types/{ticket_type_id}/purchase",
            post(ticket::purchase_ticket),
        )
        .route(
            "/api/shopping/events/{event_id}/items",
            post(shopping::add_shopping_item).get(shopping::list_shopping_items),
        )
        .route(
            "/api/shopping/items/{item_id}",
            patch(shopping::update_shopping_item).delete(shopping::delete_shopping_item),
        )
        .route(
            "/api/carpool/events/{event_id}/offers",
            post(carpool::create_carpool_offer).get(carpool::list_carpool_offers),
        )
        .route(
            "/api/carpool/offers/{offer_id}",
            patch(carpool::update_carpool_offer).delete(carpool::delete_carpool_offer),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

async fn healthcheck() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            message: "huddle API ready".to_string(),
        }),
    )
}

/// Builds the CORS layer from the configured origins; `*` allows any origin.
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        layer.allow_origin(origins)
    }
}
