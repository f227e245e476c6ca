//! API 路由配置 `/api`

use actix_web::web;

use super::auth::{login, logout};
use super::calls::{create_call, delete_call, get_calls, reorder_calls, reset_calls};
use super::helpers::json_config;
use super::offers::{create_offer, delete_offer, get_offers, update_offer};
use super::tracking::{get_analytics, get_logs, track_click};

/// 呼叫队列路由 `/calls`
///
/// `/reset` 与 `/reorder` 必须在 `/{index}` 之前注册
fn calls_routes() -> actix_web::Scope {
    web::scope("/calls")
        .route("", web::get().to(get_calls))
        .route("", web::post().to(create_call))
        .route("/reset", web::post().to(reset_calls))
        .route("/reorder", web::post().to(reorder_calls))
        .route("/{index}", web::delete().to(delete_call))
}

fn offers_routes() -> actix_web::Scope {
    web::scope("/offers")
        .route("", web::get().to(get_offers))
        .route("", web::post().to(create_offer))
        .route("/{id}", web::put().to(update_offer))
        .route("/{id}", web::delete().to(delete_offer))
}

/// 全部 API 路由，挂载在 `/api` 下
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .service(offers_routes())
        .service(calls_routes())
        .route("/click", web::post().to(track_click))
        .route("/analytics", web::get().to(get_analytics))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/logs", web::get().to(get_logs))
}
