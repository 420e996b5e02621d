use actix_web::web;
mod handlers;
mod widget;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(widget::index).service(
        web::scope("/api/v1")
            .service(handlers::get_wallet)
            .service(handlers::connect_wallet)
            .service(handlers::disconnect_wallet)
            .service(handlers::copy_wallet_address)
            .service(handlers::refresh_balance)
            .service(handlers::get_clipboard)
            .service(handlers::list_notices)
            .service(handlers::dismiss_notice),
    );
}
