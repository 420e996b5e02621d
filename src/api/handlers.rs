use actix_web::{delete, get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::errors::ConnectorError;
use crate::models::api_response::success_response;
use crate::services::{
    clipboard::SessionClipboard, connector::WalletConnector, notice_service::NoticeBoard,
};

#[get("/wallet")]
async fn get_wallet(connector: web::Data<WalletConnector>) -> impl Responder {
    success_response(connector.view())
}

#[post("/wallet/connect")]
async fn connect_wallet(connector: web::Data<WalletConnector>) -> impl Responder {
    connector.connect().await;
    success_response(connector.view())
}

#[post("/wallet/disconnect")]
async fn disconnect_wallet(connector: web::Data<WalletConnector>) -> impl Responder {
    connector.disconnect().await;
    success_response(connector.view())
}

#[post("/wallet/copy")]
async fn copy_wallet_address(connector: web::Data<WalletConnector>) -> impl Responder {
    connector.copy_address().await;
    success_response(connector.view())
}

#[post("/wallet/balance")]
async fn refresh_balance(
    connector: web::Data<WalletConnector>,
) -> Result<HttpResponse, ConnectorError> {
    connector.refresh_balance().await?;
    Ok(success_response(connector.view()))
}

#[get("/clipboard")]
async fn get_clipboard(
    clipboard: web::Data<SessionClipboard>,
) -> Result<HttpResponse, ConnectorError> {
    let text = clipboard
        .read_text()
        .ok_or(ConnectorError::ClipboardEmptyError)?;
    Ok(success_response(text))
}

#[get("/notices")]
async fn list_notices(notices: web::Data<NoticeBoard>) -> impl Responder {
    success_response(notices.pending())
}

#[delete("/notices/{id}")]
async fn dismiss_notice(
    notices: web::Data<NoticeBoard>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ConnectorError> {
    let notice = notices.dismiss(id.into_inner())?;
    Ok(success_response(notice))
}
