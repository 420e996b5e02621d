use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::models::{
    notice::Notice,
    view::{WidgetView, TOKEN_SYMBOL},
};
use crate::services::{connector::WalletConnector, notice_service::NoticeBoard};

// Buttons post to the JSON API and reload. After a copy the page pulls the
// address from the host clipboard and hands it to the browser's clipboard.
const SCRIPT: &str = r#"<script>
async function act(path) {
  await fetch('/api/v1/wallet/' + path, { method: 'POST' });
  if (path === 'copy') {
    const res = await fetch('/api/v1/clipboard');
    if (res.ok) {
      const body = await res.json();
      await navigator.clipboard.writeText(body.result);
    }
  }
  location.reload();
}
async function dismiss(id) {
  await fetch('/api/v1/notices/' + id, { method: 'DELETE' });
}
for (const el of document.querySelectorAll('[data-notice]')) {
  alert(el.textContent);
  dismiss(el.dataset.notice);
}
if (document.querySelector('[data-copied]')) {
  setTimeout(() => location.reload(), 2000);
}
</script>"#;

#[get("/")]
async fn index(
    connector: web::Data<WalletConnector>,
    notices: web::Data<NoticeBoard>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_widget(&connector.view(), &notices.pending()))
}

pub fn render_widget(view: &WidgetView, notices: &[Notice]) -> String {
    let mut body = String::from("<h1>Aptos Wallet</h1>\n");

    for notice in notices {
        body.push_str(&format!(
            "<p class=\"notice\" data-notice=\"{}\">{}</p>\n",
            notice.id,
            escape(&notice.message)
        ));
    }

    match (&view.address, &view.short_address) {
        (Some(address), Some(short_address)) => {
            body.push_str(
                "<button onclick=\"act('disconnect')\">Disconnect Wallet</button>\n",
            );
            body.push_str(&format!(
                "<section>\n<p>Wallet Address</p>\n<p title=\"{}\">{}</p>\n",
                escape(address),
                escape(short_address)
            ));
            body.push_str(&format!(
                "<button onclick=\"act('copy')\" title=\"Copy Wallet Address\"{}>{}</button>\n",
                if view.copied { " data-copied" } else { "" },
                if view.copied { "Copied" } else { "Copy" }
            ));
            body.push_str(&format!(
                "<p>Token Balance</p>\n<p>{}</p>\n</section>\n",
                view.balance_display.as_deref().unwrap_or(TOKEN_SYMBOL)
            ));
        }
        _ => body.push_str(
            "<button onclick=\"act('connect')\">Connect to Aptos Wallet</button>\n",
        ),
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Aptos Wallet</title></head>\n<body>\n{}{}\n</body>\n</html>\n",
        body, SCRIPT
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
