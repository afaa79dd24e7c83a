use crate::constants::*;
use crate::dom::{self, Listener};
use anyhow::anyhow;
use folio_core::content;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_pdf() -> anyhow::Result<(web::Blob, String)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    let request = web::Request::new_with_str_and_init(RESUME_ENDPOINT, &init)
        .map_err(|e| anyhow!("{:?}", e))?;
    let response: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("status {}", response.status()));
    }
    let filename = response
        .headers()
        .get("content-disposition")
        .ok()
        .flatten()
        .and_then(|h| folio_core::disposition_filename(&h))
        .unwrap_or_else(|| folio_core::download_filename(content::NAME));
    let blob: web::Blob = JsFuture::from(response.blob().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok((blob, filename))
}

fn save(document: &web::Document, blob: &web::Blob, filename: &str) -> anyhow::Result<()> {
    let url = web::Url::create_object_url_with_blob(blob).map_err(|e| anyhow!("{:?}", e))?;
    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        _ = body.append_child(&anchor);
        anchor.click();
        _ = body.remove_child(&anchor);
    }
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}

fn show_error(document: &web::Document, message: Option<&str>) {
    if let Some(el) = document.get_element_by_id(RESUME_ERROR_ID) {
        el.set_text_content(message);
        dom::set_hidden(&el, message.is_none());
    }
}

/// Wire the download button. Requests are not overlapped; clicks while one
/// is in flight are ignored.
pub fn wire_download(document: &web::Document) -> Option<Listener> {
    let button = document.get_element_by_id(RESUME_BUTTON_ID)?;
    let busy = Rc::new(Cell::new(false));
    let doc = document.clone();
    let btn = button.clone();
    Listener::new(&button, "click", move |_| {
        if busy.replace(true) {
            return;
        }
        show_error(&doc, None);
        _ = btn.set_attribute("aria-busy", "true");
        let (doc, btn, busy) = (doc.clone(), btn.clone(), busy.clone());
        spawn_local(async move {
            let result = match fetch_pdf().await {
                Ok((blob, filename)) => save(&doc, &blob, &filename).map(|_| filename),
                Err(e) => Err(e),
            };
            match result {
                Ok(filename) => log::info!("[resume] downloaded {}", filename),
                Err(e) => {
                    log::error!("[resume] generation failed: {:?}", e);
                    show_error(&doc, Some(RESUME_ERROR_TEXT));
                }
            }
            _ = btn.remove_attribute("aria-busy");
            busy.set(false);
        });
    })
}
