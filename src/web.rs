//! Browser entry point.
//!
//! Waits for DOMContentLoaded, fetches `/coin-data` through `window.fetch`
//! and renders into the live document. Failures go to the developer
//! console; the page is otherwise left as it was.

use async_trait::async_trait;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Response};

use crate::fetch::{CoinSource, FetchError, COIN_DATA_PATH};
use crate::models::{parse_coin_data, CoinDescriptor};
use crate::pipeline::{fetch_and_render, PageState, Trigger};
use crate::render::{CoinContainer, CoinHost, RenderError, COIN_CLASS, COIN_TAG};

/// Fetches descriptors with `window.fetch`, relative to the page origin.
struct WindowFetchSource {
    path: &'static str,
}

#[async_trait(?Send)]
impl CoinSource for WindowFetchSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinDescriptor>, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Request("no global `window`".into()))?;

        let response: Response = JsFuture::from(window.fetch_with_str(self.path))
            .await
            .map_err(request_error)?
            .dyn_into()
            .map_err(request_error)?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: response.url(),
            });
        }

        let text = JsFuture::from(response.text().map_err(request_error)?)
            .await
            .map_err(request_error)?
            .as_string()
            .unwrap_or_default();

        Ok(parse_coin_data(text.as_bytes())?)
    }
}

fn request_error(value: JsValue) -> FetchError {
    FetchError::Request(format!("{:?}", value))
}

fn dom_error(value: JsValue) -> RenderError {
    RenderError::Dom(format!("{:?}", value))
}

/// The live document.
struct WebPage {
    document: Document,
}

impl CoinHost for WebPage {
    type Container = WebContainer;

    fn query_container(self, selector: &str) -> Result<Option<WebContainer>, RenderError> {
        let element = self.document.query_selector(selector).map_err(dom_error)?;
        Ok(element.map(|element| WebContainer {
            document: self.document,
            element,
        }))
    }
}

/// The live `.coin-background` element.
struct WebContainer {
    document: Document,
    element: Element,
}

impl CoinContainer for WebContainer {
    fn append_coin(&mut self, coin: &CoinDescriptor) -> Result<(), RenderError> {
        let node = self.document.create_element(COIN_TAG).map_err(dom_error)?;
        node.set_class_name(COIN_CLASS);
        node.set_attribute("style", &coin.inline_style())
            .map_err(dom_error)?;
        self.element.append_child(&node).map_err(dom_error)?;
        Ok(())
    }
}

fn page_state(document: &Document) -> PageState {
    match document.ready_state().as_str() {
        "loading" => PageState::Loading,
        "interactive" => PageState::Interactive,
        _ => PageState::Complete,
    }
}

fn launch(document: Document) {
    spawn_local(async move {
        let source = WindowFetchSource {
            path: COIN_DATA_PATH,
        };
        if let Err(err) = fetch_and_render(&source, WebPage { document }).await {
            web_sys::console::error_1(&format!("coinfall: {}", err).into());
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    match Trigger::for_state(page_state(&document)) {
        Trigger::Now => launch(document),
        Trigger::OnContentLoaded => {
            let target = document.clone();
            let callback = Closure::once_into_js(move || launch(document));
            target.add_event_listener_with_callback(
                "DOMContentLoaded",
                callback.unchecked_ref::<js_sys::Function>(),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_coins;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Fresh `.coin-background` under `<body>`, with any earlier one removed.
    fn fresh_container(document: &Document) -> Element {
        if let Some(old) = document.query_selector(".coin-background").unwrap() {
            old.remove();
        }
        let container = document.create_element("div").unwrap();
        container.set_class_name("coin-background");
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    #[wasm_bindgen_test]
    fn test_loaded_page_starts_now() {
        assert_eq!(Trigger::for_state(page_state(&document())), Trigger::Now);
    }

    #[wasm_bindgen_test]
    fn test_render_into_live_container() {
        let document = document();
        let container = fresh_container(&document);
        let coins = [
            CoinDescriptor::new(10.0, 5.0, 3.0, 0.0),
            CoinDescriptor::new(24.0, 40.5, 8.2, 1.3),
        ];

        let count = render_coins(WebPage { document: document.clone() }, &coins).unwrap();
        assert_eq!(count, 2);

        let children = container.children();
        assert_eq!(children.length(), 2);
        for (index, coin) in coins.iter().enumerate() {
            let element = children.item(index as u32).unwrap();
            assert_eq!(element.tag_name(), "DIV");
            assert_eq!(element.class_name(), "coin");
            assert_eq!(element.get_attribute("style"), Some(coin.inline_style()));
        }
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_live_container() {
        let document = document();
        fresh_container(&document).remove();

        let coins = [CoinDescriptor::new(10.0, 5.0, 3.0, 0.0)];
        let err = render_coins(WebPage { document: document.clone() }, &coins).unwrap_err();
        assert!(matches!(err, RenderError::ContainerMissing(_)));

        assert_eq!(render_coins(WebPage { document }, &[]).unwrap(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_fetch_missing_endpoint_fails() {
        let source = WindowFetchSource {
            path: "/coinfall-missing/coin-data",
        };
        assert!(source.fetch_coins().await.is_err());
    }
}
