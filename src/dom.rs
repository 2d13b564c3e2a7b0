use crate::attrs;
use crate::constants::{ITEM_ID_ATTR, ITEM_SELECTOR};
use carousel_core::{CarouselConfig, CarouselItem};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Render payload for one carousel item: its element and optional video.
#[derive(Clone)]
pub struct ItemElement {
    pub element: web::HtmlElement,
    pub video: Option<web::HtmlVideoElement>,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_container(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector:?}: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("{selector} is not an HTML element"))
}

/// Collect the container's item elements in document order.
///
/// `data-id` supplies the item id (falling back to the position), and a
/// nested `<video>` marks the item as media-bearing.
pub fn collect_items(container: &web::HtmlElement) -> anyhow::Result<Vec<CarouselItem<ItemElement>>> {
    let nodes = container
        .query_selector_all(ITEM_SELECTOR)
        .map_err(|e| anyhow::anyhow!("querying items: {e:?}"))?;
    let mut items = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let element = match node.dyn_into::<web::HtmlElement>() {
            Ok(el) => el,
            Err(_) => {
                log::warn!("[dom] item {} is not an HTML element, skipped", i);
                continue;
            }
        };
        let id = element
            .get_attribute(ITEM_ID_ATTR)
            .unwrap_or_else(|| i.to_string());
        let video = element
            .query_selector("video")
            .ok()
            .flatten()
            .and_then(|v| v.dyn_into::<web::HtmlVideoElement>().ok());
        let source = video.as_ref().map(|v| {
            v.get_attribute("src")
                .unwrap_or_else(|| v.current_src())
        });

        let mut item = CarouselItem::new(id, ItemElement { element, video });
        if let Some(src) = source {
            item = item.with_media(src);
        }
        items.push(item);
    }
    Ok(items)
}

/// Engine options from the container's `data-*` attributes; bad values are
/// logged and the default kept.
pub fn read_config(container: &web::HtmlElement) -> CarouselConfig {
    let present: Vec<(&str, String)> = attrs::CONFIG_ATTRS
        .iter()
        .filter_map(|attr| container.get_attribute(attr).map(|v| (*attr, v)))
        .collect();
    let (config, problems) =
        attrs::config_from_attrs(present.iter().map(|(a, v)| (*a, v.as_str())));
    for p in problems {
        log::warn!("[dom] ignoring carousel attribute: {}", p);
    }
    config
}

pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("[dom] set {}={} failed: {:?}", property, value, e);
    }
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    let list = element.class_list();
    _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
