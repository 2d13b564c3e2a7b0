use crate::dom::ItemElement;
use carousel_core::{MediaAction, MediaSignal};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Carry out one play/pause request on the item's `<video>`.
///
/// `play()` resolves asynchronously and is rejected by autoplay policies
/// until the page has seen a user gesture; rejections are only logged.
pub fn apply_signal(signal: &MediaSignal, item: &ItemElement) {
    let Some(video) = item.video.as_ref() else {
        return;
    };
    match signal.action {
        MediaAction::Play => match video.play() {
            Ok(promise) => {
                let id = signal.id.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[media] play rejected for {}: {:?}", id, e);
                    }
                });
            }
            Err(e) => log::warn!("[media] play failed for {}: {:?}", signal.id, e),
        },
        MediaAction::Pause => {
            if let Err(e) = video.pause() {
                log::warn!("[media] pause failed for {}: {:?}", signal.id, e);
            }
        }
    }
}
