//! One-shot browser geolocation
//!
//! Best effort only: the result (or the denial) arrives via callback
//! and is used purely for display. No watch, no retry.

use openvote_common::GpsFix;
use wasm_bindgen::prelude::*;
use web_sys::{Position, PositionError};

/// Request the device position once. `on_fix` receives the coordinates,
/// `on_denied` the browser's error message. Errors setting up the
/// request (no geolocation support) are reported through `on_denied`
/// as well so the caller has a single failure path.
pub fn request_position<S, E>(on_fix: S, on_denied: E)
where
    S: Fn(GpsFix) + 'static,
    E: Fn(String) + 'static,
{
    let geolocation = match web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.geolocation().ok())
    {
        Some(geolocation) => geolocation,
        None => {
            on_denied("geolocation is not available".to_string());
            return;
        }
    };

    let success = Closure::wrap(Box::new(move |position: Position| {
        let coords = position.coords();
        on_fix(GpsFix {
            latitude: coords.latitude(),
            longitude: coords.longitude(),
        });
    }) as Box<dyn FnMut(Position)>);

    let failure = Closure::wrap(Box::new(move |error: PositionError| {
        on_denied(error.message());
    }) as Box<dyn FnMut(PositionError)>);

    if geolocation
        .get_current_position_with_error_callback(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
        )
        .is_ok()
    {
        // Callbacks outlive this call; the browser owns them now.
        success.forget();
        failure.forget();
    }
}
