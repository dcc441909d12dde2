//! JavaScript bindings, built with the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::router::Router;

/// Parse a textual board and answer whether its signal can reach a target.
///
/// Malformed boards are thrown as JavaScript `Error`s.
#[wasm_bindgen(js_name = canRouteSignal)]
pub fn can_route_signal(board: &str) -> Result<bool, JsValue> {
    let board: Board = board.parse()
        .map_err(|e: crate::error::BoardError| JsValue::from(js_sys::Error::new(&e.to_string())))?;

    Ok(Router::new(board).can_route_signal())
}
