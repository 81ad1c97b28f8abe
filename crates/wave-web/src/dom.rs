use wave_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size * devicePixelRatio.
///
/// Returns the viewport the engine should use; a collapsed element reports a
/// zero dimension even though the backing store is kept at least 1px.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(canvas.width(), canvas.height());
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    if canvas.width() != w_px.max(1) {
        canvas.set_width(w_px.max(1));
    }
    if canvas.height() != h_px.max(1) {
        canvas.set_height(h_px.max(1));
    }
    Viewport::new(w_px, h_px)
}
