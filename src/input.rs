use glam::Vec2;
use web_sys as web;

/// Last pointer position in canvas CSS pixels, `None` once the pointer leaves.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Option<Vec2>,
}

/// Map a client-space point into a canvas of `backing` pixels displayed at
/// `rect_origin`/`rect_size`. Degenerate rects map to the origin.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) / rect_size * backing
}

#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        size,
        size,
    )
}

/// Parse an `<input type="range">` value. Empty or non-numeric input yields
/// `None`; the store clamps whatever is returned.
#[inline]
pub fn parse_slider(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Slider values are shown as two-decimal hyperparameters.
#[inline]
pub fn format_slider(value: f32) -> String {
    format!("{:.2}", value)
}
