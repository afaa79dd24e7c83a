use crate::constants::*;
use folio_core::{ParticleField, Starfield};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const TAU: f64 = std::f64::consts::TAU;

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

#[inline]
pub fn hsla(hue: f32, saturation_pct: u8, lightness_pct: u8, alpha: f32) -> String {
    format!(
        "hsla({:.1}, {}%, {}%, {:.3})",
        hue.rem_euclid(360.0),
        saturation_pct,
        lightness_pct,
        alpha.clamp(0.0, 1.0)
    )
}

/// A 2D canvas whose drawing units are CSS pixels.
pub struct Canvas2d {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css_size: Vec2,
}

impl Canvas2d {
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        let mut c = Self {
            canvas,
            ctx,
            css_size: Vec2::ZERO,
        };
        c.sync_size();
        Some(c)
    }

    /// Re-read the CSS size. Returns `true` when it changed.
    pub fn sync_size(&mut self) -> bool {
        let dpr = crate::dom::sync_canvas_backing_size(&self.canvas);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        let rect = self.canvas.get_bounding_client_rect();
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        let changed = size != self.css_size;
        self.css_size = size;
        changed
    }

    pub fn size(&self) -> Vec2 {
        self.css_size
    }

    #[allow(deprecated)]
    fn fill_style(&self, style: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }

    #[allow(deprecated)]
    fn stroke_style(&self, style: &str) {
        self.ctx.set_stroke_style(&JsValue::from_str(style));
    }

    pub fn clear(&self, color: &str) {
        self.fill_style(color);
        self.ctx
            .fill_rect(0.0, 0.0, self.css_size.x as f64, self.css_size.y as f64);
    }

    fn dot(&self, x: f32, y: f32, r: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x as f64, y as f64, r as f64, 0.0, TAU);
        self.ctx.fill();
    }
}

pub fn draw_particles(c: &Canvas2d, field: &ParticleField) {
    c.clear(PARTICLE_BACKGROUND);
    let particles = field.particles();
    for p in particles {
        c.fill_style(&rgba(PARTICLE_RGB, p.opacity));
        c.dot(p.pos.x, p.pos.y, p.radius);
    }
    c.ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        let (a, b) = (particles[link.a].pos, particles[link.b].pos);
        c.stroke_style(&rgba(PARTICLE_RGB, link.opacity));
        c.ctx.begin_path();
        c.ctx.move_to(a.x as f64, a.y as f64);
        c.ctx.line_to(b.x as f64, b.y as f64);
        c.ctx.stroke();
    }
}

#[allow(deprecated)]
pub fn draw_starfield(
    c: &Canvas2d,
    field: &Starfield,
    time_ms: f64,
    scroll_y: f32,
    shooting_stars: bool,
) {
    c.clear(SPACE_BACKGROUND);
    let ctx = &c.ctx;
    let vh = c.size().y;

    for n in field.nebulae() {
        if !n.is_visible(scroll_y, vh) {
            continue;
        }
        let pulse = n.pulse_at(time_ms);
        ctx.save();
        _ = ctx.translate(n.center.x as f64, n.screen_y(scroll_y) as f64);
        _ = ctx.rotate(n.rotation as f64);
        if let Ok(g) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, n.radius_x as f64) {
            _ = g.add_color_stop(0.0, &hsla(n.hue, 70, 55, n.opacity * pulse * 1.5));
            _ = g.add_color_stop(0.4, &hsla(n.hue + 20.0, 60, 45, n.opacity * 0.7 * pulse));
            _ = g.add_color_stop(0.7, &hsla(n.hue - 10.0, 50, 35, n.opacity * 0.3 * pulse));
            _ = g.add_color_stop(1.0, "transparent");
            ctx.set_fill_style(&g);
            _ = ctx.scale(1.0, (n.radius_y / n.radius_x) as f64);
            ctx.begin_path();
            _ = ctx.arc(0.0, 0.0, n.radius_x as f64, 0.0, TAU);
            ctx.fill();
        }
        ctx.restore();
    }

    for star in field.stars() {
        let y = star.screen_y(scroll_y, vh);
        if y > vh + 10.0 {
            continue;
        }
        let brightness = star.brightness_at(time_ms);
        let rgb = star.tint().rgb();
        if star.has_glow() {
            let glow_r = (star.size * 3.0) as f64;
            let (x, yf) = (star.x as f64, y as f64);
            if let Ok(g) = ctx.create_radial_gradient(x, yf, 0.0, x, yf, glow_r) {
                _ = g.add_color_stop(0.0, &rgba(rgb, brightness * 0.3));
                _ = g.add_color_stop(1.0, "transparent");
                ctx.set_fill_style(&g);
                ctx.begin_path();
                _ = ctx.arc(x, yf, glow_r, 0.0, TAU);
                ctx.fill();
            }
        }
        c.fill_style(&rgba(rgb, brightness));
        c.dot(star.x, y, star.size);
    }

    if !shooting_stars {
        return;
    }
    ctx.set_line_width(STREAK_WIDTH);
    for s in field.streaks_at(time_ms) {
        let g = ctx.create_linear_gradient(
            s.tail.x as f64,
            s.tail.y as f64,
            s.head.x as f64,
            s.head.y as f64,
        );
        _ = g.add_color_stop(0.0, "transparent");
        _ = g.add_color_stop(0.6, &rgba([255, 255, 255], 0.4 * s.alpha));
        _ = g.add_color_stop(1.0, &rgba([255, 255, 255], 0.9 * s.alpha));
        ctx.set_stroke_style(&g);
        ctx.begin_path();
        ctx.move_to(s.tail.x as f64, s.tail.y as f64);
        ctx.line_to(s.head.x as f64, s.head.y as f64);
        ctx.stroke();
    }
}
