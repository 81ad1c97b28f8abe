use wave_core::{Band, SparkleSprite, WaveEngine};
use web_sys as web;

/// Paint one frame: background, bands back to front, then sparkles.
pub fn draw_scene(ctx: &web::CanvasRenderingContext2d, engine: &WaveEngine) {
    let viewport = engine.viewport();
    let (width, height) = (viewport.width as f64, viewport.height as f64);
    let config = engine.config();

    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(&config.background.to_css(1.0));
    ctx.fill_rect(0.0, 0.0, width, height);

    for band in engine.bands() {
        draw_band(ctx, &band, height);
    }

    ctx.set_fill_style_str(&config.sparkle_color.to_css(1.0));
    for sprite in engine.sprites() {
        draw_sparkle(ctx, &sprite, height);
    }
    ctx.set_global_alpha(1.0);
}

// Tail left to right, then the layer's own points right to left.
fn draw_band(ctx: &web::CanvasRenderingContext2d, band: &Band, height: f64) {
    let Some(&first) = band.tail.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(0.0, height - first as f64);
    for (x, &y) in band.tail.iter().enumerate() {
        ctx.line_to(x as f64, height - y as f64);
    }
    for (x, &y) in band.points.iter().enumerate().rev() {
        ctx.line_to(x as f64, height - y as f64);
    }
    ctx.close_path();
    ctx.set_fill_style_str(&band.fill.to_css(band.opacity));
    ctx.fill();
}

fn draw_sparkle(ctx: &web::CanvasRenderingContext2d, sprite: &SparkleSprite, height: f64) {
    if sprite.radius <= 0.0 || sprite.opacity <= 0.0 {
        return;
    }
    ctx.set_global_alpha(sprite.opacity as f64);
    ctx.begin_path();
    for (i, (x, y)) in sprite.corners().enumerate() {
        let (x, y) = (x as f64, height - y as f64);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.fill();
}
