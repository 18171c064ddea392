//! Painting plants onto a `Renderer`
//!
//! Everything here reads simulation state; nothing is mutated.

use std::f32::consts::{PI, TAU};
use crate::config::PlantColors;
use crate::garden::Garden;
use crate::math::Vec2;
use crate::plant::{FlowerHead, GrassBlade, Plant};
use super::Renderer;

const GRASS_LINE_WIDTH: f32 = 1.2;
const SPOKE_LINE_WIDTH: f32 = 1.0;
const SPOKE_SEED_RADIUS: f32 = 2.0;
const SPIRAL_LINE_WIDTH: f32 = 1.5;
const SPIRAL_STEP: f32 = 0.1;

/// Clear the surface and draw every live plant
pub fn draw_garden<R: Renderer + ?Sized>(garden: &Garden, r: &mut R) {
    let viewport = garden.viewport();
    r.clear(viewport.width, viewport.height);

    let time = garden.time();
    for plant in garden.plants().iter().rev() {
        draw_plant(plant, time, r);
    }

    r.set_global_alpha(1.0);
}

/// Draw one plant: grass, stem, leaves, then the flower head
pub fn draw_plant<R: Renderer + ?Sized>(plant: &Plant, time: f32, r: &mut R) {
    if plant.opacity <= 0.0 {
        return;
    }
    let colors = &plant.colors;
    let frame = plant.frame();

    r.set_global_alpha(plant.opacity);
    draw_grass(r, plant.base(), &plant.grass, &colors.leaf, time, plant.wind_phase);

    let tip = draw_stem(
        r,
        frame.positions(),
        plant.growth,
        &colors.stem,
        plant.proportions.stem_width,
    );

    for leaf in &plant.leaves {
        let shown = plant.leaf_reveal(leaf);
        if shown <= 0.0 {
            continue;
        }
        let at = frame.point_at(leaf.t);
        let rotation = leaf.rotation(frame.bend_at(leaf.t));
        draw_leaf(r, at, rotation, leaf.size * shown, &colors.leaf);
    }

    let bloom = plant.flower_reveal();
    if bloom > 0.0 {
        r.set_global_alpha(plant.opacity * bloom);
        draw_flower_head(r, tip, plant.proportions.flower_size * bloom, &plant.flower, colors);
    }
}

/// Stroke the stem up to `progress` and return the grown tip.
///
/// The tip is interpolated between joints so growth looks continuous.
pub fn draw_stem<R: Renderer + ?Sized>(
    r: &mut R,
    points: &[Vec2],
    progress: f32,
    color: &str,
    width: f32,
) -> Vec2 {
    let Some(&base) = points.first() else {
        return Vec2::ZERO;
    };
    if progress <= 0.0 || points.len() < 2 {
        return base;
    }

    let segments = points.len() - 1;
    let scaled = progress.min(1.0) * segments as f32;
    let n = (scaled.floor() as usize).min(segments);
    if n < 1 {
        return base;
    }

    r.set_stroke_style(color);
    r.set_line_width(width);
    r.set_round_lines();
    r.begin_path();
    r.move_to(base.x, base.y);
    for p in &points[1..=n] {
        r.line_to(p.x, p.y);
    }

    let frac = scaled - n as f32;
    let tip = if n < segments && frac > 0.0 {
        let tip = points[n].lerp(&points[n + 1], frac);
        r.line_to(tip.x, tip.y);
        tip
    } else {
        points[n]
    };

    r.stroke();
    tip
}

pub fn draw_leaf<R: Renderer + ?Sized>(r: &mut R, at: Vec2, angle: f32, size: f32, color: &str) {
    r.save();
    r.translate(at.x, at.y);
    r.rotate(angle);
    r.set_fill_style(color);
    r.begin_path();
    r.move_to(0.0, 0.0);
    r.bezier_curve_to(size * 0.4, -size * 0.5, size * 0.8, -size * 0.3, size, 0.0);
    r.bezier_curve_to(size * 0.8, size * 0.3, size * 0.4, size * 0.5, 0.0, 0.0);
    r.fill();
    r.restore();
}

pub fn draw_grass<R: Renderer + ?Sized>(
    r: &mut R,
    base: Vec2,
    blades: &[GrassBlade],
    color: &str,
    time: f32,
    wind_phase: f32,
) {
    r.set_stroke_style(color);
    r.set_line_width(GRASS_LINE_WIDTH);
    r.set_round_lines();

    for blade in blades {
        let sway = blade.sway(time, wind_phase);
        let x = base.x + blade.offset;
        r.begin_path();
        r.move_to(x, base.y);
        r.quadratic_curve_to(
            x + blade.lean * 0.5 + sway,
            base.y - blade.height * 0.6,
            x + blade.lean + sway,
            base.y - blade.height,
        );
        r.stroke();
    }
}

pub fn draw_flower_head<R: Renderer + ?Sized>(
    r: &mut R,
    at: Vec2,
    size: f32,
    head: &FlowerHead,
    colors: &PlantColors,
) {
    let Vec2 { x, y } = at;

    match head {
        FlowerHead::Petals { count } => {
            r.set_fill_style(&colors.flower);
            for i in 0..*count {
                let angle = i as f32 / *count as f32 * TAU;
                let px = x + angle.cos() * size * 0.4;
                let py = y + angle.sin() * size * 0.4;
                r.begin_path();
                r.ellipse(px, py, size * 0.5, size * 0.25, angle, 0.0, TAU);
                r.fill();
            }
            r.set_fill_style(&colors.accent);
            r.begin_path();
            r.arc(x, y, size * 0.2, 0.0, TAU);
            r.fill();
        }
        FlowerHead::Tulip => {
            r.set_fill_style(&colors.flower);
            r.begin_path();
            r.move_to(x, y + size * 0.3);
            r.bezier_curve_to(x - size * 0.5, y, x - size * 0.4, y - size * 0.8, x, y - size * 0.6);
            r.bezier_curve_to(x + size * 0.4, y - size * 0.8, x + size * 0.5, y, x, y + size * 0.3);
            r.fill();
        }
        FlowerHead::Dandelion { spokes } => {
            r.set_stroke_style(&colors.flower);
            r.set_fill_style(&colors.flower);
            r.set_line_width(SPOKE_LINE_WIDTH);
            for spoke in spokes {
                let ex = x + spoke.angle.cos() * size * spoke.length;
                let ey = y + spoke.angle.sin() * size * spoke.length;
                r.begin_path();
                r.move_to(x, y);
                r.line_to(ex, ey);
                r.stroke();
                r.begin_path();
                r.arc(ex, ey, SPOKE_SEED_RADIUS, 0.0, TAU);
                r.fill();
            }
        }
        FlowerHead::Rose => {
            r.set_fill_style(&colors.flower);
            r.begin_path();
            r.arc(x, y, size * 0.45, 0.0, TAU);
            r.fill();

            r.set_stroke_style(&colors.accent);
            r.set_line_width(SPIRAL_LINE_WIDTH);
            r.begin_path();
            r.move_to(x, y);
            let turns = (4.0 * PI / SPIRAL_STEP).ceil() as usize;
            for k in 1..turns {
                let a = k as f32 * SPIRAL_STEP;
                let radius = a * size * 0.05;
                r.line_to(x + a.cos() * radius, y + a.sin() * radius);
            }
            r.stroke();
        }
    }
}
