/// 2D drawing surface the flower field paints onto.
///
/// Mirrors the subset of the canvas 2D API the drawing code needs. Angles are
/// radians; coordinates are canvas pixels.
pub trait Renderer {
    /// Wipe a `width` x `height` region starting at the origin
    fn clear(&mut self, width: f32, height: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);

    fn set_global_alpha(&mut self, alpha: f32);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    /// Round line caps and joins for organic strokes
    fn set_round_lines(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rotation: f32, start: f32, end: f32);

    fn stroke(&mut self);
    fn fill(&mut self);
}
