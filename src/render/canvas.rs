use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::error::FieldError;
use super::Renderer;

/// Element id given to a canvas created by `mount_canvas`
pub const CANVAS_ID: &str = "flowers-bg";

/// `Renderer` backed by a browser 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FieldError::Canvas(format!("{:?}", e)))?
            .ok_or_else(|| FieldError::Canvas("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::Canvas("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self::new(ctx))
    }
}

/// Create the background canvas and prepend it to the document body
pub fn mount_canvas() -> Result<HtmlCanvasElement, FieldError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FieldError::Canvas("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| FieldError::Canvas("no document body".into()))?;

    let canvas = document
        .create_element("canvas")
        .map_err(|e| FieldError::Canvas(format!("{:?}", e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::Canvas("created element is not a canvas".into()))?;
    canvas.set_id(CANVAS_ID);

    body.prepend_with_node_1(&canvas)
        .map_err(|e| FieldError::Canvas(format!("{:?}", e)))?;

    Ok(canvas)
}

/// Viewport width and full scrollable content height of the page
pub fn page_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.document()?.body()?.scroll_height();
    Some((width as u32, height.max(0) as u32))
}

fn check(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("canvas {} failed: {:?}", op, e);
    }
}

#[allow(deprecated)]
impl Renderer for CanvasRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        check("translate", self.ctx.translate(x as f64, y as f64));
    }

    fn rotate(&mut self, angle: f32) {
        check("rotate", self.ctx.rotate(angle as f64));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style(&JsValue::from_str(color));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_round_lines(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.ctx.quadratic_curve_to(cx as f64, cy as f64, x as f64, y as f64);
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.ctx.bezier_curve_to(
            c1x as f64, c1y as f64, c2x as f64, c2y as f64, x as f64, y as f64,
        );
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        check(
            "arc",
            self.ctx.arc(x as f64, y as f64, radius.max(0.0) as f64, start as f64, end as f64),
        );
    }

    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rotation: f32, start: f32, end: f32) {
        check(
            "ellipse",
            self.ctx.ellipse(
                x as f64,
                y as f64,
                rx.max(0.0) as f64,
                ry.max(0.0) as f64,
                rotation as f64,
                start as f64,
                end as f64,
            ),
        );
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
