use log::{info, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod config;
pub mod error;
pub mod garden;
pub mod interaction;
pub mod logger;
pub mod math;
pub mod plant;
pub mod render;
pub mod stem;

pub use config::FieldConfig;
pub use error::FieldError;
pub use garden::{Garden, Viewport};

use math::Vec2;
use render::{draw_garden, CanvasRenderer};
use render::canvas::{mount_canvas, page_size};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::init(LevelFilter::Info);
}

/// Change console log verbosity ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{}'", level)))?;
    logger::init(filter);
    Ok(())
}

/// Flower background bound to one canvas, driven by the page's frame loop
#[wasm_bindgen]
pub struct FlowerField {
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    garden: Garden,
    rng: SmallRng,
    /// Follow window width and body scroll height every frame
    track_page: bool,
}

#[wasm_bindgen]
impl FlowerField {
    /// Attach to an existing canvas using its current size and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FlowerField, JsValue> {
        Ok(Self::build(canvas, FieldConfig::default(), random_seed(), false)?)
    }

    /// Attach with settings overridden from a YAML document
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<FlowerField, JsValue> {
        let config = FieldConfig::from_yaml(yaml)?;
        Ok(Self::build(canvas, config, random_seed(), false)?)
    }

    /// Attach with a fixed seed so the same plants grow on every load
    #[wasm_bindgen]
    pub fn with_seed(canvas: HtmlCanvasElement, seed: u32) -> Result<FlowerField, JsValue> {
        Ok(Self::build(canvas, FieldConfig::default(), seed as u64, false)?)
    }

    /// Create a full-page background canvas at the top of the body and
    /// keep it sized to the page
    #[wasm_bindgen]
    pub fn mount() -> Result<FlowerField, JsValue> {
        let canvas = mount_canvas()?;
        if let Some((width, height)) = page_size() {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        Ok(Self::build(canvas, FieldConfig::default(), random_seed(), true)?)
    }

    fn build(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
        seed: u64,
        track_page: bool,
    ) -> Result<FlowerField, FieldError> {
        config.validate()?;
        let renderer = CanvasRenderer::from_canvas(&canvas)?;
        let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut garden = Garden::new(config, viewport);
        let spawned = garden.populate(&mut rng);

        info!(
            "flower field ready: {}x{} canvas, {} slot rows, {} plants",
            canvas.width(),
            canvas.height(),
            garden.slots().rows(),
            spawned
        );

        Ok(Self {
            canvas,
            renderer,
            garden,
            rng,
            track_page,
        })
    }

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.garden.resize(Viewport::new(width as f32, height as f32));
        info!("resized to {}x{}", width, height);
    }

    /// Pointer position in canvas coordinates
    #[wasm_bindgen]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.garden.set_pointer(Some(Vec2::new(x, y)));
    }

    #[wasm_bindgen]
    pub fn on_pointer_leave(&mut self) {
        self.garden.set_pointer(None);
    }

    /// Advance one frame and draw it; call from requestAnimationFrame
    #[wasm_bindgen]
    pub fn render(&mut self) {
        if self.track_page {
            self.sync_page_size();
        }

        self.garden.step(&mut self.rng);
        draw_garden(&self.garden, &mut self.renderer);
    }

    #[wasm_bindgen]
    pub fn plant_count(&self) -> usize {
        self.garden.plants().len()
    }

    fn sync_page_size(&mut self) {
        if let Some((width, height)) = page_size() {
            if width != self.canvas.width() || height != self.canvas.height() {
                self.resize(width, height);
            }
        }
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
