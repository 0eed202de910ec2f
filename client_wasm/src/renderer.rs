//! Canvas 2D neon renderer. Reads the frame snapshot, never writes game state.

use std::f64::consts::TAU;

use game_core::{Config, RenderSnapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CENTER_LINE: &str = "#0ff";
const LEFT_PADDLE: &str = "#0f0";
const RIGHT_PADDLE: &str = "#f0f";
const BALL: &str = "#fff";
const SCORE_FONT: &str = "20px 'Press Start 2P'";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn draw(&self, snapshot: &RenderSnapshot, config: &Config) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_center_line()?;

        let paddle_w = config.paddle_width as f64;
        let paddle_h = config.paddle_height as f64;
        self.glow(LEFT_PADDLE, 20.0);
        ctx.fill_rect(0.0, snapshot.left_paddle_y as f64, paddle_w, paddle_h);
        self.glow(RIGHT_PADDLE, 20.0);
        ctx.fill_rect(
            self.width - paddle_w,
            snapshot.right_paddle_y as f64,
            paddle_w,
            paddle_h,
        );

        self.glow(BALL, 25.0);
        ctx.begin_path();
        ctx.arc(
            snapshot.ball_x as f64,
            snapshot.ball_y as f64,
            config.ball_radius as f64,
            0.0,
            TAU,
        )?;
        ctx.fill();

        self.draw_scores(snapshot)
    }

    fn draw_center_line(&self) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let dash = js_sys::Array::of2(&JsValue::from_f64(10.0), &JsValue::from_f64(10.0));
        ctx.set_line_dash(&dash)?;
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(CENTER_LINE);
        ctx.set_shadow_color(CENTER_LINE);
        ctx.set_shadow_blur(15.0);
        ctx.begin_path();
        ctx.move_to(self.width / 2.0, 0.0);
        ctx.line_to(self.width / 2.0, self.height);
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn draw_scores(&self, snapshot: &RenderSnapshot) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_shadow_blur(0.0);
        ctx.set_shadow_color("transparent");
        ctx.set_font(SCORE_FONT);
        ctx.set_fill_style_str(CENTER_LINE);
        ctx.set_text_align("center");
        ctx.fill_text(&snapshot.left_score.to_string(), self.width * 0.25, 50.0)?;
        ctx.fill_text(&snapshot.right_score.to_string(), self.width * 0.75, 50.0)?;
        Ok(())
    }

    fn glow(&self, color: &str, blur: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }
}
