//! Sentiment Chart Component
//!
//! Doughnut chart of the dashboard's prediction counts using HTML5 Canvas.

use std::cell::Cell;
use std::rc::Rc;

use hopescope::analytics::{
    Category, Doughnut, SentimentCounts, BORDER_WIDTH, CHART_CANVAS_ID, CUTOUT_RATIO,
    NO_DATA_NOTICE, SENTIMENT_DATA_GLOBAL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::dom;

/// Tooltip box styling
const TOOLTIP_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
const TOOLTIP_TEXT: &str = "#2c3e50";
const TOOLTIP_BORDER: &str = "#e0e0e0";
const TOOLTIP_BORDER_WIDTH: f64 = 1.0;
const TOOLTIP_PADDING: f64 = 12.0;
const TOOLTIP_FONT: &str = "12px sans-serif";
const TOOLTIP_LINE_HEIGHT: f64 = 14.0;
const SWATCH_SIZE: f64 = 10.0;
const SWATCH_GAP: f64 = 6.0;
const CURSOR_OFFSET: f64 = 12.0;

/// Space between the ring and the canvas edge
const CHART_MARGIN: f64 = 8.0;

/// Fallback edge length when the canvas has no layout box yet
const DEFAULT_SIZE: u32 = 300;

/// Draw the chart if the page carries one
pub fn init() {
    let Some(canvas) = dom::element_by_id::<HtmlCanvasElement>(CHART_CANVAS_ID) else {
        return;
    };
    let Some(counts) = read_counts() else {
        return;
    };

    let Some(doughnut) = Doughnut::layout(counts) else {
        show_no_data(&canvas);
        return;
    };

    let Some(chart) = SentimentChart::new(canvas, doughnut) else {
        return;
    };
    let chart = Rc::new(chart);
    chart.draw();
    chart.attach_tooltip();
}

/// The `sentimentData` global, if defined
///
/// Read through a function body so top-level `const` bindings are visible
/// too; they are not properties of `window`.
fn read_counts() -> Option<SentimentCounts> {
    let source = format!(
        "return typeof {0} === 'undefined' ? undefined : {0};",
        SENTIMENT_DATA_GLOBAL
    );
    let value = js_sys::Function::new_no_args(&source)
        .call0(&JsValue::NULL)
        .ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let json: String = js_sys::JSON::stringify(&value).ok()?.into();
    match SentimentCounts::from_json(&json) {
        Ok(counts) => Some(counts),
        Err(e) => {
            dom::log_error(&format!("Invalid {}: {}", SENTIMENT_DATA_GLOBAL, e));
            None
        }
    }
}

/// Replace the chart's container content with the no-data notice
fn show_no_data(canvas: &HtmlCanvasElement) {
    let Some(parent) = canvas.parent_element() else {
        return;
    };
    parent.set_inner_html(&format!(
        "<p style=\"text-align: center; padding: 2rem; color: var(--text-light);\">{}</p>",
        NO_DATA_NOTICE
    ));
}

struct SentimentChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    doughnut: Doughnut,
    hovered: Cell<Option<(f64, f64)>>,
}

impl SentimentChart {
    fn new(canvas: HtmlCanvasElement, doughnut: Doughnut) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
            _ => return None,
        };

        // backing store follows the laid-out size
        let width = layout_size(canvas.client_width(), canvas.width());
        let height = layout_size(canvas.client_height(), canvas.height());
        canvas.set_width(width);
        canvas.set_height(height);

        Some(Self {
            canvas,
            ctx,
            doughnut,
            hovered: Cell::new(None),
        })
    }

    fn center(&self) -> (f64, f64) {
        (
            self.canvas.width() as f64 / 2.0,
            self.canvas.height() as f64 / 2.0,
        )
    }

    fn outer_radius(&self) -> f64 {
        let (cx, cy) = self.center();
        (cx.min(cy) - CHART_MARGIN).max(0.0)
    }

    fn draw(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let (cx, cy) = self.center();
        let outer = self.outer_radius();
        let inner = outer * CUTOUT_RATIO;

        for slice in self.doughnut.slices() {
            if slice.sweep() <= 0.0 {
                continue;
            }

            self.ctx.begin_path();
            let ring = self
                .ctx
                .arc(cx, cy, outer, slice.start_angle, slice.end_angle)
                .and_then(|_| {
                    self.ctx.arc_with_anticlockwise(
                        cx,
                        cy,
                        inner,
                        slice.end_angle,
                        slice.start_angle,
                        true,
                    )
                });
            if let Err(e) = ring {
                dom::log_error(&format!("Failed to draw chart slice: {:?}", e));
                return;
            }
            self.ctx.close_path();

            self.ctx.set_fill_style_str(slice.category.fill_color());
            self.ctx.fill();
            self.ctx.set_stroke_style_str(slice.category.border_color());
            self.ctx.set_line_width(BORDER_WIDTH);
            self.ctx.stroke();
        }

        if let Some((x, y)) = self.hovered.get() {
            self.draw_tooltip(x, y);
        }
    }

    fn draw_tooltip(&self, x: f64, y: f64) {
        let (cx, cy) = self.center();
        let Some(slice) = self.doughnut.hit_test(x - cx, y - cy, self.outer_radius()) else {
            return;
        };
        let text = self.doughnut.tooltip(slice);

        self.ctx.set_font(TOOLTIP_FONT);
        let text_width = match self.ctx.measure_text(&text) {
            Ok(metrics) => metrics.width(),
            Err(_) => return,
        };

        let box_width = TOOLTIP_PADDING * 2.0 + SWATCH_SIZE + SWATCH_GAP + text_width;
        let box_height = TOOLTIP_PADDING * 2.0 + TOOLTIP_LINE_HEIGHT;

        // keep the box on the canvas
        let max_x = self.canvas.width() as f64 - box_width;
        let max_y = self.canvas.height() as f64 - box_height;
        let left = (x + CURSOR_OFFSET).min(max_x).max(0.0);
        let top = (y + CURSOR_OFFSET).min(max_y).max(0.0);

        self.ctx.set_fill_style_str(TOOLTIP_BACKGROUND);
        self.ctx.fill_rect(left, top, box_width, box_height);
        self.ctx.set_stroke_style_str(TOOLTIP_BORDER);
        self.ctx.set_line_width(TOOLTIP_BORDER_WIDTH);
        self.ctx.stroke_rect(left, top, box_width, box_height);

        let line_top = top + TOOLTIP_PADDING;
        let swatch_top = line_top + (TOOLTIP_LINE_HEIGHT - SWATCH_SIZE) / 2.0;
        draw_swatch(&self.ctx, slice.category, left + TOOLTIP_PADDING, swatch_top);

        self.ctx.set_fill_style_str(TOOLTIP_TEXT);
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(
            &text,
            left + TOOLTIP_PADDING + SWATCH_SIZE + SWATCH_GAP,
            line_top + TOOLTIP_LINE_HEIGHT / 2.0,
        );
    }

    fn attach_tooltip(self: &Rc<Self>) {
        let on_move = {
            let chart = Rc::clone(self);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                chart
                    .hovered
                    .set(Some((event.offset_x() as f64, event.offset_y() as f64)));
                chart.draw();
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let on_leave = {
            let chart = Rc::clone(self);
            Closure::wrap(Box::new(move || {
                chart.hovered.set(None);
                chart.draw();
            }) as Box<dyn FnMut()>)
        };

        let target: &web_sys::EventTarget = &self.canvas;
        let attached = target
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .and_then(|_| {
                target.add_event_listener_with_callback(
                    "mouseleave",
                    on_leave.as_ref().unchecked_ref(),
                )
            });
        if let Err(e) = attached {
            dom::log_error(&format!("Failed to attach chart tooltip: {:?}", e));
        }

        on_move.forget();
        on_leave.forget();
    }
}

fn draw_swatch(ctx: &CanvasRenderingContext2d, category: Category, x: f64, y: f64) {
    ctx.set_fill_style_str(category.fill_color());
    ctx.fill_rect(x, y, SWATCH_SIZE, SWATCH_SIZE);
    ctx.set_stroke_style_str(category.border_color());
    ctx.set_line_width(TOOLTIP_BORDER_WIDTH);
    ctx.stroke_rect(x, y, SWATCH_SIZE, SWATCH_SIZE);
}

fn layout_size(client: i32, attribute: u32) -> u32 {
    match client {
        c if c > 0 => c as u32,
        _ if attribute > 0 => attribute,
        _ => DEFAULT_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size_prefers_client_box() {
        assert_eq!(layout_size(420, 150), 420);
        assert_eq!(layout_size(0, 150), 150);
        assert_eq!(layout_size(0, 0), DEFAULT_SIZE);
    }
}
