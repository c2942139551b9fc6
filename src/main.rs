//! Unit Circle entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use unit_circle::platform::{ControlButtons, HitBox, InputSnapshot};
    use unit_circle::renderer::{Scene, palette};
    use unit_circle::{AngleController, Readout, Settings, TrigValue, Tuning};

    /// Circle placement for the current canvas size
    struct Layout {
        center: DVec2,
        radius: f64,
        buttons: ControlButtons,
        panel: HitBox,
    }

    impl Layout {
        fn for_size(w: f64, h: f64) -> Self {
            let radius = w.min(h) * 0.18;
            let btn = (h * 0.18).clamp(60.0, 120.0);
            let margin = 20.0;
            let panel_w = 320.0_f64.min((w - (btn * 2.0 + margin * 4.0)).max(200.0));
            let panel_h = 130.0;
            Self {
                center: DVec2::new(w * 0.3, h * 0.45),
                radius,
                buttons: ControlButtons {
                    left: HitBox::new(margin, h - btn - margin, btn, btn),
                    right: HitBox::new(w - btn - margin, h - btn - margin, btn, btn),
                },
                panel: HitBox::new((w - panel_w) / 2.0, h - panel_h - margin, panel_w, panel_h),
            }
        }
    }

    /// App instance holding all state
    struct App {
        controller: AngleController,
        settings: Settings,
        input: InputSnapshot,
        pointer_down: bool,
        pointer_pos: DVec2,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl App {
        fn frame(&mut self) {
            let w = f64::from(self.canvas.width());
            let h = f64::from(self.canvas.height());
            let layout = Layout::for_size(w, h);

            self.input.pointer = self.pointer_down.then_some(self.pointer_pos);
            let input = self.input.to_tick_input(&layout.buttons);
            self.controller.step(input);

            self.draw(&layout, w, h);
        }

        fn draw(&self, layout: &Layout, w: f64, h: f64) {
            let ctx = &self.ctx;
            ctx.set_fill_style_str(palette::BACKGROUND);
            ctx.fill_rect(0.0, 0.0, w, h);

            let scene = Scene::build(
                &self.controller,
                layout.radius,
                DVec2::new(w, h),
                self.settings.layers(),
            );

            ctx.save();
            let _ = ctx.translate(layout.center.x, layout.center.y);
            ctx.set_line_width(2.0);
            self.polyline(&scene.sine, palette::SINE);
            self.polyline(&scene.cosine, palette::COSINE);

            // Axes
            ctx.set_line_width(1.0);
            let reach = w.max(h);
            self.segment(DVec2::new(-reach, 0.0), DVec2::new(reach, 0.0), palette::AXES);
            self.segment(DVec2::new(0.0, -reach), DVec2::new(0.0, reach), palette::AXES);
            for (from, to) in &scene.spokes {
                self.segment(*from, *to, palette::SPOKE);
            }

            ctx.set_line_width(2.0);
            ctx.set_stroke_style_str(palette::CIRCLE);
            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, scene.radius, 0.0, TAU);
            ctx.stroke();

            let p = scene.point;
            self.segment(DVec2::ZERO, p, palette::RADIUS);
            self.segment(p, DVec2::new(reach, p.y), palette::SINE_GUIDE);
            self.segment(p, DVec2::new(p.x, reach), palette::COSINE_GUIDE);
            if scene.locked {
                self.disc(p, 10.0, palette::POINT_LOCKED);
                ctx.set_stroke_style_str(palette::LOCK_RING);
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, 15.0, 0.0, TAU);
                ctx.stroke();
            } else {
                self.disc(p, 8.0, palette::POINT_FREE);
            }
            ctx.restore();

            self.draw_panel(layout);
            self.draw_buttons(layout);
        }

        fn draw_panel(&self, layout: &Layout) {
            let ctx = &self.ctx;
            let readout = Readout::from_controller(&self.controller);
            let panel = layout.panel;

            ctx.set_fill_style_str(if readout.locked {
                "rgba(0, 0, 0, 0.78)"
            } else {
                "rgba(0, 0, 0, 0.59)"
            });
            ctx.fill_rect(panel.origin.x, panel.origin.y, panel.size.x, panel.size.y);
            if readout.locked {
                ctx.set_line_width(2.0);
                ctx.set_stroke_style_str(palette::RADIUS);
                ctx.stroke_rect(panel.origin.x, panel.origin.y, panel.size.x, panel.size.y);
            }

            ctx.set_text_align("left");
            ctx.set_text_baseline("top");
            ctx.set_font("24px sans-serif");
            ctx.set_fill_style_str(palette::RADIUS);
            let x = panel.origin.x + 20.0;
            let _ = ctx.fill_text(&readout.angle_label(), x, panel.origin.y + 15.0);
            if let Some(badge) = readout.lock_label() {
                ctx.set_font("12px sans-serif");
                ctx.set_fill_style_str(palette::LOCK_BADGE);
                let _ = ctx.fill_text(badge, panel.origin.x + 150.0, panel.origin.y + 18.0);
            }

            ctx.set_font("20px sans-serif");
            ctx.set_fill_style_str(palette::SINE);
            let _ = ctx.fill_text("sinθ =", x, panel.origin.y + 50.0);
            self.fraction(&readout.sin, x + 70.0, panel.origin.y + 50.0);
            ctx.set_fill_style_str(palette::COSINE);
            let _ = ctx.fill_text("cosθ =", x, panel.origin.y + 90.0);
            self.fraction(&readout.cos, x + 70.0, panel.origin.y + 90.0);
        }

        fn draw_buttons(&self, layout: &Layout) {
            let ctx = &self.ctx;
            let buttons = [
                (layout.buttons.left, self.input.left_active(&layout.buttons), "↺"),
                (layout.buttons.right, self.input.right_active(&layout.buttons), "↻"),
            ];
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            for (hit, active, glyph) in buttons {
                ctx.set_fill_style_str(palette::button_fill(active));
                ctx.fill_rect(hit.origin.x, hit.origin.y, hit.size.x, hit.size.y);
                ctx.set_fill_style_str(palette::TEXT);
                ctx.set_font(&format!("{}px sans-serif", (hit.size.x * 0.5).round()));
                let c = hit.center();
                let _ = ctx.fill_text(glyph, c.x, c.y);
            }
        }

        fn fraction(&self, value: &TrigValue, x: f64, y: f64) {
            let ctx = &self.ctx;
            ctx.set_fill_style_str(palette::TEXT);
            if !value.is_fraction {
                let _ = ctx.fill_text(&value.numerator, x, y + 8.0);
                return;
            }
            let _ = ctx.fill_text(&value.numerator, x + 4.0, y - 6.0);
            let _ = ctx.fill_text(&value.denominator, x + 4.0, y + 22.0);
            let width = [&value.numerator, &value.denominator]
                .iter()
                .filter_map(|s| ctx.measure_text(s).ok())
                .map(|m| m.width())
                .fold(0.0, f64::max);
            self.segment(
                DVec2::new(x, y + 20.0),
                DVec2::new(x + width + 8.0, y + 20.0),
                palette::TEXT,
            );
        }

        fn segment(&self, from: DVec2, to: DVec2, color: &str) {
            self.ctx.set_stroke_style_str(color);
            self.ctx.begin_path();
            self.ctx.move_to(from.x, from.y);
            self.ctx.line_to(to.x, to.y);
            self.ctx.stroke();
        }

        fn polyline(&self, points: &[DVec2], color: &str) {
            let Some(first) = points.first() else {
                return;
            };
            self.ctx.set_stroke_style_str(color);
            self.ctx.begin_path();
            self.ctx.move_to(first.x, first.y);
            for p in &points[1..] {
                self.ctx.line_to(p.x, p.y);
            }
            self.ctx.stroke();
        }

        fn disc(&self, center: DVec2, radius: f64, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx.begin_path();
            let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
            self.ctx.fill();
        }
    }

    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().unwrap();
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }

    fn request_frame(f: &Closure<dyn FnMut()>) {
        let _ = web_sys::window()
            .unwrap()
            .request_animation_frame(f.as_ref().unchecked_ref());
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Unit Circle starting...");

        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        resize_canvas(&canvas);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();

        let settings = Settings::load();
        let tuning = settings.tuning().unwrap_or_else(|e| {
            log::warn!("{}, using default speeds", e);
            Tuning::default()
        });
        let app = Rc::new(RefCell::new(App {
            controller: AngleController::new(tuning),
            settings,
            input: InputSnapshot::default(),
            pointer_down: false,
            pointer_pos: DVec2::ZERO,
            canvas: canvas.clone(),
            ctx,
        }));

        setup_keyboard(app.clone());
        setup_pointer(app.clone(), &canvas);

        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut()>::new(move || resize_canvas(&canvas));
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Frame loop: one controller step per animation frame
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move || {
            app.borrow_mut().frame();
            if let Some(cb) = f.borrow().as_ref() {
                request_frame(cb);
            }
        }));
        if let Some(cb) = g.borrow().as_ref() {
            request_frame(cb);
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (event, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |e: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = e.key();
                match key.as_str() {
                    "ArrowLeft" => a.input.left_key = pressed,
                    "ArrowRight" => a.input.right_key = pressed,
                    _ => {
                        // Layer toggles persist across reloads
                        if pressed && !e.repeat() && a.settings.toggle_layer(&key) {
                            a.settings.save();
                        }
                        return;
                    }
                }
                e.prevent_default();
            });
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drop held keys when focus leaves the page
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut a = app.borrow_mut();
            a.input.left_key = false;
            a.input.right_key = false;
            a.pointer_down = false;
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pointer(app: Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        for event in ["pointerdown", "pointermove", "pointerup", "pointercancel", "pointerleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |e: PointerEvent| {
                let mut a = app.borrow_mut();
                a.pointer_pos = DVec2::new(f64::from(e.offset_x()), f64::from(e.offset_y()));
                match e.type_().as_str() {
                    "pointerdown" => a.pointer_down = true,
                    "pointerup" | "pointercancel" | "pointerleave" => a.pointer_down = false,
                    _ => {}
                }
            });
            let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use unit_circle::{AngleController, Readout, Settings, TickInput, Tuning};

    env_logger::init();
    log::info!("Unit Circle (native) starting...");
    log::info!("Interactive mode runs in the browser - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let tuning = settings.tuning().unwrap_or_else(|e| {
        log::warn!("{}, using default speeds", e);
        Tuning::default()
    });
    let mut controller = AngleController::new(tuning);

    // Scripted session: hold, release, wait for lock, print the readout
    let script = [
        ("hold right x18", TickInput::right(), 18),
        ("release", TickInput::idle(), 60),
        ("hold left x70", TickInput::left(), 70),
        ("release", TickInput::idle(), 60),
        ("hold both x140", TickInput { left: true, right: true }, 140),
        ("release", TickInput::idle(), 60),
    ];

    for (label, input, ticks) in script {
        for _ in 0..ticks {
            controller.step(input);
        }
        let readout = Readout::from_controller(&controller);
        println!(
            "{:<16} {:<10} {:<8} {:<14} {:<14} (angle {:.4} rad)",
            label,
            readout.angle_label(),
            readout.lock_label().unwrap_or(""),
            readout.sin_label(),
            readout.cos_label(),
            controller.current_angle(),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
