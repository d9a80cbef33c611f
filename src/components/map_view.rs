use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use super::app::use_map;
use super::{
    camera_controls::CameraControls, lane_editor::LaneEditor, legend_panel::LegendPanel,
    road_editor::RoadEditor, stats_panel::StatsPanel,
};
use crate::model::{EditorMode, MapAction, Selection};
use crate::state::camera::{CELL_PX, MAX_ZOOM, MIN_ZOOM};
use crate::state::{Camera, TouchState, picking};
use crate::util::clog;

/// Pointer travel (squared pixels) beyond which a press counts as a drag,
/// not a click.
const CLICK_SLOP_SQ: f64 = 9.0;

/// Tracks the left-button gesture between mousedown and mouseup so a drag
/// release is not misread as a selection click.
#[derive(Default)]
struct PressState {
    x: f64,
    y: f64,
    moved: bool,
    active: bool,
}

#[function_component(MapView)]
pub fn map_view() -> Html {
    let store = use_map();
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(Camera::default);
    let touch_state = use_mut_ref(TouchState::default);
    let press_state = use_mut_ref(PressState::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let store_ref = use_mut_ref(|| store.clone());

    // On each committed mutation, refresh the mirror handle and redraw.
    {
        let store_ref = store_ref.clone();
        let current_handle = store.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(store.generation, move |_| {
            *store_ref.borrow_mut() = current_handle.clone();
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let camera = camera.clone();
        let store = store.clone();
        let store_ref = store_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let press_state = press_state.clone();
        let touch_state = touch_state.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                move || {
                    if let Some(parent) = canvas.parent_element() {
                        canvas.set_width(parent.client_width().max(0) as u32);
                        canvas.set_height(parent.client_height().max(0) as u32);
                    }
                }
            };
            compute_and_apply_canvas_size();

            // Initial centering on the middle of the grid.
            {
                let mut cam = camera.borrow_mut();
                if !cam.initialized {
                    let gs = store.city_map.grid_size;
                    cam.center_on(
                        gs.width as f64 * 0.5,
                        gs.height as f64 * 0.5,
                        canvas.width() as f64,
                        canvas.height() as f64,
                    );
                    cam.initialized = true;
                }
            }

            // Build the draw closure and store it for reuse by listeners.
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let store_ref = store_ref.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => c.dyn_into::<CanvasRenderingContext2d>().unwrap(),
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let cam = camera.borrow();
                    let scale_px = cam.scale_px();
                    let handle = store_ref.borrow();
                    let rs = (**handle).clone();
                    drop(handle);
                    let map = &rs.city_map;
                    let gs = map.grid_size;

                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    ctx.set_fill_style_str("#0e1116");
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_transform(scale_px, 0.0, 0.0, scale_px, cam.offset_x, cam.offset_y)
                        .ok();

                    let range = cam.visible_cells(w, h, gs);
                    if let Some(range) = range {
                        // Map area + grid lines, only over the visible range.
                        ctx.set_fill_style_str("#161b22");
                        ctx.fill_rect(0.0, 0.0, gs.width as f64, gs.height as f64);
                        ctx.set_stroke_style_str("#2f3641");
                        ctx.set_line_width((1.0 / scale_px).max(0.001));
                        for x in range.x0..=(range.x1 + 1) {
                            ctx.begin_path();
                            ctx.move_to(x as f64, range.y0 as f64);
                            ctx.line_to(x as f64, (range.y1 + 1) as f64);
                            ctx.stroke();
                        }
                        for y in range.y0..=(range.y1 + 1) {
                            ctx.begin_path();
                            ctx.move_to(range.x0 as f64, y as f64);
                            ctx.line_to((range.x1 + 1) as f64, y as f64);
                            ctx.stroke();
                        }

                        // Roads, in world units (stored as map pixels).
                        for road in &map.roads {
                            let ax = road.start.x / CELL_PX;
                            let ay = road.start.y / CELL_PX;
                            let bx = road.end.x / CELL_PX;
                            let by = road.end.y / CELL_PX;
                            let selected =
                                matches!(&rs.selection, Selection::Road(id) if *id == road.id);
                            ctx.set_stroke_style_str(if selected { "#58a6ff" } else { "#444c56" });
                            ctx.set_line_width(road.width / CELL_PX);
                            ctx.begin_path();
                            ctx.move_to(ax, ay);
                            ctx.line_to(bx, by);
                            ctx.stroke();
                        }

                        // Lanes of the visible blocks; offsets can reach one
                        // cell outside, so widen the scan by one.
                        let bx0 = range.x0.saturating_sub(1);
                        let bx1 = (range.x1 + 1).min(gs.width - 1);
                        let by0 = range.y0.saturating_sub(1);
                        let by1 = (range.y1 + 1).min(gs.height - 1);
                        for by in by0..=by1 {
                            for bx in bx0..=bx1 {
                                let Some(block) = map.block(bx, by) else {
                                    continue;
                                };
                                for lane in &block.lanes {
                                    let ax = bx as f64 + lane.start.0 as f64;
                                    let ay = by as f64 + lane.start.1 as f64;
                                    let ex = bx as f64 + lane.end.0 as f64;
                                    let ey = by as f64 + lane.end.1 as f64;
                                    let selected = matches!(
                                        &rs.selection,
                                        Selection::Lane { block_x, block_y, lane_id }
                                            if *block_x == bx && *block_y == by && *lane_id == lane.id
                                    );
                                    let color = if selected { "#58a6ff" } else { "#8b949e" };
                                    ctx.set_stroke_style_str(color);
                                    ctx.set_line_width(6.0 / CELL_PX);
                                    ctx.begin_path();
                                    ctx.move_to(ax, ay);
                                    ctx.line_to(ex, ey);
                                    ctx.stroke();
                                    // Arrowhead showing lane direction.
                                    let ang = (ey - ay).atan2(ex - ax);
                                    let tip = 0.22;
                                    ctx.set_fill_style_str(color);
                                    ctx.begin_path();
                                    ctx.move_to(ex, ey);
                                    ctx.line_to(
                                        ex - tip * (ang - 0.5).cos(),
                                        ey - tip * (ang - 0.5).sin(),
                                    );
                                    ctx.line_to(
                                        ex - tip * (ang + 0.5).cos(),
                                        ey - tip * (ang + 0.5).sin(),
                                    );
                                    ctx.close_path();
                                    ctx.fill();
                                }
                            }
                        }

                        // Places on their cells.
                        let margin = 0.15;
                        for place in &map.places {
                            if place.x < range.x0
                                || place.x > range.x1
                                || place.y < range.y0
                                || place.y > range.y1
                            {
                                continue;
                            }
                            let rx = place.x as f64 + margin;
                            let ry = place.y as f64 + margin;
                            let side = 1.0 - 2.0 * margin;
                            let selected =
                                matches!(&rs.selection, Selection::Place(id) if *id == place.id);
                            ctx.set_fill_style_str(place.category.color());
                            ctx.fill_rect(rx, ry, side, side);
                            if selected {
                                ctx.set_stroke_style_str("#58a6ff");
                                ctx.set_line_width((2.5 / scale_px).max(0.002));
                                ctx.stroke_rect(rx - 0.06, ry - 0.06, side + 0.12, side + 0.12);
                            }
                        }
                    }

                    // Label pass in screen space so text stays readable.
                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    if cam.zoom >= 0.5 {
                        if let Some(range) = range {
                            ctx.set_font("11px sans-serif");
                            ctx.set_text_align("center");
                            for place in &map.places {
                                if place.x < range.x0
                                    || place.x > range.x1
                                    || place.y < range.y0
                                    || place.y > range.y1
                                {
                                    continue;
                                }
                                let (sx, sy) = cam
                                    .world_to_screen(place.x as f64 + 0.5, place.y as f64 + 1.0);
                                ctx.set_fill_style_str("#c9d1d9");
                                ctx.fill_text(&place.name, sx, sy + 12.0).ok();
                            }
                            for by in range.y0..=range.y1 {
                                for bx in range.x0..=range.x1 {
                                    let Some(block) = map.block(bx, by) else {
                                        continue;
                                    };
                                    for lane in &block.lanes {
                                        let mx = bx as f64
                                            + (lane.start.0 + lane.end.0) as f64 * 0.5;
                                        let my = by as f64
                                            + (lane.start.1 + lane.end.1) as f64 * 0.5;
                                        let (sx, sy) = cam.world_to_screen(mx, my);
                                        ctx.set_fill_style_str("#c9d1d9");
                                        ctx.fill_text(&format!("Cost: {}", lane.cost), sx, sy - 8.0)
                                            .ok();
                                    }
                                }
                            }
                            for road in &map.roads {
                                let mx = (road.start.x + road.end.x) * 0.5 / CELL_PX;
                                let my = (road.start.y + road.end.y) * 0.5 / CELL_PX;
                                let (sx, sy) = cam.world_to_screen(mx, my);
                                let ang = (road.end.y - road.start.y)
                                    .atan2(road.end.x - road.start.x);
                                ctx.save();
                                ctx.translate(sx, sy).ok();
                                ctx.rotate(ang).ok();
                                ctx.set_fill_style_str("#8b949e");
                                ctx.fill_text(
                                    &format!("{} (Cost: {})", road.name, road.cost),
                                    0.0,
                                    -4.0,
                                )
                                .ok();
                                ctx.restore();
                            }
                        }
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Wheel: zoom about the cursor.
            let wheel_cb = {
                let camera = camera.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    camera.borrow_mut().zoom_about(
                        e.offset_x() as f64,
                        e.offset_y() as f64,
                        e.delta_y(),
                    );
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            // Mouse down: start a pan, unless we are placing a new entity.
            let mousedown_cb = {
                let camera = camera.clone();
                let store_ref = store_ref.clone();
                let press_state = press_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let adding = {
                        let handle = store_ref.borrow();
                        matches!((**handle).mode, EditorMode::Adding(_))
                    };
                    {
                        let mut press = press_state.borrow_mut();
                        press.x = e.offset_x() as f64;
                        press.y = e.offset_y() as f64;
                        press.moved = false;
                        press.active = true;
                    }
                    if !adding {
                        camera
                            .borrow_mut()
                            .begin_pan(e.client_x() as f64, e.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .unwrap();

            // Mouse move: continue the pan.
            let mousemove_cb = {
                let camera = camera.clone();
                let press_state = press_state.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut cam = camera.borrow_mut();
                    if !cam.panning {
                        return;
                    }
                    cam.pan_to(e.client_x() as f64, e.client_y() as f64);
                    drop(cam);
                    {
                        let mut press = press_state.borrow_mut();
                        let dx = e.offset_x() as f64 - press.x;
                        let dy = e.offset_y() as f64 - press.y;
                        if dx * dx + dy * dy > CLICK_SLOP_SQ {
                            press.moved = true;
                        }
                    }
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .unwrap();

            // Mouse up (window-level so releases off-canvas end the pan):
            // a short press resolves to placement or selection.
            let mouseup_cb = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let store = store.clone();
                let store_ref = store_ref.clone();
                let press_state = press_state.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    camera.borrow_mut().end_pan();
                    let was_click = {
                        let mut press = press_state.borrow_mut();
                        let was = press.active && !press.moved;
                        press.active = false;
                        was
                    };
                    let redraw = {
                        let draw_ref = draw_ref.clone();
                        move || {
                            if let Some(f) = &*draw_ref.borrow() {
                                f();
                            }
                        }
                    };
                    if e.button() != 0 || !was_click {
                        redraw();
                        return;
                    }
                    let rect = canvas.get_bounding_client_rect();
                    let sx = e.client_x() as f64 - rect.left();
                    let sy = e.client_y() as f64 - rect.top();
                    if sx < 0.0 || sy < 0.0 || sx > canvas.width() as f64 || sy > canvas.height() as f64
                    {
                        redraw();
                        return;
                    }
                    let action = {
                        let cam = camera.borrow();
                        let handle = store_ref.borrow();
                        let rs = (**handle).clone();
                        match rs.mode {
                            EditorMode::Adding(category) => {
                                match cam.screen_to_grid(sx, sy, rs.city_map.grid_size) {
                                    Some((gx, gy)) => Some(MapAction::AddPlace {
                                        name: format!("New {}", category.label()),
                                        category,
                                        description: format!("A new {}", category.key()),
                                        address: String::new(),
                                        x: gx,
                                        y: gy,
                                    }),
                                    None => {
                                        clog("add-place ignored: click outside the grid");
                                        None
                                    }
                                }
                            }
                            EditorMode::Idle => {
                                let (wx, wy) = cam.screen_to_world(sx, sy);
                                if let Some(place) = picking::pick_place(&rs.city_map, wx, wy) {
                                    Some(MapAction::Select(Selection::Place(place.id.clone())))
                                } else if let Some(hit) = picking::pick_lane(&rs.city_map, wx, wy) {
                                    Some(MapAction::Select(Selection::Lane {
                                        block_x: hit.block_x,
                                        block_y: hit.block_y,
                                        lane_id: hit.lane_id,
                                    }))
                                } else if let Some(road) = picking::pick_road(&rs.city_map, wx, wy)
                                {
                                    Some(MapAction::Select(Selection::Road(road.id.clone())))
                                } else if rs.selection != Selection::None {
                                    Some(MapAction::Select(Selection::None))
                                } else {
                                    None
                                }
                            }
                        }
                    };
                    if let Some(action) = action {
                        store.dispatch(action);
                    }
                    redraw();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            // Leaving the canvas ends the drag and voids the pending click.
            let mouseleave_cb = {
                let camera = camera.clone();
                let press_state = press_state.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    camera.borrow_mut().end_pan();
                    press_state.borrow_mut().active = false;
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let contextmenu_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            // Touch: single-finger pan, pinch zoom.
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let camera_tc = camera.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let rect = canvas_tc.get_bounding_client_rect();
                    if let Some(t0) = e.touches().item(0) {
                        let cx = t0.client_x() as f64 - rect.left();
                        let cy = t0.client_y() as f64 - rect.top();
                        let mut ts = touch_state_tc.borrow_mut();
                        ts.last_touch_x = cx;
                        ts.last_touch_y = cy;
                        ts.single_active = true;
                        ts.pinch = false;
                        drop(ts);
                        if e.touches().length() >= 2 {
                            if let (Some(t0a), Some(t1)) = (e.touches().item(0), e.touches().item(1))
                            {
                                let cam = camera_tc.borrow();
                                let x0 = t0a.client_x() as f64 - rect.left();
                                let y0 = t0a.client_y() as f64 - rect.top();
                                let x1 = t1.client_x() as f64 - rect.left();
                                let y1 = t1.client_y() as f64 - rect.top();
                                let dist =
                                    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt().max(1.0);
                                let midx = (x0 + x1) * 0.5;
                                let midy = (y0 + y1) * 0.5;
                                let (wcx, wcy) = cam.screen_to_world(midx, midy);
                                let mut ts = touch_state_tc.borrow_mut();
                                ts.pinch = true;
                                ts.single_active = false;
                                ts.start_pinch_dist = dist;
                                ts.start_zoom = cam.zoom;
                                ts.world_center_x = wcx;
                                ts.world_center_y = wcy;
                            }
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let camera_tc = camera.clone();
                let touch_state_tc = touch_state.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let touches = e.touches();
                    let rect = canvas_tc.get_bounding_client_rect();
                    if touches.length() == 1 {
                        if let Some(t0) = touches.item(0) {
                            let cx = t0.client_x() as f64 - rect.left();
                            let cy = t0.client_y() as f64 - rect.top();
                            let mut ts = touch_state_tc.borrow_mut();
                            if ts.single_active {
                                let dx = cx - ts.last_touch_x;
                                let dy = cy - ts.last_touch_y;
                                ts.last_touch_x = cx;
                                ts.last_touch_y = cy;
                                drop(ts);
                                camera_tc.borrow_mut().pan_by(dx, dy);
                            }
                        }
                    } else if touches.length() >= 2 {
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let x0 = t0.client_x() as f64 - rect.left();
                            let y0 = t0.client_y() as f64 - rect.top();
                            let x1 = t1.client_x() as f64 - rect.left();
                            let y1 = t1.client_y() as f64 - rect.top();
                            let dist = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt().max(1.0);
                            let midx = (x0 + x1) * 0.5;
                            let midy = (y0 + y1) * 0.5;
                            let mut cam = camera_tc.borrow_mut();
                            let ts = touch_state_tc.borrow();
                            if ts.pinch {
                                let sf = dist / ts.start_pinch_dist;
                                cam.zoom = (ts.start_zoom * sf).clamp(MIN_ZOOM, MAX_ZOOM);
                                let new_scale = cam.scale_px();
                                cam.offset_x = midx - ts.world_center_x * new_scale;
                                cam.offset_y = midy - ts.world_center_y * new_scale;
                            }
                        }
                    }
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let camera_tc = camera.clone();
                let touch_state_tc = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let left = e.touches().length();
                    let mut ts = touch_state_tc.borrow_mut();
                    if left == 0 {
                        ts.single_active = false;
                        ts.pinch = false;
                        drop(ts);
                        camera_tc.borrow_mut().end_pan();
                    } else if left == 1 {
                        ts.pinch = false;
                        ts.single_active = true;
                        if let Some(t0) = e.touches().item(0) {
                            ts.last_touch_x = t0.client_x() as f64;
                            ts.last_touch_y = t0.client_y() as f64;
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let window_clone = window.clone();
            move || {
                let _ = canvas
                    .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "contextmenu",
                    contextmenu_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone
                    .remove_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
                let _ = window_clone
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &wheel_cb,
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &mouseleave_cb,
                    &contextmenu_cb,
                    &resize_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                );
            }
        });
    }

    // Camera control callbacks (buttons anchor zoom at the canvas center).
    let redraw_for = |draw_ref: &Rc<RefCell<Option<Rc<dyn Fn()>>>>| {
        let draw_ref = draw_ref.clone();
        move || {
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        }
    };
    let zoom_button = |factor: f64| -> Callback<()> {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        let redraw = redraw_for(&draw_ref);
        Callback::from(move |()| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                camera.borrow_mut().zoom_by(
                    factor,
                    canvas.width() as f64 * 0.5,
                    canvas.height() as f64 * 0.5,
                );
            }
            redraw();
        })
    };
    let pan_button = |dx: f64, dy: f64| -> Callback<()> {
        let camera = camera.clone();
        let redraw = redraw_for(&draw_ref);
        Callback::from(move |()| {
            camera.borrow_mut().pan_by(dx, dy);
            redraw();
        })
    };
    let center_cb: Callback<()> = {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        let store = store.clone();
        let redraw = redraw_for(&draw_ref);
        Callback::from(move |()| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let gs = store.city_map.grid_size;
                camera.borrow_mut().center_on(
                    gs.width as f64 * 0.5,
                    gs.height as f64 * 0.5,
                    canvas.width() as f64,
                    canvas.height() as f64,
                );
            }
            redraw();
        })
    };

    let cursor = match store.mode {
        EditorMode::Adding(_) => "crosshair",
        EditorMode::Idle => "grab",
    };
    let gs = store.city_map.grid_size;

    html! {<div style="position:relative; width:100%; height:100%; overflow:hidden;">
        <canvas ref={canvas_ref.clone()} id="map-canvas" style={format!("display:block; width:100%; height:100%; cursor:{};", cursor)}></canvas>
        <StatsPanel
            map_name={store.city_map.name.clone()}
            place_count={store.city_map.places.len()}
            road_count={store.city_map.roads.len()}
            grid_width={gs.width}
            grid_height={gs.height}
        />
        <CameraControls
            on_zoom_in={zoom_button(1.25)}
            on_zoom_out={zoom_button(0.8)}
            on_pan_left={pan_button(64.0, 0.0)}
            on_pan_right={pan_button(-64.0, 0.0)}
            on_pan_up={pan_button(0.0, 64.0)}
            on_pan_down={pan_button(0.0, -64.0)}
            on_center={center_cb}
        />
        <LegendPanel />
        <LaneEditor />
        <RoadEditor />
    </div>}
}
