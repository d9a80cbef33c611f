// Camera state for the map canvas: pan offset, zoom scale, and the
// transforms between screen space (canvas pixels), world space (cell
// units) and grid space (integer cell indices).

use crate::model::GridSize;

/// Pixel pitch of one grid cell at zoom 1.0.
pub const CELL_PX: f64 = 32.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 2.0;

/// Per-wheel-tick zoom sensitivity.
const WHEEL_ZOOM_FACTOR: f64 = 0.001;

/// Inclusive range of grid cells visible in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub panning: bool,
    pub last_x: f64,
    pub last_y: f64,
    pub initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            panning: false,
            last_x: 0.0,
            last_y: 0.0,
            initialized: false,
        }
    }
}

impl Camera {
    /// Screen pixels per cell at the current zoom.
    pub fn scale_px(&self) -> f64 {
        self.zoom * CELL_PX
    }

    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        let s = self.scale_px();
        ((sx - self.offset_x) / s, (sy - self.offset_y) / s)
    }

    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        let s = self.scale_px();
        (wx * s + self.offset_x, wy * s + self.offset_y)
    }

    /// Integer grid cell under a screen position, or None outside the grid.
    pub fn screen_to_grid(&self, sx: f64, sy: f64, grid: GridSize) -> Option<(u32, u32)> {
        let (wx, wy) = self.screen_to_world(sx, sy);
        let gx = wx.floor();
        let gy = wy.floor();
        if gx < 0.0 || gy < 0.0 || gx >= grid.width as f64 || gy >= grid.height as f64 {
            return None;
        }
        Some((gx as u32, gy as u32))
    }

    /// Screen position of a grid cell's top-left corner.
    pub fn grid_to_screen(&self, gx: u32, gy: u32) -> (f64, f64) {
        self.world_to_screen(gx as f64, gy as f64)
    }

    /// Wheel zoom that keeps the world point under the cursor fixed:
    /// solve `offset = mouse - world * new_scale` after clamping.
    pub fn zoom_about(&mut self, sx: f64, sy: f64, delta_y: f64) {
        let change = (-delta_y * WHEEL_ZOOM_FACTOR).exp();
        self.zoom_by(change, sx, sy);
    }

    /// Multiply zoom by `factor`, anchored at a screen point (the camera
    /// control buttons use the canvas center).
    pub fn zoom_by(&mut self, factor: f64, sx: f64, sy: f64) {
        let (wx, wy) = self.screen_to_world(sx, sy);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let s = self.scale_px();
        self.offset_x = sx - wx * s;
        self.offset_y = sy - wy * s;
    }

    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.panning = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Continue an active drag; no-op when not panning.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if !self.panning {
            return;
        }
        self.offset_x += x - self.last_x;
        self.offset_y += y - self.last_y;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn end_pan(&mut self) {
        self.panning = false;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Center the viewport on a world point.
    pub fn center_on(&mut self, wx: f64, wy: f64, canvas_w: f64, canvas_h: f64) {
        let s = self.scale_px();
        self.offset_x = canvas_w * 0.5 - wx * s;
        self.offset_y = canvas_h * 0.5 - wy * s;
    }

    /// Cells intersecting the viewport, clamped to the grid. None when the
    /// grid is entirely off-screen. Rendering iterates only this range.
    pub fn visible_cells(&self, canvas_w: f64, canvas_h: f64, grid: GridSize) -> Option<CellRange> {
        let (wx0, wy0) = self.screen_to_world(0.0, 0.0);
        let (wx1, wy1) = self.screen_to_world(canvas_w, canvas_h);
        let x0 = wx0.floor().max(0.0);
        let y0 = wy0.floor().max(0.0);
        let x1 = wx1.ceil().min(grid.width as f64) - 1.0;
        let y1 = wy1.ceil().min(grid.height as f64) - 1.0;
        if x1 < x0 || y1 < y0 || x1 < 0.0 || y1 < 0.0 {
            return None;
        }
        Some(CellRange {
            x0: x0 as u32,
            x1: x1 as u32,
            y0: y0 as u32,
            y1: y1 as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSize = GridSize {
        width: 25,
        height: 25,
    };

    #[test]
    fn zoom_stays_clamped_for_any_wheel_sequence() {
        let mut cam = Camera::default();
        for _ in 0..200 {
            cam.zoom_about(100.0, 100.0, -120.0);
        }
        assert!(cam.zoom <= MAX_ZOOM + 1e-9);
        for _ in 0..500 {
            cam.zoom_about(100.0, 100.0, 120.0);
        }
        assert!(cam.zoom >= MIN_ZOOM - 1e-9);
    }

    #[test]
    fn zoom_preserves_world_point_under_cursor() {
        let mut cam = Camera {
            offset_x: 40.0,
            offset_y: -25.0,
            ..Camera::default()
        };
        let (mx, my) = (321.0, 177.0);
        let before = cam.screen_to_world(mx, my);
        cam.zoom_about(mx, my, -120.0);
        let after = cam.screen_to_world(mx, my);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn screen_grid_round_trip_lands_in_same_cell() {
        let cam = Camera {
            zoom: 1.3,
            offset_x: -57.0,
            offset_y: 83.0,
            ..Camera::default()
        };
        let p = (412.0, 305.0);
        let (gx, gy) = cam.screen_to_grid(p.0, p.1, GRID).unwrap();
        let (sx, sy) = cam.grid_to_screen(gx, gy);
        // The cell corner is within one scaled cell of the input point.
        assert!((sx - p.0).abs() <= cam.scale_px());
        assert!((sy - p.1).abs() <= cam.scale_px());
        // And the corner maps back to the same cell.
        assert_eq!(
            cam.screen_to_grid(sx + 0.1, sy + 0.1, GRID),
            Some((gx, gy))
        );
    }

    #[test]
    fn out_of_grid_positions_are_rejected() {
        let cam = Camera::default();
        assert_eq!(cam.screen_to_grid(-1.0, 10.0, GRID), None);
        let beyond = 25.5 * cam.scale_px();
        assert_eq!(cam.screen_to_grid(beyond, 10.0, GRID), None);
        assert!(cam.screen_to_grid(10.0, 10.0, GRID).is_some());
    }

    #[test]
    fn pan_accumulates_pointer_deltas() {
        let mut cam = Camera::default();
        cam.begin_pan(100.0, 100.0);
        cam.pan_to(110.0, 95.0);
        cam.pan_to(130.0, 90.0);
        assert_eq!((cam.offset_x, cam.offset_y), (30.0, -10.0));
        cam.end_pan();
        cam.pan_to(500.0, 500.0);
        assert_eq!((cam.offset_x, cam.offset_y), (30.0, -10.0));
    }

    #[test]
    fn visible_cells_match_viewport() {
        // Zoom 1.0, no offset: a 320x160 canvas shows cells [0,9] x [0,4].
        let cam = Camera::default();
        let range = cam.visible_cells(320.0, 160.0, GRID).unwrap();
        assert_eq!((range.x0, range.x1, range.y0, range.y1), (0, 9, 0, 4));

        // Panned far past the grid: nothing is visible.
        let cam = Camera {
            offset_x: -30000.0,
            ..Camera::default()
        };
        assert!(cam.visible_cells(320.0, 160.0, GRID).is_none());
    }

    #[test]
    fn center_on_puts_point_mid_canvas() {
        let mut cam = Camera::default();
        cam.center_on(12.5, 12.5, 800.0, 600.0);
        let (wx, wy) = cam.screen_to_world(400.0, 300.0);
        assert!((wx - 12.5).abs() < 1e-9);
        assert!((wy - 12.5).abs() < 1e-9);
    }
}
