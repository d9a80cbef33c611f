// Touch/pinch gesture state for the map canvas.
#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pub single_active: bool,
    pub pinch: bool,
    pub start_pinch_dist: f64,
    pub start_zoom: f64,
    pub world_center_x: f64,
    pub world_center_y: f64,
    pub last_touch_x: f64,
    pub last_touch_y: f64,
}
