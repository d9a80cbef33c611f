// Hit-testing over map entities, in world (cell-unit) space.

use crate::model::{CityMap, Place, Road};
use crate::state::camera::CELL_PX;

/// How close (in cell units) a click must land to a lane's segment.
pub const LANE_PICK_TOLERANCE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneHit {
    pub block_x: u32,
    pub block_y: u32,
    pub lane_id: String,
}

/// Distance from point (px, py) to segment (ax, ay)-(bx, by).
pub fn dist_point_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// Place occupying the cell under a world position.
pub fn pick_place(map: &CityMap, wx: f64, wy: f64) -> Option<&Place> {
    if wx < 0.0 || wy < 0.0 {
        return None;
    }
    let gx = wx.floor() as u32;
    let gy = wy.floor() as u32;
    if !map.in_bounds(gx, gy) {
        return None;
    }
    map.place_at(gx, gy)
}

/// Closest lane within tolerance of a world position, if any.
pub fn pick_lane(map: &CityMap, wx: f64, wy: f64) -> Option<LaneHit> {
    let mut best: Option<(f64, LaneHit)> = None;
    for block in &map.blocks {
        for lane in &block.lanes {
            let ax = block.x as f64 + lane.start.0 as f64;
            let ay = block.y as f64 + lane.start.1 as f64;
            let bx = block.x as f64 + lane.end.0 as f64;
            let by = block.y as f64 + lane.end.1 as f64;
            let d = dist_point_segment(wx, wy, ax, ay, bx, by);
            if d <= LANE_PICK_TOLERANCE && best.as_ref().is_none_or(|(bd, _)| d < *bd) {
                best = Some((
                    d,
                    LaneHit {
                        block_x: block.x,
                        block_y: block.y,
                        lane_id: lane.id.clone(),
                    },
                ));
            }
        }
    }
    best.map(|(_, hit)| hit)
}

/// Closest road whose body (half its width) covers a world position.
/// Road coordinates are map pixels, so they are rescaled to cell units.
pub fn pick_road(map: &CityMap, wx: f64, wy: f64) -> Option<&Road> {
    let mut best: Option<(f64, &Road)> = None;
    for road in &map.roads {
        let ax = road.start.x / CELL_PX;
        let ay = road.start.y / CELL_PX;
        let bx = road.end.x / CELL_PX;
        let by = road.end.y / CELL_PX;
        let tol = (road.width * 0.5) / CELL_PX;
        let d = dist_point_segment(wx, wy, ax, ay, bx, by);
        if d <= tol && best.as_ref().is_none_or(|(bd, _)| d < *bd) {
            best = Some((d, road));
        }
    }
    best.map(|(_, road)| road)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, GridSize, Lane, Place, PlaceCategory, Point, Road};

    fn map_with_lane() -> CityMap {
        let mut map = CityMap::empty(
            "Test".into(),
            GridSize {
                width: 10,
                height: 10,
            },
        );
        let idx = 5 * 10 + 5;
        map.blocks[idx] = Block {
            x: 5,
            y: 5,
            lanes: vec![Lane {
                id: "lane-1".into(),
                start: (0, 0),
                end: (1, 0),
                cost: 1,
            }],
        };
        map.places.push(Place {
            id: "place-1".into(),
            name: "Depot".into(),
            category: PlaceCategory::Utility,
            description: String::new(),
            address: String::new(),
            x: 2,
            y: 3,
        });
        map.roads.push(Road {
            id: "road-1".into(),
            name: "Main Street".into(),
            start: Point { x: 0.0, y: 64.0 },
            end: Point { x: 320.0, y: 64.0 },
            width: 16.0,
            cost: 1,
        });
        map
    }

    #[test]
    fn segment_distance_basics() {
        // Perpendicular drop onto the segment interior.
        assert!((dist_point_segment(1.0, 1.0, 0.0, 0.0, 2.0, 0.0) - 1.0).abs() < 1e-9);
        // Beyond the endpoint, distance is to the endpoint itself.
        assert!((dist_point_segment(3.0, 0.0, 0.0, 0.0, 2.0, 0.0) - 1.0).abs() < 1e-9);
        // Degenerate zero-length segment.
        assert!((dist_point_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn pick_lane_within_tolerance() {
        let map = map_with_lane();
        // Lane runs from (5,5) to (6,5) in world space.
        let hit = pick_lane(&map, 5.5, 5.1).unwrap();
        assert_eq!(hit.lane_id, "lane-1");
        assert_eq!((hit.block_x, hit.block_y), (5, 5));
        assert!(pick_lane(&map, 5.5, 6.5).is_none());
    }

    #[test]
    fn pick_place_by_cell() {
        let map = map_with_lane();
        assert_eq!(pick_place(&map, 2.7, 3.2).unwrap().id, "place-1");
        assert!(pick_place(&map, 3.1, 3.2).is_none());
        assert!(pick_place(&map, -0.5, 3.2).is_none());
    }

    #[test]
    fn pick_road_respects_width() {
        let map = map_with_lane();
        // Road body is centered on world y = 2.0, half-width 0.25 cells.
        assert_eq!(pick_road(&map, 4.0, 2.1).unwrap().id, "road-1");
        assert!(pick_road(&map, 4.0, 2.6).is_none());
        // Beyond the road's end point.
        assert!(pick_road(&map, 12.0, 2.0).is_none());
    }
}
