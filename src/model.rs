//! Core data model for the city map plus the reducer that owns it.
//! The `MapState` container is the single source of truth; views dispatch
//! `MapAction`s and read fully-replaced snapshots.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Hard-coded startup map; deserialized once in `MapState::seed`.
const SEED_JSON: &str = include_str!("data/seed.json");

/// How many 1 Hz ticks a notification stays visible.
const NOTICE_TICKS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Residential,
    Commercial,
    Public,
    Utility,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 4] = [
        PlaceCategory::Residential,
        PlaceCategory::Commercial,
        PlaceCategory::Public,
        PlaceCategory::Utility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlaceCategory::Residential => "Residential",
            PlaceCategory::Commercial => "Commercial",
            PlaceCategory::Public => "Public",
            PlaceCategory::Utility => "Utility",
        }
    }

    /// Lowercase key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            PlaceCategory::Residential => "residential",
            PlaceCategory::Commercial => "commercial",
            PlaceCategory::Public => "public",
            PlaceCategory::Utility => "utility",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn color(self) -> &'static str {
        match self {
            PlaceCategory::Residential => "#2ea043",
            PlaceCategory::Commercial => "#58a6ff",
            PlaceCategory::Public => "#a855f7",
            PlaceCategory::Utility => "#f0883e",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    /// Grid cell coordinates. Bounds are validated by the canvas click
    /// handler before an add is dispatched, not here.
    pub x: u32,
    pub y: u32,
}

/// Directional connector inside one block. Offsets are in cell units
/// relative to the owning block's grid position; absolute geometry is
/// `(block + offset) * cell size`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub cost: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    #[serde(default)]
    pub lanes: Vec<Lane>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Absolute-coordinate segment, independent of the block grid.
/// Coordinates are map pixels at zoom 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: String,
    pub name: String,
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub cost: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityMap {
    pub name: String,
    pub grid_size: GridSize,
    /// Row-major block arena; length = width * height, indexed by (x, y).
    pub blocks: Vec<Block>,
    pub places: Vec<Place>,
    pub roads: Vec<Road>,
}

impl CityMap {
    pub fn empty(name: String, grid_size: GridSize) -> Self {
        let mut blocks = Vec::with_capacity((grid_size.width * grid_size.height) as usize);
        for y in 0..grid_size.height {
            for x in 0..grid_size.width {
                blocks.push(Block {
                    x,
                    y,
                    lanes: Vec::new(),
                });
            }
        }
        Self {
            name,
            grid_size,
            blocks,
            places: Vec::new(),
            roads: Vec::new(),
        }
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.grid_size.width && y < self.grid_size.height
    }

    pub fn block(&self, x: u32, y: u32) -> Option<&Block> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.blocks.get((y * self.grid_size.width + x) as usize)
    }

    fn block_mut(&mut self, x: u32, y: u32) -> Option<&mut Block> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = (y * self.grid_size.width + x) as usize;
        self.blocks.get_mut(idx)
    }

    pub fn find_place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn place_at(&self, x: u32, y: u32) -> Option<&Place> {
        self.places.iter().find(|p| p.x == x && p.y == y)
    }

    pub fn find_road(&self, id: &str) -> Option<&Road> {
        self.roads.iter().find(|r| r.id == id)
    }

    pub fn find_lane(&self, block_x: u32, block_y: u32, lane_id: &str) -> Option<&Lane> {
        self.block(block_x, block_y)?
            .lanes
            .iter()
            .find(|l| l.id == lane_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

/// Fire-and-forget user notification; aged out by `NoticeTick`.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
    pub remaining_ticks: u8,
}

/// What the user currently has selected. A tagged union so that e.g.
/// a selected place and an open lane editor cannot coexist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    None,
    Place(String),
    Lane {
        block_x: u32,
        block_y: u32,
        lane_id: String,
    },
    Road(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Idle,
    Adding(PlaceCategory),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub city_map: CityMap,
    pub selection: Selection,
    pub mode: EditorMode,
    pub search_query: String,
    pub notices: Vec<Notice>,
    /// Bumped on every state-changing reduce; effects key redraws on it.
    pub generation: u64,
    next_id: u32,
    next_notice_id: u32,
}

#[derive(Deserialize)]
struct SeedBlock {
    x: u32,
    y: u32,
    lanes: Vec<Lane>,
}

#[derive(Deserialize)]
struct SeedMap {
    name: String,
    grid_size: GridSize,
    #[serde(default)]
    lanes: Vec<SeedBlock>,
    #[serde(default)]
    places: Vec<Place>,
    #[serde(default)]
    roads: Vec<Road>,
}

fn id_suffix(id: &str) -> u32 {
    id.rsplit('-')
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

impl MapState {
    /// Build the startup state from the embedded seed document. The seed
    /// ships with the binary, so a parse failure is a build defect.
    pub fn seed() -> Self {
        let seed: SeedMap =
            serde_json::from_str(SEED_JSON).expect("embedded seed data is malformed");
        let mut map = CityMap::empty(seed.name, seed.grid_size);
        for sb in seed.lanes {
            if let Some(block) = map.block_mut(sb.x, sb.y) {
                block.lanes = sb.lanes;
            }
        }
        map.places = seed.places;
        map.roads = seed.roads;
        Self::new(map)
    }

    pub fn new(city_map: CityMap) -> Self {
        let next_id = city_map
            .places
            .iter()
            .map(|p| id_suffix(&p.id))
            .chain(city_map.roads.iter().map(|r| id_suffix(&r.id)))
            .chain(
                city_map
                    .blocks
                    .iter()
                    .flat_map(|b| b.lanes.iter())
                    .map(|l| id_suffix(&l.id)),
            )
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            city_map,
            selection: Selection::None,
            mode: EditorMode::Idle,
            search_query: String::new(),
            notices: Vec::new(),
            generation: 0,
            next_id,
            next_notice_id: 0,
        }
    }

    pub fn selected_place(&self) -> Option<&Place> {
        match &self.selection {
            Selection::Place(id) => self.city_map.find_place(id),
            _ => None,
        }
    }

    /// Case-insensitive substring match over name, description and address.
    /// An empty (or all-whitespace) query yields no results, not all places.
    pub fn search_places(&self) -> Vec<&Place> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.city_map
            .places
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.address.to_lowercase().contains(&query)
            })
            .collect()
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next_id);
        self.next_id += 1;
        id
    }

    fn notify(&mut self, kind: NoticeKind, message: String) {
        let id = self.next_notice_id;
        self.next_notice_id = self.next_notice_id.wrapping_add(1);
        self.notices.push(Notice {
            id,
            kind,
            message,
            remaining_ticks: NOTICE_TICKS,
        });
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum MapAction {
    Select(Selection),
    StartAddingPlace(PlaceCategory),
    CancelAddingPlace,
    AddPlace {
        name: String,
        category: PlaceCategory,
        description: String,
        address: String,
        x: u32,
        y: u32,
    },
    UpdatePlace(Place),
    DeletePlace(String),
    UpdateLaneCost {
        block_x: u32,
        block_y: u32,
        lane_id: String,
        cost: u32,
    },
    DeleteLane {
        block_x: u32,
        block_y: u32,
        lane_id: String,
    },
    AddRoad {
        name: String,
        start: Point,
        end: Point,
        width: f64,
        cost: u32,
    },
    UpdateRoad(Road),
    DeleteRoad(String),
    SetSearchQuery(String),
    DismissNotice(u32),
    NoticeTick,
}

impl Reducible for MapState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MapAction::*;
        let mut new = (*self).clone();
        new.generation = new.generation.wrapping_add(1);
        match action {
            Select(selection) => {
                new.selection = selection;
            }
            StartAddingPlace(category) => {
                new.mode = EditorMode::Adding(category);
                new.selection = Selection::None;
                new.notify(
                    NoticeKind::Info,
                    format!("Click on the map to place a new {}", category.key()),
                );
            }
            CancelAddingPlace => {
                if new.mode == EditorMode::Idle {
                    return self;
                }
                new.mode = EditorMode::Idle;
            }
            AddPlace {
                name,
                category,
                description,
                address,
                x,
                y,
            } => {
                let id = new.fresh_id("place");
                new.city_map.places.push(Place {
                    id,
                    name: name.clone(),
                    category,
                    description,
                    address,
                    x,
                    y,
                });
                new.mode = EditorMode::Idle;
                new.notify(
                    NoticeKind::Success,
                    format!("Added new {}: {}", category.key(), name),
                );
            }
            UpdatePlace(place) => {
                let Some(slot) = new.city_map.places.iter_mut().find(|p| p.id == place.id)
                else {
                    return self;
                };
                let msg = format!("Updated {}", place.name);
                *slot = place;
                new.notify(NoticeKind::Success, msg);
            }
            DeletePlace(id) => {
                let Some(pos) = new.city_map.places.iter().position(|p| p.id == id) else {
                    return self;
                };
                let removed = new.city_map.places.remove(pos);
                if matches!(&new.selection, Selection::Place(sel) if *sel == id) {
                    new.selection = Selection::None;
                }
                new.notify(NoticeKind::Success, format!("Removed {}", removed.name));
            }
            UpdateLaneCost {
                block_x,
                block_y,
                lane_id,
                cost,
            } => {
                if cost == 0 {
                    new.notify(NoticeKind::Warning, "Lane cost must be at least 1".into());
                    return Rc::new(new);
                }
                let Some(block) = new.city_map.block_mut(block_x, block_y) else {
                    new.notify(
                        NoticeKind::Warning,
                        format!("No block at ({}, {})", block_x, block_y),
                    );
                    return Rc::new(new);
                };
                let Some(lane) = block.lanes.iter_mut().find(|l| l.id == lane_id) else {
                    return self;
                };
                lane.cost = cost;
                new.notify(NoticeKind::Success, format!("Updated lane cost to {}", cost));
            }
            DeleteLane {
                block_x,
                block_y,
                lane_id,
            } => {
                let Some(block) = new.city_map.block_mut(block_x, block_y) else {
                    new.notify(
                        NoticeKind::Warning,
                        format!("No block at ({}, {})", block_x, block_y),
                    );
                    return Rc::new(new);
                };
                let Some(pos) = block.lanes.iter().position(|l| l.id == lane_id) else {
                    return self;
                };
                block.lanes.remove(pos);
                let selected = matches!(
                    &new.selection,
                    Selection::Lane { block_x: bx, block_y: by, lane_id: id }
                        if *bx == block_x && *by == block_y && *id == lane_id
                );
                if selected {
                    new.selection = Selection::None;
                }
                new.notify(NoticeKind::Success, "Lane removed".into());
            }
            AddRoad {
                name,
                start,
                end,
                width,
                cost,
            } => {
                let id = new.fresh_id("road");
                new.city_map.roads.push(Road {
                    id,
                    name: name.clone(),
                    start,
                    end,
                    width,
                    cost,
                });
                new.notify(NoticeKind::Success, format!("Added road {}", name));
            }
            UpdateRoad(road) => {
                let Some(slot) = new.city_map.roads.iter_mut().find(|r| r.id == road.id) else {
                    return self;
                };
                let msg = format!("Updated {}", road.name);
                *slot = road;
                new.notify(NoticeKind::Success, msg);
            }
            DeleteRoad(id) => {
                let Some(pos) = new.city_map.roads.iter().position(|r| r.id == id) else {
                    return self;
                };
                let removed = new.city_map.roads.remove(pos);
                if matches!(&new.selection, Selection::Road(sel) if *sel == id) {
                    new.selection = Selection::None;
                }
                new.notify(NoticeKind::Success, format!("Removed {}", removed.name));
            }
            SetSearchQuery(query) => {
                new.search_query = query;
            }
            DismissNotice(id) => {
                let before = new.notices.len();
                new.notices.retain(|n| n.id != id);
                if new.notices.len() == before {
                    return self;
                }
            }
            NoticeTick => {
                if new.notices.is_empty() {
                    return self;
                }
                for n in &mut new.notices {
                    n.remaining_ticks = n.remaining_ticks.saturating_sub(1);
                }
                new.notices.retain(|n| n.remaining_ticks > 0);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MapState, action: MapAction) -> MapState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn add_action(name: &str, x: u32, y: u32) -> MapAction {
        MapAction::AddPlace {
            name: name.into(),
            category: PlaceCategory::Commercial,
            description: String::new(),
            address: String::new(),
            x,
            y,
        }
    }

    #[test]
    fn seed_builds_full_block_arena() {
        let state = MapState::seed();
        let gs = state.city_map.grid_size;
        assert_eq!(gs.width, 25);
        assert_eq!(gs.height, 25);
        assert_eq!(state.city_map.blocks.len(), 625);
        assert!(state.city_map.block(24, 24).is_some());
        assert!(state.city_map.block(25, 0).is_none());
        assert!(!state.city_map.places.is_empty());
        assert!(!state.city_map.roads.is_empty());
        assert!(state.city_map.find_lane(5, 5, "lane-1").is_some());
    }

    #[test]
    fn add_place_appends_and_exits_adding_mode() {
        let state = reduce(
            MapState::seed(),
            MapAction::StartAddingPlace(PlaceCategory::Commercial),
        );
        let before = state.city_map.places.len();
        let state = reduce(state, add_action("Test", 5, 5));
        assert_eq!(state.city_map.places.len(), before + 1);
        assert_eq!(state.mode, EditorMode::Idle);
        let added = state.city_map.places.last().unwrap();
        assert_eq!(added.name, "Test");
        assert_eq!((added.x, added.y), (5, 5));
        let notice = state.notices.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains("Test"));
    }

    #[test]
    fn added_places_get_unique_ids() {
        let mut state = MapState::seed();
        let before = state.city_map.places.len();
        for i in 0..5 {
            state = reduce(state, add_action(&format!("P{}", i), i, i));
        }
        assert_eq!(state.city_map.places.len(), before + 5);
        let mut ids: Vec<&String> = state.city_map.places.iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before + 5);
    }

    #[test]
    fn delete_place_removes_and_clears_selection() {
        let state = reduce(
            MapState::seed(),
            MapAction::Select(Selection::Place("place-1".into())),
        );
        assert!(state.selected_place().is_some());
        let state = reduce(state, MapAction::DeletePlace("place-1".into()));
        assert!(state.city_map.find_place("place-1").is_none());
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn delete_unknown_place_is_noop() {
        let state = MapState::seed();
        let before = state.clone();
        let state = reduce(state, MapAction::DeletePlace("place-999".into()));
        assert_eq!(state.city_map, before.city_map);
        assert_eq!(state.notices.len(), before.notices.len());
    }

    #[test]
    fn update_place_is_idempotent() {
        let state = MapState::seed();
        let mut place = state.city_map.find_place("place-1").unwrap().clone();
        place.name = "Renamed".into();
        place.description = "changed".into();
        let once = reduce(state.clone(), MapAction::UpdatePlace(place.clone()));
        let twice = reduce(once.clone(), MapAction::UpdatePlace(place.clone()));
        assert_eq!(
            once.city_map.find_place("place-1"),
            twice.city_map.find_place("place-1")
        );
        assert_eq!(once.city_map.places.len(), twice.city_map.places.len());
        assert_eq!(twice.city_map.find_place("place-1").unwrap().name, "Renamed");
    }

    #[test]
    fn update_unknown_place_is_noop() {
        let state = MapState::seed();
        let ghost = Place {
            id: "place-999".into(),
            name: "Ghost".into(),
            category: PlaceCategory::Public,
            description: String::new(),
            address: String::new(),
            x: 0,
            y: 0,
        };
        let after = reduce(state.clone(), MapAction::UpdatePlace(ghost));
        assert_eq!(after.city_map, state.city_map);
        assert!(after.notices.is_empty());
    }

    #[test]
    fn update_lane_cost_roundtrip() {
        let state = reduce(
            MapState::seed(),
            MapAction::UpdateLaneCost {
                block_x: 5,
                block_y: 5,
                lane_id: "lane-1".into(),
                cost: 9,
            },
        );
        assert_eq!(state.city_map.find_lane(5, 5, "lane-1").unwrap().cost, 9);
        assert_eq!(state.notices.last().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn zero_lane_cost_is_rejected() {
        let state = MapState::seed();
        let old_cost = state.city_map.find_lane(5, 5, "lane-1").unwrap().cost;
        let state = reduce(
            state,
            MapAction::UpdateLaneCost {
                block_x: 5,
                block_y: 5,
                lane_id: "lane-1".into(),
                cost: 0,
            },
        );
        assert_eq!(state.city_map.find_lane(5, 5, "lane-1").unwrap().cost, old_cost);
        assert_eq!(state.notices.last().unwrap().kind, NoticeKind::Warning);
    }

    #[test]
    fn lane_ops_reject_out_of_range_blocks() {
        let state = reduce(
            MapState::seed(),
            MapAction::UpdateLaneCost {
                block_x: 99,
                block_y: 99,
                lane_id: "lane-1".into(),
                cost: 3,
            },
        );
        assert_eq!(state.notices.last().unwrap().kind, NoticeKind::Warning);
        let state = reduce(
            state,
            MapAction::DeleteLane {
                block_x: 0,
                block_y: 200,
                lane_id: "lane-1".into(),
            },
        );
        assert_eq!(state.notices.last().unwrap().kind, NoticeKind::Warning);
        assert!(state.city_map.find_lane(5, 5, "lane-1").is_some());
    }

    #[test]
    fn delete_lane_removes_only_that_lane() {
        let state = MapState::seed();
        let before = state.city_map.block(5, 5).unwrap().lanes.len();
        assert!(before >= 2);
        let state = reduce(
            state,
            MapAction::DeleteLane {
                block_x: 5,
                block_y: 5,
                lane_id: "lane-1".into(),
            },
        );
        let block = state.city_map.block(5, 5).unwrap();
        assert_eq!(block.lanes.len(), before - 1);
        assert!(block.lanes.iter().all(|l| l.id != "lane-1"));
    }

    #[test]
    fn road_crud() {
        let state = MapState::seed();
        let before = state.city_map.roads.len();
        let state = reduce(
            state,
            MapAction::AddRoad {
                name: "Ring Road".into(),
                start: Point { x: 0.0, y: 0.0 },
                end: Point { x: 100.0, y: 0.0 },
                width: 12.0,
                cost: 2,
            },
        );
        assert_eq!(state.city_map.roads.len(), before + 1);
        let id = state.city_map.roads.last().unwrap().id.clone();
        assert!(state.city_map.roads[..before].iter().all(|r| r.id != id));

        let mut road = state.city_map.find_road(&id).unwrap().clone();
        road.cost = 7;
        road.name = "Outer Ring".into();
        let state = reduce(state, MapAction::UpdateRoad(road));
        let updated = state.city_map.find_road(&id).unwrap();
        assert_eq!(updated.cost, 7);
        assert_eq!(updated.name, "Outer Ring");

        let state = reduce(state, MapAction::Select(Selection::Road(id.clone())));
        let state = reduce(state, MapAction::DeleteRoad(id.clone()));
        assert!(state.city_map.find_road(&id).is_none());
        assert_eq!(state.selection, Selection::None);
    }

    #[test]
    fn empty_search_query_returns_nothing() {
        let mut state = MapState::seed();
        assert!(state.search_places().is_empty());
        state = reduce(state, MapAction::SetSearchQuery("   ".into()));
        assert!(state.search_places().is_empty());
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let state = reduce(MapState::seed(), MapAction::SetSearchQuery("CITY HALL".into()));
        let results = state.search_places();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "City Hall");

        // address matches too
        let state = reduce(state, MapAction::SetSearchQuery("civic plaza".into()));
        assert!(state.search_places().iter().any(|p| p.name == "City Hall"));
    }

    #[test]
    fn start_adding_clears_selection_and_notifies() {
        let state = reduce(
            MapState::seed(),
            MapAction::Select(Selection::Place("place-1".into())),
        );
        let state = reduce(state, MapAction::StartAddingPlace(PlaceCategory::Utility));
        assert_eq!(state.mode, EditorMode::Adding(PlaceCategory::Utility));
        assert_eq!(state.selection, Selection::None);
        let notice = state.notices.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.contains("utility"));
    }

    #[test]
    fn cancel_adding_returns_to_idle() {
        let state = reduce(
            MapState::seed(),
            MapAction::StartAddingPlace(PlaceCategory::Residential),
        );
        let state = reduce(state, MapAction::CancelAddingPlace);
        assert_eq!(state.mode, EditorMode::Idle);
    }

    #[test]
    fn notices_age_out_and_dismiss() {
        let state = reduce(
            MapState::seed(),
            MapAction::StartAddingPlace(PlaceCategory::Public),
        );
        assert_eq!(state.notices.len(), 1);
        let mut ticked = state.clone();
        for _ in 0..NOTICE_TICKS {
            ticked = reduce(ticked, MapAction::NoticeTick);
        }
        assert!(ticked.notices.is_empty());

        let id = state.notices[0].id;
        let dismissed = reduce(state, MapAction::DismissNotice(id));
        assert!(dismissed.notices.is_empty());
    }

    #[test]
    fn end_to_end_add_scenario() {
        // Seed a 25x25 grid, start adding, place at (5, 5).
        let state = MapState::seed();
        let before = state.city_map.places.len();
        let state = reduce(state, MapAction::StartAddingPlace(PlaceCategory::Commercial));
        let state = reduce(
            state,
            MapAction::AddPlace {
                name: "Test".into(),
                category: PlaceCategory::Commercial,
                description: "A new commercial".into(),
                address: String::new(),
                x: 5,
                y: 5,
            },
        );
        assert_eq!(state.city_map.places.len(), before + 1);
        assert_eq!(state.mode, EditorMode::Idle);
        assert!(state
            .notices
            .iter()
            .any(|n| n.kind == NoticeKind::Success && n.message.contains("Test")));
    }
}
