pub mod app;
pub mod camera_controls;
pub mod lane_editor;
pub mod legend;
pub mod legend_panel;
pub mod map_view;
pub mod notification_stack;
pub mod place_details;
pub mod place_type_selector;
pub mod road_editor;
pub mod search_panel;
pub mod sidebar;
pub mod stats_panel;
