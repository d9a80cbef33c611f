use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub map_name: String,
    pub place_count: usize,
    pub road_count: usize,
    pub grid_width: u32,
    pub grid_height: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; gap:12px;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; display:flex; flex-direction:column; gap:4px; font-size:13px;">
            <div style="font-weight:600; font-size:14px;">{ props.map_name.clone() }</div>
            <div style={row_style}>
                <span style="color:#8b949e;">{"Grid"}</span>
                <span>{ format!("{}x{}", props.grid_width, props.grid_height) }</span>
            </div>
            <div style={row_style}>
                <span style="color:#8b949e;">{"Places"}</span>
                <span>{ props.place_count }</span>
            </div>
            <div style={row_style}>
                <span style="color:#8b949e;">{"Roads"}</span>
                <span>{ props.road_count }</span>
            </div>
        </div>
    }
}
