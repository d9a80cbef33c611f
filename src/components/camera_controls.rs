use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_pan_left: Callback<()>,
    pub on_pan_right: Callback<()>,
    pub on_pan_up: Callback<()>,
    pub on_pan_down: Callback<()>,
    pub on_center: Callback<()>,
}

fn ctrl(label: &'static str, title: &'static str, cb: &Callback<()>) -> Html {
    let cb = cb.clone();
    let onclick = Callback::from(move |_| cb.emit(()));
    html! { <button {onclick} {title}>{ label }</button> }
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        { ctrl("-", "Zoom out", &props.on_zoom_out) }
        { ctrl("+", "Zoom in", &props.on_zoom_in) }
        <span style="width:8px;"></span>
        { ctrl("←", "Pan left", &props.on_pan_left) }
        { ctrl("↑", "Pan up", &props.on_pan_up) }
        { ctrl("↓", "Pan down", &props.on_pan_down) }
        { ctrl("→", "Pan right", &props.on_pan_right) }
        <span style="width:8px;"></span>
        { ctrl("Center", "Center the map", &props.on_center) }
    </div>}
}
