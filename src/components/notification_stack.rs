use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, NoticeKind};

/// Fire-and-forget toasts from the store; aged out by the app's 1 Hz tick,
/// or dismissed early by clicking.
#[function_component(NotificationStack)]
pub fn notification_stack() -> Html {
    let store = use_map();
    if store.notices.is_empty() {
        return html! {};
    }

    html! {
        <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; gap:6px; z-index:40; pointer-events:auto;">
            { for store.notices.iter().map(|notice| {
                let accent = match notice.kind {
                    NoticeKind::Info => "#58a6ff",
                    NoticeKind::Success => "#2ea043",
                    NoticeKind::Warning => "#f0883e",
                };
                let store = store.clone();
                let id = notice.id;
                let onclick = Callback::from(move |_| {
                    store.dispatch(MapAction::DismissNotice(id));
                });
                html! {
                    <div {onclick} style={format!("background:rgba(22,27,34,0.95); border:1px solid #30363d; border-left:3px solid {}; border-radius:8px; padding:8px 14px; font-size:13px; cursor:pointer; box-shadow:0 4px 12px rgba(0,0,0,0.4);", accent)}>
                        { notice.message.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
