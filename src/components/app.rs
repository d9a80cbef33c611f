use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{map_view::MapView, notification_stack::NotificationStack, sidebar::Sidebar};
use crate::model::{MapAction, MapState};

pub type MapStore = UseReducerHandle<MapState>;

/// Store accessor for everything below `<App>`. Panics when no provider is
/// mounted so wiring mistakes surface immediately instead of as stale UI.
#[hook]
pub fn use_map() -> MapStore {
    use_context::<MapStore>().expect("use_map must be called from a component under <App>")
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(MapState::seed);

    {
        // 1 Hz notification aging + Escape cancels adding mode.
        let store = store.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let tick = {
                let store = store.clone();
                Closure::wrap(Box::new(move || {
                    store.dispatch(MapAction::NoticeTick);
                }) as Box<dyn FnMut()>)
            };
            let tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            let key_cb = {
                let store = store.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.code() == "Escape" {
                        e.prevent_default();
                        store.dispatch(MapAction::CancelAddingPlace);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                window.clear_interval_with_handle(tick_id);
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    key_cb.as_ref().unchecked_ref(),
                );
                drop(key_cb);
                drop(tick);
            }
        });
    }

    html! {
        <ContextProvider<MapStore> context={store.clone()}>
            <div id="root" style="display:flex; width:100vw; height:100vh; overflow:hidden;">
                <div style="position:relative; flex:1; min-width:0;">
                    <MapView />
                    <NotificationStack />
                </div>
                <Sidebar />
            </div>
        </ContextProvider<MapStore>>
    }
}
