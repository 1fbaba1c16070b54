use std::rc::Rc;

use leptos::*;

use super::registry::{SlideinPanel, SlideinRegistry};

/// Demo slide-in panel. Registers itself under its element id on mount so
/// buttons configured with a matching slider target can open it.
#[component]
pub fn SlideinView(
    #[prop(into)] panel_id: String,
    children: Children,
) -> impl IntoView {
    let is_open = create_rw_signal(false);
    let source = create_rw_signal(None::<String>);

    match use_context::<SlideinRegistry>() {
        Some(registry) => {
            registry.register(
                panel_id.clone(),
                Rc::new(SlideinHandle { is_open, source }),
            );
        }
        None => log::warn!("no slide-in registry in scope for {}", panel_id),
    }

    view! {
        <div
            id=panel_id
            class=move || {
                if is_open.get() {
                    "fixed inset-y-0 right-0 w-96 bg-white shadow-xl p-4"
                } else {
                    "hidden"
                }
            }
        >
            <div class="flex justify-end">
                <button
                    type="button"
                    class="text-gray-400 hover:text-gray-500"
                    on:click=move |_| is_open.set(false)
                >
                    "Close"
                </button>
            </div>
            {move || {
                source.get().map(|source| {
                    view! {
                        <p class="text-xs text-gray-500">
                            "opened from " {source}
                        </p>
                    }
                })
            }}
            {children()}
        </div>
    }
}

struct SlideinHandle {
    is_open: RwSignal<bool>,
    source: RwSignal<Option<String>>,
}

impl SlideinPanel for SlideinHandle {
    fn open(&self, source: Option<&str>) {
        self.source.set(source.map(str::to_string));
        self.is_open.set(true);
    }
}
