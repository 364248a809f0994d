use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::pages::crud::{CrudRepository, ListViewModel};

/// Modal asking before a list row is deleted. Opens whenever the view
/// model has a pending delete; confirming runs the delete and re-fetch.
#[component]
pub fn DeleteConfirm<R>(
    vm: ListViewModel<R>,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView
where
    R: CrudRepository + 'static,
{
    let pending = vm.pending_delete;
    let busy = create_rw_signal(false);
    let message = message.unwrap_or_else(|| "This record will be permanently deleted.".into());

    let on_cancel = move || {
        if !busy.get_untracked() {
            pending.set(None);
        }
    };
    let on_confirm = move |_: MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let vm = vm.clone();
        spawn_local(async move {
            if let Err(err) = vm.confirm_delete().await {
                log::warn!("Delete failed: {}", err);
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || pending.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold">
                        {move || format!("Delete record #{}?", pending.get().unwrap_or_default())}
                    </h2>
                    <p class="text-sm text-fg-muted">{message.clone()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm bg-surface-muted"
                            on:click=move |_| on_cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=on_confirm.clone()
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
