use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Shown in place of a screen the session may not open.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-8" data-testid="not-found">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-sm">"The page you are looking for does not exist."</p>
        </div>
    }
}
