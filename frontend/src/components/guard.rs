use leptos::*;

use crate::{
    api::AdminUserInfo,
    components::feedback::{LoadingSpinner, NotFound},
    permissions::{PermissionRequirement, PermissionTable},
    state::auth::{use_auth, AuthState, SessionUser},
    utils::navigation::{use_navigator, LOGIN_PATH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is still being resolved.
    Pending,
    Render,
    RedirectToLogin,
    /// Logged in but lacking the permission; render the not-found view.
    Fallback,
}

impl GuardDecision {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            _ => None,
        }
    }
}

/// Pure access decision, recomputed on every render.
pub fn evaluate_access<U: SessionUser>(
    session: &AuthState<U>,
    requirement: &PermissionRequirement,
    table: &PermissionTable,
) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if !session.is_logged_in {
        return GuardDecision::RedirectToLogin;
    }
    if table.satisfies(session.role(), requirement) {
        GuardDecision::Render
    } else {
        GuardDecision::Fallback
    }
}

pub fn provide_permission_table(table: PermissionTable) {
    provide_context(table);
}

pub fn use_permission_table() -> PermissionTable {
    use_context::<PermissionTable>().unwrap_or_else(PermissionTable::admin_defaults)
}

fn guarded_view(requirement: PermissionRequirement, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth::<AdminUserInfo>().state();
    let table = use_permission_table();
    let decision = create_memo(move |_| auth.with(|s| evaluate_access(s, &requirement, &table)));
    let navigator = use_navigator();
    create_effect(move |_| {
        if let Some(target) = decision.get().redirect_target() {
            navigator.navigate(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || match decision.get() {
                GuardDecision::Pending => view! { <LoadingSpinner /> }.into_view(),
                GuardDecision::Fallback => view! { <NotFound /> }.into_view(),
                _ => ().into_view(),
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded_view(PermissionRequirement::none(), children)
}

#[component]
pub fn RequirePermission(
    #[prop(into)] requirement: PermissionRequirement,
    children: ChildrenFn,
) -> impl IntoView {
    guarded_view(requirement, children)
}
