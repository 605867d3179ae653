use lendboard_business::{
    ActiveFilters, AppConfig, CacheStore, DetailState, LayoutState, LoadUsersCommand,
    PersistFetchedUsersCommand, Route, TableSource, ToggleStatusInput, ToggleUserStatusCommand,
    UserCache, UsersTableState, VisibleUsers,
};
use lendboard_states::{StateCtx, Time};

use crate::pages::LoginForm;

/// The main application state.
///
/// Everything routed through the state context is shared with the business
/// layer; the login form is chrome-local and never leaves the UI crate.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// The sign-in form fields.
    pub login_form: LoginForm,
}

impl Default for State {
    fn default() -> Self {
        Self::with_cache(UserCache::in_memory(), AppConfig::from_env())
    }
}

impl State {
    /// State wired to a persistent cache store for the current platform.
    pub fn with_store(store: Box<dyn CacheStore>) -> Self {
        Self::with_cache(UserCache::new(store), AppConfig::from_env())
    }

    /// Test state: endpoint pinned to a local mock server, the landing splash
    /// disabled and the sign-in screen skipped.
    pub fn test(base_url: String) -> Self {
        let state = Self::with_cache(UserCache::in_memory(), AppConfig::new(base_url));
        state.ctx.update::<Route>(|route| *route = Route::Dashboard);
        state
    }

    fn with_cache(cache: UserCache, config: AppConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(Route::default());
        ctx.add_state(LayoutState::default());
        ctx.add_state(ActiveFilters::default());
        ctx.add_state(UsersTableState::default());
        ctx.add_state(DetailState::default());
        ctx.add_state(ToggleStatusInput::default());
        ctx.add_state(cache);

        // Row filtering reads the resolved dataset, so the source must land
        // in the registration order first.
        ctx.record_compute(TableSource::default());
        ctx.record_compute(VisibleUsers::default());

        ctx.record_command(LoadUsersCommand);
        ctx.record_command(PersistFetchedUsersCommand);
        ctx.record_command(ToggleUserStatusCommand);

        Self {
            ctx,
            login_form: LoginForm::default(),
        }
    }
}
