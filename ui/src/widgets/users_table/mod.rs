//! The users table: dataset resolution, responsive rendering and pagination.
//!
//! Split into focused components:
//! - `columns`: Column definitions and widths
//! - `header`: Header row doubling as the filter trigger
//! - `row`: Individual row rendering with cells
//! - `cards`: Stacked card layout for narrow viewports
//! - `action_menu`: Per-row actions
//! - `pagination`: Footer controls

mod action_menu;
mod cards;
mod columns;
mod header;
mod pagination;
mod row;

use egui::{Align, Layout, Sense, Ui};
use lendboard_business::{
    ActionFamily, ActiveFilters, DetailState, LayoutState, LoadUsersCommand,
    PersistFetchedUsersCommand, Route, SourceResolution, TableSource, ToggleStatusInput,
    ToggleUserStatusCommand, UserRecord, UsersTableState, VisibleUsers, page_slice, total_pages,
};
use lendboard_states::StateCtx;
use ustr::Ustr;

use self::action_menu::RowAction;
use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::render_user_row;
use super::{empty_state, filter_popover};
use crate::app::MOBILE_BREAKPOINT;

/// Everything a render pass can ask the panel to do, collected first and
/// applied after the table has released its borrows.
#[derive(Default)]
pub(crate) struct TableEvents {
    open_filters: bool,
    view_details: Option<Ustr>,
    toggle: Option<(Ustr, ActionFamily)>,
}

impl TableEvents {
    fn apply(&mut self, record: &UserRecord, action: RowAction) {
        match action {
            RowAction::ViewDetails => self.view_details = Some(Ustr::from(&record.id)),
            RowAction::Toggle(family) => {
                self.toggle = Some((Ustr::from(&record.id), family));
            }
        }
    }
}

/// Renders the users table with its filter popover and pagination footer.
pub fn users_table_panel(state_ctx: &StateCtx, ui: &mut Ui) {
    let (is_idle, is_pending, fetched_stamp) = {
        let Some(source) = state_ctx.cached::<TableSource>() else {
            return;
        };
        let fetched = matches!(source.resolution, SourceResolution::Fetched(_));
        (
            source.is_idle(),
            source.is_idle() || source.is_loading(),
            fetched.then_some(source.resolved_at).flatten(),
        )
    };

    if is_idle {
        // First render since this dataset was invalidated; resolve it.
        // We enqueue only; the app loop flushes end-of-frame.
        state_ctx.enqueue_command::<LoadUsersCommand>();
    }
    if is_pending {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading users...");
        });
        ui.ctx().request_repaint();
        return;
    }

    // Fetched datasets are written back to the cache exactly once.
    if let Some(stamp) = fetched_stamp {
        let persisted = state_ctx.state::<UsersTableState>().persisted_stamp == Some(stamp);
        if !persisted {
            state_ctx.update::<UsersTableState>(|table| table.persisted_stamp = Some(stamp));
            state_ctx.enqueue_command::<PersistFetchedUsersCommand>();
        }
    }

    let (records, constrained, revision) = {
        let Some(visible) = state_ctx.cached::<VisibleUsers>() else {
            return;
        };
        (
            visible.records().to_vec(),
            visible.is_constrained(),
            visible.revision(),
        )
    };
    state_ctx.state_mut::<UsersTableState>().sync_revision(revision);

    let (page, page_size) = {
        let table = state_ctx.state::<UsersTableState>();
        (table.page, table.page_size)
    };
    let total = total_pages(records.len(), page_size);
    let page_rows = page_slice(&records, page, page_size).to_vec();

    let narrow = ui.ctx().screen_rect().width() <= MOBILE_BREAKPOINT;
    let events = if narrow {
        if page_rows.is_empty() {
            empty_state(ui, constrained);
            TableEvents::default()
        } else {
            cards::render_user_cards(ui, &page_rows)
        }
    } else {
        render_table(ui, &page_rows, constrained)
    };

    if events.open_filters {
        let committed = state_ctx.state::<ActiveFilters>().set.clone();
        state_ctx.update::<UsersTableState>(|table| table.open_filters(&committed));
    }
    if let Some(id) = events.view_details {
        open_detail(state_ctx, id);
    }
    if let Some((id, family)) = events.toggle {
        state_ctx.update::<ToggleStatusInput>(|input| {
            input.id = Some(id);
            input.family = Some(family);
        });
        state_ctx.enqueue_command::<ToggleUserStatusCommand>();
    }

    ui.add_space(12.0);
    pagination::pagination_footer(state_ctx, ui, records.len(), total);

    filter_popover(state_ctx, ui);
}

/// Desktop layout: header-driven filters, clickable rows, an inline empty
/// state when nothing survived the pipeline.
fn render_table(ui: &mut Ui, page_rows: &[UserRecord], constrained: bool) -> TableEvents {
    let mut events = TableEvents::default();

    let mut builder = egui_extras::TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }
    builder
        .header(HEADER_HEIGHT, |mut header| {
            events.open_filters = render_table_header(&mut header);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page_rows.len(), |mut table_row| {
                let record = &page_rows[table_row.index()];
                let result = render_user_row(&mut table_row, record);
                if let Some(action) = result.action {
                    events.apply(record, action);
                } else if result.clicked {
                    events.view_details = Some(Ustr::from(&record.id));
                }
            });
        });

    if page_rows.is_empty() {
        empty_state(ui, constrained);
    }
    events
}

fn open_detail(state_ctx: &StateCtx, id: Ustr) {
    state_ctx.update::<DetailState>(|detail| *detail = DetailState::default());
    // Clear the splash mark so returning to the dashboard replays it.
    state_ctx.update::<LayoutState>(|layout| layout.dashboard_entered_at = None);
    state_ctx.update::<Route>(|route| *route = Route::UserDetail(id));
}
