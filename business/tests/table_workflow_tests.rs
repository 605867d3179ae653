//! End-to-end tests for the table data pipeline, driven through the public
//! business API the way the UI drives it: seed the cache, resolve, filter,
//! paginate, toggle a status and watch the pipeline settle.

use chrono::Utc;
use lendboard_business::{
    ActionFamily, ActiveFilters, AppConfig, CacheRead, LayoutState, LoadUsersCommand,
    SourceResolution, TableSource, ToggleStatusInput, ToggleUserStatusCommand, UserCache,
    UserStatus, VisibleUsers, page_slice, total_pages,
};
use lendboard_states::{StateCtx, Time};
use ustr::Ustr;

/// Endpoint with no listener behind it; every test here resolves from cache.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/";

fn setup_ctx() -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(Time::default());
    ctx.add_state(AppConfig::new(DEAD_ENDPOINT.to_owned()));
    ctx.add_state(LayoutState::default());
    ctx.add_state(ActiveFilters::default());
    ctx.add_state(ToggleStatusInput::default());
    ctx.add_state(UserCache::in_memory());
    ctx.record_compute(TableSource::default());
    ctx.record_compute(VisibleUsers::default());
    ctx.record_command(LoadUsersCommand);
    ctx.record_command(ToggleUserStatusCommand);
    ctx
}

/// One frame of the app loop: apply published values, then run what's dirty.
fn settle(ctx: &mut StateCtx) {
    for _ in 0..3 {
        ctx.sync_computes();
        ctx.run_computed();
    }
    ctx.sync_computes();
}

fn seed_users(ctx: &StateCtx, count: usize) {
    let users: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "_id": format!("u-{i:04}"),
                "organization": if i % 2 == 0 { "Lendsqr" } else { "Irorun" },
                "firstName": format!("User{i:02}"),
                "lastName": "Tester",
                "email": format!("user{i:02}@example.com"),
                "phoneNumber": "08000000000",
                "status": if i % 3 == 0 { "Pending" } else { "Active" }
            })
        })
        .collect();
    ctx.state_mut::<UserCache>()
        .write_raw(&serde_json::Value::Array(users).to_string())
        .expect("in-memory cache write cannot fail");
}

#[test]
fn cache_hit_flows_through_to_visible_rows() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 5);

    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);

    let source = ctx.cached::<TableSource>().expect("source registered");
    assert!(matches!(source.resolution, SourceResolution::Cached(_)));
    drop(source);

    let visible = ctx.cached::<VisibleUsers>().expect("compute registered");
    assert_eq!(visible.records().len(), 5);
    assert!(!visible.is_constrained());
}

#[test]
fn search_and_filter_narrow_the_visible_rows() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 10);
    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);

    ctx.update::<LayoutState>(|layout| layout.search_text = "user03".to_owned());
    settle(&mut ctx);
    {
        let visible = ctx.cached::<VisibleUsers>().unwrap();
        assert_eq!(visible.records().len(), 1);
        assert_eq!(visible.records()[0].id, "u-0003");
        assert!(visible.is_constrained());
    }

    // Clearing the search and committing a status filter instead.
    ctx.update::<LayoutState>(|layout| layout.search_text.clear());
    ctx.update::<ActiveFilters>(|filters| filters.set.status = Some(UserStatus::Pending));
    settle(&mut ctx);
    {
        let visible = ctx.cached::<VisibleUsers>().unwrap();
        // Users 3, 6 and 9 were seeded Pending.
        assert_eq!(visible.records().len(), 3);
        assert!(visible.records().iter().all(|r| r.status == UserStatus::Pending));
    }
}

#[test]
fn pagination_reconstructs_the_filtered_set() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 15);
    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);

    let visible = ctx.cached::<VisibleUsers>().unwrap();
    let rows = visible.records();
    let total = total_pages(rows.len(), 10);
    assert_eq!(total, 2);

    let mut rebuilt = Vec::new();
    for page in 1..=total {
        rebuilt.extend_from_slice(page_slice(rows, page, 10));
    }
    assert_eq!(rebuilt, rows);
    assert_eq!(page_slice(rows, 1, 10).len(), 10);
    assert_eq!(page_slice(rows, 2, 10).len(), 5);
}

#[test]
fn status_toggle_republishes_and_bumps_the_revision() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 3);
    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);
    let before = ctx.cached::<VisibleUsers>().unwrap().revision();

    // Advance the virtual clock so the republished resolution gets a fresh
    // stamp, the way the app loop assigns the wall clock every frame.
    ctx.update::<Time>(|time| *time.as_mut() = Utc::now());
    ctx.update::<ToggleStatusInput>(|input| {
        input.id = Some(Ustr::from("u-0001"));
        input.family = Some(ActionFamily::Blacklist);
    });
    ctx.dispatch::<ToggleUserStatusCommand>();
    settle(&mut ctx);

    match ctx.state::<UserCache>().read_users() {
        CacheRead::Records(records) => {
            assert_eq!(records[0].status, UserStatus::Blacklisted);
        }
        other => panic!("expected records in the cache, got {other:?}"),
    }
    let visible = ctx.cached::<VisibleUsers>().unwrap();
    assert_eq!(visible.revision(), before + 1);
    assert_eq!(visible.records()[0].status, UserStatus::Blacklisted);
}

#[test]
fn toggling_blacklist_twice_lands_on_active() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 1);
    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);

    for _ in 0..2 {
        ctx.update::<ToggleStatusInput>(|input| {
            input.id = Some(Ustr::from("u-0001"));
            input.family = Some(ActionFamily::Blacklist);
        });
        ctx.dispatch::<ToggleUserStatusCommand>();
        settle(&mut ctx);
    }

    match ctx.state::<UserCache>().read_users() {
        CacheRead::Records(records) => {
            assert_eq!(records[0].status, UserStatus::Active);
        }
        other => panic!("expected records in the cache, got {other:?}"),
    }
}

#[test]
fn filter_edits_preserve_dataset_order() {
    let mut ctx = setup_ctx();
    seed_users(&ctx, 8);
    ctx.dispatch::<LoadUsersCommand>();
    settle(&mut ctx);

    ctx.update::<ActiveFilters>(|filters| filters.set.organization = "Lendsqr".to_owned());
    settle(&mut ctx);

    let visible = ctx.cached::<VisibleUsers>().unwrap();
    let ids: Vec<&str> = visible.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["u-0002", "u-0004", "u-0006", "u-0008"]);
}
