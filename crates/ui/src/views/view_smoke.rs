use std::sync::Arc;
use std::time::Duration;

use storage::repository::{InMemoryStore, KeyValueStore, Storage};

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_storage, visible_rows,
};

// Eight rows at 100 ms apart, plus slack for the scheduler.
const FULL_REVEAL: Duration = Duration::from_millis(1_100);

fn seeded_storage(key: &str, value: &str) -> Storage {
    let store = InMemoryStore::new();
    store.insert_raw(key, value);
    Storage { kv: Arc::new(store) }
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_collapsed_cards() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Educational courses"), "missing intro in {html}");
    assert!(html.contains("Арт-терапия"), "missing course title in {html}");
    assert!(html.contains("Show course program"), "missing toggle in {html}");
    assert!(!html.contains("Course program<"), "details rendered while collapsed: {html}");
    assert!(!html.contains("back-to-top hidden"), "back-to-top hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn section_hides_back_to_top_while_menu_is_open() {
    let mut harness = setup_view_harness(ViewKind::Section { menu_open: true });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("back-to-top hidden"), "missing hidden class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_to_top_smoke_is_visible_with_menu_closed() {
    let mut harness = setup_view_harness(ViewKind::BackToTop { menu_open: false });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("back-to-top"), "missing link in {html}");
    assert!(!html.contains("back-to-top hidden"), "unexpected hidden class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn expanded_details_render_empty_progress() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 1,
        expanded: true,
    });
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Course program"), "missing title in {html}");
    assert!(html.contains("0 of 8 (0%)"), "missing stats in {html}");
    assert!(html.contains("Изотерапия"), "missing module row in {html}");
    assert!(!html.contains("Reset progress"), "reset shown without progress: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn expanded_details_restore_saved_progress() {
    let storage = seeded_storage("course_1_progress", "[1,2]");
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Details {
            course_id: 1,
            expanded: true,
        },
        storage,
    );
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("2 of 8 (25%)"), "missing stats in {html}");
    assert!(html.contains("width: 25%;"), "missing bar width in {html}");
    assert!(html.contains("module-checkbox completed"), "missing checked row in {html}");
    assert!(html.contains("Reset progress"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn corrupt_saved_progress_renders_as_empty() {
    let storage = seeded_storage("course_2_progress", "{not json");
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Details {
            course_id: 2,
            expanded: true,
        },
        storage,
    );
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("0 of 8 (0%)"), "missing stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collapsed_details_render_no_program() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 1,
        expanded: false,
    });
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("expanded-details collapsed"), "missing container in {html}");
    assert!(!html.contains("Course program"), "program rendered while collapsed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_course_details_render_inline_error() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 99,
        expanded: true,
    });
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("This course is no longer available."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn expanded_details_reveal_every_module_row_in_turn() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 1,
        expanded: true,
    });
    harness.rebuild();
    harness.settle().await;
    assert!(
        visible_rows(&harness.render()) < 8,
        "rows should not all appear at once"
    );

    harness.settle_for(FULL_REVEAL).await;
    let html = harness.render();
    assert_eq!(visible_rows(&html), 8, "not every row revealed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collapsing_hides_rows_and_restarts_the_stagger() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 1,
        expanded: true,
    });
    harness.rebuild();
    harness.settle_for(FULL_REVEAL).await;
    assert_eq!(visible_rows(&harness.render()), 8);

    harness.set_expanded(false);
    let html = harness.render();
    assert!(html.contains("expanded-details collapsed"), "still expanded: {html}");
    assert_eq!(visible_rows(&html), 0);

    harness.set_expanded(true);
    let html = harness.render();
    assert!(
        visible_rows(&html) <= 1,
        "rows kept from the previous reveal in {html}"
    );

    harness.settle_for(FULL_REVEAL).await;
    assert_eq!(visible_rows(&harness.render()), 8);
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_a_card_expands_exactly_one_course() {
    let mut harness = setup_view_harness(ViewKind::Section { menu_open: false });
    harness.rebuild();
    assert_eq!(harness.render().matches("Hide course details").count(), 0);

    harness.select_course(2);
    harness.settle().await;
    let html = harness.render();
    assert_eq!(
        html.matches("Hide course details").count(),
        1,
        "expected one expanded card in {html}"
    );
    assert!(html.contains("expanded-details expanded"), "details closed in {html}");

    // The fixed clock keeps the second click inside the cooldown window.
    harness.select_course(3);
    let html = harness.render();
    assert_eq!(html.matches("Hide course details").count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_a_module_writes_through_to_storage() {
    let mut harness = setup_view_harness(ViewKind::Details {
        course_id: 1,
        expanded: true,
    });
    harness.rebuild();
    harness.settle().await;

    harness.toggle_module(3);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("1 of 8 (13%)"), "missing stats in {html}");

    let stored = harness.storage.kv.get("course_1_progress").await.unwrap();
    assert_eq!(stored.as_deref(), Some("[3]"));
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_lists_course_skills() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("skill-tag"), "missing skills in {html}");
    assert!(html.contains("Песочная терапия"), "missing skill in {html}");
}
