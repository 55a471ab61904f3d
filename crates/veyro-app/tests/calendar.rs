//! End-to-end calendar tests: controller -> service -> embedded SQLite
//! store, with migrations applied on open.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use veyro_app::config::AppConfig;
use veyro_app::controller::CalendarController;
use veyro_app::state::AppState;
use veyro_core::domain::{ContentType, IdeaDraft, IdeaPatch, Platform};
use veyro_core::error::DomainError;
use veyro_core::CalendarService;
use veyro_infra::{Store, StoreConfig};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn draft(title: &str, time: &str, platform: Platform, content_type: ContentType) -> IdeaDraft {
    IdeaDraft {
        title: title.to_string(),
        time: time.to_string(),
        platform,
        content_type,
        ..IdeaDraft::default()
    }
}

async fn open_store() -> Store {
    Store::open(&StoreConfig::new("sqlite::memory:"))
        .await
        .expect("in-memory store opens")
}

async fn controller_with_store() -> (CalendarController, Store) {
    let store = open_store().await;
    let service = CalendarService::new(Arc::new(store.idea_repository()));
    let mut controller = CalendarController::new(service, date(2024, 3, 15));
    controller.refresh().await;
    (controller, store)
}

async fn add_on_selected_day(controller: &mut CalendarController, draft_in: IdeaDraft) {
    controller.open_add_form();
    *controller.add_form_mut().unwrap() = draft_in;
    controller.submit_add().await.unwrap();
}

#[tokio::test]
async fn launch_post_lands_on_the_selected_day_only() {
    let (mut controller, _store) = controller_with_store().await;

    add_on_selected_day(
        &mut controller,
        draft("Launch post", "09:00", Platform::LinkedIn, ContentType::Post),
    )
    .await;

    assert!(controller.add_form().is_none());
    assert_eq!(controller.day_ideas().len(), 1);

    let idea = &controller.day_ideas()[0];
    assert_eq!(idea.title, "Launch post");
    assert_eq!(
        idea.scheduled_at,
        date(2024, 3, 15).and_hms_opt(9, 0, 0).unwrap()
    );
    assert_eq!(idea.platform, Platform::LinkedIn);

    controller.select_date(date(2024, 3, 16)).await;
    assert!(controller.day_ideas().is_empty());
    assert_eq!(controller.selected_day_title(), "Saturday, March 16, 2024");
}

#[tokio::test]
async fn same_day_ideas_share_a_cell_and_sort_by_time() {
    let (mut controller, _store) = controller_with_store().await;

    // Inserted evening-first to prove ordering comes from the schedule.
    add_on_selected_day(
        &mut controller,
        draft("Evening reel", "18:30", Platform::Instagram, ContentType::Reel),
    )
    .await;
    add_on_selected_day(
        &mut controller,
        draft("Morning post", "09:00", Platform::LinkedIn, ContentType::Post),
    )
    .await;

    let titles: Vec<&str> = controller.ideas().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Morning post", "Evening reel"]);

    let cells = controller.month_cells();
    let cell = cells
        .iter()
        .find(|cell| cell.date == Some(date(2024, 3, 15)))
        .unwrap();
    assert_eq!(cell.preview, ["Morning post", "Evening reel"]);
    assert_eq!(cell.overflow, 0);
    assert!(cell.is_selected);
}

#[tokio::test]
async fn a_third_idea_overflows_the_cell_preview() {
    let (mut controller, _store) = controller_with_store().await;

    for (title, time) in [("One", "08:00"), ("Two", "12:00"), ("Three", "19:00")] {
        add_on_selected_day(
            &mut controller,
            draft(title, time, Platform::LinkedIn, ContentType::Post),
        )
        .await;
    }

    let cells = controller.month_cells();
    let cell = cells
        .iter()
        .find(|cell| cell.date == Some(date(2024, 3, 15)))
        .unwrap();
    assert_eq!(cell.preview.len(), 2);
    assert_eq!(cell.overflow, 1);
}

#[tokio::test]
async fn march_2024_grid_has_five_leading_blanks() {
    let (controller, _store) = controller_with_store().await;

    let cells = controller.month_cells();
    // 2024-03-01 is a Friday: Sun..Thu are blank.
    assert_eq!(cells.len(), 5 + 31);
    assert!(cells[..5].iter().all(|cell| cell.date.is_none()));
    assert_eq!(cells[5].date, Some(date(2024, 3, 1)));
    assert_eq!(cells[5].day(), Some(1));
    assert!(cells
        .iter()
        .find(|cell| cell.date == Some(date(2024, 3, 15)))
        .unwrap()
        .is_today);
}

#[tokio::test]
async fn editing_the_time_keeps_the_calendar_date() {
    let (mut controller, _store) = controller_with_store().await;

    add_on_selected_day(
        &mut controller,
        draft("Launch post", "09:00", Platform::LinkedIn, ContentType::Post),
    )
    .await;
    let id = controller.day_ideas()[0].id;

    assert!(controller.begin_edit(id));
    assert_eq!(controller.editing().unwrap().draft.time, "09:00");

    controller.editing_mut().unwrap().draft.time = "14:00".to_string();
    controller.save_edit().await.unwrap();

    assert!(controller.editing().is_none());
    let idea = &controller.day_ideas()[0];
    assert_eq!(idea.scheduled_at.date(), date(2024, 3, 15));
    assert_eq!(
        idea.scheduled_at.time(),
        chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn switching_edits_discards_the_unsaved_draft() {
    let (mut controller, _store) = controller_with_store().await;

    add_on_selected_day(
        &mut controller,
        draft("First", "09:00", Platform::LinkedIn, ContentType::Post),
    )
    .await;
    add_on_selected_day(
        &mut controller,
        draft("Second", "11:00", Platform::Instagram, ContentType::Story),
    )
    .await;

    let first_id = controller.day_ideas()[0].id;
    let second_id = controller.day_ideas()[1].id;

    assert!(controller.begin_edit(first_id));
    controller.editing_mut().unwrap().draft.title = "First, reworded".to_string();

    // Entering the second idea's edit replaces the slot outright.
    assert!(controller.begin_edit(second_id));
    assert_eq!(controller.editing().unwrap().id, second_id);

    controller.cancel_edit();
    controller.refresh().await;
    let titles: Vec<&str> = controller
        .day_ideas()
        .iter()
        .map(|idea| idea.title.as_str())
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[tokio::test]
async fn failed_submission_keeps_the_form_open_with_its_data() {
    let (mut controller, _store) = controller_with_store().await;

    controller.open_add_form();
    let form = controller.add_form_mut().unwrap();
    form.description = "details worth keeping".to_string();

    let err = controller.submit_add().await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let form = controller.add_form().unwrap();
    assert_eq!(form.description, "details worth keeping");
    assert!(controller.day_ideas().is_empty());
}

#[tokio::test]
async fn deleting_twice_is_a_quiet_success() {
    let (mut controller, _store) = controller_with_store().await;

    add_on_selected_day(
        &mut controller,
        draft("Short lived", "09:00", Platform::TikTok, ContentType::Video),
    )
    .await;
    let id = controller.day_ideas()[0].id;

    controller.delete_idea(id).await.unwrap();
    controller.delete_idea(id).await.unwrap();
    assert!(controller.day_ideas().is_empty());
}

#[tokio::test]
async fn month_navigation_wraps_year_boundaries() {
    let store = open_store().await;
    let service = CalendarService::new(Arc::new(store.idea_repository()));
    let mut controller = CalendarController::new(service, date(2024, 12, 20));

    controller.next_month();
    assert_eq!(controller.visible_month(), date(2025, 1, 1));
    assert_eq!(controller.month_title(), "January 2025");

    controller.prev_month();
    controller.prev_month();
    assert_eq!(controller.visible_month(), date(2024, 11, 1));

    // Navigation never moves the selection.
    assert_eq!(controller.selected_date(), date(2024, 12, 20));
}

#[tokio::test]
async fn title_patch_leaves_every_other_field_alone() {
    let store = open_store().await;
    let repo = store.idea_repository();
    let service = CalendarService::new(Arc::new(store.idea_repository()));

    let created = service
        .create_idea(
            draft("Launch post", "09:00", Platform::YouTube, ContentType::Live),
            date(2024, 3, 15),
        )
        .await
        .unwrap();

    use veyro_core::ports::IdeaRepository;
    repo.update(
        created.id,
        IdeaPatch {
            title: Some("Launch day".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let all = service.all_ideas().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Launch day");
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].created_at, created.created_at);
    assert_eq!(all[0].scheduled_at, created.scheduled_at);
    assert_eq!(all[0].platform, Platform::YouTube);
    assert_eq!(all[0].content_type, ContentType::Live);
}

#[tokio::test]
async fn updating_a_missing_id_reports_not_found() {
    let store = open_store().await;
    let service = CalendarService::new(Arc::new(store.idea_repository()));
    let id = Uuid::new_v4();

    let err = service
        .revise_idea(
            id,
            draft("Ghost", "10:00", Platform::Facebook, ContentType::Post),
            date(2024, 3, 15),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { id: missing } if missing == id));
    assert!(service.all_ideas().await.unwrap().is_empty());
}

#[tokio::test]
async fn app_state_round_trips_the_user_email() {
    let config = AppConfig {
        database_url: Some("sqlite::memory:".to_string()),
        database_max_connections: None,
    };
    let state = AppState::new(&config).await;

    assert_eq!(state.user_email().await, None);
    state.save_user_email("founder@veyro.app").await.unwrap();
    state.save_user_email("team@veyro.app").await.unwrap();
    assert_eq!(state.user_email().await.as_deref(), Some("team@veyro.app"));

    state.shutdown().await;
}

#[tokio::test]
async fn app_state_without_a_database_runs_in_memory() {
    let state = AppState::new(&AppConfig::default()).await;

    state.save_user_email("offline@veyro.app").await.unwrap();
    assert_eq!(
        state.user_email().await.as_deref(),
        Some("offline@veyro.app")
    );

    let created = state
        .service
        .create_idea(
            draft("Memory only", "09:00", Platform::LinkedIn, ContentType::Post),
            date(2024, 3, 15),
        )
        .await
        .unwrap();
    assert_eq!(state.service.all_ideas().await.unwrap(), vec![created]);

    state.shutdown().await;
}
