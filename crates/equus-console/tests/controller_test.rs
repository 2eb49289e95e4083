//! Paginated controller behaviour against in-memory resources

mod common;

use std::sync::Arc;

use common::{GatedClient, Horse, MemoryClient, herd, herd_page, horse, name_filter};
use equus_client::error::REQUEST_FAILED_MESSAGE;
use equus_client::{ClientError, TravelFilters, TravelStatus};
use equus_console::{
    ConsoleError, ControllerConfig, EmptyPagePolicy, PaginatedController, ResponseOrdering,
};

fn controller(records: Vec<Horse>) -> PaginatedController<MemoryClient> {
    PaginatedController::new(
        MemoryClient::new(records),
        name_filter(),
        ControllerConfig::default(),
    )
}

fn ids(content: &[Horse]) -> Vec<i64> {
    content.iter().map(|h| h.id).collect()
}

// ============== Navigation ==============

#[tokio::test]
async fn test_go_to_last_page() {
    let ctrl = controller(herd(25));
    ctrl.load().await.unwrap();
    assert_eq!(ctrl.total_pages(), 3);

    ctrl.go_to_page(2).await.unwrap();

    let state = ctrl.snapshot();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.start_item(), 21);
    assert_eq!(state.end_item(), 25);
    assert_eq!(ids(&state.content), vec![21, 22, 23, 24, 25]);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_load_sends_snapshot_of_page_size_and_sort() {
    let ctrl = controller(herd(3));
    ctrl.load().await.unwrap();

    let query = ctrl.client().last_query().unwrap();
    assert_eq!(query.page, 0);
    assert_eq!(query.size, 10);
    assert_eq!(query.sort.as_deref(), Some("id"));
    assert!(query.filters.is_empty());
}

#[tokio::test]
async fn test_out_of_range_navigation_is_ignored() {
    let ctrl = controller(herd(25));
    ctrl.load().await.unwrap();
    let calls = ctrl.client().list_calls();

    let err = ctrl.go_to_page(3).await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::OutOfRange {
            page: 3,
            total_pages: 3
        }
    ));
    assert_eq!(ctrl.current_page(), 0);
    assert_eq!(ctrl.client().list_calls(), calls);
    assert_eq!(ctrl.error(), None);

    let err = ctrl.previous_page().await.unwrap_err();
    assert!(matches!(err, ConsoleError::NoPreviousPage));
    assert!(err.is_out_of_range());
    assert_eq!(ctrl.client().list_calls(), calls);
}

#[tokio::test]
async fn test_navigation_before_first_load_is_ignored() {
    let ctrl = controller(herd(25));
    assert!(ctrl.go_to_page(0).await.unwrap_err().is_out_of_range());
    assert_eq!(ctrl.client().list_calls(), 0);
}

#[tokio::test]
async fn test_next_and_previous_page() {
    let ctrl = controller(herd(25));
    ctrl.load().await.unwrap();

    ctrl.next_page().await.unwrap();
    ctrl.next_page().await.unwrap();
    assert_eq!(ctrl.current_page(), 2);
    assert!(ctrl.next_page().await.is_err());

    ctrl.previous_page().await.unwrap();
    assert_eq!(ctrl.current_page(), 1);
    assert_eq!(ids(&ctrl.snapshot().content)[0], 11);
}

#[tokio::test]
async fn test_empty_collection() {
    let ctrl = controller(Vec::new());
    ctrl.load().await.unwrap();

    let state = ctrl.snapshot();
    assert_eq!(state.total_pages, 0);
    assert_eq!(state.current_page, 0);
    assert_eq!(state.start_item(), 0);
    assert_eq!(state.end_item(), 0);
    assert_eq!(state.range_label(), "Mostrando 0 - 0 de 0");
}

// ============== Page size ==============

#[tokio::test]
async fn test_page_size_change_resets_to_first_page() {
    let ctrl = controller(herd(60));
    ctrl.load().await.unwrap();
    ctrl.go_to_page(2).await.unwrap();

    ctrl.set_page_size(25).await.unwrap();

    let query = ctrl.client().last_query().unwrap();
    assert_eq!((query.page, query.size), (0, 25));
    let state = ctrl.snapshot();
    assert_eq!(state.current_page, 0);
    assert_eq!(state.page_size, 25);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.content.len(), 25);
}

#[tokio::test]
async fn test_disallowed_page_size_is_rejected() {
    let ctrl = controller(herd(60));
    ctrl.load().await.unwrap();
    let calls = ctrl.client().list_calls();

    let err = ctrl.set_page_size(7).await.unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidPageSize(7)));
    assert_eq!(ctrl.page_size(), 10);
    assert_eq!(ctrl.client().list_calls(), calls);
}

#[tokio::test]
async fn test_disallowed_initial_page_size_falls_back_to_default() {
    for size in [0, 7] {
        let ctrl = PaginatedController::new(
            MemoryClient::new(herd(30)),
            name_filter(),
            ControllerConfig::default().with_page_size(size),
        );
        assert_eq!(ctrl.page_size(), 10);
        assert_eq!(ctrl.config().page_size, 10);

        ctrl.load().await.unwrap();
        assert_eq!(ctrl.client().last_query().unwrap().size, 10);
        assert_eq!(ctrl.total_pages(), 3);
    }
}

// ============== Search ==============

#[tokio::test]
async fn test_search_narrows_loaded_page_only() {
    let ctrl = controller(vec![horse(1, "Thunder"), horse(2, "Star")]);
    ctrl.load().await.unwrap();
    let calls = ctrl.client().list_calls();

    ctrl.set_search_term("thun");

    let state = ctrl.snapshot();
    assert_eq!(state.filtered_content, vec![horse(1, "Thunder")]);
    assert_eq!(state.content.len(), 2);
    assert_eq!(state.search_term, "thun");
    assert_eq!(ctrl.client().list_calls(), calls);

    ctrl.set_search_term("  ");
    assert_eq!(ctrl.filtered().len(), 2);
}

#[tokio::test]
async fn test_search_term_survives_page_change() {
    let ctrl = controller(herd(25));
    ctrl.load().await.unwrap();
    ctrl.set_search_term("horse 2");
    assert_eq!(ids(&ctrl.filtered()), vec![2]);

    ctrl.go_to_page(2).await.unwrap();

    assert_eq!(ctrl.snapshot().search_term, "horse 2");
    assert_eq!(ids(&ctrl.filtered()), vec![21, 22, 23, 24, 25]);
}

// ============== Failures ==============

#[tokio::test]
async fn test_failed_load_keeps_previous_content() {
    let ctrl = controller(herd(25));
    ctrl.load().await.unwrap();
    let before = ctrl.snapshot().content;

    ctrl.client().fail_next(ClientError::Request {
        message: "Credenciales inválidas".to_string(),
        kind: Some("AUTH".to_string()),
        code: None,
    });
    let err = ctrl.go_to_page(1).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Client(_)));

    let state = ctrl.snapshot();
    assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
    assert_eq!(state.content, before);
    assert!(!state.loading);

    ctrl.load().await.unwrap();
    assert_eq!(ctrl.error(), None);
    assert_eq!(ids(&ctrl.snapshot().content)[0], 11);
}

#[tokio::test]
async fn test_failure_messages_by_kind() {
    let ctrl = controller(herd(5));

    ctrl.client().fail_next(ClientError::SessionExpired);
    assert!(ctrl.load().await.is_err());
    assert_eq!(
        ctrl.error().as_deref(),
        Some("Sesión expirada. Por favor, inicia sesión nuevamente.")
    );

    let decode = serde_json::from_str::<u32>("<html>").unwrap_err();
    ctrl.client().fail_next(ClientError::Decode(decode));
    assert!(ctrl.load().await.is_err());
    assert_eq!(
        ctrl.error().as_deref(),
        Some("No se pudo conectar con el servidor. Intenta más tarde.")
    );

    ctrl.client()
        .fail_next(ClientError::request(None, REQUEST_FAILED_MESSAGE));
    assert!(ctrl.load().await.is_err());
    assert_eq!(ctrl.error().as_deref(), Some("Error al cargar la lista"));
}

// ============== Mutations ==============

#[tokio::test]
async fn test_create_reloads_current_page() {
    let ctrl = controller(herd(15));
    ctrl.load().await.unwrap();
    ctrl.go_to_page(1).await.unwrap();
    let calls = ctrl.client().list_calls();

    let created = ctrl.create(&"Tormenta".to_string()).await.unwrap();
    assert_eq!(created.id, 16);

    assert_eq!(ctrl.client().list_calls(), calls + 1);
    assert_eq!(ctrl.client().last_query().unwrap().page, 1);
    let state = ctrl.snapshot();
    assert_eq!(state.total_elements, 16);
    assert_eq!(state.content.last().unwrap().name, "Tormenta");
}

#[tokio::test]
async fn test_update_reloads_current_page() {
    let ctrl = controller(herd(3));
    ctrl.load().await.unwrap();

    let updated = ctrl.update(2, &"Relámpago".to_string()).await.unwrap();
    assert_eq!(updated.name, "Relámpago");
    assert_eq!(ctrl.snapshot().content[1].name, "Relámpago");
}

#[tokio::test]
async fn test_failed_mutation_keeps_state_and_reports_inline() {
    let ctrl = controller(herd(3));
    ctrl.load().await.unwrap();
    let calls = ctrl.client().list_calls();

    ctrl.client()
        .fail_next(ClientError::request(None, REQUEST_FAILED_MESSAGE));
    let err = ctrl.create(&"Tormenta".to_string()).await.unwrap_err();

    assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);
    assert_eq!(ctrl.error().as_deref(), Some("Error al crear el registro"));
    assert_eq!(ctrl.client().list_calls(), calls);
    assert_eq!(ctrl.snapshot().content.len(), 3);
}

#[tokio::test]
async fn test_remove_last_record_keeps_empty_page() {
    let ctrl = controller(herd(21));
    ctrl.load().await.unwrap();
    ctrl.go_to_page(2).await.unwrap();
    assert_eq!(ids(&ctrl.snapshot().content), vec![21]);

    assert!(ctrl.remove(21).await.unwrap());

    let query = ctrl.client().last_query().unwrap();
    assert_eq!(query.page, 2);
    let state = ctrl.snapshot();
    assert!(state.content.is_empty());
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.total_elements, 20);
    assert_eq!(state.current_page, 2);
    assert_eq!(state.start_item(), 0);
    assert_eq!(state.end_item(), 0);
    assert_eq!(state.range_label(), "Mostrando 0 - 0 de 20");
    assert!(state.has_previous());
    assert!(!state.has_next());
    assert_eq!(ctrl.client().list_calls(), 3);

    ctrl.previous_page().await.unwrap();
    let state = ctrl.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.range_label(), "Mostrando 11 - 20 de 20");
    assert_eq!(ids(&state.content), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_remove_last_record_steps_back_when_configured() {
    let ctrl = PaginatedController::new(
        MemoryClient::new(herd(21)),
        name_filter(),
        ControllerConfig::default().with_empty_page_policy(EmptyPagePolicy::StepBack),
    );
    ctrl.load().await.unwrap();
    ctrl.go_to_page(2).await.unwrap();

    ctrl.remove(21).await.unwrap();

    let pages: Vec<u32> = ctrl.client().queries().iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![0, 2, 2, 1]);
    let state = ctrl.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(ids(&state.content), (11..=20).collect::<Vec<_>>());
    assert_eq!(state.range_label(), "Mostrando 11 - 20 de 20");
}

#[tokio::test]
async fn test_get_does_not_touch_list_state() {
    let ctrl = controller(herd(3));
    ctrl.load().await.unwrap();
    let calls = ctrl.client().list_calls();

    assert_eq!(ctrl.get(2).await.unwrap().name, "Horse 2");
    assert!(ctrl.get(99).await.is_err());
    assert_eq!(ctrl.client().list_calls(), calls);
    assert_eq!(ctrl.error(), None);
}

// ============== Filters ==============

#[tokio::test]
async fn test_filters_forwarded_and_reset_page() {
    let ctrl = controller(herd(30))
        .with_filters(&TravelFilters {
            status: Some(TravelStatus::Pending),
            ..Default::default()
        })
        .unwrap();
    ctrl.load().await.unwrap();
    ctrl.go_to_page(2).await.unwrap();
    assert_eq!(
        ctrl.client().last_query().unwrap().filters,
        vec![("status".to_string(), "PENDING".to_string())]
    );

    ctrl.set_filters(&TravelFilters {
        date_from: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        date_to: chrono::NaiveDate::from_ymd_opt(2024, 3, 31),
        ..Default::default()
    })
    .await
    .unwrap();

    let query = ctrl.client().last_query().unwrap();
    assert_eq!(query.page, 0);
    assert_eq!(
        query.filters,
        vec![
            ("dateFrom".to_string(), "2024-03-01".to_string()),
            ("dateTo".to_string(), "2024-03-31".to_string()),
        ]
    );
    assert_eq!(ctrl.current_page(), 0);
}

// ============== Response ordering ==============

async fn overlapping_loads(ordering: ResponseOrdering) -> (u32, Vec<i64>) {
    let (client, mut requests) = GatedClient::new();
    let ctrl = Arc::new(PaginatedController::new(
        client,
        name_filter(),
        ControllerConfig::default().with_ordering(ordering),
    ));

    let first = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.load().await }
    });
    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Ok(herd_page(0, 10, 30))).unwrap();
    first.await.unwrap().unwrap();

    let to_one = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.go_to_page(1).await }
    });
    let (query_one, reply_one) = requests.recv().await.unwrap();
    assert_eq!(query_one.page, 1);

    let to_two = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.go_to_page(2).await }
    });
    let (query_two, reply_two) = requests.recv().await.unwrap();
    assert_eq!(query_two.page, 2);
    assert!(ctrl.is_loading());

    reply_two.send(Ok(herd_page(2, 10, 30))).unwrap();
    to_two.await.unwrap().unwrap();
    assert!(ctrl.is_loading());

    reply_one.send(Ok(herd_page(1, 10, 30))).unwrap();
    to_one.await.unwrap().unwrap();
    assert!(!ctrl.is_loading());

    let state = ctrl.snapshot();
    (state.current_page, ids(&state.content))
}

#[tokio::test]
async fn test_slowest_response_wins_by_default() {
    let (current_page, content) = overlapping_loads(ResponseOrdering::LastToResolve).await;

    // page index says 2 while page 1's rows are on screen
    assert_eq!(current_page, 2);
    assert_eq!(content, (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_latest_request_wins_when_guarded() {
    let (current_page, content) = overlapping_loads(ResponseOrdering::LatestRequest).await;

    assert_eq!(current_page, 2);
    assert_eq!(content, (21..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_stale_failure_is_discarded_when_guarded() {
    let (client, mut requests) = GatedClient::new();
    let ctrl = Arc::new(PaginatedController::new(
        client,
        name_filter(),
        ControllerConfig::default().with_ordering(ResponseOrdering::LatestRequest),
    ));

    let stale = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.load().await }
    });
    let (_, stale_reply) = requests.recv().await.unwrap();

    let fresh = tokio::spawn({
        let ctrl = ctrl.clone();
        async move { ctrl.load().await }
    });
    let (_, fresh_reply) = requests.recv().await.unwrap();

    fresh_reply.send(Ok(herd_page(0, 10, 4))).unwrap();
    fresh.await.unwrap().unwrap();
    stale_reply
        .send(Err(ClientError::SessionExpired))
        .unwrap();
    stale.await.unwrap().unwrap();

    let state = ctrl.snapshot();
    assert_eq!(state.error, None);
    assert_eq!(state.content.len(), 4);
}
