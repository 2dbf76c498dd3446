use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use racket_rental::models::{Booking, Racket};
use racket_rental::routes::create_app_router;
use racket_rental::state::AppState;
use racket_rental::storage::{SheetStore, BOOKING_SHEET, RACKET_SHEET};

// Función helper para crear la app de test con su workbook temporal
async fn create_test_app() -> (Router, SheetStore) {
    let dir = std::env::temp_dir().join(format!("racket_rental_api_{}", rand::random::<u64>()));
    let store = SheetStore::new(dir).unwrap();

    store
        .overwrite(
            RACKET_SHEET,
            &[
                Racket {
                    id: "1".to_string(),
                    racket_type: "Nox AT10".to_string(),
                },
                Racket {
                    id: "2".to_string(),
                    racket_type: "Bullpadel Vertex".to_string(),
                },
            ],
        )
        .await
        .unwrap();

    let config = racket_rental::config::environment::EnvironmentConfig {
        environment: "development".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: "unused".to_string(),
        cors_origins: vec![],
    };
    let state = AppState::new(store.clone(), config);
    (create_app_router().with_state(state), store)
}

fn order_form_text(racket_type: &str, dropoff_time: &str, pickup_time: &str) -> String {
    format!(
        "📝 Form Order\n\n\
         Nama: Budi Santoso\n\
         No WA: +628123456789\n\
         Jenis raket: {}\n\n\
         Drop off\n\
         📍 Venue: GOR Senayan\n\
         📅 Tanggal: 2030-05-01\n\
         ⏰ Jam: {}\n\n\
         Pick up\n\
         📍 Venue: GOR Cilandak\n\
         📅 Tanggal: 2030-05-01\n\
         ⏰ Jam: {}\n\n\
         PIC Andi",
        racket_type, dropoff_time, pickup_time
    )
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (app, _store) = create_test_app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "racket-rental");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_rackets() {
    let (app, _store) = create_test_app().await;
    let (status, body) = get(&app, "/api/racket").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["type"], "Nox AT10");
}

#[tokio::test]
async fn test_order_to_booking_flow() {
    let (app, store) = create_test_app().await;

    // 1. enviar el formulario: parseo + validación
    let (status, body) = post(
        &app,
        "/api/order",
        &json!({ "text": order_form_text("nox at10", "10:00", "12:00") }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["reason"], "Valid");
    assert_eq!(body["order"]["name"], "Budi Santoso");
    let order_id = body["order"]["id"].as_str().unwrap().to_string();
    assert_eq!(order_id.len(), 6);

    // 2. disponibilidad: libre, sin vecinas
    let (status, body) = get(&app, &format!("/api/booking/availability/{}", order_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);
    assert_eq!(body["racket_id"], "1");
    assert!(body["previous_booking"].is_null());
    assert!(body["next_booking"].is_null());

    // 3. reservar: agrega exactamente una fila a la hoja booking
    let (status, body) = post(&app, "/api/booking", &json!({ "order_id": order_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["racket_id"], "1");
    assert_eq!(body["data"]["start_datetime"], "2030-05-01 10:00:00");
    assert_eq!(body["data"]["end_datetime"], "2030-05-01 12:00:00");

    let bookings: Vec<Booking> = store.read_all(BOOKING_SHEET).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].order_id, order_id);

    // 4. reservar de nuevo: aviso de duplicado, sin fila nueva
    let (status, body) = post(&app, "/api/booking", &json!({ "order_id": order_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Already booked this order");

    let bookings: Vec<Booking> = store.read_all(BOOKING_SHEET).await.unwrap();
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_invalid_order_is_not_persisted() {
    let (app, _store) = create_test_app().await;

    // sin "No WA": falla la completitud
    let text = "Nama: Budi\nJenis raket: Nox AT10\nVenue: A\nTanggal: 2030-05-01\nJam: 10:00\n\
                Venue: B\nTanggal: 2030-05-01\nJam: 12:00\nPIC Andi";
    let (status, body) = post(&app, "/api/order", &json!({ "text": text })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "Incomplete data");
    // los campos parseados vuelven igual
    assert_eq!(body["order"]["name"], "Budi");

    let order_id = body["order"]["id"].as_str().unwrap();
    let (status, _body) = get(&app, &format!("/api/order/{}", order_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_racket_type_is_rejected() {
    let (app, _store) = create_test_app().await;

    let (status, body) = post(
        &app,
        "/api/order",
        &json!({ "text": order_form_text("Siux Diablo", "10:00", "12:00") }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["reason"],
        "Racket type 'Siux Diablo' is not in the racket list"
    );
}

#[tokio::test]
async fn test_conflicting_booking_blocks_slot() {
    let (app, store) = create_test_app().await;

    // reserva existente [10:00, 12:00) de la raqueta 1
    let day = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
    store
        .append(
            BOOKING_SHEET,
            &[Booking {
                id: "9Z8Y7X".to_string(),
                created_at: day.and_hms_opt(8, 0, 0).unwrap(),
                order_id: "9Z8Y7X".to_string(),
                racket_id: "1".to_string(),
                start_datetime: day.and_hms_opt(10, 0, 0).unwrap(),
                end_datetime: day.and_hms_opt(12, 0, 0).unwrap(),
                dropoff_venue: "GOR Senayan".to_string(),
                pickup_venue: "GOR Cilandak".to_string(),
            }],
        )
        .await
        .unwrap();

    // pedido [11:00, 13:00): solapa
    let (_, body) = post(
        &app,
        "/api/order",
        &json!({ "text": order_form_text("Nox AT10", "11:00", "13:00") }),
    )
    .await;
    assert_eq!(body["valid"], true);
    let order_id = body["order"]["id"].as_str().unwrap().to_string();

    let (status, body) = get(&app, &format!("/api/booking/availability/{}", order_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    // el id se devuelve igual, y la reserva solapada aparece como vecina anterior
    assert_eq!(body["racket_id"], "1");
    assert_eq!(
        body["previous_booking"]["start_datetime"],
        "2030-05-01 10:00:00"
    );

    let (status, body) = post(&app, "/api/booking", &json!({ "order_id": order_id })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "SLOT_UNAVAILABLE");

    // borde semiabierto [12:00, 14:00): libre
    let (_, body) = post(
        &app,
        "/api/order",
        &json!({ "text": order_form_text("Nox AT10", "12:00", "14:00") }),
    )
    .await;
    let order_id = body["order"]["id"].as_str().unwrap().to_string();
    let (_, body) = get(&app, &format!("/api/booking/availability/{}", order_id)).await;
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn test_time_slots_grid() {
    let (app, store) = create_test_app().await;

    let day = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
    store
        .append(
            BOOKING_SHEET,
            &[Booking {
                id: "9Z8Y7X".to_string(),
                created_at: day.and_hms_opt(8, 0, 0).unwrap(),
                order_id: "9Z8Y7X".to_string(),
                racket_id: "1".to_string(),
                start_datetime: day.and_hms_opt(10, 0, 0).unwrap(),
                end_datetime: day.and_hms_opt(12, 0, 0).unwrap(),
                dropoff_venue: "GOR Senayan".to_string(),
                pickup_venue: "GOR Cilandak".to_string(),
            }],
        )
        .await
        .unwrap();

    let (status, body) = get(
        &app,
        "/api/booking/timeslots?date=2030-05-01&racket_type=nox%20at10",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[10]["available"], false);
    assert_eq!(slots[11]["available"], false);
    assert_eq!(slots[12]["available"], true);
    assert_eq!(slots[23]["start"], "23:00");
    assert_eq!(slots[23]["end"], "24:00");

    // tipo desconocido: error distinto de "ocupada"
    let (status, body) = get(
        &app,
        "/api/booking/timeslots?date=2030-05-01&racket_type=desconocida",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_RACKET");
}

#[tokio::test]
async fn test_availability_for_missing_order() {
    let (app, _store) = create_test_app().await;
    let (status, body) = get(&app, "/api/booking/availability/2A3B4C").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
