use std::sync::Arc;

use artwalk_core::repository::{BookingRepository, CapacityOutcome};
use artwalk_core::{BookingRules, BookingService, CoreError, SignupRequest};
use artwalk_shared::Masked;
use artwalk_store::InMemoryBookingRepository;
use tokio::task::JoinSet;

fn signup(selected_date: &str, quantity: i64) -> SignupRequest {
    SignupRequest {
        selected_date: Some(selected_date.to_string()),
        ticket_quantity: Some(quantity),
        full_name: Some("Guest".to_string()),
        email: Some(Masked::new("guest@example.com".to_string())),
        ..SignupRequest::default()
    }
}

fn service() -> (BookingService, Arc<InMemoryBookingRepository>) {
    let repo = Arc::new(InMemoryBookingRepository::new());
    (BookingService::new(repo.clone(), BookingRules::default()), repo)
}

async fn fill(service: &BookingService, selected_date: &str, tickets: i64) {
    let mut left = tickets;
    while left > 0 {
        let quantity = left.min(2);
        service.sign_up(signup(selected_date, quantity)).await.unwrap();
        left -= quantity;
    }
}

#[tokio::test]
async fn fresh_tour_is_fully_available() {
    let (service, _) = service();
    let a = service.availability(Some("walk-1")).await.unwrap();
    assert_eq!(a.total_sold, 0);
    assert_eq!(a.available, 10);
    assert!(!a.is_sold_out);
}

#[tokio::test]
async fn missing_and_unknown_tour_ids_are_rejected() {
    let (service, _) = service();

    let err = service.availability(None).await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(ref m) if m == "Tour ID is required"));

    let err = service.availability(Some("walk-9")).await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationError(ref m) if m == "Unknown tour: walk-9"));
}

#[tokio::test]
async fn sold_out_tour_rejects_further_signups() {
    let (service, _) = service();
    fill(&service, "Pilot walk #1 - Saturday", 10).await;

    let a = service.availability(Some("walk-1")).await.unwrap();
    assert_eq!(a.available, 0);
    assert!(a.is_sold_out);

    let err = service.sign_up(signup("Pilot walk #1 - Saturday", 1)).await.unwrap_err();
    assert_eq!(err.to_string(), "Only 0 ticket(s) available");

    // other tour is untouched
    let b = service.availability(Some("walk-2")).await.unwrap();
    assert_eq!(b.available, 10);
}

#[tokio::test]
async fn two_tickets_do_not_fit_into_one_seat() {
    let (service, _) = service();
    fill(&service, "Pilot walk #2", 9).await;

    let err = service.sign_up(signup("Pilot walk #2", 2)).await.unwrap_err();
    assert!(matches!(err, CoreError::CapacityExceeded { available: 1 }));

    service.sign_up(signup("Pilot walk #2", 1)).await.unwrap();
    assert!(service.availability(Some("walk-2")).await.unwrap().is_sold_out);
}

#[tokio::test]
async fn venue_inquiries_skip_the_capacity_check() {
    let (service, repo) = service();
    for _ in 0..12 {
        service
            .sign_up(signup("Louisiana Museum of Modern Art - regular", 1))
            .await
            .unwrap();
    }
    assert_eq!(repo.list().await.unwrap().len(), 12);
}

#[tokio::test]
async fn capacity_check_can_be_disabled() {
    let repo = Arc::new(InMemoryBookingRepository::new());
    let rules = BookingRules { enforce_capacity: false, ..BookingRules::default() };
    let service = BookingService::new(repo, rules);

    fill(&service, "Pilot walk #1", 12).await;
    let a = service.availability(Some("walk-1")).await.unwrap();
    assert_eq!(a.total_sold, 12);
    assert_eq!(a.available, 0);
}

#[tokio::test]
async fn deleting_a_booking_frees_its_tickets() {
    let (service, _) = service();
    fill(&service, "Pilot walk #1", 10).await;

    let newest = service.list_bookings().await.unwrap().remove(0);
    service.delete_booking(newest.id).await.unwrap();

    let a = service.availability(Some("walk-1")).await.unwrap();
    assert_eq!(a.available, i64::from(newest.ticket_quantity));

    let err = service.delete_booking(newest.id).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn list_is_newest_first() {
    let (service, _) = service();
    let first = service.sign_up(signup("Pilot walk #1", 1)).await.unwrap();
    let second = service.sign_up(signup("Pilot walk #2", 1)).await.unwrap();

    let ids: Vec<_> = service.list_bookings().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn summary_covers_every_tour() {
    let (service, _) = service();
    fill(&service, "Pilot walk #2", 3).await;

    let summary = service.summary().await.unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].tour_id, "walk-1");
    assert_eq!(summary[0].total_sold, 0);
    assert_eq!(summary[1].tour_id, "walk-2");
    assert_eq!(summary[1].total_sold, 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_never_oversell() {
    let (service, _) = service();
    let service = Arc::new(service);

    let mut set = JoinSet::new();
    for _ in 0..25 {
        let service = service.clone();
        set.spawn(async move { service.sign_up(signup("Pilot walk #1 - Saturday", 1)).await });
    }

    let mut accepted = 0;
    let mut rejected = 0;
    while let Some(result) = set.join_next().await {
        match result.unwrap() {
            Ok(_) => accepted += 1,
            Err(CoreError::CapacityExceeded { available: 0 }) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 10);
    assert_eq!(rejected, 15);
    assert_eq!(service.availability(Some("walk-1")).await.unwrap().total_sold, 10);
}

#[tokio::test]
async fn repository_reports_remaining_seats_on_rejection() {
    let repo = InMemoryBookingRepository::new();
    let booking = signup("Pilot walk #1", 2).validate(&BookingRules::default()).unwrap();

    let outcome = repo.insert_within_capacity(&booking, "Pilot walk #1", 1).await.unwrap();
    assert_eq!(outcome, CapacityOutcome::Insufficient { available: 1 });
    assert_eq!(repo.tickets_sold("Pilot walk #1").await.unwrap(), 0);

    let outcome = repo.insert_within_capacity(&booking, "Pilot walk #1", 2).await.unwrap();
    assert_eq!(outcome, CapacityOutcome::Inserted);
    assert_eq!(repo.tickets_sold("Pilot walk #1").await.unwrap(), 2);
}
