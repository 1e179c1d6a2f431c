use artwalk_core::availability::remaining;
use artwalk_core::repository::{BookingRepository, CapacityOutcome, RepositoryError};
use artwalk_shared::{Booking, Masked};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    selected_date: String,
    ticket_quantity: i32,
    full_name: String,
    email: String,
    phone: Option<String>,
    note: Option<String>,
    newsletter: bool,
    venue: Option<String>,
    tour_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            selected_date: row.selected_date,
            ticket_quantity: row.ticket_quantity,
            full_name: row.full_name,
            email: Masked::new(row.email),
            phone: row.phone.map(Masked::new),
            note: row.note,
            newsletter: row.newsletter,
            venue: row.venue,
            tour_type: row.tour_type,
            created_at: row.created_at,
        }
    }
}

const SUM_SOLD: &str = "SELECT COALESCE(SUM(ticket_quantity), 0)::BIGINT FROM submissions WHERE starts_with(selected_date, $1)";

fn insert_statement(booking: &Booking) -> Query<'_, Postgres, PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO submissions (id, selected_date, ticket_quantity, full_name, email, phone, note, newsletter, venue, tour_type, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(booking.id)
    .bind(&booking.selected_date)
    .bind(booking.ticket_quantity)
    .bind(&booking.full_name)
    .bind(booking.email.expose())
    .bind(booking.phone.as_ref().map(|p| p.expose()))
    .bind(booking.note.as_deref())
    .bind(booking.newsletter)
    .bind(booking.venue.as_deref())
    .bind(booking.tour_type.as_deref())
    .bind(booking.created_at)
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn tickets_sold(&self, label: &str) -> Result<i64, RepositoryError> {
        let sold: i64 = sqlx::query_scalar(SUM_SOLD)
            .bind(label)
            .fetch_one(&self.pool)
            .await?;
        Ok(sold)
    }

    async fn insert(&self, booking: &Booking) -> Result<(), RepositoryError> {
        insert_statement(booking).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_within_capacity(
        &self,
        booking: &Booking,
        label: &str,
        max_tickets: i64,
    ) -> Result<CapacityOutcome, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Held until commit/rollback; serializes signups for the same tour.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1)::BIGINT)")
            .bind(label)
            .execute(&mut *tx)
            .await?;

        let sold: i64 = sqlx::query_scalar(SUM_SOLD)
            .bind(label)
            .fetch_one(&mut *tx)
            .await?;

        let available = remaining(max_tickets, sold);
        if available < i64::from(booking.ticket_quantity) {
            tx.rollback().await?;
            return Ok(CapacityOutcome::Insufficient { available });
        }

        insert_statement(booking).execute(&mut *tx).await?;
        tx.commit().await?;

        Ok(CapacityOutcome::Inserted)
    }

    async fn list(&self) -> Result<Vec<Booking>, RepositoryError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            "SELECT id, selected_date, ticket_quantity, full_name, email, phone, note, newsletter, venue, tour_type, created_at FROM submissions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
