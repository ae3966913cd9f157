use shared_types::{AppError, Destination, Trip, TripStatus};

/// Fixed latency of the stand-in load. Keeps the loading states visible
/// until the real retrieval API replaces the mocks.
const LOAD_DELAY_MS: u64 = 1500;

/// Read access to the destination catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogProvider {
    async fn fetch_destinations(&self) -> Result<Vec<Destination>, AppError>;
}

/// Read access to the user's trips.
#[allow(async_fn_in_trait)]
pub trait TripProvider {
    async fn fetch_upcoming_trips(&self) -> Result<Vec<Trip>, AppError>;
}

/// In-process stand-in for the future retrieval API.
///
/// Resolves fixed data after [`LOAD_DELAY_MS`]. It cannot fail today;
/// the `Result` keeps the error display path alive for the real
/// backend.
pub struct MockApi;

impl CatalogProvider for MockApi {
    async fn fetch_destinations(&self) -> Result<Vec<Destination>, AppError> {
        simulate_latency().await;
        let catalog = destination_catalog();
        tracing::debug!(count = catalog.len(), "destination catalog loaded");
        Ok(catalog)
    }
}

impl TripProvider for MockApi {
    async fn fetch_upcoming_trips(&self) -> Result<Vec<Trip>, AppError> {
        simulate_latency().await;
        let trips = upcoming_trips();
        tracing::debug!(count = trips.len(), "upcoming trips loaded");
        Ok(trips)
    }
}

async fn simulate_latency() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(LOAD_DELAY_MS as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(LOAD_DELAY_MS)).await;
}

fn destination_catalog() -> Vec<Destination> {
    vec![
        Destination {
            id: 1,
            name: "Santorini".into(),
            country: "Greece".into(),
            popularity: 95,
            price: 1299.0,
        },
        Destination {
            id: 2,
            name: "Bali".into(),
            country: "Indonesia".into(),
            popularity: 88,
            price: 899.0,
        },
        Destination {
            id: 3,
            name: "Maldives".into(),
            country: "Maldives".into(),
            popularity: 92,
            price: 2199.0,
        },
    ]
}

fn upcoming_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1".into(),
            destination: "Bali, Indonesia".into(),
            start_date: "2024-02-15".into(),
            end_date: "2024-02-22".into(),
            status: TripStatus::Upcoming,
            image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=400&h=300&fit=crop"
                .into(),
        },
        Trip {
            id: "2".into(),
            destination: "Santorini, Greece".into(),
            start_date: "2024-03-10".into(),
            end_date: "2024-03-17".into(),
            status: TripStatus::Upcoming,
            image: "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=400&h=300&fit=crop"
                .into(),
        },
        Trip {
            id: "3".into(),
            destination: "Tokyo, Japan".into(),
            start_date: "2024-04-05".into(),
            end_date: "2024-04-12".into(),
            status: TripStatus::Upcoming,
            image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=400&h=300&fit=crop"
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_records_satisfy_the_invariants() {
        for d in destination_catalog() {
            assert!((0..=100).contains(&d.popularity), "{}", d.name);
            assert!(d.price >= 0.0, "{}", d.name);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = destination_catalog();
        let mut ids: Vec<i64> = catalog.iter().map(|d| d.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn mock_trips_all_have_valid_durations() {
        for trip in upcoming_trips() {
            assert!(trip.duration_days().is_some(), "{}", trip.destination);
        }
    }
}
