//! Hotels page

use std::collections::BTreeSet;
use std::time::Duration;

use super::{absorb, Banner, BannerSlot, EmptyState};
use crate::api::{ApiClient, SessionExpired};
use crate::models::{Hotel, HotelForm};

/// Search box and city select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    /// Case-insensitive match against name, city and address
    pub search: String,
    /// Exact city
    pub city: Option<String>,
}

impl HotelFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.city.is_some()
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || [&hotel.name, &hotel.city, &hotel.address]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        let matches_city = self.city.as_ref().map_or(true, |city| &hotel.city == city);

        matches_search && matches_city
    }
}

pub fn filter_hotels<'a>(hotels: &'a [Hotel], filter: &HotelFilter) -> Vec<&'a Hotel> {
    hotels.iter().filter(|h| filter.matches(h)).collect()
}

/// Distinct cities, sorted
pub fn cities(hotels: &[Hotel]) -> Vec<String> {
    hotels
        .iter()
        .map(|h| h.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn delete_prompt(name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        name
    )
}

/// Asks the operator to confirm an irreversible action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct HotelsView {
    client: ApiClient,
    hotels: Vec<Hotel>,
    pub filter: HotelFilter,
    banners: BannerSlot,
}

impl HotelsView {
    pub fn new(client: ApiClient, banner_ttl: Duration) -> Self {
        Self {
            client,
            hotels: Vec::new(),
            filter: HotelFilter::default(),
            banners: BannerSlot::new(banner_ttl),
        }
    }

    pub async fn load(&mut self) -> Result<(), SessionExpired> {
        let result = self.client.hotels().list().await;
        if let Some(hotels) = absorb(
            result,
            &mut self.banners,
            "Error loading hotels. Please try again.",
        )? {
            self.hotels = hotels;
        }
        Ok(())
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn visible(&self) -> Vec<&Hotel> {
        filter_hotels(&self.hotels, &self.filter)
    }

    pub fn cities(&self) -> Vec<String> {
        cities(&self.hotels)
    }

    /// "Showing N of M hotels"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} hotels", self.visible().len(), self.hotels.len())
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        EmptyState::detect(self.hotels.len(), self.visible().len()).map(|state| match state {
            EmptyState::NoData => {
                "No hotels have been added yet. Click \"Add New Hotel\" to create your first property."
            }
            EmptyState::NoMatches => "No hotels match your search criteria. Try adjusting your filters.",
        })
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banners.visible()
    }

    /// Create a hotel, or update `editing` when given
    ///
    /// An invalid form is reported without contacting the backend.
    pub async fn save(&mut self, editing: Option<i64>, form: &HotelForm) -> Result<bool, SessionExpired> {
        if let Err(e) = form.validate() {
            self.banners.error(e.to_string());
            return Ok(false);
        }

        let (result, done) = match editing {
            Some(id) => (
                self.client.hotels().update(id, form).await,
                "Hotel updated successfully!",
            ),
            None => (
                self.client.hotels().create(form).await,
                "Hotel created successfully!",
            ),
        };

        let saved = absorb(result, &mut self.banners, "Error saving hotel. Please try again.")?;
        if saved.is_none() {
            return Ok(false);
        }

        self.banners.success(done);
        self.load().await?;
        Ok(true)
    }

    /// Delete a hotel once the operator confirmed the prompt naming it
    pub async fn delete(&mut self, id: i64, confirm: &dyn Confirm) -> Result<bool, SessionExpired> {
        let name = self
            .hotels
            .iter()
            .find(|h| h.id == id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| format!("Hotel {}", id));

        if !confirm.confirm(&delete_prompt(&name)) {
            tracing::debug!(hotel_id = id, "Hotel deletion not confirmed");
            return Ok(false);
        }

        let result = self.client.hotels().delete(id).await;
        let deleted = absorb(result, &mut self.banners, "Error deleting hotel. Please try again.")?;
        if deleted.is_none() {
            return Ok(false);
        }

        tracing::info!(hotel_id = id, "Deleted hotel");
        self.banners.success("Hotel deleted successfully!");
        self.load().await?;
        Ok(true)
    }
}
