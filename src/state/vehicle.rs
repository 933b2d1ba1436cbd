//! Vehicle references shared by the collection stores.
//!
//! Listing data is owned by the CMS; this client only carries the fields the
//! favorites and comparison views display, keyed by the listing `id`.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use serde::{Deserialize, Serialize};

/// Denormalized vehicle summary. Treated as immutable once received.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: Option<u16>,
    /// Asking price in whole currency units.
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub mileage: Option<u64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Vehicle {
    /// A vehicle carrying only its identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// "2021 Toyota Corolla", skipping missing parts.
    #[must_use]
    pub fn title(&self) -> String {
        let year = self.year.map(|y| y.to_string());
        [year.as_deref(), Some(self.make.as_str()), Some(self.model.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group digits in thousands: `24990` -> `"24 990"`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
