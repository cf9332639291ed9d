//! Demonstration collection, dated relative to `today` so it always has
//! plants that need attention.

use chrono::NaiveDate;

use crate::dates::add_days;
use crate::model::Plant;

pub fn seed(today: NaiveDate) -> Vec<Plant> {
    vec![
        Plant::new("Red Spider Lily", add_days(today, -4), Some(3))
            .with_species("Lycoris radiata")
            .with_location("Client A - Front Bed")
            .with_notes("Prefers well-drained soil. Avoid overwatering."),
        Plant::new("Boxwood Hedge", add_days(today, -1), Some(2))
            .with_species("Buxus sempervirens")
            .with_location("Client B - Perimeter")
            .with_notes("Prune quarterly; monitor for leaf miners."),
        Plant::new("Herb Planter", add_days(today, -6), Some(2))
            .with_species("Mixed (Basil, Thyme, Mint)")
            .with_location("Client C - Patio")
            .with_notes("Morning sun only; mint can spread."),
    ]
}
