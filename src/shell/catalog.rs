use anyhow::Context;
use std::path::Path;

use crate::modules::bookings::adapters::outbound::ledger_in_memory::InMemoryHotel;
use crate::modules::bookings::core::room::RoomCatalog;

pub fn parse_catalog(raw: &str) -> anyhow::Result<RoomCatalog> {
    let catalog: RoomCatalog = serde_json::from_str(raw).context("malformed room catalog")?;
    catalog.validate().context("invalid room catalog")?;
    Ok(catalog)
}

/// Loads the room catalog from `path` into a fresh in memory hotel.
pub fn load_hotel(path: &Path) -> anyhow::Result<InMemoryHotel> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read room catalog {}", path.display()))?;
    let catalog = parse_catalog(&raw)?;
    tracing::info!(
        room_types = catalog.room_types.len(),
        rooms = catalog.rooms.len(),
        "room catalog loaded"
    );
    Ok(InMemoryHotel::with_catalog(catalog)?)
}
