use crate::shared::core::primitives::Amount;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub type RoomId = i64;
pub type RoomTypeId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub type_id: RoomTypeId,
    pub type_name: String,
    pub price_per_night: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub room_number: String,
    pub type_id: RoomTypeId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("room type {0} is declared twice")]
    DuplicateRoomType(RoomTypeId),

    #[error("room type {type_id} must have a positive price, got {price_per_night}")]
    InvalidPrice {
        type_id: RoomTypeId,
        price_per_night: Amount,
    },

    #[error("room {0} is declared twice")]
    DuplicateRoom(RoomId),

    #[error("room number {0} is used by more than one room")]
    DuplicateRoomNumber(String),

    #[error("room {room_id} references unknown room type {type_id}")]
    UnknownRoomType { room_id: RoomId, type_id: RoomTypeId },
}

/// Static reference data: room types with their nightly rate, and the rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub room_types: Vec<RoomType>,
    pub rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut type_ids = HashSet::new();
        for room_type in &self.room_types {
            if !type_ids.insert(room_type.type_id) {
                return Err(CatalogError::DuplicateRoomType(room_type.type_id));
            }
            if room_type.price_per_night <= 0 {
                return Err(CatalogError::InvalidPrice {
                    type_id: room_type.type_id,
                    price_per_night: room_type.price_per_night,
                });
            }
        }

        let mut room_ids = HashSet::new();
        let mut room_numbers = HashSet::new();
        for room in &self.rooms {
            if !room_ids.insert(room.room_id) {
                return Err(CatalogError::DuplicateRoom(room.room_id));
            }
            if !room_numbers.insert(room.room_number.as_str()) {
                return Err(CatalogError::DuplicateRoomNumber(room.room_number.clone()));
            }
            if !type_ids.contains(&room.type_id) {
                return Err(CatalogError::UnknownRoomType {
                    room_id: room.room_id,
                    type_id: room.type_id,
                });
            }
        }
        Ok(())
    }

    pub fn room_type(&self, type_id: RoomTypeId) -> Option<&RoomType> {
        self.room_types.iter().find(|t| t.type_id == type_id)
    }
}
