use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Station ID {station_id} has no kilo position on line ID {line_id}")]
    StationNotOnLine { line_id: i32, station_id: i32 },
    #[error("User ID {0} cannot reference themselves in their own {1} list")]
    SelfReference(i32, &'static str),
}

impl RecordError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}
