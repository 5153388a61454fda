use serde::Deserialize;

use super::ScheduleError;

pub const DEFAULT_GID: &str = "0";
pub const DEFAULT_HEADER_ROW: usize = 1;

/// Query parameters exactly as they arrive on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    #[serde(rename = "sheetId")]
    pub sheet_id: Option<String>,
    pub gid: Option<String>,
    #[serde(rename = "headerRow")]
    pub header_row: Option<String>,
}

/// A request that passed validation: non-empty sheet id, positive header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsRequest {
    pub sheet_id: String,
    pub gid: String,
    pub header_row: usize,
}

impl EventsParams {
    /// Validate before anything touches the network.
    pub fn validate(self) -> Result<EventsRequest, ScheduleError> {
        let sheet_id = match self.sheet_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(ScheduleError::InvalidInput(
                    "sheetId query parameter is required".to_string(),
                ))
            }
        };

        // An empty gid falls back to the first sub-sheet, same as absent.
        let gid = match self.gid {
            Some(gid) if !gid.is_empty() => gid,
            _ => DEFAULT_GID.to_string(),
        };

        let header_row = match self.header_row {
            None => DEFAULT_HEADER_ROW,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ScheduleError::InvalidInput(format!(
                        "headerRow must be a positive integer, got `{raw}`"
                    )))
                }
            },
        };

        Ok(EventsRequest {
            sheet_id,
            gid,
            header_row,
        })
    }
}
