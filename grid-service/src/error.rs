//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Errors answering a tile request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    /// Malformed request (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Tile not served or without data (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Tile encoding failed (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TileError {
    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            TileError::BadRequest(_) => 400,
            TileError::NotFound(_) => 404,
            TileError::Internal(_) => 500,
        }
    }
}
