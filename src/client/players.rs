//! Player operations
//!
//! Lists return the summary projection, single players the full one.

use tracing::info;

use super::api::{
    JwPlayerApiGeneric, created_key, ensure_ok, require, take_entities, take_entity,
};
use super::transport::{HttpMethod, Transport};
use crate::{
    Error, Result,
    shaping::{Shaped, shape_player, shape_player_summary},
    signing::ParameterSet,
    types::StatusResponse,
};

impl<T: Transport> JwPlayerApiGeneric<T> {
    /// List players, optionally filtered
    pub async fn list_players(&self, filter: Option<&ParameterSet>) -> Result<Vec<Shaped>> {
        let empty = ParameterSet::new();
        let body = self
            .call(HttpMethod::Get, "/players/list", filter.unwrap_or(&empty))
            .await?;
        take_entities(body, "players", "players/list")?
            .iter()
            .map(|player| shape_player_summary(player, self.urls()))
            .collect()
    }

    /// Fetch one player by key
    pub async fn get_player(&self, player_key: &str) -> Result<Shaped> {
        let player_key = require("playerKey", player_key)?;
        let body = self
            .call(
                HttpMethod::Get,
                "/players/show",
                &ParameterSet::new().with("playerKey", player_key),
            )
            .await?;
        let player = take_entity(body, "player", player_key)?;
        shape_player(&player, self.urls())
    }

    /// Create a player and return it as fetched back from the API
    pub async fn create_player(&self, fields: &ParameterSet) -> Result<Shaped> {
        if fields.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide all the parameters in order to create a player",
            ));
        }
        let body = self.call(HttpMethod::Post, "/players/create", fields).await?;
        let player_key = created_key(&body, "player", "players/create")?;
        info!(player_key = %player_key, "player created");
        self.get_player(&player_key).await
    }

    /// Update a player's fields and return the refreshed player
    pub async fn update_player(&self, player_key: &str, fields: &ParameterSet) -> Result<Shaped> {
        let player_key = require("playerKey", player_key)?;
        if fields.is_empty() {
            return Err(Error::invalid_argument(
                "You must provide the fields to update",
            ));
        }

        let mut extra = ParameterSet::new().with("playerKey", player_key);
        extra.extend(fields);

        let body = self.call(HttpMethod::Get, "/players/update", &extra).await?;
        if ensure_ok(&body, player_key).is_err() {
            return Err(Error::remote_rejection(
                player_key,
                format!("Player with the key {} does not exist", player_key),
            ));
        }
        info!(player_key, "player updated");
        self.get_player(player_key).await
    }

    /// Delete a player
    pub async fn delete_player(&self, player_key: &str) -> Result<StatusResponse> {
        let player_key = require("playerKey", player_key)?;
        let body = self
            .call(
                HttpMethod::Get,
                "/players/delete",
                &ParameterSet::new().with("playerKey", player_key),
            )
            .await?;
        ensure_ok(&body, player_key)?;
        info!(player_key, "player deleted");
        Ok(serde_json::from_value(body)?)
    }
}
