use crate::common::*;

use crate::model::player::player_record::*;

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    #[doc = "Reads and validates every row of the dataset at `path`"]
    async fn read_players(&self, path: &Path) -> anyhow::Result<Vec<PlayerRecord>>;
}
