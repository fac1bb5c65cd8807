use crate::common::*;

use crate::model::player::player_table::*;

#[async_trait]
pub trait DatasetService: Send + Sync {
    #[doc = "Returns the cached table for `path`, loading it on first use"]
    async fn load_table(&self, path: &Path) -> anyhow::Result<Arc<PlayerTable>>;

    #[doc = "Drops the cached table for `path`. Returns whether an entry existed."]
    #[allow(dead_code)]
    fn invalidate(&self, path: &Path) -> bool;

    #[doc = "Invalidates and loads `path` again"]
    #[allow(dead_code)]
    async fn reload_table(&self, path: &Path) -> anyhow::Result<Arc<PlayerTable>>;
}
