use crate::common::*;

use crate::model::player::{player_record::*, player_table::*};

use crate::traits::{repository_traits::player_repository::*, service_traits::dataset_service::*};

#[doc = r#"
    데이터셋 적재 서비스.

    데이터셋은 실행 중에 변하지 않으므로, 파일 경로를 키로 하는 캐시에 한 번만 적재하고
    이후 요청에서는 같은 테이블을 재사용한다. 캐시는 만료되지 않으며
    `invalidate` / `reload_table` 로만 비워진다.
"#]
#[derive(Debug, new)]
pub struct DatasetServiceImpl<R: PlayerRepository> {
    repository: R,
    #[new(default)]
    cache: DashMap<PathBuf, Arc<PlayerTable>>,
}

#[async_trait]
impl<R> DatasetService for DatasetServiceImpl<R>
where
    R: PlayerRepository,
{
    async fn load_table(&self, path: &Path) -> anyhow::Result<Arc<PlayerTable>> {
        let cached: Option<Arc<PlayerTable>> =
            self.cache.get(path).map(|entry| Arc::clone(entry.value()));

        if let Some(table) = cached {
            return Ok(table);
        }

        info!("[DatasetServiceImpl->load_table] loading dataset {:?}", path);

        let records: Vec<PlayerRecord> = self
            .repository
            .read_players(path)
            .await
            .with_context(|| {
                format!(
                    "[DatasetServiceImpl->load_table] Failed to load dataset {:?}",
                    path
                )
            })?;

        let table: Arc<PlayerTable> = Arc::new(PlayerTable::new(records));

        /* 동시에 적재된 경우 먼저 저장된 테이블을 유지한다 */
        let stored: Arc<PlayerTable> = Arc::clone(
            self.cache
                .entry(path.to_path_buf())
                .or_insert(table)
                .value(),
        );

        Ok(stored)
    }

    fn invalidate(&self, path: &Path) -> bool {
        let removed: bool = self.cache.remove(path).is_some();

        if removed {
            info!("[DatasetServiceImpl->invalidate] dropped cached dataset {:?}", path);
        }

        removed
    }

    async fn reload_table(&self, path: &Path) -> anyhow::Result<Arc<PlayerTable>> {
        self.invalidate(path);
        self.load_table(path).await
    }
}
