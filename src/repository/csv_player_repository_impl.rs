use crate::common::*;

use crate::error::*;

use crate::model::player::player_record::*;

use crate::traits::repository_traits::player_repository::*;

#[derive(Debug, Clone, Default, new)]
pub struct CsvPlayerRepositoryImpl;

impl CsvPlayerRepositoryImpl {
    #[doc = r#"
        CSV 파일을 읽어 선수 목록으로 변환해주는 함수 (동기).

        1. 헤더에 필수 컬럼이 모두 존재하는지 먼저 검증한다
        2. 각 행을 `PlayerRecord` 로 역직렬화하면서 별자리/구간 태그/수치 타입을 검증한다
        3. 하나라도 잘못된 행이 있으면 행 번호와 함께 즉시 오류를 반환한다
    "#]
    fn read_players_blocking(path: &Path) -> anyhow::Result<Vec<PlayerRecord>> {
        let mut reader: csv::Reader<fs::File> = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| {
                format!(
                    "[CsvPlayerRepositoryImpl->read_players_blocking] Failed to open {:?}",
                    path
                )
            })?;

        let headers: csv::StringRecord = reader.headers()?.clone();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(DashboardError::MissingColumn(missing.to_string()).into());
        }

        let mut players: Vec<PlayerRecord> = Vec::new();

        for (idx, result) in reader.deserialize::<PlayerRecord>().enumerate() {
            /* 헤더를 제외한 1-based 데이터 행 번호 */
            let row: usize = idx + 1;

            let player: PlayerRecord = result.map_err(|e| DashboardError::Schema {
                row,
                message: e.to_string(),
            })?;

            players.push(player);
        }

        Ok(players)
    }
}

#[async_trait]
impl PlayerRepository for CsvPlayerRepositoryImpl {
    async fn read_players(&self, path: &Path) -> anyhow::Result<Vec<PlayerRecord>> {
        let path_buf: PathBuf = path.to_path_buf();

        let handle: tokio::task::JoinHandle<anyhow::Result<Vec<PlayerRecord>>> =
            tokio::task::spawn_blocking(move || Self::read_players_blocking(&path_buf));

        let players: Vec<PlayerRecord> = handle.await.context(
            "[CsvPlayerRepositoryImpl->read_players] blocking task join failed (panic/cancelled)",
        )??;

        info!("{} players read from {:?}", players.len(), path);

        Ok(players)
    }
}
