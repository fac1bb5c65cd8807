use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    서버 설정(데이터셋 경로, 차트 레이아웃, 출력 디렉토리)과 뷰 요청 목록을
    TOML 형식으로 관리하며, 이 함수를 통해 타입 안전하게 구조체로 변환한다.

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되었거나 구조체 필드와 키가 일치하지 않는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file()] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file()] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = "구조체를 JSON Value 객체로 변환하는 제네릭 유틸리티 함수"]
pub fn convert_json_from_struct<T: Serialize>(input_struct: &T) -> Result<Value, anyhow::Error> {
    serde_json::to_value(input_struct).map_err(|err| {
        anyhow!(
            "[Error][convert_json_from_struct()] Failed to serialize struct to JSON: {}",
            err
        )
    })
}

#[doc = r#"
    구조체를 보기 좋은 JSON 형태로 파일에 기록해주는 함수.

    상위 디렉토리가 없으면 생성한다.
"#]
pub async fn write_json_to_file<T: Serialize>(
    output_path: &Path,
    input_struct: &T,
) -> Result<(), anyhow::Error> {
    let json_value: Value = convert_json_from_struct(input_struct)?;
    let json_str: String = serde_json::to_string_pretty(&json_value)?;

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(output_path, json_str)
        .await
        .with_context(|| {
            format!(
                "[write_json_to_file()] Failed to write {:?}",
                output_path
            )
        })?;

    Ok(())
}

#[doc = r#"
    헤더와 행 목록을 CSV 파일로 기록해주는 함수.

    # Arguments
    * `output_path` - 저장할 CSV 파일 경로
    * `header` - 헤더 컬럼 목록
    * `rows` - 각 행의 값 목록 (헤더와 길이가 같아야 한다)
"#]
pub fn write_csv_file(
    output_path: &Path,
    header: &[String],
    rows: &[Vec<String>],
) -> Result<(), anyhow::Error> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer: csv::Writer<fs::File> = csv::Writer::from_path(output_path)
        .with_context(|| format!("[write_csv_file()] Failed to create {:?}", output_path))?;

    writer.write_record(header)?;

    for row in rows {
        writer.write_record(row)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn write_json_creates_parent_directory() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("nested").join("value.json");

        write_json_to_file(&path, &json!({ "title": "count" })).await.unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["title"], "count");
    }

    #[test]
    fn write_csv_keeps_header_first() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("table.csv");

        write_csv_file(
            &path,
            &["name".to_string(), "Goals".to_string()],
            &[vec!["Gretzky".to_string(), "894".to_string()]],
        )
        .unwrap();

        let content: String = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name,Goals\nGretzky,894\n");
    }
}
