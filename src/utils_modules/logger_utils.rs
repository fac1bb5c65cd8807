use crate::common::*;

#[doc = r#"
    로그 한 줄의 포맷을 지정해주는 함수.

    `[2025-09-01 12:00:00] [INFO] [module::path] message` 형식으로 기록한다.
"#]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    1. `logs/` 디렉토리에 로그 파일을 기록한다
    2. 하루 단위로 로그 파일을 교체하고, 최근 10개의 파일만 유지한다
    3. 동일한 로그를 표준출력으로도 내보낸다

    # Returns
    * `LoggerHandle` - 프로그램 종료 시점까지 유지되어야 하는 로거 핸들

    # Panics
    로거 초기화에 실패한 경우
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .basename("player_sign_chart"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .format_for_stdout(custom_format)
                .duplicate_to_stdout(Duplicate::All)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
