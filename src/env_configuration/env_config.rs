use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    필수 설정 파일 경로들이 환경변수로 관리되므로, 해당 환경변수가 없으면
    프로그램이 정상 동작할 수 없기 때문에 panic 으로 즉시 종료시킨다.

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 정보 파일의 경로.

    데이터셋 CSV 경로, 차트 레이아웃, 결과물 출력 디렉토리 등
    프로그램 실행에 필요한 설정 정보가 TOML 형식으로 포함되어 있다.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    뷰 요청 목록 파일의 경로.

    포지션 필터, 통계 임계값, 천체 선택 등 사용자 조작에 해당하는 요청들이
    TOML 형식(`[[view]]`)으로 나열되어 있다.
"#]
pub static VIEW_REQUEST_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("VIEW_REQUEST_PATH"));
