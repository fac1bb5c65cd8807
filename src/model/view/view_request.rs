use crate::common::*;

use crate::enums::{celestial_point::*, position_filter::*, view_kind::*};

use crate::dto::stat_thresholds::*;

#[doc = r#"
    대시보드 사용자 조작 한 건에 해당하는 요청.

    # Fields
    * `name` - 결과물이 저장될 하위 디렉토리 이름
    * `kind` - venus_cycle / horoscope
    * `position` - 포지션 필터
    * `thresholds` - 9개 통계 컬럼의 최소 임계값 (초과 조건)
    * `celestial_point` - horoscope 뷰에서 그룹핑할 천체 (기본값 Sun)
    * `show_table` - 필터링된 선수 목록을 CSV 로 함께 내보낼지 여부
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ViewRequest {
    pub name: String,
    pub kind: ViewKind,
    #[serde(default)]
    pub position: PositionFilter,
    #[serde(default)]
    pub thresholds: StatThresholds,
    #[serde(default)]
    pub celestial_point: Option<CelestialPoint>,
    #[serde(default)]
    pub show_table: bool,
}
