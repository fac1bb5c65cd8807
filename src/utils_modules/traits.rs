use crate::error::*;

/* 차트 빌더가 컬럼명으로 범주값을 꺼내기 위한 공통 트레이트 */
pub trait CategoricalRow {
    fn has_column(column: &str) -> bool
    where
        Self: Sized;

    fn category_value(&self, column: &str) -> Result<String, DashboardError>;
}
