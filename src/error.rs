#[doc = r#"
    분류기, 차트 빌더, 데이터셋 적재 과정에서 발생하는 도메인 오류.
    서비스 경계에서는 `anyhow::Error` 로 감싸서 전달된다.
"#]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[doc = "A value outside its fixed domain (unknown sign, malformed interval tag, ...)"]
    #[error("invalid argument for {kind}: '{value}'")]
    InvalidArgument { kind: &'static str, value: String },

    #[doc = "A column the caller asked for does not exist in the table"]
    #[error("column '{0}' does not exist")]
    MissingColumn(String),

    #[doc = "The column exists but holds numeric values, so it cannot be grouped"]
    #[error("column '{0}' is numeric and cannot be used as a category")]
    NotCategorical(String),

    #[doc = "An observed category is not listed in the caller's category order"]
    #[error("category '{value}' of column '{column}' is not part of the category order")]
    UnknownCategory { column: String, value: String },

    #[doc = "The color map has no entry for an observed category"]
    #[error("no color mapped for category '{0}'")]
    ColorLookupMiss(String),

    #[doc = "The palette does not cover every position of the category order"]
    #[error("color palette has {palette} entries but the category order has {order}")]
    PaletteTooShort { palette: usize, order: usize },

    #[doc = "A row of the dataset violates the typed schema"]
    #[error("schema violation at row {row}: {message}")]
    Schema { row: usize, message: String },
}

impl DashboardError {
    pub fn invalid_argument(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }
}
