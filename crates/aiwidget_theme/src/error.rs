use aiwidget_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid {field}: {source}")]
    InvalidColor {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
