use thiserror::Error;

use crate::api::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no renderer registered for chart kind `{kind}`")]
    MissingRenderer { kind: ChartKind },

    #[error("chart has not been attached to a container")]
    NotAttached,
}
