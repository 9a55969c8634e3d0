use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid chip constraint {name}: {value}")]
    InvalidArgument { name: &'static str, value: f32 },
}
