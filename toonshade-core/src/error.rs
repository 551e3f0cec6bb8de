use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShadeError {
    #[error("{name} = {value} is out of range (0..={max})")]
    ParameterOutOfRange { name: &'static str, value: u32, max: u32 },
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("no shade surface attached to binding")]
    MissingSurface,
}
