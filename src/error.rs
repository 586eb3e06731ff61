use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleError {
    #[error("cannot cycle an empty sequence")]
    EmptySource,
    #[error("cannot move before the first lap of a cycled sequence")]
    BeforeFirstLap,
}
