use crate::error::BoardcoreError;

pub fn get_exit_code(error: &BoardcoreError) -> i32 {
    match error {
        BoardcoreError::InvalidArgument(_)
        | BoardcoreError::InvalidVersionFormat(_)
        | BoardcoreError::ConfigError(_) => 2,

        BoardcoreError::InvalidSession(_) => 3,

        BoardcoreError::RegistryNotFound(_) => 4,

        _ => 1,
    }
}
