//! Error types for the sandbox.

use thiserror::Error;

/// Errors that can occur while building or querying the sandbox.
#[derive(Error, Debug)]
pub enum SandboxError {
    /// A polyline needs at least two vertices to form a chain collider.
    #[error("Polyline needs at least 2 vertices, got {0}")]
    DegeneratePolyline(usize),

    /// A shape refers to a body that is no longer in the physics world.
    #[error("Rigid body not found in the physics world")]
    MissingBody,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SandboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SandboxError::DegeneratePolyline(1).to_string(),
            "Polyline needs at least 2 vertices, got 1"
        );
        assert!(SandboxError::MissingBody.to_string().contains("not found"));
    }
}
