//! Error shared by every entity repository port.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A write collided with a unique constraint.
        UniqueViolation { constraint: String } => "unique constraint violated: {constraint}",
        /// A write broke a check, length or reference constraint.
        ConstraintViolation { message: String } => "constraint violated: {message}",
    }
}
