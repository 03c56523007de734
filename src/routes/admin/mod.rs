///
/// These are endpoints that are used internally by the platform or support staff.
///
pub mod health;
pub mod tracer;
pub mod settings;
