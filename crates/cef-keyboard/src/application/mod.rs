//! Application layer: the translation use case and the port it drives.

/// Outbound browser collaborator trait and its error type.
pub mod browser;

/// InputTranslator: host notifications → engine key events.
pub mod translator;
