/// Domain layer - report model, scope and license index, plus the pure
/// services that read bundles and merge license text into reports.
pub mod domain;
pub mod services;
