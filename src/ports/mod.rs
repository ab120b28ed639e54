/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives the outside world only through the
/// outbound ports declared here (Mend API, report output, progress).
pub mod outbound;
