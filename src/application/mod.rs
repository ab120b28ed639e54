/// Application layer - Use cases, DTOs and the concurrent dispatcher
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dispatcher;
pub mod dto;
pub mod use_cases;
