//! Pricing Sample Application
//!
//! Value objects for accommodation pricing, validated through `outcomes`.
//!
//! # Architecture
//!
//! - **Domain Layer**: Currency, Price, `AccommodationPrice`, Establishment and
//!   the validation rules they enforce
//! - **Infrastructure Layer**: Configuration loaded from the environment
//!
//! # outcomes Features Used
//!
//! - `ValueOutcome` smart constructors that report every violated rule at once
//! - `bind` to sequence a dependent construction after its prerequisite
//! - `UnitOutcome::combine` to merge independent checks
//! - `bind_async` and `OutcomeFutureExt` for the asynchronous currency lookup

pub mod domain;
pub mod infrastructure;
pub mod report;
