//! Airbyte Provider - host-facing resources for Airbyte sources.
//!
//! An infrastructure-as-code host manages Airbyte sources through this crate.
//! Each source type is a resource answering create/read/update/delete with
//! plan and state documents; the `airbyte` crate does the actual API calls.
//!
//! # Architecture
//!
//! ```text
//! Host (plans, applies, refreshes)
//!          ↓  ServiceRequest
//! ┌─────────────────────────────────────────┐
//! │       Provider API (axum)                │
//! │  - configure Airbyte connection          │
//! │  - route calls by resource type name     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │       Registry → SourceResource<S>       │
//! │  - plan/state ⇄ Source<C>                │
//! └─────────────────────────────────────────┘
//!          ↓
//!     airbyte::SourceApi<S> → Airbyte
//! ```
//!
//! # Core Types
//!
//! - [`ResourceService`] - Trait every resource implements
//! - [`SourceResource`] - Generic resource for any Airbyte source
//! - [`Registry`] - Resource type name → constructor
//! - [`ServiceRequest`] / [`ServiceResponse`] - Host call contract

pub mod api;
pub mod registry;
pub mod resource;

pub use registry::Registry;
pub use resource::{ResourceModel, ResourceService, ServiceRequest, ServiceResponse, SourceResource};
