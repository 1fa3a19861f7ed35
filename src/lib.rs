//! Airbyte source management over the Airbyte configuration API.
//!
//! # Architecture
//!
//! ```text
//! caller (provider host, CLI, tests)
//!          ↓  Source<C>
//! ┌─────────────────────────────────────────┐
//! │   SourceApi<S: SourceConnector>          │
//! │  - create / read / update / delete       │
//! │  - one implementation for all sources    │
//! └─────────────────────────────────────────┘
//!          ↓  JSON
//! ┌─────────────────────────────────────────┐
//! │   Client                                 │
//! │  - host + basic auth                     │
//! │  - POST, 2xx check, error extraction     │
//! └─────────────────────────────────────────┘
//!          ↓
//!   Airbyte /api/v1/sources/*
//! ```
//!
//! Supported sources live in [`connectors`]: Amplitude, Faker, Freshdesk,
//! Hubspot, Pipedrive, Shopify, Stripe and Zendesk Support.

pub mod client;
pub mod config;
pub mod connectors;
pub mod error;
pub mod source;

pub use client::{api_error, Client, RawResponse};
pub use config::{ClientConfig, ProviderConfig};
pub use error::{Error, Result};
pub use source::{Source, SourceApi, SourceConnector};
