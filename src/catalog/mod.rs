//! # Catalog Integration Module
//!
//! Client for the Yandex Music catalog HTTP API and the content hosts behind
//! it. Each submodule handles one domain of the service:
//!
//! - [`albums`] - Album descriptors and the album track listing
//! - [`tracks`] - Single-track descriptors
//! - [`download`] - The two-hop download negotiation: candidate selection,
//!   descriptor URL rewriting, the XML signing manifest and final signed
//!   content URL construction
//! - [`covers`] - Cover-art URI resolution and retrieval
//!
//! ## Envelope and shapes
//!
//! Every catalog endpoint wraps its payload in a `{ "result": ... }` envelope.
//! Two quirks are normalized here and never leak further: the track lookup
//! returns a one-element list, and the album track listing arrives either
//! nested under `volumes` or as a flat `tracks` array (modeled as
//! [`crate::types::TrackListing`] and resolved at this boundary).
//!
//! ## Error handling
//!
//! Non-200 statuses and malformed payloads are converted into the crate's
//! closed error kinds at this layer. A missing record or an empty candidate
//! list is a definitive absence and is never retried; transient transport
//! failures have already been retried underneath by
//! [`crate::transport::Transport`].

pub mod albums;
pub mod covers;
pub mod download;
pub mod tracks;
