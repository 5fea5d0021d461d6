//! parkmap-cli
//! ===========
//!
//! Command-line interface for `parkmap-core`.
//!
//! This crate primarily provides a binary (`parkmap`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! parkmap --help
//! parkmap stats
//! parkmap -i parking.csv convert -o parking.geojson --pretty
//! parkmap -i https://example.org/parking.csv render -o map.html
//! parkmap color "Taxi Zone"
//! parkmap search "7 av"
//! ```
//!
//! For programmatic access use the [`parkmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
