//! Search dashboard over the harga (price list) and stok (stock list)
//! material sheets, published as CSV exports.
//!
//! The core pipeline is: fetch a feed ([`feeds`]), parse it into headers
//! plus rows, keep the latest snapshot per dataset ([`store`]), filter rows
//! by substring ([`search`]), and map the matches into display cells with
//! highlight markup ([`present`]). The [`server`] module serves the browser
//! dashboard on top of that pipeline, and [`refresh`] keeps the snapshots
//! fresh in the background.

pub mod config;
pub mod error;
pub mod feeds;
pub mod models;
pub mod present;
pub mod refresh;
pub mod search;
pub mod server;
pub mod store;
