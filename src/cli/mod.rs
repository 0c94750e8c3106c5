//! # CLI Module
//!
//! Command-line front end for trying a router without a host server.
//!
//! ## Commands
//!
//! ### `dispatch`
//!
//! Dispatch one request against the demo routes and print the result as JSON:
//!
//! ```bash
//! scoperoute dispatch GET /user/alice
//! scoperoute dispatch POST /user/alice --header "Content-Type: application/json" --body '{"a":1}'
//! ```
//!
//! Options:
//! - `--header <NAME:VALUE>` - Request header, repeatable
//! - `--body <JSON>` - Request body
//! - `--config <FILE>` - TOML configuration (defaults to `SCOPEROUTE_*` env vars)
//!
//! ### `routes`
//!
//! Print the declared route table, one `METHOD TEMPLATE` per line:
//!
//! ```bash
//! scoperoute routes
//! ```
//!
//! ## Demo Routes
//!
//! | Method | Template | Result |
//! |---|---|---|
//! | GET | `/user/error` | 500, no payload |
//! | GET | `/user/:name` | 200, `"hello <name>"` |

mod commands;
mod demo;

pub use commands::{load_config, parse_header, run_cli, Cli, Commands};
pub use demo::demo_router;
