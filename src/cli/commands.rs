use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use serde_json::{json, Value};

use crate::config::RouterConfig;
use crate::context::Request;
use crate::logging::init_logging;
use crate::router::Router;

use super::demo::demo_router;

/// Command-line interface for scoperoute
#[derive(Parser)]
#[command(name = "scoperoute")]
#[command(about = "scoperoute CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch one request against the demo routes and print the result
    Dispatch {
        /// HTTP method (GET, POST, ...)
        method: String,

        /// Request URI, optionally with a query string
        uri: String,

        /// Request header as NAME:VALUE (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// JSON request body
        #[arg(short, long)]
        body: Option<String>,

        /// Path to a TOML configuration file
        #[arg(short, long, env = "SCOPEROUTE_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the declared route table
    Routes {
        /// Path to a TOML configuration file
        #[arg(short, long, env = "SCOPEROUTE_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// Configuration from `path` when given, otherwise from the environment.
///
/// # Errors
///
/// Unreadable or invalid configuration file.
pub fn load_config(path: Option<&Path>) -> Result<RouterConfig> {
    match path {
        Some(path) => RouterConfig::from_toml_file(path),
        None => Ok(RouterConfig::from_env()),
    }
}

/// Split a `NAME:VALUE` header argument.
///
/// # Errors
///
/// Missing colon or empty name.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid header '{raw}', expected NAME:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Invalid header '{raw}', empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn build_router(config: &RouterConfig) -> Result<Router> {
    let mut router = Router::with_config(config);
    demo_router(&mut router).context("Failed to declare demo routes")?;
    Ok(router)
}

fn build_request(method: &str, uri: &str, headers: &[String], body: Option<&str>) -> Result<Request> {
    let method: Method = method
        .to_uppercase()
        .parse()
        .with_context(|| format!("Invalid HTTP method '{method}'"))?;
    let mut request = Request::new(method, uri);
    for raw in headers {
        let (name, value) = parse_header(raw)?;
        request = request.with_header(&name, &value);
    }
    if let Some(body) = body {
        let body: Value = serde_json::from_str(body).context("Request body is not valid JSON")?;
        request = request.with_body(body);
    }
    Ok(request)
}

/// Parse the command line and run the selected command.
///
/// # Errors
///
/// Invalid arguments, configuration or handler resolution failures.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Dispatch {
            method,
            uri,
            headers,
            body,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            init_logging(&config.log)?;
            let router = build_router(&config)?;
            router.dump_routes();

            let request = build_request(method, uri, headers, body.as_deref())?;
            let result = router.dispatch(request)?;

            let mut output = serde_json::to_value(&result)?;
            if let Value::Object(map) = &mut output {
                map.insert("headers".to_string(), json!(result.headers_map()));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Commands::Routes { config } => {
            let config = load_config(config.as_deref())?;
            init_logging(&config.log)?;
            let router = build_router(&config)?;
            for route in router.routes().iter() {
                println!("{} {}", route.method(), route.template());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
pub(super) fn dispatch_demo(method: &str, uri: &str, headers: &[String]) -> Result<crate::DispatchResult> {
    let router = build_router(&RouterConfig::default())?;
    let request = build_request(method, uri, headers, None)?;
    Ok(router.dispatch(request)?)
}
