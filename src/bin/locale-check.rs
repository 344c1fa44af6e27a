use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use locale_gateway::config::{load_config, GatewayConfig};
use locale_gateway::routing::{LocaleRouter, PathClass, RoutingDecision};

#[derive(Parser)]
#[command(name = "locale-check")]
#[command(about = "Show how the locale gateway routes a request path", long_about = None)]
struct Cli {
    /// Request path, e.g. /companies
    path: String,

    /// Query string without the leading '?'
    #[arg(short, long, default_value = "")]
    query: String,

    /// Value of the locale preference cookie
    #[arg(long)]
    cookie: Option<String>,

    /// Gateway configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// The redirect target carries its own `path`, so the input path is
/// reported as `request_path`.
#[derive(Serialize)]
struct Report<'a> {
    request_path: &'a str,
    class: PathClass,
    #[serde(flatten)]
    decision: RoutingDecision,
}

fn build_report<'a>(
    router: &LocaleRouter,
    path: &'a str,
    query: &str,
    cookie: Option<&str>,
) -> Report<'a> {
    Report {
        request_path: path,
        class: router.classifier().classify(path),
        decision: router.decide(path, query, cookie),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    let registry = Arc::new(config.locales.registry()?);
    let router = LocaleRouter::new(registry, &config.bypass);

    let report = build_report(&router, &cli.path, &cli.query, cli.cookie.as_deref());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_gateway::LocaleRegistry;
    use serde_json::{json, Value};

    fn router() -> LocaleRouter {
        let config = GatewayConfig::default();
        LocaleRouter::new(Arc::new(LocaleRegistry::default()), &config.bypass)
    }

    #[test]
    fn test_redirect_report_keeps_both_paths() {
        let router = router();
        let report = build_report(&router, "/companies", "page=2", Some("en"));
        let value: Value = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

        assert_eq!(value["request_path"], "/companies");
        assert_eq!(value["path"], "/en/companies");
        assert_eq!(value["query"], "page=2");
        assert_eq!(value["decision"], "redirect");
        assert_eq!(value["locale"], "en");
        assert_eq!(value["class"], json!({ "class": "needs_locale" }));
    }

    #[test]
    fn test_pass_through_report() {
        let router = router();
        let report = build_report(&router, "/ru/news", "", None);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["request_path"], "/ru/news");
        assert_eq!(value["decision"], "pass_through");
        assert!(value.get("path").is_none());
    }
}
