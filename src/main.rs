//! shopifyornot 命令行入口
//! check：检测单个站点；route：按 catch-all 路由片段解码后自动检测

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopifyornot::config::DEFAULT_API_BASE_URL;
use shopifyornot::{CheckSession, ConfigManager, GlobalConfig, SessionState, SubmitOutcome};

#[derive(Debug, Parser)]
#[command(name = "shopifyornot", version, about = "Check whether a website runs on Shopify")]
struct Cli {
    /// 检测服务根地址
    #[arg(long, env = "SHOPIFYORNOT_API", default_value = DEFAULT_API_BASE_URL, global = true)]
    api_base: String,

    /// 请求超时（秒）
    #[arg(long, default_value_t = 30, global = true)]
    timeout: u64,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a single website
    Check {
        /// Website URL or bare domain
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decode percent-encoded route segments and check the resulting URL
    Route {
        #[arg(required = true)]
        segments: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Show technical details (signals, shop domain, headers, timing)
    #[arg(long)]
    technical: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigManager::custom()
        .api_base_url(cli.api_base)
        .http_timeout(cli.timeout)
        .verbose(cli.verbose)
        .build();
    init_logging(&config);

    let session = CheckSession::from_config(&config).context("failed to create detection client")?;

    let (outcome, output) = match cli.command {
        Command::Check { url, output } => {
            session.set_url(url);
            (session.submit().await, output)
        }
        Command::Route { segments, output } => match session.sync_route(segments.as_slice()).await {
            Some(outcome) => (outcome, output),
            None => bail!("route did not resolve to a URL"),
        },
    };

    if output.technical {
        session.toggle_technical();
    }
    let state = session.snapshot();

    match outcome {
        SubmitOutcome::Completed(_) => print_result(&state, output.json),
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) | SubmitOutcome::Superseded => {
            bail!(state.error.unwrap_or_else(|| shopifyornot::FALLBACK_ERROR_MESSAGE.to_string()))
        }
    }
}

fn init_logging(config: &GlobalConfig) {
    let default_filter = if config.verbose { "warn,shopifyornot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(state: &SessionState, json: bool) -> Result<()> {
    let Some(result) = &state.result else {
        bail!("no result available");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("{}", result.message);
    println!("  URL:        {}", result.url);
    println!("  Confidence: {}", state.confidence_display());
    if !result.details.is_empty() {
        println!("  Details:    {}", result.details);
    }

    if state.show_technical {
        println!("  ---- technical ----");
        if let Some(domain) = &result.shop_domain {
            println!("  Shop domain: {}", domain);
        }
        if result.detected_signals.is_empty() {
            println!("  Signals:     none");
        } else {
            println!("  Signals:     {}", result.detected_signals.join(", "));
        }
        if let Some(headers) = &result.headers_sample {
            println!("  Headers:");
            for (name, value) in headers {
                println!("    {}: {}", name, value);
            }
        }
        if let Some(elapsed) = result.elapsed_ms {
            println!("  Elapsed:     {} ms", elapsed);
        }
    }

    Ok(())
}
