//! One-shot price estimate from the command line.
//!
//! Runs the same validation and inference path as the HTTP service and
//! prints the response body as JSON.

use carprice::application::ml::load_predictor;
use carprice::application::pricing::PricingService;
use carprice::domain::pricing::FeatureVector;
use carprice::interfaces::http::responses::PredictionResponse;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model artifact (.json or .onnx)
    #[arg(long, env = "MODEL_PATH", default_value = "model_mobil.json")]
    model: PathBuf,

    /// Vehicle year
    #[arg(long)]
    tahun: f64,

    /// Odometer reading in kilometres
    #[arg(long)]
    km: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let service = PricingService::new(load_predictor(&args.model)?);
    let result = FeatureVector::new(args.tahun, args.km).and_then(|fv| service.quote(fv));
    let response = PredictionResponse::from_result(&result);

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
