use self::cli::{App, AppSubcommand, DataArgs};
use clap::Parser;
use lrn_cli::config::DataApiConfig;
use lrn_cli::dispatch::{read_request, Dispatcher};
use lrn_cli::error::CliError;
use lrn_cli::http::DataApiHttp;
use lrn_cli::logging;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tokio::runtime::Runtime;

mod cli;

fn main() -> ExitCode {
    let app = App::parse();

    let levels = logging::parse_level(&app.log_level)
        .and_then(|level| Ok((level, logging::parse_level(&app.requests_log_level)?)));
    let (level, http_level) = match levels {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    tracing::subscriber::with_default(logging::subscriber(level, http_level), || {
        let config = app.config();
        let ok = match &app.subcommand {
            AppSubcommand::Data(args) => data(&config, args),
        };
        if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    })
}

fn data(config: &DataApiConfig, args: &DataArgs) -> bool {
    let url = config.endpoint(&args.endpoint_url);

    tracing::debug!("Reading request json ...");
    let request = match load_request(args) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(file = %args.file.display(), "Failed to read request json: {}", e);
            return false;
        }
    };

    let (transport, runtime) = match setup() {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("Failed to prepare request: {}", e);
            return false;
        }
    };

    let dispatcher = Dispatcher::new(config, transport);
    let stdout = io::stdout();
    runtime.block_on(dispatcher.dispatch(&url, &request, args.action, &mut stdout.lock()))
}

fn setup() -> Result<(DataApiHttp, Runtime), CliError> {
    let transport = DataApiHttp::new()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok((transport, runtime))
}

fn load_request(args: &DataArgs) -> Result<Value, CliError> {
    if args.file.as_os_str() == "-" {
        read_request(io::stdin().lock())
    } else {
        read_request(BufReader::new(File::open(&args.file)?))
    }
}
