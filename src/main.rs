use ct_write_handler::config::{Config, InvokeFile, FUNCTION_NAME};
use ct_write_handler::handler::RequestHandler;
use ct_write_handler::lambda;
use ct_write_handler::logs;
use ct_write_handler::util;
use lambda_runtime::{Context, LambdaEvent};
use log::LevelFilter;
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

/// Invokes the CtWriteLambda handler locally and prints its result and logs
#[derive(StructOpt, Debug)]
struct Opt {
    /// Settings file whose [env] table is applied before -e values
    /// (e.g. Lambda.toml)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Set environment variables for the invocation (for eg. -e LOG_LEVEL=DEBUG)
    #[structopt(short, long, parse(try_from_str = util::parse_env_pair))]
    env: Vec<(String, String)>,
    /// Don't inherit variables from this process's environment
    #[structopt(long)]
    clean_env: bool,
    /// Event payload handed to the function (must be valid JSON, ignored by the handler)
    #[structopt(long, default_value = "{}")]
    event: String,
    /// Print the result on a single line
    #[structopt(long)]
    compact: bool,
}

fn main() {
    let opt = Opt::from_args();

    let file = match &opt.config {
        Some(path) => match InvokeFile::load(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => InvokeFile::default(),
    };

    let payload: Value = match serde_json::from_str(&opt.event) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("--event is not valid JSON: {}", e);
            process::exit(1);
        }
    };

    let config = Config::from_sources(file, &opt.env, !opt.clean_env);
    println!(
        "Invoking {} with LOG_LEVEL {}",
        FUNCTION_NAME,
        config
            .log_level
            .as_deref()
            .map(|level| format!("{:?}", level))
            .unwrap_or_else(|| "unset".to_owned())
    );

    // Installed globally so records from the runtime glue are captured too.
    let captured = match logs::init_memory(LevelFilter::Trace) {
        Ok(captured) => captured,
        Err(e) => {
            eprintln!("Failed to install logger: {}", e);
            process::exit(1);
        }
    };

    let handler = RequestHandler::new(config, captured);
    let result = lambda::invoke(&handler, LambdaEvent::new(payload, Context::default()));

    let rendered = if opt.compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    };
    match rendered {
        Ok(text) => {
            println!("\n===== Invocation result =====");
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("Failed to serialize result:\n{:?}", e);
            process::exit(1);
        }
    }

    println!("\n===== Logs =====");
    for record in captured.take() {
        println!("{}", record);
    }
}
