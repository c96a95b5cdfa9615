use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use vecdist::{DistanceViewModel, Field, LogSink, MemorySink, Metric, TxtLogger, ViewModelConfig};

/// Distance between two vectors, with a change log
#[derive(Parser, Debug)]
#[command(name = "vecdist")]
#[command(about = "Compute Chebyshev or Minkowski distance between two 2-D vectors", long_about = None)]
struct Args {
    /// Path to the change log file; kept in memory when omitted
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Continue an existing log file instead of truncating it
    #[arg(long, requires = "log_file")]
    resume: bool,

    /// Minkowski order used while the dim field is empty
    #[arg(long, default_value_t = 1)]
    default_order: u32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

const HELP: &str = "\
Commands:
  vec1x|vec1y|vec2x|vec2y|dim [TEXT]   set a field (no TEXT clears it)
  metric chebyshev|minkowski           select the metric
  calc                                 calculate the distance
  status                               show status and result
  log                                  show the change log
  state                                show the full state as JSON
  help                                 show this message
  quit                                 exit";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting vecdist v{}", env!("CARGO_PKG_VERSION"));

    let sink: Arc<dyn LogSink> = match &args.log_file {
        Some(path) => {
            let logger = if args.resume {
                TxtLogger::open(path).with_context(|| format!("opening log {:?}", path))?
            } else {
                TxtLogger::new(path).with_context(|| format!("creating log {:?}", path))?
            };
            info!("Change log: {:?}", logger.path());
            Arc::new(logger)
        }
        None => {
            info!("Change log: in memory");
            Arc::new(MemorySink::new())
        }
    };

    let config = ViewModelConfig {
        default_order: args.default_order,
    };
    let mut vm = if args.resume {
        DistanceViewModel::resume(Some(sink), config)?
    } else {
        DistanceViewModel::with_config(Some(sink), config)?
    };

    println!("{}", HELP);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match run_command(&mut vm, line.trim())? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    info!("Shutting down...");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn run_command(vm: &mut DistanceViewModel, line: &str) -> anyhow::Result<Flow> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => println!("{}", HELP),
        "calc" => {
            vm.calculate();
            print_status(vm);
        }
        "status" => print_status(vm),
        "log" => print!("{}", vm.logs()),
        "state" => println!("{}", serde_json::to_string_pretty(&vm.state())?),
        "metric" => match rest.parse::<Metric>() {
            Ok(metric) => {
                let old = vm.metric();
                vm.set_metric(metric);
                vm.on_metric_changed(old, metric);
                print_status(vm);
            }
            Err(e) => warn!("{}", e),
        },
        other => match other.parse::<Field>() {
            Ok(field) => {
                // One command is one edit session: focus enters, the text changes, focus leaves
                vm.set_field(field, rest);
                vm.on_focus_changed(true, false);
                print_status(vm);
            }
            Err(e) => warn!("{} (try 'help')", e),
        },
    }
    Ok(Flow::Continue)
}

fn print_status(vm: &DistanceViewModel) {
    if vm.result().is_empty() {
        println!("[{}] {}", vm.status(), vm.status().description());
    } else {
        println!("[{}] {} | result = {}", vm.status(), vm.status().description(), vm.result());
    }
}
