use clap::Parser;
use final_newline::{
    EmptyFilePolicy, FixRecord, FixerConfig, FsStore, NewlineFixer, ReportWriter, TextEncoding,
};
use log::{error, warn};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "final-newline")]
#[command(version, about = "Append a trailing newline to text files that lack one")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Encoding the target files are decoded with
    #[arg(long, value_enum)]
    encoding: Option<TextEncoding>,
    /// What to do with empty files
    #[arg(long, value_enum)]
    empty: Option<EmptyFilePolicy>,
    /// Append a JSONL record per processed file to this report
    #[arg(long)]
    report: Option<PathBuf>,
    /// Files to fix
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<FixerConfig, final_newline::ConfigError> {
        let mut config = match &self.config {
            Some(path) => FixerConfig::load(path)?,
            None => FixerConfig::default(),
        };
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        if let Some(empty) = self.empty {
            config.empty_file = empty;
        }
        if let Some(report) = &self.report {
            config.report_path = Some(report.clone());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let fixer = NewlineFixer::new(FsStore, &config);
    let report = config
        .report_path
        .as_ref()
        .map(|p| ReportWriter::new(p, config.max_report_bytes));

    let mut failed = 0usize;
    for path in &cli.paths {
        let record = match fixer.fix_detailed(path) {
            Ok(fixed) => FixRecord::success(path, fixed.outcome, fixed.bytes_before, &fixed.content),
            Err(e) => {
                error!("{}: {e}", path.display());
                failed += 1;
                FixRecord::failure(path, &e)
            }
        };
        if let Some(report) = &report {
            if let Err(e) = report.append(&record) {
                warn!("could not write report {}: {e}", report.path().display());
            }
        }
    }

    if failed > 0 {
        error!("{failed} of {} file(s) failed", cli.paths.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
