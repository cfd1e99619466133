mod bootstrap;

use std::{borrow::Cow, env, fs, path::Path, process};

use bootstrap::{AppConfig, init_logging};
use cashup_application::{CashupProcessor, LedgerParser, Report};
use cashup_infrastructure::{CashupScriptParser, JsonLedgerParser};
use cashup_presentation::{GroupPresenter, SettlementPresenter, format_cashup_error};

type CliResult<T> = Result<T, Cow<'static, str>>;

static SCRIPT_PARSER: CashupScriptParser = CashupScriptParser;
static JSON_PARSER: JsonLedgerParser = JsonLedgerParser;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: cashup_interpreter <ledger-file>".into());
    };

    let config = AppConfig::from_env();
    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let processor = CashupProcessor::new(parser_for(Path::new(&path)));
    tracing::debug!(path = %path, "Processing ledger");

    let reports = processor
        .parse_ledger(&source)
        .and_then(|ledger| processor.run(&ledger))
        .map_err(|err| format_cashup_error(&err, &config.currency))?;

    let output: Vec<String> = reports
        .iter()
        .map(|report| match report {
            Report::Summary(summary) => GroupPresenter::render(summary, &config.currency),
            Report::Settlement(result) => SettlementPresenter::render(result, &config.currency),
        })
        .collect();
    println!("{}", output.join("\n\n"));

    Ok(())
}

fn parser_for(path: &Path) -> &'static dyn LedgerParser {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return &JSON_PARSER;
    }
    &SCRIPT_PARSER
}
