//! One command-line invocation: read a request, write a result document.

use crate::aggregator::{Aggregator, Totals};
use crate::configuration::Configuration;
use crate::cost_estimator::CostEstimator;
use crate::diagnostics::DiagnosticReport;
use crate::errors::{CostModelError, RunError, RunResult};
use crate::reference_table::ReferenceTables;
use log::info;
use std::io::{Read, Write};
use std::path::Path;

/// What an invocation writes to its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Totals for the configuration read from the input.
    Estimate,
    /// Per-operation cost of every reference record. The input is not read.
    Diagnose,
}

/// Costs every layer requested by a configuration.
pub fn estimate_configuration(
    tables: &ReferenceTables,
    config: &Configuration,
    base_dir: &Path,
) -> RunResult<Totals> {
    let requests = config.requests(base_dir)?;
    info!(
        "Costing {} layers of network {}",
        requests.len(),
        config.network
    );

    let estimator = CostEstimator::new(tables);
    Ok(Aggregator::new(&estimator).aggregate(&requests)?)
}

/// Builds the reference tables and runs one invocation in the given mode.
///
/// Layer description files named by the configuration are resolved against
/// `base_dir`.
pub fn run<R: Read, W: Write>(mode: Mode, input: R, output: W, base_dir: &Path) -> RunResult<()> {
    let tables = ReferenceTables::published().map_err(CostModelError::from)?;

    match mode {
        Mode::Estimate => {
            let config = Configuration::from_reader(input)?;
            let totals = estimate_configuration(&tables, &config, base_dir)?;
            write_document(output, &totals)
        }
        Mode::Diagnose => {
            let report = DiagnosticReport::build(&tables)?;
            info!("Cost per operation of reference layers:\n{}", report);
            write_document(output, &report)
        }
    }
}

fn write_document<W: Write, T: serde::Serialize>(mut output: W, document: &T) -> RunResult<()> {
    serde_json::to_writer_pretty(&mut output, document)
        .map_err(|source| RunError::Output { source })?;
    writeln!(output).map_err(|e| RunError::Output {
        source: serde_json::Error::io(e),
    })
}
