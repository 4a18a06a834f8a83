//! Core optimization engine for bounded-welding, one-dimensional steel
//! cutting-stock planning.
//!
//! Given a catalog of required finished parts and a catalog of available
//! stock lengths, [`optimize`] produces a cutting plan that minimizes waste
//! subject to a bounded welding budget and a waste threshold. The crate is
//! an in-process library: it has no transport, no persistence, and no UI —
//! those are host concerns (spec §1). The only entry point is [`optimize`].

pub mod constants;
mod coordinator;
pub mod errors;
mod finalizer;
pub mod grouping;
mod group_optimizer;
pub mod logging;
pub mod models;
mod mwcd;
mod packer;
pub mod pools;
pub mod request;
pub mod result;
pub mod statistics;
pub mod validation;

use coordinator::ParallelCoordinator;
use finalizer::RemainderFinalizer;
use models::{distinct_lengths, GroupSolution};
use request::OptimizeRequest;
use result::{OptimizeResult, ResultBuilder};
use statistics::StatisticsCalculator;
use std::collections::BTreeMap;
use std::time::Instant;
use validation::ConstraintValidator;
use crate::{log_info, log_warn};

/// Runs the full pipeline of spec §2: validate, group, fan out a packer +
/// MWCD local search per group, finalize surviving remainders, compute
/// statistics, and assemble the result.
///
/// Never panics and never returns an error across the crate boundary (spec
/// §6): a rejected input is reported inside `OptimizeResult.error`, not
/// raised, and every builder invariant below is guaranteed satisfied by
/// this function's own call order.
pub fn optimize(request: OptimizeRequest) -> OptimizeResult {
    let start = Instant::now();

    let constraint_validation =
        ConstraintValidator::validate(&request.design_parts, &request.module_bars, &request.constraints);

    if !constraint_validation.is_valid {
        log_warn!("optimize: rejected by ConstraintValidator ({} violation(s))", constraint_validation.violations.len());
        return ResultBuilder::build_rejected(constraint_validation, start.elapsed().as_millis() as u64);
    }

    let groups = grouping::group_parts(&request.design_parts);
    let catalog_lengths = distinct_lengths(&request.module_bars);

    let (mut outcomes, monitor) = ParallelCoordinator::run(&groups, &catalog_lengths, &request.constraints);
    log_info!(
        "optimize: {} group(s), speedup {:.2}, efficiency {:.2} ({})",
        monitor.task_count(), monitor.speedup(), monitor.efficiency(), monitor.rating().as_str()
    );

    RemainderFinalizer::finalize(&mut outcomes, request.constraints.waste_threshold);

    let complete_stats = StatisticsCalculator::calculate(&outcomes, &request.design_parts);

    let solutions: BTreeMap<String, GroupSolution> = outcomes
        .into_iter()
        .map(|(key, outcome)| (key.to_string(), outcome.solution))
        .collect();

    ResultBuilder::new()
        .set_solutions(solutions)
        .set_complete_stats(complete_stats)
        .set_constraint_validation(constraint_validation)
        .set_execution_time_ms(start.elapsed().as_millis() as u64)
        .build()
        .expect("optimize() always supplies every required ResultBuilder field")
}
