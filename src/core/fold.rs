use crate::core::{Combiner, FoldReport, FoldStep, Result, TraceSink};
use crate::utils::error::ReduceError;

/// `acc + value`, rejecting `i64` overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Combiner for Add {
    fn combine(&self, acc: i64, value: i64) -> Result<i64> {
        acc.checked_add(value)
            .ok_or(ReduceError::Overflow { acc, value })
    }
}

/// Left fold of `values` starting from `initial`.
///
/// Every step is handed to `sink` before the combiner runs, so the trace of
/// the operands always precedes the value they produce. On overflow the
/// failing step has already been traced.
pub fn fold_traced<C, S>(
    values: &[i64],
    initial: i64,
    combiner: &C,
    sink: &mut S,
) -> Result<FoldReport>
where
    C: Combiner + ?Sized,
    S: TraceSink + ?Sized,
{
    let mut acc = initial;
    let mut steps = Vec::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        let step = FoldStep { index, acc, value };
        sink.record_step(&step)?;
        acc = combiner.combine(acc, value)?;
        tracing::trace!("step {}: {} + {} = {}", index, step.acc, value, acc);
        steps.push(step);
    }

    Ok(FoldReport {
        initial,
        steps,
        result: acc,
    })
}
