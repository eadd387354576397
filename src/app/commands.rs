use crate::core::adder;
use crate::core::printer::write_point;
use crate::domain::model::{OverflowPolicy, Point};
use crate::utils::error::Result;
use std::io::Write;

/// Writes `a + b = sum`, or the `Sum` as JSON.
pub fn run_add<W: Write>(out: &mut W, policy: OverflowPolicy, a: i32, b: i32, json: bool) -> Result<()> {
    let sum = adder::sum(policy, a, b)?;
    if json {
        serde_json::to_writer(&mut *out, &sum)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", sum)?;
    }
    tracing::debug!("Computed {}", sum);
    Ok(())
}

pub fn run_point<W: Write>(out: &mut W, p: Point, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &p)?;
        writeln!(out)?;
        return Ok(());
    }
    write_point(out, p)
}

/// The stock walkthrough: one addition, then one point.
pub fn run_demo<W: Write>(out: &mut W, policy: OverflowPolicy, json: bool) -> Result<()> {
    run_add(out, policy, 2, 3, json)?;
    run_point(out, Point::new(10, 20), json)
}
