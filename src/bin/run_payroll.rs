//! Run net salary and employer cost for an entire payroll CSV
//!
//! Input format: employee_id,gross_salary,dependents,other_discounts
//! Outputs per-employee results plus aggregate totals for comparison
//! with the payroll provider's report.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use serde::Deserialize;

use brcalc::payroll::{employer_cost, net_salary, EmployerCostInput, NetSalaryInput};
use brcalc::tables::Tables;

/// One payroll input row
#[derive(Debug, Deserialize)]
struct PayrollRow {
    employee_id: u32,
    gross_salary: f64,
    dependents: u32,
    other_discounts: f64,
}

/// Computed output for one employee
#[derive(Debug)]
struct EmployeeResult {
    employee_id: u32,
    gross: f64,
    inss: f64,
    irrf: f64,
    net: f64,
    employer_cost: f64,
}

/// Aggregated payroll totals
#[derive(Debug, Default)]
struct Totals {
    gross: f64,
    inss: f64,
    irrf: f64,
    net: f64,
    employer_cost: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/payroll.csv".into())
        .into();

    let start = Instant::now();
    println!("Loading payroll from {}...", path.display());

    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    let rows: Vec<PayrollRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("parsing payroll rows")?;
    println!("Loaded {} employees in {:?}", rows.len(), start.elapsed());

    let tables = Tables::default_2024();

    let calc_start = Instant::now();
    let results: Vec<EmployeeResult> = rows
        .par_iter()
        .map(|row| -> Result<EmployeeResult, brcalc::CalcError> {
            let salary = net_salary::calculate(
                &tables,
                &NetSalaryInput {
                    gross_salary: row.gross_salary,
                    dependents: row.dependents,
                    other_discounts: row.other_discounts,
                    transport_voucher: 0.0,
                },
            )?;
            let cost = employer_cost::calculate(
                &tables,
                &EmployerCostInput {
                    gross_salary: row.gross_salary,
                    dependents: row.dependents,
                    include_provisions: true,
                },
            )?;
            Ok(EmployeeResult {
                employee_id: row.employee_id,
                gross: salary.gross_salary,
                inss: salary.inss.total,
                irrf: salary.irrf.tax,
                net: salary.net_salary,
                employer_cost: cost.total_monthly_cost,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .context("computing payroll")?;
    println!("Computed in {:?}", calc_start.elapsed());

    let mut totals = Totals::default();
    for result in &results {
        totals.gross += result.gross;
        totals.inss += result.inss;
        totals.irrf += result.irrf;
        totals.net += result.net;
        totals.employer_cost += result.employer_cost;
    }

    let output_path = "payroll_output.csv";
    let mut file = File::create(output_path).context("creating output file")?;
    writeln!(file, "EmployeeId,Gross,INSS,IRRF,Net,EmployerCost")?;
    for result in &results {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            result.employee_id, result.gross, result.inss, result.irrf, result.net,
            result.employer_cost,
        )?;
    }
    println!("Output written to {}", output_path);

    println!("\nPayroll Summary:");
    println!("  Employees:           {}", results.len());
    println!("  Total gross:         {:>14.2}", totals.gross);
    println!("  Total INSS:          {:>14.2}", totals.inss);
    println!("  Total IRRF:          {:>14.2}", totals.irrf);
    println!("  Total net:           {:>14.2}", totals.net);
    println!("  Total employer cost: {:>14.2}", totals.employer_cost);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
