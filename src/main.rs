//! brcalc CLI
//!
//! One subcommand per calculator. Schedule-producing commands print the
//! leading rows to the console and can dump the full schedule to CSV.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use brcalc::financing::{self, AmortizationSystem, ConsortiumInput, LoanInput, LoanSchedule};
use brcalc::health::{self, GrowthAssessment, GrowthInput};
use brcalc::investment::{
    self, CompoundInput, EmergencyInput, GoalInput, RatePeriod, SimpleInput, DEFAULT_TARGET,
};
use brcalc::payroll::{
    self, CltPjInput, EmployerCostInput, NetSalaryInput, NoticeKind, PjRegime, RaiseInput, Regime,
    SeveranceInput, TerminationKind,
};
use brcalc::payroll::EntryKind;
use brcalc::tables::{Sex, Tables};

#[derive(Parser)]
#[command(name = "brcalc", version, about = "Brazilian finance and health calculators")]
struct Cli {
    /// Load bracket/LMS tables from CSV files in this directory
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum RateKindArg {
    Monthly,
    Annual,
}

impl From<RateKindArg> for RatePeriod {
    fn from(value: RateKindArg) -> Self {
        match value {
            RateKindArg::Monthly => RatePeriod::Monthly,
            RateKindArg::Annual => RatePeriod::Annual,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SystemArg {
    Price,
    Sac,
}

#[derive(Clone, Copy, ValueEnum)]
enum RegimeArg {
    Mei,
    Simples3,
    Simples5,
}

#[derive(Clone, Copy, ValueEnum)]
enum TerminationArg {
    WithoutCause,
    ForCause,
    Resignation,
    Agreement,
}

#[derive(Clone, Copy, ValueEnum)]
enum NoticeArg {
    Indemnified,
    Worked,
    NotServed,
}

#[derive(Clone, Copy, ValueEnum)]
enum SexArg {
    Boy,
    Girl,
}

#[derive(Subcommand)]
enum Command {
    /// Net salary under the CLT regime
    NetSalary {
        #[arg(long)]
        gross: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        #[arg(long, default_value_t = 0.0)]
        other_discounts: f64,
        #[arg(long, default_value_t = 0.0)]
        transport_voucher: f64,
    },
    /// Employment termination ledger
    Severance {
        #[arg(long)]
        salary: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        /// Admission date (YYYY-MM-DD)
        #[arg(long)]
        admission: NaiveDate,
        /// Dismissal date (YYYY-MM-DD)
        #[arg(long)]
        dismissal: NaiveDate,
        #[arg(long, value_enum, default_value = "without-cause")]
        termination: TerminationArg,
        #[arg(long, value_enum, default_value = "indemnified")]
        notice: NoticeArg,
        /// A full overdue vacation period is pending
        #[arg(long)]
        pending_vacation: bool,
        /// Leave the proportional 13th out of the ledger
        #[arg(long)]
        skip_thirteenth: bool,
        /// Leave the proportional vacation out of the ledger
        #[arg(long)]
        skip_vacation: bool,
        /// Leave the FGTS penalty estimate out
        #[arg(long)]
        skip_fgts_penalty: bool,
    },
    /// Real employer cost of a CLT employee
    EmployerCost {
        #[arg(long)]
        gross: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        /// Include monthly 13th/vacation provisions
        #[arg(long)]
        provisions: bool,
    },
    /// CLT vs PJ take-home comparison
    CltPj {
        #[arg(long)]
        clt_gross: f64,
        #[arg(long, default_value_t = 0.0)]
        clt_benefits: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        #[arg(long)]
        pj_billing: f64,
        #[arg(long, value_enum, default_value = "simples3")]
        pj_regime: RegimeArg,
        #[arg(long, default_value_t = 0.0)]
        pro_labore: f64,
        #[arg(long, default_value_t = 0.0)]
        accounting: f64,
    },
    /// Real effect of a salary raise
    Raise {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        new: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
    },
    /// Compound interest projection
    Compound {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, value_enum, default_value = "annual")]
        rate_kind: RateKindArg,
        #[arg(long)]
        months: u32,
        /// Write the full schedule to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Simple (linear) interest projection
    Simple {
        #[arg(long)]
        initial: f64,
        /// Rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, value_enum, default_value = "annual")]
        rate_kind: RateKindArg,
        #[arg(long)]
        months: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Months until savings reach a target
    Goal {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, value_enum, default_value = "annual")]
        rate_kind: RateKindArg,
        #[arg(long, default_value_t = DEFAULT_TARGET)]
        target: f64,
    },
    /// Emergency reserve sizing
    Reserve {
        #[arg(long)]
        expenses: f64,
        #[arg(long, default_value_t = 6)]
        months: u32,
    },
    /// Loan amortization schedule (Price or SAC)
    Loan {
        #[arg(long)]
        value: f64,
        #[arg(long, default_value_t = 0.0)]
        down_payment: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        #[arg(long, value_enum, default_value = "price")]
        system: SystemArg,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Consortium plan simulation
    Consortium {
        #[arg(long)]
        letter: f64,
        #[arg(long)]
        months: u32,
        /// Administration fee over the whole term, in percent
        #[arg(long)]
        admin_rate: f64,
        /// Reserve fund over the whole term, in percent
        #[arg(long, default_value_t = 0.0)]
        reserve_rate: f64,
        #[arg(long, default_value_t = 0.0)]
        bid: f64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Body mass index
    Bmi {
        #[arg(long)]
        weight: f64,
        /// Height in centimeters
        #[arg(long)]
        height: f64,
    },
    /// WHO child growth assessment (0-24 months)
    Growth {
        #[arg(long, value_enum)]
        sex: SexArg,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: NaiveDate,
        /// Measurement date (YYYY-MM-DD)
        #[arg(long)]
        measured: NaiveDate,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        length: Option<f64>,
        #[arg(long)]
        head: Option<f64>,
        /// Gestational weeks at birth, for prematurity correction
        #[arg(long)]
        gestational_weeks: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let tables = match &cli.tables {
        Some(dir) => Tables::from_csv_path(dir)
            .with_context(|| format!("loading tables from {}", dir.display()))?,
        None => Tables::default_2024(),
    };

    match cli.command {
        Command::NetSalary { gross, dependents, other_discounts, transport_voucher } => {
            let result = payroll::net_salary::calculate(
                &tables,
                &NetSalaryInput {
                    gross_salary: gross,
                    dependents,
                    other_discounts,
                    transport_voucher,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Net Salary");
            println!("==========\n");
            println!("  Gross salary:    {:>12.2}", result.gross_salary);
            for line in &result.inss.lines {
                println!(
                    "    INSS {:>7.2} - {:>8.2} at {:>4.1}%: {:>10.2}",
                    line.lower_limit,
                    line.upper_limit,
                    line.rate * 100.0,
                    line.amount
                );
            }
            println!("  INSS:            {:>12.2}", result.inss.total);
            println!(
                "  IRRF:            {:>12.2}  ({} deduction, base {:.2})",
                result.irrf.tax,
                if result.irrf.used_simplified { "simplified" } else { "standard" },
                if result.irrf.used_simplified {
                    result.irrf.simplified_base
                } else {
                    result.irrf.standard_base
                }
            );
            println!(
                "  Other discounts: {:>12.2}",
                result.other_discounts + result.transport_voucher
            );
            println!("  Net salary:      {:>12.2}", result.net_salary);

            let annual = result.annual_totals();
            println!("\nAnnual totals (12 months):");
            println!(
                "  Gross {:.2}  INSS {:.2}  IRRF {:.2}  Net {:.2}",
                annual.gross, annual.inss, annual.irrf, annual.net
            );
        }

        Command::Severance {
            salary,
            dependents,
            admission,
            dismissal,
            termination,
            notice,
            pending_vacation,
            skip_thirteenth,
            skip_vacation,
            skip_fgts_penalty,
        } => {
            let result = payroll::severance::calculate(
                &tables,
                &SeveranceInput {
                    monthly_salary: salary,
                    dependents,
                    admission,
                    dismissal,
                    termination: match termination {
                        TerminationArg::WithoutCause => TerminationKind::WithoutCause,
                        TerminationArg::ForCause => TerminationKind::ForCause,
                        TerminationArg::Resignation => TerminationKind::Resignation,
                        TerminationArg::Agreement => TerminationKind::MutualAgreement,
                    },
                    notice: match notice {
                        NoticeArg::Indemnified => NoticeKind::Indemnified,
                        NoticeArg::Worked => NoticeKind::Worked,
                        NoticeArg::NotServed => NoticeKind::NotServed,
                    },
                    pending_vacation,
                    include_thirteenth: !skip_thirteenth,
                    include_vacation: !skip_vacation,
                    include_fgts_penalty: !skip_fgts_penalty,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Severance");
            println!("=========\n");
            println!("{:<44} {:>12} {:>12}", "Item", "Earnings", "Deductions");
            println!("{}", "-".repeat(70));
            for entry in &result.entries {
                match entry.kind {
                    EntryKind::Earning => {
                        println!("{:<44} {:>12.2} {:>12}", entry.label, entry.amount, "-")
                    }
                    EntryKind::Deduction => {
                        println!("{:<44} {:>12} {:>12.2}", entry.label, "-", entry.amount)
                    }
                }
            }
            println!("{}", "-".repeat(70));
            println!(
                "{:<44} {:>12.2} {:>12.2}",
                "Totals", result.total_earnings, result.total_deductions
            );
            println!("\n  Net total:    {:>12.2}", result.net_total);
            println!("  FGTS penalty: {:>12.2} (paid into the FGTS account)", result.fgts_penalty);
        }

        Command::EmployerCost { gross, dependents, provisions } => {
            let result = payroll::employer_cost::calculate(
                &tables,
                &EmployerCostInput {
                    gross_salary: gross,
                    dependents,
                    include_provisions: provisions,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Employer Cost");
            println!("=============\n");
            println!("  Gross salary:            {:>12.2}", result.gross_salary);
            println!("  Employee INSS:           {:>12.2}", result.employee_inss);
            println!("  Employee IRRF:           {:>12.2}", result.employee_irrf);
            println!("  Net salary:              {:>12.2}", result.net_salary);
            println!();
            println!("  Employer INSS (20%):     {:>12.2}", result.employer_inss);
            println!("  FGTS (8%):               {:>12.2}", result.fgts);
            println!("  FGTS penalty prov (3.2%):{:>12.2}", result.fgts_penalty_provision);
            println!("  RAT + third parties (3%):{:>12.2}", result.rat_third_parties);
            if provisions {
                println!("  13th provision:          {:>12.2}", result.thirteenth_provision);
                println!("  Vacation provision:      {:>12.2}", result.vacation_provision);
            }
            println!();
            println!("  Total monthly cost:      {:>12.2}", result.total_monthly_cost);
            println!("  Total annual cost:       {:>12.2}", result.total_annual_cost);
            println!("  Taxes and charges share: {:>11.1}%", result.tax_impact_pct);
        }

        Command::CltPj {
            clt_gross,
            clt_benefits,
            dependents,
            pj_billing,
            pj_regime,
            pro_labore,
            accounting,
        } => {
            let result = payroll::clt_pj::compare(
                &tables,
                &CltPjInput {
                    clt_gross_salary: clt_gross,
                    clt_benefits,
                    clt_dependents: dependents,
                    pj_monthly_billing: pj_billing,
                    pj_regime: match pj_regime {
                        RegimeArg::Mei => PjRegime::Mei,
                        RegimeArg::Simples3 => PjRegime::SimplesAnexo3,
                        RegimeArg::Simples5 => PjRegime::SimplesAnexo5,
                    },
                    pj_pro_labore: pro_labore,
                    pj_accounting_fee: accounting,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("CLT vs PJ");
            println!("=========\n");
            println!("  CLT net salary:    {:>12.2}", result.clt.net_salary);
            println!("  CLT FGTS:          {:>12.2}", result.clt.fgts);
            println!("  CLT benefits:      {:>12.2}", result.clt.benefits);
            println!("  CLT monthly total: {:>12.2}", result.clt.monthly_total);
            println!("  CLT annual total:  {:>12.2}", result.clt.annual_total);
            println!();
            println!("  PJ regime tax:     {:>12.2}", result.pj.regime_tax);
            println!("  PJ partner INSS:   {:>12.2}", result.pj.pro_labore_inss);
            println!("  PJ partner IRRF:   {:>12.2}", result.pj.pro_labore_irrf);
            println!("  PJ accounting:     {:>12.2}", result.pj.accounting_fee);
            println!("  PJ monthly total:  {:>12.2}", result.pj.monthly_total);
            println!("  PJ annual total:   {:>12.2}", result.pj.annual_total);
            println!();
            println!(
                "  {} comes out ahead by {:.2}/month ({:.2}/year)",
                match result.winner {
                    Regime::Clt => "CLT",
                    Regime::Pj => "PJ",
                },
                result.monthly_difference,
                result.annual_difference
            );
        }

        Command::Raise { current, new, dependents } => {
            let result = payroll::raise::calculate(
                &tables,
                &RaiseInput {
                    current_gross: current,
                    new_gross: new,
                    dependents,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Salary Raise");
            println!("============\n");
            println!(
                "  Current: gross {:>10.2}  INSS {:>8.2}  IRRF {:>8.2}  net {:>10.2}",
                result.current.gross, result.current.inss, result.current.irrf, result.current.net
            );
            println!(
                "  New:     gross {:>10.2}  INSS {:>8.2}  IRRF {:>8.2}  net {:>10.2}",
                result.new.gross, result.new.inss, result.new.irrf, result.new.net
            );
            println!();
            println!("  Gross increase:  {:>10.2}", result.gross_delta);
            println!("  Net increase:    {:>10.2} ({:.2}%)", result.net_delta, result.net_growth_pct);
            println!("  Taken by taxes:  {:>10.2}", result.tax_on_increase);
        }

        Command::Compound { initial, monthly, rate, rate_kind, months, output } => {
            let result = investment::compound::project(&CompoundInput {
                initial,
                monthly_contribution: monthly,
                rate: rate / 100.0,
                rate_period: rate_kind.into(),
                months,
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Compound Interest ({} months)", months);
            println!("{:>5} {:>12} {:>14} {:>14}", "Month", "Interest", "Invested", "Balance");
            println!("{}", "-".repeat(48));
            for row in result.rows.iter().take(24) {
                println!(
                    "{:>5} {:>12.2} {:>14.2} {:>14.2}",
                    row.month, row.interest, row.total_invested, row.balance
                );
            }
            if result.rows.len() > 24 {
                println!("... ({} more months)", result.rows.len() - 24);
            }
            println!("\n  Total invested: {:>14.2}", result.total_invested);
            println!("  Total interest: {:>14.2}", result.total_interest);
            println!("  Final balance:  {:>14.2}", result.final_balance);

            if let Some(path) = output {
                write_rows_csv(&path, &result.rows)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }

        Command::Simple { initial, rate, rate_kind, months, output } => {
            let result = investment::simple::project(&SimpleInput {
                initial,
                rate: rate / 100.0,
                rate_period: rate_kind.into(),
                months,
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Simple Interest ({} months)", months);
            println!("{:>5} {:>12} {:>14} {:>14}", "Month", "Interest", "Principal", "Balance");
            println!("{}", "-".repeat(48));
            for row in result.rows.iter().take(24) {
                println!(
                    "{:>5} {:>12.2} {:>14.2} {:>14.2}",
                    row.month, row.interest, row.total_invested, row.balance
                );
            }
            if result.rows.len() > 24 {
                println!("... ({} more months)", result.rows.len() - 24);
            }
            println!("\n  Total interest: {:>14.2}", result.total_interest);
            println!("  Final balance:  {:>14.2}", result.final_balance);

            if let Some(path) = output {
                write_rows_csv(&path, &result.rows)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }

        Command::Goal { initial, monthly, rate, rate_kind, target } => {
            let result = investment::goal::simulate(&GoalInput {
                initial,
                monthly_contribution: monthly,
                rate: rate / 100.0,
                rate_period: rate_kind.into(),
                target,
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Time to Target ({:.2})", target);
            println!("====================\n");
            match result.years_and_months() {
                Some((years, months)) => {
                    println!("  Time needed: {} years and {} months", years, months)
                }
                None => println!("  Target not reached within 100 years"),
            }
            println!("  Total invested: {:>14.2}", result.total_invested);
            println!("  Total interest: {:>14.2}", result.total_interest);
            println!("  Final balance:  {:>14.2}", result.final_balance);

            println!("\n{:>5} {:>14} {:>14} {:>14}", "Year", "Invested", "Interest", "Balance");
            for snapshot in result.yearly.iter().take(20) {
                println!(
                    "{:>5} {:>14.2} {:>14.2} {:>14.2}",
                    snapshot.year, snapshot.total_invested, snapshot.accrued_interest, snapshot.balance
                );
            }
            if result.yearly.len() > 20 {
                println!("... ({} more years)", result.yearly.len() - 20);
            }
        }

        Command::Reserve { expenses, months } => {
            let result = investment::emergency::calculate(&EmergencyInput {
                monthly_expenses: expenses,
                coverage_months: months,
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Emergency Reserve");
            println!("=================\n");
            println!("  Monthly expenses: {:>12.2}", result.monthly_expenses);
            println!("  Coverage:         {:>9} months", result.coverage_months);
            println!("  Total reserve:    {:>12.2}", result.total_reserve);
            println!("\nScenarios:");
            for scenario in &result.scenarios {
                println!(
                    "  {:<10} ({:>2} months): {:>12.2}",
                    scenario.label, scenario.months, scenario.amount
                );
            }
        }

        Command::Loan { value, down_payment, rate, months, system, output } => {
            let schedule = LoanSchedule::generate(&LoanInput {
                loan_value: value,
                down_payment,
                annual_rate: rate / 100.0,
                months,
                system: match system {
                    SystemArg::Price => AmortizationSystem::Price,
                    SystemArg::Sac => AmortizationSystem::Sac,
                },
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
                return Ok(());
            }

            println!(
                "Loan Schedule ({:?}, {} months, {:.4}%/month)",
                schedule.system,
                months,
                schedule.monthly_rate * 100.0
            );
            println!(
                "{:>5} {:>12} {:>14} {:>12} {:>14}",
                "Month", "Installment", "Amortization", "Interest", "Balance"
            );
            println!("{}", "-".repeat(62));
            for row in schedule.rows.iter().take(24) {
                println!(
                    "{:>5} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
                    row.month, row.installment, row.amortization, row.interest, row.balance
                );
            }
            if schedule.rows.len() > 24 {
                println!("... ({} more months)", schedule.rows.len() - 24);
            }
            println!("\n  Principal:      {:>14.2}", schedule.principal);
            println!("  Total paid:     {:>14.2}", schedule.total_paid);
            println!("  Total interest: {:>14.2}", schedule.total_interest);

            if let Some(path) = output {
                write_loan_csv(&path, &schedule)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }

        Command::Consortium { letter, months, admin_rate, reserve_rate, bid, output } => {
            let result = financing::consortium::simulate(&ConsortiumInput {
                letter_value: letter,
                months,
                admin_rate: admin_rate / 100.0,
                reserve_rate: reserve_rate / 100.0,
                bid,
            })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("Consortium ({} months)", months);
            println!("======================\n");
            println!("  Letter of credit: {:>12.2}", result.letter_value);
            println!("  Admin fee:        {:>12.2}", result.admin_fee);
            println!("  Reserve fund:     {:>12.2}", result.reserve_fund);
            println!("  Total cost:       {:>12.2}", result.total_cost);
            println!(
                "  Installment:      {:>12.2} ({:.2} common + {:.2} fees)",
                result.installment, result.monthly_common, result.monthly_fees
            );
            if let Some(outcome) = &result.bid {
                println!(
                    "  With bid {:.2}: new installment {:.2} (saves {:.2}/month)",
                    outcome.applied_bid, outcome.new_installment, outcome.monthly_saving
                );
            }

            if let Some(path) = output {
                write_consortium_csv(&path, &result)?;
                println!("\nFull schedule written to: {}", path.display());
            }
        }

        Command::Bmi { weight, height } => {
            let result = health::bmi(weight, height)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("BMI: {:.2} ({:?})", result.bmi, result.class);
            println!(
                "Healthy adult range: {:.1} - {:.1}",
                health::IDEAL_BMI_RANGE.0,
                health::IDEAL_BMI_RANGE.1
            );
        }

        Command::Growth { sex, birth, measured, weight, length, head, gestational_weeks } => {
            let result = health::growth::assess(
                &tables.growth,
                &GrowthInput {
                    sex: match sex {
                        SexArg::Boy => Sex::Male,
                        SexArg::Girl => Sex::Female,
                    },
                    birth,
                    measured,
                    weight_kg: weight,
                    length_cm: length,
                    head_circumference_cm: head,
                    gestational_weeks,
                },
            )?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            match result {
                GrowthAssessment::PreTerm { chronological_age, weeks_to_term } => {
                    println!(
                        "Age: {} months and {} days",
                        chronological_age.months, chronological_age.days
                    );
                    println!(
                        "Corrected age is still pre-term (about {} weeks to the term date).",
                        weeks_to_term
                    );
                    println!("The 0-24 month reference applies from term onwards.");
                }
                GrowthAssessment::Report { chronological_age, corrected_age, indicators, .. } => {
                    println!(
                        "Age: {} months and {} days",
                        chronological_age.months, chronological_age.days
                    );
                    if let Some(corrected) = corrected_age {
                        println!(
                            "Corrected age: {} months and {} days",
                            corrected.months, corrected.days
                        );
                    }
                    println!("\n{:<28} {:>10} {:>8} {}", "Indicator", "Value", "Z", "Class");
                    println!("{}", "-".repeat(62));
                    for indicator in &indicators {
                        println!(
                            "{:<28} {:>10.2} {:>+8.2} {:?}",
                            format!("{:?}", indicator.metric),
                            indicator.measurement,
                            indicator.z_score,
                            indicator.classification
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn write_rows_csv(path: &PathBuf, rows: &[investment::ProjectionRow]) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Interest,Invested,Balance")?;
    for row in rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            row.month, row.interest, row.total_invested, row.balance
        )?;
    }
    Ok(())
}

fn write_loan_csv(path: &PathBuf, schedule: &LoanSchedule) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Installment,Amortization,Interest,Balance")?;
    for row in &schedule.rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.month, row.installment, row.amortization, row.interest, row.balance
        )?;
    }
    Ok(())
}

fn write_consortium_csv(
    path: &PathBuf,
    result: &financing::ConsortiumResult,
) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Installment,CommonFund,Fees,Balance")?;
    for row in &result.rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.month, row.installment, row.common_fund, row.fees, row.balance
        )?;
    }
    Ok(())
}
