//! Executes parsed CLI commands against the catalogs.
//!
//! Output goes to any `Write` so the same code serves stdout and tests.

use std::io::Write;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use funclab_core::analysis::Analysis;
use funclab_core::format::{equation, format_fixed, format_number};
use funclab_core::model::{DataPoint, ModelParams, ProblemId, ProblemModel, SimulationId};
use funclab_core::report::ReportTable;
use funclab_core::storage::KeyValueStore;
use funclab_core::{CatalogError, ScenarioStore, SimulationStore, Simulator};
use serde::Serialize;

use crate::cli::{Command, DomainArgs, ProblemsCommand, ReportTarget, SimsCommand};
use crate::config::AppConfig;

/// Catalogs and settings for one CLI invocation.
pub struct Session<S: KeyValueStore> {
    pub problems: ScenarioStore<S>,
    pub sims: SimulationStore<S>,
    pub config: AppConfig,
}

impl<S: KeyValueStore + Clone> Session<S> {
    pub fn open(storage: S, config: AppConfig) -> Self {
        Self {
            problems: ScenarioStore::new(storage.clone()),
            sims: SimulationStore::new(storage),
            config,
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    fn simulator(&self, model: ModelParams, domain: &DomainArgs) -> Result<Simulator> {
        let domain = domain.over(self.config.simulator_domain);
        Simulator::new(model, domain).wrap_err("Invalid sampling domain")
    }

    fn select_problem(&mut self, id: Option<String>) -> Result<()> {
        if let Some(id) = id {
            let id = ProblemId::new(id);
            self.problems
                .select(&id)
                .wrap_err_with(|| format!("Cannot open problem '{id}'"))?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ProblemView<'a> {
    problem: &'a ProblemModel,
    equation: String,
    value: f64,
    point: Option<DataPoint>,
}

#[derive(Serialize)]
struct SimulationView {
    name: String,
    equation: String,
    analysis: Analysis,
    points: Vec<DataPoint>,
}

pub fn run<S: KeyValueStore>(
    command: Command,
    session: &mut Session<S>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Eval { model, x } => {
            let model = model.resolve(session.config.default_family)?;
            let sim = session.simulator(model, &DomainArgs::default())?;
            writeln!(out, "{}", sim.equation())?;
            match sim.evaluate_at(x) {
                Some(point) => write_evaluation(out, &point)?,
                None => writeln!(out, "f({}) is undefined", format_number(x))?,
            }
        }
        Command::Sample {
            model,
            domain,
            json,
        } => {
            let model = model.resolve(session.config.default_family)?;
            let sim = session.simulator(model, &domain)?;
            let points = sim.sample()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&points)?)?;
            } else {
                writeln!(out, "{}", sim.equation())?;
                write_points(out, &points)?;
            }
        }
        Command::Analyze { model, json } => {
            let model = model.resolve(session.config.default_family)?;
            let analysis = funclab_core::analyze(&model);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
            } else {
                writeln!(out, "{}", equation(&model))?;
                write_analysis(out, &analysis)?;
            }
        }
        Command::Problems { action } => run_problems(action, session, out)?,
        Command::Sims { action } => run_sims(action, session, out)?,
        Command::Report { target } => run_report(target, session, out)?,
    }
    Ok(())
}

fn run_problems<S: KeyValueStore>(
    action: ProblemsCommand,
    session: &mut Session<S>,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ProblemsCommand::List => {
            for problem in session.problems.problems() {
                let marker = if session.problems.is_active(&problem.id) {
                    '*'
                } else {
                    ' '
                };
                let origin = if problem.is_custom { "custom" } else { "built-in" };
                writeln!(
                    out,
                    "{marker} {:<24} {:<28} {:<20} {origin}",
                    problem.id.as_str(),
                    problem.title,
                    problem.family().name()
                )?;
            }
        }
        ProblemsCommand::Show { id, value, json } => {
            session.select_problem(id)?;
            if let Some(value) = value {
                session.problems.set_current_value(value)?;
            }

            let problem = session.problems.active();
            let view = ProblemView {
                problem,
                equation: equation(&problem.model),
                value: session.problems.current_value(),
                point: session.problems.evaluate_current(),
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                write_problem(out, &view)?;
            }
        }
        ProblemsCommand::Create(args) => {
            let problem = session.problems.create(args.to_draft())?;
            writeln!(out, "Created problem {}: {}", problem.id, problem.title)?;
            writeln!(out, "{}", equation(&problem.model))?;
        }
        ProblemsCommand::Delete { id } => {
            let removed = session.problems.delete(&ProblemId::new(id))?;
            writeln!(out, "Deleted problem {}: {}", removed.id, removed.title)?;
        }
    }
    Ok(())
}

fn run_sims<S: KeyValueStore>(
    action: SimsCommand,
    session: &mut Session<S>,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        SimsCommand::List => {
            if session.sims.list().is_empty() {
                writeln!(out, "No saved simulations")?;
            }
            for saved in session.sims.list() {
                writeln!(
                    out,
                    "{:<15} {:<24} {:<20} {}",
                    saved.id,
                    saved.name,
                    equation(&saved.model),
                    saved.timestamp.strftime("%Y-%m-%d %H:%M"),
                )?;
            }
        }
        SimsCommand::Save { name, model } => {
            let model = model.resolve(session.config.default_family)?;
            let saved = session.sims.save(&name, model)?;
            writeln!(out, "Saved simulation {} ({})", saved.id, saved.name)?;
        }
        SimsCommand::Replay { id, domain, json } => {
            let id = SimulationId(id);
            let model = session.sims.replay(id)?;
            let name = session
                .sims
                .get(id)
                .map(|s| s.name.clone())
                .unwrap_or_default();

            let mut sim = session.simulator(ModelParams::default_for(model.family()), &domain)?;
            sim.set_model(model);

            let view = SimulationView {
                name,
                equation: sim.equation(),
                analysis: sim.analysis(),
                points: sim.sample()?,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                writeln!(out, "{}", view.name)?;
                writeln!(out, "{}", view.equation)?;
                write_analysis(out, &view.analysis)?;
                write_points(out, &view.points)?;
            }
        }
        SimsCommand::Delete { id } => {
            let removed = session.sims.delete(SimulationId(id))?;
            writeln!(out, "Deleted simulation {} ({})", removed.id, removed.name)?;
        }
    }
    Ok(())
}

fn run_report<S: KeyValueStore>(
    target: ReportTarget,
    session: &mut Session<S>,
    out: &mut impl Write,
) -> Result<()> {
    let (table, json) = match target {
        ReportTarget::Problem { id, rows, json } => {
            session.select_problem(id)?;
            let rows = rows.unwrap_or(session.config.report_rows);
            (session.problems.report_active(rows)?, json)
        }
        ReportTarget::Sim { id, json } => {
            let id = SimulationId(id);
            let saved = session
                .sims
                .get(id)
                .ok_or(CatalogError::SimulationNotFound(id))?;
            let sim = session.simulator(saved.model, &DomainArgs::default())?;
            (sim.report(&saved.name)?, json)
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
    } else {
        write_table(out, &table)?;
    }
    Ok(())
}

fn write_evaluation(out: &mut impl Write, point: &DataPoint) -> std::io::Result<()> {
    let x = format_number(point.x);
    writeln!(out, "f({x}) = {}", format_fixed(point.y))?;
    if let Some(y2) = point.y2 {
        writeln!(out, "g({x}) = {}", format_fixed(y2))?;
    }
    Ok(())
}

fn write_points(out: &mut impl Write, points: &[DataPoint]) -> std::io::Result<()> {
    if points.is_empty() {
        return writeln!(out, "(no points in range)");
    }
    for p in points {
        match p.y2 {
            Some(y2) => writeln!(
                out,
                "{:>10} {:>12} {:>12}",
                format_number(p.x),
                format_fixed(p.y),
                format_fixed(y2)
            )?,
            None => writeln!(out, "{:>10} {:>12}", format_number(p.x), format_fixed(p.y))?,
        }
    }
    Ok(())
}

fn write_analysis(out: &mut impl Write, analysis: &Analysis) -> std::io::Result<()> {
    for line in analysis.describe() {
        writeln!(out, "{}: {}", line.label, line.value)?;
    }
    Ok(())
}

fn write_problem(out: &mut impl Write, view: &ProblemView<'_>) -> std::io::Result<()> {
    let problem = view.problem;
    writeln!(out, "{} ({})", problem.title, problem.id)?;
    if !problem.description.is_empty() {
        writeln!(out, "{}", problem.description)?;
    }
    writeln!(out, "{}", view.equation)?;
    writeln!(
        out,
        "Range: {} to {} step {}",
        format_number(problem.range.min),
        format_number(problem.range.max),
        format_number(problem.range.step)
    )?;

    let labels = &problem.labels;
    match view.point {
        Some(point) => {
            writeln!(out, "{} = {}", labels.x, format_number(point.x))?;
            writeln!(out, "{}: {}", labels.series1, format_fixed(point.y))?;
            if let (Some(series2), Some(y2)) = (&labels.series2, point.y2) {
                writeln!(out, "{series2}: {}", format_fixed(y2))?;
            }
        }
        None => writeln!(out, "{} = {}: undefined", labels.x, format_number(view.value))?,
    }
    Ok(())
}

fn write_table(out: &mut impl Write, table: &ReportTable) -> std::io::Result<()> {
    writeln!(out, "{}", table.title)?;
    writeln!(out, "{}", table.equation)?;
    writeln!(out)?;

    let header: Vec<String> = table.headers.iter().map(|h| format!("{h:>14}")).collect();
    writeln!(out, "{}", header.join(""))?;
    for row in &table.rows {
        write!(out, "{:>14}{:>14}", row.x, row.y)?;
        if let Some(y2) = &row.y2 {
            write!(out, "{y2:>14}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
