//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use funclab_core::catalog::{DraftLabels, DraftModel, DraftRange, ProblemDraft};
use funclab_core::model::{Domain, FunctionFamily, ModelParams};
use funclab_core::ModelError;

#[derive(Parser, Debug)]
#[command(name = "funclab")]
#[command(about = "Explore linear, quadratic and exponential functions")]
pub struct Args {
    /// Path to the data directory (default: ~/.funclab/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a function at a single x
    Eval {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,
    },
    /// Sample a function over a domain
    Sample {
        #[command(flatten)]
        model: ModelArgs,
        #[command(flatten)]
        domain: DomainArgs,
        #[arg(long)]
        json: bool,
    },
    /// Closed-form analysis of a function
    Analyze {
        #[command(flatten)]
        model: ModelArgs,
        #[arg(long)]
        json: bool,
    },
    /// Problem scenarios (built-in and custom)
    Problems {
        #[command(subcommand)]
        action: ProblemsCommand,
    },
    /// Saved simulator snapshots
    Sims {
        #[command(subcommand)]
        action: SimsCommand,
    },
    /// Report tables for document export
    Report {
        #[command(subcommand)]
        target: ReportTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProblemsCommand {
    /// List every problem, built-ins first
    List,
    /// Show a problem and evaluate it at its input value
    Show {
        /// Problem id (default: first built-in)
        id: Option<String>,
        /// Input value, clamped to the problem's range
        #[arg(short, long, allow_negative_numbers = true)]
        value: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Create a custom problem; omitted values get defaults
    Create(CreateProblemArgs),
    /// Delete a custom problem
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SimsCommand {
    /// List saved simulations in save order
    List,
    /// Save a named snapshot of a function
    Save {
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Load a snapshot into the simulator and show it
    Replay {
        id: u64,
        #[command(flatten)]
        domain: DomainArgs,
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved simulation
    Delete { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum ReportTarget {
    /// Report for a problem (default: first built-in)
    Problem {
        id: Option<String>,
        /// Number of table rows (default from config)
        #[arg(short, long)]
        rows: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Report for a saved simulation
    Sim {
        id: u64,
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ModelArgs {
    /// linear, quadratic, exponential, linear-simple or linear-comparison
    #[arg(short, long, value_parser = parse_family)]
    pub family: Option<FunctionFamily>,

    /// Parameters in order, comma separated (linear: m,n; quadratic: a,b,c;
    /// exponential: base,k; comparison: m1,n1,m2,n2)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub params: Vec<f64>,
}

impl ModelArgs {
    /// Resolve to parameters. No family means `default_family`; no values
    /// means that family's starting parameters.
    pub fn resolve(&self, default_family: FunctionFamily) -> Result<ModelParams, ModelError> {
        let family = self.family.unwrap_or(default_family);
        if self.params.is_empty() {
            return Ok(ModelParams::default_for(family));
        }
        ModelParams::from_values(family, &self.params)
    }
}

#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct DomainArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
    #[arg(long)]
    pub step: Option<f64>,
}

impl DomainArgs {
    /// Override the given domain with whatever bounds were supplied.
    pub fn over(&self, base: Domain) -> Domain {
        Domain {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            step: self.step.unwrap_or(base.step),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// y = m·x + n
    Linear,
    /// Two lines compared side by side
    Comparison,
    /// y = k · base^x
    Exponential,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CreateProblemArgs {
    #[arg(short, long)]
    pub title: String,

    #[arg(short, long, value_enum, default_value_t = ProblemKind::Linear)]
    pub kind: ProblemKind,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Leading parameters; missing ones take defaults
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub params: Vec<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
    #[arg(long)]
    pub step: Option<f64>,
    /// Starting input value
    #[arg(long, allow_negative_numbers = true)]
    pub default: Option<f64>,

    #[arg(long)]
    pub x_label: Option<String>,
    #[arg(long)]
    pub y_label: Option<String>,
    #[arg(long)]
    pub series1: Option<String>,
    #[arg(long)]
    pub series2: Option<String>,
}

impl CreateProblemArgs {
    pub fn to_draft(&self) -> ProblemDraft {
        let p = |i: usize| self.params.get(i).copied();
        let model = match self.kind {
            ProblemKind::Linear => DraftModel::LinearSimple { m: p(0), n: p(1) },
            ProblemKind::Comparison => DraftModel::LinearComparison {
                m1: p(0),
                n1: p(1),
                m2: p(2),
                n2: p(3),
            },
            ProblemKind::Exponential => DraftModel::ExponentialGrowthDecay { base: p(0), k: p(1) },
        };

        ProblemDraft::new(self.title.clone(), model)
            .with_description(self.description.clone().unwrap_or_default())
            .with_range(DraftRange {
                min: self.min,
                max: self.max,
                step: self.step,
                default_val: self.default,
            })
            .with_labels(DraftLabels {
                x: self.x_label.clone(),
                y: self.y_label.clone(),
                series1: self.series1.clone(),
                series2: self.series2.clone(),
            })
    }
}

fn parse_family(s: &str) -> Result<FunctionFamily, ModelError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use funclab_core::model::{LinearParams, QuadraticParams};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("funclab").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_eval_with_negative_params() {
        let args = parse(&["eval", "--family", "quadratic", "--params", "1,-6,5", "--x", "-2"]);
        let Command::Eval { model, x } = args.command else {
            panic!("expected eval");
        };
        assert_eq!(x, -2.0);
        assert_eq!(
            model.resolve(FunctionFamily::Linear).unwrap(),
            ModelParams::Quadratic(QuadraticParams::new(1.0, -6.0, 5.0))
        );
    }

    #[test]
    fn test_model_args_defaults() {
        let model = ModelArgs::default();
        assert_eq!(
            model.resolve(FunctionFamily::Linear).unwrap(),
            ModelParams::Linear(LinearParams::new(1.0, 0.0))
        );
    }

    #[test]
    fn test_wrong_arity_is_an_error() {
        let model = ModelArgs {
            family: Some(FunctionFamily::Quadratic),
            params: vec![1.0, 2.0],
        };
        assert!(model.resolve(FunctionFamily::Linear).is_err());
    }

    #[test]
    fn test_unknown_family_rejected_by_parser() {
        let result = Args::try_parse_from(["funclab", "analyze", "--family", "cubic"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_domain_override() {
        let args = DomainArgs {
            min: Some(0.0),
            max: None,
            step: Some(1.0),
        };
        assert_eq!(args.over(Domain::default()), Domain::new(0.0, 10.0, 1.0));
    }

    #[test]
    fn test_create_args_to_draft() {
        let args = parse(&[
            "problems", "create", "--title", "Gym", "--kind", "comparison", "--params", "30,0,10",
            "--max", "12",
        ]);
        let Command::Problems {
            action: ProblemsCommand::Create(create),
        } = args.command
        else {
            panic!("expected problems create");
        };

        let draft = create.to_draft();
        assert_eq!(draft.title, "Gym");
        assert_eq!(
            draft.model,
            DraftModel::LinearComparison {
                m1: Some(30.0),
                n1: Some(0.0),
                m2: Some(10.0),
                n2: None,
            }
        );
        assert_eq!(draft.range.max, Some(12.0));
        assert_eq!(draft.range.min, None);
    }
}
