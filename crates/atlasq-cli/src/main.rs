//! atlasq CLI: run filter/order/limit/aggregate queries over a dataset file.
//!
//! Predicates are given as `--where "field OP literal"` with
//! OP ∈ {==, >, <, >=, <=, ~}; `~` is a case-insensitive contains.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use atlasq_core::prelude::{DataType, Error, FieldRef, Value};
use atlasq_query::{aggregate, CmpOp, Direction, Predicate, Query};
use atlasq_session::{LoadOptions, Session};

#[derive(Parser)]
#[command(name = "atlasq")]
#[command(about = "In-memory queries over a country dataset", long_about = None)]
struct Cli {
    /// Path to the dataset file
    #[arg(long)]
    data: PathBuf,

    /// Dataset file format
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Jsonl,
}

#[derive(Args)]
struct FilterArgs {
    /// Predicate "field OP literal"; repeatable, combined with AND
    #[arg(long = "where", value_name = "EXPR")]
    predicates: Vec<String>,

    /// Require the field to be present; repeatable
    #[arg(long = "not-null", value_name = "FIELD")]
    not_null: Vec<String>,
}

#[derive(Args)]
struct ShapeArgs {
    /// Field to order the result by
    #[arg(long, value_name = "FIELD")]
    order_by: Option<String>,

    /// Order descending instead of ascending
    #[arg(long)]
    desc: bool,

    /// Keep only the first N rows after ordering
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print matching records (or a single plucked field)
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        shape: ShapeArgs,

        /// Print just this field instead of whole records
        #[arg(long, value_name = "FIELD")]
        pluck: Option<String>,
    },

    /// Print the number of matching records
    Count {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the sum of a numeric field over the result
    Sum {
        /// Field to sum
        field: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        shape: ShapeArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = LoadOptions {
        delimiter: delimiter_byte(cli.delimiter)?,
    };
    let session = match cli.format {
        Format::Csv => Session::load_csv(&cli.data, &options)?,
        Format::Jsonl => Session::load_jsonl(&cli.data)?,
    };

    match cli.command {
        Commands::List {
            filters,
            shape,
            pluck,
        } => {
            let query = build_query(&session, &filters, &shape)?;
            match pluck {
                Some(field) => {
                    let field: FieldRef = field.parse()?;
                    for value in query.pluck(field)? {
                        println!("{}", value);
                    }
                }
                None => {
                    for record in query.to_list()? {
                        println!("{}\t{}\t{}\t{}", record.code, record.name, record.continent, record.population);
                    }
                }
            }
        }
        Commands::Count { filters } => {
            let query = build_query(&session, &filters, &ShapeArgs { order_by: None, desc: false, limit: None })?;
            println!("{}", query.count()?);
        }
        Commands::Sum {
            field,
            filters,
            shape,
        } => {
            let field: FieldRef = field.parse()?;
            let query = build_query(&session, &filters, &shape)?;
            println!("{}", aggregate::sum(&query.to_list()?, field)?);
        }
    }

    Ok(())
}

fn build_query<'a>(
    session: &'a Session,
    filters: &FilterArgs,
    shape: &ShapeArgs,
) -> Result<Query<'a>, Error> {
    let mut query = session.query();
    for expr in &filters.predicates {
        query = query.filter(parse_predicate(expr)?);
    }
    for field in &filters.not_null {
        query = query.filter(Predicate::NotNull(field.parse()?));
    }
    if let Some(ref field) = shape.order_by {
        let direction = if shape.desc {
            Direction::Descending
        } else {
            Direction::Ascending
        };
        query = query.order_by(field.parse()?, direction);
    }
    if let Some(n) = shape.limit {
        query = query.limit(n);
    }
    Ok(query)
}

/// CSV delimiters are single bytes; reject anything outside ASCII rather
/// than truncating the code point.
fn delimiter_byte(c: char) -> Result<u8, Error> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(Error::Load(format!("delimiter '{}' is not an ASCII character", c)))
    }
}

/// Parse a predicate like "population > 30000000" or "government_form ~ republic".
fn parse_predicate(expr: &str) -> Result<Predicate, Error> {
    // Two-char operators probed first so ">=" is not split at ">".
    let ops = ["==", "<=", ">=", "<", ">", "~"];

    for op in &ops {
        if let Some(pos) = expr.find(op) {
            let field: FieldRef = expr[..pos].trim().parse()?;
            let literal = expr[pos + op.len()..].trim();
            return match *op {
                "==" => Ok(Predicate::Equals(field, parse_literal(field, literal)?)),
                "~" => Ok(Predicate::Contains(field, literal.to_string())),
                "<" => Ok(Predicate::Compare(field, CmpOp::Lt, parse_literal(field, literal)?)),
                ">" => Ok(Predicate::Compare(field, CmpOp::Gt, parse_literal(field, literal)?)),
                "<=" => Ok(Predicate::Compare(field, CmpOp::Le, parse_literal(field, literal)?)),
                ">=" => Ok(Predicate::Compare(field, CmpOp::Ge, parse_literal(field, literal)?)),
                _ => unreachable!("operator table is exhaustive"),
            };
        }
    }

    Err(Error::InvalidField(format!(
        "{} (expected \"field OP literal\")",
        expr.trim()
    )))
}

/// Parse a literal according to the field's declared type.
fn parse_literal(field: FieldRef, literal: &str) -> Result<Value, Error> {
    match field.data_type() {
        DataType::Int => literal
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::InvalidOperand {
                field,
                detail: format!("cannot parse '{}' as an integer", literal),
            }),
        DataType::Float => literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::InvalidOperand {
                field,
                detail: format!("cannot parse '{}' as a number", literal),
            }),
        DataType::Utf8 => Ok(Value::Str(literal.to_string())),
    }
}
