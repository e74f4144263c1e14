use crate::models::page::{FieldId, TriggerId};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "countryinfo",
    about = "Look up country info, population data and service diagnostics",
    version,
    author
)]
pub struct Args {
    /// Root URL of the countryinfo service (overrides COUNTRYINFO_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Country details, optionally with a limited city list
    Info {
        code: String,
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// Population counts, optionally restricted to a year range
    Population {
        code: String,
        #[arg(long)]
        start_year: Option<String>,
        #[arg(long)]
        end_year: Option<String>,
    },
    /// Status of the service and its upstream APIs
    Status,
    /// Read lookups from stdin, one per line, and run them concurrently
    Interactive,
}

impl Command {
    /// The trigger this command fires and the field values it fills in first.
    /// `None` for `interactive`, which drives the page itself.
    pub fn as_trigger(&self) -> Option<(TriggerId, Vec<(FieldId, String)>)> {
        match self {
            Command::Info { code, limit } => Some((
                TriggerId::GetCountry,
                vec![
                    (FieldId::CountryCode, code.clone()),
                    (FieldId::CityLimit, limit.clone().unwrap_or_default()),
                ],
            )),
            Command::Population {
                code,
                start_year,
                end_year,
            } => Some((
                TriggerId::GetPopulation,
                vec![
                    (FieldId::PopCountryCode, code.clone()),
                    (FieldId::StartYear, start_year.clone().unwrap_or_default()),
                    (FieldId::EndYear, end_year.clone().unwrap_or_default()),
                ],
            )),
            Command::Status => Some((TriggerId::GetDiagnostics, Vec::new())),
            Command::Interactive => None,
        }
    }

    /// Parses one interactive line: `info <code> [limit]`,
    /// `population <code> [start end]` or `status`.
    pub fn parse_line(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let command = match words.next()? {
            "info" => Command::Info {
                code: words.next().unwrap_or_default().to_string(),
                limit: words.next().map(str::to_string),
            },
            "population" | "pop" => Command::Population {
                code: words.next().unwrap_or_default().to_string(),
                start_year: words.next().map(str::to_string),
                end_year: words.next().map(str::to_string),
            },
            "status" | "diag" => Command::Status,
            _ => return None,
        };
        Some(command)
    }
}
