use bloomapp::draft::parse_date_input;
use bloomapp::query::{SortKey, StatusFilter};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bloom",
    bin_name = "bloom",
    version,
    disable_help_subcommand = true,
    after_help = "Without a command, bloom reads commands from stdin until `quit`."
)]
#[command(about = "Track when your plants need water", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use DATE as today (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_today, help_heading = "Options")]
    pub today: Option<NaiveDate>,

    /// Start with the demonstration garden
    #[arg(long, global = true, help_heading = "Options")]
    pub demo: bool,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// One line of a session: the same commands, no global flags.
#[derive(Parser, Debug)]
#[command(name = "bloom", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    parse_date_input(raw).map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plant
    Add {
        /// Plant name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        fields: PlantFields,
    },

    /// List plants, most urgent first
    #[command(alias = "ls")]
    List {
        /// Match name, species or location
        #[arg(short, long)]
        search: Option<String>,

        /// all, overdue, due or healthy
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// due, name or location
        #[arg(long, default_value = "due")]
        sort: SortKey,
    },

    /// Show upcoming waterings
    Tasks,

    /// Mark plants watered today
    Water {
        /// Indexes, ids or a name
        #[arg(required = true, num_args = 1..)]
        plants: Vec<String>,
    },

    /// Change a plant's details
    Edit {
        /// Index, id or name of one plant
        #[arg(required = true, num_args = 1..)]
        plant: Vec<String>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: PlantFields,
    },

    /// Delete plants
    #[command(alias = "rm")]
    Delete {
        /// Indexes, ids or a name
        #[arg(required = true, num_args = 1..)]
        plants: Vec<String>,
    },

    /// Show full details and watering status
    Status {
        /// Indexes, ids or a name
        #[arg(required = true, num_args = 1..)]
        plants: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlantFields {
    /// Species or variety
    #[arg(long)]
    pub species: Option<String>,

    /// Client site or bed
    #[arg(long)]
    pub location: Option<String>,

    /// Care notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Date last watered (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub watered: Option<String>,

    /// Days between waterings
    #[arg(short, long, value_name = "DAYS", allow_hyphen_values = true)]
    pub interval: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_command() {
        let cli =
            Cli::try_parse_from(["bloom", "tasks", "--today", "2024-06-10", "--demo"]).unwrap();
        assert!(cli.demo);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert!(matches!(cli.command, Some(Commands::Tasks)));
    }

    #[test]
    fn rejects_bad_today() {
        assert!(Cli::try_parse_from(["bloom", "--today", "June 10"]).is_err());
    }

    #[test]
    fn list_alias_and_filters() {
        let cli =
            Cli::try_parse_from(["bloom", "ls", "--status", "overdue", "--sort", "name"]).unwrap();
        match cli.command {
            Some(Commands::List { status, sort, search }) => {
                assert_eq!(status, StatusFilter::Overdue);
                assert_eq!(sort, SortKey::Name);
                assert_eq!(search, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_status_filter_is_rejected() {
        assert!(Cli::try_parse_from(["bloom", "list", "--status", "thirsty"]).is_err());
    }

    #[test]
    fn add_collects_name_words_and_fields() {
        let cli = Cli::try_parse_from([
            "bloom",
            "add",
            "Red",
            "Spider",
            "Lily",
            "--location",
            "Front Bed",
            "-i",
            "-1",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { name, fields }) => {
                assert_eq!(name.join(" "), "Red Spider Lily");
                assert_eq!(fields.location.as_deref(), Some("Front Bed"));
                assert_eq!(fields.interval.as_deref(), Some("-1"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn session_line_needs_no_binary_name() {
        let line = SessionLine::try_parse_from(["rm", "2"]).unwrap();
        match line.command {
            Commands::Delete { plants } => assert_eq!(plants, vec!["2"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn water_requires_a_plant() {
        assert!(SessionLine::try_parse_from(["water"]).is_err());
    }
}
