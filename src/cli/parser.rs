use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for drivelog
/// CLI application to log drive sessions with a SQLite-backed store
#[derive(Parser)]
#[command(
    name = "drivelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple driving-log CLI: record drive sessions and track progress toward practice-time goals",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or a custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a past drive
    Add {
        /// Date of the drive (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "from", help = "Start time (HH:MM)")]
        start: String,

        /// End time (HH:MM)
        #[arg(long = "to", help = "End time (HH:MM)")]
        end: String,

        /// End date, when the drive crosses midnight (YYYY-MM-DD)
        #[arg(long = "end-date", help = "End date if different from the start date")]
        end_date: Option<String>,

        /// Log this drive as a night drive (default: day)
        #[arg(long, help = "Log as a night drive")]
        night: bool,

        /// Weather during the drive: sunny, raining, snowing, foggy
        #[arg(long, help = "Weather: sunny, raining, snowing, foggy (default: sunny)")]
        weather: Option<String>,

        /// Free-text notes
        #[arg(long, help = "Optional notes")]
        notes: Option<String>,
    },

    /// List recorded drives, most recent first
    List,

    /// Show accumulated drive time against the configured goals
    Summary,

    /// Edit a recorded drive by id
    Edit {
        /// Drive id (full uuid or a unique prefix, see `list`)
        id: String,

        /// New date (YYYY-MM-DD); keeps the drive's times of day
        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long = "from", help = "New start time (HH:MM)")]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long = "to", help = "New end time (HH:MM)")]
        end: Option<String>,

        /// New end date (YYYY-MM-DD)
        #[arg(long = "end-date", help = "New end date (YYYY-MM-DD)")]
        end_date: Option<String>,

        /// Reclassify as a day drive
        #[arg(long, conflicts_with = "night", help = "Mark as a day drive")]
        day: bool,

        /// Reclassify as a night drive
        #[arg(long, help = "Mark as a night drive")]
        night: bool,

        /// New weather: sunny, raining, snowing, foggy
        #[arg(
            long,
            conflicts_with = "cycle_weather",
            help = "New weather: sunny, raining, snowing, foggy"
        )]
        weather: Option<String>,

        /// Advance weather to the next condition in the cycle
        #[arg(
            long = "cycle-weather",
            help = "Cycle weather: Sunny → Raining → Snowing → Foggy → Sunny"
        )]
        cycle_weather: bool,

        /// New notes (an empty string clears them)
        #[arg(long, help = "New notes (empty string clears them)")]
        notes: Option<String>,
    },

    /// Delete a recorded drive by id
    Del {
        /// Drive id (full uuid or a unique prefix, see `list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// View or change display preferences and drive-time goals
    Prefs {
        #[arg(long = "print", help = "Print the current preferences")]
        print_prefs: bool,

        #[arg(long = "required-time", help = "Total drive-time goal in minutes")]
        required_time: Option<i64>,

        #[arg(
            long = "required-night-time",
            help = "Night drive-time goal in minutes"
        )]
        required_night_time: Option<i64>,

        #[arg(long = "show-drive-time", help = "Show the total drive time line")]
        show_drive_time: Option<bool>,

        #[arg(
            long = "show-drive-progress",
            help = "Show the total drive time progress bar"
        )]
        show_drive_progress: Option<bool>,

        #[arg(long = "show-night-time", help = "Show the night drive time line")]
        show_night_time: Option<bool>,

        #[arg(
            long = "show-night-progress",
            help = "Show the night drive time progress bar"
        )]
        show_night_progress: Option<bool>,
    },

    /// Export recorded drives
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// CSV column selection, comma separated.
        ///
        /// Available columns: Date, Start Time, End Time, Length, Day,
        /// Weather, Notes. Order is preserved. Length is the drive duration
        /// in whole minutes.
        #[arg(long, help = "CSV columns, e.g. \"Date,Length,Notes\"")]
        columns: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
