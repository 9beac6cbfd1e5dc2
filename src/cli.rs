//! CLI argument parsing with clap.

use clap::Parser;

/// Event poster CLI - branded square images from stock photos.
#[derive(Parser, Debug)]
#[command(name = "postergen", version, about)]
pub struct Cli {
    /// Event name; use embedded newlines for multiple title lines.
    pub name: Option<String>,

    /// Event time (e.g., 18:00).
    #[arg(short, long, default_value = "")]
    pub time: String,

    /// Event date (e.g., 2024-05-01).
    #[arg(short, long, default_value = "")]
    pub date: String,

    /// Venue name.
    #[arg(short, long, default_value = "")]
    pub place: String,

    /// Venue address.
    #[arg(short, long, default_value = "")]
    pub address: String,

    /// Override the background search with explicit keywords.
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Result page to start from.
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Number of poster variants to generate (1-5).
    #[arg(short = 'n', long, default_value = "1")]
    pub count: u32,

    /// Output file path (fixed event_<date>_vN.png pattern if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the event name from the positional argument.
    ///
    /// # Errors
    ///
    /// Returns an error if no event name was provided.
    pub fn resolve_name(&self) -> Result<String, String> {
        self.name.clone().ok_or_else(|| "Provide an event name".to_string())
    }

    /// Validate numeric arguments before any adapter is constructed.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid argument.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.count) {
            return Err(format!("Unsupported count '{}'. Valid: 1-5", self.count));
        }
        if self.page == 0 {
            return Err("Page must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_name() {
        let cli = Cli::parse_from(["postergen", "Summer Gala"]);
        assert_eq!(cli.resolve_name().unwrap(), "Summer Gala");
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["postergen", "Summer Gala"]);
        assert_eq!(cli.time, "");
        assert_eq!(cli.date, "");
        assert_eq!(cli.place, "");
        assert_eq!(cli.address, "");
        assert!(cli.keywords.is_none());
        assert_eq!(cli.page, 1);
        assert_eq!(cli.count, 1);
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "postergen",
            "-t",
            "18:00",
            "-d",
            "2024-05-01",
            "-p",
            "Central Park",
            "-a",
            "New York, NY",
            "-k",
            "sunset rooftop",
            "--page",
            "2",
            "-n",
            "3",
            "-o",
            "out.png",
            "-v",
            "Summer Gala",
        ]);
        assert_eq!(cli.time, "18:00");
        assert_eq!(cli.date, "2024-05-01");
        assert_eq!(cli.place, "Central Park");
        assert_eq!(cli.address, "New York, NY");
        assert_eq!(cli.keywords.as_deref(), Some("sunset rooftop"));
        assert_eq!(cli.page, 2);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.output.as_deref(), Some("out.png"));
        assert!(cli.verbose);
        assert_eq!(cli.name.as_deref(), Some("Summer Gala"));
    }

    #[test]
    fn no_name_errors() {
        let cli = Cli::parse_from(["postergen"]);
        assert!(cli.resolve_name().is_err());
    }

    #[test]
    fn empty_name_is_allowed() {
        let cli = Cli::parse_from(["postergen", ""]);
        assert_eq!(cli.resolve_name().unwrap(), "");
    }

    #[test]
    fn count_out_of_range_rejected() {
        let cli = Cli::parse_from(["postergen", "-n", "0", "Gala"]);
        assert!(cli.validate().is_err());
        let cli = Cli::parse_from(["postergen", "-n", "6", "Gala"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn page_zero_rejected() {
        let cli = Cli::parse_from(["postergen", "--page", "0", "Gala"]);
        assert!(cli.validate().is_err());
    }
}
