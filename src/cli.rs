use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "brandaudit")]
#[command(about = "Audits a business's web presence by classifying search listings by who controls them")]
#[command(version)]
pub struct Cli {
    /// Create default configuration file at ./config/brandaudit.toml
    #[arg(long)]
    pub init: bool,

    /// Submitter's full name
    #[arg(long)]
    pub name: Option<String>,

    /// Submitter's email address (receives the mailing list subscription)
    #[arg(long)]
    pub email: Option<String>,

    /// Business / company name to audit
    #[arg(short, long)]
    pub company: Option<String>,

    /// Business street address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Business phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Official website URL (ground truth for Full Control matching)
    #[arg(short, long)]
    pub website: Option<String>,

    /// Output format: 'html' (default), 'csv', 'json', or 'markdown'
    #[arg(short = 'f', long, default_value = "html")]
    pub output_format: String,

    /// Output directory for the report file (defaults to current directory)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Output filename (extension will be set based on format if not provided)
    #[arg(short, long, default_value = "brand_audit")]
    pub output: String,

    /// Skip emailing the report to the sales address
    #[arg(long)]
    pub skip_notify: bool,

    /// Skip subscribing the submitter to the mailing list
    #[arg(long)]
    pub skip_subscribe: bool,

    /// Verbose logging (use -v for INFO, -vv for DEBUG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Valid output format names, matching `--output-format`.
    pub const OUTPUT_FORMATS: [&'static str; 4] = ["html", "csv", "json", "markdown"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_submission() {
        let cli = Cli::parse_from([
            "brandaudit",
            "--name", "Jane Doe",
            "--email", "jane@example.com",
            "--company", "Acme Corp",
            "--address", "1 Main St",
            "--phone", "555-1234",
            "--website", "acme.com",
            "-vv",
        ]);
        assert_eq!(cli.company.as_deref(), Some("Acme Corp"));
        assert_eq!(cli.output_format, "html");
        assert_eq!(cli.output, "brand_audit");
        assert_eq!(cli.verbose, 2);
        assert!(!cli.skip_notify);
    }

    #[test]
    fn test_parse_skip_flags() {
        let cli = Cli::parse_from(["brandaudit", "--skip-notify", "--skip-subscribe"]);
        assert!(cli.skip_notify);
        assert!(cli.skip_subscribe);
    }
}
