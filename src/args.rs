use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-meta")]
#[command(about = "Extracts title, meta title and meta description from a list of URLs")]
#[command(version)]
pub struct Args {
    /// URLs to extract from (an argument may hold several lines)
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Maximum table cell width in characters (0 for no limit)
    #[arg(long, default_value_t = 60)]
    pub max_width: usize,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Hide the progress spinner
    #[arg(short = 'q', long)]
    pub no_progress: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grid with one row per URL
    Table,
    /// Labeled section per URL
    Sections,
    /// JSON array of records
    Json,
}

impl Args {
    /// Collect the URL block from arguments, the input file, or stdin
    pub fn read_url_block(&self) -> io::Result<String> {
        let mut block = self.urls.join("\n");

        match &self.input {
            Some(path) if path.as_os_str() == "-" => {
                block.push('\n');
                block.push_str(&read_stdin(false)?);
            }
            Some(path) => {
                block.push('\n');
                block.push_str(&std::fs::read_to_string(path)?);
            }
            None if self.urls.is_empty() => {
                block = read_stdin(true)?;
            }
            None => {}
        }

        Ok(block)
    }
}

fn read_stdin(prompt: bool) -> io::Result<String> {
    let mut stdin = io::stdin();
    if prompt && stdin.is_terminal() {
        eprintln!("Enter URLs (one per line), then press Ctrl-D:");
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["page-meta", "https://a.test"]);
        assert_eq!(args.urls, vec!["https://a.test"]);
        assert_eq!(args.timeout, 10);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.max_width, 60);
        assert!(!args.no_progress);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "page-meta",
            "-t",
            "3",
            "--format",
            "json",
            "-q",
            "https://a.test",
            "https://b.test",
        ]);
        assert_eq!(args.timeout, 3);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.no_progress);
        assert_eq!(args.read_url_block().unwrap(), "https://a.test\nhttps://b.test");
    }

    #[test]
    fn test_input_file_is_appended() {
        let path = std::env::temp_dir().join(format!("page-meta-args-{}.txt", std::process::id()));
        std::fs::write(&path, "https://b.test\n\nhttps://c.test\n").unwrap();

        let args = Args::parse_from([
            "page-meta".to_string(),
            "--input".to_string(),
            path.display().to_string(),
            "https://a.test".to_string(),
        ]);
        let block = args.read_url_block().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            page_meta::input::parse_url_block(&block),
            vec!["https://a.test", "https://b.test", "https://c.test"]
        );
    }
}
