use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info, warn};

use stylesnap_colors::config::{Settings, DEFAULT_LOG_FILTER};
use stylesnap_colors::logging::setup_logging;
use stylesnap_colors::{ColorExtractor, DetectionResult};

const USAGE: &str = "Usage: stylesnap-colors [--max-colors N] [--quality N] [--keep-white-black] [--seed N] [--save-settings] <image>...";

/// Command-line arguments layered over the loaded settings
#[derive(Debug, Default)]
struct CliArgs {
    max_colors: Option<usize>,
    quality: Option<usize>,
    keep_white_black: bool,
    seed: Option<u64>,
    save_settings: bool,
    images: Vec<PathBuf>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--max-colors" => parsed.max_colors = Some(number(&arg, args.next())?),
                "--quality" => parsed.quality = Some(number(&arg, args.next())?),
                "--seed" => parsed.seed = Some(number(&arg, args.next())?),
                "--keep-white-black" => parsed.keep_white_black = true,
                "--save-settings" => parsed.save_settings = true,
                flag if flag.starts_with("--") => return Err(format!("Unknown flag: {}", flag)),
                path => parsed.images.push(PathBuf::from(path)),
            }
        }

        if parsed.images.is_empty() && !parsed.save_settings {
            return Err("No images given".to_string());
        }

        Ok(parsed)
    }

    fn apply(&self, settings: &mut Settings) {
        if let Some(max_colors) = self.max_colors {
            settings.detect.max_colors = max_colors;
        }
        if let Some(quality) = self.quality {
            settings.detect.quality = quality;
        }
        if self.keep_white_black {
            settings.detect.exclude_white_black = false;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got {:?}", flag, value))
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a PathBuf,
    result: DetectionResult,
}

fn main() -> ExitCode {
    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    // Read settings before logging exists, report the outcome once it does
    let config_path = Settings::get_config_path();
    let loaded = config_path.as_deref().map(Settings::try_load_from);
    let log_filter = match &loaded {
        Some(Ok(Some(settings))) => settings.log_filter.clone(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    };
    setup_logging(&log_filter);

    let mut settings = match (config_path, loaded) {
        (Some(path), Some(result)) => Settings::from_load_result(&path, result),
        _ => {
            warn!("Could not determine config directory. Using defaults.");
            Settings::default()
        }
    };
    cli.apply(&mut settings);

    if cli.save_settings {
        settings.save();
    }

    let mut extractor = match settings.seed {
        Some(seed) => ColorExtractor::with_seed(seed),
        None => ColorExtractor::new(),
    };

    info!("Analyzing {} image(s) with {:?}", cli.images.len(), settings.detect);

    for path in &cli.images {
        let result = extractor.detect_colors_from_path(path, &settings.detect);
        let report = Report { path, result };

        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize result for {:?}: {}", path, e),
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags_and_images() {
        let cli = CliArgs::parse(args(&[
            "--max-colors",
            "3",
            "--quality",
            "1",
            "--keep-white-black",
            "--seed",
            "42",
            "shirt.png",
            "jeans.jpg",
        ]))
        .unwrap();

        assert_eq!(cli.max_colors, Some(3));
        assert_eq!(cli.quality, Some(1));
        assert!(cli.keep_white_black);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(
            cli.images,
            vec![PathBuf::from("shirt.png"), PathBuf::from("jeans.jpg")]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(args(&[])).is_err());
        assert!(CliArgs::parse(args(&["--quality"])).is_err());
        assert!(CliArgs::parse(args(&["--quality", "ten", "a.png"])).is_err());
        assert!(CliArgs::parse(args(&["--bogus", "a.png"])).is_err());
        assert!(CliArgs::parse(args(&["--save-settings"])).is_ok());
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = CliArgs::parse(args(&["--max-colors", "2", "--keep-white-black", "a.png"])).unwrap();
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.detect.max_colors, 2);
        assert_eq!(settings.detect.quality, 10);
        assert!(!settings.detect.exclude_white_black);
        assert!(settings.seed.is_none());
    }
}
