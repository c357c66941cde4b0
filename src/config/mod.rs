use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "zipgeo")]
#[command(about = "Reconciles zip code geometry sources into a canonical dataset")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge the three sources and load the result into the database
    Build(BuildConfig),
    /// Emit a script-ready dataset literal from the deliverable file to stdout
    Emit(EmitConfig),
}

#[derive(Debug, Clone, Args)]
pub struct BuildConfig {
    #[arg(long, default_value = "us_zip_codes.kml")]
    pub kml_file: String,

    #[arg(long, default_value = "us_zip_codes.csv")]
    pub deliverable_file: String,

    #[arg(long, default_value = "us_undeliverable_zip_codes.csv")]
    pub undeliverable_file: String,

    #[arg(long, default_value = "us_zip_codes.db")]
    pub database_file: String,

    #[arg(long, help = "Also export one JSON file per record into this directory")]
    pub json_dir: Option<String>,
}

impl ConfigProvider for BuildConfig {
    fn kml_path(&self) -> &str {
        &self.kml_file
    }

    fn deliverable_path(&self) -> &str {
        &self.deliverable_file
    }

    fn undeliverable_path(&self) -> &str {
        &self.undeliverable_file
    }

    fn database_path(&self) -> &str {
        &self.database_file
    }

    fn json_dir(&self) -> Option<&str> {
        self.json_dir.as_deref()
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        validate_path("kml_file", &self.kml_file)?;
        validate_path("deliverable_file", &self.deliverable_file)?;
        validate_path("undeliverable_file", &self.undeliverable_file)?;
        validate_path("database_file", &self.database_file)?;
        if let Some(dir) = &self.json_dir {
            validate_path("json_dir", dir)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct EmitConfig {
    /// Deliverable file to format
    pub input_file: String,
}

impl Validate for EmitConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_match_the_fixed_filenames() {
        let cli = Cli::parse_from(["zipgeo", "build"]);
        let Command::Build(config) = cli.command else {
            panic!("expected build subcommand");
        };
        assert_eq!(config.kml_path(), "us_zip_codes.kml");
        assert_eq!(config.deliverable_path(), "us_zip_codes.csv");
        assert_eq!(config.undeliverable_path(), "us_undeliverable_zip_codes.csv");
        assert_eq!(config.database_path(), "us_zip_codes.db");
        assert!(config.json_dir().is_none());
    }

    #[test]
    fn test_emit_requires_an_input_file() {
        assert!(Cli::try_parse_from(["zipgeo", "emit"]).is_err());

        let cli = Cli::parse_from(["zipgeo", "emit", "zips.csv"]);
        let Command::Emit(config) = cli.command else {
            panic!("expected emit subcommand");
        };
        assert_eq!(config.input_file, "zips.csv");
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = BuildConfig {
            kml_file: String::new(),
            deliverable_file: "d.csv".to_string(),
            undeliverable_file: "u.csv".to_string(),
            database_file: "z.db".to_string(),
            json_dir: None,
        };
        assert!(config.validate().is_err());
    }
}
