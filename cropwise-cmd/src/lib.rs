//! Command implementations for the CropWise CLI.
//!
//! The subcommands run the same validation schema, scoring and password
//! checks as the web app, against the embedded crop catalog or one read
//! from disk.

use clap::Subcommand;

pub mod catalog;
pub mod recommend;
pub mod strength;

#[derive(Subcommand)]
pub enum Command {
    /// Rank crops for a set of soil and climate readings
    Recommend {
        /// Nitrogen, mg/kg (0-140)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        nitrogen: String,

        /// Phosphorus, mg/kg (0-140)
        #[arg(short = 'p', long, allow_hyphen_values = true)]
        phosphorus: String,

        /// Potassium, mg/kg (0-140)
        #[arg(short = 'k', long, allow_hyphen_values = true)]
        potassium: String,

        /// Temperature, °C (-10-60)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        temperature: String,

        /// Relative humidity, % (0-100)
        #[arg(short = 'u', long, allow_hyphen_values = true)]
        humidity: String,

        /// Soil pH (0-14)
        #[arg(long, allow_hyphen_values = true)]
        ph: String,

        /// Rainfall, mm (0-300)
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        rainfall: String,

        /// Farm location
        #[arg(short = 'l', long)]
        location: String,

        /// clay, sandy, loamy, chalky, peaty or silty
        #[arg(short = 's', long)]
        soil_type: String,

        /// Number of crops to show
        #[arg(long, default_value_t = cropwise_core::config::DEFAULT_TOP_N)]
        top: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Crop catalog CSV to use instead of the embedded one
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },

    /// Validate a saved input record (the JSON held in session storage)
    Check {
        /// Path to the JSON record
        path: String,

        /// Also rank crops for the record
        #[arg(long)]
        recommend: bool,

        /// Crop catalog CSV to use instead of the embedded one
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },

    /// List the crops in the catalog
    Catalog {
        /// Only crops that prefer this soil type
        #[arg(short = 's', long)]
        soil_type: Option<String>,

        /// Crop catalog CSV to use instead of the embedded one
        #[arg(short = 'c', long)]
        catalog: Option<String>,
    },

    /// Rate a password the way the registration form does
    Strength {
        password: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Recommend {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
            location,
            soil_type,
            top,
            json,
            catalog,
        } => {
            let readings = recommend::Readings {
                nitrogen,
                phosphorus,
                potassium,
                temperature,
                humidity,
                ph,
                rainfall,
                location,
                soil_type,
            };
            recommend::run_recommend(readings, top, json, catalog.as_deref()).await
        }
        Command::Check {
            path,
            recommend,
            catalog,
        } => {
            recommend::run_check(&path, recommend, catalog.as_deref()).await
        }
        Command::Catalog {
            soil_type,
            catalog,
        } => {
            catalog::run_catalog(soil_type.as_deref(), catalog.as_deref()).await
        }
        Command::Strength { password } => {
            strength::run_strength(&password);
            Ok(())
        }
    }
}
