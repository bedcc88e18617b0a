use crate::args::Args;
use crate::draw::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrizeImagesConfig {
    pub third: Option<String>,
    pub second: Option<String>,
    pub first: Option<String>,
}

/// The raffle settings, as written in the JSON configuration file.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaffleConfig {
    pub title: Option<String>,
    #[serde(rename = "participantsFile")]
    pub participants_file: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "imagesDirectory")]
    pub images_directory: Option<String>,
    #[serde(rename = "prizeImages")]
    pub prize_images: Option<PrizeImagesConfig>,
    #[serde(rename = "animationTicks")]
    pub animation_ticks: Option<u32>,
    #[serde(rename = "animationIntervalMs")]
    pub animation_interval_ms: Option<u64>,
    #[serde(rename = "randomSeed")]
    pub random_seed: Option<u64>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
}

pub fn read_config(path: &str) -> RaffleResult<RaffleConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_config: content: {:?}", contents);
    let config: RaffleConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}

/// The source of a participant list.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct InputSource {
    pub path: String,
    pub input_type: Option<String>,
    pub worksheet: Option<String>,
}

/// Everything needed to run a raffle, after merging the configuration file and the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DrawSettings {
    pub title: String,
    pub input: Option<InputSource>,
    pub images: PrizeImages,
    pub shuffle: ShuffleConfig,
    pub seed: Option<u64>,
    pub out: Option<String>,
    pub auto: bool,
}

impl DrawSettings {
    pub const DEFAULT_TITLE: &'static str = "Prize draw";

    pub fn from_args(args: &Args) -> RaffleResult<DrawSettings> {
        let (config, root) = match &args.config {
            Some(p) => {
                info!("Reading configuration {:?}", p);
                let root = Path::new(p)
                    .parent()
                    .map(|x| x.to_path_buf())
                    .unwrap_or_default();
                (read_config(p)?, Some(root))
            }
            None => (RaffleConfig::default(), None),
        };
        Ok(DrawSettings::merge(&config, root.as_deref(), args))
    }

    /// Command line values win over the configuration file. Relative paths of the
    /// configuration file are taken from `root`.
    pub fn merge(config: &RaffleConfig, root: Option<&Path>, args: &Args) -> DrawSettings {
        let resolve = |p: &String| -> String {
            match root {
                Some(r) => r.join(p).display().to_string(),
                None => p.clone(),
            }
        };

        let input_path = args
            .input
            .clone()
            .or_else(|| config.participants_file.as_ref().map(resolve));
        let input = input_path.map(|path| InputSource {
            path,
            input_type: args.input_type.clone().or_else(|| config.input_type.clone()),
            worksheet: args
                .excel_worksheet_name
                .clone()
                .or_else(|| config.excel_worksheet_name.clone()),
        });

        let images_dir = args
            .images_dir
            .clone()
            .or_else(|| config.images_directory.as_ref().map(resolve));
        let mut images = match images_dir {
            Some(dir) => PrizeImages::from_directory(Path::new(&dir)),
            None => PrizeImages::none(),
        };
        if let Some(pi) = &config.prize_images {
            images.set(Prize::Third, pi.third.as_ref().map(resolve));
            images.set(Prize::Second, pi.second.as_ref().map(resolve));
            images.set(Prize::First, pi.first.as_ref().map(resolve));
        }

        let mut shuffle = ShuffleConfig::DEFAULT;
        if let Some(t) = args.ticks.or(config.animation_ticks) {
            shuffle.ticks = t;
        }
        if let Some(ms) = args.interval_ms.or(config.animation_interval_ms) {
            shuffle.interval = Duration::from_millis(ms);
        }

        // An empty location turns the summary off, also over a configured file.
        let out = match (&args.out, &config.output_file) {
            (Some(o), _) => Some(o.clone()),
            (None, Some(o)) if o.trim().is_empty() || o == "stdout" => Some(o.clone()),
            (None, Some(o)) => Some(resolve(o)),
            (None, None) => None,
        }
        .filter(|o| !o.trim().is_empty());

        DrawSettings {
            title: config
                .title
                .clone()
                .unwrap_or_else(|| DrawSettings::DEFAULT_TITLE.to_string()),
            input,
            images,
            shuffle,
            seed: args.seed.or(config.random_seed),
            out,
            auto: args.auto,
        }
    }
}
