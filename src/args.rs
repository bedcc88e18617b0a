use clap::Parser;

/// This is a raffle program: it draws a third, a second and a first place among a list of participants.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the settings of the raffle. The other flags override
    /// the values it contains.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, optional) The list of participants: a spreadsheet or a CSV file with a header row,
    /// the names in the first column and the handles in the second column. Another list can be
    /// loaded later with the `load` command.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (xlsx or csv) The type of the input. By default, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using a spreadsheet, the name of the worksheet to read. Defaults to the first worksheet.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (directory path, optional) A directory containing third-place.png, second-place.png and
    /// first-place.png, shown for each prize.
    #[clap(long, value_parser)]
    pub images_dir: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the winners will be written in JSON format to the
    /// given location when the program ends. An empty value writes nothing, even when the
    /// configuration names an output file.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (integer, optional) Seeds the random draws, to make them reproducible.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// (default 20) The number of names shown before a winner is revealed.
    #[clap(long, value_parser)]
    pub ticks: Option<u32>,

    /// (default 100) The delay between two names of the animation, in milliseconds.
    #[clap(long, value_parser)]
    pub interval_ms: Option<u64>,

    /// If passed as an argument, all the remaining prizes are drawn right after loading, without
    /// waiting for commands.
    #[clap(long, takes_value = false)]
    pub auto: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
