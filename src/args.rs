use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gacookie",
    about = "Parse Google Analytics __utmz and __utma cookie values into structured records",
    version,
    long_about = None
)]
pub struct Args {
    /// Raw __utmz (referral/campaign) cookie value
    #[arg(short = 'z', long)]
    pub utmz: Option<String>,

    /// Raw __utma (visitor) cookie value
    #[arg(short = 'a', long)]
    pub utma: Option<String>,

    /// Emit the parsed records as pretty-printed JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
