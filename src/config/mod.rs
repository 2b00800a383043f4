use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "call-proxy")]
#[command(about = "Shows a method call being intercepted and forwarded")]
pub struct CliConfig {
    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}
