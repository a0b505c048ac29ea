use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = reelmood_cli::Args::parse();
	reelmood_cli::run(args)
}
