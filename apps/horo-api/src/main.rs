use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = horo_api::Args::parse();

	horo_api::run(args).await
}
