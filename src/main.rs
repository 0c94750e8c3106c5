fn main() -> anyhow::Result<()> {
    scoperoute::cli::run_cli()
}
