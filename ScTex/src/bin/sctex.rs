fn main() -> anyhow::Result<()> {
    sctex::cli::run_cli()
}
