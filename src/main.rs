fn main() -> anyhow::Result<()> {
    ping_extract::cli::run()
}
