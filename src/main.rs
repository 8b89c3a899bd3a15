fn main() -> anyhow::Result<()> {
    meowly::run()
}
