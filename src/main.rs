fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("clipstash-worker")
        .build()?;

    runtime.block_on(clipstash::bootstrap::run())
}
