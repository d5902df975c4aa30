fn main() -> anyhow::Result<()> {
    cubefield::run_demo(cubefield::config::DemoConfig::instanced())
}
