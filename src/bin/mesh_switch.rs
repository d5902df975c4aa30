fn main() -> anyhow::Result<()> {
    cubefield::run_demo(cubefield::config::DemoConfig::mesh_switch())
}
