use safe_arith::Variant;

fn main() -> anyhow::Result<()> {
    safe_arith::cli::run(Variant::Dynamic)
}
