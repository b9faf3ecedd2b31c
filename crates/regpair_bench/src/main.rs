use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let config = regpair_bench::config_from_args(std::env::args().skip(1))?;
    let reports = regpair_bench::run(&config)?;

    for report in &reports {
        println!("{}", report);
    }
    println!(
        "All {} workload(s) agree across both register layouts",
        reports.len()
    );
    Ok(())
}
