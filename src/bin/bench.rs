/// Benchmark tr55: 1000 iterations of a full sample year aggregated
/// over a six-class census.
use chrono::{Days, NaiveDate};
use std::time::Instant;
use tr55::census::{aggregate_tiles, TileCensus};
use tr55::forcing::DayForcing;
use tr55::tables::Tables;

fn main() {
    let tables = Tables::builtin();
    let census = TileCensus::from_json(
        r#"{"result": {"cell_count": 1000,
                       "distribution": {"a:Water": 10,
                                        "b:LI_Residential": 270,
                                        "c:HI_Residential": 300,
                                        "c:Commercial": 42,
                                        "b:DeciduousForest": 278,
                                        "d:Cultivated": 100}}}"#,
    )
    .unwrap();

    // One calendar year of date forcings.
    let start_date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    let days: Vec<DayForcing> = (0..365u64)
        .map(|i| DayForcing::date(start_date + Days::new(i)))
        .collect();

    // Warmup
    for &forcing in &days {
        aggregate_tiles(tables, forcing, &census, false).unwrap();
    }

    // Benchmark
    let n_iters = 1000;
    let start = Instant::now();
    for _ in 0..n_iters {
        for &forcing in &days {
            aggregate_tiles(tables, forcing, &census, false).unwrap();
        }
    }
    let elapsed = start.elapsed();

    let total_days = days.len() * n_iters;
    let secs = elapsed.as_secs_f64();
    println!(
        "Rust:           {} runs x {} days = {} aggregated days",
        n_iters,
        days.len(),
        total_days
    );
    println!("  Total time:  {:.3}s", secs);
    println!("  Per year:    {:.3}ms", secs / n_iters as f64 * 1000.0);
    println!(
        "  Throughput:  {:.0} days/sec",
        total_days as f64 / secs
    );
}
