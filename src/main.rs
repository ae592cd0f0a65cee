use chrono::NaiveDate;

use tr55::balance::WaterBalance;
use tr55::census::{aggregate_tiles, TileCensus};
use tr55::forcing::DayForcing;
use tr55::tables::Tables;

fn main() {
    env_logger::init();

    let tables = Tables::builtin();

    // A small mixed-development polygon: residential blocks over C
    // soils, a commercial strip, park grass and a rain garden on B.
    let census = TileCensus::from_json(
        r#"{"result": {"cell_count": 200,
                       "distribution": {"c:LI_Residential": 80,
                                        "c:HI_Residential": 40,
                                        "b:Commercial": 30,
                                        "b:UrbanGrass": 40,
                                        "b:RainGarden": 10}}}"#,
    )
    .unwrap();

    // Walk the calendar year, printing the storm days.
    println!("Date       |  P (in) |  Q (in) | ET (in) | Inf (in)");
    println!("-----------|---------|---------|---------|---------");

    let mut annual = WaterBalance::zero();
    let mut annual_pre = WaterBalance::zero();
    let mut annual_precip = 0.0;

    let mut date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    for _ in 0..365 {
        let forcing = DayForcing::date(date);
        let precip = tables.precipitation(date).unwrap();
        let day = aggregate_tiles(tables, forcing, &census, false).unwrap();
        let pre = aggregate_tiles(tables, forcing, &census, true).unwrap();

        if precip >= 1.0 {
            println!(
                "{date} | {:>7.2} | {:>7.3} | {:>7.3} | {:>7.3}",
                precip, day.runoff, day.et, day.infiltration
            );
        }

        annual.add_scaled(&day, 1.0);
        annual_pre.add_scaled(&pre, 1.0);
        annual_precip += precip;
        date = date.succ_opt().unwrap();
    }

    // Annual water balance, developed versus pre-settlement baseline.
    println!(
        "\nAnnual (developed):     P={:.1}, Q={:.1}, ET={:.1}, Inf={:.1}",
        annual_precip, annual.runoff, annual.et, annual.infiltration
    );
    println!(
        "Annual (pre-Columbian): P={:.1}, Q={:.1}, ET={:.1}, Inf={:.1}",
        annual_precip, annual_pre.runoff, annual_pre.et, annual_pre.infiltration
    );
}
