use roaring_sizecmp::{
    CRoaringMeter, Format, RoaringRsMeter, SizeMeter, Stats, Suite,
};

fn main() {
    let meters: [&dyn SizeMeter; 2] = [&CRoaringMeter, &RoaringRsMeter];

    for scenario in &Suite::default() {
        let values = scenario.regime.generate().expect("built-in regime");

        println!("[{}]", scenario.description);
        println!("{:#?}", Stats::of(&values));
        for meter in meters {
            println!(
                "{:>12}: portable {:7} B, native {:7} B",
                meter.name(),
                meter.measure(&values, Format::Portable),
                meter.measure(&values, Format::Native)
            );
        }
        println!();
    }
}
