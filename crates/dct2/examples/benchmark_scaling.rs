//! Compare naive and fast DCT2 scaling on small sizes

use dct2::{benchmark, default_sizes, format_table, reference_curves};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DCT2 Scaling Comparison ===\n");

    // 2^3 .. 2^7 keeps the naive variant tolerable in a demo.
    let sizes = default_sizes(7);
    let records = benchmark(&sizes)?;
    println!("{}", format_table(&records));

    let curves = reference_curves(&records);
    println!("Ideal curves normalized to the measured peaks:");
    println!("{:>6} {:>14} {:>14}", "N", "N^3 [s]", "N^2 log N [s]");
    for ((n, cubic), qlog) in curves
        .sizes
        .iter()
        .zip(&curves.cubic)
        .zip(&curves.quadratic_log)
    {
        println!("{:>6} {:>14.6} {:>14.6}", n, cubic, qlog);
    }

    Ok(())
}
